//! The cohesive mutable aggregate behind the feed

use std::collections::VecDeque;

use crate::domain::sale::{Payment, SaleDataPoint, SalesSnapshot};
use crate::feed::window::SlidingWindow;

/// Running totals plus the bounded series exposed to dashboards.
///
/// Every field advances together inside [`SalesAggregate::record`], so a
/// reader holding the lock never observes a partially applied sale and the
/// cross-field invariants (count, totals, window contents) hold from any
/// observer's perspective.
#[derive(Debug, Clone)]
pub struct SalesAggregate {
    total_revenue: f64,
    sales_count: u64,
    sales_chart: SlidingWindow<SaleDataPoint>,
    cumulative_revenue: SlidingWindow<SaleDataPoint>,
    latest_payments: VecDeque<Payment>,
    payments_capacity: usize,
}

impl SalesAggregate {
    pub fn new(chart_window_size: usize, payments_window_size: usize) -> Self {
        Self {
            total_revenue: 0.0,
            sales_count: 0,
            sales_chart: SlidingWindow::new(chart_window_size),
            cumulative_revenue: SlidingWindow::new(chart_window_size),
            latest_payments: VecDeque::with_capacity(payments_window_size),
            payments_capacity: payments_window_size,
        }
    }

    /// Fold one payment into every derived series.
    pub fn record(&mut self, payment: Payment) {
        let amount = payment.amount.into_inner();

        self.total_revenue += amount;
        self.sales_count += 1;

        self.sales_chart.push(SaleDataPoint {
            time: payment.time.clone(),
            sales: amount,
        });

        // The cumulative window trims exactly like the per-sale one, so the
        // visible curve restarts from a non-zero baseline once old points
        // are evicted. Known quirk of the feed contract, kept as-is.
        self.cumulative_revenue.push(SaleDataPoint {
            time: payment.time.clone(),
            sales: self.total_revenue,
        });

        self.latest_payments.push_front(payment);
        self.latest_payments.truncate(self.payments_capacity);
    }

    /// Derive the exposed snapshot; `average_sale` is computed on read.
    pub fn snapshot(&self) -> SalesSnapshot {
        let average_sale = if self.sales_count > 0 {
            self.total_revenue / self.sales_count as f64
        } else {
            0.0
        };

        SalesSnapshot {
            total_revenue: self.total_revenue,
            sales_count: self.sales_count,
            average_sale,
            sales_chart_data: self.sales_chart.to_vec(),
            cumulative_revenue_data: self.cumulative_revenue.to_vec(),
            latest_payments: self.latest_payments.iter().cloned().collect(),
        }
    }
}
