//! Event and snapshot shapes exposed to the rendering layer

use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerName, EventTime, PaymentId, ProductName, SaleAmount};

/// A fabricated payment, as produced by one emission of the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub amount: SaleAmount,
    pub product: ProductName,
    pub customer: CustomerName,
    pub time: EventTime,
}

/// One point of a dashboard chart series
///
/// The same shape backs both series: in the per-sale chart `sales` is a
/// single sale amount, in the cumulative chart it is the running total at
/// that event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDataPoint {
    pub time: EventTime,
    pub sales: f64,
}

/// The full aggregate exposed to a consumer at a point in time
///
/// Serialized in camelCase so the shape matches the dashboard contract
/// (`totalRevenue`, `salesChartData`, ...). The default value is the
/// zeroed/empty snapshot a consumer sees before the feed starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSnapshot {
    pub total_revenue: f64,
    pub sales_count: u64,
    pub average_sale: f64,
    pub sales_chart_data: Vec<SaleDataPoint>,
    pub cumulative_revenue_data: Vec<SaleDataPoint>,
    pub latest_payments: Vec<Payment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(amount: f64) -> Payment {
        Payment {
            id: PaymentId::generate(),
            amount: SaleAmount::try_new(amount).expect("amount in synthetic range"),
            product: ProductName::new("Premium Widget".to_string()),
            customer: CustomerName::new("Jane Smith".to_string()),
            time: EventTime::new("12:00:00".to_string()),
        }
    }

    #[test]
    fn test_default_snapshot_is_zeroed_and_empty() {
        let snapshot = SalesSnapshot::default();
        assert_eq!(snapshot.total_revenue, 0.0);
        assert_eq!(snapshot.sales_count, 0);
        assert_eq!(snapshot.average_sale, 0.0);
        assert!(snapshot.sales_chart_data.is_empty());
        assert!(snapshot.cumulative_revenue_data.is_empty());
        assert!(snapshot.latest_payments.is_empty());
    }

    #[test]
    fn test_snapshot_serializes_with_dashboard_field_names() {
        let snapshot = SalesSnapshot {
            total_revenue: 123.5,
            sales_count: 1,
            average_sale: 123.5,
            sales_chart_data: vec![SaleDataPoint {
                time: EventTime::new("12:00:00".to_string()),
                sales: 123.5,
            }],
            cumulative_revenue_data: vec![],
            latest_payments: vec![payment(123.5)],
        };

        let json = serde_json::to_value(&snapshot).expect("snapshot serializes");
        assert_eq!(json["totalRevenue"], 123.5);
        assert_eq!(json["salesCount"], 1);
        assert_eq!(json["averageSale"], 123.5);
        assert_eq!(json["salesChartData"][0]["sales"], 123.5);
        assert_eq!(json["latestPayments"][0]["amount"], 123.5);
        assert_eq!(json["latestPayments"][0]["product"], "Premium Widget");
    }
}
