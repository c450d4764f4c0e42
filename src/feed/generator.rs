//! Timer-driven emission of synthetic sales
//!
//! The generator owns the aggregate and a single scheduler task. The
//! scheduler first fires a staggered startup burst so dashboards fill
//! quickly, then runs a fixed-rate ticker where every tick spawns one
//! emission after a fresh random delay - the double timer is what gives the
//! feed its irregular, human-feeling arrival pattern.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use rand::Rng;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::GeneratorSettings;
use crate::domain::sale::{Payment, SalesSnapshot};
use crate::domain::types::{EventTime, PaymentId};
use crate::error::{Error, Result};
use crate::feed::aggregate::SalesAggregate;
use crate::feed::catalog;

/// Synthetic sales feed with an explicit start/stop lifecycle.
///
/// The feed is silent until [`start`](Self::start) is called by the
/// embedding layer; until then (and at any time after)
/// [`snapshot`](Self::snapshot) returns the current aggregate, which starts
/// zeroed/empty.
pub struct SalesFeedGenerator {
    settings: GeneratorSettings,
    aggregate: Arc<RwLock<SalesAggregate>>,
    snapshot_tx: watch::Sender<SalesSnapshot>,
    scheduler: Option<JoinHandle<()>>,
}

impl SalesFeedGenerator {
    pub fn new(settings: GeneratorSettings) -> Result<Self> {
        settings.validate()?;
        let aggregate = Arc::new(RwLock::new(SalesAggregate::new(
            settings.chart_window_size,
            settings.payments_window_size,
        )));
        let (snapshot_tx, _) = watch::channel(SalesSnapshot::default());
        Ok(Self {
            settings,
            aggregate,
            snapshot_tx,
            scheduler: None,
        })
    }

    /// Begin emitting. Must be called from within a tokio runtime.
    pub fn start(&mut self) -> Result<()> {
        if self.scheduler.is_some() {
            return Err(Error::AlreadyStarted);
        }
        info!(
            burst = self.settings.initial_burst_count,
            tick_ms = self.settings.tick_interval_ms,
            "starting synthetic sales feed"
        );
        let handle = tokio::spawn(run_schedule(
            self.settings.clone(),
            Arc::clone(&self.aggregate),
            self.snapshot_tx.clone(),
        ));
        self.scheduler = Some(handle);
        Ok(())
    }

    /// Stop emitting. Aborting the scheduler also cancels the startup burst
    /// and any delayed emissions it still has in flight; already recorded
    /// state is kept. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.scheduler.take() {
            handle.abort();
            info!("synthetic sales feed stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_some()
    }

    /// Emit one synthetic sale immediately, outside any schedule.
    pub fn emit_event(&self) {
        emit_event(&self.aggregate, &self.snapshot_tx);
    }

    /// The current aggregate at this point in time
    pub fn snapshot(&self) -> SalesSnapshot {
        self.aggregate.read().snapshot()
    }

    /// Subscribe to snapshot changes instead of polling
    pub fn subscribe(&self) -> watch::Receiver<SalesSnapshot> {
        self.snapshot_tx.subscribe()
    }
}

impl Drop for SalesFeedGenerator {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The scheduler task: startup burst, then tick-plus-random-delay emission.
async fn run_schedule(
    settings: GeneratorSettings,
    aggregate: Arc<RwLock<SalesAggregate>>,
    snapshot_tx: watch::Sender<SalesSnapshot>,
) {
    let started_at = Instant::now();

    // Startup burst at i * stagger offsets so the UI fills quickly
    for i in 0..settings.initial_burst_count {
        if i > 0 {
            sleep(settings.initial_burst_stagger()).await;
        }
        emit_event(&aggregate, &snapshot_tx);
    }

    // Recurring schedule, anchored at activation so the first tick lands one
    // full interval after start regardless of how long the burst took
    let mut ticker = interval_at(started_at + settings.tick_interval(), settings.tick_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // Delayed emissions live in the JoinSet, so aborting the scheduler
    // cancels them along with it
    let mut pending = JoinSet::new();
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let delay_ms = rand::thread_rng()
                    .gen_range(settings.min_emit_delay_ms..settings.max_emit_delay_ms);
                debug!(delay_ms, "scheduling delayed sale");
                let aggregate = Arc::clone(&aggregate);
                let snapshot_tx = snapshot_tx.clone();
                pending.spawn(async move {
                    sleep(Duration::from_millis(delay_ms)).await;
                    emit_event(&aggregate, &snapshot_tx);
                });
            }
            Some(_) = pending.join_next() => {}
        }
    }
}

/// Draw one synthetic sale, fold it into the aggregate, publish the result.
fn emit_event(aggregate: &RwLock<SalesAggregate>, snapshot_tx: &watch::Sender<SalesSnapshot>) {
    let payment = {
        let mut rng = rand::thread_rng();
        Payment {
            id: PaymentId::generate(),
            amount: catalog::random_amount(&mut rng),
            product: catalog::random_product(&mut rng),
            customer: catalog::random_customer(&mut rng),
            time: EventTime::now(),
        }
    };
    debug!(
        amount = payment.amount.into_inner(),
        product = %payment.product,
        customer = %payment.customer,
        "recording synthetic sale"
    );

    // Publishing while still holding the lock keeps the watch history in
    // fold order; released earlier, two overlapping emissions could publish
    // out of order and show subscribers regressing totals. send_replace
    // publishes even when no subscriber is listening yet.
    let mut aggregate = aggregate.write();
    aggregate.record(payment);
    let _ = snapshot_tx.send_replace(aggregate.snapshot());
}
