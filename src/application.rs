use tokio::signal;
use tracing::{debug, info, instrument};

use crate::config::Settings;
use crate::feed::SalesFeedGenerator;
use crate::Result;

/// Main application struct that wires the feed to its consumers
pub struct Application {
    settings: Settings,
    generator: SalesFeedGenerator,
}

impl Application {
    #[instrument]
    pub fn new() -> Result<Self> {
        let settings = Settings::new()?;
        let generator = SalesFeedGenerator::new(settings.generator.clone())?;
        Ok(Self {
            settings,
            generator,
        })
    }

    /// Start the feed and log each snapshot change until ctrl-c.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> Result<()> {
        info!(
            environment = %self.settings.application.environment,
            "starting Sales Pulse feed"
        );

        let mut snapshots = self.generator.subscribe();
        self.generator.start()?;

        loop {
            tokio::select! {
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = snapshots.borrow_and_update().clone();
                    info!(
                        total_revenue = snapshot.total_revenue,
                        sales_count = snapshot.sales_count,
                        average_sale = snapshot.average_sale,
                        chart_points = snapshot.sales_chart_data.len(),
                        "sales updated"
                    );
                    let rendered = serde_json::to_string(&snapshot)?;
                    debug!(snapshot = %rendered, "full snapshot");
                }
                _ = signal::ctrl_c() => {
                    info!("shutdown requested");
                    break;
                }
            }
        }

        self.generator.stop();
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
