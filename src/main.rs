use anyhow::Result;
use sales_pulse::Application;
use tracing::{info, instrument};

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Sales Pulse application");

    let app = Application::new()?;
    app.run().await?;

    Ok(())
}
