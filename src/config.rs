use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub generator: GeneratorSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub environment: String,
}

/// Timing and window parameters for the synthetic feed.
///
/// The defaults reproduce the canonical demo cadence: a 10-event startup
/// burst staggered 100ms apart, then one sale every 2s tick after a random
/// 1-5s delay, with 50-point chart windows and a 10-entry payment feed.
#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorSettings {
    pub initial_burst_count: u32,
    pub initial_burst_stagger_ms: u64,
    pub tick_interval_ms: u64,
    pub min_emit_delay_ms: u64,
    pub max_emit_delay_ms: u64,
    pub chart_window_size: usize,
    pub payments_window_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Settings {
    pub fn new() -> Result<Self> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("application.environment", environment.clone())?
            .set_default("generator.initial_burst_count", 10)?
            .set_default("generator.initial_burst_stagger_ms", 100)?
            .set_default("generator.tick_interval_ms", 2000)?
            .set_default("generator.min_emit_delay_ms", 1000)?
            .set_default("generator.max_emit_delay_ms", 5000)?
            .set_default("generator.chart_window_size", 50)?
            .set_default("generator.payments_window_size", 10)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("SALES_PULSE").separator("__"))
            .build()?;

        let settings: Self = config.try_deserialize()?;
        settings.generator.validate()?;
        Ok(settings)
    }
}

impl GeneratorSettings {
    /// Reject parameter combinations the schedulers cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(Error::invalid_settings("tick_interval_ms must be above 0"));
        }
        if self.min_emit_delay_ms >= self.max_emit_delay_ms {
            return Err(Error::invalid_settings(format!(
                "min_emit_delay_ms ({}) must be below max_emit_delay_ms ({})",
                self.min_emit_delay_ms, self.max_emit_delay_ms
            )));
        }
        if self.chart_window_size == 0 {
            return Err(Error::invalid_settings("chart_window_size must be above 0"));
        }
        if self.payments_window_size == 0 {
            return Err(Error::invalid_settings(
                "payments_window_size must be above 0",
            ));
        }
        Ok(())
    }

    pub fn initial_burst_stagger(&self) -> Duration {
        Duration::from_millis(self.initial_burst_stagger_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            initial_burst_count: 10,
            initial_burst_stagger_ms: 100,
            tick_interval_ms: 2000,
            min_emit_delay_ms: 1000,
            max_emit_delay_ms: 5000,
            chart_window_size: 50,
            payments_window_size: 10,
        }
    }
}
