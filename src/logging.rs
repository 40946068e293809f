//! Tracing setup. `RUST_LOG` takes precedence over the configured filter.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub default_filter: String,
    pub include_location: bool,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "warn,usergrid=info".to_string(),
            include_location: cfg!(debug_assertions),
            ansi: true,
        }
    }
}

impl LoggingConfig {
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let console = fmt::layer()
        .with_target(true)
        .with_ansi(config.ansi)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(console)
        .try_init()?;

    tracing::info!(filter = %config.default_filter, "logging initialized");
    Ok(())
}
