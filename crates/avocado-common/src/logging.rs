//! Structured logging infrastructure for the avocado report

use serde::Deserialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "avocado_charts=trace")
    pub level: String,
    /// Whether to emit one JSON object per event
    pub json_format: bool,
    /// Whether to enable pretty formatting with colors
    pub pretty_format: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: true,
            include_targets: true,
        }
    }
}

/// Build the level filter, preferring `RUST_LOG` over the configured level
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(
    config: &LoggingConfig,
) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let registry = tracing_subscriber::registry().with(build_filter(&config.level));

    if config.json_format {
        registry
            .with(fmt::layer().json().with_target(config.include_targets))
            .try_init()?;
    } else if config.pretty_format {
        registry
            .with(fmt::layer().pretty().with_target(config.include_targets))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().compact().with_target(config.include_targets))
            .try_init()?;
    }

    Ok(())
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(&LoggingConfig::default())
}
