//! Structured logging via the `tracing` crate.
//!
//! Slim setup for a batch CLI: diagnostics go to stderr so stdout stays
//! clean for user-facing output. Off unless enabled through configuration,
//! `--verbose`, or the `FIXITY_LOG` environment variable.

use crate::error::FixityError;
use serde::Deserialize;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "off".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
        }
    }
}

/// Initialize the logging system.
///
/// Priority order (highest to lowest): `FIXITY_LOG` environment variable,
/// then the supplied configuration, then off.
pub fn init_logging(config: &LoggingConfig) -> Result<(), FixityError> {
    let filter = match std::env::var("FIXITY_LOG") {
        Ok(env) => EnvFilter::try_new(env),
        Err(_) => EnvFilter::try_new(&config.level),
    }
    .map_err(|e| FixityError::Config(format!("Invalid log filter: {}", e)))?;

    let base_subscriber = Registry::default().with(filter);

    if config.format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
