//! Log output setup for the binary.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// How logs are filtered and formatted.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Force debug level regardless of `RUST_LOG`
    pub verbose: bool,
    /// Emit one JSON object per event instead of text
    pub json_logs: bool,
}

impl LoggingConfig {
    /// Filter directive in effect for this configuration.
    ///
    /// `--verbose` wins; otherwise `RUST_LOG` is honored, falling back to `info`.
    pub fn filter(&self) -> EnvFilter {
        if self.verbose {
            return EnvFilter::new("debug");
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Install the global subscriber.
///
/// Logs go to stderr; stdout belongs to the console approval surface.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(config.filter())
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
