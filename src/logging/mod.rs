//! Structured logging for the manipulator
//!
//! A `tracing` subscriber with an env filter, a console layer and an
//! optional JSON file layer.

pub mod config;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub use config::{LogRotation, LoggingConfig};

pub const LOG_FILE_PREFIX: &str = "manipulator";

/// Initialize the logging system with the provided configuration.
///
/// `RUST_LOG` takes precedence over `config.level`. The returned guard
/// flushes the file writer on drop and must be held for the program's
/// lifetime when file logging is enabled.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    config.validate().map_err(anyhow::Error::msg)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers = Vec::new();

    if config.console_output {
        let console_layer = fmt::layer()
            .with_target(false)
            .with_line_number(config.include_file_location)
            .with_file(config.include_file_location);
        layers.push(console_layer.boxed());
    }

    let mut guard = None;
    if let Some(ref log_dir) = config.log_directory {
        let file_appender = RollingFileAppender::builder()
            .rotation(config.rotation.into())
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix("log")
            .build(log_dir)
            .with_context(|| format!("Failed to open log directory {}", log_dir.display()))?;
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker_guard);

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .json();
        layers.push(file_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    tracing::debug!(?config, "Logging initialized");
    Ok(guard)
}
