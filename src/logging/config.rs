//! Logging configuration
//!
//! Log level, console output and an optional rolling JSON log file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How often the log file rolls over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl From<LogRotation> for tracing_appender::rolling::Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Hourly => Self::HOURLY,
            LogRotation::Daily => Self::DAILY,
            LogRotation::Never => Self::NEVER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable console output
    pub console_output: bool,

    /// Directory for JSON log files (None = no file logging)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_directory: Option<PathBuf>,

    /// Include file and line in console output
    pub include_file_location: bool,

    pub rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console_output: true,
            log_directory: None,
            include_file_location: false,
            rotation: LogRotation::default(),
        }
    }
}

impl LoggingConfig {
    /// Raise the level from a `-v` count: 1 is debug, 2 or more is trace.
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        match verbose {
            0 => {}
            1 => self.level = "debug".to_string(),
            _ => self.level = "trace".to_string(),
        }
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !VALID_LEVELS.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.level, VALID_LEVELS
            ));
        }

        if let Some(ref log_dir) = self.log_directory {
            if log_dir.is_file() {
                return Err(format!("Log directory is a file: {:?}", log_dir));
            }
        }

        Ok(())
    }
}
