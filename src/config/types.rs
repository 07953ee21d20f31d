//! Configuration types.
//!
//! These structures are deserialized from the optional YAML configuration
//! file. Every key has a default, so an empty document is valid.

use serde::Deserialize;

/// How the roster table is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayFormat {
    /// Fixed-width text table.
    #[default]
    Table,
    /// Pretty-printed JSON array of rows.
    Json,
}

/// Display surface settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Title printed above the text table.
    pub title: String,
    /// Output format.
    pub format: DisplayFormat,
    /// Decimal places used for the pay column in the text table.
    pub pay_decimal_places: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Payroll System".to_string(),
            format: DisplayFormat::Table,
            pay_decimal_places: 2,
        }
    }
}

/// Log verbosity for the binary's subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Everything.
    Trace,
    /// Debug and above.
    Debug,
    /// Info and above.
    Info,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Errors only.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level written to stderr.
    pub level: LogLevel,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display surface settings.
    pub display: DisplayConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}
