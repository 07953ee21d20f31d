//! Configuration loading for the payroll roster.
//!
//! Configuration is optional. When no file is given the defaults reproduce
//! a plain text table titled "Payroll System" with warnings logged to stderr.
//!
//! # Example
//!
//! ```no_run
//! use payroll_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./payroll.yaml").unwrap();
//! println!("Title: {}", config.config().display.title);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DisplayConfig, DisplayFormat, LogLevel, LoggingConfig};
