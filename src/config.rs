//! # CLI Configuration
//!
//! Settings for the `batchform` binary, read from environment variables
//! (a `.env` file is loaded first when present).
//!
//! ## Environment Variables
//!
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `BATCHFORM_INPUT`: Path of the JSON payload to read when no path argument
//!   is given (default: stdin)
//! - `BATCHFORM_PRETTY`: Pretty-print the output JSON (default: true)

use std::env;
use std::path::PathBuf;

use eyre::{Result, eyre};
use tracing::Level;

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Log level for the application
    pub log_level: Level,

    /// Payload file; `None` reads stdin
    pub input: Option<PathBuf>,

    /// Pretty-print the submission JSON
    pub pretty: bool,
}

impl CliConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which returns the value of a
    /// variable if set.
    ///
    /// # Errors
    ///
    /// Returns an error if `BATCHFORM_PRETTY` is set to something other than a
    /// boolean.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let input = lookup("BATCHFORM_INPUT")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let pretty = match lookup("BATCHFORM_PRETTY") {
            None => true,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => return Err(eyre!("Invalid BATCHFORM_PRETTY value: {other}")),
            },
        };

        Ok(Self {
            log_level,
            input,
            pretty,
        })
    }
}
