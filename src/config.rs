//! Configuration management for the phone book crawler.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file. Nothing here writes to stdout, which is reserved for lookup
//! results.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Environment variable naming the JSON seed file.
pub const DATA_FILE_VAR: &str = "PHONEBOOK_DATA_FILE";

/// Environment variable for the fallback log filter.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

const DEFAULT_DATA_FILE: &str = "phonebook.json";
const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for the phone book crawler.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding the directory entries (default: "phonebook.json")
    pub data_file: PathBuf,

    /// Log level used when RUST_LOG is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_DATA_FILE`: path of the JSON seed file (default: "phonebook.json")
    /// - `LOG_LEVEL`: logging level (default: "error")
    ///
    /// A missing `.env` file is fine; a malformed one is an error.
    pub fn from_env() -> ConfigResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let data_file = match env::var(DATA_FILE_VAR) {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: DATA_FILE_VAR.to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let log_level = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            data_file,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
