//! Cart engine configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `GOLDEN_FIG_CART_PATH` - Path of the persisted cart file (default: cart.json)
//! - `GOLDEN_FIG_DEBOUNCE_MS` - Quiet window before a persistence write, in
//!   milliseconds (default: 300)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::debounce::DEFAULT_WINDOW;

const DEFAULT_CART_PATH: &str = "cart.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart engine configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Path of the file backing the persisted cart slot.
    pub storage_path: PathBuf,
    /// Quiet window between the last mutation and the persistence write.
    pub debounce_window: Duration,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_CART_PATH),
            debounce_window: DEFAULT_WINDOW,
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_path =
            PathBuf::from(get_env_or_default("GOLDEN_FIG_CART_PATH", DEFAULT_CART_PATH));

        let debounce_window = match std::env::var("GOLDEN_FIG_DEBOUNCE_MS") {
            Ok(raw) => parse_debounce_ms(&raw)?,
            Err(_) => DEFAULT_WINDOW,
        };

        Ok(Self {
            storage_path,
            debounce_window,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a `GOLDEN_FIG_DEBOUNCE_MS` value into a quiet window.
fn parse_debounce_ms(raw: &str) -> Result<Duration, ConfigError> {
    let ms: u64 = raw.parse().map_err(|_| {
        ConfigError::InvalidEnvVar(
            "GOLDEN_FIG_DEBOUNCE_MS".to_string(),
            format!("expected milliseconds, got '{raw}'"),
        )
    })?;
    Ok(Duration::from_millis(ms))
}
