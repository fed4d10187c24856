//! Meter configuration
//!
//! Reads tuning knobs from the environment.

use std::num::ParseIntError;
use std::time::Duration;
use thiserror::Error;

pub const DEBOUNCE_ENV: &str = "PWD_METER_DEBOUNCE_MS";

/// Default delay before an async evaluation runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {var} value {value:?}: {source}", var = DEBOUNCE_ENV)]
    InvalidDebounce {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterConfig {
    /// Wait applied by `evaluate_password_strength_tx` before evaluating.
    pub debounce: Duration,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl MeterConfig {
    /// Loads configuration from the environment.
    ///
    /// Set `PWD_METER_DEBOUNCE_MS` to override the debounce delay.
    /// If not set, defaults to 300 milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDebounce`] if the variable is set but is
    /// not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(DEBOUNCE_ENV) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|source| ConfigError::InvalidDebounce {
                    value: raw.clone(),
                    source,
                })?;
            config.debounce = Duration::from_millis(millis);

            #[cfg(feature = "tracing")]
            tracing::debug!("Debounce overridden from env: {}ms", millis);
        }

        Ok(config)
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}
