//! Runtime settings for the advisory fusion step.

use std::time::Duration;

use thiserror::Error;

use crate::constants::ADVISORY_TIMEOUT_SECS;

/// Immutable snapshot of the advisory fusion settings.
///
/// # Examples
/// ```
/// use config::FusionConfig;
/// let config = FusionConfig::default();
/// assert_eq!(config.timeout.as_secs(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FusionConfig {
    /// Hard deadline for the external advisory call.
    pub timeout: Duration,
}

impl FusionConfig {
    /// Builds a configuration, rejecting a zero deadline.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use config::FusionConfig;
    /// let cfg = FusionConfig::new(Duration::from_secs(5)).expect("valid config");
    /// assert_eq!(cfg.timeout.as_secs(), 5);
    /// ```
    pub fn new(timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self { timeout })
    }
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(ADVISORY_TIMEOUT_SECS),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Raised when the advisory deadline is zero.
    #[error("advisory timeout must be greater than zero")]
    ZeroTimeout,
}
