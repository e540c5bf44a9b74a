//! # Risk Errors
//!
//! Faults detected while evaluating the rule table.

use thiserror::Error;

/// Errors that can occur during risk aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// A numeric input is NaN or infinite
    #[error("{field} is not a finite number: {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// A physical measurement is negative
    #[error("{field} must not be negative: {value}")]
    Negative { field: &'static str, value: f64 },
}

impl RiskError {
    /// Checks that a measurement is finite and non-negative.
    pub(crate) fn check_measurement(field: &'static str, value: f64) -> Result<f64, RiskError> {
        if !value.is_finite() {
            return Err(RiskError::NonFinite { field, value });
        }
        if value < 0.0 {
            return Err(RiskError::Negative { field, value });
        }
        Ok(value)
    }
}
