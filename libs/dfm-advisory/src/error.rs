//! # Advisory Errors
//!
//! Faults on the advisory side of fusion. None of these escape
//! [`AdvisoryFusion::fuse`](crate::AdvisoryFusion::fuse); they are folded
//! into the report's status.

use std::time::Duration;

use thiserror::Error;

/// Errors produced by an advisory service call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisoryError {
    /// The call did not resolve before the deadline
    #[error("advisory DFM analysis timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The service rejected the call
    #[error("advisory DFM analysis failed: {0}")]
    Service(String),
}
