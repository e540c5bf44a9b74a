//! # DFM Risk
//!
//! Rule-based aggregation of part metadata into a [`RiskReport`].
//!
//! ## Architecture
//!
//! ```text
//! RiskParams (explicit overrides)
//!        ↓ take precedence over
//! PartContext (defaults from the host)
//!        ↓
//! rule table → risks, recommendations, severity, score
//! ```
//!
//! [`try_analyze`] surfaces faults as [`RiskError`]; [`analyze`] is the
//! never-fail boundary that degrades to [`RiskReport::degraded`].
//!
//! ## Usage
//!
//! ```rust
//! use dfm_risk::analyze;
//! use dfm_types::{PartContext, RiskParams, Severity};
//!
//! let params = RiskParams { wall_thickness: Some(0.5), ..RiskParams::default() };
//! let report = analyze(&params, &PartContext::default());
//! assert_eq!(report.severity, Severity::High);
//! ```

pub mod error;
pub mod rules;

pub use error::RiskError;
pub use rules::{analyze, try_analyze};

pub use dfm_types::RiskReport;
