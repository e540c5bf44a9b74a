//! # Risk Reports
//!
//! Holistic part-level reports and their fused advisory form.

use config::constants::FALLBACK_MANUFACTURABILITY_SCORE;
use serde::{Deserialize, Serialize};

/// Overall severity class of a report. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// Raises the severity to at least `floor`; never lowers it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfm_types::Severity;
    ///
    /// assert_eq!(Severity::Low.at_least(Severity::Medium), Severity::Medium);
    /// assert_eq!(Severity::High.at_least(Severity::Medium), Severity::High);
    /// ```
    #[inline]
    pub fn at_least(self, floor: Severity) -> Severity {
        self.max(floor)
    }
}

/// Part-level risk report produced by the rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub risks: Vec<String>,
    pub severity: Severity,
    pub recommendations: Vec<String>,
    /// Higher is better, always within `[0, 1]`.
    pub manufacturability_score: f64,
}

impl RiskReport {
    /// The safe report returned when analysis hits an internal fault.
    pub fn degraded() -> Self {
        Self {
            risks: vec!["Error analyzing DFM risks".to_string()],
            severity: Severity::Medium,
            recommendations: vec!["Please check part geometry and try again".to_string()],
            manufacturability_score: FALLBACK_MANUFACTURABILITY_SCORE,
        }
    }
}

/// How a fused report was produced.
///
/// Only [`FusionStatus::Fused`] and [`FusionStatus::LocalOnly`] are clean
/// outcomes; every other variant means the advisory contribution is missing
/// and the narrative explains why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FusionStatus {
    /// Local and advisory results were merged.
    Fused,
    /// Advisory step skipped by the recursion guard.
    LocalOnly,
    /// The advisory service answered but reported its own internal error.
    AdvisoryDegraded,
    /// The advisory call missed its deadline.
    #[serde(rename_all = "camelCase")]
    AdvisoryTimedOut { after_ms: u64 },
    /// The advisory call was rejected.
    AdvisoryFailed { reason: String },
    /// The local analysis itself failed; nothing else was attempted.
    LocalFailed { reason: String },
}

impl FusionStatus {
    /// Returns true when the caller should surface a warning.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfm_types::FusionStatus;
    ///
    /// assert!(!FusionStatus::Fused.is_warning());
    /// assert!(FusionStatus::AdvisoryTimedOut { after_ms: 30_000 }.is_warning());
    /// ```
    pub fn is_warning(&self) -> bool {
        !matches!(self, FusionStatus::Fused | FusionStatus::LocalOnly)
    }
}

/// A risk report enriched by the advisory service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FusedReport {
    pub risks: Vec<String>,
    /// `None` when the local analysis failed and severity is unknown.
    pub severity: Option<Severity>,
    pub recommendations: Vec<String>,
    pub manufacturability_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    pub status: FusionStatus,
}

impl FusedReport {
    /// Wraps a local report unchanged.
    pub fn from_local(report: RiskReport, status: FusionStatus, narrative: Option<String>) -> Self {
        Self {
            risks: report.risks,
            severity: Some(report.severity),
            recommendations: report.recommendations,
            manufacturability_score: report.manufacturability_score,
            narrative,
            status,
        }
    }

    /// The minimal report returned when local analysis fails.
    pub fn local_failed(reason: impl Into<String>) -> Self {
        Self {
            risks: vec!["Local DFM failed".to_string()],
            severity: None,
            recommendations: Vec::new(),
            manufacturability_score: 0.0,
            narrative: Some("Local DFM error.".to_string()),
            status: FusionStatus::LocalFailed {
                reason: reason.into(),
            },
        }
    }

    /// Returns true when the caller should surface a warning.
    #[inline]
    pub fn is_warning(&self) -> bool {
        self.status.is_warning()
    }
}
