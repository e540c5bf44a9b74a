//! # Face Risks
//!
//! Per-triangle risk records addressed by ordinal face index.

use serde::{Deserialize, Serialize};

/// Category of a geometric manufacturability risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    /// Locally thin cross-section.
    ThinWall,
    /// Surface nearly parallel to the pull direction.
    Undercut,
    /// Acute corner angle.
    SharpCorner,
}

impl RiskKind {
    /// Returns the wire name of this kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfm_types::RiskKind;
    ///
    /// assert_eq!(RiskKind::SharpCorner.as_str(), "sharp_corner");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            RiskKind::ThinWall => "thin_wall",
            RiskKind::Undercut => "undercut",
            RiskKind::SharpCorner => "sharp_corner",
        }
    }

    /// Recognizes the risk kind a human-readable finding refers to.
    ///
    /// Matching is case-insensitive and keyword based, so both
    /// `"Critical thin walls detected (0.50mm)"` and
    /// `"Wall thickness below minimum for metal manufacturing"` map to
    /// [`RiskKind::ThinWall`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfm_types::RiskKind;
    ///
    /// assert_eq!(RiskKind::from_finding("3 sharp corners detected"), Some(RiskKind::SharpCorner));
    /// assert_eq!(RiskKind::from_finding("Large part volume"), None);
    /// ```
    pub fn from_finding(text: &str) -> Option<RiskKind> {
        let text = text.to_lowercase();
        if text.contains("undercut") {
            Some(RiskKind::Undercut)
        } else if text.contains("sharp corner") {
            Some(RiskKind::SharpCorner)
        } else if text.contains("thin wall") || text.contains("wall thickness") {
            Some(RiskKind::ThinWall)
        } else {
            None
        }
    }
}

impl std::fmt::Display for RiskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A risk attached to one triangle of a mesh.
///
/// `face_index` is the 0-based ordinal of the triangle in the mesh's face
/// sequence, with the same convention for indexed and non-indexed meshes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceRisk {
    pub face_index: usize,
    #[serde(rename = "type")]
    pub kind: RiskKind,
    /// Advisory only; not used for coloring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<f64>,
    /// Normalized score in `[0, 1]`.
    pub risk_score: f64,
}

impl FaceRisk {
    /// Creates a face risk, clamping the score to `[0, 1]`.
    pub fn new(face_index: usize, kind: RiskKind, risk_score: f64) -> Self {
        Self {
            face_index,
            kind,
            severity: None,
            risk_score: config::constants::unit_clamp(risk_score),
        }
    }

    /// Attaches an advisory severity.
    pub fn with_severity(mut self, severity: f64) -> Self {
        self.severity = Some(severity);
        self
    }
}
