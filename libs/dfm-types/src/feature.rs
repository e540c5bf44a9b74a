//! # Feature Catalog
//!
//! Named risk instances produced by feature extraction, and the abstract
//! findings that get matched against them.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::face::RiskKind;

/// One detected feature located on a specific face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureInstance {
    pub face_index: usize,
    pub position: DVec3,
    /// Thickness (mm) for thin walls, angle (degrees) otherwise.
    pub measurement: f64,
}

impl FeatureInstance {
    pub fn new(face_index: usize, position: DVec3, measurement: f64) -> Self {
        Self {
            face_index,
            position,
            measurement,
        }
    }
}

/// Feature instances grouped by risk kind, in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureCatalog {
    pub thin_walls: Vec<FeatureInstance>,
    pub sharp_corners: Vec<FeatureInstance>,
    pub undercuts: Vec<FeatureInstance>,
}

impl FeatureCatalog {
    /// Returns the candidate list for a risk kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfm_types::{FeatureCatalog, RiskKind};
    ///
    /// let catalog = FeatureCatalog::default();
    /// assert!(catalog.candidates(RiskKind::Undercut).is_empty());
    /// ```
    pub fn candidates(&self, kind: RiskKind) -> &[FeatureInstance] {
        match kind {
            RiskKind::ThinWall => &self.thin_walls,
            RiskKind::SharpCorner => &self.sharp_corners,
            RiskKind::Undercut => &self.undercuts,
        }
    }

    /// Total number of instances across all kinds.
    pub fn len(&self) -> usize {
        self.thin_walls.len() + self.sharp_corners.len() + self.undercuts.len()
    }

    /// Returns true if the catalog has no instances.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A risk finding that is not yet tied to a face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbstractRisk {
    #[serde(rename = "type")]
    pub kind: RiskKind,
    pub risk_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<DVec3>,
}

impl AbstractRisk {
    pub fn new(kind: RiskKind, risk_score: f64) -> Self {
        Self {
            kind,
            risk_score,
            position: None,
        }
    }

    /// Attaches an approximate location used to pick the nearest feature.
    pub fn at(mut self, position: DVec3) -> Self {
        self.position = Some(position);
        self
    }
}
