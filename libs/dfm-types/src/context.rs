//! # Part Context
//!
//! Scalar descriptors of a candidate part, plus the explicit overrides a
//! caller may pass to the rule table.

use config::constants::{
    DEFAULT_COMPLEXITY, DEFAULT_MANUFACTURABILITY_SCORE, DEFAULT_SURFACE_AREA_CM2,
    DEFAULT_VOLUME_CM3, DEFAULT_WALL_THICKNESS_MM,
};
use serde::{Deserialize, Serialize};

use crate::feature::FeatureCatalog;

/// Metadata describing one part, supplied by the host application.
///
/// Every field has a default, so a missing or partial record deserializes
/// into a usable context.
///
/// # Example
///
/// ```rust
/// use dfm_types::PartContext;
///
/// let context = PartContext::default();
/// assert_eq!(context.wall_thickness, 2.0);
/// assert!(!context.undercuts);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartContext {
    /// Volume in cm³.
    pub volume: f64,
    /// Surface area in cm².
    pub surface_area: f64,
    /// Geometric complexity in `[0, 1]`.
    pub complexity: f64,
    /// Minimum wall thickness in mm.
    pub wall_thickness: f64,
    pub undercuts: bool,
    pub material: Option<String>,
    pub process: Option<String>,
    pub manufacturability_score: f64,
    /// Named feature instances found by feature extraction.
    pub features: FeatureCatalog,
}

impl Default for PartContext {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME_CM3,
            surface_area: DEFAULT_SURFACE_AREA_CM2,
            complexity: DEFAULT_COMPLEXITY,
            wall_thickness: DEFAULT_WALL_THICKNESS_MM,
            undercuts: false,
            material: None,
            process: None,
            manufacturability_score: DEFAULT_MANUFACTURABILITY_SCORE,
            features: FeatureCatalog::default(),
        }
    }
}

impl PartContext {
    /// Number of sharp-corner instances in the feature catalog.
    #[inline]
    pub fn sharp_corner_count(&self) -> usize {
        self.features.sharp_corners.len()
    }
}

/// Explicit rule inputs. Any finite value present here takes precedence
/// over the matching [`PartContext`] field; a NaN or infinite override is
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskParams {
    pub wall_thickness: Option<f64>,
    pub draft_angle: Option<f64>,
    pub has_undercuts: Option<bool>,
    pub complexity: Option<f64>,
    pub volume: Option<f64>,
    pub material: Option<String>,
    pub process: Option<String>,
}

impl RiskParams {
    /// Resolves the effective wall thickness.
    pub fn wall_thickness_or(&self, context: &PartContext) -> f64 {
        finite_or(self.wall_thickness, context.wall_thickness)
    }

    /// Resolves whether undercuts are present.
    pub fn has_undercuts_or(&self, context: &PartContext) -> bool {
        self.has_undercuts.unwrap_or(context.undercuts)
    }

    /// Resolves the effective complexity.
    pub fn complexity_or(&self, context: &PartContext) -> f64 {
        finite_or(self.complexity, context.complexity)
    }

    /// Resolves the effective volume.
    pub fn volume_or(&self, context: &PartContext) -> f64 {
        finite_or(self.volume, context.volume)
    }

    /// Resolves the material, lower-cased; empty when unknown.
    pub fn material_or(&self, context: &PartContext) -> String {
        self.material
            .as_deref()
            .or(context.material.as_deref())
            .unwrap_or_default()
            .to_lowercase()
    }

    /// The draft angle override, when finite. Negative values are a
    /// reverse draft and are kept.
    pub fn draft_angle(&self) -> Option<f64> {
        self.draft_angle.filter(|draft| draft.is_finite())
    }

    /// Resolves the process, lower-cased; empty when unknown.
    pub fn process_or(&self, context: &PartContext) -> String {
        self.process
            .as_deref()
            .or(context.process.as_deref())
            .unwrap_or_default()
            .to_lowercase()
    }
}

fn finite_or(value: Option<f64>, fallback: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let context: PartContext = serde_json::from_str("{}").unwrap();
        assert_eq!(context, PartContext::default());
        assert_eq!(context.volume, 100.0);
        assert_eq!(context.surface_area, 200.0);
        assert_eq!(context.complexity, 0.5);
        assert_eq!(context.manufacturability_score, 0.7);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let context: PartContext =
            serde_json::from_str(r#"{"wallThickness": 0.9, "material": "Aluminum metal"}"#)
                .unwrap();
        assert_eq!(context.wall_thickness, 0.9);
        assert_eq!(context.volume, 100.0);
        assert_eq!(context.material.as_deref(), Some("Aluminum metal"));
    }

    #[test]
    fn test_params_override_context() {
        let context = PartContext {
            wall_thickness: 3.0,
            undercuts: true,
            material: Some("Steel".into()),
            ..PartContext::default()
        };
        let params = RiskParams {
            wall_thickness: Some(0.5),
            has_undercuts: Some(false),
            ..RiskParams::default()
        };
        assert_eq!(params.wall_thickness_or(&context), 0.5);
        assert!(!params.has_undercuts_or(&context));
        assert_eq!(params.complexity_or(&context), 0.5);
        assert_eq!(params.material_or(&context), "steel");
        assert_eq!(params.process_or(&context), "");
    }

    #[test]
    fn test_non_finite_override_falls_back_to_context() {
        let context = PartContext {
            wall_thickness: 1.2,
            ..PartContext::default()
        };
        let params = RiskParams {
            wall_thickness: Some(f64::NAN),
            complexity: Some(f64::INFINITY),
            draft_angle: Some(f64::NAN),
            ..RiskParams::default()
        };
        assert_eq!(params.wall_thickness_or(&context), 1.2);
        assert_eq!(params.complexity_or(&context), 0.5);
        assert_eq!(params.draft_angle(), None);
    }

    #[test]
    fn test_reverse_draft_is_kept() {
        let params = RiskParams {
            draft_angle: Some(-1.5),
            ..RiskParams::default()
        };
        assert_eq!(params.draft_angle(), Some(-1.5));
    }
}
