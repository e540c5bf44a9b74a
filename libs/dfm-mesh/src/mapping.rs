//! # Risk Mapping
//!
//! Reconciles abstract findings (kind + score, optionally a position) with
//! concrete catalogued features so they can be drawn on specific faces.

use std::collections::HashSet;

use dfm_types::{AbstractRisk, FaceRisk, FeatureCatalog, FeatureInstance};
use glam::DVec3;
use tracing::debug;

/// Maps abstract risks onto catalogued feature faces.
///
/// Risks are processed in order. Each one claims the nearest unused
/// candidate of its kind (by Euclidean distance when it carries a position,
/// otherwise the first unused candidate in catalog order). A face claimed
/// once is unavailable for the rest of the call, across all kinds. Risks
/// left without a candidate are dropped.
///
/// # Example
///
/// ```rust
/// use dfm_mesh::map_risks_to_faces;
/// use dfm_types::{AbstractRisk, FeatureCatalog, FeatureInstance, RiskKind};
/// use glam::DVec3;
///
/// let catalog = FeatureCatalog {
///     thin_walls: vec![FeatureInstance::new(12, DVec3::ZERO, 0.6)],
///     ..FeatureCatalog::default()
/// };
/// let risks = [
///     AbstractRisk::new(RiskKind::ThinWall, 0.9),
///     AbstractRisk::new(RiskKind::ThinWall, 0.4),
/// ];
/// let mapped = map_risks_to_faces(&risks, &catalog);
/// assert_eq!(mapped.len(), 1);
/// assert_eq!(mapped[0].face_index, 12);
/// ```
pub fn map_risks_to_faces(risks: &[AbstractRisk], catalog: &FeatureCatalog) -> Vec<FaceRisk> {
    let mut used = HashSet::new();
    let mut mapped = Vec::with_capacity(risks.len());

    for risk in risks {
        let candidates = catalog.candidates(risk.kind);
        if candidates.is_empty() {
            continue;
        }

        if let Some(feature) = best_candidate(candidates, risk.position, &used) {
            mapped.push(FaceRisk::new(feature.face_index, risk.kind, risk.risk_score));
            used.insert(feature.face_index);
        }
    }

    debug!(
        requested = risks.len(),
        mapped = mapped.len(),
        "mapped abstract risks to faces"
    );
    mapped
}

/// Picks the unused candidate closest to `target`; the first unused one
/// when there is no target. Ties keep the earlier candidate.
fn best_candidate<'a>(
    candidates: &'a [FeatureInstance],
    target: Option<DVec3>,
    used: &HashSet<usize>,
) -> Option<&'a FeatureInstance> {
    let mut best = None;
    let mut best_distance = f64::INFINITY;

    for feature in candidates {
        if used.contains(&feature.face_index) {
            continue;
        }
        let distance = target.map_or(0.0, |p| p.distance(feature.position));
        if distance < best_distance {
            best_distance = distance;
            best = Some(feature);
        }
    }

    best
}
