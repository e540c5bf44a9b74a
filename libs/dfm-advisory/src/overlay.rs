//! Projects a fused report's findings onto catalogued feature faces.

use dfm_mesh::map_risks_to_faces;
use dfm_types::{AbstractRisk, FaceRisk, FeatureCatalog, FusedReport, RiskKind};

/// Turns the textual findings of `report` into face risks for the viewer.
///
/// Each finding that names a thin wall, undercut or sharp corner becomes an
/// abstract risk scored `1 - manufacturability_score`, then goes through
/// [`map_risks_to_faces`]. Findings of other kinds are ignored.
pub fn overlay_from_report(report: &FusedReport, catalog: &FeatureCatalog) -> Vec<FaceRisk> {
    let score = (1.0 - report.manufacturability_score).clamp(0.0, 1.0);
    let risks: Vec<AbstractRisk> = report
        .risks
        .iter()
        .filter_map(|finding| RiskKind::from_finding(finding))
        .map(|kind| AbstractRisk::new(kind, score))
        .collect();

    map_risks_to_faces(&risks, catalog)
}
