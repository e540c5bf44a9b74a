//! Property-based tests for face classification and risk mapping.

use std::collections::HashSet;

use dfm_mesh::heatmap::face_colors;
use dfm_mesh::{classify_faces, map_risks_to_faces, TriangleMesh};
use dfm_types::{AbstractRisk, FeatureCatalog, FeatureInstance, RiskKind};
use glam::DVec3;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary vertex in a part-sized box.
fn arb_vertex() -> impl Strategy<Value = DVec3> {
    (-5.0f64..5.0, -5.0f64..5.0, -5.0f64..5.0).prop_map(|(x, y, z)| DVec3::new(x, y, z))
}

fn arb_mesh() -> impl Strategy<Value = TriangleMesh> {
    prop::collection::vec(prop::array::uniform3(arb_vertex()), 0..40)
        .prop_map(|triangles| TriangleMesh::from_triangles(&triangles))
}

fn arb_kind() -> impl Strategy<Value = RiskKind> {
    prop_oneof![
        Just(RiskKind::ThinWall),
        Just(RiskKind::Undercut),
        Just(RiskKind::SharpCorner),
    ]
}

fn arb_feature() -> impl Strategy<Value = FeatureInstance> {
    (0usize..30, arb_vertex(), 0.0f64..5.0)
        .prop_map(|(face, position, measurement)| FeatureInstance::new(face, position, measurement))
}

fn arb_catalog() -> impl Strategy<Value = FeatureCatalog> {
    (
        prop::collection::vec(arb_feature(), 0..8),
        prop::collection::vec(arb_feature(), 0..8),
        prop::collection::vec(arb_feature(), 0..8),
    )
        .prop_map(|(thin_walls, sharp_corners, undercuts)| FeatureCatalog {
            thin_walls,
            sharp_corners,
            undercuts,
        })
}

fn arb_abstract_risk() -> impl Strategy<Value = AbstractRisk> {
    (arb_kind(), 0.0f64..=1.0, prop::option::of(arb_vertex())).prop_map(
        |(kind, score, position)| AbstractRisk {
            kind,
            risk_score: score,
            position,
        },
    )
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn classification_scores_are_normalized(mesh in arb_mesh()) {
        for risk in classify_faces(&mesh) {
            prop_assert!((0.0..=1.0).contains(&risk.risk_score));
            prop_assert!(risk.face_index < mesh.triangle_count());
        }
    }

    #[test]
    fn classification_is_deterministic(mesh in arb_mesh()) {
        let first: Vec<_> = classify_faces(&mesh).collect();
        let second: Vec<_> = classify_faces(&mesh).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn at_most_one_risk_per_kind_per_face(mesh in arb_mesh()) {
        let mut seen = HashSet::new();
        for risk in classify_faces(&mesh) {
            prop_assert!(seen.insert((risk.face_index, risk.kind)));
        }
    }

    #[test]
    fn heatmap_has_one_color_per_face(mesh in arb_mesh()) {
        let risks: Vec<_> = classify_faces(&mesh).collect();
        let colors = face_colors(mesh.triangle_count(), &risks);
        prop_assert_eq!(colors.len(), mesh.triangle_count());
        for color in colors {
            prop_assert!(color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn mapped_faces_are_unique(
        risks in prop::collection::vec(arb_abstract_risk(), 0..20),
        catalog in arb_catalog(),
    ) {
        let mapped = map_risks_to_faces(&risks, &catalog);
        let mut faces = HashSet::new();
        for risk in &mapped {
            prop_assert!(faces.insert(risk.face_index));
        }
        prop_assert!(mapped.len() <= risks.len());
    }

    #[test]
    fn mapped_faces_come_from_matching_catalog(
        risks in prop::collection::vec(arb_abstract_risk(), 0..20),
        catalog in arb_catalog(),
    ) {
        for risk in map_risks_to_faces(&risks, &catalog) {
            let candidates = catalog.candidates(risk.kind);
            prop_assert!(candidates.iter().any(|f| f.face_index == risk.face_index));
        }
    }
}

/// Two thin-wall findings competing for one catalogued thin wall: the second is dropped.
#[test]
fn second_risk_dropped_when_only_one_candidate() {
    let catalog = FeatureCatalog {
        thin_walls: vec![FeatureInstance::new(4, DVec3::new(1.0, 2.0, 3.0), 0.7)],
        ..FeatureCatalog::default()
    };
    let risks = [
        AbstractRisk::new(RiskKind::ThinWall, 0.8),
        AbstractRisk::new(RiskKind::ThinWall, 0.5).at(DVec3::new(1.0, 2.0, 3.0)),
    ];

    let mapped = map_risks_to_faces(&risks, &catalog);
    assert_eq!(mapped.len(), 1);
    assert_eq!(mapped[0].face_index, 4);
    assert_eq!(mapped[0].risk_score, 0.8);
}
