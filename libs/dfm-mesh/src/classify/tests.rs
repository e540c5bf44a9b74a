//! # Face Classification Tests
//!
//! These tests verify that the classifier:
//! - Skips degenerate and unreadable faces
//! - Emits each risk kind with the documented score formula
//! - Uses ordinal face indices for indexed and non-indexed meshes
//! - Recomputes identical output on every call

use approx::assert_relative_eq;
use dfm_types::{FaceRisk, RiskKind};
use glam::DVec3;

use crate::classify::{classify_faces, classify_triangle};
use crate::mesh::TriangleMesh;

/// Equilateral triangle in the XY plane with the given edge length.
fn flat_equilateral(edge: f64) -> [DVec3; 3] {
    [
        DVec3::ZERO,
        DVec3::new(edge, 0.0, 0.0),
        DVec3::new(edge / 2.0, edge * 3f64.sqrt() / 2.0, 0.0),
    ]
}

fn kinds(risks: &[FaceRisk]) -> Vec<RiskKind> {
    risks.iter().map(|r| r.kind).collect()
}

/// A small flat equilateral face is only a thin wall.
///
/// Edges of 0.2 give `1 - 0.2 / 0.5 = 0.6`.
#[test]
fn test_small_equilateral_is_thin_wall() {
    let mesh = TriangleMesh::from_triangles(&[flat_equilateral(0.2)]);
    let risks: Vec<_> = classify_faces(&mesh).collect();

    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].face_index, 0);
    assert_eq!(risks[0].kind, RiskKind::ThinWall);
    assert_eq!(risks[0].severity, Some(0.8));
    assert_relative_eq!(risks[0].risk_score, 0.6, epsilon = 1e-9);
}

/// A large flat face triggers nothing.
#[test]
fn test_large_flat_face_is_clean() {
    let mesh = TriangleMesh::from_triangles(&[flat_equilateral(5.0)]);
    assert_eq!(classify_faces(&mesh).count(), 0);
}

/// Any edge under 0.05 skips the face, even if it would otherwise be risky.
#[test]
fn test_degenerate_face_skipped() {
    let sliver = [
        DVec3::ZERO,
        DVec3::new(0.04, 0.0, 0.0),
        DVec3::new(0.0, 0.0, 0.3),
    ];
    assert_eq!(classify_triangle(0, sliver).count(), 0);
}

/// Non-finite corners are treated as degenerate rather than scored.
#[test]
fn test_non_finite_face_skipped() {
    let broken = [DVec3::ZERO, DVec3::new(f64::NAN, 0.0, 0.0), DVec3::Y];
    assert_eq!(classify_triangle(0, broken).count(), 0);
}

/// A face standing parallel to the pull axis is a full-score undercut.
#[test]
fn test_vertical_face_is_undercut() {
    let wall = [
        DVec3::ZERO,
        DVec3::new(3.0, 0.0, 0.0),
        DVec3::new(0.0, 0.0, 3.0),
    ];
    let risks: Vec<_> = classify_triangle(7, wall).collect();

    assert_eq!(kinds(&risks), vec![RiskKind::Undercut]);
    assert_eq!(risks[0].face_index, 7);
    assert_eq!(risks[0].severity, Some(0.7));
    assert_relative_eq!(risks[0].risk_score, 1.0, epsilon = 1e-12);
}

/// A slightly tilted face scores proportionally to how close it is to vertical.
#[test]
fn test_tilted_face_undercut_score() {
    // Normal is (0, -cos t, sin t) with sin t = 0.05.
    let tilt = 0.05f64.asin();
    let up = DVec3::new(0.0, tilt.sin(), tilt.cos()) * 3.0;
    let wall = [DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0), up];
    let risks: Vec<_> = classify_triangle(0, wall).collect();

    assert_eq!(kinds(&risks), vec![RiskKind::Undercut]);
    assert_relative_eq!(risks[0].risk_score, 0.5, epsilon = 1e-9);
}

/// A narrow angle at the first vertex is a sharp corner.
///
/// A 15 degree corner scores `(30 - 15) / 30 = 0.5`.
#[test]
fn test_narrow_corner_is_sharp() {
    let angle = 15f64.to_radians();
    let corners = [
        DVec3::ZERO,
        DVec3::new(4.0, 0.0, 0.0),
        DVec3::new(4.0 * angle.cos(), 4.0 * angle.sin(), 0.0),
    ];
    let risks: Vec<_> = classify_triangle(0, corners).collect();

    assert_eq!(kinds(&risks), vec![RiskKind::SharpCorner]);
    assert_eq!(risks[0].severity, Some(0.6));
    assert_relative_eq!(risks[0].risk_score, 0.5, epsilon = 1e-9);
}

/// One face can carry all three kinds, in a fixed order.
#[test]
fn test_face_with_all_three_risks() {
    let angle = 10f64.to_radians();
    let corners = [
        DVec3::ZERO,
        DVec3::new(0.3, 0.0, 0.0),
        DVec3::new(0.3 * angle.cos(), 0.0, 0.3 * angle.sin()),
    ];
    let risks: Vec<_> = classify_triangle(2, corners).collect();

    assert_eq!(
        kinds(&risks),
        vec![RiskKind::ThinWall, RiskKind::Undercut, RiskKind::SharpCorner]
    );
    assert!(risks.iter().all(|r| r.face_index == 2));
    assert!(risks.iter().all(|r| (0.0..=1.0).contains(&r.risk_score)));
}

/// Face indices are ordinal for indexed meshes, and faces with missing
/// vertices are skipped without shifting later indices.
#[test]
fn test_indexed_mesh_face_indices() {
    let [a, b, c] = flat_equilateral(0.2);
    let positions: Vec<f64> = [a, b, c].iter().flat_map(|v| v.to_array()).collect();
    let indices = [0u32, 1, 2, 0, 1, 9, 2, 0, 1];
    let mesh = TriangleMesh::from_buffers(&positions, Some(&indices[..]));

    let faces: Vec<_> = classify_faces(&mesh).map(|r| r.face_index).collect();
    assert_eq!(faces, vec![0, 2]);
}

/// An empty mesh yields an empty sequence.
#[test]
fn test_empty_mesh() {
    assert_eq!(classify_faces(&TriangleMesh::new()).count(), 0);
}

/// Classification is pure: two passes give identical output.
#[test]
fn test_classification_is_restartable() {
    let mesh = TriangleMesh::from_triangles(&[
        flat_equilateral(0.2),
        [DVec3::ZERO, DVec3::X * 3.0, DVec3::Z * 3.0],
        flat_equilateral(4.0),
    ]);
    let first: Vec<_> = classify_faces(&mesh).collect();
    let second: Vec<_> = classify_faces(&mesh).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}
