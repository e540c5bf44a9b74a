//! # Face Classification
//!
//! Per-triangle detection of thin walls, undercuts and sharp corners.
//!
//! ## Heuristics
//!
//! - **Thin wall**: average edge length below [`THIN_WALL_EDGE_LENGTH`].
//!   This is a proxy for wall thickness, not a measurement: coarse
//!   tessellation of a thick wall passes, and a finely tessellated thick
//!   ribbon is flagged.
//! - **Undercut**: face normal nearly perpendicular to the fixed
//!   [`PULL_AXIS`], i.e. the face runs parallel to the draw direction.
//! - **Sharp corner**: angle at the first vertex (between AB and AC) below
//!   [`SHARP_CORNER_ANGLE_DEG`].
//!
//! Triangles with any edge shorter than [`DEGENERATE_EDGE_LENGTH`] are
//! skipped, as are faces that reference missing vertices.

#[cfg(test)]
mod tests;

use config::constants::{
    unit_clamp, DEGENERATE_EDGE_LENGTH, PULL_AXIS, SHARP_CORNER_ANGLE_DEG, SHARP_CORNER_SEVERITY,
    THIN_WALL_EDGE_LENGTH, THIN_WALL_SEVERITY, UNDERCUT_SEVERITY, UNDERCUT_VERTICAL_DOT,
};
use dfm_types::{FaceRisk, RiskKind};
use glam::DVec3;
use tracing::trace;

use crate::mesh::TriangleMesh;

/// Classifies every face of a mesh.
///
/// The returned iterator is lazy and borrows the mesh; calling this again
/// recomputes from scratch. Each face yields zero to three risks, at most
/// one per [`RiskKind`], in the order thin wall, undercut, sharp corner.
///
/// # Example
///
/// ```rust
/// use dfm_mesh::{classify_faces, TriangleMesh};
/// use dfm_types::RiskKind;
/// use glam::DVec3;
///
/// // A 2x2 right triangle standing in the XZ plane: parallel to the pull axis.
/// let mesh = TriangleMesh::from_triangles(&[[
///     DVec3::ZERO,
///     DVec3::new(2.0, 0.0, 0.0),
///     DVec3::new(0.0, 0.0, 2.0),
/// ]]);
/// let kinds: Vec<_> = classify_faces(&mesh).map(|r| r.kind).collect();
/// assert_eq!(kinds, vec![RiskKind::Undercut]);
/// ```
pub fn classify_faces(mesh: &TriangleMesh) -> impl Iterator<Item = FaceRisk> + '_ {
    (0..mesh.triangle_count()).flat_map(move |face_index| {
        let corners = mesh.triangle(face_index);
        if corners.is_none() {
            trace!(face_index, "skipping face with missing vertices");
        }
        corners
            .into_iter()
            .flat_map(move |corners| classify_triangle(face_index, corners))
    })
}

/// Classifies a single triangle with corners `[A, B, C]`.
///
/// Yields nothing for a degenerate triangle.
pub fn classify_triangle(
    face_index: usize,
    [a, b, c]: [DVec3; 3],
) -> impl Iterator<Item = FaceRisk> {
    let ab = b - a;
    let ac = c - a;
    let edges = [ab.length(), ac.length(), (c - b).length()];

    // NaN lengths count as degenerate too.
    let degenerate = edges.iter().any(|len| !(*len >= DEGENERATE_EDGE_LENGTH));
    if degenerate {
        trace!(face_index, "skipping degenerate triangle");
        let nothing: [Option<FaceRisk>; 3] = [None; 3];
        return nothing.into_iter().flatten();
    }

    let average_edge = edges.iter().sum::<f64>() / 3.0;
    let thin_wall = (average_edge < THIN_WALL_EDGE_LENGTH).then(|| {
        FaceRisk::new(
            face_index,
            RiskKind::ThinWall,
            unit_clamp(1.0 - average_edge / THIN_WALL_EDGE_LENGTH),
        )
        .with_severity(THIN_WALL_SEVERITY)
    });

    let normal = ab.cross(ac).normalize_or_zero();
    let vertical = normal.dot(DVec3::from_array(PULL_AXIS)).abs();
    let undercut = (vertical < UNDERCUT_VERTICAL_DOT).then(|| {
        FaceRisk::new(
            face_index,
            RiskKind::Undercut,
            unit_clamp(1.0 - vertical / UNDERCUT_VERTICAL_DOT),
        )
        .with_severity(UNDERCUT_SEVERITY)
    });

    let angle = ab.angle_between(ac).to_degrees();
    let sharp_corner = (angle < SHARP_CORNER_ANGLE_DEG).then(|| {
        FaceRisk::new(
            face_index,
            RiskKind::SharpCorner,
            unit_clamp((SHARP_CORNER_ANGLE_DEG - angle) / SHARP_CORNER_ANGLE_DEG),
        )
        .with_severity(SHARP_CORNER_SEVERITY)
    });

    [thin_wall, undercut, sharp_corner].into_iter().flatten()
}
