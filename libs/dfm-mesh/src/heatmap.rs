//! # Heatmap Colors
//!
//! Per-face overlay colors derived from face risks. Each risky face blends
//! from the base gray toward its kind's highlight color by `risk_score`.

use config::constants::{
    HEATMAP_BASE_COLOR, HEATMAP_DEFAULT_BLEND, HEATMAP_SHARP_CORNER_COLOR,
    HEATMAP_THIN_WALL_COLOR, HEATMAP_UNDERCUT_COLOR,
};
use dfm_types::{FaceRisk, RiskKind};

/// Returns the highlight color for a risk kind.
pub fn highlight_color(kind: RiskKind) -> [f32; 3] {
    match kind {
        RiskKind::Undercut => HEATMAP_UNDERCUT_COLOR,
        RiskKind::ThinWall => HEATMAP_THIN_WALL_COLOR,
        RiskKind::SharpCorner => HEATMAP_SHARP_CORNER_COLOR,
    }
}

/// Computes one RGB color per face.
///
/// When several risks target the same face, the first one in `risks` wins.
/// Risks pointing past `face_count` are ignored.
///
/// # Example
///
/// ```rust
/// use dfm_mesh::heatmap::face_colors;
/// use dfm_types::{FaceRisk, RiskKind};
///
/// let colors = face_colors(2, &[FaceRisk::new(1, RiskKind::Undercut, 1.0)]);
/// assert_eq!(colors[0], [0.8, 0.8, 0.8]);
/// assert_eq!(colors[1], [1.0, 0.0, 0.0]);
/// ```
pub fn face_colors(face_count: usize, risks: &[FaceRisk]) -> Vec<[f32; 3]> {
    let mut winners: Vec<Option<&FaceRisk>> = vec![None; face_count];
    for risk in risks {
        if let Some(slot) = winners.get_mut(risk.face_index) {
            if slot.is_none() {
                *slot = Some(risk);
            }
        }
    }

    winners
        .into_iter()
        .map(|winner| match winner {
            Some(risk) => blend(highlight_color(risk.kind), blend_factor(risk.risk_score)),
            None => HEATMAP_BASE_COLOR,
        })
        .collect()
}

/// Flattened per-vertex colors for a non-indexed mesh: each face color is
/// repeated for its three corners, `[r, g, b, r, g, b, ...]`.
pub fn vertex_colors(face_count: usize, risks: &[FaceRisk]) -> Vec<f32> {
    face_colors(face_count, risks)
        .into_iter()
        .flat_map(|color| std::iter::repeat(color).take(3).flatten())
        .collect()
}

fn blend_factor(score: f64) -> f32 {
    if score.is_finite() {
        score.clamp(0.0, 1.0) as f32
    } else {
        HEATMAP_DEFAULT_BLEND
    }
}

fn blend(target: [f32; 3], t: f32) -> [f32; 3] {
    let mut out = HEATMAP_BASE_COLOR;
    for (channel, goal) in out.iter_mut().zip(target) {
        *channel += (goal - *channel) * t;
    }
    out
}
