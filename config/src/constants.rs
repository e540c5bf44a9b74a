//! # Configuration Constants
//!
//! Centralized constants for the DFM risk pipeline. All per-face detection
//! thresholds, rule weights, part-context defaults and advisory limits are
//! defined here.
//!
//! ## Categories
//!
//! - **Face Classification**: Per-triangle heuristics
//! - **Rule Table**: Part-level thresholds and weights
//! - **Context Defaults**: Values assumed when part metadata is missing
//! - **Advisory**: External service deadline and limits
//! - **Heatmap**: Overlay colors

// =============================================================================
// FACE CLASSIFICATION CONSTANTS
// =============================================================================

/// Edge length below which a triangle is considered degenerate.
///
/// A triangle with any edge shorter than this is skipped entirely by the
/// face classifier.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_EDGE_LENGTH;
///
/// let edges = [0.04, 1.0, 1.0];
/// assert!(edges.iter().any(|e| *e < DEGENERATE_EDGE_LENGTH));
/// ```
pub const DEGENERATE_EDGE_LENGTH: f64 = 0.05;

/// Average edge length below which a face is flagged as a thin wall.
///
/// The risk score grows linearly as the average edge shrinks toward zero:
/// `1 - avg / THIN_WALL_EDGE_LENGTH`.
pub const THIN_WALL_EDGE_LENGTH: f64 = 0.5;

/// Maximum `|normal · pull|` for a face to be flagged as an undercut.
///
/// Faces whose normal is within roughly 6 degrees of perpendicular to the
/// pull axis are nearly parallel to the draw direction.
pub const UNDERCUT_VERTICAL_DOT: f64 = 0.1;

/// Corner angle (degrees) below which a face is flagged as a sharp corner.
pub const SHARP_CORNER_ANGLE_DEG: f64 = 30.0;

/// Fixed tool pull direction used by the undercut heuristic.
///
/// # Example
///
/// ```rust
/// use config::constants::PULL_AXIS;
///
/// assert_eq!(PULL_AXIS, [0.0, 0.0, 1.0]);
/// ```
pub const PULL_AXIS: [f64; 3] = [0.0, 0.0, 1.0];

/// Advisory severity attached to thin-wall face risks.
pub const THIN_WALL_SEVERITY: f64 = 0.8;

/// Advisory severity attached to undercut face risks.
pub const UNDERCUT_SEVERITY: f64 = 0.7;

/// Advisory severity attached to sharp-corner face risks.
pub const SHARP_CORNER_SEVERITY: f64 = 0.6;

// =============================================================================
// RULE TABLE CONSTANTS
// =============================================================================

/// Wall thickness (mm) below which walls are critically thin.
pub const CRITICAL_WALL_THICKNESS_MM: f64 = 1.0;

/// Wall thickness (mm) below which walls may affect manufacturability.
pub const THIN_WALL_THICKNESS_MM: f64 = 1.5;

/// Minimum wall thickness (mm) for metal parts.
pub const METAL_MIN_WALL_THICKNESS_MM: f64 = 0.8;

/// Complexity above which geometry is considered highly complex.
pub const HIGH_COMPLEXITY: f64 = 0.8;

/// Complexity above which plastic parts risk flow problems while molding.
pub const PLASTIC_FLOW_COMPLEXITY: f64 = 0.7;

/// Part volume (cm³) below which the part is very small.
pub const SMALL_VOLUME_CM3: f64 = 1.0;

/// Part volume (cm³) above which the part is large.
pub const LARGE_VOLUME_CM3: f64 = 1000.0;

/// Minimum draft angle (degrees) recommended for cast parts.
pub const MIN_CASTING_DRAFT_DEG: f64 = 2.0;

/// Accumulated risk score that maps to a manufacturability score of zero.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_RISK_SCORE;
///
/// let accumulated = 3.0;
/// let score = (1.0 - accumulated / MAX_RISK_SCORE).clamp(0.0, 1.0);
/// assert!((score - 0.7).abs() < 1e-12);
/// ```
pub const MAX_RISK_SCORE: f64 = 10.0;

/// Weight added for critically thin walls.
pub const WEIGHT_CRITICAL_WALL: f64 = 3.0;

/// Weight added for thin walls.
pub const WEIGHT_THIN_WALL: f64 = 2.0;

/// Weight added when undercuts are present.
pub const WEIGHT_UNDERCUT: f64 = 2.0;

/// Weight added for high geometric complexity.
pub const WEIGHT_COMPLEXITY: f64 = 2.0;

/// Weight added when sharp corners were detected.
pub const WEIGHT_SHARP_CORNERS: f64 = 1.0;

/// Weight added for very small or very large volumes.
pub const WEIGHT_VOLUME: f64 = 1.0;

/// Weight added for material-specific findings.
pub const WEIGHT_MATERIAL: f64 = 1.0;

/// Manufacturability score of the degraded report returned on internal faults.
pub const FALLBACK_MANUFACTURABILITY_SCORE: f64 = 0.5;

// =============================================================================
// CONTEXT DEFAULTS
// =============================================================================

/// Part volume (cm³) assumed when unavailable.
pub const DEFAULT_VOLUME_CM3: f64 = 100.0;

/// Part surface area (cm²) assumed when unavailable.
pub const DEFAULT_SURFACE_AREA_CM2: f64 = 200.0;

/// Geometric complexity assumed when unavailable.
pub const DEFAULT_COMPLEXITY: f64 = 0.5;

/// Minimum wall thickness (mm) assumed when unavailable.
pub const DEFAULT_WALL_THICKNESS_MM: f64 = 2.0;

/// Manufacturability score assumed when unavailable.
pub const DEFAULT_MANUFACTURABILITY_SCORE: f64 = 0.7;

// =============================================================================
// ADVISORY CONSTANTS
// =============================================================================

/// Deadline (seconds) for the external advisory call.
pub const ADVISORY_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// HEATMAP CONSTANTS
// =============================================================================

/// Base color for faces without a risk (light gray, RGB in [0, 1]).
pub const HEATMAP_BASE_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

/// Highlight color for undercut faces (red).
pub const HEATMAP_UNDERCUT_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Highlight color for thin-wall faces (yellow).
pub const HEATMAP_THIN_WALL_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

/// Highlight color for sharp-corner faces (orange).
pub const HEATMAP_SHARP_CORNER_COLOR: [f32; 3] = [1.0, 0.5, 0.0];

/// Blend factor used when a risk carries no usable score.
pub const HEATMAP_DEFAULT_BLEND: f32 = 0.5;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Converts an accumulated rule score into a manufacturability score.
///
/// # Example
///
/// ```rust
/// use config::constants::manufacturability_from_risk;
///
/// assert_eq!(manufacturability_from_risk(0.0), 1.0);
/// assert_eq!(manufacturability_from_risk(25.0), 0.0);
/// ```
#[inline]
pub fn manufacturability_from_risk(accumulated: f64) -> f64 {
    (1.0 - accumulated / MAX_RISK_SCORE).clamp(0.0, 1.0)
}

/// Clamps a value to the unit interval.
///
/// # Example
///
/// ```rust
/// use config::constants::unit_clamp;
///
/// assert_eq!(unit_clamp(1.4), 1.0);
/// assert_eq!(unit_clamp(-0.2), 0.0);
/// ```
#[inline]
pub fn unit_clamp(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
