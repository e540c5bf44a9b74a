//! # Rule Table
//!
//! Ordered manufacturability rules. Each rule that fires appends a finding
//! and usually a recommendation, adds its weight to the accumulated score,
//! and may raise the severity. Severity never decreases.
//!
//! | # | Condition | Weight | Severity floor |
//! |---|-----------|--------|----------------|
//! | 1 | wall < 1.0 mm | 3 | high |
//! | 2 | 1.0 ≤ wall < 1.5 mm | 2 | medium |
//! | 3 | undercuts | 2 | medium |
//! | 4 | complexity > 0.8 | 2 | medium |
//! | 5 | sharp corners catalogued | 1 | medium |
//! | 6 | volume < 1 cm³ | 1 | - |
//! | 7 | volume > 1000 cm³ | 1 | - |
//! | 8 | metal and wall < 0.8 mm | 1 | - |
//! | 9 | plastic and complexity > 0.7 | 1 | - |
//! | 10 | injection process | 0 | - |
//! | 11 | casting process | 0 | - |

use config::constants::{
    manufacturability_from_risk, CRITICAL_WALL_THICKNESS_MM, HIGH_COMPLEXITY, LARGE_VOLUME_CM3,
    METAL_MIN_WALL_THICKNESS_MM, MIN_CASTING_DRAFT_DEG, PLASTIC_FLOW_COMPLEXITY, SMALL_VOLUME_CM3,
    THIN_WALL_THICKNESS_MM, WEIGHT_COMPLEXITY, WEIGHT_CRITICAL_WALL, WEIGHT_MATERIAL,
    WEIGHT_SHARP_CORNERS, WEIGHT_THIN_WALL, WEIGHT_UNDERCUT, WEIGHT_VOLUME,
};
use dfm_types::{PartContext, RiskParams, RiskReport, Severity};
use tracing::{debug, warn};

use crate::error::RiskError;

/// Analyzes a part, degrading to [`RiskReport::degraded`] on any fault.
///
/// Pure and deterministic: the same inputs always give the same report.
pub fn analyze(params: &RiskParams, context: &PartContext) -> RiskReport {
    match try_analyze(params, context) {
        Ok(report) => report,
        Err(err) => {
            warn!(error = %err, "DFM risk analysis failed, returning degraded report");
            RiskReport::degraded()
        }
    }
}

/// Analyzes a part, surfacing invalid inputs as errors.
pub fn try_analyze(params: &RiskParams, context: &PartContext) -> Result<RiskReport, RiskError> {
    let inputs = Inputs::resolve(params, context)?;
    debug!(?inputs, "starting DFM risk analysis");

    let mut acc = Accumulator::default();

    if inputs.wall_thickness < CRITICAL_WALL_THICKNESS_MM {
        acc.flag(
            format!("Critical thin walls detected ({:.2}mm)", inputs.wall_thickness),
            "Increase wall thickness to at least 1.5mm",
            WEIGHT_CRITICAL_WALL,
            Some(Severity::High),
        );
    } else if inputs.wall_thickness < THIN_WALL_THICKNESS_MM {
        acc.flag(
            format!(
                "Thin walls may affect manufacturability ({:.2}mm)",
                inputs.wall_thickness
            ),
            "Consider increasing wall thickness to 1.5-2mm",
            WEIGHT_THIN_WALL,
            Some(Severity::Medium),
        );
    }

    if inputs.has_undercuts {
        acc.flag(
            "Undercuts detected in part geometry",
            "Consider redesigning to eliminate undercuts or use side actions",
            WEIGHT_UNDERCUT,
            Some(Severity::Medium),
        );
    }

    if inputs.complexity > HIGH_COMPLEXITY {
        acc.flag(
            format!("High geometric complexity ({:.1}%)", inputs.complexity * 100.0),
            "Simplify geometry where possible to improve manufacturability",
            WEIGHT_COMPLEXITY,
            Some(Severity::Medium),
        );
    }

    if inputs.sharp_corners > 0 {
        acc.flag(
            format!("{} sharp corners detected", inputs.sharp_corners),
            "Add fillets or chamfers to sharp corners",
            WEIGHT_SHARP_CORNERS,
            Some(Severity::Medium),
        );
    }

    if inputs.volume < SMALL_VOLUME_CM3 {
        acc.flag(
            "Very small part volume may affect manufacturability",
            "Verify minimum manufacturable size with supplier",
            WEIGHT_VOLUME,
            None,
        );
    } else if inputs.volume > LARGE_VOLUME_CM3 {
        acc.flag(
            "Large part volume may require special handling",
            "Consider design for assembly to reduce part size",
            WEIGHT_VOLUME,
            None,
        );
    }

    if inputs.material.contains("metal") {
        if inputs.wall_thickness < METAL_MIN_WALL_THICKNESS_MM {
            acc.flag(
                "Wall thickness below minimum for metal manufacturing",
                "Increase minimum wall thickness to at least 0.8mm for metals",
                WEIGHT_MATERIAL,
                None,
            );
        }
    } else if inputs.material.contains("plastic") && inputs.complexity > PLASTIC_FLOW_COMPLEXITY {
        acc.flag(
            "Complex plastic part may have flow issues during molding",
            "Optimize part design for plastic flow during molding",
            WEIGHT_MATERIAL,
            None,
        );
    }

    let rule_recommendations = acc.recommendations.len();

    if inputs.process.contains("injection") {
        acc.recommend_unless_mentioned("gate", "Consider gate location and runner design");
    } else if inputs.process.contains("casting") {
        let advice = format!(
            "Ensure adequate draft angles (min {MIN_CASTING_DRAFT_DEG}°) for casting"
        );
        let advice = match inputs.draft_angle {
            Some(draft) => format!("{advice}; current draft is {draft:.1}°"),
            None => advice,
        };
        acc.recommend_unless_mentioned("draft", advice);
    }

    if rule_recommendations == 0 {
        acc.recommendations.push("No major DFM issues detected".to_string());
        acc.recommendations.push("Follow standard manufacturing guidelines".to_string());
    }

    let report = acc.finish();
    debug!(
        severity = ?report.severity,
        score = report.manufacturability_score,
        risk_count = report.risks.len(),
        "DFM risk analysis complete"
    );
    Ok(report)
}

/// Effective rule inputs after overrides and validation.
#[derive(Debug)]
struct Inputs {
    wall_thickness: f64,
    draft_angle: Option<f64>,
    has_undercuts: bool,
    complexity: f64,
    volume: f64,
    sharp_corners: usize,
    material: String,
    process: String,
}

impl Inputs {
    /// Overrides that are NaN or infinite fall back to the context value.
    /// Only a rule input that is still unusable after that is an error.
    fn resolve(params: &RiskParams, context: &PartContext) -> Result<Self, RiskError> {
        Ok(Self {
            wall_thickness: RiskError::check_measurement(
                "wallThickness",
                params.wall_thickness_or(context),
            )?,
            draft_angle: params.draft_angle(),
            has_undercuts: params.has_undercuts_or(context),
            complexity: RiskError::check_measurement("complexity", params.complexity_or(context))?,
            volume: RiskError::check_measurement("volume", params.volume_or(context))?,
            sharp_corners: context.sharp_corner_count(),
            material: params.material_or(context),
            process: params.process_or(context),
        })
    }
}

#[derive(Default)]
struct Accumulator {
    risks: Vec<String>,
    recommendations: Vec<String>,
    score: f64,
    severity: Severity,
}

impl Accumulator {
    fn flag(
        &mut self,
        risk: impl Into<String>,
        recommendation: impl Into<String>,
        weight: f64,
        floor: Option<Severity>,
    ) {
        self.risks.push(risk.into());
        self.recommendations.push(recommendation.into());
        self.score += weight;
        if let Some(floor) = floor {
            self.severity = self.severity.at_least(floor);
        }
    }

    fn recommend_unless_mentioned(&mut self, keyword: &str, recommendation: impl Into<String>) {
        if !self.recommendations.iter().any(|r| r.contains(keyword)) {
            self.recommendations.push(recommendation.into());
        }
    }

    fn finish(self) -> RiskReport {
        RiskReport {
            risks: self.risks,
            severity: self.severity,
            recommendations: self.recommendations,
            manufacturability_score: manufacturability_from_risk(self.score),
        }
    }
}
