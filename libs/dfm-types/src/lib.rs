//! # DFM Types
//!
//! Plain data shared by every stage of the DFM risk pipeline.
//!
//! ## Architecture
//!
//! ```text
//! TriangleMesh ─► FaceRisk ─┐
//! PartContext + RiskParams ─► RiskReport ─► FusedReport
//! FeatureCatalog + AbstractRisk ─► FaceRisk
//! ```
//!
//! Every type is serde-serializable with camelCase field names so the host
//! application can pass records across its boundary unchanged.

pub mod context;
pub mod face;
pub mod feature;
pub mod report;

pub use context::{PartContext, RiskParams};
pub use face::{FaceRisk, RiskKind};
pub use feature::{AbstractRisk, FeatureCatalog, FeatureInstance};
pub use report::{FusedReport, FusionStatus, RiskReport, Severity};
