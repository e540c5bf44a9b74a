//! # DFM Advisory
//!
//! Fuses the deterministic local rule table with an external, possibly
//! unreliable, advisory service.
//!
//! ## Architecture
//!
//! ```text
//! AdvisoryRequest ─► dfm_risk::try_analyze ─► RiskReport
//!                 └► AdvisoryService (deadline) ─► AdvisoryResponse
//!                                   ↓
//!                    merge_unique ─► FusedReport { status, narrative }
//!                                   ↓
//!                    overlay_from_report ─► Vec<FaceRisk>
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use async_trait::async_trait;
//! use dfm_advisory::{
//!     AdvisoryError, AdvisoryFusion, AdvisoryRequest, AdvisoryResponse, AdvisoryService,
//! };
//! use dfm_types::FusionStatus;
//!
//! struct Offline;
//!
//! #[async_trait]
//! impl AdvisoryService for Offline {
//!     async fn advise(&self, _: AdvisoryRequest) -> Result<AdvisoryResponse, AdvisoryError> {
//!         Err(AdvisoryError::Service("offline".into()))
//!     }
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let fusion = AdvisoryFusion::new(Offline);
//! let report = fusion.fuse(AdvisoryRequest::default()).await;
//! assert!(matches!(report.status, FusionStatus::AdvisoryFailed { .. }));
//! assert!(report.is_warning());
//! # });
//! ```

pub mod error;
pub mod fusion;
pub mod merge;
pub mod overlay;
pub mod service;

pub use error::AdvisoryError;
pub use fusion::AdvisoryFusion;
pub use merge::merge_unique;
pub use overlay::overlay_from_report;
pub use service::{AdvisoryRequest, AdvisoryResponse, AdvisoryService};
