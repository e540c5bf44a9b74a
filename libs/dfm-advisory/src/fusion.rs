//! # Advisory Fusion
//!
//! Runs the local rule table, then asks the advisory service for a second
//! opinion under a hard deadline and merges both into one [`FusedReport`].
//!
//! ## Protocol
//!
//! ```text
//! try_analyze ──Err──► LocalFailed (service never called)
//!      │ Ok
//!      ├── skip_fusion ──► LocalOnly
//!      ▼
//! timeout(advise) ──Elapsed──► AdvisoryTimedOut (local lists)
//!      │            ──Err────► AdvisoryFailed   (local lists)
//!      ▼ Ok
//! internal_error ──► AdvisoryDegraded (local lists, service narrative)
//!      ▼
//! merge_unique ──► Fused
//! ```
//!
//! `fuse` never fails; every fault becomes a [`FusionStatus`] and a
//! narrative. It holds no mutable state, so independent parts may be fused
//! concurrently through one shared `AdvisoryFusion`.

use config::FusionConfig;
use dfm_risk::try_analyze;
use dfm_types::{FusedReport, FusionStatus};
use tracing::{info, instrument, warn};

use crate::error::AdvisoryError;
use crate::merge::merge_unique;
use crate::service::{AdvisoryRequest, AdvisoryResponse, AdvisoryService};

/// Orchestrates local analysis and advisory enrichment.
#[derive(Debug, Clone)]
pub struct AdvisoryFusion<S> {
    service: S,
    config: FusionConfig,
}

impl<S: AdvisoryService> AdvisoryFusion<S> {
    /// Creates an orchestrator with the default 30 s deadline.
    pub fn new(service: S) -> Self {
        Self {
            service,
            config: FusionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FusionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Produces a fused report for one part. Never fails.
    #[instrument(skip(self, request), fields(skip_fusion = request.skip_fusion))]
    pub async fn fuse(&self, request: AdvisoryRequest) -> FusedReport {
        let local = match try_analyze(&request.params, &request.context) {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, "local DFM analysis failed, skipping advisory step");
                return FusedReport::local_failed(err.to_string());
            }
        };

        if request.skip_fusion {
            info!("recursion guard set, returning local report");
            return FusedReport::from_local(local, FusionStatus::LocalOnly, None);
        }

        let response = match self.call_service(request.guarded()).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "advisory step failed, keeping local findings");
                let status = match &err {
                    AdvisoryError::Timeout(after) => FusionStatus::AdvisoryTimedOut {
                        after_ms: u64::try_from(after.as_millis()).unwrap_or(u64::MAX),
                    },
                    AdvisoryError::Service(reason) => FusionStatus::AdvisoryFailed {
                        reason: reason.clone(),
                    },
                };
                return FusedReport::from_local(local, status, Some(err.to_string()));
            }
        };

        if response.internal_error {
            warn!("advisory service reported an internal error, keeping local findings");
            return FusedReport::from_local(
                local,
                FusionStatus::AdvisoryDegraded,
                non_empty(response.narrative),
            );
        }

        let risks = merge_unique(&local.risks, &response.risks);
        let recommendations = merge_unique(&local.recommendations, &response.recommendations);
        info!(
            risks = risks.len(),
            recommendations = recommendations.len(),
            "fused local and advisory findings"
        );
        FusedReport {
            risks,
            recommendations,
            narrative: non_empty(response.narrative),
            ..FusedReport::from_local(local, FusionStatus::Fused, None)
        }
    }

    /// First of {service answer, deadline}.
    async fn call_service(
        &self,
        request: AdvisoryRequest,
    ) -> Result<AdvisoryResponse, AdvisoryError> {
        let deadline = self.config.timeout;
        tokio::time::timeout(deadline, self.service.advise(request))
            .await
            .map_err(|_| AdvisoryError::Timeout(deadline))?
    }
}

fn non_empty(narrative: String) -> Option<String> {
    if narrative.trim().is_empty() {
        None
    } else {
        Some(narrative)
    }
}
