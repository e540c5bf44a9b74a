//! # Advisory Service
//!
//! The seam to the external enrichment service. The service receives the
//! same inputs as the local rule table, with the recursion guard set so
//! that a service which itself runs this pipeline stays local-only.

use async_trait::async_trait;
use dfm_types::{PartContext, RiskParams};
use serde::{Deserialize, Serialize};

use crate::error::AdvisoryError;

/// Input shared by the local rule table and the advisory service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvisoryRequest {
    pub params: RiskParams,
    pub context: PartContext,
    /// Recursion guard. When set, fusion returns the local result only.
    pub skip_fusion: bool,
}

impl AdvisoryRequest {
    pub fn new(params: RiskParams, context: PartContext) -> Self {
        Self {
            params,
            context,
            skip_fusion: false,
        }
    }

    /// Returns a copy with the recursion guard set.
    pub fn guarded(&self) -> Self {
        Self {
            skip_fusion: true,
            ..self.clone()
        }
    }
}

/// What the advisory service answers with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvisoryResponse {
    pub narrative: String,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
    /// The service hit its own internal error; its lists are not trusted.
    pub internal_error: bool,
}

impl AdvisoryResponse {
    pub fn new(narrative: impl Into<String>) -> Self {
        Self {
            narrative: narrative.into(),
            ..Self::default()
        }
    }

    /// A response flagged as the service's own failure.
    pub fn internal_error(narrative: impl Into<String>) -> Self {
        Self {
            narrative: narrative.into(),
            internal_error: true,
            ..Self::default()
        }
    }

    pub fn with_risks<I, T>(mut self, risks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.risks = risks.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_recommendations<I, T>(mut self, recommendations: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.recommendations = recommendations.into_iter().map(Into::into).collect();
        self
    }
}

/// An external advisory service.
///
/// Implementations may fail or never resolve; the caller bounds the call
/// with a deadline. Implementations must not hold state shared between
/// calls for different parts.
#[async_trait]
pub trait AdvisoryService: Send + Sync {
    async fn advise(&self, request: AdvisoryRequest) -> Result<AdvisoryResponse, AdvisoryError>;
}
