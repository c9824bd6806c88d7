//! Request, response and health payloads.

use serde::{Deserialize, Serialize};

use crate::matching::MatchResult;

/// Acknowledgement returned by the health probe.
pub const HEALTH_MESSAGE: &str = "백엔드 서버가 정상적으로 작동합니다!";

/// A recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Free-text symptom description.
    pub message: String,
    /// Free-text location.
    pub location: String,
}

impl RecommendRequest {
    pub fn new<M: Into<String>, L: Into<String>>(message: M, location: L) -> Self {
        RecommendRequest {
            message: message.into(),
            location: location.into(),
        }
    }
}

/// A recommendation response.
///
/// Serialized either as `{"recommendations": [...], "matched_department": [...]}`
/// (the department list only after a department-specific match) or as
/// `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendResponse {
    Recommendations {
        recommendations: Vec<MatchResult>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        matched_department: Option<Vec<String>>,
    },
    Error {
        error: String,
    },
}

impl RecommendResponse {
    pub fn error<S: Into<String>>(message: S) -> Self {
        RecommendResponse::Error {
            error: message.into(),
        }
    }

    /// Recommended entries; empty for an error response.
    pub fn recommendations(&self) -> &[MatchResult] {
        match self {
            RecommendResponse::Recommendations {
                recommendations, ..
            } => recommendations,
            RecommendResponse::Error { .. } => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RecommendResponse::Error { .. })
    }
}

/// Health probe payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        HealthStatus {
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}
