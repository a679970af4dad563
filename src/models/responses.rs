use serde::{Deserialize, Serialize};
use crate::models::domain::CandidateProfile;

/// Response for both ranking endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankCollaboratorsResponse {
    pub collaborators: Vec<CandidateProfile>,
    /// Size of the ranked pool before truncation (capped by `candidate_pool_size`)
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
