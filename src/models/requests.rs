use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateProfile, RequestingUserProfile};

/// Request to rank collaborators for a stored user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankCollaboratorsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default)]
    #[serde(alias = "exclude_user_ids", rename = "excludeUserIds")]
    pub exclude_user_ids: Vec<String>,
}

/// Request to rank a caller-supplied candidate list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankCandidatesRequest {
    #[serde(default)]
    pub requester: Option<RequestingUserProfile>,
    pub candidates: Vec<CandidateProfile>,
}
