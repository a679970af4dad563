//! Profile store interface
//!
//! The ranker never loads data itself. Route handlers fetch the requester
//! and the candidate pool through this trait and hand complete lists to
//! the ranker.

use async_trait::async_trait;
use thiserror::Error;
use crate::models::{CandidateProfile, RequestingUserProfile};

/// Errors that can occur when loading profiles
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Source of requester and candidate profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load the taste profile of a user, `None` if the user is unknown
    async fn get_requester(&self, user_id: &str) -> Result<Option<RequestingUserProfile>, StoreError>;

    /// Load profiles eligible to be shown to `user_id`
    ///
    /// Visibility rules are applied here. The requester and `exclude_ids`
    /// are never part of the result.
    async fn list_candidates(
        &self,
        user_id: &str,
        exclude_ids: &[String],
        limit: usize,
    ) -> Result<Vec<CandidateProfile>, StoreError>;
}
