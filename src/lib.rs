//! Octava Match - collaborator ranking for the Octava musician network
//!
//! The core is a pure ranking function that orders candidate collaborators
//! by genre overlap and coarse location proximity. Around it sits a small
//! HTTP service that loads profiles from the hosted backend.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CollaboratorRanker, rank_collaborators, LocationTier};
pub use crate::models::{CandidateProfile, RequestingUserProfile, RankCollaboratorsRequest, RankCollaboratorsResponse};
