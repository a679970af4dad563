// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateProfile, RequestingUserProfile};
pub use requests::{RankCollaboratorsRequest, RankCandidatesRequest};
pub use responses::{RankCollaboratorsResponse, HealthResponse, ErrorResponse};
