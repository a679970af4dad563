use crate::models::{CandidateProfile, RequestingUserProfile};
use crate::core::{genre::genre_score, location::location_score};

/// Weight of the genre score in the composite
pub const GENRE_WEIGHT: f64 = 0.7;
/// Weight of the location score in the composite
pub const LOCATION_WEIGHT: f64 = 0.3;

/// Calculate the affinity score (0-100) of a candidate for a requester
///
/// Scoring formula:
/// score = (
///     genre_score * 0.7 +       # share of the requester's genres the candidate covers
///     location_score * 0.3      # exact 100 / region 50 / partial 25 / none 0
/// )
///
/// Skills are not a factor.
pub fn composite_score(candidate: &CandidateProfile, requester: &RequestingUserProfile) -> f64 {
    let genre = genre_score(&requester.genres, &candidate.genres);
    let location = location_score(requester.location.as_deref(), candidate.location.as_deref());

    genre * GENRE_WEIGHT + location * LOCATION_WEIGHT
}
