use std::collections::HashSet;

/// Collapse a genre list into its case-insensitive set
pub fn genre_set(genres: &[String]) -> HashSet<String> {
    genres.iter().map(|g| g.to_lowercase()).collect()
}

/// Calculate genre score (0-100)
///
/// Measures which fraction of the requester's genres the candidate covers.
/// The candidate's own genre count plays no part, so a candidate listing
/// many genres is not penalized.
///
/// # Arguments
/// * `requester_genres` - Genres of the user searching for collaborators
/// * `candidate_genres` - Genres of the candidate being scored
///
/// # Returns
/// `matches / |requester genres| * 100`, or 0.0 when the requester has no genres
pub fn genre_score(requester_genres: &[String], candidate_genres: &[String]) -> f64 {
    let wanted = genre_set(requester_genres);
    if wanted.is_empty() {
        return 0.0;
    }

    let offered = genre_set(candidate_genres);
    let matches = wanted.iter().filter(|g| offered.contains(*g)).count();

    (matches as f64 / wanted.len() as f64) * 100.0
}
