/// Score for an exact (normalized) location match
pub const EXACT_MATCH_SCORE: f64 = 100.0;
/// Score when only the trailing "region" segment matches
pub const REGION_MATCH_SCORE: f64 = 50.0;
/// Score when some other segment matches
pub const PARTIAL_MATCH_SCORE: f64 = 25.0;

/// Segments this short (state abbreviations, initials) never count as a partial match
const MIN_PARTIAL_SEGMENT_LEN: usize = 3;

/// How closely two free-text locations agree
///
/// This is string matching, not geocoding. "Austin, TX" and "Round Rock, TX"
/// only share a region even though they are neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationTier {
    Exact,
    Region,
    Partial,
    NoMatch,
}

impl LocationTier {
    pub fn score(self) -> f64 {
        match self {
            LocationTier::Exact => EXACT_MATCH_SCORE,
            LocationTier::Region => REGION_MATCH_SCORE,
            LocationTier::Partial => PARTIAL_MATCH_SCORE,
            LocationTier::NoMatch => 0.0,
        }
    }
}

/// Trim and lowercase a location; blank strings count as absent
fn normalize(location: Option<&str>) -> Option<String> {
    let trimmed = location?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn segments(location: &str) -> Vec<&str> {
    location.split(',').map(str::trim).collect()
}

/// Classify how two locations match
///
/// Tiers are checked in order and the first hit wins:
/// 1. whole string equal
/// 2. both have a "City, Region" shape and the (non-empty) last segments are equal
/// 3. any pair of segments is equal and longer than two characters
///
/// A trailing comma leaves an empty last segment, and two empty regions
/// never match: "Austin," against "Dallas," is `NoMatch`, not `Region`.
pub fn location_tier(requester: Option<&str>, candidate: Option<&str>) -> LocationTier {
    let (Some(requester), Some(candidate)) = (normalize(requester), normalize(candidate)) else {
        return LocationTier::NoMatch;
    };

    if requester == candidate {
        return LocationTier::Exact;
    }

    let requester_parts = segments(&requester);
    let candidate_parts = segments(&candidate);

    if requester_parts.len() >= 2 && candidate_parts.len() >= 2 {
        if let (Some(a), Some(b)) = (requester_parts.last(), candidate_parts.last()) {
            if !a.is_empty() && a == b {
                return LocationTier::Region;
            }
        }
    }

    let partial = requester_parts.iter().any(|a| {
        a.chars().count() >= MIN_PARTIAL_SEGMENT_LEN && candidate_parts.iter().any(|b| a == b)
    });

    if partial {
        LocationTier::Partial
    } else {
        LocationTier::NoMatch
    }
}

/// Calculate location score (0, 25, 50 or 100)
#[inline]
pub fn location_score(requester: Option<&str>, candidate: Option<&str>) -> f64 {
    location_tier(requester, candidate).score()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(location_tier(Some("Austin, TX"), Some("Austin, TX")), LocationTier::Exact);
        assert_eq!(location_score(Some("  austin, tx "), Some("AUSTIN, TX")), 100.0);
    }

    #[test]
    fn test_region_match() {
        assert_eq!(location_tier(Some("Austin, TX"), Some("Houston, TX")), LocationTier::Region);
        assert_eq!(location_score(Some("Austin,TX"), Some("Houston , tx")), 50.0);
    }

    #[test]
    fn test_partial_match() {
        // City matches but only one side carries a region
        assert_eq!(location_tier(Some("Austin"), Some("Austin, TX")), LocationTier::Partial);
        assert_eq!(location_score(Some("Austin, TX"), Some("Portland, Austin")), 25.0);
    }

    #[test]
    fn test_short_segments_ignored() {
        // "ny" is too short to count on its own
        assert_eq!(location_tier(Some("NY"), Some("Brooklyn, NY")), LocationTier::NoMatch);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(location_score(Some("Austin, TX"), Some("Miami, FL")), 0.0);
    }

    #[test]
    fn test_absent_or_blank() {
        assert_eq!(location_score(None, Some("Austin, TX")), 0.0);
        assert_eq!(location_score(Some("Austin, TX"), None), 0.0);
        assert_eq!(location_score(Some("   "), Some("   ")), 0.0);
    }

    #[test]
    fn test_malformed_locations_do_not_panic() {
        assert_eq!(location_score(Some(",,,"), Some(",")), 0.0);
        assert_eq!(location_score(Some("Austin,"), Some("Dallas,")), 0.0);
        assert_eq!(location_score(Some("Austin,"), Some("Austin, TX")), 25.0);
    }

    #[test]
    fn test_empty_region_is_not_a_region_match() {
        assert_eq!(location_tier(Some("Austin,"), Some("Dallas,")), LocationTier::NoMatch);
        assert_eq!(location_tier(Some("Austin, "), Some("Dallas ,")), LocationTier::NoMatch);
        assert_eq!(location_tier(Some("Austin, TX"), Some("Dallas, TX")), LocationTier::Region);
    }
}
