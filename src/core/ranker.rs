use std::cmp::Ordering;

use feruca::Collator;
use crate::models::{CandidateProfile, RequestingUserProfile};
use crate::core::scoring::composite_score;

/// Orders candidate collaborators best-first for a requesting user
///
/// # Ordering
/// 1. Composite score, descending
/// 2. Display name, ascending, by Unicode collation (CLDR root order)
/// 3. Identity, ascending
///
/// The ranker holds no state; one instance can be shared across workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollaboratorRanker;

impl CollaboratorRanker {
    pub fn new() -> Self {
        Self
    }

    /// Rank candidates for a requester
    ///
    /// Without a requester every candidate scores zero, so the result is
    /// ordered by display name alone. The output always holds exactly the
    /// input candidates.
    pub fn rank(
        &self,
        candidates: Vec<CandidateProfile>,
        requester: Option<&RequestingUserProfile>,
    ) -> Vec<CandidateProfile> {
        tracing::debug!(
            "Ranking {} candidates (requester known: {})",
            candidates.len(),
            requester.is_some()
        );

        let mut scored: Vec<(f64, CandidateProfile)> = candidates
            .into_iter()
            .map(|candidate| {
                let score = requester
                    .map(|r| composite_score(&candidate, r))
                    .unwrap_or(0.0);
                (score, candidate)
            })
            .collect();

        let mut collator = Collator::default();
        scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b
                .total_cmp(score_a)
                .then_with(|| collator.collate(a.display_name.as_str(), b.display_name.as_str()))
                .then_with(|| a.id.cmp(&b.id))
        });

        // Scores are sort keys only
        scored.into_iter().map(|(_, candidate)| candidate).collect()
    }
}

/// Rank candidates with a default ranker
pub fn rank_collaborators(
    candidates: Vec<CandidateProfile>,
    requester: Option<&RequestingUserProfile>,
) -> Vec<CandidateProfile> {
    CollaboratorRanker::new().rank(candidates, requester)
}

/// Dictionary-style name comparison
///
/// Case and accents are secondary to the base letters, so "Émile" sorts
/// between "Amy" and "Mia" and "amy" sorts before "Bob".
pub fn compare_display_names(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}
