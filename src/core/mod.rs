// Core algorithm exports
pub mod genre;
pub mod location;
pub mod ranker;
pub mod scoring;

pub use genre::genre_score;
pub use location::{location_score, location_tier, LocationTier};
pub use ranker::{CollaboratorRanker, rank_collaborators, compare_display_names};
pub use scoring::composite_score;
