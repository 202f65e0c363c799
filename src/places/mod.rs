//! Place identity, merging and ranking.
//!
//! - [`Place`]: the place model
//! - [`identity`]: adaptive fuzzy name matching
//! - [`merge`]: translation application, source union, deduplication
//! - [`rank`]: star scoring with structured explanations

pub mod identity;
pub mod merge;
mod place;
pub mod rank;

pub use identity::NameMatcher;
pub use merge::{
    apply_translations, dedup_places, normalize_distances, union_sources, TitleTranslation,
};
pub use place::{Place, PlacePosition, PlaceSource, ScoreExplanation};
pub use rank::Ranker;
