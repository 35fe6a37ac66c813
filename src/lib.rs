//! Facade crate for the Tiffin restaurant recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the ranking
//! implementations behind a feature flag.

#![forbid(unsafe_code)]

pub use tiffin_core::{
    CandidateFilter, Catalogue, City, Cuisine, DEFAULT_LIMIT, FeatureColumn, FeatureError,
    RankError, Ranker, Recommendation, Restaurant, RestaurantError,
};

#[cfg(feature = "scorer")]
pub use tiffin_scorer::{MatchScorer, RatingRanker, ReferenceProfile};
