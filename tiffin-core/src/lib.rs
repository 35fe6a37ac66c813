//! Core domain types for the Tiffin recommendation engine.
//!
//! The crate models the restaurant catalogue: typed records with
//! ingestion-time validation, closed category enums for cities and cuisines,
//! candidate filters, the numeric feature schema, and the ranking seam
//! implemented by the scorer crate. Constructors return `Result` to surface
//! invalid input early so downstream components can rely on the invariants.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalogue;
mod city;
mod cuisine;
mod feature;
mod filter;
mod ranker;
mod restaurant;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalogue::Catalogue;
pub use city::City;
pub use cuisine::Cuisine;
pub use feature::{FeatureColumn, FeatureError};
pub use filter::{CandidateFilter, dedupe_by_name};
pub use ranker::{DEFAULT_LIMIT, RankError, Ranker, Recommendation};
pub use restaurant::{Restaurant, RestaurantError};
