//! Ranking implementations for the Tiffin recommendation engine.
//!
//! The crate provides two complementary rankers:
//! - **Match scoring** projects every candidate onto the numeric feature
//!   schema, averages the candidate set into a [`ReferenceProfile`], and
//!   orders candidates by cosine similarity to that profile. The candidates
//!   closest to the set's own average surface first.
//! - **Rating ranking** orders candidates by their raw rating, the simpler
//!   presentation used when no similarity profile is wanted.
//!
//! Both rankers implement the [`Ranker`](tiffin_core::Ranker) trait, return
//! at most their configured limit of results, and keep input order for tied
//! scores.
//!
//! # Examples
//!
//! ```
//! use tiffin_core::{City, Cuisine, Ranker, Restaurant};
//! use tiffin_scorer::MatchScorer;
//!
//! # fn main() -> Result<(), tiffin_core::RankError> {
//! let candidates = vec![
//!     Restaurant::new(1, "Spice Route", City::Bangalore, vec![Cuisine::Biryani])
//!         .expect("valid restaurant")
//!         .try_with_rating(4.5)
//!         .expect("valid rating")
//!         .try_with_cost(450)
//!         .expect("valid cost"),
//! ];
//! let recommendations = MatchScorer::new().rank(&candidates)?;
//! assert_eq!(recommendations.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod profile;
mod rating;
mod similarity;

pub use profile::ReferenceProfile;
pub use rating::RatingRanker;
pub use similarity::MatchScorer;
