//! Rank candidate restaurants for presentation.
//!
//! The `Ranker` trait assigns a score to every candidate and returns the
//! best matches in descending order. Scores are meaningful only within the
//! invocation that produced them.

use thiserror::Error;

use crate::{FeatureError, Restaurant};

/// Default number of recommendations returned by rankers.
pub const DEFAULT_LIMIT: usize = 10;

/// A scored restaurant produced by one ranking invocation.
///
/// The score scale is ranker-specific; compare scores only against others
/// from the same invocation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// The recommended restaurant.
    pub restaurant: Restaurant,
    /// Ranker-assigned score; finite and non-negative.
    pub score: f32,
}

/// Errors returned by [`Ranker::rank`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    /// The candidate set was empty.
    ///
    /// Callers are expected to detect an empty selection beforehand and
    /// report "no results" themselves; this variant is the library-level
    /// backstop.
    #[error("cannot rank an empty candidate set")]
    EmptyCandidates,
    /// A feature value could not be extracted from a candidate.
    #[error(transparent)]
    Feature(#[from] FeatureError),
}

/// Order candidates by descending relevance.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so independent
/// invocations can run from independent contexts.
///
/// Implementations must:
/// - Produce finite, non-negative scores.
/// - Sort results by score, descending; equal scores keep the candidates'
///   input order.
/// - Return at most `min(limit, candidates.len())` entries for their
///   configured limit.
///
/// # Examples
///
/// ```rust
/// use tiffin_core::{RankError, Ranker, Recommendation, Restaurant};
///
/// struct FirstCandidate;
///
/// impl Ranker for FirstCandidate {
///     fn rank(&self, candidates: &[Restaurant]) -> Result<Vec<Recommendation>, RankError> {
///         let first = candidates.first().ok_or(RankError::EmptyCandidates)?;
///         Ok(vec![Recommendation {
///             restaurant: first.clone(),
///             score: 1.0,
///         }])
///     }
/// }
/// ```
pub trait Ranker: Send + Sync {
    /// Rank `candidates`, best first.
    ///
    /// # Errors
    /// Returns [`RankError::EmptyCandidates`] for an empty slice and
    /// propagates feature extraction failures.
    fn rank(&self, candidates: &[Restaurant]) -> Result<Vec<Recommendation>, RankError>;
}
