//! Rating-ordered ranking.

use std::cmp::Ordering;

use tiffin_core::{DEFAULT_LIMIT, RankError, Ranker, Recommendation, Restaurant};

/// Rank candidates by their raw rating, best first.
///
/// Scores are the raw ratings in `0.0..=5.0`, a different scale from the
/// match scorer's similarities. A candidate with no rating reports a score
/// of `0.0` and therefore sorts last; tied ratings keep input order.
///
/// # Examples
///
/// ```
/// use tiffin_core::{City, Cuisine, Ranker, Restaurant};
/// use tiffin_scorer::RatingRanker;
///
/// let rate = |id, rating| {
///     Restaurant::new(id, format!("r{id}"), City::Chennai, vec![Cuisine::SouthIndian])
///         .expect("valid restaurant")
///         .try_with_rating(rating)
///         .expect("valid rating")
/// };
/// let ranked = RatingRanker::new()
///     .rank(&[rate(1, 3.9), rate(2, 4.6)])
///     .expect("rankable");
/// assert_eq!(ranked.first().map(|r| r.restaurant.id), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct RatingRanker {
    limit: usize,
}

impl Default for RatingRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingRanker {
    /// Construct a ranker returning at most [`DEFAULT_LIMIT`] results.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }

    /// Replace the result limit while returning `self` for chaining.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Ranker for RatingRanker {
    fn rank(&self, candidates: &[Restaurant]) -> Result<Vec<Recommendation>, RankError> {
        if candidates.is_empty() {
            return Err(RankError::EmptyCandidates);
        }
        let mut scored: Vec<Recommendation> = candidates
            .iter()
            .map(|restaurant| Recommendation {
                restaurant: restaurant.clone(),
                score: restaurant.rating.unwrap_or(0.0),
            })
            .collect();
        // Stable sort keeps input order for tied ratings.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(self.limit);
        Ok(scored)
    }
}
