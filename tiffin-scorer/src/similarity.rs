//! Cosine-similarity match scoring against the candidate-set average.

use std::cmp::Ordering;

use tiffin_core::{
    DEFAULT_LIMIT, FeatureColumn, FeatureError, RankError, Ranker, Recommendation, Restaurant,
};

use crate::ReferenceProfile;

/// Rank candidates by cosine similarity to their own average profile.
///
/// Every candidate is projected onto the configured feature columns, the
/// resulting matrix is averaged into a [`ReferenceProfile`], and each
/// candidate scores by cosine similarity to that profile. The default
/// columns are all non-negative, so scores fall within `0.0..=1.0`.
///
/// # Examples
///
/// ```
/// use tiffin_core::{City, Cuisine, Ranker, Restaurant};
/// use tiffin_scorer::MatchScorer;
///
/// let twin = |id| {
///     Restaurant::new(id, format!("Twin {id}"), City::Delhi, vec![Cuisine::NorthIndian])
///         .expect("valid restaurant")
///         .try_with_rating(4.0)
///         .expect("valid rating")
///         .try_with_cost(500)
///         .expect("valid cost")
/// };
/// let recommendations = MatchScorer::new().rank(&[twin(1), twin(2)]).expect("rankable");
/// assert!(recommendations.iter().all(|r| (r.score - 1.0).abs() < 1e-6));
/// ```
#[derive(Debug, Clone)]
pub struct MatchScorer {
    columns: Vec<FeatureColumn>,
    limit: usize,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScorer {
    /// Construct a scorer over [`FeatureColumn::default_set`] returning at
    /// most [`DEFAULT_LIMIT`] results.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: FeatureColumn::default_set(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Replace the feature columns while returning `self` for chaining.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<FeatureColumn>) -> Self {
        self.columns = columns;
        self
    }

    /// Replace the result limit while returning `self` for chaining.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The configured feature columns.
    #[must_use]
    pub fn columns(&self) -> &[FeatureColumn] {
        &self.columns
    }
}

impl Ranker for MatchScorer {
    fn rank(&self, candidates: &[Restaurant]) -> Result<Vec<Recommendation>, RankError> {
        if candidates.is_empty() {
            return Err(RankError::EmptyCandidates);
        }
        let matrix = feature_matrix(candidates, &self.columns)?;
        let profile = ReferenceProfile::from_rows(&matrix).ok_or(RankError::EmptyCandidates)?;
        log::debug!(
            "scoring {} candidates over {} feature columns",
            candidates.len(),
            self.columns.len()
        );
        let mut scored: Vec<Recommendation> = candidates
            .iter()
            .zip(&matrix)
            .map(|(restaurant, row)| Recommendation {
                restaurant: restaurant.clone(),
                score: to_score(profile.similarity_to(row)),
            })
            .collect();
        // Stable sort keeps input order for tied scores.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(self.limit);
        Ok(scored)
    }
}

/// Project `candidates` onto `columns`, one row per candidate.
fn feature_matrix(
    candidates: &[Restaurant],
    columns: &[FeatureColumn],
) -> Result<Vec<Vec<f64>>, FeatureError> {
    candidates
        .iter()
        .map(|restaurant| {
            columns
                .iter()
                .map(|column| column.extract(restaurant))
                .collect()
        })
        .collect()
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "similarity values are bounded by 1.0 so the narrowing cast is safe"
)]
fn to_score(similarity: f64) -> f32 {
    similarity as f32
}
