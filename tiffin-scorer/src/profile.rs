//! Reference profiles summarising a candidate set.
//!
//! A profile is the element-wise mean of the candidate set's feature matrix.
//! It is recomputed for every scoring invocation and never persisted, so
//! comparisons against profiles from other invocations are meaningless.

/// Column means of a candidate set's feature matrix.
///
/// # Examples
/// ```
/// use tiffin_scorer::ReferenceProfile;
///
/// let rows = vec![vec![4.0, 300.0], vec![3.0, 500.0]];
/// let profile = ReferenceProfile::from_rows(&rows).expect("non-empty rows");
/// assert_eq!(profile.means(), &[3.5, 400.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceProfile {
    means: Vec<f64>,
}

impl ReferenceProfile {
    /// Average the rows of a feature matrix into a profile.
    ///
    /// Returns `None` when `rows` is empty: a zero-size candidate set has no
    /// meaningful average, and callers must short-circuit before scoring.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "column means require summing and dividing feature values"
    )]
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let width = rows.first()?.len();
        let mut means = vec![0.0_f64; width];
        for row in rows {
            for (mean, value) in means.iter_mut().zip(row) {
                *mean += value;
            }
        }
        let count = rows.len() as f64;
        for mean in &mut means {
            *mean /= count;
        }
        Some(Self { means })
    }

    /// The per-column means.
    #[must_use]
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Cosine similarity between `row` and the profile.
    ///
    /// Returns `0.0` when either vector has zero norm; non-finite results
    /// are sanitised to `0.0`.
    #[must_use]
    pub fn similarity_to(&self, row: &[f64]) -> f64 {
        cosine_similarity(row, &self.means)
    }
}

/// Cosine of the angle between `a` and `b`, with the zero-norm rule.
///
/// Vectors sharing a direction score `1.0`; orthogonal vectors score `0.0`.
/// A zero vector has no direction, so either zero norm yields `0.0` rather
/// than a division error.
#[expect(
    clippy::float_arithmetic,
    reason = "cosine similarity is defined by floating-point products"
)]
pub(crate) fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors must share a dimension");
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|y| y * y).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let similarity = dot / (norm_a * norm_b);
    if similarity.is_finite() { similarity } else { 0.0 }
}
