//! Deterministic sample catalogue generation.
//!
//! Provides a seeded stand-in catalogue for demos and benchmarks so the
//! engine can run without a CSV file on hand. The same configuration always
//! yields the same rows.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tiffin_core::{City, Cuisine, Restaurant};

/// Menu price points sampled for generated restaurants (rupees).
const COST_POINTS: [u16; 5] = [250, 350, 450, 550, 650];

/// Configuration for synthetic catalogue generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticConfig {
    /// Number of restaurants to generate.
    pub count: usize,
    /// Seed for the deterministic RNG.
    pub seed: u64,
}

impl SyntheticConfig {
    /// Default number of generated restaurants.
    pub const DEFAULT_COUNT: usize = 50;
    /// Default RNG seed.
    pub const DEFAULT_SEED: u64 = 42;
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            seed: Self::DEFAULT_SEED,
        }
    }
}

/// Generate a synthetic restaurant catalogue.
///
/// Cities, cuisines and costs are drawn uniformly from the closed schema;
/// ratings are drawn from 3.5 to 4.8 and rounded to one decimal place.
/// Restaurants are numbered from one and named after their position.
///
/// # Examples
/// ```
/// use tiffin_data::{SyntheticConfig, generate};
///
/// let restaurants = generate(SyntheticConfig::default());
/// assert_eq!(restaurants.len(), SyntheticConfig::DEFAULT_COUNT);
/// ```
#[must_use]
pub fn generate(config: SyntheticConfig) -> Vec<Restaurant> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    (1..=config.count)
        .map(|position| {
            let id = position as u64;
            let city = City::ALL.choose(&mut rng).copied().unwrap_or(City::Bangalore);
            let cuisine = Cuisine::ALL
                .choose(&mut rng)
                .copied()
                .unwrap_or(Cuisine::Biryani);
            let rating = (rng.gen_range(3.5_f32..4.8) * 10.0).round() / 10.0;
            let cost = COST_POINTS.choose(&mut rng).copied().unwrap_or(350);

            Restaurant {
                id,
                name: format!("Restaurant_{position}"),
                city,
                cuisines: vec![cuisine],
                rating: Some(rating),
                cost: Some(cost),
                address: Some(format!("Area_{position}")),
            }
        })
        .collect()
}
