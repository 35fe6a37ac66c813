//! Numeric feature schema projecting restaurants for similarity scoring.
//!
//! Each column maps a restaurant to one number: an indicator for a category
//! value, or a raw numeric field. Raw values are used as-is with no scaling,
//! and a missing numeric field is an error rather than an imputed default.

use thiserror::Error;

use crate::{City, Cuisine, Restaurant};

/// One column of the numeric feature matrix.
///
/// # Examples
/// ```
/// use tiffin_core::{City, Cuisine, FeatureColumn, Restaurant};
///
/// let restaurant =
///     Restaurant::new(1, "Dragon Bowl", City::Mumbai, vec![Cuisine::Chinese]).unwrap();
/// let column = FeatureColumn::CityIs(City::Mumbai);
/// assert_eq!(column.extract(&restaurant), Ok(1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureColumn {
    /// `1.0` when the restaurant is in the given city, else `0.0`.
    CityIs(City),
    /// `1.0` when the restaurant lists the given cuisine, else `0.0`.
    ServesCuisine(Cuisine),
    /// The raw rating value.
    Rating,
    /// The raw cost value in rupees.
    Cost,
}

/// Errors raised when a feature value cannot be extracted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeatureError {
    /// The restaurant has no rating to project.
    #[error("restaurant {id} has no rating value")]
    MissingRating {
        /// Identifier of the affected restaurant.
        id: u64,
    },
    /// The restaurant has no cost to project.
    #[error("restaurant {id} has no cost value")]
    MissingCost {
        /// Identifier of the affected restaurant.
        id: u64,
    },
}

impl FeatureColumn {
    /// The default column set: city indicators, cuisine indicators, rating,
    /// and cost, in that order.
    ///
    /// # Examples
    /// ```
    /// use tiffin_core::FeatureColumn;
    ///
    /// let columns = FeatureColumn::default_set();
    /// assert_eq!(columns.len(), 10);
    /// assert_eq!(columns.last(), Some(&FeatureColumn::Cost));
    /// ```
    #[must_use]
    pub fn default_set() -> Vec<Self> {
        City::ALL
            .iter()
            .copied()
            .map(Self::CityIs)
            .chain(Cuisine::ALL.iter().copied().map(Self::ServesCuisine))
            .chain([Self::Rating, Self::Cost])
            .collect()
    }

    /// Extract this column's value from `restaurant`.
    ///
    /// # Errors
    /// Returns [`FeatureError`] when the column needs a value the restaurant
    /// does not carry.
    pub fn extract(&self, restaurant: &Restaurant) -> Result<f64, FeatureError> {
        match self {
            Self::CityIs(city) => Ok(indicator(restaurant.city == *city)),
            Self::ServesCuisine(cuisine) => Ok(indicator(restaurant.serves(*cuisine))),
            Self::Rating => restaurant
                .rating
                .map(f64::from)
                .ok_or(FeatureError::MissingRating { id: restaurant.id }),
            Self::Cost => restaurant
                .cost
                .map(f64::from)
                .ok_or(FeatureError::MissingCost { id: restaurant.id }),
        }
    }
}

fn indicator(set: bool) -> f64 {
    if set { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn restaurant() -> Restaurant {
        Restaurant::new(
            9,
            "Tandoor Nights",
            City::Delhi,
            vec![Cuisine::NorthIndian, Cuisine::Biryani],
        )
        .unwrap()
        .try_with_rating(4.7)
        .unwrap()
        .try_with_cost(650)
        .unwrap()
    }

    #[rstest]
    #[case(FeatureColumn::CityIs(City::Delhi), 1.0)]
    #[case(FeatureColumn::CityIs(City::Mumbai), 0.0)]
    #[case(FeatureColumn::ServesCuisine(Cuisine::Biryani), 1.0)]
    #[case(FeatureColumn::ServesCuisine(Cuisine::Chinese), 0.0)]
    #[case(FeatureColumn::Rating, 4.7f32 as f64)]
    #[case(FeatureColumn::Cost, 650.0)]
    fn extracts_expected_values(
        restaurant: Restaurant,
        #[case] column: FeatureColumn,
        #[case] expected: f64,
    ) {
        assert_eq!(column.extract(&restaurant), Ok(expected));
    }

    #[rstest]
    fn missing_rating_is_an_error(restaurant: Restaurant) {
        let unrated = Restaurant {
            rating: None,
            ..restaurant
        };
        assert_eq!(
            FeatureColumn::Rating.extract(&unrated),
            Err(FeatureError::MissingRating { id: 9 })
        );
    }

    #[rstest]
    fn missing_cost_is_an_error(restaurant: Restaurant) {
        let unpriced = Restaurant {
            cost: None,
            ..restaurant
        };
        assert_eq!(
            FeatureColumn::Cost.extract(&unpriced),
            Err(FeatureError::MissingCost { id: 9 })
        );
    }

    #[rstest]
    fn default_set_starts_with_city_indicators(restaurant: Restaurant) {
        let columns = FeatureColumn::default_set();
        assert_eq!(columns.first(), Some(&FeatureColumn::CityIs(City::ALL[0])));
        for column in &columns {
            if !matches!(column, FeatureColumn::Rating | FeatureColumn::Cost) {
                let value = column.extract(&restaurant).unwrap();
                assert!(value == 0.0 || value == 1.0);
            }
        }
    }
}
