//! Candidate selection predicates over the catalogue.
//!
//! Filters mirror the dashboard controls: home city, acceptable cuisines,
//! minimum rating, and maximum cost. An unset field matches everything, so
//! the default filter selects the whole catalogue.

use std::collections::HashSet;

use crate::{City, Cuisine, Restaurant};

/// Predicate describing which restaurants may enter the candidate set.
///
/// # Examples
/// ```
/// use tiffin_core::{CandidateFilter, City, Cuisine};
///
/// let filter = CandidateFilter::new()
///     .with_city(City::Bangalore)
///     .with_cuisine(Cuisine::Biryani)
///     .with_min_rating(4.0);
/// assert_eq!(filter.city, Some(City::Bangalore));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateFilter {
    /// Required home city, when set.
    pub city: Option<City>,
    /// Acceptable cuisines; an empty list accepts any cuisine.
    pub cuisines: Vec<Cuisine>,
    /// Minimum rating bound, when set.
    pub min_rating: Option<f32>,
    /// Maximum cost bound in rupees, when set.
    pub max_cost: Option<u16>,
}

impl CandidateFilter {
    /// Construct a filter that matches every restaurant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the given home city while returning `self` for chaining.
    #[must_use]
    pub fn with_city(mut self, city: City) -> Self {
        self.city = Some(city);
        self
    }

    /// Accept an additional cuisine while returning `self` for chaining.
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: Cuisine) -> Self {
        self.cuisines.push(cuisine);
        self
    }

    /// Require a minimum rating while returning `self` for chaining.
    #[must_use]
    pub fn with_min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    /// Cap the cost in rupees while returning `self` for chaining.
    #[must_use]
    pub fn with_max_cost(mut self, max_cost: u16) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// Copy the filter with the rating and cost bounds removed.
    ///
    /// City and cuisine constraints are kept. The relaxed filter backs the
    /// fallback search when the strict bounds match nothing.
    #[must_use]
    pub fn without_limits(&self) -> Self {
        Self {
            city: self.city,
            cuisines: self.cuisines.clone(),
            min_rating: None,
            max_cost: None,
        }
    }

    /// Whether `restaurant` passes every active bound.
    ///
    /// A restaurant with no rating fails an active rating bound, and one
    /// with no cost fails an active cost bound.
    ///
    /// # Examples
    /// ```
    /// use tiffin_core::{CandidateFilter, City, Cuisine, Restaurant};
    ///
    /// let filter = CandidateFilter::new().with_min_rating(4.0);
    /// let unrated =
    ///     Restaurant::new(1, "Spice Route", City::Bangalore, vec![Cuisine::Biryani]).unwrap();
    /// assert!(!filter.matches(&unrated));
    /// ```
    #[must_use]
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        self.matches_city(restaurant)
            && self.matches_cuisine(restaurant)
            && self.matches_rating(restaurant)
            && self.matches_cost(restaurant)
    }

    fn matches_city(&self, restaurant: &Restaurant) -> bool {
        self.city.map_or(true, |city| restaurant.city == city)
    }

    fn matches_cuisine(&self, restaurant: &Restaurant) -> bool {
        self.cuisines.is_empty()
            || self
                .cuisines
                .iter()
                .any(|&cuisine| restaurant.serves(cuisine))
    }

    fn matches_rating(&self, restaurant: &Restaurant) -> bool {
        self.min_rating
            .map_or(true, |min| restaurant.rating.is_some_and(|rating| rating >= min))
    }

    fn matches_cost(&self, restaurant: &Restaurant) -> bool {
        self.max_cost
            .map_or(true, |max| restaurant.cost.is_some_and(|cost| cost <= max))
    }

    /// Select the matching restaurants, preserving input order.
    #[must_use]
    pub fn apply(&self, restaurants: &[Restaurant]) -> Vec<Restaurant> {
        restaurants
            .iter()
            .filter(|restaurant| self.matches(restaurant))
            .cloned()
            .collect()
    }
}

/// Keep the first restaurant per name, preserving input order.
///
/// Source files list chains once per branch; presentation wants one row per
/// name.
///
/// # Examples
/// ```
/// use tiffin_core::{City, Cuisine, Restaurant, dedupe_by_name};
///
/// let twin = |id| {
///     Restaurant::new(id, "Dosa Palace", City::Chennai, vec![Cuisine::SouthIndian]).unwrap()
/// };
/// let unique = dedupe_by_name(vec![twin(1), twin(2)]);
/// assert_eq!(unique.len(), 1);
/// assert_eq!(unique[0].id, 1);
/// ```
#[must_use]
pub fn dedupe_by_name(mut restaurants: Vec<Restaurant>) -> Vec<Restaurant> {
    let mut seen = HashSet::new();
    restaurants.retain(|restaurant| seen.insert(restaurant.name.clone()));
    restaurants
}
