//! Process-wide immutable restaurant dataset handle.
//!
//! A catalogue is built once at startup and shared by reference afterwards.
//! Cloning is cheap and never copies the rows, so every reader observes the
//! same dataset for the lifetime of the process.

use std::sync::Arc;

use crate::{CandidateFilter, City, Cuisine, Restaurant};

/// Immutable, cheaply cloneable collection of restaurants.
///
/// # Examples
/// ```
/// use tiffin_core::{CandidateFilter, Catalogue, City, Cuisine, Restaurant};
///
/// let rows = vec![
///     Restaurant::new(1, "Spice Route", City::Bangalore, vec![Cuisine::Biryani]).unwrap(),
///     Restaurant::new(2, "Dragon Bowl", City::Mumbai, vec![Cuisine::Chinese]).unwrap(),
/// ];
/// let catalogue = Catalogue::new(rows);
/// let filter = CandidateFilter::new().with_city(City::Mumbai);
/// assert_eq!(catalogue.select(&filter).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    restaurants: Arc<[Restaurant]>,
}

impl Catalogue {
    /// Build a catalogue from validated rows.
    #[must_use]
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants: restaurants.into(),
        }
    }

    /// All rows in source order.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Whether the catalogue holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Select the rows passing `filter`, preserving source order.
    ///
    /// The candidate set is rebuilt from scratch on every call; partial
    /// updates are never attempted.
    #[must_use]
    pub fn select(&self, filter: &CandidateFilter) -> Vec<Restaurant> {
        filter.apply(&self.restaurants)
    }

    /// Cities present in the catalogue, in schema order.
    #[must_use]
    pub fn observed_cities(&self) -> Vec<City> {
        City::ALL
            .iter()
            .copied()
            .filter(|&city| self.restaurants.iter().any(|r| r.city == city))
            .collect()
    }

    /// Cuisines present in the catalogue, in schema order.
    #[must_use]
    pub fn observed_cuisines(&self) -> Vec<Cuisine> {
        Cuisine::ALL
            .iter()
            .copied()
            .filter(|&cuisine| self.restaurants.iter().any(|r| r.serves(cuisine)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Restaurant> {
        vec![
            Restaurant::new(1, "Spice Route", City::Bangalore, vec![Cuisine::Biryani]).unwrap(),
            Restaurant::new(2, "Dosa Palace", City::Chennai, vec![Cuisine::SouthIndian]).unwrap(),
            Restaurant::new(3, "Dragon Bowl", City::Mumbai, vec![Cuisine::Chinese]).unwrap(),
        ]
    }

    #[test]
    fn clones_share_rows() {
        let catalogue = Catalogue::new(rows());
        let clone = catalogue.clone();
        assert_eq!(catalogue.restaurants().as_ptr(), clone.restaurants().as_ptr());
    }

    #[test]
    fn observed_sets_skip_absent_values() {
        let catalogue = Catalogue::new(rows());
        assert_eq!(
            catalogue.observed_cities(),
            vec![City::Bangalore, City::Mumbai, City::Chennai]
        );
        assert!(!catalogue.observed_cuisines().contains(&Cuisine::NorthIndian));
    }

    #[test]
    fn empty_catalogue_reports_empty() {
        let catalogue = Catalogue::default();
        assert!(catalogue.is_empty());
        assert_eq!(catalogue.select(&CandidateFilter::new()).len(), 0);
    }
}
