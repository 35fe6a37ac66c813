//! Test-only fixtures shared by unit and behaviour tests.

use crate::{Catalogue, City, Cuisine, Restaurant};

/// Build a minimal valid restaurant with neither rating nor cost.
///
/// # Panics
/// Panics when the fixture arguments violate the record invariants.
#[must_use]
pub fn restaurant(id: u64, name: &str, city: City, cuisine: Cuisine) -> Restaurant {
    Restaurant::new(id, name, city, vec![cuisine]).expect("fixture restaurant is valid")
}

/// Build a fully populated restaurant.
///
/// # Panics
/// Panics when the fixture arguments violate the record invariants.
#[must_use]
pub fn rated(
    id: u64,
    name: &str,
    city: City,
    cuisine: Cuisine,
    rating: f32,
    cost: u16,
) -> Restaurant {
    restaurant(id, name, city, cuisine)
        .try_with_rating(rating)
        .expect("fixture rating is valid")
        .try_with_cost(cost)
        .expect("fixture cost is valid")
}

/// A small catalogue covering every city and cuisine.
///
/// Rows are ordered by id; two Bangalore biryani houses share a cuisine so
/// tie and dedup behaviour can be exercised.
#[must_use]
pub fn sample_catalogue() -> Catalogue {
    Catalogue::new(vec![
        rated(1, "Spice Route", City::Bangalore, Cuisine::Biryani, 4.5, 450),
        rated(2, "Dosa Palace", City::Chennai, Cuisine::SouthIndian, 4.2, 250),
        rated(3, "Curry Leaf", City::Bangalore, Cuisine::SouthIndian, 4.0, 350),
        rated(4, "Dragon Bowl", City::Mumbai, Cuisine::Chinese, 3.8, 550),
        rated(5, "Tandoor Nights", City::Delhi, Cuisine::NorthIndian, 4.7, 650),
        rated(6, "Biryani House", City::Bangalore, Cuisine::Biryani, 4.6, 350),
    ])
}
