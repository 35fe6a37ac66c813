//! Restaurant records with ingestion-time validation.
//!
//! Optional fields model values missing from the source data. Constructors
//! return `Result` to surface invalid input early; scoring never has to
//! re-validate rows.

use thiserror::Error;

use crate::{City, Cuisine};

/// A restaurant in the catalogue.
///
/// # Examples
///
/// ```
/// use tiffin_core::{City, Cuisine, Restaurant};
///
/// # fn main() -> Result<(), tiffin_core::RestaurantError> {
/// let restaurant = Restaurant::new(1, "Spice Route", City::Bangalore, vec![Cuisine::Biryani])?
///     .try_with_rating(4.5)?
///     .try_with_cost(450)?;
/// assert_eq!(restaurant.rating, Some(4.5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restaurant {
    /// Unique identifier.
    pub id: u64,
    /// Display name; never empty.
    pub name: String,
    /// Home city.
    pub city: City,
    /// Cuisines on offer; never empty.
    pub cuisines: Vec<Cuisine>,
    /// Aggregate rating in `0.0..=5.0`, when known.
    pub rating: Option<f32>,
    /// Typical cost for two in rupees, when known.
    pub cost: Option<u16>,
    /// Free-form locality label, when known.
    pub address: Option<String>,
}

/// Errors returned by [`Restaurant::new`] and the `try_with_*` builders.
#[derive(Debug, Error, PartialEq)]
pub enum RestaurantError {
    /// The name was empty or whitespace.
    #[error("restaurant must have a non-empty name")]
    EmptyName,
    /// No cuisines were supplied.
    #[error("restaurant must offer at least one cuisine")]
    MissingCuisine,
    /// A rating was outside the supported range or not finite.
    #[error("rating {value} is outside 0.0..=5.0")]
    InvalidRating {
        /// Rejected rating value.
        value: f32,
    },
    /// A cost of zero rupees was supplied.
    #[error("cost must be positive")]
    ZeroCost,
}

impl Restaurant {
    /// Validate and construct a [`Restaurant`] with no optional fields set.
    ///
    /// # Errors
    /// Returns [`RestaurantError::EmptyName`] for a blank name and
    /// [`RestaurantError::MissingCuisine`] for an empty cuisine list.
    ///
    /// # Examples
    /// ```
    /// use tiffin_core::{City, Cuisine, Restaurant};
    ///
    /// let restaurant =
    ///     Restaurant::new(7, "Dosa Palace", City::Chennai, vec![Cuisine::SouthIndian]).unwrap();
    /// assert!(restaurant.rating.is_none());
    /// ```
    pub fn new(
        id: u64,
        name: impl Into<String>,
        city: City,
        cuisines: Vec<Cuisine>,
    ) -> Result<Self, RestaurantError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RestaurantError::EmptyName);
        }
        if cuisines.is_empty() {
            return Err(RestaurantError::MissingCuisine);
        }
        Ok(Self {
            id,
            name,
            city,
            cuisines,
            rating: None,
            cost: None,
            address: None,
        })
    }

    /// Attach a rating while returning `self` for chaining.
    ///
    /// # Errors
    /// Returns [`RestaurantError::InvalidRating`] when the value is not
    /// finite or falls outside `0.0..=5.0`.
    pub fn try_with_rating(mut self, rating: f32) -> Result<Self, RestaurantError> {
        if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
            return Err(RestaurantError::InvalidRating { value: rating });
        }
        self.rating = Some(rating);
        Ok(self)
    }

    /// Attach a cost in rupees while returning `self` for chaining.
    ///
    /// # Errors
    /// Returns [`RestaurantError::ZeroCost`] for a zero cost.
    pub fn try_with_cost(mut self, cost: u16) -> Result<Self, RestaurantError> {
        if cost == 0 {
            return Err(RestaurantError::ZeroCost);
        }
        self.cost = Some(cost);
        Ok(self)
    }

    /// Attach a locality label while returning `self` for chaining.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Whether the restaurant lists `cuisine`.
    ///
    /// # Examples
    /// ```
    /// use tiffin_core::{City, Cuisine, Restaurant};
    ///
    /// let restaurant =
    ///     Restaurant::new(3, "Curry Leaf", City::Bangalore, vec![Cuisine::SouthIndian]).unwrap();
    /// assert!(restaurant.serves(Cuisine::SouthIndian));
    /// assert!(!restaurant.serves(Cuisine::Chinese));
    /// ```
    #[must_use]
    pub fn serves(&self, cuisine: Cuisine) -> bool {
        self.cuisines.contains(&cuisine)
    }
}
