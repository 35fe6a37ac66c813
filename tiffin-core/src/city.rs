//! Cities covered by the restaurant catalogue.
//!
//! The enum offers compile-time safety for city lookups and drives the
//! per-city indicator columns of the feature schema.
//!
//! # Examples
//! ```
//! use tiffin_core::City;
//!
//! assert_eq!(City::Bangalore.as_str(), "bangalore");
//! assert_eq!(City::Delhi.to_string(), "delhi");
//! ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum City {
    /// Bengaluru metropolitan area.
    Bangalore,
    /// Greater Mumbai.
    Mumbai,
    /// Delhi National Capital Region.
    Delhi,
    /// Chennai metropolitan area.
    Chennai,
}

impl City {
    /// Every city in schema order.
    ///
    /// Indicator columns are derived from this order, so it must stay
    /// stable across releases.
    pub const ALL: [Self; 4] = [Self::Bangalore, Self::Mumbai, Self::Delhi, Self::Chennai];

    /// Return the city as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use tiffin_core::City;
    ///
    /// assert_eq!(City::Chennai.as_str(), "chennai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bangalore => "bangalore",
            Self::Mumbai => "mumbai",
            Self::Delhi => "delhi",
            Self::Chennai => "chennai",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bangalore" | "bengaluru" => Ok(Self::Bangalore),
            "mumbai" => Ok(Self::Mumbai),
            "delhi" => Ok(Self::Delhi),
            "chennai" => Ok(Self::Chennai),
            _ => Err(format!("unknown city '{s}'")),
        }
    }
}
