//! Cuisines a restaurant may offer.
//!
//! The enum is the closed category set behind cuisine filters and the
//! per-cuisine indicator columns of the feature schema.
//!
//! # Examples
//! ```
//! use tiffin_core::Cuisine;
//!
//! assert_eq!(Cuisine::Biryani.as_str(), "biryani");
//! assert_eq!(Cuisine::SouthIndian.to_string(), "south indian");
//! ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Cuisine {
    /// Layered rice dishes.
    Biryani,
    /// Dosa, idli, and other southern staples.
    SouthIndian,
    /// Tandoor and curry house fare.
    NorthIndian,
    /// Indo-Chinese cooking.
    Chinese,
}

impl Cuisine {
    /// Every cuisine in schema order.
    ///
    /// Indicator columns are derived from this order, so it must stay
    /// stable across releases.
    pub const ALL: [Self; 4] = [
        Self::Biryani,
        Self::SouthIndian,
        Self::NorthIndian,
        Self::Chinese,
    ];

    /// Return the cuisine as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use tiffin_core::Cuisine;
    ///
    /// assert_eq!(Cuisine::NorthIndian.as_str(), "north indian");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Biryani => "biryani",
            Self::SouthIndian => "south indian",
            Self::NorthIndian => "north indian",
            Self::Chinese => "chinese",
        }
    }
}

impl std::fmt::Display for Cuisine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Cuisine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "biryani" => Ok(Self::Biryani),
            "south indian" => Ok(Self::SouthIndian),
            "north indian" => Ok(Self::NorthIndian),
            "chinese" => Ok(Self::Chinese),
            _ => Err(format!("unknown cuisine '{s}'")),
        }
    }
}
