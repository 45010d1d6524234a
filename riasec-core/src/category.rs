//! The six RIASEC interest categories.
//!
//! The enum offers compile-time safety for category lookups and fixes the
//! canonical ordering used by every profile vector.
//!
//! # Examples
//! ```
//! use riasec_core::Category;
//!
//! assert_eq!(Category::Realistic.code(), 'R');
//! assert_eq!(Category::Social.to_string(), "social");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of RIASEC categories.
pub const CATEGORY_COUNT: usize = 6;

/// A vocational interest category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Hands-on work with tools, machines, plants or animals.
    Realistic,
    /// Observation, investigation and problem solving.
    Investigative,
    /// Self-expression, design and unstructured creative work.
    Artistic,
    /// Helping, teaching and caring for people.
    Social,
    /// Leading, persuading and starting ventures.
    Enterprising,
    /// Data, records and well-defined procedures.
    Conventional,
}

/// Error returned when a string names no category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategoryError(pub String);

impl Category {
    /// All categories in RIASEC order.
    pub const ALL: [Self; CATEGORY_COUNT] = [
        Self::Realistic,
        Self::Investigative,
        Self::Artistic,
        Self::Social,
        Self::Enterprising,
        Self::Conventional,
    ];

    /// Return the one-letter RIASEC code.
    ///
    /// # Examples
    /// ```
    /// use riasec_core::Category;
    ///
    /// let codes: String = Category::ALL.iter().map(|c| c.code()).collect();
    /// assert_eq!(codes, "RIASEC");
    /// ```
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Realistic => 'R',
            Self::Investigative => 'I',
            Self::Artistic => 'A',
            Self::Social => 'S',
            Self::Enterprising => 'E',
            Self::Conventional => 'C',
        }
    }

    /// Return the category name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Realistic => "realistic",
            Self::Investigative => "investigative",
            Self::Artistic => "artistic",
            Self::Social => "social",
            Self::Enterprising => "enterprising",
            Self::Conventional => "conventional",
        }
    }

    /// Position of the category within [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Realistic => 0,
            Self::Investigative => 1,
            Self::Artistic => 2,
            Self::Social => 3,
            Self::Enterprising => 4,
            Self::Conventional => 5,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategoryError;

    /// Parse either the one-letter code or the full name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| {
                needle == category.as_str()
                    || needle.chars().eq(category.code().to_lowercase())
            })
            .ok_or_else(|| UnknownCategoryError(s.to_owned()))
    }
}
