//! Occupation records and the two halves they split into.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ReferenceProfile;

/// An occupation's reference scores keyed by its code.
///
/// # Examples
/// ```
/// use riasec_core::{OccupationReference, ReferenceProfile};
///
/// let reference = OccupationReference::new(
///     "17-2051.00",
///     ReferenceProfile::new([6.3, 4.7, 2.0, 2.3, 3.6, 3.8]),
/// );
/// assert_eq!(reference.code, "17-2051.00");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OccupationReference {
    /// Occupation code shared with the metadata table.
    pub code: String,
    /// Reference scores.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub profile: ReferenceProfile,
}

impl OccupationReference {
    /// Construct a reference row.
    #[must_use]
    pub fn new(code: impl Into<String>, profile: ReferenceProfile) -> Self {
        Self {
            code: code.into(),
            profile,
        }
    }
}

/// Display metadata for an occupation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OccupationMetadata {
    /// Occupation code shared with the reference table.
    pub code: String,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
}

impl OccupationMetadata {
    /// Construct a metadata row.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A complete catalog entry.
///
/// Records split into an [`OccupationReference`] and an
/// [`OccupationMetadata`] so each half can live in its own table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OccupationRecord {
    /// Occupation code.
    pub code: String,
    /// Reference scores.
    pub profile: ReferenceProfile,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
}

impl OccupationRecord {
    /// Split the record into its reference and metadata halves.
    #[must_use]
    pub fn split(self) -> (OccupationReference, OccupationMetadata) {
        let reference = OccupationReference::new(self.code.clone(), self.profile);
        let metadata = OccupationMetadata {
            code: self.code,
            title: self.title,
            description: self.description,
        };
        (reference, metadata)
    }
}
