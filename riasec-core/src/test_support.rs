//! Test-only builders for profiles and catalogs used by unit, behaviour and
//! property tests.

use crate::partition::QUESTION_COUNT;
use crate::profile::MAX_CATEGORY_TOTAL;
use crate::{
    InterestProfile, MetadataCatalog, OccupationMetadata, OccupationReference, ProfileVector,
    ReferenceCatalog, ReferenceProfile,
};

/// A profile whose six totals all equal `total`, capped at 40.
#[must_use]
pub fn constant_profile(total: u8) -> InterestProfile {
    InterestProfile::from_checked_totals([total.min(MAX_CATEGORY_TOTAL); 6])
}

/// Build a reference table from `(code, values)` pairs without validation.
///
/// Rows keep the given order, so callers control tie-breaking.
#[must_use]
pub fn reference_catalog(rows: &[(&str, ProfileVector)]) -> ReferenceCatalog {
    ReferenceCatalog {
        rows: rows
            .iter()
            .map(|(code, values)| OccupationReference::new(*code, ReferenceProfile::new(*values)))
            .collect(),
    }
}

/// Metadata rows for every occupation in `references`, titled after the code.
#[must_use]
pub fn metadata_for(references: &ReferenceCatalog) -> MetadataCatalog {
    MetadataCatalog {
        rows: references
            .rows
            .iter()
            .map(|row| {
                let metadata = OccupationMetadata::new(
                    row.code.clone(),
                    format!("Title {}", row.code),
                    format!("Description of {}", row.code),
                );
                (row.code.clone(), metadata)
            })
            .collect(),
    }
}

/// Sixty answers all set to `value`.
#[must_use]
pub fn uniform_answers(value: i64) -> Vec<i64> {
    vec![value; QUESTION_COUNT]
}
