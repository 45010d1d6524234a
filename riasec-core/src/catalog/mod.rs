//! Read-only occupation tables.
//!
//! Ranking reads a [`ReferenceTable`]; the join reads a [`MetadataTable`].
//! The two are separate lookups keyed by occupation code because they may be
//! refreshed independently.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::{OccupationMetadata, OccupationRecord, OccupationReference};

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteCatalog, SqliteCatalogError, write_sqlite_catalog};

/// Errors raised while building an in-memory table.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two rows shared an occupation code.
    #[error("occupation {code} appears more than once")]
    DuplicateOccupation {
        /// Repeated code.
        code: String,
    },
    /// A row had an empty or blank code.
    #[error("occupation code must not be empty")]
    EmptyOccupationCode,
    /// A reference row carried a non-finite value.
    #[error("occupation {code} has a non-finite reference value")]
    NonFiniteReference {
        /// Code of the offending row.
        code: String,
    },
    /// JSON input could not be decoded.
    #[cfg(feature = "serde")]
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered reference rows used for ranking.
///
/// Iteration order is the catalog order and breaks similarity ties.
///
/// # Examples
///
/// ```rust
/// use riasec_core::{OccupationReference, ReferenceProfile, ReferenceTable};
///
/// struct Single(Vec<OccupationReference>);
///
/// impl ReferenceTable for Single {
///     fn references(&self) -> &[OccupationReference] {
///         &self.0
///     }
/// }
///
/// let table = Single(vec![OccupationReference::new("A", ReferenceProfile::default())]);
/// assert_eq!(table.len(), 1);
/// ```
pub trait ReferenceTable {
    /// Return every reference row in catalog order.
    fn references(&self) -> &[OccupationReference];

    /// Number of rows.
    fn len(&self) -> usize {
        self.references().len()
    }

    /// Report whether the table has no rows.
    fn is_empty(&self) -> bool {
        self.references().is_empty()
    }
}

/// Display metadata keyed by occupation code.
pub trait MetadataTable {
    /// Look up metadata by exact code match.
    fn metadata(&self, code: &str) -> Option<&OccupationMetadata>;
}

/// In-memory [`ReferenceTable`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceCatalog {
    pub(crate) rows: Vec<OccupationReference>,
}

impl ReferenceCatalog {
    /// Validate and wrap reference rows, keeping their order.
    ///
    /// # Errors
    /// Returns [`CatalogError`] for blank or repeated codes and for
    /// non-finite reference values.
    pub fn new<I>(rows: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = OccupationReference>,
    {
        let collected: Vec<OccupationReference> = rows.into_iter().collect();
        let mut seen = BTreeSet::new();
        for row in &collected {
            ensure_code(&row.code)?;
            if !row.profile.is_finite() {
                return Err(CatalogError::NonFiniteReference {
                    code: row.code.clone(),
                });
            }
            if !seen.insert(row.code.as_str()) {
                return Err(CatalogError::DuplicateOccupation {
                    code: row.code.clone(),
                });
            }
        }
        Ok(Self { rows: collected })
    }

    /// Decode a JSON array of reference rows.
    ///
    /// # Errors
    /// Returns [`CatalogError::Json`] for malformed input and the validation
    /// errors of [`ReferenceCatalog::new`].
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        let rows: Vec<OccupationReference> = serde_json::from_reader(reader)?;
        Self::new(rows)
    }
}

impl ReferenceTable for ReferenceCatalog {
    fn references(&self) -> &[OccupationReference] {
        &self.rows
    }
}

/// In-memory [`MetadataTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataCatalog {
    pub(crate) rows: BTreeMap<String, OccupationMetadata>,
}

impl MetadataCatalog {
    /// Validate and index metadata rows by code.
    ///
    /// # Errors
    /// Returns [`CatalogError`] for blank or repeated codes.
    pub fn new<I>(rows: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = OccupationMetadata>,
    {
        let mut indexed = BTreeMap::new();
        for row in rows {
            ensure_code(&row.code)?;
            if indexed.contains_key(&row.code) {
                return Err(CatalogError::DuplicateOccupation { code: row.code });
            }
            indexed.insert(row.code.clone(), row);
        }
        Ok(Self { rows: indexed })
    }

    /// Decode a JSON array of metadata rows.
    ///
    /// # Errors
    /// Returns [`CatalogError::Json`] for malformed input and the validation
    /// errors of [`MetadataCatalog::new`].
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        let rows: Vec<OccupationMetadata> = serde_json::from_reader(reader)?;
        Self::new(rows)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Report whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &OccupationMetadata> {
        self.rows.values()
    }
}

impl MetadataTable for MetadataCatalog {
    fn metadata(&self, code: &str) -> Option<&OccupationMetadata> {
        self.rows.get(code)
    }
}

/// Both tables built from the same set of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    references: ReferenceCatalog,
    metadata: MetadataCatalog,
}

impl Catalog {
    /// Split complete records into a reference and a metadata table.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when either table rejects the rows.
    ///
    /// # Examples
    /// ```
    /// use riasec_core::{Catalog, MetadataTable, OccupationRecord, ReferenceProfile, ReferenceTable};
    ///
    /// # fn main() -> Result<(), riasec_core::CatalogError> {
    /// let catalog = Catalog::from_records([OccupationRecord {
    ///     code: "47-2021.00".into(),
    ///     profile: ReferenceProfile::new([7.0, 2.0, 1.5, 1.0, 2.0, 3.0]),
    ///     title: "Brickmasons and Blockmasons".into(),
    ///     description: "Lay and bind building materials.".into(),
    /// }])?;
    /// assert_eq!(catalog.references().len(), 1);
    /// assert!(catalog.metadata().metadata("47-2021.00").is_some());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_records<I>(records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = OccupationRecord>,
    {
        let (references, metadata): (Vec<_>, Vec<_>) =
            records.into_iter().map(OccupationRecord::split).unzip();
        Ok(Self {
            references: ReferenceCatalog::new(references)?,
            metadata: MetadataCatalog::new(metadata)?,
        })
    }

    /// Assemble a catalog from separately loaded tables.
    #[must_use]
    pub const fn from_tables(references: ReferenceCatalog, metadata: MetadataCatalog) -> Self {
        Self {
            references,
            metadata,
        }
    }

    /// The reference table.
    #[must_use]
    pub const fn references(&self) -> &ReferenceCatalog {
        &self.references
    }

    /// The metadata table.
    #[must_use]
    pub const fn metadata(&self) -> &MetadataCatalog {
        &self.metadata
    }
}

fn ensure_code(code: &str) -> Result<(), CatalogError> {
    if code.trim().is_empty() {
        Err(CatalogError::EmptyOccupationCode)
    } else {
        Ok(())
    }
}
