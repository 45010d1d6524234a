//! Core domain types for the RIASEC engine.
//!
//! The crate scores a 60-item interest questionnaire into a six-category
//! [`InterestProfile`] and ranks an occupation catalog against it:
//!
//! - [`score_responses`] sums answers over the fixed
//!   [`partition`](crate::partition) of questions into categories.
//! - [`OccupationRanker`] orders occupations by [`PearsonSimilarity`] to the
//!   profile and joins the best matches with their metadata.
//! - [`ReferenceTable`] and [`MetadataTable`] are the two read-only lookups
//!   ranking depends on; [`SqliteCatalog`] loads both from disk when the
//!   `store-sqlite` feature is enabled.
//!
//! # Examples
//!
//! ```
//! use riasec_core::{
//!     MetadataCatalog, OccupationMetadata, OccupationRanker, OccupationReference,
//!     ReferenceCatalog, ReferenceProfile, score_responses,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut answers = vec![0; 60];
//! answers[0] = 4; // question 1 is Realistic
//! answers[10] = 1; // question 11 is Conventional
//! let profile = score_responses(&answers)?;
//!
//! let references = ReferenceCatalog::new([
//!     OccupationReference::new("47-2031.00", ReferenceProfile::new([7.0, 2.0, 1.0, 1.0, 2.0, 3.0])),
//!     OccupationReference::new("43-3031.00", ReferenceProfile::new([1.0, 2.0, 1.0, 1.0, 2.0, 7.0])),
//! ])?;
//! let metadata = MetadataCatalog::new([
//!     OccupationMetadata::new("47-2031.00", "Carpenters", "Construct wooden structures."),
//!     OccupationMetadata::new("43-3031.00", "Bookkeeping Clerks", "Keep financial records."),
//! ])?;
//!
//! let top = OccupationRanker::new().recommend(&profile, &references, &metadata, 1)?;
//! assert_eq!(top[0].title, "Carpenters");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aggregator;
pub mod catalog;
pub mod category;
pub mod occupation;
pub mod partition;
pub mod profile;
pub mod ranker;
pub mod response;
pub mod similarity;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use aggregator::{ScoreError, score_levels, score_responses};
pub use catalog::{
    Catalog, CatalogError, MetadataCatalog, MetadataTable, ReferenceCatalog, ReferenceTable,
};
#[cfg(feature = "store-sqlite")]
pub use catalog::{SqliteCatalog, SqliteCatalogError, write_sqlite_catalog};
pub use category::{Category, UnknownCategoryError};
pub use occupation::{OccupationMetadata, OccupationRecord, OccupationReference};
pub use profile::{InterestProfile, InterestProfileError, ProfileVector, ReferenceProfile};
pub use ranker::{
    DEFAULT_TOP_K, OccupationRanker, RankError, RankedRecommendation, Recommendation,
};
pub use response::ResponseLevel;
pub use similarity::{PearsonSimilarity, SimilarityError, SimilarityMeasure};
