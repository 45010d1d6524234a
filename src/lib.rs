//! Facade crate for the RIASEC occupation recommender.
//!
//! This crate re-exports the questionnaire scorer, the occupation ranker and
//! the catalog tables, with the SQLite catalog behind the `store-sqlite`
//! feature.

#![forbid(unsafe_code)]

pub use riasec_core::{
    Catalog, CatalogError, Category, DEFAULT_TOP_K, InterestProfile, MetadataCatalog,
    MetadataTable, OccupationMetadata, OccupationRanker, OccupationRecord, OccupationReference,
    PearsonSimilarity, RankError, RankedRecommendation, Recommendation, ReferenceCatalog,
    ReferenceProfile, ReferenceTable, ResponseLevel, ScoreError, SimilarityError,
    SimilarityMeasure, score_levels, score_responses,
};

#[cfg(feature = "store-sqlite")]
pub use riasec_core::{SqliteCatalog, SqliteCatalogError, write_sqlite_catalog};

#[cfg(feature = "test-support")]
pub use riasec_core::test_support;
