//! Rank occupations against a respondent's interest profile.
//!
//! Every occupation gets its own similarity score. Entries sort by
//! descending similarity with a stable sort, so equal scores keep catalog
//! order. Entries whose similarity is undefined (a constant profile on
//! either side, or a non-finite value from the measure) sort after every
//! defined entry, again in catalog order.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    InterestProfile, MetadataTable, PearsonSimilarity, ReferenceTable, SimilarityError,
    SimilarityMeasure,
};

/// Number of recommendations returned when the caller does not choose.
pub const DEFAULT_TOP_K: usize = 5;

/// An occupation code with its similarity to the respondent.
///
/// `similarity` is `None` when the measure is undefined for the pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedRecommendation {
    /// Occupation code.
    pub code: String,
    /// Similarity in `-1.0..=1.0`, or `None` when undefined.
    pub similarity: Option<f64>,
}

/// A ranked occupation joined with its display metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recommendation {
    /// Occupation code.
    pub code: String,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Similarity in `-1.0..=1.0`, or `None` when undefined.
    pub similarity: Option<f64>,
}

/// Errors returned by [`OccupationRanker`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// The reference table had no rows.
    #[error("occupation catalog is empty")]
    EmptyCatalog,
    /// The requested number of recommendations was outside `1..=catalog_size`.
    #[error("requested {k} recommendations; expected between 1 and {catalog_size}")]
    InvalidK {
        /// Requested count.
        k: usize,
        /// Number of occupations available.
        catalog_size: usize,
    },
    /// A ranked occupation had no metadata row.
    #[error("no metadata for occupation {code}")]
    MissingOccupationMetadata {
        /// Code missing from the metadata table.
        code: String,
    },
}

/// Orders occupations by similarity to a profile.
///
/// The ranker holds no state beyond its measure; every call recomputes the
/// ranking from scratch.
///
/// # Examples
/// ```
/// use riasec_core::{
///     InterestProfile, OccupationRanker, OccupationReference, ReferenceCatalog,
///     ReferenceProfile,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let references = ReferenceCatalog::new([
///     OccupationReference::new("hands-on", ReferenceProfile::new([40.0, 0.0, 0.0, 0.0, 0.0, 0.0])),
///     OccupationReference::new("clerical", ReferenceProfile::new([0.0, 0.0, 0.0, 0.0, 0.0, 40.0])),
/// ])?;
/// let profile = InterestProfile::from_totals([40, 0, 0, 0, 0, 0])?;
///
/// let ranked = OccupationRanker::new().top_k(&profile, &references, 1)?;
/// assert_eq!(ranked[0].code, "hands-on");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OccupationRanker<S = PearsonSimilarity> {
    measure: S,
}

impl OccupationRanker<PearsonSimilarity> {
    /// Build a ranker using [`PearsonSimilarity`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            measure: PearsonSimilarity,
        }
    }
}

impl<S: SimilarityMeasure> OccupationRanker<S> {
    /// Build a ranker using a custom similarity measure.
    #[must_use]
    pub const fn with_measure(measure: S) -> Self {
        Self { measure }
    }

    /// Rank every occupation in `references`, most similar first.
    ///
    /// # Errors
    /// Returns [`RankError::EmptyCatalog`] when `references` has no rows.
    pub fn rank<T>(
        &self,
        profile: &InterestProfile,
        references: &T,
    ) -> Result<Vec<RankedRecommendation>, RankError>
    where
        T: ReferenceTable + ?Sized,
    {
        if references.is_empty() {
            return Err(RankError::EmptyCatalog);
        }
        let user = profile.vector();
        let mut ranked: Vec<RankedRecommendation> = references
            .references()
            .iter()
            .map(|row| {
                let measured = self.measure.similarity(&user, &row.profile.vector());
                RankedRecommendation {
                    code: row.code.clone(),
                    similarity: defined_similarity(measured),
                }
            })
            .collect();

        // `sort_by` is stable: ties keep catalog order.
        ranked.sort_by(|a, b| compare_similarity(a.similarity, b.similarity));

        let undefined = ranked.iter().filter(|r| r.similarity.is_none()).count();
        if undefined > 0 {
            log::warn!(
                "similarity undefined for {undefined} of {} occupations; placing them last",
                ranked.len()
            );
        }
        log::debug!("ranked {} occupations", ranked.len());
        Ok(ranked)
    }

    /// Rank and keep the first `k` entries.
    ///
    /// # Errors
    /// Returns [`RankError::EmptyCatalog`] for an empty table and
    /// [`RankError::InvalidK`] unless `1 <= k <= references.len()`.
    pub fn top_k<T>(
        &self,
        profile: &InterestProfile,
        references: &T,
        k: usize,
    ) -> Result<Vec<RankedRecommendation>, RankError>
    where
        T: ReferenceTable + ?Sized,
    {
        if references.is_empty() {
            return Err(RankError::EmptyCatalog);
        }
        validate_k(k, references.len())?;
        let mut ranked = self.rank(profile, references)?;
        ranked.truncate(k);
        Ok(ranked)
    }

    /// Rank, keep the first `k` entries and join them with `metadata`.
    ///
    /// # Errors
    /// Propagates [`OccupationRanker::top_k`] errors and returns
    /// [`RankError::MissingOccupationMetadata`] for the first ranked code
    /// absent from `metadata`.
    pub fn recommend<T, M>(
        &self,
        profile: &InterestProfile,
        references: &T,
        metadata: &M,
        k: usize,
    ) -> Result<Vec<Recommendation>, RankError>
    where
        T: ReferenceTable + ?Sized,
        M: MetadataTable + ?Sized,
    {
        self.top_k(profile, references, k)?
            .into_iter()
            .map(|ranked| join_metadata(ranked, metadata))
            .collect()
    }
}

const fn validate_k(k: usize, catalog_size: usize) -> Result<(), RankError> {
    if k >= 1 && k <= catalog_size {
        Ok(())
    } else {
        Err(RankError::InvalidK { k, catalog_size })
    }
}

fn join_metadata<M>(ranked: RankedRecommendation, metadata: &M) -> Result<Recommendation, RankError>
where
    M: MetadataTable + ?Sized,
{
    let Some(row) = metadata.metadata(&ranked.code) else {
        return Err(RankError::MissingOccupationMetadata { code: ranked.code });
    };
    Ok(Recommendation {
        title: row.title.clone(),
        description: row.description.clone(),
        code: ranked.code,
        similarity: ranked.similarity,
    })
}

/// Treat errors and non-finite values as undefined and clamp the rest.
fn defined_similarity(result: Result<f64, SimilarityError>) -> Option<f64> {
    result
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(-1.0, 1.0))
}

/// Descending by similarity with undefined values last.
fn compare_similarity(a: Option<f64>, b: Option<f64>) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
