//! Similarity between a respondent's profile and an occupation's reference
//! profile.
//!
//! The [`SimilarityMeasure`] trait compares two [`ProfileVector`]s. The
//! default measure, [`PearsonSimilarity`], computes the Pearson correlation
//! coefficient.

use thiserror::Error;

use crate::ProfileVector;

/// Reasons a similarity could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimilarityError {
    /// One of the vectors has zero variance or non-finite values, so the
    /// measure is undefined.
    #[error("similarity is undefined for constant or non-finite vectors")]
    UndefinedSimilarity,
}

/// Compare two six-category vectors.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and return finite
/// values in `-1.0..=1.0`, or [`SimilarityError::UndefinedSimilarity`] when
/// no value exists. Higher values mean more similar.
///
/// # Examples
///
/// ```rust
/// use riasec_core::{ProfileVector, SimilarityError, SimilarityMeasure};
///
/// struct Always;
///
/// impl SimilarityMeasure for Always {
///     fn similarity(
///         &self,
///         _user: &ProfileVector,
///         _reference: &ProfileVector,
///     ) -> Result<f64, SimilarityError> {
///         Ok(1.0)
///     }
/// }
///
/// assert_eq!(Always.similarity(&[0.0; 6], &[1.0; 6]), Ok(1.0));
/// ```
pub trait SimilarityMeasure: Send + Sync {
    /// Return the similarity of `reference` to `user`.
    ///
    /// # Errors
    /// Returns [`SimilarityError::UndefinedSimilarity`] when the measure has
    /// no value for these inputs.
    fn similarity(
        &self,
        user: &ProfileVector,
        reference: &ProfileVector,
    ) -> Result<f64, SimilarityError>;
}

/// Pearson linear correlation coefficient.
///
/// Constant vectors make the coefficient `0/0`; these surface as
/// [`SimilarityError::UndefinedSimilarity`] instead of `NaN`. Constancy is
/// checked on the raw values, so a flat vector such as `[0.1; 6]` stays
/// undefined even when its rounded mean leaves tiny deviations. Results are
/// clamped into `-1.0..=1.0`.
///
/// # Examples
/// ```
/// use riasec_core::{PearsonSimilarity, SimilarityMeasure};
///
/// let user = [40.0, 0.0, 0.0, 0.0, 0.0, 0.0];
/// let r = PearsonSimilarity.similarity(&user, &user).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PearsonSimilarity;

impl SimilarityMeasure for PearsonSimilarity {
    #[expect(
        clippy::float_arithmetic,
        reason = "correlation needs means, deviations and a square root"
    )]
    fn similarity(
        &self,
        user: &ProfileVector,
        reference: &ProfileVector,
    ) -> Result<f64, SimilarityError> {
        if !all_finite(user) || !all_finite(reference) {
            return Err(SimilarityError::UndefinedSimilarity);
        }
        if is_constant(user) || is_constant(reference) {
            return Err(SimilarityError::UndefinedSimilarity);
        }
        let user_mean = mean(user);
        let reference_mean = mean(reference);

        let mut covariance = 0.0_f64;
        let mut user_spread = 0.0_f64;
        let mut reference_spread = 0.0_f64;
        for (x, y) in user.iter().zip(reference) {
            let dx = x - user_mean;
            let dy = y - reference_mean;
            covariance += dx * dy;
            user_spread += dx * dx;
            reference_spread += dy * dy;
        }

        let denominator = (user_spread * reference_spread).sqrt();
        if denominator == 0.0 || !denominator.is_finite() {
            return Err(SimilarityError::UndefinedSimilarity);
        }
        let coefficient = covariance / denominator;
        if coefficient.is_finite() {
            Ok(coefficient.clamp(-1.0, 1.0))
        } else {
            Err(SimilarityError::UndefinedSimilarity)
        }
    }
}

fn all_finite(values: &ProfileVector) -> bool {
    values.iter().all(|value| value.is_finite())
}

fn is_constant(values: &ProfileVector) -> bool {
    let Some((first, rest)) = values.split_first() else {
        return true;
    };
    rest.iter().all(|value| value.total_cmp(first).is_eq())
}

#[expect(
    clippy::float_arithmetic,
    reason = "the mean divides a sum by the vector length"
)]
fn mean(values: &ProfileVector) -> f64 {
    let sum: f64 = values.iter().sum();
    sum / 6.0
}
