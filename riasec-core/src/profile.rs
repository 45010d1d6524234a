//! Interest profiles: six category scores in RIASEC order.
//!
//! [`InterestProfile`] holds a respondent's integer totals and is produced
//! by the aggregator. [`ReferenceProfile`] holds an occupation's real-valued
//! reference scores. Both flatten into a [`ProfileVector`] for similarity
//! measures.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::CATEGORY_COUNT;
use crate::partition::QUESTIONS_PER_CATEGORY;
use crate::{Category, ResponseLevel};

/// Six values in [`Category::ALL`] order.
pub type ProfileVector = [f64; CATEGORY_COUNT];

/// Largest total a single category can reach.
#[expect(
    clippy::cast_possible_truncation,
    reason = "ten questions of at most four points each fit in a u8"
)]
pub const MAX_CATEGORY_TOTAL: u8 = (QUESTIONS_PER_CATEGORY as u8) * ResponseLevel::MAX_VALUE;

/// Errors returned when building an [`InterestProfile`] from raw totals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterestProfileError {
    /// A total exceeded [`MAX_CATEGORY_TOTAL`].
    #[error("{category} total {total} exceeds the maximum of {MAX_CATEGORY_TOTAL}")]
    TotalOutOfRange {
        /// Category carrying the offending total.
        category: Category,
        /// Offending total.
        total: u8,
    },
}

/// A respondent's category totals.
///
/// Each total lies in `0..=40`. Profiles are immutable once built.
///
/// # Examples
/// ```
/// use riasec_core::{Category, InterestProfile};
///
/// # fn main() -> Result<(), riasec_core::InterestProfileError> {
/// let profile = InterestProfile::from_totals([40, 0, 0, 0, 0, 0])?;
/// assert_eq!(profile.total(Category::Realistic), 40);
/// assert_eq!(profile.sum(), 40);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "ProfileTotals", try_from = "ProfileTotals")
)]
pub struct InterestProfile {
    totals: [u8; CATEGORY_COUNT],
}

impl InterestProfile {
    /// Validate and wrap totals given in RIASEC order.
    ///
    /// # Errors
    /// Returns [`InterestProfileError::TotalOutOfRange`] when any total
    /// exceeds [`MAX_CATEGORY_TOTAL`].
    pub fn from_totals(totals: [u8; CATEGORY_COUNT]) -> Result<Self, InterestProfileError> {
        for (category, total) in Category::ALL.into_iter().zip(totals) {
            if total > MAX_CATEGORY_TOTAL {
                return Err(InterestProfileError::TotalOutOfRange { category, total });
            }
        }
        Ok(Self { totals })
    }

    /// Wrap totals already known to be in range.
    pub(crate) const fn from_checked_totals(totals: [u8; CATEGORY_COUNT]) -> Self {
        Self { totals }
    }

    /// Return the total for `category`.
    #[must_use]
    pub fn total(&self, category: Category) -> u8 {
        self.totals.get(category.index()).copied().unwrap_or_default()
    }

    /// Iterate `(category, total)` pairs in RIASEC order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ALL.into_iter().zip(self.totals.iter().copied())
    }

    /// Sum of all six totals.
    #[must_use]
    pub fn sum(&self) -> u16 {
        self.totals.iter().copied().map(u16::from).sum()
    }

    /// Flatten the totals into a [`ProfileVector`].
    #[must_use]
    pub fn vector(&self) -> ProfileVector {
        self.totals.map(f64::from)
    }
}

/// Wire representation keyed by one-letter category code.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ProfileTotals {
    #[serde(rename = "R")]
    realistic: u8,
    #[serde(rename = "I")]
    investigative: u8,
    #[serde(rename = "A")]
    artistic: u8,
    #[serde(rename = "S")]
    social: u8,
    #[serde(rename = "E")]
    enterprising: u8,
    #[serde(rename = "C")]
    conventional: u8,
}

#[cfg(feature = "serde")]
impl From<InterestProfile> for ProfileTotals {
    fn from(profile: InterestProfile) -> Self {
        Self {
            realistic: profile.total(Category::Realistic),
            investigative: profile.total(Category::Investigative),
            artistic: profile.total(Category::Artistic),
            social: profile.total(Category::Social),
            enterprising: profile.total(Category::Enterprising),
            conventional: profile.total(Category::Conventional),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<ProfileTotals> for InterestProfile {
    type Error = InterestProfileError;

    fn try_from(wire: ProfileTotals) -> Result<Self, Self::Error> {
        Self::from_totals([
            wire.realistic,
            wire.investigative,
            wire.artistic,
            wire.social,
            wire.enterprising,
            wire.conventional,
        ])
    }
}

/// An occupation's reference scores, one per category.
///
/// Values are finite but need not be integral; the scale is whatever the
/// reference table uses.
///
/// # Examples
/// ```
/// use riasec_core::{Category, ReferenceProfile};
///
/// let reference = ReferenceProfile::new([6.5, 3.0, 1.0, 2.0, 3.5, 4.0]);
/// assert_eq!(reference.value(Category::Realistic), 6.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceProfile {
    /// Realistic reference value.
    pub realistic: f64,
    /// Investigative reference value.
    pub investigative: f64,
    /// Artistic reference value.
    pub artistic: f64,
    /// Social reference value.
    pub social: f64,
    /// Enterprising reference value.
    pub enterprising: f64,
    /// Conventional reference value.
    pub conventional: f64,
}

impl ReferenceProfile {
    /// Build a reference profile from values in RIASEC order.
    #[must_use]
    pub const fn new(values: ProfileVector) -> Self {
        let [realistic, investigative, artistic, social, enterprising, conventional] = values;
        Self {
            realistic,
            investigative,
            artistic,
            social,
            enterprising,
            conventional,
        }
    }

    /// Return the reference value for `category`.
    #[must_use]
    pub const fn value(&self, category: Category) -> f64 {
        match category {
            Category::Realistic => self.realistic,
            Category::Investigative => self.investigative,
            Category::Artistic => self.artistic,
            Category::Social => self.social,
            Category::Enterprising => self.enterprising,
            Category::Conventional => self.conventional,
        }
    }

    /// Flatten the values into a [`ProfileVector`].
    #[must_use]
    pub const fn vector(&self) -> ProfileVector {
        [
            self.realistic,
            self.investigative,
            self.artistic,
            self.social,
            self.enterprising,
            self.conventional,
        ]
    }

    /// Report whether every value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.vector().iter().all(|value| value.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn totals_follow_category_order() {
        let profile = InterestProfile::from_totals([1, 2, 3, 4, 5, 6]).unwrap();
        let pairs: Vec<_> = profile.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Category::Realistic, 1),
                (Category::Investigative, 2),
                (Category::Artistic, 3),
                (Category::Social, 4),
                (Category::Enterprising, 5),
                (Category::Conventional, 6),
            ]
        );
        assert_eq!(profile.sum(), 21);
        assert_eq!(profile.vector(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[rstest]
    #[case([41, 0, 0, 0, 0, 0], Category::Realistic)]
    #[case([0, 0, 0, 0, 0, 255], Category::Conventional)]
    fn rejects_totals_above_maximum(#[case] totals: [u8; 6], #[case] category: Category) {
        let err = InterestProfile::from_totals(totals).unwrap_err();
        assert!(matches!(
            err,
            InterestProfileError::TotalOutOfRange { category: c, .. } if c == category
        ));
    }

    #[rstest]
    fn accepts_boundary_totals() {
        assert!(InterestProfile::from_totals([40; 6]).is_ok());
        assert!(InterestProfile::from_totals([0; 6]).is_ok());
    }

    #[rstest]
    fn reference_round_trips_through_vector() {
        let values = [6.5, 3.0, 1.0, 2.0, 3.5, 4.0];
        let reference = ReferenceProfile::new(values);
        assert_eq!(reference.vector(), values);
        assert_eq!(reference.value(Category::Enterprising), 3.5);
        assert!(reference.is_finite());
        assert!(!ReferenceProfile::new([f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0]).is_finite());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn profile_serialises_by_category_code() {
        let profile = InterestProfile::from_totals([40, 0, 12, 3, 0, 9]).unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"R":40,"I":0,"A":12,"S":3,"E":0,"C":9}"#);
        let decoded: InterestProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, profile);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_rejects_out_of_range_totals() {
        let json = r#"{"R":41,"I":0,"A":0,"S":0,"E":0,"C":0}"#;
        assert!(serde_json::from_str::<InterestProfile>(json).is_err());
    }
}
