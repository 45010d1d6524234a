//! The five-level ordinal answer scale.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ScoreError;

/// One answer to a questionnaire item.
///
/// Levels order from strongest dislike to strongest preference and carry the
/// integer value summed by the aggregator.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use riasec_core::ResponseLevel;
///
/// let level = ResponseLevel::from_str("Strongly Like").unwrap();
/// assert_eq!(level.value(), 4);
/// assert_eq!(ResponseLevel::try_from(2).unwrap(), ResponseLevel::Unsure);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u8", try_from = "i64"))]
pub enum ResponseLevel {
    /// "Strongly Dislike", scored 0.
    StronglyDislike,
    /// "Dislike", scored 1.
    Dislike,
    /// "Unsure", scored 2.
    Unsure,
    /// "Like", scored 3.
    Like,
    /// "Strongly Like", scored 4.
    StronglyLike,
}

impl ResponseLevel {
    /// The label-to-value table in ascending order.
    pub const ALL: [Self; 5] = [
        Self::StronglyDislike,
        Self::Dislike,
        Self::Unsure,
        Self::Like,
        Self::StronglyLike,
    ];

    /// Largest value any level scores.
    pub const MAX_VALUE: u8 = 4;

    /// Integer value contributed to a category total.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::StronglyDislike => 0,
            Self::Dislike => 1,
            Self::Unsure => 2,
            Self::Like => 3,
            Self::StronglyLike => 4,
        }
    }

    /// Human-readable label shown to respondents.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StronglyDislike => "Strongly Dislike",
            Self::Dislike => "Dislike",
            Self::Unsure => "Unsure",
            Self::Like => "Like",
            Self::StronglyLike => "Strongly Like",
        }
    }

    /// Convert a raw value, reporting `position` (1-indexed) on failure.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidResponseValue`] for values outside `0..=4`.
    pub fn from_value_at(position: usize, value: i64) -> Result<Self, ScoreError> {
        Self::ALL
            .into_iter()
            .find(|level| i64::from(level.value()) == value)
            .ok_or(ScoreError::InvalidResponseValue { position, value })
    }

    /// Parse a label, reporting `position` (1-indexed) on failure.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`ScoreError::UnknownResponseLabel`] when no level carries
    /// the label.
    pub fn from_label_at(position: usize, label: &str) -> Result<Self, ScoreError> {
        let needle = label.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ScoreError::UnknownResponseLabel {
                position,
                label: label.to_owned(),
            })
    }
}

impl From<ResponseLevel> for u8 {
    fn from(level: ResponseLevel) -> Self {
        level.value()
    }
}

impl TryFrom<i64> for ResponseLevel {
    type Error = ScoreError;

    /// Convert a raw value without positional context.
    ///
    /// Failures report position `0`; use [`ResponseLevel::from_value_at`] when
    /// the answer's position is known.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_value_at(0, value)
    }
}

impl std::fmt::Display for ResponseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ResponseLevel {
    type Err = ScoreError;

    /// Parse a label such as `"Like"`; failures report position `0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label_at(0, s)
    }
}
