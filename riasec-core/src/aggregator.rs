//! Turn questionnaire answers into an [`InterestProfile`].
//!
//! Each category total is the plain sum of the ten answers at the positions
//! [`CATEGORY_PARTITION`](crate::partition::CATEGORY_PARTITION) assigns to
//! it. Validation happens before any summing.

use thiserror::Error;

use crate::partition::{self, QUESTION_COUNT};
use crate::{Category, InterestProfile, ResponseLevel};

/// Errors returned while scoring questionnaire answers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The answer sequence did not contain exactly [`QUESTION_COUNT`] entries.
    #[error("expected {expected} responses, found {actual}")]
    InvalidResponseCount {
        /// Required number of answers.
        expected: usize,
        /// Number of answers supplied.
        actual: usize,
    },
    /// An answer fell outside the `0..=4` scale.
    #[error("response {position} has value {value}; expected 0 to 4")]
    InvalidResponseValue {
        /// 1-indexed question position.
        position: usize,
        /// Offending value.
        value: i64,
    },
    /// A textual answer did not match any scale label.
    #[error("response {position} has unknown label '{label}'")]
    UnknownResponseLabel {
        /// 1-indexed question position, or `0` when parsed without context.
        position: usize,
        /// Label as supplied.
        label: String,
    },
}

/// Score raw integer answers given in question order.
///
/// # Errors
/// Returns [`ScoreError::InvalidResponseCount`] unless exactly 60 answers are
/// supplied, and [`ScoreError::InvalidResponseValue`] for the first answer
/// outside `0..=4`.
///
/// # Examples
/// ```
/// use riasec_core::{Category, score_responses};
///
/// # fn main() -> Result<(), riasec_core::ScoreError> {
/// let profile = score_responses(&[2; 60])?;
/// assert_eq!(profile.total(Category::Social), 20);
/// # Ok(())
/// # }
/// ```
pub fn score_responses(responses: &[i64]) -> Result<InterestProfile, ScoreError> {
    ensure_count(responses.len())?;
    let levels = responses
        .iter()
        .enumerate()
        .map(|(index, &value)| ResponseLevel::from_value_at(index + 1, value))
        .collect::<Result<Vec<_>, _>>()?;
    score_levels(&levels)
}

/// Score typed answers given in question order.
///
/// # Errors
/// Returns [`ScoreError::InvalidResponseCount`] unless exactly 60 answers are
/// supplied.
pub fn score_levels(levels: &[ResponseLevel]) -> Result<InterestProfile, ScoreError> {
    ensure_count(levels.len())?;
    let totals = Category::ALL.map(|category| category_total(levels, category));
    Ok(InterestProfile::from_checked_totals(totals))
}

const fn ensure_count(actual: usize) -> Result<(), ScoreError> {
    if actual == QUESTION_COUNT {
        Ok(())
    } else {
        Err(ScoreError::InvalidResponseCount {
            expected: QUESTION_COUNT,
            actual,
        })
    }
}

fn category_total(levels: &[ResponseLevel], category: Category) -> u8 {
    partition::positions(category)
        .iter()
        .filter_map(|&position| levels.get(position - 1))
        .map(|level| level.value())
        .sum()
}
