//! Questionnaire answer files.
//!
//! An answers file is a JSON array of 60 entries in question order. Each
//! entry is either the numeric level (`0` to `4`) or its label, such as
//! `"Strongly Like"`.

use camino::Utf8Path;
use riasec_core::partition::QUESTION_COUNT;
use riasec_core::{InterestProfile, ResponseLevel, ScoreError, score_levels};
use serde::Deserialize;

use crate::CliError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum AnswerEntry {
    Value(i64),
    Label(String),
}

impl AnswerEntry {
    fn level_at(&self, position: usize) -> Result<ResponseLevel, ScoreError> {
        match self {
            Self::Value(value) => ResponseLevel::from_value_at(position, *value),
            Self::Label(label) => ResponseLevel::from_label_at(position, label),
        }
    }
}

/// Read and score the answers file at `path`.
pub(crate) fn load_profile(path: &Utf8Path) -> Result<InterestProfile, CliError> {
    let contents =
        riasec_fs::read_utf8_to_string(path).map_err(|source| CliError::OpenAnswers {
            path: path.to_path_buf(),
            source,
        })?;
    let entries: Vec<AnswerEntry> =
        serde_json::from_str(&contents).map_err(|source| CliError::ParseAnswers {
            path: path.to_path_buf(),
            source,
        })?;
    let profile = score_entries(&entries).map_err(|source| CliError::Score {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("scored {} answers from {path}", entries.len());
    Ok(profile)
}

fn score_entries(entries: &[AnswerEntry]) -> Result<InterestProfile, ScoreError> {
    if entries.len() != QUESTION_COUNT {
        return Err(ScoreError::InvalidResponseCount {
            expected: QUESTION_COUNT,
            actual: entries.len(),
        });
    }
    let levels = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| entry.level_at(index + 1))
        .collect::<Result<Vec<_>, _>>()?;
    score_levels(&levels)
}
