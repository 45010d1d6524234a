//! Command-line interface for scoring RIASEC questionnaires and recommending
//! occupations.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;

mod answers;
mod error;
mod import;
mod logging;
mod recommend;
mod score;

pub use error::CliError;
pub use logging::init_logging;

use import::{ImportArgs, run_import};
use recommend::{RecommendArgs, run_recommend};
use score::{ScoreArgs, run_score};

const ARG_ANSWERS: &str = "answers";
const ARG_ARTEFACTS_DIR: &str = "artefacts-dir";
const ARG_CATALOG_DB: &str = "catalog-db";
const ARG_TOP_K: &str = "top-k";
const ARG_REFERENCES: &str = "references";
const ARG_OCCUPATIONS: &str = "occupations";
const ARG_OUTPUT: &str = "output";
const ENV_SCORE_ANSWERS: &str = "RIASEC_CMDS_SCORE_ANSWERS_PATH";
const ENV_RECOMMEND_ANSWERS: &str = "RIASEC_CMDS_RECOMMEND_ANSWERS_PATH";
const ENV_IMPORT_REFERENCES: &str = "RIASEC_CMDS_IMPORT_REFERENCES";
const ENV_IMPORT_OCCUPATIONS: &str = "RIASEC_CMDS_IMPORT_OCCUPATIONS";

/// File name of the catalog database inside an artefacts directory.
const DEFAULT_CATALOG_FILE: &str = "catalog.db";

/// Run the RIASEC CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, input
/// validation or the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Import(args) => run_import(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "riasec",
    about = "Score RIASEC interest questionnaires and recommend occupations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a 60-answer questionnaire into an interest profile.
    Score(ScoreArgs),
    /// Rank catalog occupations against a questionnaire.
    Recommend(RecommendArgs),
    /// Build a SQLite catalog from JSON reference and occupation tables.
    Import(ImportArgs),
}

/// Check that `path` names an existing regular file.
fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match riasec_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Pretty-print `value` as JSON followed by a newline.
fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)
}

#[cfg(test)]
mod tests;
