//! Score command implementation for the RIASEC CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::answers::load_profile;
use crate::{ARG_ANSWERS, CliError, ENV_SCORE_ANSWERS, require_existing, write_json};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score a questionnaire of 60 answers, given as a JSON array \
                 of levels (0 to 4) or labels such as \"Like\", and print \
                 the six category totals as JSON.",
    about = "Score a questionnaire into an interest profile"
)]
#[ortho_config(prefix = "RIASEC")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file holding the answers.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) answers_path: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) answers_path: Utf8PathBuf,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.answers_path, ARG_ANSWERS)
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let answers_path = args.answers_path.ok_or(CliError::MissingArgument {
            field: ARG_ANSWERS,
            env: ENV_SCORE_ANSWERS,
        })?;
        Ok(Self { answers_path })
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let profile = load_profile(&config.answers_path)?;
    write_json(writer, &profile)
}
