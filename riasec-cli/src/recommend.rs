//! Recommend command implementation for the RIASEC CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use riasec_core::{Catalog, DEFAULT_TOP_K, InterestProfile, OccupationRanker, Recommendation};
use serde::{Deserialize, Serialize};

use crate::answers::load_profile;
use crate::{
    ARG_ANSWERS, ARG_ARTEFACTS_DIR, ARG_CATALOG_DB, ARG_TOP_K, CliError, DEFAULT_CATALOG_FILE,
    ENV_RECOMMEND_ANSWERS, require_existing, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Score a questionnaire and rank every occupation in the \
                 SQLite catalog (catalog.db) by correlation with the \
                 resulting profile. Prints the profile and the best \
                 matches as JSON.",
    about = "Recommend occupations for a questionnaire"
)]
#[ortho_config(prefix = "RIASEC")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file holding the answers.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) answers_path: Option<Utf8PathBuf>,
    /// Directory containing the default catalog file name.
    #[arg(long = ARG_ARTEFACTS_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) artefacts_dir: Option<Utf8PathBuf>,
    /// Override the path to the SQLite catalog (`catalog.db`).
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
    /// Number of occupations to return.
    #[arg(long = ARG_TOP_K, value_name = "n")]
    #[serde(default)]
    pub(crate) top_k: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the answers file.
    pub(crate) answers_path: Utf8PathBuf,
    /// Path to the SQLite catalog.
    pub(crate) catalog_db: Utf8PathBuf,
    /// Number of recommendations requested.
    pub(crate) top_k: usize,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.answers_path, ARG_ANSWERS)?;
        require_existing(&self.catalog_db, ARG_CATALOG_DB)?;
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let answers_path = args.answers_path.ok_or(CliError::MissingArgument {
            field: ARG_ANSWERS,
            env: ENV_RECOMMEND_ANSWERS,
        })?;
        let artefacts_dir = args.artefacts_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let catalog_db = args
            .catalog_db
            .unwrap_or_else(|| artefacts_dir.join(DEFAULT_CATALOG_FILE));
        Ok(Self {
            answers_path,
            catalog_db,
            top_k: args.top_k.unwrap_or(DEFAULT_TOP_K),
        })
    }
}

/// Loads the occupation catalog for a recommend invocation.
pub(crate) trait CatalogLoader {
    fn load(&self, path: &Utf8Path) -> Result<Catalog, CliError>;
}

/// Reads both catalog tables from the SQLite database.
pub(crate) struct SqliteCatalogLoader;

impl CatalogLoader for SqliteCatalogLoader {
    #[cfg(feature = "store-sqlite")]
    fn load(&self, path: &Utf8Path) -> Result<Catalog, CliError> {
        let (references, metadata) = riasec_core::SqliteCatalog::open(path)?.into_tables();
        Ok(Catalog::from_tables(references, metadata))
    }

    #[cfg(not(feature = "store-sqlite"))]
    fn load(&self, _path: &Utf8Path) -> Result<Catalog, CliError> {
        Err(CliError::MissingFeature {
            feature: "store-sqlite",
            action: "loading the occupation catalog",
        })
    }
}

/// JSON document printed by `recommend`.
#[derive(Debug, Serialize)]
struct RecommendOutput<'a> {
    profile: &'a InterestProfile,
    recommendations: &'a [Recommendation],
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &SqliteCatalogLoader, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    loader: &dyn CatalogLoader,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let profile = load_profile(&config.answers_path)?;
    let catalog = loader.load(&config.catalog_db)?;
    let recommendations = OccupationRanker::new().recommend(
        &profile,
        catalog.references(),
        catalog.metadata(),
        config.top_k,
    )?;
    log::debug!(
        "returning {} recommendations from {}",
        recommendations.len(),
        config.catalog_db
    );
    write_json(
        writer,
        &RecommendOutput {
            profile: &profile,
            recommendations: &recommendations,
        },
    )
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
