//! Import command implementation for the RIASEC CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use riasec_core::{CatalogError, MetadataCatalog, MetadataTable, ReferenceCatalog, ReferenceTable};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_OCCUPATIONS, ARG_OUTPUT, ARG_REFERENCES, CliError, DEFAULT_CATALOG_FILE,
    ENV_IMPORT_OCCUPATIONS, ENV_IMPORT_REFERENCES, require_existing, write_json,
};

/// CLI arguments for the `import` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "import",
    long_about = "Validate a JSON array of occupation reference profiles and \
                 a JSON array of occupation titles and descriptions, then \
                 write both into a SQLite catalog for the recommend command.",
    about = "Build the SQLite occupation catalog"
)]
#[ortho_config(prefix = "RIASEC")]
pub(crate) struct ImportArgs {
    /// Path to the reference profile table (JSON).
    #[arg(long = ARG_REFERENCES, value_name = "path")]
    #[serde(default)]
    pub(crate) references: Option<Utf8PathBuf>,
    /// Path to the occupation title and description table (JSON).
    #[arg(long = ARG_OCCUPATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) occupations: Option<Utf8PathBuf>,
    /// Destination of the SQLite catalog; defaults to `catalog.db`.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ImportArgs {
    pub(crate) fn into_config(self) -> Result<ImportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ImportConfig::try_from(merged)
    }
}

/// Resolved `import` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImportConfig {
    pub(crate) references: Utf8PathBuf,
    pub(crate) occupations: Utf8PathBuf,
    pub(crate) output: Utf8PathBuf,
}

impl ImportConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.references, ARG_REFERENCES)?;
        require_existing(&self.occupations, ARG_OCCUPATIONS)?;
        match riasec_fs::file_is_file(&self.output) {
            Ok(false) => Err(CliError::OutputPathIsDirectory {
                path: self.output.clone(),
            }),
            Ok(true) => Ok(()),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_OUTPUT,
                path: self.output.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<ImportArgs> for ImportConfig {
    type Error = CliError;

    fn try_from(args: ImportArgs) -> Result<Self, Self::Error> {
        let references = args.references.ok_or(CliError::MissingArgument {
            field: ARG_REFERENCES,
            env: ENV_IMPORT_REFERENCES,
        })?;
        let occupations = args.occupations.ok_or(CliError::MissingArgument {
            field: ARG_OCCUPATIONS,
            env: ENV_IMPORT_OCCUPATIONS,
        })?;
        let output = args
            .output
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG_FILE));
        Ok(Self {
            references,
            occupations,
            output,
        })
    }
}

/// Row counts printed once the catalog is written.
#[derive(Debug, Serialize)]
struct ImportSummary<'a> {
    output: &'a Utf8Path,
    references: usize,
    occupations: usize,
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_import_with(args, &mut stdout)
}

pub(crate) fn run_import_with(args: ImportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;

    let references = load_table(&config.references, ARG_REFERENCES, |reader| {
        ReferenceCatalog::from_json_reader(reader)
    })?;
    let metadata = load_table(&config.occupations, ARG_OCCUPATIONS, |reader| {
        MetadataCatalog::from_json_reader(reader)
    })?;
    warn_on_unmatched_rows(&references, &metadata);

    riasec_fs::ensure_parent_dir(&config.output).map_err(|source| CliError::CreateOutputDir {
        path: config.output.clone(),
        source,
    })?;
    write_catalog(&config.output, &references, &metadata)?;

    write_json(
        writer,
        &ImportSummary {
            output: &config.output,
            references: references.len(),
            occupations: metadata.len(),
        },
    )
}

fn load_table<T, F>(path: &Utf8Path, field: &'static str, parse: F) -> Result<T, CliError>
where
    F: FnOnce(BufReader<cap_std::fs_utf8::File>) -> Result<T, CatalogError>,
{
    let file = riasec_fs::open_utf8_file(path).map_err(|source| CliError::OpenTable {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    parse(BufReader::new(file)).map_err(|source| CliError::LoadTable {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn warn_on_unmatched_rows(references: &ReferenceCatalog, metadata: &MetadataCatalog) {
    let unmatched = references
        .references()
        .iter()
        .filter(|row| metadata.metadata(&row.code).is_none())
        .count();
    if unmatched > 0 {
        log::warn!(
            "{unmatched} of {} reference rows have no occupation metadata; \
             recommending them will fail",
            references.len()
        );
    }
}

#[cfg(feature = "store-sqlite")]
fn write_catalog(
    output: &Utf8Path,
    references: &ReferenceCatalog,
    metadata: &MetadataCatalog,
) -> Result<(), CliError> {
    riasec_core::write_sqlite_catalog(output, references, metadata).map_err(|source| {
        CliError::WriteCatalog {
            path: output.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(feature = "store-sqlite"))]
fn write_catalog(
    _output: &Utf8Path,
    _references: &ReferenceCatalog,
    _metadata: &MetadataCatalog,
) -> Result<(), CliError> {
    Err(CliError::MissingFeature {
        feature: "store-sqlite",
        action: "writing the occupation catalog",
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ImportConfig, CliError> {
    let merged = ImportArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ImportConfig::try_from(merged)
}
