//! Error types emitted by the RIASEC CLI.
//!
//! Keep this error type reasonably small, as every command returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use riasec_core::{CatalogError, RankError, ScoreError};
#[cfg(feature = "store-sqlite")]
use riasec_core::SqliteCatalogError;
use thiserror::Error;

/// Errors emitted by the RIASEC CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the offending option or table.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        /// Name of the missing Cargo feature.
        feature: &'static str,
        /// Operation that requires the feature.
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Name of the offending option or table.
        field: &'static str,
        /// Path involved in the failure.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Name of the offending option or table.
        field: &'static str,
        /// Path involved in the failure.
        path: Utf8PathBuf,
    },
    /// A referenced path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Name of the offending option or table.
        field: &'static str,
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The catalog output path names an existing directory.
    #[error("output path {path:?} is a directory")]
    OutputPathIsDirectory {
        /// Path involved in the failure.
        path: Utf8PathBuf,
    },
    /// Reading the answers file failed.
    #[error("failed to read answers at {path:?}: {source}")]
    OpenAnswers {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The answers file is not a JSON array of integers and labels.
    #[error("failed to parse answers JSON at {path:?}: {source}")]
    ParseAnswers {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// The answers failed questionnaire validation.
    #[error("answers in {path:?} are invalid: {source}")]
    Score {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: ScoreError,
    },
    /// Opening a catalog JSON table failed.
    #[error("failed to open {field} table at {path:?}: {source}")]
    OpenTable {
        /// Name of the offending option or table.
        field: &'static str,
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A catalog JSON table failed to parse or validate.
    #[error("failed to load {field} table from {path:?}: {source}")]
    LoadTable {
        /// Name of the offending option or table.
        field: &'static str,
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: CatalogError,
    },
    /// Opening the SQLite catalog failed.
    #[cfg(feature = "store-sqlite")]
    #[error(transparent)]
    OpenCatalog(#[from] SqliteCatalogError),
    /// Creating the parent directory of the catalog output failed.
    #[error("failed to create directory for {path:?}: {source}")]
    CreateOutputDir {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Writing the SQLite catalog failed.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to write catalog to {path:?}: {source}")]
    WriteCatalog {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: SqliteCatalogError,
    },
    /// Ranking the catalog failed.
    #[error("ranking failed: {0}")]
    Rank(#[from] RankError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
