//! Error types emitted by the Tiffin CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tiffin_core::RankError;
use tiffin_data::{CsvIngestError, CsvWriteError};

/// Errors emitted by the Tiffin CLI.
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
        field: &'static str,
        env: &'static str,
    },
    /// Mutually exclusive options were both provided after merging.
    #[error("--{first} conflicts with --{second}")]
    ConflictingArguments {
        first: &'static str,
        second: &'static str,
    },
    /// A selector value did not name a known city or cuisine.
    #[error("invalid --{field} value: {message}")]
    InvalidSelector {
        field: &'static str,
        message: String,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Loading the restaurant dataset failed.
    #[error("failed to load the restaurant dataset: {0}")]
    Ingest(#[from] CsvIngestError),
    /// Writing the generated dataset failed.
    #[error("failed to write the generated dataset: {0}")]
    ExportDataset(#[from] CsvWriteError),
    /// The ranker rejected the candidate set.
    #[error("ranking failed: {source}")]
    Rank { source: RankError },
    /// Serializing the ranking report failed.
    #[error("failed to serialize the ranking report: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write command output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
