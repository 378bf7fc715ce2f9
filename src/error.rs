//! Typed errors for the analysis pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the pipeline stages.
///
/// Each variant carries enough context to identify the failing stage and
/// file; the binary surfaces them through `anyhow` with stage context.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input or output path could not be opened or created
    #[error("cannot access {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is missing from the input header
    #[error("input file {path} is missing required column '{column}'")]
    Schema { path: PathBuf, column: String },

    /// A field failed to parse as the expected type
    #[error("malformed record in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A derived value came out undefined (division guard)
    #[error("elector ratio for district '{district}' is not a finite number")]
    Computation { district: String },
}
