use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModgraphError>;

/// Failures raised while configuring or running the extraction pipeline.
///
/// Every variant is fatal for a run: the analyzer stops at the first one and
/// no partial graph is returned.
#[derive(Debug, Error)]
pub enum ModgraphError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid {name} pattern `{pattern}`: {source}")]
    InvalidPattern {
        name: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{name} pattern `{pattern}` must have exactly one capture group, found {found}")]
    CaptureGroups {
        name: &'static str,
        pattern: String,
        found: usize,
    },

    #[error("failed to serialize graph: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}
