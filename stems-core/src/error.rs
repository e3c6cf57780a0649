use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to read {path:?}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path:?} is not valid JSON: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to distinguish metadata and netlist JSON: {detail}")]
    AmbiguousInput { detail: &'static str },
    #[error("failed to write stem output: {0}")]
    Write(#[from] std::io::Error),
}
