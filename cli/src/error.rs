use statepath_core::SearchError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the CLI before or during a search
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid graph file {path:?}: {source}")]
    GraphFile {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("invalid map character {found:?} at line {line}, column {column}")]
    MapCharacter {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("map marks more than one {marker:?} cell")]
    DuplicateMarker { marker: char },

    #[error("invalid position {0:?} (expected ROW,COL)")]
    InvalidPosition(String),

    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }
}
