use std::path::PathBuf;
use thiserror::Error;

use crate::domain::constants::LIST_HINT;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("rules root not found: {}", .0.display())]
    RootMissing(PathBuf),

    #[error("rules root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid alias file {}: {reason}", .path.display())]
    AliasFile { path: PathBuf, reason: String },
}

impl LocateError {
    /// Stable machine-readable code used in `--json` error output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RootMissing(_) => "ROOT_MISSING",
            Self::RootNotDirectory(_) => "ROOT_NOT_DIRECTORY",
            Self::Read { .. } => "READ_FAILED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AliasFile { .. } => "ALIAS_FILE_INVALID",
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound(_) => Some(LIST_HINT),
            _ => None,
        }
    }
}
