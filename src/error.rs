use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocTallyError {
    /// The tracked-file listing could not be produced. Fatal for a run.
    #[error("Not a git repository or git not found: {0}")]
    Repository(String),

    /// A single tracked file could not be read. Recovered inside the scan.
    #[error("Could not read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LocTallyError {
    /// A hint for the user, when one exists.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Repository(_) => {
                Some("Run inside a git working tree, or point --dir at one, and make sure git is on PATH")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocTallyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
