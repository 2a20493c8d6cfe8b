//! Enumeration of the files git tracks in a working tree.

mod command;
mod index;

pub use command::GitLsFiles;
pub use index::GitIndex;

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::Result;

/// Source of the tracked-file list.
pub trait TrackedFiles {
    /// List tracked files, relative to the directory the listing was made for.
    ///
    /// # Errors
    /// Returns [`LocTallyError::Repository`](crate::LocTallyError::Repository)
    /// if git is unavailable or the directory is not inside a repository.
    fn list(&self) -> Result<Vec<PathBuf>>;
}

impl<T: TrackedFiles + ?Sized> TrackedFiles for Box<T> {
    fn list(&self) -> Result<Vec<PathBuf>> {
        (**self).list()
    }
}

/// Which implementation of [`TrackedFiles`] to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListingBackend {
    /// Run `git ls-files`
    #[default]
    Command,
    /// Read the repository index directly
    Index,
}

impl ListingBackend {
    #[must_use]
    pub fn lister(self, root: &Path) -> Box<dyn TrackedFiles> {
        match self {
            Self::Command => Box::new(GitLsFiles::new(root)),
            Self::Index => Box::new(GitIndex::new(root)),
        }
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
