use std::path::{Path, PathBuf};

use super::TrackedFiles;
use crate::error::{LocTallyError, Result};

/// Lists tracked files by reading the repository index with gix.
///
/// Produces the same set as `git ls-files` run in `root`: only entries
/// below `root`, relative to it.
#[derive(Debug, Clone)]
pub struct GitIndex {
    root: PathBuf,
}

impl GitIndex {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn scope_prefix(&self, workdir: &Path) -> Result<PathBuf> {
        let root_abs = self.root.canonicalize().map_err(|e| {
            LocTallyError::Repository(format!(
                "cannot canonicalize path {}: {e}",
                self.root.display()
            ))
        })?;
        let workdir_abs = workdir.canonicalize().map_err(|e| {
            LocTallyError::Repository(format!(
                "cannot canonicalize workdir {}: {e}",
                workdir.display()
            ))
        })?;

        root_abs
            .strip_prefix(&workdir_abs)
            .map(Path::to_path_buf)
            .map_err(|_| {
                LocTallyError::Repository(format!(
                    "{} is not within git workdir {}",
                    root_abs.display(),
                    workdir_abs.display()
                ))
            })
    }
}

impl TrackedFiles for GitIndex {
    fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(LocTallyError::Repository(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }
        let repo = gix::discover(&self.root).map_err(|e| {
            LocTallyError::Repository(format!("failed to discover git repository: {e}"))
        })?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| LocTallyError::Repository("repository has no working directory".into()))?;
        let prefix = self.scope_prefix(workdir)?;

        let index = repo
            .index_or_empty()
            .map_err(|e| LocTallyError::Repository(format!("failed to read git index: {e}")))?;

        let mut files: Vec<PathBuf> = index
            .entries()
            .iter()
            .filter_map(|entry| {
                let path = gix::path::from_bstr(entry.path(&index));
                path.strip_prefix(&prefix).ok().map(Path::to_path_buf)
            })
            .collect();

        // Unmerged paths appear once per conflict stage.
        files.dedup();
        Ok(files)
    }
}
