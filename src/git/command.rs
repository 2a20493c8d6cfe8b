use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::TrackedFiles;
use crate::error::{LocTallyError, Result};

/// Lists tracked files by running `git ls-files -z` once.
#[derive(Debug, Clone)]
pub struct GitLsFiles {
    root: PathBuf,
    program: OsString,
}

impl GitLsFiles {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            program: OsString::from("git"),
        }
    }

    /// Use a different executable in place of `git`.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }
}

impl TrackedFiles for GitLsFiles {
    fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(LocTallyError::Repository(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }

        let output = Command::new(&self.program)
            .args(["ls-files", "-z"])
            .current_dir(&self.root)
            .output()
            .map_err(|e| {
                LocTallyError::Repository(format!(
                    "failed to run {}: {e}",
                    self.program.to_string_lossy()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.lines().next().unwrap_or_default().trim();
            return Err(LocTallyError::Repository(if detail.is_empty() {
                format!("git ls-files exited with {}", output.status)
            } else {
                detail.to_string()
            }));
        }

        Ok(parse_nul_separated(&output.stdout))
    }
}

pub(super) fn parse_nul_separated(stdout: &[u8]) -> Vec<PathBuf> {
    stdout
        .split(|&b| b == 0)
        .filter(|chunk| !chunk.is_empty())
        .map(path_from_bytes)
        .collect()
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(std::ffi::OsStr::from_bytes(bytes))
}

// git emits UTF-8 paths on other platforms.
#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
