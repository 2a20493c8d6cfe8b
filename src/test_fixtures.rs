//! Scratch git repositories for unit tests.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

pub struct GitFixture {
    pub dir: TempDir,
}

impl GitFixture {
    /// Creates an empty repository in a fresh temp directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let fixture = Self { dir };
        fixture.git(&["init", "--quiet"]);
        fixture.git(&["config", "user.email", "test@test.com"]);
        fixture.git(&["config", "user.name", "Test User"]);
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file without staging it.
    pub fn write(&self, relative_path: &str, content: impl AsRef<[u8]>) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes a file and stages it.
    pub fn track(&self, relative_path: &str, content: impl AsRef<[u8]>) {
        self.write(relative_path, content);
        self.git(&["add", "--", relative_path]);
    }

    pub fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run git")
            .status;
        assert!(status.success(), "git {args:?} failed");
    }
}

/// A directory that is not inside any git repository.
pub fn non_repo_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(dir.path().join("loose.rs"), "fn main() {}\n").expect("Failed to write file");
    dir
}
