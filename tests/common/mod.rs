#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the loc-tally binary.
#[macro_export]
macro_rules! loc_tally {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("loc-tally"))
    };
}

/// A temporary git repository for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new fixture with an initialized, empty git repository.
    pub fn new() -> Self {
        let fixture = Self::without_git();
        fixture.git(&["init", "--quiet"]);
        fixture
    }

    /// Creates a new fixture that is not a git repository.
    pub fn without_git() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, without staging it.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file and stages it so git tracks it.
    pub fn track_file(&self, relative_path: &str, content: &str) {
        self.create_file(relative_path, content);
        self.git(&["add", "--", relative_path]);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run git");
        assert!(output.status.success(), "git {args:?} failed");
    }
}
