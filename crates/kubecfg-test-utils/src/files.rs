//! [`TestKubeconfigDir`] for tests that read and write kubeconfig files.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding kubeconfig files.
///
/// # Example
///
/// ```rust,no_run
/// use kubecfg_test_utils::TestKubeconfigDir;
///
/// let dir = TestKubeconfigDir::new();
/// let path = dir.write("config", "current-context: dev\n");
/// dir.assert_file_contains("config", "dev");
/// # let _ = path;
/// ```
pub struct TestKubeconfigDir {
    temp_dir: TempDir,
}

impl Default for TestKubeconfigDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestKubeconfigDir {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the directory (may not exist yet).
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `content` to `name`, creating parent directories as needed.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    /// # Panics
    /// Panics when the file is missing or does not contain `expected`.
    pub fn assert_file_contains(&self, name: &str, expected: &str) {
        let content = self.read(name);
        assert!(
            content.contains(expected),
            "Expected {} to contain '{}', got:\n{}",
            name,
            expected,
            content
        );
    }
}
