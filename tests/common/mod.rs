#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// A signal file every check accepts: header, comment, one parsed record
/// and one raw record.
pub const VALID_SIGNAL_FILE: &str = "Filetype: IR signals file
Version: 1
# power button
name: POWER
type: parsed
protocol: NEC
address: 00 00 00 00
command: 15 00 00 00
name: MUTE
type: raw
frequency: 38000
duty_cycle: 0.33
data: 504 3432 504 504
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a basic ir-lint config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".ir-lint.toml", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
