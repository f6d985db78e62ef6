//! Path utilities for tests that write files.

use std::path::PathBuf;

use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
///
/// Panics if the directory cannot be created; only meant for tests.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temporary directory")
}

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_fixture() {
        let dir = temp_dir();
        let path = write_fixture(&dir, "table.csv", "0.1,0.2\n");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "0.1,0.2\n");
    }
}
