//! Temporary fixture files for file-system tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

/// Creates a fresh temporary directory, panicking with context on failure.
///
/// # Panics
/// Panics if the operating system refuses to create the directory.
#[must_use]
pub fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

/// Writes `contents` to `name` inside `dir` and returns the full path.
///
/// # Errors
/// Returns the underlying [`io::Error`] if the file cannot be written.
///
/// # Examples
/// ```
/// use randgraph_test_support::fixtures::{temp_dir, write_fixture};
///
/// let dir = temp_dir();
/// let path = write_fixture(&dir, "simple.csv", "x\ny\nx,y\n").expect("write succeeds");
/// assert!(path.ends_with("simple.csv"));
/// ```
pub fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Three vertices and three edges; every vertex reaches `z`.
pub const SIMPLE_FIXTURE: &str = "x\ny\nz\nx,y\nx,z\ny,z\n";
