//! Shared test utilities.

use camino::Utf8PathBuf;
use tempfile::TempDir;

pub mod runtime;

/// Creates a temporary directory and returns it with its UTF-8 path.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created or its path is not
/// valid UTF-8.
pub fn create_temp_dir() -> (TempDir, Utf8PathBuf) {
    let dir =
        TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"));
    let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .unwrap_or_else(|path| panic!("temporary directory is not UTF-8: {}", path.display()));
    (dir, path)
}
