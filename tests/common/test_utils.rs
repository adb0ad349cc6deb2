//! Shared test utilities for creating temporary files.

use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a temporary file with the given content.
///
/// The file is removed when the returned `NamedTempFile` is dropped.
///
/// # Panics
///
/// Panics if the temporary file cannot be created or written
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Creates a temporary file whose name ends in `suffix`, e.g. `".pdf"`.
pub fn create_temp_file_with_suffix(suffix: &str, content: &[u8]) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .prefix("interrogate-")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
