//! Shared file reading and rewriting for the CLI host layer
//!
//! Sorting rewrites whole files, so reads and writes both operate on full
//! document text. A configurable size cap keeps the tool from slurping
//! giant files by accident.

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default maximum file size for sorting operations (1MB).
/// Files larger than this are skipped rather than read.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_000_000;

/// Global configurable max file size. Set via `set_max_file_size()`.
static MAX_FILE_SIZE: AtomicU64 = AtomicU64::new(DEFAULT_MAX_FILE_SIZE);

/// Set the maximum file size for sorting operations.
/// This affects all subsequent calls to `exceeds_size_limit`.
pub fn set_max_file_size(size: u64) {
    MAX_FILE_SIZE.store(size, Ordering::SeqCst);
}

/// Get the current maximum file size setting.
pub fn get_max_file_size() -> u64 {
    MAX_FILE_SIZE.load(Ordering::SeqCst)
}

/// Check whether a file is over the configured size cap.
///
/// A file whose metadata cannot be read is not considered oversized; the
/// subsequent read reports the real error.
pub fn exceeds_size_limit(path: &Path) -> bool {
    match path.metadata() {
        Ok(metadata) => metadata.len() > get_max_file_size(),
        Err(_) => false,
    }
}

/// Read a source file as UTF-8 text.
pub fn read_source_file(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}

/// Replace a file's contents with `text` in one write.
///
/// Callers only invoke this after the full new text has been computed, so
/// a failed sort never leaves a half-written file behind.
pub fn write_source_file(path: &Path, text: &str) -> io::Result<()> {
    std::fs::write(path, text)
}
