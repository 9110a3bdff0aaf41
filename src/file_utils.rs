//! File reading and extension helpers used by the walker.
//!
//! Every read produces a [`FileOutcome`] instead of an error so that a single
//! unreadable file never aborts the traversal.

use std::fs;
use std::path::Path;

/// Default maximum file size whose content is included (500KB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 500_000;

const NOT_A_REGULAR_FILE: &str = "not a regular file";

/// Result of trying to read one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// File was read and decoded as UTF-8.
    Content(String),
    /// File exceeds the size threshold; its content is never read.
    TooLarge { size: u64 },
    /// Metadata, permission, I/O or decoding failure.
    ReadError(String),
}

/// Lowercase extension of a file name, including the leading dot.
///
/// The extension is everything from the final `.` onwards, so `lib.RS` gives
/// `.rs`, `.git` gives `.git` and `Makefile` gives the empty string.
pub fn file_extension(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    match name.rfind('.') {
        Some(idx) => name[idx..].to_lowercase(),
        None => String::new(),
    }
}

/// Normalize a user supplied extension: lowercase with a leading dot.
///
/// An empty argument stays empty and matches files without an extension.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.is_empty() || ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

/// Read a file as UTF-8 text if it is no larger than `max_size` bytes.
///
/// Symlinks are followed; a broken link is reported as a read error.
/// Anything that is not a regular file after following links (FIFOs,
/// sockets, devices) is never opened, since reading it can block forever.
pub fn read_text_file(path: &Path, max_size: u64) -> FileOutcome {
    let size = match fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        Ok(_) => return FileOutcome::ReadError(NOT_A_REGULAR_FILE.to_string()),
        Err(e) => return FileOutcome::ReadError(e.to_string()),
    };

    // Uses > so a file exactly at the limit is still included
    if size > max_size {
        return FileOutcome::TooLarge { size };
    }

    match fs::read_to_string(path) {
        Ok(content) => FileOutcome::Content(content),
        Err(e) => FileOutcome::ReadError(e.to_string()),
    }
}
