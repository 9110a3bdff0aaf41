//! Shared utility functions for the walk

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Entries of one directory, sorted by file name, plus any entries that
/// failed to enumerate.
#[derive(Debug, Default)]
pub struct DirListing {
    pub entries: Vec<DirEntry>,
    pub errors: Vec<io::Error>,
}

/// Read a directory's entries sorted by file name.
///
/// Failing to open the directory itself is returned to the caller; failures
/// on individual entries are kept in [`DirListing::errors`].
pub fn read_sorted_entries(path: &Path) -> io::Result<DirListing> {
    let (mut entries, errors) = split_entries(fs::read_dir(path)?);
    entries.sort_by_key(|a| a.file_name());
    Ok(DirListing { entries, errors })
}

/// Separate successful items from errors, keeping the order of each.
pub fn split_entries<T, I>(iter: I) -> (Vec<T>, Vec<io::Error>)
where
    I: IntoIterator<Item = io::Result<T>>,
{
    let mut ok = Vec::new();
    let mut errors = Vec::new();
    for item in iter {
        match item {
            Ok(v) => ok.push(v),
            Err(e) => errors.push(e),
        }
    }
    (ok, errors)
}

/// Collapse `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root, matching how absolute paths behave.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Path of `dir` relative to `root`, with `.` for the root itself.
pub fn relative_path(root: &Path, dir: &Path) -> PathBuf {
    match dir.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rel) => rel.to_path_buf(),
        Err(_) => dir.to_path_buf(),
    }
}

/// Get the final component of a path as a string.
pub fn get_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}
