//! Configuration types for the flattening walk

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::file_utils::{DEFAULT_MAX_FILE_SIZE, normalize_extension};

/// Output file used when the caller does not name one.
pub const DEFAULT_OUTPUT_FILE: &str = "flattened_output.txt";

/// Extensions excluded when the caller does not supply an exclude set.
/// Also prunes directories with these names, which keeps `.git/` out.
pub const DEFAULT_EXCLUDE_EXTENSIONS: &[&str] = &[".git"];

/// Immutable parameters for one flatten run.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Only files with one of these extensions are included. Empty means no restriction.
    pub include: Option<BTreeSet<String>>,
    /// Files with one of these extensions are silently skipped.
    pub exclude: Option<BTreeSet<String>>,
    /// Files larger than this many bytes are noted but their content is skipped.
    pub max_file_size: u64,
}

impl TraversalConfig {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Restrict the walk to these extensions (normalized to lowercase `.ext`).
    pub fn with_include<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include = Some(normalize_set(exts));
        self
    }

    /// Replace the exclude set, including the `.git` default.
    pub fn with_exclude<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude = Some(normalize_set(exts));
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            include: None,
            exclude: Some(normalize_set(DEFAULT_EXCLUDE_EXTENSIONS)),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

fn normalize_set<I, S>(exts: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    exts.into_iter()
        .map(|e| normalize_extension(e.as_ref()))
        .collect()
}
