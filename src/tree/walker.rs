//! FlattenWalker - pre-order walk that streams every visited file to an output

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{FlattenError, Result};
use crate::file_utils::{FileOutcome, file_extension, read_text_file};
use crate::output::FlattenOutput;
use crate::stats::FlattenSummary;

use super::config::TraversalConfig;
use super::filter::ExtensionFilter;
use super::utils::{DirListing, format_size, get_name, read_sorted_entries, relative_path};

/// A candidate file, derived per entry and dropped once processed.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub name: String,
    /// Lowercase `.ext`, or empty when the name has no dot
    pub extension: String,
}

impl FileRecord {
    pub fn new(path: PathBuf) -> Self {
        let name = get_name(&path);
        let extension = file_extension(&path);
        Self {
            path,
            name,
            extension,
        }
    }
}

/// Walks a directory tree in lexicographic pre-order.
///
/// Each directory gets a header, then its files in name order, then its
/// subdirectories. Symlinked directories are not descended into.
pub struct FlattenWalker<'a> {
    config: &'a TraversalConfig,
    filter: ExtensionFilter,
    skip_path: Option<PathBuf>,
}

impl<'a> FlattenWalker<'a> {
    pub fn new(config: &'a TraversalConfig) -> Self {
        Self {
            config,
            filter: ExtensionFilter::from_config(config),
            skip_path: None,
        }
    }

    /// Never emit this file, even if it lies inside the tree.
    /// Used for the output document itself.
    pub fn with_skip_path(mut self, path: PathBuf) -> Self {
        self.skip_path = Some(path);
        self
    }

    /// Walk `root` (expected to be absolute) and stream events to `output`.
    ///
    /// Only a failure to read `root` itself or to write to `output` is fatal.
    pub fn walk<O: FlattenOutput>(&self, root: &Path, output: &mut O) -> Result<FlattenSummary> {
        let listing = Self::list_root(root)?;
        self.walk_listing(root, listing, output)
    }

    /// List the root directory, the only directory whose failure is fatal.
    pub fn list_root(root: &Path) -> Result<DirListing> {
        read_sorted_entries(root).map_err(|source| FlattenError::SourceUnreadable {
            path: root.to_path_buf(),
            source,
        })
    }

    /// Walk from an already listed root. Lets callers fail before acquiring an output.
    pub fn walk_listing<O: FlattenOutput>(
        &self,
        root: &Path,
        listing: DirListing,
        output: &mut O,
    ) -> Result<FlattenSummary> {
        let mut summary = FlattenSummary::default();
        output.header(root)?;
        self.walk_dir(root, root, listing, output, &mut summary)?;
        output.finish()?;
        Ok(summary)
    }

    fn walk_dir<O: FlattenOutput>(
        &self,
        root: &Path,
        dir: &Path,
        listing: DirListing,
        output: &mut O,
        summary: &mut FlattenSummary,
    ) -> Result<()> {
        output.directory(&relative_path(root, dir))?;
        summary.record_directory();

        for e in &listing.errors {
            warn!(path = %dir.display(), error = %e, "cannot read directory entry");
            output.read_error(dir, &e.to_string())?;
            summary.record_read_error();
        }

        let mut subdirs = Vec::new();
        for entry in listing.entries {
            let path = entry.path();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

            if is_dir {
                let name = get_name(&path);
                if self.filter.is_excluded(&name) {
                    debug!(path = %path.display(), "pruning excluded directory");
                    continue;
                }
                subdirs.push(path);
            } else if path.is_symlink() && path.is_dir() {
                // Skip symlinked directories to prevent cycles
                debug!(path = %path.display(), "not following directory symlink");
            } else {
                self.visit_file(FileRecord::new(path), output, summary)?;
            }
        }

        for subdir in subdirs {
            match read_sorted_entries(&subdir) {
                Ok(listing) => self.walk_dir(root, &subdir, listing, output, summary)?,
                Err(e) => {
                    warn!(path = %subdir.display(), error = %e, "cannot read directory");
                    output.read_error(&subdir, &e.to_string())?;
                    summary.record_read_error();
                }
            }
        }

        Ok(())
    }

    fn visit_file<O: FlattenOutput>(
        &self,
        record: FileRecord,
        output: &mut O,
        summary: &mut FlattenSummary,
    ) -> Result<()> {
        if !self.filter.is_included(&record.extension) {
            debug!(path = %record.path.display(), extension = %record.extension, "filtered");
            summary.record_filtered();
            return Ok(());
        }

        if self.skip_path.as_deref() == Some(record.path.as_path()) {
            debug!(path = %record.path.display(), "skipping output document");
            return Ok(());
        }

        match read_text_file(&record.path, self.config.max_file_size) {
            FileOutcome::Content(content) => {
                debug!(path = %record.path.display(), bytes = content.len(), "including");
                output.file(&record.path, &content)?;
                summary.record_file();
            }
            FileOutcome::TooLarge { size } => {
                debug!(
                    path = %record.path.display(),
                    size = %format_size(size),
                    limit = %format_size(self.config.max_file_size),
                    "too large"
                );
                output.too_large(&record.name)?;
                summary.record_too_large();
            }
            FileOutcome::ReadError(message) => {
                warn!(path = %record.path.display(), error = %message, "cannot read file");
                output.read_error(&record.path, &message)?;
                summary.record_read_error();
            }
        }

        Ok(())
    }
}
