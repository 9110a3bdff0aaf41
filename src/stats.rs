//! Run statistics collected while flattening
//!
//! The counters mirror the outcomes the walker writes into the output
//! document, so a caller can report a run without re-parsing the file.

use std::fmt;

/// Totals for one flatten run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenSummary {
    /// Directories that received a header
    pub directories: usize,
    /// Files whose content was written
    pub files: usize,
    /// Files noted as too large
    pub skipped_too_large: usize,
    /// Files or directories that could not be read
    pub read_errors: usize,
    /// Files silently dropped by the extension filter
    pub filtered: usize,
}

impl FlattenSummary {
    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    pub fn record_file(&mut self) {
        self.files += 1;
    }

    pub fn record_too_large(&mut self) {
        self.skipped_too_large += 1;
    }

    pub fn record_read_error(&mut self) {
        self.read_errors += 1;
    }

    pub fn record_filtered(&mut self) {
        self.filtered += 1;
    }
}

impl fmt::Display for FlattenSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            self.directories,
            if self.directories == 1 { "directory" } else { "directories" },
            self.files,
            if self.files == 1 { "file" } else { "files" },
        )?;
        if self.skipped_too_large > 0 {
            write!(f, ", {} too large", self.skipped_too_large)?;
        }
        if self.read_errors > 0 {
            write!(f, ", {} unreadable", self.read_errors)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pluralization() {
        let mut summary = FlattenSummary::default();
        summary.record_directory();
        summary.record_file();
        assert_eq!(summary.to_string(), "1 directory, 1 file");

        summary.record_directory();
        summary.record_file();
        summary.record_too_large();
        summary.record_read_error();
        summary.record_filtered();
        assert_eq!(
            summary.to_string(),
            "2 directories, 2 files, 1 too large, 1 unreadable"
        );
    }
}
