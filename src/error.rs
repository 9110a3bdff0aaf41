//! Fatal errors that abort a flatten run.
//!
//! Per-file problems never surface here; they are written inline into the
//! output document (see [`crate::file_utils::FileOutcome`]).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlattenError>;

#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    SourceNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    SourceNotDirectory(PathBuf),

    #[error("cannot read directory '{}': {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create output file '{}': {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Write(#[from] io::Error),
}
