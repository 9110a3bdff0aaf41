//! Flattener - concatenate a directory tree into one annotated text document

pub mod error;
pub mod file_utils;
pub mod flatten;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{FlattenError, Result};
pub use file_utils::{DEFAULT_MAX_FILE_SIZE, FileOutcome};
pub use flatten::{flatten, flatten_to_writer, resolve_source};
pub use output::{FlattenOutput, TextFormatter};
pub use stats::FlattenSummary;
pub use tree::{
    DEFAULT_EXCLUDE_EXTENSIONS, DEFAULT_OUTPUT_FILE, ExtensionFilter, FileRecord, FlattenWalker,
    TraversalConfig,
};
