//! Directory walking logic
//!
//! A single pre-order walk over the source tree. Entries are visited in
//! lexicographic order of file name so that repeated runs over an unchanged
//! tree produce identical documents.

mod config;
mod filter;
mod utils;
mod walker;

pub use config::{DEFAULT_EXCLUDE_EXTENSIONS, DEFAULT_OUTPUT_FILE, TraversalConfig};
pub use filter::ExtensionFilter;
pub use utils::{DirListing, format_size, normalize_path};
pub use walker::{FileRecord, FlattenWalker};
