//! Output document formatting
//!
//! The walker reports what it visits through [`FlattenOutput`]; the
//! formatter decides how each event looks in the document. Only the flat
//! text format is provided.

mod text;

use std::io;
use std::path::Path;

pub use text::TextFormatter;

/// Width of the `=` and `-` rules under headers.
pub const RULE_WIDTH: usize = 80;

/// Callback for the walker - receives traversal events in document order.
pub trait FlattenOutput {
    /// Document header, written once with the absolute source path.
    fn header(&mut self, root: &Path) -> io::Result<()>;

    /// A directory was entered; `relative` is `.` for the root.
    fn directory(&mut self, relative: &Path) -> io::Result<()>;

    /// Full content of an included file.
    fn file(&mut self, path: &Path, content: &str) -> io::Result<()>;

    /// File exceeded the size threshold; only its name is recorded.
    fn too_large(&mut self, name: &str) -> io::Result<()>;

    /// Recoverable failure while reading a file or directory.
    fn read_error(&mut self, path: &Path, message: &str) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()>;
}
