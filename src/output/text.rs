//! Flat text formatter
//!
//! Writes the line-oriented document format to any `Write` sink. Callers that
//! write to a file should hand in a `BufWriter`; `finish` flushes it.

use std::io::{self, Write};
use std::path::Path;

use super::{FlattenOutput, RULE_WIDTH};

pub struct TextFormatter<W: Write> {
    out: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the formatter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FlattenOutput for TextFormatter<W> {
    fn header(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "Flattened view of: {}", root.display())?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.out)
    }

    fn directory(&mut self, relative: &Path) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Directory: {}", relative.display())?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))
    }

    fn file(&mut self, path: &Path, content: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- FILE: {} ---", path.display())?;
        self.out.write_all(content.as_bytes())?;
        writeln!(self.out)?;
        writeln!(self.out, "--- END OF FILE ---")?;
        writeln!(self.out)
    }

    fn too_large(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "[Skipped: {} — too large]", name)
    }

    fn read_error(&mut self, path: &Path, message: &str) -> io::Result<()> {
        writeln!(self.out, "[Error reading {}: {}]", path.display(), message)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
