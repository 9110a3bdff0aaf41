//! Entry points that tie a config, a walker and an output sink together

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::info;

use crate::error::{FlattenError, Result};
use crate::output::TextFormatter;
use crate::stats::FlattenSummary;
use crate::tree::{FlattenWalker, TraversalConfig, normalize_path};

/// Flatten `config.source` into the file at `config.output`.
///
/// The source is resolved and its root listed before the output file is
/// created, so a bad source never leaves an empty output behind. The output
/// is closed on every path.
pub fn flatten(config: &TraversalConfig) -> Result<FlattenSummary> {
    let started = Instant::now();
    let root = resolve_source(&config.source)?;
    let listing = FlattenWalker::list_root(&root)?;

    let output_path = std::path::absolute(&config.output)
        .map(|p| normalize_path(&p))
        .map_err(|source| FlattenError::CreateOutput {
            path: config.output.clone(),
            source,
        })?;
    let file = File::create(&output_path).map_err(|source| FlattenError::CreateOutput {
        path: output_path.clone(),
        source,
    })?;

    let mut formatter = TextFormatter::new(BufWriter::new(file));
    let summary = FlattenWalker::new(config)
        .with_skip_path(output_path.clone())
        .walk_listing(&root, listing, &mut formatter)?;

    let elapsed = round_to_millis(started.elapsed());
    info!(
        source = %root.display(),
        output = %output_path.display(),
        elapsed = %humantime::format_duration(elapsed),
        "flattened {}",
        summary
    );
    Ok(summary)
}

/// Flatten `config.source` into an arbitrary writer, ignoring `config.output`.
pub fn flatten_to_writer<W: Write>(config: &TraversalConfig, writer: W) -> Result<FlattenSummary> {
    let root = resolve_source(&config.source)?;
    let mut formatter = TextFormatter::new(writer);
    FlattenWalker::new(config).walk(&root, &mut formatter)
}

/// Resolve the source to an absolute path and check that it is a directory.
///
/// Resolution is lexical: `.` and `..` are collapsed, symlinks in the path
/// are kept as written.
pub fn resolve_source(source: &Path) -> Result<PathBuf> {
    let root = std::path::absolute(source)
        .map(|p| normalize_path(&p))
        .map_err(|e| unreadable(source, e))?;
    match fs::metadata(&root) {
        Ok(meta) if meta.is_dir() => Ok(root),
        Ok(_) => Err(FlattenError::SourceNotDirectory(source.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(FlattenError::SourceNotFound(source.to_path_buf()))
        }
        Err(e) => Err(unreadable(&root, e)),
    }
}

/// Drop sub-millisecond noise so the logged duration stays readable.
fn round_to_millis(elapsed: Duration) -> Duration {
    Duration::from_millis(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}

fn unreadable(path: &Path, source: io::Error) -> FlattenError {
    FlattenError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    }
}
