//! CLI entry point for flattener

use std::path::PathBuf;
use std::process;

use clap::Parser;
use flattener::{DEFAULT_OUTPUT_FILE, TraversalConfig, flatten};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "flattener")]
#[command(about = "Flatten a code directory into one text file")]
#[command(version)]
struct Args {
    /// Path to directory to flatten
    directory: PathBuf,

    /// Output text file name
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// File extensions to include (e.g., .py .js .html)
    #[arg(long, num_args = 0.., value_name = "EXT")]
    include: Option<Vec<String>>,

    /// File extensions to exclude (default: .git)
    #[arg(long, num_args = 0.., value_name = "EXT")]
    exclude: Option<Vec<String>>,

    /// Skip the content of files larger than this (default: 500000 bytes)
    /// Use suffixes: K, M, G (e.g., 5M for 5MB)
    #[arg(long = "max-file-size", value_name = "SIZE", default_value = "500000", value_parser = parse_file_size)]
    max_file_size: u64,

    /// Log every file decision to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log fatal errors
    #[arg(short, long)]
    quiet: bool,
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
fn parse_file_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size too large: {}", s))
}

/// Install the stderr subscriber. RUST_LOG takes precedence over the flags.
fn init_logging(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flattener={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    let mut config = TraversalConfig::new(&args.directory)
        .with_output(&args.output)
        .with_max_file_size(args.max_file_size);
    if let Some(include) = &args.include {
        config = config.with_include(include);
    }
    if let Some(exclude) = &args.exclude {
        config = config.with_exclude(exclude);
    }

    if let Err(e) = flatten(&config) {
        eprintln!("flattener: {}", e);
        process::exit(1);
    }

    println!("Flattened directory written to: {}", args.output.display());
}
