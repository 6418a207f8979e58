use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod splice;

use splice::LinePatch;

#[derive(Parser)]
#[command(name = "linesplice")]
#[command(about = "Replaces a fixed range of lines in a source file with a single line", long_about = None)]
#[command(version)]
struct Cli {
    /// File patched in place
    #[arg(long, value_name = "FILE", default_value = splice::TARGET_FILE)]
    file: PathBuf,

    /// First removed line (0-based)
    #[arg(long, default_value_t = splice::START_LINE)]
    start: usize,

    /// One past the last removed line (0-based)
    #[arg(long, default_value_t = splice::END_LINE)]
    end: usize,

    /// Line inserted in place of the removed range
    #[arg(long, allow_hyphen_values = true, default_value = splice::REPLACEMENT_LINE)]
    line: String,

    /// Expected start of the first removed line
    #[arg(long, allow_hyphen_values = true, default_value = splice::START_MARKER)]
    start_marker: String,

    /// Expected start of the last removed line
    #[arg(long, allow_hyphen_values = true, default_value = splice::END_MARKER)]
    end_marker: String,

    /// Refuse to write when the boundary markers do not match
    #[arg(long)]
    strict: bool,

    /// Show what would be done without making changes
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let patch = LinePatch::new(cli.start, cli.end, cli.line.as_str())
        .with_context(|| format!("Start line {} is after end line {}", cli.start, cli.end))?;

    let content = splice::read_source(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let lines = splice::split_lines(&content);
    info!(
        path = %cli.file.display(),
        lines = lines.len(),
        start = patch.start(),
        end = patch.end(),
        "splicing line range"
    );

    let mismatches = splice::check_markers(
        &lines,
        &patch.markers(&cli.start_marker, &cli.end_marker),
    );
    for mismatch in &mismatches {
        warn!("boundary marker mismatch: {}", mismatch);
    }
    if cli.strict && !mismatches.is_empty() {
        anyhow::bail!(
            "{} boundary marker(s) did not match; {} left untouched",
            mismatches.len(),
            cli.file.display()
        );
    }

    let removed = patch.removed_count(lines.len());
    let patched = patch.apply(&lines);

    if cli.dry_run {
        println!("[DRY RUN] Would update '{}'", cli.file.display());
    } else {
        splice::write_with_bom(&cli.file, &patched)
            .with_context(|| format!("Failed to write {}", cli.file.display()))?;
        println!("{}", "✓ File updated successfully!".green());
    }
    println!("Removed lines: {}", removed);
    println!("New total lines: {}", patched.len());

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
