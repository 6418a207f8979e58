use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sheetprobe_core::config::DEFAULT_CONFIG_FILE;
use sheetprobe_core::{Discovery, Inspector, ProbeConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod formatter;

#[derive(Parser)]
#[command(name = "sheetprobe")]
#[command(about = "Prints sheet layout, cell previews and formula locations of Excel/ODS files", long_about = None)]
#[command(version)]
struct Cli {
    /// Files to inspect; without any, the templates directory is scanned
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Directory to scan instead of the configured templates directory
    #[arg(short, long, value_name = "DIR", conflicts_with = "files")]
    dir: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(cli.config.as_ref())?;
    config.validate().context("Invalid configuration")?;
    let inspector = Inspector::with_config(config);

    let files = if cli.files.is_empty() {
        let dir = inspector.scan_dir(cli.dir.as_deref());
        match inspector.discover(cli.dir.as_deref()) {
            Ok(Discovery::MissingDir(dir)) => {
                formatter::print_missing_dir(&dir);
                return Ok(());
            }
            Ok(Discovery::Found(files)) if files.is_empty() => {
                formatter::print_no_files();
                return Ok(());
            }
            Ok(Discovery::Found(files)) => files,
            Err(e) => {
                error!(dir = %dir.display(), error = %e, "failed to scan directory");
                formatter::print_scan_error(dir, &e);
                return Ok(());
            }
        }
    } else {
        cli.files.clone()
    };
    debug!(count = files.len(), "files to inspect");

    match cli.format {
        OutputFormat::Human => {
            formatter::print_found(files.len());
            let mut failed = 0;
            for file in &files {
                let outcome = inspector.analyze(file);
                if !outcome.succeeded() {
                    failed += 1;
                }
                formatter::print_human(&outcome);
            }
            debug!(total = files.len(), failed, "inspection finished");
            formatter::print_done();
        }
        OutputFormat::Json => {
            let outcomes: Vec<_> = files.iter().map(|f| inspector.analyze(f)).collect();
            formatter::print_json(&outcomes)?;
        }
    }

    // Per-file and scan failures are reported in the output, never through the exit code
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<ProbeConfig> {
    // Fall back to a config in the current directory if it exists
    let path = match path {
        Some(path) => path.clone(),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => PathBuf::from(DEFAULT_CONFIG_FILE),
        None => return Ok(ProbeConfig::default()),
    };

    ProbeConfig::from_file(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
