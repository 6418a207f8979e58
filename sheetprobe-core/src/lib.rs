//! sheetprobe-core: read-only workbook inspection
//!
//! Opens Excel/ODS workbooks without evaluating formulas and builds bounded
//! reports of their sheet layout, cell previews and formula locations.

pub mod config;
pub mod discover;
pub mod error;
pub mod inspect;
pub mod reader;
pub mod reference;
pub mod render;

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub use config::ProbeConfig;
pub use discover::Discovery;
pub use error::{ProbeError, ProbeResult};
pub use inspect::{InspectOptions, WorkbookReport};

/// Main inspector interface
pub struct Inspector {
    config: ProbeConfig,
}

/// Outcome of analysing one file; failures carry a user-facing message
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<WorkbookReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn succeeded(&self) -> bool {
        self.report.is_some()
    }

    /// File name shown in headers
    pub fn display_name(&self) -> String {
        self.file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.display().to_string())
    }
}

impl Inspector {
    /// Create a new inspector with default configuration
    pub fn new() -> Self {
        Self::with_config(ProbeConfig::default())
    }

    /// Create a new inspector with custom configuration
    pub fn with_config(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Read a workbook and build its report
    pub fn inspect_file<P: AsRef<Path>>(&self, path: P) -> ProbeResult<WorkbookReport> {
        let workbook = reader::read_workbook(path)?;
        Ok(inspect::inspect_workbook(&workbook, |sheet| {
            self.config.inspect_options(Some(sheet))
        }))
    }

    /// Inspect a file, turning every failure into a reported outcome
    pub fn analyze<P: AsRef<Path>>(&self, path: P) -> FileOutcome {
        let path = path.as_ref();
        info!(path = %path.display(), "inspecting workbook");

        match self.inspect_file(path) {
            Ok(report) => FileOutcome {
                file: path.to_path_buf(),
                report: Some(report),
                error: None,
            },
            Err(e) => {
                let message = if e.is_unsupported_format() {
                    warn!(path = %path.display(), "no reader for file format");
                    e.to_string()
                } else {
                    error!(path = %path.display(), error = %e, "failed to inspect workbook");
                    format!("Error: {}", e)
                };
                FileOutcome {
                    file: path.to_path_buf(),
                    report: None,
                    error: Some(message),
                }
            }
        }
    }

    /// Directory scanned by `discover`: `dir` if given, else the configured templates directory
    pub fn scan_dir<'a>(&'a self, dir: Option<&'a Path>) -> &'a Path {
        dir.unwrap_or(self.config.global.templates_dir.as_path())
    }

    /// Scan a directory (the configured templates directory when `None`)
    pub fn discover(&self, dir: Option<&Path>) -> ProbeResult<Discovery> {
        discover::find_workbooks(self.scan_dir(dir), &self.config.global.extensions)
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}
