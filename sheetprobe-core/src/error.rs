//! Error types for workbook inspection

use std::path::PathBuf;
use thiserror::Error;

pub type ProbeResult<T> = Result<T, ProbeError>;

#[derive(Error, Debug)]
pub enum ProbeError {
    /// No reader is available for the file's format
    #[error(
        "No spreadsheet reader available for '.{extension}' files ({}). Supported formats: {}",
        .path.display(),
        crate::reader::SUPPORTED_EXTENSIONS.join(", ")
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Failed to open workbook {}: {message}", .path.display())]
    Open { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ProbeError {
    /// Whether this error means the format itself cannot be read, as opposed to a broken file
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, ProbeError::UnsupportedFormat { .. })
    }
}
