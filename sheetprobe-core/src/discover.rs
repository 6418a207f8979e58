//! Locating workbooks in the templates directory

use crate::error::ProbeResult;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of scanning a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// The directory does not exist
    MissingDir(PathBuf),
    /// Matching files, sorted by path (may be empty)
    Found(Vec<PathBuf>),
}

/// List files directly inside `dir` whose extension matches one of `extensions`.
///
/// Matching is case-insensitive and does not descend into subdirectories.
pub fn find_workbooks(dir: &Path, extensions: &[String]) -> ProbeResult<Discovery> {
    if !dir.is_dir() {
        return Ok(Discovery::MissingDir(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if has_extension(&path, extensions) {
            files.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-matching file");
        }
    }
    files.sort();

    Ok(Discovery::Found(files))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}
