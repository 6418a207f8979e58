//! Line-range splicing on in-memory text

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// File patched when no `--file` is given, relative to the project root
pub const TARGET_FILE: &str = "app/(main)/projects/[id]/profitability/page.tsx";
/// First removed line, 0-based
pub const START_LINE: usize = 915;
/// One past the last removed line, 0-based
pub const END_LINE: usize = 1808;
/// Line inserted in place of the removed range
pub const REPLACEMENT_LINE: &str = r#"         {activeTab === "product-plan" && <ProductPlanTab />}"#;
/// Expected start of the first removed line, ignoring indentation
pub const START_MARKER: &str = r#"{activeTab === "product-plan" && ("#;
/// Expected start of the last removed line, ignoring indentation
pub const END_MARKER: &str = ")}";

const BOM: char = '\u{feff}';

/// Replace `lines[start..end]` with a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePatch {
    start: usize,
    end: usize,
    replacement: String,
}

impl LinePatch {
    /// Returns `None` when `start > end`. A missing trailing newline is added to the replacement.
    pub fn new(start: usize, end: usize, replacement: impl Into<String>) -> Option<Self> {
        if start > end {
            return None;
        }
        let mut replacement = replacement.into();
        if !replacement.ends_with('\n') {
            replacement.push('\n');
        }
        Some(Self {
            start,
            end,
            replacement,
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// `lines[..start] ++ [replacement] ++ lines[end..]`, with both bounds clamped to the input
    pub fn apply<'a>(&'a self, lines: &[&'a str]) -> Vec<&'a str> {
        let len = lines.len();
        let start = self.start.min(len);
        let end = self.end.min(len);

        let mut out = Vec::with_capacity(start + 1 + (len - end));
        out.extend_from_slice(&lines[..start]);
        out.push(self.replacement.as_str());
        out.extend_from_slice(&lines[end..]);
        out
    }

    /// Lines actually removed from an input of `total` lines
    pub fn removed_count(&self, total: usize) -> usize {
        self.end.min(total) - self.start.min(total)
    }

    /// Boundary markers for the first and last removed line
    pub fn markers(&self, start_marker: &str, end_marker: &str) -> Vec<Marker> {
        if self.start == self.end {
            return Vec::new();
        }
        vec![
            Marker::new(self.start, start_marker),
            Marker::new(self.end - 1, end_marker),
        ]
    }
}

/// Text a line is expected to start with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub index: usize,
    pub expected: String,
}

impl Marker {
    pub fn new(index: usize, expected: impl Into<String>) -> Self {
        Self {
            index,
            expected: expected.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMismatch {
    pub index: usize,
    pub expected: String,
    /// `None` when the file has fewer lines than `index + 1`
    pub found: Option<String>,
}

impl fmt::Display for MarkerMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            Some(found) => write!(
                f,
                "line {} should start with {:?} but is {:?}",
                self.index + 1,
                self.expected,
                found
            ),
            None => write!(
                f,
                "line {} should start with {:?} but the file is shorter",
                self.index + 1,
                self.expected
            ),
        }
    }
}

/// Compare each marker against its line, indentation ignored
pub fn check_markers(lines: &[&str], markers: &[Marker]) -> Vec<MarkerMismatch> {
    markers
        .iter()
        .filter_map(|marker| match lines.get(marker.index) {
            Some(line) if line.trim_start().starts_with(marker.expected.as_str()) => None,
            Some(line) => Some(MarkerMismatch {
                index: marker.index,
                expected: marker.expected.clone(),
                found: Some(line.trim_end_matches(['\r', '\n']).to_string()),
            }),
            None => Some(MarkerMismatch {
                index: marker.index,
                expected: marker.expected.clone(),
                found: None,
            }),
        })
        .collect()
}

/// Split into lines that keep their terminators, so joining restores the input
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Read a UTF-8 file, dropping a leading byte-order mark if present
pub fn read_source(path: &Path) -> io::Result<String> {
    let content = fs::read_to_string(path)?;
    Ok(match content.strip_prefix(BOM) {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// Write the lines as UTF-8 preceded by a byte-order mark
pub fn write_with_bom(path: &Path, lines: &[&str]) -> io::Result<()> {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len()).sum::<usize>() + 3);
    out.push(BOM);
    for line in lines {
        out.push_str(line);
    }
    fs::write(path, out)
}
