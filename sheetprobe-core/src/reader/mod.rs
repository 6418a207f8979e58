//! Excel/ODS file reader using calamine

use crate::error::{ProbeError, ProbeResult};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::path::Path;
use tracing::{debug, warn};

pub mod workbook;

pub use workbook::{Cell, CellValue, Sheet, Workbook};

/// File extensions calamine can open
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xlam", "xls", "xla", "ods"];

/// Check that a reader exists for the file's extension
pub fn ensure_supported(path: &Path) -> ProbeResult<()> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    if SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(ProbeError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        })
    }
}

/// Read a workbook from a file path.
///
/// Formulas are read as text and never evaluated.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> ProbeResult<Workbook> {
    let path = path.as_ref();
    ensure_supported(path)?;

    let mut excel: Sheets<_> = open_workbook_auto(path).map_err(|e| ProbeError::Open {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_names = excel.sheet_names();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for sheet_name in &sheet_names {
        let range = excel
            .worksheet_range(sheet_name)
            .map_err(|e| ProbeError::Open {
                path: path.to_path_buf(),
                message: format!("sheet '{}': {}", sheet_name, e),
            })?;

        let formulas = excel.worksheet_formula(sheet_name).map_err(|e| {
            warn!(sheet = %sheet_name, error = %e, "could not read formulas");
            e.to_string()
        });

        let sheet = parse_sheet(path, sheet_name, &range, formulas)?;
        debug!(
            sheet = %sheet.name,
            cells = sheet.cells.len(),
            used_range = ?sheet.used_range,
            "parsed sheet"
        );
        sheets.push(sheet);
    }

    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

/// Merge values and formulas of one sheet. A failed formula read fails the whole workbook.
fn parse_sheet(
    path: &Path,
    name: &str,
    range: &Range<Data>,
    formulas: Result<Range<String>, String>,
) -> ProbeResult<Sheet> {
    let formula_range = formulas.map_err(|message| ProbeError::Open {
        path: path.to_path_buf(),
        message: format!("sheet '{}' formulas: {}", name, message),
    })?;
    let mut sheet = Sheet::new(name);

    // Calculated values first
    if let Some((row0, col0)) = range.start() {
        for (rel_row, rel_col, data) in range.used_cells() {
            let value = parse_cell_value(data);
            if !value.is_empty() {
                sheet.insert(row0 + rel_row as u32, col0 + rel_col as u32, value);
            }
        }
    }

    // A formula replaces whatever cached value the cell had
    if let Some((row0, col0)) = formula_range.start() {
        for (rel_row, rel_col, formula) in formula_range.used_cells() {
            let formula = formula.strip_prefix('=').unwrap_or(formula);
            if !formula.is_empty() {
                sheet.insert(
                    row0 + rel_row as u32,
                    col0 + rel_col as u32,
                    CellValue::Formula(formula.to_string()),
                );
            }
        }
    }

    // Extend to the declared extent of the value range, which may include trailing blanks
    if let Some((end_row, end_col)) = range.end() {
        if range.start().is_some() {
            let (rows, cols) = sheet.used_range.unwrap_or((0, 0));
            sheet.used_range = Some((rows.max(end_row + 1), cols.max(end_col + 1)));
        }
    }

    Ok(sheet)
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::Empty => CellValue::Empty,
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
