//! Bounded, read-only inspection reports for workbooks

use crate::reader::{CellValue, Sheet, Workbook};
use crate::reference::CellReference;
use serde::Serialize;

/// Limits applied when building a sheet report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InspectOptions {
    /// Rows shown in the preview, counted from row 1
    pub preview_rows: u32,
    /// Columns shown in the preview, counted from column A
    pub preview_cols: u32,
    /// Maximum characters of a text or formula cell in the preview
    pub text_width: usize,
    /// Maximum formula cells listed per sheet
    pub max_formulas: usize,
    /// Maximum characters of a listed formula
    pub formula_width: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            preview_cols: 10,
            text_width: 30,
            max_formulas: 5,
            formula_width: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkbookReport {
    pub file_name: String,
    pub sheet_names: Vec<String>,
    pub sheets: Vec<SheetReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetReport {
    pub name: String,
    pub max_row: u32,
    pub max_column: u32,
    /// Rendered preview cells, one inner vector per row
    pub preview: Vec<Vec<String>>,
    /// Total formula cells in the sheet, including those not listed
    pub formula_count: usize,
    pub formulas: Vec<FormulaEntry>,
    /// Limit the formula listing was cut to
    pub max_formulas: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormulaEntry {
    /// A1-style cell reference
    pub cell: String,
    pub formula: String,
}

/// Build a report for every sheet. `options_for` supplies the limits per sheet name.
pub fn inspect_workbook<F>(workbook: &Workbook, options_for: F) -> WorkbookReport
where
    F: Fn(&str) -> InspectOptions,
{
    let file_name = workbook
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| workbook.path.display().to_string());

    WorkbookReport {
        file_name,
        sheet_names: workbook
            .sheet_names()
            .into_iter()
            .map(String::from)
            .collect(),
        sheets: workbook
            .sheets
            .iter()
            .map(|sheet| inspect_sheet(sheet, &options_for(&sheet.name)))
            .collect(),
    }
}

/// Build the report of a single sheet
pub fn inspect_sheet(sheet: &Sheet, options: &InspectOptions) -> SheetReport {
    let max_row = sheet.max_row();
    let max_column = sheet.max_column();

    let rows = options.preview_rows.min(max_row);
    let cols = options.preview_cols.min(max_column);

    let preview = (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| match sheet.get_cell(row, col) {
                    Some(cell) => preview_value(&cell.value, options.text_width),
                    None => String::new(),
                })
                .collect()
        })
        .collect();

    let formula_count = sheet.formula_cells().count();
    let formulas = sheet
        .formula_cells()
        .take(options.max_formulas)
        .filter_map(|cell| {
            cell.value.as_formula().map(|f| FormulaEntry {
                cell: CellReference::new(cell.row, cell.col).to_string(),
                formula: truncate_chars(&format!("={}", f), options.formula_width),
            })
        })
        .collect();

    SheetReport {
        name: sheet.name.clone(),
        max_row,
        max_column,
        preview,
        formula_count,
        formulas,
        max_formulas: options.max_formulas,
    }
}

/// Render a single cell for the preview
pub fn preview_value(value: &CellValue, text_width: usize) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Text(s) => truncate_chars(s, text_width),
        CellValue::Formula(f) => {
            format!("{} [formula]", truncate_chars(&format!("={}", f), text_width))
        }
        CellValue::Number(n) => format_number(*n),
        CellValue::Boolean(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        CellValue::Error(e) => e.clone(),
    }
}

/// Keep at most `max` characters (not bytes)
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn workbook(sheets: Vec<Sheet>) -> Workbook {
        Workbook {
            path: PathBuf::from("templates/budget.xlsx"),
            sheets,
        }
    }

    #[test]
    fn test_sheet_names_in_order() {
        let wb = workbook(vec![
            Sheet::new("Cover"),
            Sheet::new("Costs"),
            Sheet::new("Settlement"),
        ]);
        let report = inspect_workbook(&wb, |_| InspectOptions::default());

        assert_eq!(report.file_name, "budget.xlsx");
        assert_eq!(report.sheet_names, vec!["Cover", "Costs", "Settlement"]);
        assert_eq!(report.sheets.len(), 3);
    }

    #[test]
    fn test_preview_is_bounded() {
        let mut sheet = Sheet::new("Big");
        for row in 0..40 {
            for col in 0..25 {
                sheet.insert(row, col, CellValue::Number((row * 100 + col) as f64));
            }
        }

        let report = inspect_sheet(&sheet, &InspectOptions::default());
        assert_eq!(report.max_row, 40);
        assert_eq!(report.max_column, 25);
        assert_eq!(report.preview.len(), 5);
        assert!(report.preview.iter().all(|row| row.len() == 10));
        assert_eq!(report.preview[4][9], "409");
    }

    #[test]
    fn test_preview_of_small_sheet_fills_gaps() {
        let mut sheet = Sheet::new("Small");
        sheet.insert(0, 0, CellValue::Text("Name".to_string()));
        sheet.insert(1, 2, CellValue::Boolean(true));

        let report = inspect_sheet(&sheet, &InspectOptions::default());
        assert_eq!(
            report.preview,
            vec![
                vec!["Name".to_string(), String::new(), String::new()],
                vec![String::new(), String::new(), "TRUE".to_string()],
            ]
        );
    }

    #[test]
    fn test_long_text_truncated_to_width() {
        let long = "가".repeat(45);
        let value = preview_value(&CellValue::Text(long), 30);
        assert_eq!(value.chars().count(), 30);

        let short = preview_value(&CellValue::Text("short".to_string()), 30);
        assert_eq!(short, "short");
    }

    #[test]
    fn test_formula_preview_is_tagged() {
        let value = preview_value(&CellValue::Formula("SUM(A1:A3)".to_string()), 30);
        assert_eq!(value, "=SUM(A1:A3) [formula]");

        let long = format!("IF({})", "A1>0,".repeat(20));
        let value = preview_value(&CellValue::Formula(long), 30);
        assert_eq!(value.trim_end_matches(" [formula]").chars().count(), 30);
    }

    #[test]
    fn test_number_rendering() {
        assert_eq!(preview_value(&CellValue::Number(3.0), 30), "3");
        assert_eq!(preview_value(&CellValue::Number(-2.5), 30), "-2.5");
        assert_eq!(preview_value(&CellValue::Number(1e20), 30), "100000000000000000000");
    }

    #[test]
    fn test_formula_listing_is_capped() {
        let mut sheet = Sheet::new("Calc");
        for row in 0..8 {
            sheet.insert(row, 1, CellValue::Formula(format!("A{}*2", row + 1)));
        }
        sheet.insert(9, 0, CellValue::Formula(format!("CONCAT({})", "\"x\",".repeat(60))));

        let report = inspect_sheet(&sheet, &InspectOptions::default());
        assert_eq!(report.formula_count, 9);
        assert_eq!(report.formulas.len(), 5);
        assert_eq!(
            report.formulas[0],
            FormulaEntry {
                cell: "B1".to_string(),
                formula: "=A1*2".to_string(),
            }
        );
        assert_eq!(report.formulas[4].cell, "B5");
    }

    #[test]
    fn test_formula_truncated_to_width() {
        let mut sheet = Sheet::new("Calc");
        sheet.insert(0, 0, CellValue::Formula("A1+".repeat(80)));

        let report = inspect_sheet(&sheet, &InspectOptions::default());
        assert_eq!(report.formulas[0].formula.chars().count(), 100);
        assert!(report.formulas[0].formula.starts_with("=A1+"));
    }

    #[test]
    fn test_per_sheet_options() {
        let mut a = Sheet::new("A");
        let mut b = Sheet::new("B");
        for row in 0..10 {
            a.insert(row, 0, CellValue::Number(row as f64));
            b.insert(row, 0, CellValue::Number(row as f64));
        }

        let report = inspect_workbook(&workbook(vec![a, b]), |name| InspectOptions {
            preview_rows: if name == "B" { 8 } else { 5 },
            ..InspectOptions::default()
        });
        assert_eq!(report.sheets[0].preview.len(), 5);
        assert_eq!(report.sheets[1].preview.len(), 8);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("수지분석서", 2), "수지");
    }
}
