//! Plain-text rendering of inspection reports

use crate::inspect::{SheetReport, WorkbookReport};
use std::fmt::Write;

/// Width of the banner rules
pub const RULE_WIDTH: usize = 80;

/// Horizontal rule used around file headers and the closing banner
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Header printed before each file, also when the file fails to open
pub fn file_banner(file_name: &str) -> String {
    format!("\n{rule}\nFile: {file_name}\n{rule}\n", rule = rule())
}

/// Render a full report, banner included
pub fn render_report(report: &WorkbookReport) -> String {
    let mut out = file_banner(&report.file_name);

    let _ = writeln!(out, "\nSheets ({}):", report.sheet_names.len());
    for (i, name) in report.sheet_names.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, name);
    }

    for sheet in &report.sheets {
        render_sheet(&mut out, sheet);
    }

    out
}

fn render_sheet(out: &mut String, sheet: &SheetReport) {
    let _ = writeln!(out, "\n[Sheet: {}]", sheet.name);
    let _ = writeln!(out, "  - Max row: {}", sheet.max_row);
    let _ = writeln!(out, "  - Max column: {}", sheet.max_column);

    let _ = writeln!(out, "\n  First {} rows preview:", sheet.preview.len());
    for (i, row) in sheet.preview.iter().enumerate() {
        let _ = writeln!(out, "    Row {}: {}", i + 1, row.join(" | "));
    }

    if sheet.formula_count > 0 {
        let _ = writeln!(
            out,
            "\n  Formula cells ({}, showing up to {}):",
            sheet.formula_count, sheet.max_formulas
        );
        for entry in &sheet.formulas {
            let _ = writeln!(out, "    {}: {}", entry.cell, entry.formula);
        }
    }
}
