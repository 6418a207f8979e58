//! Workbook data structures

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Represents a complete workbook, read-only
#[derive(Debug, Clone)]
pub struct Workbook {
    pub path: PathBuf,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Get all sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Represents a worksheet
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    /// Cells keyed by (row, col), 0-based; iteration is row-major
    pub cells: BTreeMap<(u32, u32), Cell>,
    pub used_range: Option<(u32, u32)>, // (rows, cols)
}

impl Sheet {
    /// Create an empty sheet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            used_range: None,
        }
    }

    /// Insert a cell, growing the used range to cover it
    pub fn insert(&mut self, row: u32, col: u32, value: CellValue) {
        let (rows, cols) = self.used_range.unwrap_or((0, 0));
        self.used_range = Some((rows.max(row + 1), cols.max(col + 1)));
        self.cells.insert((row, col), Cell { row, col, value });
    }

    /// Get a cell at the given position
    pub fn get_cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Get formula cells in row-major order
    pub fn formula_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values().filter(|c| c.value.is_formula())
    }

    /// Number of rows in the used range (0 for an empty sheet)
    pub fn max_row(&self) -> u32 {
        self.used_range.map(|(rows, _)| rows).unwrap_or(0)
    }

    /// Number of columns in the used range (0 for an empty sheet)
    pub fn max_column(&self) -> u32 {
        self.used_range.map(|(_, cols)| cols).unwrap_or(0)
    }
}

/// Represents a single cell
#[derive(Debug, Clone)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub value: CellValue,
}

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    Error(String),
    /// Formula text without the leading `=`
    Formula(String),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell contains a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula(_))
    }

    /// Get the formula if this is a formula cell
    pub fn as_formula(&self) -> Option<&str> {
        match self {
            CellValue::Formula(f) => Some(f),
            _ => None,
        }
    }
}
