//! A1-style cell references

use serde::Serialize;
use std::cmp::Ordering;

/// Cell reference (e.g., A1, B2), 0-based internally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellReference {
    pub row: u32,
    pub col: u32,
}

impl CellReference {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Convert to Excel-style reference (e.g., "A1")
    pub fn to_excel_ref(&self) -> String {
        format!("{}{}", Self::col_to_letter(self.col), self.row + 1)
    }

    /// Convert column number to letter (0 -> A, 1 -> B, etc.)
    fn col_to_letter(mut col: u32) -> String {
        let mut result = String::new();
        loop {
            result.insert(0, (b'A' + (col % 26) as u8) as char);
            if col < 26 {
                break;
            }
            col = col / 26 - 1;
        }
        result
    }
}

impl PartialOrd for CellReference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellReference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row.cmp(&other.row).then_with(|| self.col.cmp(&other.col))
    }
}

impl std::fmt::Display for CellReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_excel_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excel_refs() {
        assert_eq!(CellReference::new(0, 0).to_string(), "A1");
        assert_eq!(CellReference::new(2, 1).to_string(), "B3");
        assert_eq!(CellReference::new(0, 25).to_string(), "Z1");
        assert_eq!(CellReference::new(0, 26).to_string(), "AA1");
        assert_eq!(CellReference::new(9, 701).to_string(), "ZZ10");
        assert_eq!(CellReference::new(0, 702).to_string(), "AAA1");
    }

    #[test]
    fn test_row_major_order() {
        let mut refs = vec![
            CellReference::new(1, 0),
            CellReference::new(0, 5),
            CellReference::new(0, 1),
        ];
        refs.sort();
        assert_eq!(
            refs.iter().map(|r| r.to_string()).collect::<Vec<_>>(),
            vec!["B1", "F1", "A2"]
        );
    }
}
