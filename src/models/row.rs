//! Input row model and related types.
//!
//! A calculation starts from one spreadsheet-shaped row of cells plus a
//! column mapping that tells the engine which cell is which. The row is
//! owned by the caller and passed by reference; the engine never mutates
//! it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single spreadsheet cell: either a number or raw text.
///
/// Pasted data arrives as text more often than not, so every consumer of
/// a cell goes through the lenient parsing in
/// [`crate::calculation::parse_amount`] rather than trusting the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// A numeric cell.
    Number(Decimal),
    /// A text cell.
    Text(String),
}

impl Cell {
    /// Returns the cell content as text.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Number(value) => value.to_string(),
            Cell::Text(text) => text.clone(),
        }
    }

    /// Returns true if the cell is empty text.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Text(text) if text.trim().is_empty())
    }
}

/// One employee's input row: an ordered list of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRow {
    /// The ordered cell values.
    pub cells: Vec<Cell>,
}

impl EmployeeRow {
    /// Creates a row from its cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Returns the cell at the given column index, if present.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }
}

/// Column indices locating each field inside an [`EmployeeRow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Index of the employee identifier column.
    pub employee_id_col: usize,
    /// Index of the employee name column.
    pub employee_name_col: usize,
    /// Index of the hire date column.
    pub hire_date_col: usize,
    /// Index of the daily salary column.
    pub daily_salary_col: usize,
    /// Indices of the perception columns.
    pub perception_columns: Vec<usize>,
}
