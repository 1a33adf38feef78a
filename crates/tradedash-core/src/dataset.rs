//! Tabular dataset model.
//!
//! A [`Dataset`] is an ordered sequence of rows sharing one column set.
//! Column order is insertion order from the origin (remote file, uploaded
//! file, or constructed sample rows). A dataset may be *empty* (zero rows),
//! which is a valid state distinct from "not yet loaded" - the latter is
//! represented at the resolution layer, not here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, DatasetError};

/// A single cell value.
///
/// Parsed from CSV text by trying integer, then decimal, then falling back
/// to text; a blank field is [`Cell::Empty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Free-form text.
    Text(String),
    /// Integer value.
    Integer(i64),
    /// Decimal value (exact arithmetic).
    Number(Decimal),
    /// Absent/blank value.
    Empty,
}

impl Cell {
    /// Parses a raw CSV field into the most specific cell type.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Self::Integer(i);
        }
        if let Ok(d) = trimmed.parse::<Decimal>() {
            return Self::Number(d);
        }
        Self::Text(raw.to_string())
    }

    /// Returns the numeric value of this cell, if it has one.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Integer(i) => Some(Decimal::from(*i)),
            Self::Number(d) => Some(*d),
            Self::Text(_) | Self::Empty => None,
        }
    }

    /// Returns true for [`Cell::Empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Renders the cell as a CSV field.
    #[must_use]
    pub fn to_field(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(i) => i.to_string(),
            Self::Number(d) => d.to_string(),
            Self::Empty => String::new(),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_field())
    }
}

/// An ordered, column-homogeneous collection of rows.
///
/// Invariant: every row holds exactly `columns().len()` cells. The invariant
/// is enforced on construction; violating rows are rejected with
/// [`DatasetError::RowWidthMismatch`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Creates a dataset with the given column set and no rows.
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// The empty sentinel: zero columns and zero rows.
    ///
    /// Returned in place of raising an error on remote fetch failure.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a dataset from columns and rows, checking the width invariant.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> CoreResult<Self> {
        let mut dataset = Self::new(columns);
        for row in rows {
            dataset.push_row(row)?;
        }
        Ok(dataset)
    }

    /// Builds a dataset from fixed-width literal rows.
    ///
    /// The const width ties every row to the header at the type level, so
    /// this constructor cannot violate the width invariant.
    #[must_use]
    pub fn from_literal<const N: usize>(columns: [&str; N], rows: Vec<[Cell; N]>) -> Self {
        Self {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            rows: rows.into_iter().map(|r| r.into_iter().collect()).collect(),
        }
    }

    /// Appends a row, rejecting it if its width does not match the columns.
    pub fn push_row(&mut self, row: Vec<Cell>) -> CoreResult<()> {
        if row.len() != self.columns.len() {
            return Err(DatasetError::RowWidthMismatch {
                row: self.rows.len(),
                got: row.len(),
                expected: self.columns.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Returns true when the dataset has zero rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names, in insertion order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Position of a column by exact name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns true when the column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at the given row index and column name.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    /// Iterates the cells of one named column, top to bottom.
    pub fn column_values<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a Cell>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |r| &r[idx]))
    }
}
