//! Scoring-sheet loading.

use std::path::Path;

use anyhow::{Context, Result};

/// In-memory grid of a scoring-sheet export, indexed by 0-based
/// (row, column). Row 0 is real data (display names), never a header.
/// Immutable once loaded.
#[derive(Debug, Clone)]
pub struct CellGrid {
    rows: Vec<Vec<String>>,
}

impl CellGrid {
    /// Load a comma-delimited export. Fails the run if the file cannot be
    /// opened or parsed; there is no partial-grid recovery.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to open scoring sheet: {}", path.display()))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .with_context(|| format!("Failed to parse scoring sheet: {}", path.display()))?;
            let row: Vec<String> = record.iter().map(|cell| cell.to_string()).collect();
            // Blank lines don't count toward block offsets.
            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            rows.push(row);
        }
        Ok(Self { rows })
    }

    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row of the grid; short rows read as missing cells.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Raw cell text, or `None` when the coordinate is out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

/// Whether a cell denotes "no value": out of range, blank, or the literal
/// sentinel `"0"` the sheet uses for intentionally empty cells.
pub fn is_empty_cell(cell: Option<&str>) -> bool {
    match cell {
        None => true,
        Some(text) => {
            let trimmed = text.trim();
            trimmed.is_empty() || trimmed == "0"
        }
    }
}
