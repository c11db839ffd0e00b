//! Data block parsing
//!
//! The data block is everything after the header sentinel: whitespace
//! separated numeric rows of a fixed width. The width is not declared
//! anywhere; the first row that parses cleanly fixes it, and every later row
//! must match. Rows that fail are dropped with a diagnostic rather than
//! aborting the parse.

use tracing::debug;

use super::diagnostics::{Component, ParseDiagnostics};

/// Parsed numeric rows of a uniform width
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataMatrix {
    rows: Vec<Vec<f64>>,
    width: usize,
}

impl DataMatrix {
    /// Number of values per row (0 until the first row is accepted)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of accepted rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether any rows were accepted
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Accepted rows in input order
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Transpose into column-major storage for the record table
    pub fn into_columns(self) -> Vec<Vec<f64>> {
        let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(self.rows.len()); self.width];
        for row in self.rows {
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }
        columns
    }
}

/// Parse the data block lines into a [`DataMatrix`].
///
/// Blank lines are skipped silently and never fix the width. The first
/// non-blank line whose tokens all parse as floats sets the expected width;
/// later rows with a different token count, or with any non-numeric token,
/// are dropped with a warning. Zero accepted rows is "no data", not an
/// error.
pub fn parse_data_block(lines: &[&str], diagnostics: &mut ParseDiagnostics) -> DataMatrix {
    let mut matrix = DataMatrix::default();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        diagnostics.data_lines_total += 1;

        let values: Option<Vec<f64>> = line
            .split_whitespace()
            .map(|token| token.parse::<f64>().ok())
            .collect();

        let Some(values) = values else {
            diagnostics.rows_skipped += 1;
            diagnostics.warn(
                Component::DataBlock,
                format!("Dropped non-numeric data row: '{}'", line.trim()),
            );
            continue;
        };

        if values.is_empty() {
            // split_whitespace on a non-blank line always yields tokens,
            // but guard the width against ever being fixed at zero
            continue;
        }

        if matrix.width == 0 {
            matrix.width = values.len();
        } else if values.len() != matrix.width {
            diagnostics.rows_skipped += 1;
            diagnostics.warn(
                Component::DataBlock,
                format!(
                    "Dropped data row with {} values, expected {}: '{}'",
                    values.len(),
                    matrix.width,
                    line.trim()
                ),
            );
            continue;
        }

        diagnostics.rows_parsed += 1;
        matrix.rows.push(values);
    }

    debug!(
        "Data block: {} rows x {} columns ({} skipped)",
        matrix.height(),
        matrix.width(),
        diagnostics.rows_skipped
    );
    matrix
}
