//! Parse diagnostics for CNV processing
//!
//! Recoverable problems never escape the parser as errors; they are recorded
//! here as structured warnings alongside row-level counters. The collector is
//! threaded through the pipeline explicitly so tests can assert on exact
//! diagnostic content without relying on process-wide logging state.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Pipeline stage that produced a warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Component {
    Header,
    VendorMetadata,
    DataBlock,
    NameResolution,
    RecordAssembly,
    Derived,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Component::Header => "header",
            Component::VendorMetadata => "vendor-metadata",
            Component::DataBlock => "data-block",
            Component::NameResolution => "name-resolution",
            Component::RecordAssembly => "record-assembly",
            Component::Derived => "derived",
        };
        write!(f, "{}", name)
    }
}

/// One recoverable problem encountered during a parse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// Stage that downgraded the failure
    pub component: Component,

    /// Human-readable description of what was skipped or left unset
    pub message: String,
}

/// Append-only diagnostics collected across one parse
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseDiagnostics {
    /// Recoverable problems, in the order they were encountered
    pub warnings: Vec<ParseWarning>,

    /// Number of non-blank lines inspected in the data block
    pub data_lines_total: usize,

    /// Number of data rows accepted into the record table
    pub rows_parsed: usize,

    /// Number of data rows rejected (wrong width or non-numeric content)
    pub rows_skipped: usize,
}

impl ParseDiagnostics {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a recoverable problem and emit it to the log
    pub fn warn(&mut self, component: Component, message: impl Into<String>) {
        let message = message.into();
        warn!("{}: {}", component, message);
        self.warnings.push(ParseWarning { component, message });
    }

    /// Warnings produced by one pipeline stage
    pub fn warnings_for(&self, component: Component) -> impl Iterator<Item = &ParseWarning> {
        self.warnings
            .iter()
            .filter(move |w| w.component == component)
    }

    /// Fraction of inspected data rows that were accepted, as a percentage
    pub fn row_success_rate(&self) -> f64 {
        if self.data_lines_total == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.data_lines_total as f64) * 100.0
        }
    }
}
