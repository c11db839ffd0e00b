//! Seabird CNV cast file parser
//!
//! Handles the CNV format: a free-form ASCII header terminated by the
//! `*END*` sentinel, followed by a whitespace-separated numeric data block.
//! The parser is tolerant by design: recoverable problems become
//! diagnostics, structural problems flip the cast's validity flag, and an
//! `Err` is reserved for I/O and configuration failures.
//!
//! Pipeline stages, each in its own submodule:
//! - [`header`]: header extraction and structured field parsing
//! - [`iow`]: IOW cruise/station/position vendor metadata
//! - [`data_block`]: fixed-width numeric row parsing
//! - [`records`]: joining channels and data into an addressable table
//! - [`diagnostics`]: warning collection and row counters
//! - [`parser`]: the orchestrating [`CnvParser`] and the [`CnvCast`] result

pub mod data_block;
pub mod diagnostics;
pub mod header;
pub mod iow;
pub mod parser;
pub mod records;

#[cfg(test)]
pub mod tests;

pub use data_block::{DataMatrix, parse_data_block};
pub use diagnostics::{Component, ParseDiagnostics, ParseWarning};
pub use header::{RawHeader, extract_header};
pub use parser::{CnvCast, CnvParser};
pub use records::RecordTable;
