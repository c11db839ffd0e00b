//! CNV cast parser
//!
//! Orchestrates the full pipeline: header extraction, structured field
//! parsing, IOW metadata, name resolution, data-block parsing, record
//! assembly, Baltic classification and optional derived computation.
//!
//! Malformed content never produces an `Err`: structural failures flip the
//! cast's `valid` flag and everything recoverable is downgraded to a
//! diagnostic. `Err` is reserved for the machinery around the parse (I/O,
//! rule files, configuration).

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::app::models::{Channel, HeaderInfo, IowMetadata, Position};
use crate::app::services::derived::{DerivedTable, SeawaterComputer, SeawaterInput};
use crate::app::services::naming_registry::{self, NamingRegistry};
use crate::app::services::region;
use crate::config::ParserConfig;
use crate::constants::{
    ACCEPTED_FILE_TYPE, SUMMARY_DATETIME_FORMAT, SUMMARY_SEPARATOR, standard_ids,
};
use crate::{Error, Result};

use super::data_block::parse_data_block;
use super::diagnostics::{Component, ParseDiagnostics};
use super::header::extract_header;
use super::records::RecordTable;

/// Parser for Seabird CNV cast files
///
/// The parser is cheap to clone and safe to share across threads; the
/// naming registry and the optional derived-computation capability are held
/// behind `Arc`.
#[derive(Clone)]
pub struct CnvParser {
    registry: Arc<NamingRegistry>,
    config: ParserConfig,
    computer: Option<Arc<dyn SeawaterComputer>>,
}

impl CnvParser {
    /// Create a parser with the given naming registry and default config
    pub fn new(registry: Arc<NamingRegistry>) -> Self {
        Self {
            registry,
            config: ParserConfig::default(),
            computer: None,
        }
    }

    /// Replace the parser configuration
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach a derived-computation capability
    pub fn with_computer(mut self, computer: Arc<dyn SeawaterComputer>) -> Self {
        self.computer = Some(computer);
        self
    }

    /// Read and parse a CNV file from disk.
    ///
    /// Only the read itself can fail; malformed content comes back as a
    /// cast with `valid == false`.
    pub fn parse_file(&self, path: &Path) -> Result<CnvCast> {
        let bytes = std::fs::read(path)
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
        let content = self.config.encoding.decode(&bytes);
        Ok(self.parse_str(&content, &path.display().to_string()))
    }

    /// Parse CNV content already held in memory.
    pub fn parse_str(&self, content: &str, file_name: &str) -> CnvCast {
        let mut diagnostics = ParseDiagnostics::new();

        // Normalize line endings once; the format is line-oriented
        let content = content.replace('\r', "");
        let lines: Vec<&str> = content.split('\n').collect();

        let raw_header = extract_header(&lines);
        let header = HeaderInfo::parse(&raw_header.text, &mut diagnostics);

        if header.channels.is_empty() {
            diagnostics.warn(
                Component::Header,
                "No channel declarations found, not a CNV cast",
            );
            return CnvCast::invalid(file_name, header, diagnostics);
        }

        // An absent file_type line is treated like an unrecognized one:
        // without the ASCII declaration the data block layout is unknown
        let declared_ascii = header
            .file_type
            .as_deref()
            .map(|file_type| file_type.to_uppercase().contains(ACCEPTED_FILE_TYPE))
            .unwrap_or(false);
        if !declared_ascii {
            diagnostics.warn(
                Component::Header,
                format!(
                    "Unsupported file type '{}'",
                    header.file_type.as_deref().unwrap_or("")
                ),
            );
            return CnvCast::invalid(file_name, header, diagnostics);
        }

        let iow = IowMetadata::parse(&raw_header.text, &mut diagnostics);

        // The header timestamp is authoritative; the vendor start time only
        // fills the gap when the header line is missing or unparseable
        let timestamp = header.timestamp.or(iow.start_time);
        let position = iow.position;

        let mut channels = header.channels.clone();
        naming_registry::resolve(&self.registry, &mut channels);

        let matrix = parse_data_block(&lines[raw_header.lines_consumed..], &mut diagnostics);

        let baltic = self
            .config
            .baltic_override
            .unwrap_or_else(|| region::is_baltic(&position));

        let records = match RecordTable::assemble(&channels, matrix) {
            Ok(records) => records,
            Err(error) => {
                diagnostics.warn(Component::RecordAssembly, error.to_string());
                return CnvCast::invalid(file_name, header, diagnostics);
            }
        };

        let derived = self.compute_derived(&channels, &records, &position, baltic, &mut diagnostics);

        info!(
            "Parsed {}: {} channels, {} records, baltic={}",
            file_name,
            channels.len(),
            records.height(),
            baltic
        );

        CnvCast {
            valid: true,
            file_name: file_name.to_string(),
            timestamp,
            position,
            file_type: header.file_type.clone(),
            channels,
            iow,
            records: Some(records),
            derived,
            baltic,
            diagnostics,
        }
    }

    /// Run the derived-computation capability for both sensor pairs.
    ///
    /// A pair is attempted only when its conductivity and temperature
    /// columns and the shared pressure column all resolved; a computation
    /// failure is recorded and skips that pair only.
    fn compute_derived(
        &self,
        channels: &[Channel],
        records: &RecordTable,
        position: &Position,
        baltic: bool,
        diagnostics: &mut ParseDiagnostics,
    ) -> Option<DerivedTable> {
        let computer = self.computer.as_ref()?;
        let pressure = records.column(standard_ids::PRESSURE)?;

        let unit_of = |id: &str| -> Option<&str> {
            channels
                .iter()
                .find(|c| c.standardized_id == id)
                .and_then(|c| c.unit.as_deref())
        };

        let mut table = DerivedTable::default();
        for pair in 0..2 {
            let conductivity_id = standard_ids::CONDUCTIVITY[pair];
            let temperature_id = standard_ids::TEMPERATURE[pair];

            let (Some(conductivity), Some(temperature)) = (
                records.column(conductivity_id),
                records.column(temperature_id),
            ) else {
                debug!("Sensor pair {} incomplete, skipping derived fields", pair);
                continue;
            };

            let input = SeawaterInput {
                conductivity,
                temperature,
                pressure,
                conductivity_unit: unit_of(conductivity_id),
                temperature_unit: unit_of(temperature_id),
                longitude: position.longitude(),
                latitude: position.latitude(),
                baltic,
                sensor_pair: pair as u8,
            };

            match computer.compute(&input) {
                Ok(fields) => table.merge(fields),
                Err(error) => diagnostics.warn(
                    Component::Derived,
                    format!("Sensor pair {}: {}", pair, error),
                ),
            }
        }

        if table.is_empty() { None } else { Some(table) }
    }
}

/// Fully parsed CNV cast
#[derive(Debug, Clone, Default)]
pub struct CnvCast {
    /// Whether the file parsed as a structurally sound CNV cast
    pub valid: bool,

    /// Name the cast was parsed under (path or caller-supplied label)
    pub file_name: String,

    /// Acquisition timestamp; the header value, falling back to the IOW
    /// start time
    pub timestamp: Option<DateTime<Utc>>,

    /// Cast position from the IOW metadata
    pub position: Position,

    /// Data format identifier, verbatim from the header
    pub file_type: Option<String>,

    /// Declared channels with standardized identifiers resolved
    pub channels: Vec<Channel>,

    /// IOW vendor metadata block
    pub iow: IowMetadata,

    /// Assembled record table; `None` when the cast is invalid
    pub records: Option<RecordTable>,

    /// Derived seawater properties, when a capability was attached and at
    /// least one sensor pair was complete
    pub derived: Option<DerivedTable>,

    /// Whether the cast is classified (or forced) as Baltic Sea water
    pub baltic: bool,

    /// Warnings and row counters collected during the parse
    pub diagnostics: ParseDiagnostics,
}

impl CnvCast {
    fn invalid(file_name: &str, header: HeaderInfo, diagnostics: ParseDiagnostics) -> Self {
        Self {
            valid: false,
            file_name: file_name.to_string(),
            timestamp: header.timestamp,
            file_type: header.file_type.clone(),
            channels: header.channels,
            diagnostics,
            ..Default::default()
        }
    }

    /// Column header matching [`summary_line`](Self::summary_line)
    pub fn summary_header_line() -> String {
        let mut line = String::new();
        for field in [
            "Date", "Lat", "Lon", "p min", "p max", "num p samples", "baltic", "file",
        ] {
            line.push_str(field);
            line.push(SUMMARY_SEPARATOR);
        }
        line
    }

    /// One-line comma-separated summary of the cast.
    ///
    /// Unknown values print as `NaN`; the pressure statistics come from the
    /// standardized `p` column.
    pub fn summary_line(&self) -> String {
        let date = match self.timestamp {
            Some(timestamp) => timestamp.format(SUMMARY_DATETIME_FORMAT).to_string(),
            None => "NaN".to_string(),
        };

        let coordinate = |value: Option<f64>| match value {
            Some(v) => format!("{:.5}", v),
            None => "NaN".to_string(),
        };

        let pressure = self
            .records
            .as_ref()
            .and_then(|records| records.column(standard_ids::PRESSURE));
        let (p_min, p_max, p_count) = match pressure {
            Some(column) if !column.is_empty() => {
                let min = column.iter().cloned().fold(f64::INFINITY, f64::min);
                let max = column.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                (format!("{:8.2}", min), format!("{:8.2}", max), column.len())
            }
            _ => ("NaN".to_string(), "NaN".to_string(), 0),
        };

        let mut line = String::new();
        for field in [
            date,
            coordinate(self.position.latitude()),
            coordinate(self.position.longitude()),
            p_min,
            p_max,
            p_count.to_string(),
            (self.baltic as u8).to_string(),
            self.file_name.clone(),
        ] {
            line.push_str(&field);
            line.push(SUMMARY_SEPARATOR);
        }
        line
    }
}

impl std::fmt::Display for CnvCast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary_line())
    }
}
