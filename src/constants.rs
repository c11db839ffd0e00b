//! Application constants for the CNV processor
//!
//! This module contains the header markers, parsing limits, date formats,
//! and fixed reference data used throughout the application.

// =============================================================================
// Header Structure
// =============================================================================

/// Sentinel line marking the end of the CNV header (inclusive)
pub const HEADER_END_MARKER: &str = "*END*";

/// Maximum number of lines scanned for the header sentinel before giving up.
/// Exceeding the ceiling yields an empty header, which downstream turns into
/// the "zero channels" invalid result.
pub const HEADER_LINE_CEILING: usize = 10_000;

/// Marker for the acquisition timestamp header line
pub const UPLOAD_TIME_MARKER: &str = "System UpLoad Time";

/// Marker for per-channel declaration lines
pub const CHANNEL_MARKER: &str = "# name";

/// Marker for the data format identifier line
pub const FILE_TYPE_MARKER: &str = "# file_type";

/// Format identifier class accepted for the data block; anything else is a
/// hard validation failure since binary layouts are out of scope.
pub const ACCEPTED_FILE_TYPE: &str = "ASCII";

/// Prefix of the synthetic placeholder assigned to unresolved channels
/// (placeholder is this prefix followed by the channel index).
pub const PLACEHOLDER_ID_PREFIX: &str = "i";

/// Separator inserted when disambiguating duplicate raw channel names
pub const DUPLICATE_NAME_SEPARATOR: char = '@';

// =============================================================================
// Date and Time Formats
// =============================================================================

/// Candidate formats for the `System UpLoad Time` value
/// (e.g. "Jan 05 2019 10:00:00" or "Jan 5 2019 10:00:00")
pub const UPLOAD_TIME_FORMATS: &[&str] = &["%b %d %Y %H:%M:%S", "%b %e %Y %H:%M:%S"];

/// Format of the reassembled IOW start time (ISO date + time, no separator)
pub const IOW_DATETIME_FORMAT: &str = "%Y-%m-%d%H:%M:%S";

/// Two-digit years below the pivot map to 20xx, at or above it to 19xx
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 80;

/// Timestamp format used in the one-line cast summary
pub const SUMMARY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// IOW Header Dialect Markers
// =============================================================================

/// Substring markers for the IOW vendor metadata lines
pub mod iow_markers {
    pub const START_TIME: &str = "Startzeit";
    pub const CRUISE: &str = "ReiseNr";
    pub const STATION: &str = "StatBez";
    pub const MISSION: &str = "EinsatzNr";
    pub const ECHO_DEPTHS: &str = "Echolote";
    pub const SERIES: &str = "SerieNr";
    pub const OPERATOR: &str = "Operator";
    pub const POSITION: &str = "GPS_Posn";
}

/// Resolve a month abbreviation to its number, accepting the German forms
/// used by IOW headers alongside the standard English three-letter ones.
pub fn month_number(abbreviation: &str) -> Option<u32> {
    match abbreviation.to_lowercase().as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" | "mrz" => Some(3),
        "apr" => Some(4),
        "may" | "mai" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" | "okt" => Some(10),
        "nov" => Some(11),
        "dec" | "dez" => Some(12),
        _ => None,
    }
}

// =============================================================================
// Standardized Channel Identifiers
// =============================================================================

/// Standardized identifiers consumed by the derived-computation capability
pub mod standard_ids {
    pub const PRESSURE: &str = "p";
    pub const CONDUCTIVITY: [&str; 2] = ["C0", "C1"];
    pub const TEMPERATURE: [&str; 2] = ["T0", "T1"];
}

// =============================================================================
// Baltic Sea Reference Regions
// =============================================================================

/// Bounding boxes `([lon_min, lon_max], [lat_min, lat_max])` that together
/// approximate the Baltic Sea. Exact thresholds from an external convention;
/// treat as fixed reference data.
pub const BALTIC_REGIONS: [([f64; 2], [f64; 2]); 7] = [
    ([10.2, 13.0], [56.2, 57.5]),
    ([9.4, 13.4], [53.9, 56.3]),
    ([13.3, 17.0], [53.4, 56.3]),
    ([15.9, 24.6], [54.2, 60.2]),
    ([24.3, 30.4], [59.1, 60.8]),
    ([16.8, 23.3], [60.1, 63.3]),
    ([18.8, 25.6], [63.1, 66.2]),
];

// =============================================================================
// Files and Output
// =============================================================================

/// Default naming-rule file shipped with the crate
pub const DEFAULT_RULES_FILE: &str = "rules/standard_names.yaml";

/// File extension scanned for by the folder summary command
pub const CNV_FILE_EXTENSION: &str = "cnv";

/// Field separator of the one-line cast summary
pub const SUMMARY_SEPARATOR: char = ',';
