//! Data models for CNV processing
//!
//! This module contains the core data structures for representing parsed CNV
//! header metadata: channel declarations, scalar header fields, cast position,
//! and the IOW vendor metadata block. All of them are constructed once during
//! a parse and are immutable afterwards.

use crate::constants::PLACEHOLDER_ID_PREFIX;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Channel
// =============================================================================

/// One declared sensor/output column from the CNV header
///
/// Channels are stored in declaration order; `index` values are unique but
/// need not be consecutive. `raw_name` values are unique within a parse
/// result (duplicates get an `@<ordinal>` suffix at parse time).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel index as declared in the header
    pub index: usize,

    /// Raw sensor name as declared (disambiguated if it collided)
    pub raw_name: String,

    /// Standardized identifier; a synthetic placeholder until resolved
    pub standardized_id: String,

    /// Long human-readable description (optional)
    pub long_name: Option<String>,

    /// Physical unit extracted from the bracketed part of the description
    pub unit: Option<String>,
}

impl Channel {
    /// Create a channel with the synthetic placeholder identifier `i<index>`
    pub fn new(
        index: usize,
        raw_name: String,
        long_name: Option<String>,
        unit: Option<String>,
    ) -> Self {
        Self {
            index,
            standardized_id: Self::placeholder_id(index),
            raw_name,
            long_name,
            unit,
        }
    }

    /// The placeholder identifier assigned before name resolution
    pub fn placeholder_id(index: usize) -> String {
        format!("{}{}", PLACEHOLDER_ID_PREFIX, index)
    }

    /// Whether a naming rule has claimed this channel
    pub fn is_resolved(&self) -> bool {
        self.standardized_id != Self::placeholder_id(self.index)
    }
}

// =============================================================================
// Header Metadata
// =============================================================================

/// Scalar metadata parsed from the structured header lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderInfo {
    /// Acquisition timestamp from the `System UpLoad Time` line
    pub timestamp: Option<DateTime<Utc>>,

    /// Data format identifier from the `# file_type` line, stored verbatim
    pub file_type: Option<String>,

    /// Declared channels in declaration order
    pub channels: Vec<Channel>,
}

// =============================================================================
// Cast Position
// =============================================================================

/// Geographic position of a cast in signed decimal degrees
///
/// `Unknown` is a distinct state, not (0, 0): a cast at the equator/meridian
/// intersection is `Known { 0.0, 0.0 }` while a malformed position line is
/// `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Position {
    /// Decoded position with hemisphere signs applied
    Known { latitude: f64, longitude: f64 },
    /// Position line absent or malformed
    Unknown,
}

impl Position {
    /// Whether the position was successfully decoded
    pub fn is_known(&self) -> bool {
        matches!(self, Position::Known { .. })
    }

    /// Latitude in signed decimal degrees, if known
    pub fn latitude(&self) -> Option<f64> {
        match self {
            Position::Known { latitude, .. } => Some(*latitude),
            Position::Unknown => None,
        }
    }

    /// Longitude in signed decimal degrees, if known
    pub fn longitude(&self) -> Option<f64> {
        match self {
            Position::Known { longitude, .. } => Some(*longitude),
            Position::Unknown => None,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::Unknown
    }
}

// =============================================================================
// IOW Vendor Metadata
// =============================================================================

/// Cruise/station metadata embedded in the header using the IOW convention
///
/// Every field is independently optional: a failure extracting one marker
/// never prevents extraction of the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IowMetadata {
    /// Cast start time from the `Startzeit` line
    pub start_time: Option<DateTime<Utc>>,

    /// Cruise identifier (`ReiseNr`)
    pub cruise_id: Option<String>,

    /// Station designation (`StatBez`)
    pub station: Option<String>,

    /// Mission/deployment number (`EinsatzNr`)
    pub mission_id: Option<String>,

    /// Series number (`SerieNr`)
    pub series_id: Option<String>,

    /// Operator initials from the `SerieNr`/`Operator` line
    pub operator: Option<String>,

    /// Echo-sounder depths in meters, each parsed independently
    pub echo_depths: (Option<f64>, Option<f64>),

    /// Cast position from the `GPS_Posn` line
    pub position: Position,
}
