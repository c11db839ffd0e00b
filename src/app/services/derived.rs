//! Derived seawater-property computation capability
//!
//! The parser itself never computes seawater properties; it hands the raw
//! columns to an injected [`SeawaterComputer`] and attaches whatever comes
//! back. This keeps the thermodynamic library a swappable dependency of the
//! caller, not of the parser.

use crate::Result;

/// Raw column data and context handed to a [`SeawaterComputer`]
#[derive(Debug, Clone)]
pub struct SeawaterInput<'a> {
    /// Conductivity column for the sensor pair
    pub conductivity: &'a [f64],

    /// Temperature column for the sensor pair
    pub temperature: &'a [f64],

    /// Pressure column, shared by both sensor pairs
    pub pressure: &'a [f64],

    /// Declared unit of the conductivity channel, if the header carried one
    pub conductivity_unit: Option<&'a str>,

    /// Declared unit of the temperature channel, if the header carried one
    pub temperature_unit: Option<&'a str>,

    /// Cast longitude in signed decimal degrees, if known
    pub longitude: Option<f64>,

    /// Cast latitude in signed decimal degrees, if known
    pub latitude: Option<f64>,

    /// Whether the cast is classified as Baltic Sea water
    pub baltic: bool,

    /// Which sensor pair the columns belong to (0 or 1)
    pub sensor_pair: u8,
}

/// One computed output column
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedField {
    /// Field name, already suffixed with the sensor pair (e.g. `SA0`)
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Physical unit of the values
    pub unit: String,

    /// One value per input record
    pub values: Vec<f64>,
}

/// Computed fields attached to a cast, in computation order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedTable {
    pub fields: Vec<DerivedField>,
}

impl DerivedTable {
    /// Look up a computed field by name
    pub fn field(&self, name: &str) -> Option<&DerivedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Append the fields of another table (second sensor pair)
    pub fn merge(&mut self, other: DerivedTable) {
        self.fields.extend(other.fields);
    }

    /// Whether any fields were computed
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Capability for computing derived seawater properties from raw columns.
///
/// Implementations typically wrap a TEOS-10 library and return practical
/// salinity, absolute salinity, conservative temperature, potential
/// temperature and potential density. A failure is downgraded by the parser
/// to a diagnostic; it never invalidates the cast.
pub trait SeawaterComputer: Send + Sync {
    fn compute(&self, input: &SeawaterInput<'_>) -> Result<DerivedTable>;
}
