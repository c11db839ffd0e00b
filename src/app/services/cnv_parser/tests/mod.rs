//! Tests for the CNV parser pipeline
//!
//! Shared fixtures live here; each pipeline stage has its own test module.

pub mod header_tests;
pub mod parser_tests;

use std::sync::Arc;

use crate::app::services::naming_registry::NamingRegistry;

use super::parser::CnvParser;

/// A small but complete IOW-style cast: header with upload time, vendor
/// metadata, three channels and three data rows.
pub fn create_test_cnv() -> String {
    "\
* Sea-Bird SBE 9 Data File:
* System UpLoad Time = Jan 05 2019 10:00:00
** ReiseNr= EMB 214
** StatBez= TF0271
** EinsatzNr= 0042
** Startzeit= 09:55:02 05-Jan-19 UTC
** SerieNr: = 0123 Operator: MM
** GPS_Posn= 54 30.00 N 12 15.00 E
** Echolote= 24m 23m
# name 0 = prDM: Pressure, Digiquartz [db]
# name 1 = t090C: Temperature [ITS-90, deg C]
# name 2 = c0mS/cm: Conductivity [mS/cm]
# file_type = ascii
*END*
   1.00   5.50  12.10
   2.00   5.40  12.05
   3.00   5.30  12.00
"
    .to_string()
}

/// Registry with just the rules the fixture cast needs
pub fn create_test_registry() -> NamingRegistry {
    NamingRegistry::from_str(
        r#"
names:
  - name: p
    description: pressure
    channels: [prDM, prSM]
  - name: T0
    description: temperature, first sensor
    channels: [t090C, t068C]
  - name: C0
    description: conductivity, first sensor
    channels: [c0mS/cm, c0S/m]
"#,
    )
    .unwrap()
}

/// Parser over the fixture registry with default configuration
pub fn create_test_parser() -> CnvParser {
    CnvParser::new(Arc::new(create_test_registry()))
}
