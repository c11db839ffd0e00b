//! End-to-end tests for the cast parser

use std::sync::Arc;

use chrono::{Datelike, Timelike};

use crate::app::services::cnv_parser::diagnostics::Component;
use crate::app::services::derived::{
    DerivedField, DerivedTable, SeawaterComputer, SeawaterInput,
};
use crate::config::ParserConfig;
use crate::{CnvParser, Error, Result};

use super::{create_test_cnv, create_test_parser, create_test_registry};

#[test]
fn test_valid_cast_parses_fully() {
    let cast = create_test_parser().parse_str(&create_test_cnv(), "test.cnv");

    assert!(cast.valid);
    assert_eq!(cast.channels.len(), 3);
    assert_eq!(cast.file_type.as_deref(), Some("ascii"));

    let records = cast.records.as_ref().unwrap();
    assert_eq!(records.height(), 3);
    assert_eq!(records.width(), 3);
    assert_eq!(records.column("p"), Some([1.0, 2.0, 3.0].as_slice()));
    assert_eq!(records.column("t090C"), Some([5.5, 5.4, 5.3].as_slice()));
}

#[test]
fn test_header_timestamp_wins_over_vendor_start_time() {
    let cast = create_test_parser().parse_str(&create_test_cnv(), "test.cnv");

    // Both lines are present in the fixture; the upload time wins
    let timestamp = cast.timestamp.unwrap();
    assert_eq!(timestamp.hour(), 10);
    assert_eq!(cast.iow.start_time.unwrap().hour(), 9);
}

#[test]
fn test_vendor_start_time_fills_missing_upload_time() {
    let content = create_test_cnv().replace("* System UpLoad Time = Jan 05 2019 10:00:00\n", "");
    let cast = create_test_parser().parse_str(&content, "test.cnv");

    assert!(cast.valid);
    let timestamp = cast.timestamp.unwrap();
    assert_eq!(timestamp.year(), 2019);
    assert_eq!(timestamp.hour(), 9);
    assert_eq!(timestamp.minute(), 55);
}

#[test]
fn test_position_and_baltic_classification() {
    let cast = create_test_parser().parse_str(&create_test_cnv(), "test.cnv");

    // 54.5 N, 12.25 E is in the Arkona Basin
    assert_eq!(cast.position.latitude(), Some(54.5));
    assert_eq!(cast.position.longitude(), Some(12.25));
    assert!(cast.baltic);
}

#[test]
fn test_baltic_override() {
    let parser = create_test_parser().with_config(ParserConfig {
        baltic_override: Some(false),
        ..Default::default()
    });
    let cast = parser.parse_str(&create_test_cnv(), "test.cnv");

    assert!(!cast.baltic);
}

#[test]
fn test_zero_channels_is_invalid() {
    let content = "* Sea-Bird SBE 9 Data File:\n*END*\n1.0 2.0\n";
    let cast = create_test_parser().parse_str(content, "test.cnv");

    assert!(!cast.valid);
    assert!(cast.records.is_none());
    assert!(cast.diagnostics.warnings_for(Component::Header).count() >= 1);
}

#[test]
fn test_missing_sentinel_past_ceiling_is_invalid() {
    // Channel declarations are present, but the sentinel never arrives
    // within the scan ceiling, so the header comes back empty
    let mut content = String::from("# name 0 = prDM: Pressure [db]\n");
    for _ in 0..10_001 {
        content.push_str("* filler comment line\n");
    }
    let cast = create_test_parser().parse_str(&content, "runaway.cnv");

    assert!(!cast.valid);
    assert!(cast.channels.is_empty());
}

#[test]
fn test_non_ascii_file_type_is_invalid() {
    let content = create_test_cnv().replace("# file_type = ascii", "# file_type = binary");
    let cast = create_test_parser().parse_str(&content, "test.cnv");

    assert!(!cast.valid);
}

#[test]
fn test_missing_file_type_line_is_invalid() {
    // No file_type declaration means the data block layout is unknown,
    // which is treated the same as an unrecognized format
    let content = create_test_cnv().replace("# file_type = ascii\n", "");
    let cast = create_test_parser().parse_str(&content, "test.cnv");

    assert!(!cast.valid);
    assert!(cast.file_type.is_none());
    assert!(cast.records.is_none());
    assert!(cast.diagnostics.warnings_for(Component::Header).count() >= 1);
}

#[test]
fn test_column_count_mismatch_is_invalid() {
    // Drop one channel declaration; the data block still has three columns
    let content = create_test_cnv().replace("# name 2 = c0mS/cm: Conductivity [mS/cm]\n", "");
    let cast = create_test_parser().parse_str(&content, "test.cnv");

    assert!(!cast.valid);
    assert_eq!(
        cast.diagnostics
            .warnings_for(Component::RecordAssembly)
            .count(),
        1
    );
}

#[test]
fn test_header_only_cast_is_valid_with_no_data() {
    let content = create_test_cnv();
    let header_only = &content[..content.find("*END*").unwrap() + "*END*\n".len()];
    let cast = create_test_parser().parse_str(header_only, "test.cnv");

    assert!(cast.valid);
    let records = cast.records.as_ref().unwrap();
    assert!(records.is_empty());
    assert_eq!(records.width(), 3);
}

#[test]
fn test_crlf_line_endings() {
    let content = create_test_cnv().replace('\n', "\r\n");
    let cast = create_test_parser().parse_str(&content, "test.cnv");

    assert!(cast.valid);
    assert_eq!(cast.records.as_ref().unwrap().height(), 3);
}

#[test]
fn test_parsing_is_deterministic() {
    let parser = create_test_parser();
    let content = create_test_cnv();

    let first = parser.parse_str(&content, "test.cnv");
    let second = parser.parse_str(&content, "test.cnv");

    assert_eq!(first.valid, second.valid);
    assert_eq!(first.channels, second.channels);
    assert_eq!(first.records, second.records);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn test_summary_line_format() {
    let cast = create_test_parser().parse_str(&create_test_cnv(), "test.cnv");
    let summary = cast.summary_line();

    let fields: Vec<&str> = summary.split(',').collect();
    assert_eq!(fields[0], "2019-01-05 10:00:00");
    assert_eq!(fields[1], "54.50000");
    assert_eq!(fields[2], "12.25000");
    assert_eq!(fields[3].trim(), "1.00");
    assert_eq!(fields[4].trim(), "3.00");
    assert_eq!(fields[5], "3");
    assert_eq!(fields[6], "1");
    assert_eq!(fields[7], "test.cnv");
    // Trailing separator leaves an empty final field
    assert_eq!(fields[8], "");
}

#[test]
fn test_summary_line_unknowns_print_nan() {
    let content = "\
# name 0 = scan: Scan Count
# file_type = ascii
*END*
";
    let cast = create_test_parser().parse_str(content, "bare.cnv");
    assert!(cast.valid);

    let summary = cast.summary_line();
    let fields: Vec<&str> = summary.split(',').collect();
    assert_eq!(fields[0], "NaN");
    assert_eq!(fields[1], "NaN");
    assert_eq!(fields[2], "NaN");
    assert_eq!(fields[3], "NaN");
    assert_eq!(fields[5], "0");
    assert_eq!(fields[6], "0");
}

#[test]
fn test_summary_header_line_matches_field_count() {
    let cast = create_test_parser().parse_str(&create_test_cnv(), "test.cnv");

    let header_fields = crate::CnvCast::summary_header_line().matches(',').count();
    let line_fields = cast.summary_line().matches(',').count();
    assert_eq!(header_fields, line_fields);
}

/// Stub computer that emits one field per sensor pair
struct StubComputer;

impl SeawaterComputer for StubComputer {
    fn compute(&self, input: &SeawaterInput<'_>) -> Result<DerivedTable> {
        Ok(DerivedTable {
            fields: vec![DerivedField {
                name: format!("SA{}", input.sensor_pair),
                description: "absolute salinity".to_string(),
                unit: "g/kg".to_string(),
                values: input.pressure.to_vec(),
            }],
        })
    }
}

/// Computer that always fails, for the downgrade path
struct FailingComputer;

impl SeawaterComputer for FailingComputer {
    fn compute(&self, _input: &SeawaterInput<'_>) -> Result<DerivedTable> {
        Err(Error::derived_computation("library rejected the input"))
    }
}

#[test]
fn test_derived_computation_for_complete_pair() {
    let parser = CnvParser::new(Arc::new(create_test_registry()))
        .with_computer(Arc::new(StubComputer));
    let cast = parser.parse_str(&create_test_cnv(), "test.cnv");

    assert!(cast.valid);
    let derived = cast.derived.as_ref().unwrap();

    // Only pair 0 is complete in the fixture
    assert!(derived.field("SA0").is_some());
    assert!(derived.field("SA1").is_none());
    assert_eq!(derived.field("SA0").unwrap().values, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_derived_failure_is_warning_not_invalid() {
    let parser = CnvParser::new(Arc::new(create_test_registry()))
        .with_computer(Arc::new(FailingComputer));
    let cast = parser.parse_str(&create_test_cnv(), "test.cnv");

    assert!(cast.valid);
    assert!(cast.derived.is_none());
    assert_eq!(cast.diagnostics.warnings_for(Component::Derived).count(), 1);
}

#[test]
fn test_no_computer_means_no_derived_fields() {
    let cast = create_test_parser().parse_str(&create_test_cnv(), "test.cnv");
    assert!(cast.derived.is_none());
}
