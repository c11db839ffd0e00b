//! Tests for header extraction and structured field parsing

use chrono::{Datelike, Timelike};

use crate::app::models::HeaderInfo;
use crate::app::services::cnv_parser::diagnostics::{Component, ParseDiagnostics};
use crate::app::services::cnv_parser::header::extract_header;

use super::create_test_cnv;

#[test]
fn test_extract_header_stops_at_sentinel() {
    let content = create_test_cnv();
    let lines: Vec<&str> = content.split('\n').collect();

    let raw = extract_header(&lines);
    assert!(raw.text.ends_with("*END*\n"));
    assert_eq!(raw.lines_consumed, 14);
    assert!(!raw.is_empty());
}

#[test]
fn test_extract_header_keeps_text_when_sentinel_missing() {
    let lines = vec!["* Sea-Bird SBE 9 Data File:", "# name 0 = prDM: Pressure"];
    let raw = extract_header(&lines);

    assert_eq!(raw.lines_consumed, 2);
    assert!(raw.text.contains("prDM"));
}

#[test]
fn test_extract_header_gives_up_past_ceiling() {
    let line = "* comment line";
    let lines: Vec<&str> = std::iter::repeat(line).take(10_002).collect();

    let raw = extract_header(&lines);
    assert!(raw.is_empty());
    assert!(raw.lines_consumed > 10_000);
}

#[test]
fn test_upload_time_parsing() {
    let mut diagnostics = ParseDiagnostics::new();
    let header = "* System UpLoad Time = Jan 05 2019 10:00:00\n";
    let info = HeaderInfo::parse(header, &mut diagnostics);

    let timestamp = info.timestamp.unwrap();
    assert_eq!(timestamp.year(), 2019);
    assert_eq!(timestamp.month(), 1);
    assert_eq!(timestamp.day(), 5);
    assert_eq!(timestamp.hour(), 10);
    assert!(diagnostics.warnings.is_empty());
}

#[test]
fn test_upload_time_single_digit_day() {
    let mut diagnostics = ParseDiagnostics::new();
    let header = "* System UpLoad Time = Jan  5 2019 10:00:00\n";
    let info = HeaderInfo::parse(header, &mut diagnostics);

    let timestamp = info.timestamp.unwrap();
    assert_eq!(timestamp.day(), 5);
}

#[test]
fn test_malformed_upload_time_is_warning_not_failure() {
    let mut diagnostics = ParseDiagnostics::new();
    let header = "* System UpLoad Time = not a date\n# name 0 = prDM: Pressure [db]\n";
    let info = HeaderInfo::parse(header, &mut diagnostics);

    assert!(info.timestamp.is_none());
    // The channel on the next line still parsed
    assert_eq!(info.channels.len(), 1);
    assert_eq!(diagnostics.warnings_for(Component::Header).count(), 1);
}

#[test]
fn test_channel_declaration_full_form() {
    let mut diagnostics = ParseDiagnostics::new();
    let header = "# name 0 = prDM: Pressure, Digiquartz [db]\n";
    let info = HeaderInfo::parse(header, &mut diagnostics);

    assert_eq!(info.channels.len(), 1);
    let channel = &info.channels[0];
    assert_eq!(channel.index, 0);
    assert_eq!(channel.raw_name, "prDM");
    assert_eq!(channel.long_name.as_deref(), Some("Pressure, Digiquartz [db]"));
    assert_eq!(channel.unit.as_deref(), Some("db"));
    assert_eq!(channel.standardized_id, "i0");
}

#[test]
fn test_channel_declaration_without_description() {
    let mut diagnostics = ParseDiagnostics::new();
    let header = "# name 3 = scan\n";
    let info = HeaderInfo::parse(header, &mut diagnostics);

    assert_eq!(info.channels.len(), 1);
    assert_eq!(info.channels[0].raw_name, "scan");
    assert!(info.channels[0].long_name.is_none());
    assert!(info.channels[0].unit.is_none());
}

#[test]
fn test_channel_declaration_unit_without_closing_bracket() {
    let mut diagnostics = ParseDiagnostics::new();
    let header = "# name 0 = t090C: Temperature [ITS-90, deg C\n";
    let info = HeaderInfo::parse(header, &mut diagnostics);

    assert_eq!(info.channels[0].unit.as_deref(), Some("ITS-90, deg C"));
}

#[test]
fn test_duplicate_raw_names_are_disambiguated() {
    let mut diagnostics = ParseDiagnostics::new();
    let header = "\
# name 0 = t090C: Temperature [deg C]
# name 1 = t090C: Temperature, 2 [deg C]
# name 2 = t090C: Temperature, 3 [deg C]
";
    let info = HeaderInfo::parse(header, &mut diagnostics);

    assert_eq!(info.channels.len(), 3);
    assert_eq!(info.channels[0].raw_name, "t090C");
    assert_eq!(info.channels[1].raw_name, "t090C@0");
    // The suffixed second name collides again at position 1, so the third
    // channel carries both suffixes; what matters is pairwise uniqueness
    assert_eq!(info.channels[2].raw_name, "t090C@0@1");

    // All raw names are unique
    let mut names: Vec<&str> = info.channels.iter().map(|c| c.raw_name.as_str()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 3);
}

#[test]
fn test_channel_declaration_bad_index_is_warning() {
    let mut diagnostics = ParseDiagnostics::new();
    let header = "# name x = prDM: Pressure [db]\n";
    let info = HeaderInfo::parse(header, &mut diagnostics);

    assert!(info.channels.is_empty());
    assert_eq!(diagnostics.warnings_for(Component::Header).count(), 1);
}

#[test]
fn test_file_type_stored_verbatim() {
    let mut diagnostics = ParseDiagnostics::new();
    let header = "# file_type = ascii\n";
    let info = HeaderInfo::parse(header, &mut diagnostics);

    assert_eq!(info.file_type.as_deref(), Some("ascii"));
}
