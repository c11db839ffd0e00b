//! IOW vendor metadata parsing
//!
//! IOW casts embed cruise/station metadata as ad-hoc `key= value` lines in
//! the same header block. Each marker is extracted independently: a failure
//! on one line downgrades that field to absent (with a diagnostic) and never
//! prevents extraction of the others.
//!
//! The dialect has two quirks handled here: dates use German month
//! abbreviations with a two-digit year pivot, and positions encode the
//! hemisphere as letters whose sign is applied to the decoded degrees.

use chrono::{DateTime, NaiveDateTime, Utc};

use super::diagnostics::{Component, ParseDiagnostics};
use crate::app::models::{IowMetadata, Position};
use crate::constants::{
    IOW_DATETIME_FORMAT, TWO_DIGIT_YEAR_PIVOT, iow_markers, month_number,
};

impl IowMetadata {
    /// Extract IOW metadata from the raw header text.
    ///
    /// Lines are recognized by substring markers; unknown lines are skipped.
    pub fn parse(header_text: &str, diagnostics: &mut ParseDiagnostics) -> Self {
        let mut iow = IowMetadata::default();

        for line in header_text.lines() {
            if line.contains(iow_markers::START_TIME) {
                match parse_start_time(line) {
                    Ok(start_time) => iow.start_time = Some(start_time),
                    Err(reason) => diagnostics.warn(
                        Component::VendorMetadata,
                        format!("Startzeit: {} in '{}'", reason, line.trim()),
                    ),
                }
            } else if line.contains(iow_markers::CRUISE) {
                iow.cruise_id = value_without_spaces(line);
            } else if line.contains(iow_markers::STATION) {
                iow.station = trimmed_value(line);
            } else if line.contains(iow_markers::MISSION) {
                iow.mission_id = value_without_spaces(line);
            } else if line.contains(iow_markers::ECHO_DEPTHS) {
                iow.echo_depths = parse_echo_depths(line, diagnostics);
            } else if line.contains(iow_markers::SERIES) && line.contains(iow_markers::OPERATOR) {
                let (series_id, operator) = parse_series_and_operator(line, diagnostics);
                iow.series_id = series_id;
                iow.operator = operator;
            } else if line.contains(iow_markers::POSITION) {
                iow.position = parse_position(line, diagnostics);
            }
        }

        iow
    }
}

/// Value after the first `=`, trimmed
fn trimmed_value(line: &str) -> Option<String> {
    line.split_once('=').map(|(_, value)| value.trim().to_string())
}

/// Value after the first `=` with all whitespace removed
fn value_without_spaces(line: &str) -> Option<String> {
    line.split_once('=')
        .map(|(_, value)| value.chars().filter(|c| !c.is_whitespace()).collect())
}

/// Map a two-digit year onto its century: below the pivot is 20xx,
/// at or above it 19xx. Four-digit years pass through unchanged.
pub(crate) fn expand_two_digit_year(year: i32, digits: usize) -> i32 {
    if digits == 2 {
        if year < TWO_DIGIT_YEAR_PIVOT {
            2000 + year
        } else {
            1900 + year
        }
    } else {
        year
    }
}

/// Parse a `** Startzeit= 13:13:15 25-Sep-07` line (optionally with a
/// `utc`/`UTC` token) into a UTC timestamp.
pub(crate) fn parse_start_time(line: &str) -> Result<DateTime<Utc>, String> {
    let line = line.replace("UTC", "").replace("utc", "");
    let (_, value) = line
        .split_once('=')
        .ok_or_else(|| "no '=' separator".to_string())?;

    let mut tokens = value.split_whitespace();
    let time = tokens.next().ok_or_else(|| "missing time token".to_string())?;
    let date = tokens.next().ok_or_else(|| "missing date token".to_string())?;

    let mut date_parts = date.split('-');
    let day = date_parts
        .next()
        .and_then(|d| d.parse::<u32>().ok())
        .ok_or_else(|| "bad day".to_string())?;
    let month_name = date_parts.next().ok_or_else(|| "bad month".to_string())?;
    let year_str = date_parts.next().ok_or_else(|| "bad year".to_string())?;

    let month =
        month_number(month_name).ok_or_else(|| format!("unknown month '{}'", month_name))?;
    let year = year_str
        .parse::<i32>()
        .map_err(|_| format!("bad year '{}'", year_str))?;
    let year = expand_two_digit_year(year, year_str.len());

    // Reassemble as ISO date + time; chrono validates the calendar fields
    let combined = format!("{:04}-{:02}-{:02}{}", year, month, day, time);
    NaiveDateTime::parse_from_str(&combined, IOW_DATETIME_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|e| format!("'{}' is not a valid timestamp ({})", combined, e))
}

/// Parse an `** Echolote= 24m 23m` line.
///
/// The two depths are parsed independently: one failing is recorded as
/// absent without aborting the other.
fn parse_echo_depths(
    line: &str,
    diagnostics: &mut ParseDiagnostics,
) -> (Option<f64>, Option<f64>) {
    let Some((_, value)) = line.split_once('=') else {
        diagnostics.warn(
            Component::VendorMetadata,
            format!("Echolote line has no '=': '{}'", line.trim()),
        );
        return (None, None);
    };

    let mut segments = value.split('m');
    let mut depth = |segment: Option<&str>, which: &str| -> Option<f64> {
        match segment.map(str::trim).map(str::parse::<f64>) {
            Some(Ok(parsed)) => Some(parsed),
            _ => {
                diagnostics.warn(
                    Component::VendorMetadata,
                    format!("Echolote: could not parse {} depth in '{}'", which, line.trim()),
                );
                None
            }
        }
    };

    let first = depth(segments.next(), "first");
    let second = depth(segments.next(), "second");
    (first, second)
}

/// Parse the combined `SerieNr`/`Operator` line; the series number is the
/// fourth whitespace token and the operator the sixth.
fn parse_series_and_operator(
    line: &str,
    diagnostics: &mut ParseDiagnostics,
) -> (Option<String>, Option<String>) {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let series_id = tokens.get(3).map(|s| s.to_string());
    if series_id.is_none() {
        diagnostics.warn(
            Component::VendorMetadata,
            format!("SerieNr: too few tokens in '{}'", line.trim()),
        );
    }

    let operator = tokens.get(5).map(|s| s.to_string());
    if operator.is_none() {
        diagnostics.warn(
            Component::VendorMetadata,
            format!("Operator: too few tokens in '{}'", line.trim()),
        );
    }

    (series_id, operator)
}

/// Decode a `** GPS_Posn= 54 30.00 N 12 15.00 E` line into signed decimal
/// degrees.
///
/// Hemisphere letters determine the signs (N=+1, S=-1, E=+1, W=-1) and are
/// stripped before the degree/minute pairs are read. Any failure in the
/// pipeline yields [`Position::Unknown`] for both coordinates, never zero.
fn parse_position(line: &str, diagnostics: &mut ParseDiagnostics) -> Position {
    match decode_position(line) {
        Ok(position) => position,
        Err(reason) => {
            diagnostics.warn(
                Component::VendorMetadata,
                format!(
                    "GPS_Posn: {} in '{}', position set to unknown",
                    reason,
                    line.trim()
                ),
            );
            Position::Unknown
        }
    }
}

pub(crate) fn decode_position(line: &str) -> Result<Position, String> {
    let (_, value) = line
        .split_once('=')
        .ok_or_else(|| "no '=' separator".to_string())?;

    let lat_sign = if value.contains('N') {
        1.0
    } else if value.contains('S') {
        -1.0
    } else {
        return Err("no N/S hemisphere letter".to_string());
    };

    let lon_sign = if value.contains('E') {
        1.0
    } else if value.contains('W') {
        -1.0
    } else {
        return Err("no E/W hemisphere letter".to_string());
    };

    let stripped: String = value
        .chars()
        .filter(|c| !matches!(c, 'N' | 'S' | 'E' | 'W'))
        .collect();
    let tokens: Vec<&str> = stripped.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(format!("expected 4 numeric tokens, found {}", tokens.len()));
    }

    let mut numbers = [0.0f64; 4];
    for (slot, token) in numbers.iter_mut().zip(tokens.iter()) {
        *slot = token
            .parse::<f64>()
            .map_err(|_| format!("bad numeric token '{}'", token))?;
    }

    let latitude = lat_sign * (numbers[0] + numbers[1] / 60.0);
    let longitude = lon_sign * (numbers[2] + numbers[3] / 60.0);

    Ok(Position::Known {
        latitude,
        longitude,
    })
}
