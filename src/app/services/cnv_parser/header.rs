//! CNV header extraction and structured field parsing
//!
//! The header is everything up to and including the `*END*` sentinel line.
//! Within it, three line shapes carry structured metadata: the acquisition
//! timestamp, per-channel declarations, and the data format identifier.
//! Everything else is vendor metadata or free-form comments and is ignored
//! here.

use chrono::NaiveDateTime;
use tracing::debug;

use super::diagnostics::{Component, ParseDiagnostics};
use crate::app::models::{Channel, HeaderInfo};
use crate::constants::{
    CHANNEL_MARKER, DUPLICATE_NAME_SEPARATOR, FILE_TYPE_MARKER, HEADER_END_MARKER,
    HEADER_LINE_CEILING, UPLOAD_TIME_FORMATS, UPLOAD_TIME_MARKER,
};

/// Raw header block plus the number of input lines it consumed,
/// so the data-block parser can resume at the right offset.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHeader {
    /// Header text with `\n` line endings, sentinel line included
    pub text: String,

    /// Number of input lines consumed (sentinel line included)
    pub lines_consumed: usize,
}

impl RawHeader {
    /// Whether header extraction gave up (line ceiling exceeded)
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Accumulate input lines until the `*END*` sentinel, inclusive.
///
/// If the sentinel is not found within [`HEADER_LINE_CEILING`] lines the
/// header is returned empty: the caller then finds zero channels and marks
/// the file invalid, instead of this function failing outright. A short file
/// without the sentinel keeps whatever was accumulated, matching the
/// tolerant behavior expected for partial casts.
pub fn extract_header(lines: &[&str]) -> RawHeader {
    let mut text = String::new();
    let mut lines_consumed = 0;

    for line in lines {
        lines_consumed += 1;
        text.push_str(line);
        text.push('\n');

        if line.contains(HEADER_END_MARKER) {
            return RawHeader {
                text,
                lines_consumed,
            };
        }

        if lines_consumed > HEADER_LINE_CEILING {
            debug!(
                "No {} sentinel within {} lines, treating header as empty",
                HEADER_END_MARKER, HEADER_LINE_CEILING
            );
            return RawHeader {
                text: String::new(),
                lines_consumed,
            };
        }
    }

    RawHeader {
        text,
        lines_consumed,
    }
}

impl HeaderInfo {
    /// Parse the structured header fields out of the raw header text.
    ///
    /// Line order is irrelevant; unrecognized lines are skipped. Field-level
    /// failures (a bad timestamp, an unparseable channel index) are recorded
    /// as diagnostics and never abort the remaining lines.
    pub fn parse(header_text: &str, diagnostics: &mut ParseDiagnostics) -> Self {
        let mut info = HeaderInfo::default();

        for line in header_text.lines() {
            if line.contains(UPLOAD_TIME_MARKER) {
                parse_upload_time(line, &mut info, diagnostics);
            } else if line.contains(CHANNEL_MARKER) {
                parse_channel_declaration(line, &mut info.channels, diagnostics);
            } else if line.contains(FILE_TYPE_MARKER) {
                if let Some((_, value)) = line.split_once('=') {
                    info.file_type = Some(value.trim().to_string());
                }
            }
        }

        debug!(
            "Parsed header: {} channels, file_type={:?}",
            info.channels.len(),
            info.file_type
        );
        info
    }
}

/// Parse the `System UpLoad Time = Jan 05 2019 10:00:00` line.
///
/// A parse failure leaves the timestamp unset and records a warning.
fn parse_upload_time(line: &str, info: &mut HeaderInfo, diagnostics: &mut ParseDiagnostics) {
    let Some((_, value)) = line.split_once('=') else {
        diagnostics.warn(
            Component::Header,
            format!("Upload time line has no '=': '{}'", line.trim()),
        );
        return;
    };

    let value = value.trim();
    for format in UPLOAD_TIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            info.timestamp = Some(datetime.and_utc());
            return;
        }
    }

    diagnostics.warn(
        Component::Header,
        format!("Could not decode upload time '{}'", value),
    );
}

/// Parse a `# name <index> = <raw_name>: <long_name> [<unit>]` declaration.
///
/// Colliding raw names are disambiguated by appending `@<position>` where
/// position is the index (in declaration order) of the channel that already
/// carries the name; the check is repeated against the suffixed name, which
/// guarantees uniqueness.
fn parse_channel_declaration(
    line: &str,
    channels: &mut Vec<Channel>,
    diagnostics: &mut ParseDiagnostics,
) {
    let Some((left, right)) = line.split_once('=') else {
        diagnostics.warn(
            Component::Header,
            format!("Channel declaration has no '=': '{}'", line.trim()),
        );
        return;
    };

    // The channel index is whatever trails the "name" keyword on the left
    let index = left
        .rsplit("name")
        .next()
        .map(str::trim)
        .and_then(|s| s.parse::<usize>().ok());
    let Some(index) = index else {
        diagnostics.warn(
            Component::Header,
            format!("Channel declaration has no index: '{}'", line.trim()),
        );
        return;
    };

    let rest = right.trim();
    let (raw_name, long_name, unit) = match rest.split_once(": ") {
        Some((name, description)) => {
            let description = description.trim_end();
            // The bracketed part of the description, if any, is the unit
            let unit = description
                .split_once('[')
                .map(|(_, after)| match after.split_once(']') {
                    Some((inside, _)) => inside.to_string(),
                    None => after.to_string(),
                });
            (name.to_string(), Some(description.to_string()), unit)
        }
        None => (rest.to_string(), None, None),
    };

    let mut raw_name = raw_name;
    for (position, existing) in channels.iter().enumerate() {
        if existing.raw_name == raw_name {
            raw_name = format!("{}{}{}", raw_name, DUPLICATE_NAME_SEPARATOR, position);
        }
    }

    channels.push(Channel::new(index, raw_name, long_name, unit));
}
