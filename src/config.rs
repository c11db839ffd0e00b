//! Parser configuration.
//!
//! Holds the per-parser settings: where the naming rules come from, the
//! declared text encoding of input files, and an optional override of the
//! automatic Baltic Sea classification.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::PathBuf;

use crate::{Error, Result};

/// Declared single-byte text encoding of CNV input files
///
/// Historical casts are almost always Latin-1; UTF-8 is offered for
/// instruments with newer acquisition software.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// ISO 8859-1, the default for historical CNV files
    Latin1,
    /// UTF-8, decoded lossily
    Utf8,
}

impl TextEncoding {
    /// Decode raw file bytes into text.
    ///
    /// Latin-1 maps every byte directly to the code point of the same value,
    /// so decoding never fails; UTF-8 is decoded lossily.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        match self {
            TextEncoding::Latin1 => Cow::Owned(bytes.iter().map(|&b| b as char).collect()),
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes),
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        TextEncoding::Latin1
    }
}

/// Configuration for a [`CnvParser`](crate::CnvParser)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Path to the naming-rule file; `None` uses the built-in rule set
    pub rules_path: Option<PathBuf>,

    /// Declared text encoding of input files
    pub encoding: TextEncoding,

    /// Force the Baltic flag instead of classifying from the parsed position
    pub baltic_override: Option<bool>,
}

impl ParserConfig {
    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(rules_path) = &self.rules_path {
            if !rules_path.exists() {
                return Err(Error::configuration(format!(
                    "Naming-rule file does not exist: {}",
                    rules_path.display()
                )));
            }
        }
        Ok(())
    }
}
