//! Naming-rule file loading
//!
//! Rules live in a YAML document with a single `names` list. Each entry maps
//! one standardized identifier to the ordered raw-name candidates that
//! instruments have used for it over the years. The file order of both the
//! rules and their candidates is significant and preserved.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::{Error, Result};

/// One standardized-name rule from the rule file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamingRule {
    /// Standardized identifier this rule assigns (e.g. `T0`, `p`)
    pub name: String,

    /// Human-readable description of the quantity
    #[serde(default)]
    pub description: String,

    /// Raw-name candidates in priority order
    #[serde(default)]
    pub channels: Vec<String>,
}

/// Top-level shape of the rule file
#[derive(Debug, Deserialize)]
struct RuleDocument {
    names: Vec<NamingRule>,
}

/// Ordered set of naming rules
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamingRegistry {
    rules: Vec<NamingRule>,
}

impl NamingRegistry {
    /// The rule set shipped with the crate
    pub fn builtin() -> Self {
        let yaml = include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/rules/standard_names.yaml"
        ));
        // The embedded file is validated by the test suite, so a parse
        // failure here is a build defect; fall back to an empty registry
        // rather than panicking in library code, but say so loudly since
        // every channel would keep its placeholder.
        match Self::from_str(yaml) {
            Ok(registry) => registry,
            Err(error) => {
                warn!("Built-in naming rules failed to parse ({}), no channels will resolve", error);
                Self::default()
            }
        }
    }

    /// Load rules from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::rule_file(
                path.display().to_string(),
                format!("Failed to read rule file: {}", e),
                None,
            )
        })?;

        Self::from_str(&contents).map_err(|e| match e {
            Error::RuleFile {
                message, source, ..
            } => Error::rule_file(path.display().to_string(), message, source),
            other => other,
        })
    }

    /// Parse rules from YAML text
    pub fn from_str(yaml: &str) -> Result<Self> {
        let document: RuleDocument = serde_yaml::from_str(yaml).map_err(|e| {
            Error::rule_file("<inline>", "Failed to parse rule file", Some(e))
        })?;

        debug!("Loaded {} naming rules", document.names.len());
        Ok(Self {
            rules: document.names,
        })
    }

    /// Rules in file (priority) order
    pub fn rules(&self) -> &[NamingRule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
