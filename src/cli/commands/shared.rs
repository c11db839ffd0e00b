//! Shared components for CLI commands
//!
//! Logging setup, registry loading and parser construction used by both
//! commands.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::app::services::naming_registry::NamingRegistry;
use crate::config::{ParserConfig, TextEncoding};
use crate::{CnvParser, Result};

/// Set up structured logging on stderr at the requested level
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cnv_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the naming registry from a user-supplied file, or the built-in set
pub fn load_registry(rules: Option<&Path>) -> Result<NamingRegistry> {
    match rules {
        Some(path) => {
            debug!("Loading naming rules from {}", path.display());
            NamingRegistry::from_file(path)
        }
        None => Ok(NamingRegistry::builtin()),
    }
}

/// Build a parser from the shared CLI options
pub fn build_parser(
    rules: Option<&Path>,
    encoding: TextEncoding,
    baltic_override: Option<bool>,
) -> Result<CnvParser> {
    let registry = load_registry(rules)?;
    let config = ParserConfig {
        rules_path: rules.map(|p| p.to_path_buf()),
        encoding,
        baltic_override,
    };
    config.validate()?;

    Ok(CnvParser::new(Arc::new(registry)).with_config(config))
}
