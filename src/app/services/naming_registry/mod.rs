//! Standardized channel naming registry
//!
//! Loads the ordered naming rules (built-in or from a user-supplied YAML
//! file) and resolves raw channel names against them. Rule order is the
//! priority order: earlier rules claim channels first, and a claimed channel
//! is never reassigned.

pub mod loader;
pub mod resolver;

pub use loader::{NamingRegistry, NamingRule};
pub use resolver::resolve;
