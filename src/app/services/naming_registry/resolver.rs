//! Greedy standardized-name resolution
//!
//! Walks the rules in file order; each rule scans its candidates in order
//! and claims the first unclaimed channel whose raw name matches. A rule
//! claims at most one channel, and a claimed channel is never reassigned by
//! a later rule. Channels no rule claims keep their synthetic placeholder.

use tracing::debug;

use crate::app::models::Channel;

use super::loader::NamingRegistry;

/// Assign standardized identifiers to channels in place.
///
/// A candidate matches a channel when the candidate string contains the
/// channel's raw name; the candidate lists are written so the containment
/// also holds for truncated raw names emitted by older acquisition software.
pub fn resolve(registry: &NamingRegistry, channels: &mut [Channel]) {
    let mut claimed = vec![false; channels.len()];

    for rule in registry.rules() {
        'rule: for candidate in &rule.channels {
            for (position, channel) in channels.iter_mut().enumerate() {
                if claimed[position] {
                    continue;
                }
                if candidate.contains(channel.raw_name.as_str()) {
                    debug!(
                        "Rule '{}' claims channel {} ('{}')",
                        rule.name, channel.index, channel.raw_name
                    );
                    channel.standardized_id = rule.name.clone();
                    claimed[position] = true;
                    break 'rule;
                }
            }
        }
    }
}
