//! Per-machine configuration.

use serde::{Deserialize, Serialize};

/// Default number of history records a machine keeps.
pub const DEFAULT_HISTORY_LIMIT: usize = 128;

/// How `reset_to` and `restore` treat the requested state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResetPolicy {
    /// The state must have at least one configured outgoing edge.
    #[default]
    Strict,

    /// Any value is accepted.
    Lenient,
}

/// Settings fixed when a machine is constructed.
///
/// # Example
///
/// ```rust
/// use turnkey::machine::{MachineConfig, ResetPolicy};
///
/// let config = MachineConfig::default()
///     .reset_policy(ResetPolicy::Lenient)
///     .history_limit(Some(16));
///
/// assert_eq!(config.reset_policy, ResetPolicy::Lenient);
/// assert_eq!(config.history_limit, Some(16));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub reset_policy: ResetPolicy,

    /// Maximum retained history records; `None` keeps everything and
    /// `Some(0)` records nothing.
    pub history_limit: Option<usize>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            reset_policy: ResetPolicy::Strict,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl MachineConfig {
    pub fn reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    pub fn history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict_and_bounded() {
        let config = MachineConfig::default();
        assert_eq!(config.reset_policy, ResetPolicy::Strict);
        assert_eq!(config.history_limit, Some(DEFAULT_HISTORY_LIMIT));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: MachineConfig = serde_json::from_str(r#"{"reset_policy":"Lenient"}"#).unwrap();
        assert_eq!(config.reset_policy, ResetPolicy::Lenient);
        assert_eq!(config.history_limit, Some(DEFAULT_HISTORY_LIMIT));

        let config: MachineConfig = serde_json::from_str(r#"{"history_limit":null}"#).unwrap();
        assert_eq!(config.reset_policy, ResetPolicy::Strict);
        assert_eq!(config.history_limit, None);
    }
}
