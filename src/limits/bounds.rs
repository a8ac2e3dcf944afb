//! Resource ceilings for a verification call.

use crate::core::CancelToken;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default cap on PDA configurations explored in one call.
pub const DEFAULT_MAX_CONFIGURATIONS: usize = 100_000;

/// Default cap on TM transitions taken in one call.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Ceilings applied to the unbounded engines.
///
/// The DFA engine is linear in the word and ignores these. `Limits` can be
/// loaded from configuration; any missing field falls back to its default.
///
/// ```rust
/// use automata_core::Limits;
///
/// let limits: Limits = serde_json::from_str(r#"{"max_steps": 50}"#).unwrap();
/// assert_eq!(limits.max_steps, 50);
/// assert_eq!(limits.max_configurations, automata_core::limits::DEFAULT_MAX_CONFIGURATIONS);
/// assert!(limits.timeout().is_none());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum PDA configurations taken off the worklist.
    pub max_configurations: usize,

    /// Maximum TM transitions.
    pub max_steps: usize,

    /// Wall-clock bound in milliseconds, measured from the start of a call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    #[serde(skip)]
    pub(crate) cancel: Option<CancelToken>,
}

impl Limits {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn cancel_token(&self) -> Option<&CancelToken> {
        self.cancel.as_ref()
    }

    /// Same ceilings with a different step limit.
    pub fn with_max_steps(&self, max_steps: usize) -> Self {
        Self {
            max_steps,
            ..self.clone()
        }
    }

    /// Same ceilings with a different configuration cap.
    pub fn with_max_configurations(&self, max_configurations: usize) -> Self {
        Self {
            max_configurations,
            ..self.clone()
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_configurations: DEFAULT_MAX_CONFIGURATIONS,
            max_steps: DEFAULT_MAX_STEPS,
            timeout_ms: None,
            cancel: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_applied() {
        let limits = Limits::default();
        assert_eq!(limits.max_configurations, DEFAULT_MAX_CONFIGURATIONS);
        assert_eq!(limits.max_steps, DEFAULT_MAX_STEPS);
        assert!(limits.timeout().is_none());
        assert!(limits.cancel_token().is_none());
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let limits: Limits =
            serde_json::from_str(r#"{"max_configurations": 10, "timeout_ms": 250}"#).unwrap();

        assert_eq!(limits.max_configurations, 10);
        assert_eq!(limits.max_steps, DEFAULT_MAX_STEPS);
        assert_eq!(limits.timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn with_helpers_override_one_field() {
        let base = Limits::default();
        let limits = base.with_max_steps(3).with_max_configurations(4);

        assert_eq!(limits.max_steps, 3);
        assert_eq!(limits.max_configurations, 4);
        assert_eq!(base.max_steps, DEFAULT_MAX_STEPS);
    }

    #[test]
    fn cancel_token_is_not_serialized() {
        let json = serde_json::to_value(Limits::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "max_configurations": DEFAULT_MAX_CONFIGURATIONS,
                "max_steps": DEFAULT_MAX_STEPS,
            })
        );
    }
}
