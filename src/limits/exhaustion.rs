//! Reasons a verification run stopped without a verdict.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Why a run ended in `ResourceExhausted`.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Exhaustion {
    #[error("explored configuration limit ({limit}) reached")]
    ConfigurationLimit { limit: usize },

    #[error("step limit ({limit}) reached before the machine halted")]
    StepLimit { limit: usize },

    #[error("timeout ({timeout:?}) exceeded (elapsed: {elapsed:?})")]
    Timeout { timeout: Duration, elapsed: Duration },

    #[error("verification cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_limit() {
        assert_eq!(
            Exhaustion::ConfigurationLimit { limit: 5 }.to_string(),
            "explored configuration limit (5) reached"
        );
        assert_eq!(
            Exhaustion::StepLimit { limit: 0 }.to_string(),
            "step limit (0) reached before the machine halted"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Exhaustion::StepLimit { limit: 7 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "step_limit", "limit": 7}));

        let json = serde_json::to_value(Exhaustion::Cancelled).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "cancelled"}));
    }
}
