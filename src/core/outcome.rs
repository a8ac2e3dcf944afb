//! The three-way outcome of a verification call.

use crate::limits::Exhaustion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of running a word through an automaton.
///
/// `Rejected` means the automaton definitely does not accept the word.
/// `ResourceExhausted` means the run was cut short by a limit, a timeout or
/// cancellation, so nothing is known about acceptance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum VerificationResult {
    Accepted,
    Rejected,
    ResourceExhausted(Exhaustion),
}

impl VerificationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::ResourceExhausted(_))
    }

    /// Exhaustion reason, if the run did not reach a verdict.
    pub fn exhaustion(&self) -> Option<&Exhaustion> {
        match self {
            Self::ResourceExhausted(reason) => Some(reason),
            _ => None,
        }
    }

    pub(crate) fn from_final(is_final: bool) -> Self {
        if is_final {
            Self::Accepted
        } else {
            Self::Rejected
        }
    }
}

impl From<Exhaustion> for VerificationResult {
    fn from(reason: Exhaustion) -> Self {
        Self::ResourceExhausted(reason)
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => f.write_str("accepted"),
            Self::Rejected => f.write_str("rejected"),
            Self::ResourceExhausted(reason) => write!(f, "resource exhausted: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_variants() {
        assert!(VerificationResult::Accepted.is_accepted());
        assert!(VerificationResult::Rejected.is_rejected());

        let exhausted = VerificationResult::from(Exhaustion::StepLimit { limit: 3 });
        assert!(exhausted.is_exhausted());
        assert!(!exhausted.is_accepted());
        assert_eq!(
            exhausted.exhaustion(),
            Some(&Exhaustion::StepLimit { limit: 3 })
        );
    }

    #[test]
    fn from_final_maps_to_verdict() {
        assert_eq!(VerificationResult::from_final(true), VerificationResult::Accepted);
        assert_eq!(VerificationResult::from_final(false), VerificationResult::Rejected);
    }

    #[test]
    fn display_includes_reason() {
        let result = VerificationResult::ResourceExhausted(Exhaustion::Cancelled);
        assert_eq!(result.to_string(), "resource exhausted: verification cancelled");
    }

    #[test]
    fn result_serializes_with_outcome_tag() {
        let json = serde_json::to_value(VerificationResult::Rejected).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "rejected"}));

        let exhausted = VerificationResult::ResourceExhausted(Exhaustion::ConfigurationLimit {
            limit: 10,
        });
        let json = serde_json::to_string(&exhausted).unwrap();
        let back: VerificationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, exhausted);
    }
}
