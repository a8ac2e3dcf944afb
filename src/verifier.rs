//! Verification facade.
//!
//! Dispatches a word to the engine matching the automaton's variant and
//! applies the resource limits the caller configured, or the defaults.

use crate::core::{VerificationResult, Word};
use crate::definition::Formalism;
use crate::limits::{Exhaustion, Limits};
use crate::machine::Automaton;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Runs verification calls under a fixed set of [`Limits`].
///
/// A `Verifier` holds no per-call state, so one instance can serve any
/// number of concurrent calls.
///
/// # Example
///
/// ```rust
/// use automata_core::{validate, Formalism, LimitsBuilder, Verifier, Word};
/// use serde_json::json;
///
/// let tm = validate(&json!({
///     "states": ["q0"],
///     "input_symbols": ["0"],
///     "tape_symbols": ["0", "B"],
///     "transitions": {"q0": {"0": ["q0", "0", "R"], "B": ["q0", "B", "R"]}},
///     "initial_state": "q0",
///     "blank_symbol": "B",
///     "final_states": []
/// }), Formalism::Tm).unwrap();
///
/// let verifier = Verifier::new(LimitsBuilder::new().max_steps(25).build());
/// assert!(verifier.verify(&tm, &Word::from("00")).is_exhausted());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Verifier {
    limits: Limits,
}

impl Verifier {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Verify `word` with the engine selected by the automaton's variant.
    pub fn verify(&self, automaton: &Automaton, word: &Word) -> VerificationResult {
        match automaton {
            Automaton::Dfa(dfa) => dfa.verify(word),
            Automaton::Pda(pda) => pda.verify_within(word, &self.limits),
            Automaton::Tm(tm) => tm.verify_within(word, &self.limits),
        }
    }

    /// Verify `word` against an automaton the caller believes to be of
    /// `formalism`.
    ///
    /// The automaton's own variant always decides the engine; a mismatching
    /// tag is logged and otherwise ignored.
    pub fn dispatch(
        &self,
        formalism: Formalism,
        automaton: &Automaton,
        word: &Word,
    ) -> VerificationResult {
        if formalism != automaton.formalism() {
            warn!(
                "dispatch: caller asked for {} but automaton is a {}",
                formalism,
                automaton.formalism()
            );
        }
        self.verify(automaton, word)
    }
}

/// Verify with default limits.
pub fn dispatch(formalism: Formalism, automaton: &Automaton, word: &Word) -> VerificationResult {
    Verifier::default().dispatch(formalism, automaton, word)
}

/// Why a word was not accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The automaton definitely does not accept the word.
    Rejected,

    /// The run stopped before reaching a verdict.
    ResourceExhausted { reason: Exhaustion, message: String },
}

/// Wire form of a verification result: `{"accepted": bool}` plus an
/// optional diagnostic when the word was not accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<Diagnostic>,
}

impl From<&VerificationResult> for VerifyResponse {
    fn from(result: &VerificationResult) -> Self {
        let diagnostic = match result {
            VerificationResult::Accepted => None,
            VerificationResult::Rejected => Some(Diagnostic::Rejected),
            VerificationResult::ResourceExhausted(reason) => Some(Diagnostic::ResourceExhausted {
                reason: reason.clone(),
                message: reason.to_string(),
            }),
        };
        Self {
            accepted: result.is_accepted(),
            diagnostic,
        }
    }
}

impl From<VerificationResult> for VerifyResponse {
    fn from(result: VerificationResult) -> Self {
        Self::from(&result)
    }
}
