//! Automata Core: validation and bounded verification for formal automata
//!
//! The crate accepts JSON definitions of deterministic finite automata,
//! pushdown automata and Turing machines, validates them once into immutable
//! values, and answers whether a word is accepted. Runs that could go on
//! forever are bounded, so every call terminates with one of three outcomes.
//!
//! # Core Concepts
//!
//! - **Definition**: The raw JSON shape for one formalism, checked by [`validate`]
//! - **Automaton**: A validated, immutable machine ready for verification
//! - **Verifier**: Dispatches words to the DFA, PDA or TM engine under [`Limits`]
//! - **VerificationResult**: `Accepted`, `Rejected` or `ResourceExhausted`
//! - **StateGraph**: Nodes and labelled edges for drawing a machine
//! - **AutomatonStore**: In-memory registry serving all of the above by id
//!
//! # Example
//!
//! ```rust
//! use automata_core::{validate, Formalism, Verifier, Word};
//! use serde_json::json;
//!
//! let balanced = validate(&json!({
//!     "states": ["q0", "q1", "q2"],
//!     "input_symbols": ["0", "1"],
//!     "stack_symbols": ["0", "Z"],
//!     "transitions": {
//!         "q0": {"0": {"Z": [["q0", ["0", "Z"]]], "0": [["q0", ["0", "0"]]]},
//!                "1": {"0": [["q1", []]]}},
//!         "q1": {"1": {"0": [["q1", []]]}, "": {"Z": [["q2", ["Z"]]]}}
//!     },
//!     "initial_state": "q0",
//!     "initial_stack_symbol": "Z",
//!     "final_states": ["q2"]
//! }), Formalism::Pda).unwrap();
//!
//! let verifier = Verifier::default();
//! assert!(verifier.verify(&balanced, &Word::from("0011")).is_accepted());
//! assert!(verifier.verify(&balanced, &Word::from("001")).is_rejected());
//! ```

pub mod core;
pub mod definition;
pub mod graph;
pub mod limits;
pub mod machine;
pub mod store;
pub mod verifier;

// Re-export commonly used types
pub use core::{CancelToken, StateId, Symbol, VerificationResult, Word};
pub use definition::{
    validate, validate_str, Definition, Formalism, SchemaError, SemanticError, ValidationError,
};
pub use graph::StateGraph;
pub use limits::{Exhaustion, Limits, LimitsBuilder};
pub use machine::{Automaton, Dfa, Direction, Pda, Tm};
pub use store::{AutomatonId, AutomatonStore, StoreError};
pub use verifier::{dispatch, Diagnostic, Verifier, VerifyResponse};
