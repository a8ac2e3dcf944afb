//! Automaton definitions and their validation.
//!
//! A definition is the raw, formalism-specific JSON shape a caller submits.
//! [`validate`] checks it once and produces an immutable [`Automaton`];
//! nothing is re-checked afterwards.
//!
//! Validation has two stages:
//! - Schema: the JSON must deserialize into the definition shape, declare at
//!   least one state and use no empty names.
//! - Semantics: every state and symbol referenced anywhere must be declared.
//!   All dangling references are reported together.
//!
//! # Example
//!
//! ```rust
//! use automata_core::definition::{validate, Formalism};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "states": ["q0", "q1"],
//!     "input_symbols": ["0", "1"],
//!     "transitions": {
//!         "q0": {"0": "q0", "1": "q1"},
//!         "q1": {"0": "q1", "1": "q0"}
//!     },
//!     "initial_state": "q0",
//!     "final_states": ["q0"]
//! });
//!
//! let automaton = validate(&raw, Formalism::Dfa).unwrap();
//! assert_eq!(automaton.formalism(), Formalism::Dfa);
//! ```

pub(crate) mod checks;
pub mod dfa;
pub mod error;
pub mod pda;
pub mod tm;

pub use dfa::DfaDefinition;
pub use error::{Alphabet, SchemaError, SemanticError, ValidationError};
pub use pda::{MoveSpec, PdaDefinition, Replacement};
pub use tm::{TmAction, TmDefinition};

use crate::machine::Automaton;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The three supported automaton formalisms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formalism {
    Dfa,
    Pda,
    Tm,
}

impl Formalism {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dfa => "dfa",
            Self::Pda => "pda",
            Self::Tm => "tm",
        }
    }
}

impl fmt::Display for Formalism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formalism {
    type Err = SchemaError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "dfa" => Ok(Self::Dfa),
            "pda" => Ok(Self::Pda),
            "tm" => Ok(Self::Tm),
            other => Err(SchemaError::UnknownFormalism(other.to_string())),
        }
    }
}

/// A raw definition tagged with its formalism.
///
/// Kept alongside stored automata so they can be returned in the shape they
/// were submitted in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "formalism", content = "definition", rename_all = "lowercase")]
pub enum Definition {
    Dfa(DfaDefinition),
    Pda(PdaDefinition),
    Tm(TmDefinition),
}

impl Definition {
    /// Deserialize `raw` as a definition of `formalism`.
    pub fn parse(raw: &Value, formalism: Formalism) -> Result<Self, ValidationError> {
        let malformed = |err: serde_json::Error| SchemaError::Malformed {
            formalism,
            message: err.to_string(),
        };
        let definition = match formalism {
            Formalism::Dfa => Self::Dfa(DfaDefinition::deserialize(raw).map_err(malformed)?),
            Formalism::Pda => Self::Pda(PdaDefinition::deserialize(raw).map_err(malformed)?),
            Formalism::Tm => Self::Tm(TmDefinition::deserialize(raw).map_err(malformed)?),
        };
        Ok(definition)
    }

    pub fn formalism(&self) -> Formalism {
        match self {
            Self::Dfa(_) => Formalism::Dfa,
            Self::Pda(_) => Formalism::Pda,
            Self::Tm(_) => Formalism::Tm,
        }
    }

    /// Check every invariant and build the automaton.
    pub fn build(&self) -> Result<Automaton, ValidationError> {
        match self {
            Self::Dfa(def) => def.build().map(Automaton::Dfa),
            Self::Pda(def) => def.build().map(Automaton::Pda),
            Self::Tm(def) => def.build().map(Automaton::Tm),
        }
    }

    /// The definition in its submitted JSON shape, without the tag.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Dfa(def) => serde_json::to_value(def),
            Self::Pda(def) => serde_json::to_value(def),
            Self::Tm(def) => serde_json::to_value(def),
        }
    }
}

/// Turn a raw definition into a validated automaton.
pub fn validate(raw: &Value, formalism: Formalism) -> Result<Automaton, ValidationError> {
    Definition::parse(raw, formalism)?.build()
}

/// Like [`validate`], starting from JSON text.
pub fn validate_str(json: &str, formalism: Formalism) -> Result<Automaton, ValidationError> {
    let raw: Value = serde_json::from_str(json).map_err(|err| SchemaError::Malformed {
        formalism,
        message: err.to_string(),
    })?;
    validate(&raw, formalism)
}
