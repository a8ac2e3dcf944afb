//! Construction errors for automaton definitions.

use crate::core::{StateId, Symbol};
use crate::definition::Formalism;
use std::fmt;
use thiserror::Error;

/// Why a definition could not be turned into an automaton.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// The definition is missing a field or has a malformed one.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The definition references undeclared states or symbols. Every
    /// problem found is listed, not just the first.
    #[error("{}", describe(.0))]
    Semantic(Vec<SemanticError>),
}

impl ValidationError {
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self, Self::Semantic(_))
    }

    /// Semantic problems, empty for schema errors.
    pub fn semantic_errors(&self) -> &[SemanticError] {
        match self {
            Self::Semantic(errors) => errors,
            Self::Schema(_) => &[],
        }
    }
}

fn describe(errors: &[SemanticError]) -> String {
    let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!(
        "{} semantic error(s) in definition: {}",
        errors.len(),
        details.join("; ")
    )
}

/// Structural problems detected before any reference is resolved.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchemaError {
    #[error("malformed {formalism} definition: {message}")]
    Malformed { formalism: Formalism, message: String },

    #[error("definition declares no states")]
    NoStates,

    #[error("{field} contains an empty name")]
    EmptyName { field: &'static str },

    #[error("unknown formalism '{0}', expected one of dfa, pda, tm")]
    UnknownFormalism(String),
}

/// Alphabet a symbol was expected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Input,
    Stack,
    Tape,
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Stack => f.write_str("stack"),
            Self::Tape => f.write_str("tape"),
        }
    }
}

/// A dangling reference or alphabet inconsistency.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SemanticError {
    #[error("{location} references undeclared state '{state}'")]
    UndeclaredState { state: StateId, location: String },

    #[error("{location} references '{symbol}', which is not in the {alphabet} alphabet")]
    UndeclaredSymbol {
        symbol: Symbol,
        alphabet: Alphabet,
        location: String,
    },

    #[error("blank symbol '{0}' must not be part of the input alphabet")]
    BlankInInput(Symbol),
}
