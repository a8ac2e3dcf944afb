//! Wire shape and validation of PDA definitions.

use crate::core::{Interner, StateId, Symbol};
use crate::definition::checks::{require_states, require_symbols, Checks};
use crate::definition::error::{Alphabet, ValidationError};
use crate::machine::{Pda, PdaMove};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Symbols pushed in place of the popped stack top.
///
/// Either an explicit list or a string whose characters are the symbols.
/// The first symbol ends up on top; an empty replacement is a pure pop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Replacement {
    Symbols(Vec<Symbol>),
    Text(String),
}

impl Replacement {
    pub fn symbols(&self) -> Vec<Symbol> {
        match self {
            Self::Symbols(symbols) => symbols.clone(),
            Self::Text(text) => text.chars().map(|c| Symbol::new(c.to_string())).collect(),
        }
    }
}

/// One alternative of a PDA rule: `[next_state, replacement]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveSpec(pub StateId, pub Replacement);

/// Rules keyed by source state, then input symbol (`""` for epsilon), then
/// required stack top.
pub type PdaTransitions = BTreeMap<StateId, BTreeMap<Symbol, BTreeMap<Symbol, Vec<MoveSpec>>>>;

/// Raw PDA definition. Acceptance is by final state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PdaDefinition {
    pub states: BTreeSet<StateId>,
    #[serde(alias = "input_alphabet")]
    pub input_symbols: BTreeSet<Symbol>,
    #[serde(alias = "stack_alphabet")]
    pub stack_symbols: BTreeSet<Symbol>,
    pub transitions: PdaTransitions,
    pub initial_state: StateId,
    pub initial_stack_symbol: Symbol,
    pub final_states: BTreeSet<StateId>,
}

impl PdaDefinition {
    pub fn build(&self) -> Result<Pda, ValidationError> {
        require_states(&self.states)?;
        require_symbols("input_symbols", &self.input_symbols)?;
        require_symbols("stack_symbols", &self.stack_symbols)?;

        let mut checks = Checks::new();
        let space = checks.state_space(&self.states, &self.initial_state, &self.final_states);
        let input = Interner::from_names(self.input_symbols.iter());
        let stack = Interner::from_names(self.stack_symbols.iter());
        let initial_stack = checks
            .symbol(&stack, Alphabet::Stack, &self.initial_stack_symbol, || {
                "initial_stack_symbol".to_string()
            })
            .unwrap_or(0);

        let mut rules: HashMap<_, Vec<PdaMove>> = HashMap::new();
        for (from, by_input) in &self.transitions {
            let source = checks.state(space.names(), from, || format!("transitions source '{from}'"));
            for (read, by_top) in by_input {
                let sym = if read.is_empty() {
                    Some(None)
                } else {
                    checks
                        .symbol(&input, Alphabet::Input, read, || {
                            format!("transition ({from}, {read})")
                        })
                        .map(Some)
                };
                for (top, moves) in by_top {
                    let location = || format!("transition ({from}, {}, {top})", display_input(read));
                    let top_ix = checks.symbol(&stack, Alphabet::Stack, top, location);
                    for MoveSpec(to, replacement) in moves {
                        let target = checks.state(space.names(), to, location);
                        // Resolve every pushed symbol before short-circuiting so
                        // each undeclared one is reported.
                        let pushed: Option<Vec<u32>> = replacement
                            .symbols()
                            .iter()
                            .map(|s| checks.symbol(&stack, Alphabet::Stack, s, location))
                            .collect::<Vec<_>>()
                            .into_iter()
                            .collect();
                        if let (Some(source), Some(sym), Some(top_ix), Some(target), Some(pushed)) =
                            (source, sym, top_ix, target, pushed)
                        {
                            let alternatives = rules.entry((source, sym, top_ix)).or_default();
                            let mv = PdaMove {
                                target,
                                replacement: pushed,
                            };
                            if !alternatives.contains(&mv) {
                                alternatives.push(mv);
                            }
                        }
                    }
                }
            }
        }

        checks.finish()?;
        Ok(Pda {
            space,
            input,
            stack,
            initial_stack,
            rules,
        })
    }
}

fn display_input(read: &Symbol) -> &str {
    if read.is_empty() {
        "ε"
    } else {
        read.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::error::SemanticError;
    use serde_json::json;

    fn definition() -> PdaDefinition {
        serde_json::from_value(json!({
            "states": ["q0", "q1", "q2"],
            "input_symbols": ["0", "1"],
            "stack_symbols": ["0", "1", "Z"],
            "transitions": {
                "q0": {"0": {"Z": [["q0", ["0", "Z"]]]}}
            },
            "initial_state": "q0",
            "initial_stack_symbol": "Z",
            "final_states": ["q2"]
        }))
        .unwrap()
    }

    #[test]
    fn sample_definition_builds() {
        let pda = definition().build().unwrap();
        assert_eq!(pda.transitions().count(), 1);
        assert_eq!(pda.initial_stack_symbol().as_str(), "Z");
    }

    #[test]
    fn replacement_accepts_list_or_string() {
        let list: Replacement = serde_json::from_value(json!(["a", "Z"])).unwrap();
        let text: Replacement = serde_json::from_value(json!("aZ")).unwrap();
        let pop: Replacement = serde_json::from_value(json!("")).unwrap();

        assert_eq!(list.symbols(), text.symbols());
        assert!(pop.symbols().is_empty());
    }

    #[test]
    fn initial_stack_symbol_must_be_declared() {
        let mut def = definition();
        def.initial_stack_symbol = Symbol::from("X");

        let error = def.build().unwrap_err();
        assert!(matches!(
            error.semantic_errors(),
            [SemanticError::UndeclaredSymbol { alphabet: Alphabet::Stack, .. }]
        ));
    }

    #[test]
    fn undeclared_pushed_symbol_is_reported() {
        let def: PdaDefinition = serde_json::from_value(json!({
            "states": ["q0"],
            "input_symbols": ["a"],
            "stack_symbols": ["Z"],
            "transitions": {"q0": {"": {"Z": [["q0", ["Y", "Z"]]]}, "b": {"W": [["q3", []]]}}},
            "initial_state": "q0",
            "initial_stack_symbol": "Z",
            "final_states": []
        }))
        .unwrap();

        let error = def.build().unwrap_err();
        // Y (pushed), b (input), W (stack top), q3 (target)
        assert_eq!(error.semantic_errors().len(), 4);
    }

    #[test]
    fn epsilon_key_is_not_looked_up_in_the_input_alphabet() {
        let def: PdaDefinition = serde_json::from_value(json!({
            "states": ["q0"],
            "input_symbols": ["a"],
            "stack_symbols": ["Z"],
            "transitions": {"q0": {"": {"Z": [["q0", "Z"]]}}},
            "initial_state": "q0",
            "initial_stack_symbol": "Z",
            "final_states": ["q0"]
        }))
        .unwrap();

        assert!(def.build().is_ok());
    }

    #[test]
    fn missing_field_fails_to_parse() {
        let parsed = serde_json::from_value::<PdaDefinition>(json!({
            "states": ["q0"],
            "input_symbols": ["a"],
            "transitions": {},
            "initial_state": "q0",
            "initial_stack_symbol": "Z",
            "final_states": []
        }));
        assert!(parsed.is_err());
    }
}
