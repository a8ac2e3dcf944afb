//! Wire shape and validation of Turing machine definitions.

use crate::core::{Interner, StateId, Symbol};
use crate::definition::checks::{require_states, require_symbols, Checks};
use crate::definition::error::{Alphabet, SemanticError, ValidationError};
use crate::machine::{Direction, Tm, TmMove};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// `[next_state, write_symbol, direction]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TmAction(pub StateId, pub Symbol, pub Direction);

/// Raw TM definition. The table is deterministic by shape: one action per
/// `(state, symbol)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TmDefinition {
    pub states: BTreeSet<StateId>,
    #[serde(alias = "input_alphabet")]
    pub input_symbols: BTreeSet<Symbol>,
    #[serde(alias = "tape_alphabet")]
    pub tape_symbols: BTreeSet<Symbol>,
    pub transitions: BTreeMap<StateId, BTreeMap<Symbol, TmAction>>,
    pub initial_state: StateId,
    pub blank_symbol: Symbol,
    pub final_states: BTreeSet<StateId>,
}

impl TmDefinition {
    pub fn build(&self) -> Result<Tm, ValidationError> {
        require_states(&self.states)?;
        require_symbols("input_symbols", &self.input_symbols)?;
        require_symbols("tape_symbols", &self.tape_symbols)?;

        let mut checks = Checks::new();
        let space = checks.state_space(&self.states, &self.initial_state, &self.final_states);
        let tape = Interner::from_names(self.tape_symbols.iter());

        let blank = checks
            .symbol(&tape, Alphabet::Tape, &self.blank_symbol, || {
                "blank_symbol".to_string()
            })
            .unwrap_or(0);
        if self.input_symbols.contains(&self.blank_symbol) {
            checks.report(SemanticError::BlankInInput(self.blank_symbol.clone()));
        }
        let input: HashSet<u32> = self
            .input_symbols
            .iter()
            .filter_map(|symbol| {
                checks.symbol(&tape, Alphabet::Tape, symbol, || "input_symbols".to_string())
            })
            .collect();

        let mut rules = HashMap::new();
        for (from, row) in &self.transitions {
            let source = checks.state(space.names(), from, || format!("transitions source '{from}'"));
            for (read, TmAction(to, write, direction)) in row {
                let location = || format!("transition ({from}, {read})");
                let read_ix = checks.symbol(&tape, Alphabet::Tape, read, location);
                let target = checks.state(space.names(), to, location);
                let write_ix = checks.symbol(&tape, Alphabet::Tape, write, location);
                if let (Some(source), Some(read_ix), Some(target), Some(write_ix)) =
                    (source, read_ix, target, write_ix)
                {
                    rules.insert(
                        (source, read_ix),
                        TmMove {
                            target,
                            write: write_ix,
                            direction: *direction,
                        },
                    );
                }
            }
        }

        checks.finish()?;
        Ok(Tm {
            space,
            tape,
            input,
            blank,
            rules,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition() -> TmDefinition {
        serde_json::from_value(json!({
            "states": ["q0", "q1", "q2"],
            "input_symbols": ["0", "1"],
            "tape_symbols": ["0", "1", "B"],
            "transitions": {
                "q0": {"0": ["q1", "1", "R"]},
                "q1": {"1": ["q2", "0", "L"]}
            },
            "initial_state": "q0",
            "blank_symbol": "B",
            "final_states": ["q2"]
        }))
        .unwrap()
    }

    #[test]
    fn sample_definition_builds() {
        let tm = definition().build().unwrap();
        assert_eq!(tm.transitions().count(), 2);
        assert_eq!(tm.blank_symbol().as_str(), "B");
    }

    #[test]
    fn blank_must_be_a_tape_symbol() {
        let mut def = definition();
        def.blank_symbol = Symbol::from("_");

        let error = def.build().unwrap_err();
        assert!(matches!(
            error.semantic_errors(),
            [SemanticError::UndeclaredSymbol { alphabet: Alphabet::Tape, .. }]
        ));
    }

    #[test]
    fn blank_must_not_be_an_input_symbol() {
        let mut def = definition();
        def.input_symbols.insert(Symbol::from("B"));

        let error = def.build().unwrap_err();
        assert_eq!(
            error.semantic_errors(),
            &[SemanticError::BlankInInput(Symbol::from("B"))]
        );
    }

    #[test]
    fn input_symbols_must_be_tape_symbols() {
        let mut def = definition();
        def.input_symbols.insert(Symbol::from("2"));

        let error = def.build().unwrap_err();
        assert_eq!(error.semantic_errors().len(), 1);
    }

    #[test]
    fn write_symbol_must_be_declared() {
        let mut def = definition();
        def.transitions.get_mut(&StateId::from("q0")).unwrap().insert(
            Symbol::from("1"),
            TmAction(StateId::from("q0"), Symbol::from("X"), Direction::Right),
        );

        assert!(def.build().unwrap_err().is_semantic());
    }

    #[test]
    fn unknown_direction_fails_to_parse() {
        let parsed = serde_json::from_value::<TmDefinition>(json!({
            "states": ["q0"],
            "input_symbols": ["0"],
            "tape_symbols": ["0", "B"],
            "transitions": {"q0": {"0": ["q0", "0", "N"]}},
            "initial_state": "q0",
            "blank_symbol": "B",
            "final_states": []
        }));
        assert!(parsed.is_err());
    }
}
