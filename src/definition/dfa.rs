//! Wire shape and validation of DFA definitions.

use crate::core::{Interner, StateId, Symbol};
use crate::definition::checks::{require_states, require_symbols, Checks};
use crate::definition::error::{Alphabet, ValidationError};
use crate::machine::Dfa;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Raw DFA definition.
///
/// `transitions` maps a source state to a map from input symbol to target
/// state. The table may be partial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DfaDefinition {
    pub states: BTreeSet<StateId>,
    #[serde(alias = "input_alphabet")]
    pub input_symbols: BTreeSet<Symbol>,
    pub transitions: BTreeMap<StateId, BTreeMap<Symbol, StateId>>,
    pub initial_state: StateId,
    pub final_states: BTreeSet<StateId>,
}

impl DfaDefinition {
    pub fn build(&self) -> Result<Dfa, ValidationError> {
        require_states(&self.states)?;
        require_symbols("input_symbols", &self.input_symbols)?;

        let mut checks = Checks::new();
        let space = checks.state_space(&self.states, &self.initial_state, &self.final_states);
        let input = Interner::from_names(self.input_symbols.iter());

        let mut transition = HashMap::new();
        for (from, row) in &self.transitions {
            let source = checks.state(space.names(), from, || format!("transitions source '{from}'"));
            for (symbol, to) in row {
                let location = || format!("transition ({from}, {symbol})");
                let sym = checks.symbol(&input, Alphabet::Input, symbol, location);
                let target = checks.state(space.names(), to, location);
                if let (Some(source), Some(sym), Some(target)) = (source, sym, target) {
                    transition.insert((source, sym), target);
                }
            }
        }

        checks.finish()?;
        Ok(Dfa {
            space,
            input,
            transition,
        })
    }
}
