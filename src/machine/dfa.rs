//! Deterministic finite automata.

use crate::core::{Interner, StateId, Symbol, VerificationResult, Word};
use crate::machine::StateSpace;
use std::collections::HashMap;
use tracing::debug;

/// A validated DFA with a possibly partial transition table.
///
/// A missing `(state, symbol)` entry is an implicit dead state: the run
/// stops and the word is rejected.
#[derive(Clone, Debug)]
pub struct Dfa {
    pub(crate) space: StateSpace,
    pub(crate) input: Interner<Symbol>,
    pub(crate) transition: HashMap<(u32, u32), u32>,
}

impl Dfa {
    /// Walk `word` from the initial state.
    ///
    /// Runs in O(|word|) time and constant auxiliary space.
    pub fn verify(&self, word: &Word) -> VerificationResult {
        let mut state = self.space.initial();

        for (pos, symbol) in word.symbols().iter().enumerate() {
            let next = self
                .input
                .get(symbol)
                .and_then(|sym| self.transition.get(&(state, sym)));

            match next {
                Some(&target) => state = target,
                None => {
                    debug!(
                        "dfa: no transition from '{}' on '{}' at position {}",
                        self.space.name(state),
                        symbol,
                        pos
                    );
                    return VerificationResult::Rejected;
                }
            }
        }

        VerificationResult::from_final(self.space.is_accepting(state))
    }

    /// Target of the transition from `state` on `symbol`, if defined.
    pub fn next_state(&self, state: &StateId, symbol: &Symbol) -> Option<&StateId> {
        let from = self.space.lookup(state)?;
        let sym = self.input.get(symbol)?;
        self.transition
            .get(&(from, sym))
            .map(|&target| self.space.name(target))
    }

    pub fn input_alphabet(&self) -> impl Iterator<Item = &Symbol> {
        self.input.iter().map(|(_, symbol)| symbol)
    }

    /// Every transition as `(from, symbol, to)`, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = (&StateId, &Symbol, &StateId)> {
        self.transition.iter().map(|(&(from, sym), &to)| {
            (
                self.space.name(from),
                self.input.resolve(sym),
                self.space.name(to),
            )
        })
    }
}
