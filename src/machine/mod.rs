//! Validated automata and their verification engines.
//!
//! Values in this module are only produced by the definition validator, so
//! every index they hold is known to be in range. They are immutable: each
//! `verify` call allocates its own configuration and drops it on return,
//! which makes concurrent calls against one automaton safe without locking.

mod dfa;
mod pda;
mod tm;

pub use dfa::Dfa;
pub(crate) use pda::PdaMove;
pub use pda::Pda;
pub use tm::{Direction, Tm};
pub(crate) use tm::TmMove;

use crate::core::{Interner, StateId};
use crate::definition::Formalism;

/// A validated automaton of one of the three supported formalisms.
#[derive(Clone, Debug)]
pub enum Automaton {
    Dfa(Dfa),
    Pda(Pda),
    Tm(Tm),
}

impl Automaton {
    pub fn formalism(&self) -> Formalism {
        match self {
            Self::Dfa(_) => Formalism::Dfa,
            Self::Pda(_) => Formalism::Pda,
            Self::Tm(_) => Formalism::Tm,
        }
    }

    pub(crate) fn space(&self) -> &StateSpace {
        match self {
            Self::Dfa(dfa) => &dfa.space,
            Self::Pda(pda) => &pda.space,
            Self::Tm(tm) => &tm.space,
        }
    }

    pub fn initial_state(&self) -> &StateId {
        self.space().initial_state()
    }

    pub fn states(&self) -> impl Iterator<Item = &StateId> {
        self.space().states()
    }

    pub fn final_states(&self) -> impl Iterator<Item = &StateId> {
        self.space().final_states()
    }

    pub fn is_final(&self, state: &StateId) -> bool {
        self.space().is_final(state)
    }
}

impl From<Dfa> for Automaton {
    fn from(dfa: Dfa) -> Self {
        Self::Dfa(dfa)
    }
}

impl From<Pda> for Automaton {
    fn from(pda: Pda) -> Self {
        Self::Pda(pda)
    }
}

impl From<Tm> for Automaton {
    fn from(tm: Tm) -> Self {
        Self::Tm(tm)
    }
}

/// States, initial state and accepting flags shared by every formalism.
#[derive(Clone, Debug)]
pub(crate) struct StateSpace {
    names: Interner<StateId>,
    initial: u32,
    accepting: Vec<bool>,
}

impl StateSpace {
    pub(crate) fn new(names: Interner<StateId>, initial: u32, finals: &[u32]) -> Self {
        let mut accepting = vec![false; names.len()];
        for &ix in finals {
            accepting[ix as usize] = true;
        }
        Self {
            names,
            initial,
            accepting,
        }
    }

    pub(crate) fn names(&self) -> &Interner<StateId> {
        &self.names
    }

    pub(crate) fn initial(&self) -> u32 {
        self.initial
    }

    pub(crate) fn is_accepting(&self, ix: u32) -> bool {
        self.accepting[ix as usize]
    }

    pub(crate) fn name(&self, ix: u32) -> &StateId {
        self.names.resolve(ix)
    }

    pub(crate) fn lookup(&self, state: &StateId) -> Option<u32> {
        self.names.get(state)
    }

    pub(crate) fn initial_state(&self) -> &StateId {
        self.name(self.initial)
    }

    pub(crate) fn states(&self) -> impl Iterator<Item = &StateId> {
        self.names.iter().map(|(_, name)| name)
    }

    pub(crate) fn final_states(&self) -> impl Iterator<Item = &StateId> {
        self.names
            .iter()
            .filter(|(ix, _)| self.accepting[*ix as usize])
            .map(|(_, name)| name)
    }

    pub(crate) fn is_final(&self, state: &StateId) -> bool {
        self.lookup(state).is_some_and(|ix| self.is_accepting(ix))
    }
}
