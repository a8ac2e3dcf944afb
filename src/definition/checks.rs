//! Reference checks shared by the per-formalism validators.
//!
//! Checks never stop at the first problem. Each failed lookup is recorded as
//! a failed `Validation` and all of them are combined at the end, so one
//! round trip reports every dangling reference in a definition.

use crate::core::{Interner, StateId, Symbol};
use crate::definition::error::{Alphabet, SchemaError, SemanticError, ValidationError};
use crate::machine::StateSpace;
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<SemanticError>>;

/// Accumulates failed reference lookups.
pub(crate) struct Checks {
    results: Vec<Check>,
}

impl Checks {
    pub(crate) fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    pub(crate) fn report(&mut self, error: SemanticError) {
        self.results.push(Validation::fail(error));
    }

    /// Resolve a state reference, recording an error if it is undeclared.
    pub(crate) fn state<F>(
        &mut self,
        states: &Interner<StateId>,
        state: &StateId,
        location: F,
    ) -> Option<u32>
    where
        F: FnOnce() -> String,
    {
        let ix = states.get(state);
        if ix.is_none() {
            self.report(SemanticError::UndeclaredState {
                state: state.clone(),
                location: location(),
            });
        }
        ix
    }

    /// Resolve a symbol reference, recording an error if it is undeclared.
    pub(crate) fn symbol<F>(
        &mut self,
        symbols: &Interner<Symbol>,
        alphabet: Alphabet,
        symbol: &Symbol,
        location: F,
    ) -> Option<u32>
    where
        F: FnOnce() -> String,
    {
        let ix = symbols.get(symbol);
        if ix.is_none() {
            self.report(SemanticError::UndeclaredSymbol {
                symbol: symbol.clone(),
                alphabet,
                location: location(),
            });
        }
        ix
    }

    /// Build the shared state space, checking the initial and final states.
    pub(crate) fn state_space(
        &mut self,
        states: &BTreeSet<StateId>,
        initial_state: &StateId,
        final_states: &BTreeSet<StateId>,
    ) -> StateSpace {
        let names = Interner::from_names(states.iter());
        // Index 0 stands in for an undeclared initial state; the recorded
        // error keeps the space from ever being used.
        let initial = self
            .state(&names, initial_state, || "initial_state".to_string())
            .unwrap_or(0);
        let finals: Vec<u32> = final_states
            .iter()
            .filter_map(|state| self.state(&names, state, || "final_states".to_string()))
            .collect();
        StateSpace::new(names, initial, &finals)
    }

    /// Combine every recorded check.
    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        match Validation::all_vec(self.results) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(ValidationError::Semantic(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

/// Reject empty state sets.
pub(crate) fn require_states(states: &BTreeSet<StateId>) -> Result<(), SchemaError> {
    if states.is_empty() {
        return Err(SchemaError::NoStates);
    }
    if states.iter().any(StateId::is_empty) {
        return Err(SchemaError::EmptyName { field: "states" });
    }
    Ok(())
}

/// Reject the empty string as a declared symbol; it is reserved for epsilon.
pub(crate) fn require_symbols<'a, I>(field: &'static str, symbols: I) -> Result<(), SchemaError>
where
    I: IntoIterator<Item = &'a Symbol>,
{
    if symbols.into_iter().any(Symbol::is_empty) {
        return Err(SchemaError::EmptyName { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> BTreeSet<StateId> {
        items.iter().map(|s| StateId::from(*s)).collect()
    }

    #[test]
    fn no_reports_finish_ok() {
        assert!(Checks::new().finish().is_ok());
    }

    #[test]
    fn every_report_is_kept_in_order() {
        let states = Interner::from_names(names(&["a"]).iter());
        let mut checks = Checks::new();

        assert_eq!(checks.state(&states, &StateId::from("a"), || "x".into()), Some(0));
        assert_eq!(checks.state(&states, &StateId::from("b"), || "first".into()), None);
        assert_eq!(checks.state(&states, &StateId::from("c"), || "second".into()), None);

        let errors = checks.finish().unwrap_err();
        let locations: Vec<_> = errors
            .semantic_errors()
            .iter()
            .map(|e| match e {
                SemanticError::UndeclaredState { location, .. } => location.clone(),
                other => panic!("unexpected error {other:?}"),
            })
            .collect();
        assert_eq!(locations, vec!["first", "second"]);
    }

    #[test]
    fn state_space_checks_initial_and_finals() {
        let mut checks = Checks::new();
        checks.state_space(
            &names(&["a", "b"]),
            &StateId::from("z"),
            &names(&["b", "y"]),
        );

        let error = checks.finish().unwrap_err();
        assert_eq!(error.semantic_errors().len(), 2);
    }

    #[test]
    fn symbol_lookup_reports_alphabet() {
        let symbols = Interner::from_names([Symbol::from("0")].iter());
        let mut checks = Checks::new();

        assert_eq!(
            checks.symbol(&symbols, Alphabet::Input, &Symbol::from("0"), || "t".into()),
            Some(0)
        );
        assert_eq!(
            checks.symbol(&symbols, Alphabet::Input, &Symbol::from("2"), || "t".into()),
            None
        );
        assert!(matches!(
            checks.finish(),
            Err(ValidationError::Semantic(errors))
                if matches!(errors[0], SemanticError::UndeclaredSymbol { alphabet: Alphabet::Input, .. })
        ));
    }

    #[test]
    fn schema_guards_reject_empty_names() {
        assert_eq!(require_states(&BTreeSet::new()), Err(SchemaError::NoStates));
        assert_eq!(
            require_states(&names(&["", "a"])),
            Err(SchemaError::EmptyName { field: "states" })
        );
        assert_eq!(
            require_symbols("input_symbols", [Symbol::from("")].iter()),
            Err(SchemaError::EmptyName {
                field: "input_symbols"
            })
        );
        assert!(require_symbols("input_symbols", [Symbol::from("a")].iter()).is_ok());
    }
}
