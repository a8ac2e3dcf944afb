//! Deterministic single-tape Turing machines.

use crate::core::{Interner, StateId, Symbol, VerificationResult, Word};
use crate::limits::{Budget, Exhaustion, Limits};
use crate::machine::StateSpace;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Head movement after a write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "L", alias = "Left")]
    Left,
    #[serde(rename = "R", alias = "Right")]
    Right,
}

impl Direction {
    fn offset(self) -> i64 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "L",
            Self::Right => "R",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TmMove {
    pub(crate) target: u32,
    pub(crate) write: u32,
    pub(crate) direction: Direction,
}

/// A validated deterministic Turing machine.
///
/// A missing `(state, symbol)` entry halts the machine; the word is accepted
/// iff the machine halts in a final state.
#[derive(Clone, Debug)]
pub struct Tm {
    pub(crate) space: StateSpace,
    pub(crate) tape: Interner<Symbol>,
    /// Tape indices of the input alphabet.
    pub(crate) input: HashSet<u32>,
    pub(crate) blank: u32,
    pub(crate) rules: HashMap<(u32, u32), TmMove>,
}

/// Sparse tape: only non-blank cells are stored.
struct Tape {
    cells: HashMap<i64, u32>,
    blank: u32,
}

impl Tape {
    fn read(&self, pos: i64) -> u32 {
        self.cells.get(&pos).copied().unwrap_or(self.blank)
    }

    fn write(&mut self, pos: i64, symbol: u32) {
        if symbol == self.blank {
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, symbol);
        }
    }
}

impl Tm {
    /// Run the machine on `word` for at most `step_limit` transitions.
    pub fn verify(&self, word: &Word, step_limit: usize) -> VerificationResult {
        let limits = Limits::default().with_max_steps(step_limit);
        self.verify_within(word, &limits)
    }

    /// Run the machine under the step limit, timeout and cancellation token
    /// carried by `limits`.
    pub fn verify_within(&self, word: &Word, limits: &Limits) -> VerificationResult {
        let step_limit = limits.max_steps;
        if step_limit == 0 {
            return VerificationResult::ResourceExhausted(Exhaustion::StepLimit { limit: 0 });
        }

        let Some(mut tape) = self.load(word) else {
            debug!("tm: word '{}' uses symbols outside the input alphabet", word);
            return VerificationResult::Rejected;
        };

        let budget = Budget::start(limits);
        match self.run(&mut tape, &budget) {
            Ok(result) => result,
            Err(reason) => {
                debug!("tm: run stopped after {:?}: {}", budget.elapsed(), reason);
                VerificationResult::ResourceExhausted(reason)
            }
        }
    }

    fn load(&self, word: &Word) -> Option<Tape> {
        let mut tape = Tape {
            cells: HashMap::with_capacity(word.len()),
            blank: self.blank,
        };
        for (pos, symbol) in word.symbols().iter().enumerate() {
            let sym = self.tape.get(symbol).filter(|ix| self.input.contains(ix))?;
            tape.write(pos as i64, sym);
        }
        Some(tape)
    }

    fn run(&self, tape: &mut Tape, budget: &Budget<'_>) -> Result<VerificationResult, Exhaustion> {
        let step_limit = budget.limits().max_steps;
        let mut state = self.space.initial();
        let mut head = 0i64;
        let mut steps = 0usize;

        loop {
            budget.checkpoint()?;

            let symbol = tape.read(head);
            let Some(mv) = self.rules.get(&(state, symbol)) else {
                debug!(
                    "tm: halted in '{}' reading '{}' after {} steps",
                    self.space.name(state),
                    self.tape.resolve(symbol),
                    steps
                );
                return Ok(VerificationResult::from_final(self.space.is_accepting(state)));
            };

            if steps >= step_limit {
                return Err(Exhaustion::StepLimit { limit: step_limit });
            }

            tape.write(head, mv.write);
            head += mv.direction.offset();
            state = mv.target;
            steps += 1;
        }
    }

    pub fn blank_symbol(&self) -> &Symbol {
        self.tape.resolve(self.blank)
    }

    /// Every transition as `(from, read, to, write, direction)`.
    pub fn transitions(
        &self,
    ) -> impl Iterator<Item = (&StateId, &Symbol, &StateId, &Symbol, Direction)> {
        self.rules.iter().map(|(&(from, read), mv)| {
            (
                self.space.name(from),
                self.tape.resolve(read),
                self.space.name(mv.target),
                self.tape.resolve(mv.write),
                mv.direction,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{validate, Formalism};
    use crate::limits::LimitsBuilder;
    use crate::machine::Automaton;
    use crate::CancelToken;
    use serde_json::{json, Value};
    use std::time::Duration;

    fn tm(raw: Value) -> Tm {
        match validate(&raw, Formalism::Tm).unwrap() {
            Automaton::Tm(tm) => tm,
            other => panic!("expected a TM, got {:?}", other.formalism()),
        }
    }

    /// Scans right over 0s and 1s and accepts on the first blank.
    fn scanner() -> Tm {
        tm(json!({
            "states": ["scan", "done"],
            "input_symbols": ["0", "1"],
            "tape_symbols": ["0", "1", "B"],
            "transitions": {
                "scan": {
                    "0": ["scan", "0", "R"],
                    "1": ["scan", "1", "R"],
                    "B": ["done", "B", "L"]
                }
            },
            "initial_state": "scan",
            "blank_symbol": "B",
            "final_states": ["done"]
        }))
    }

    /// Moves right forever.
    fn runaway() -> Tm {
        tm(json!({
            "states": ["q0", "q1"],
            "input_symbols": ["0"],
            "tape_symbols": ["0", "B"],
            "transitions": {
                "q0": {"0": ["q0", "0", "R"], "B": ["q0", "B", "R"]}
            },
            "initial_state": "q0",
            "blank_symbol": "B",
            "final_states": ["q1"]
        }))
    }

    #[test]
    fn halts_in_final_state_and_accepts() {
        // len(word) moves over the input plus one on the blank.
        let word = Word::from("0110");
        assert!(scanner().verify(&word, 5).is_accepted());
        assert!(scanner().verify(&Word::empty(), 1).is_accepted());
    }

    #[test]
    fn step_limit_below_run_length_is_exhausted() {
        assert_eq!(
            scanner().verify(&Word::from("0110"), 4),
            VerificationResult::ResourceExhausted(Exhaustion::StepLimit { limit: 4 })
        );
    }

    #[test]
    fn zero_step_limit_is_always_exhausted() {
        assert!(scanner().verify(&Word::from("01"), 0).is_exhausted());
        assert!(runaway().verify(&Word::empty(), 0).is_exhausted());

        let halts_immediately = tm(json!({
            "states": ["q0"],
            "input_symbols": ["0"],
            "tape_symbols": ["0", "B"],
            "transitions": {},
            "initial_state": "q0",
            "blank_symbol": "B",
            "final_states": ["q0"]
        }));
        assert!(halts_immediately.verify(&Word::empty(), 0).is_exhausted());
        assert!(halts_immediately.verify(&Word::empty(), 1).is_accepted());
    }

    #[test]
    fn non_halting_machine_is_exhausted() {
        assert_eq!(
            runaway().verify(&Word::from("000"), 100),
            VerificationResult::ResourceExhausted(Exhaustion::StepLimit { limit: 100 })
        );
    }

    #[test]
    fn halting_outside_final_state_rejects() {
        let machine = tm(json!({
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
        }));

        assert!(machine.verify(&Word::from("01"), 10).is_accepted());
        assert!(machine.verify(&Word::from("00"), 10).is_rejected());
        assert!(machine.verify(&Word::from("1"), 10).is_rejected());
    }

    #[test]
    fn head_can_move_left_of_the_input() {
        // Writes X left of the input, then returns to read it back.
        let machine = tm(json!({
            "states": ["start", "back", "check", "accept"],
            "input_symbols": ["a"],
            "tape_symbols": ["a", "X", "_"],
            "transitions": {
                "start": {"a": ["back", "a", "L"]},
                "back": {"_": ["check", "X", "R"]},
                "check": {"a": ["accept", "a", "L"]}
            },
            "initial_state": "start",
            "blank_symbol": "_",
            "final_states": ["accept"]
        }));

        assert!(machine.verify(&Word::from("a"), 10).is_accepted());
    }

    #[test]
    fn blank_in_the_word_is_rejected() {
        assert!(scanner().verify(&Word::from("0B1"), 10).is_rejected());
    }

    #[test]
    fn cancellation_and_timeout_stop_the_run() {
        let token = CancelToken::new();
        token.cancel();
        let cancelled = LimitsBuilder::new().cancel_on(token).build();
        assert_eq!(
            runaway().verify_within(&Word::empty(), &cancelled),
            VerificationResult::ResourceExhausted(Exhaustion::Cancelled)
        );

        let timed = LimitsBuilder::new()
            .max_steps(usize::MAX)
            .timeout(Duration::from_millis(20))
            .build();
        assert!(matches!(
            runaway().verify_within(&Word::empty(), &timed),
            VerificationResult::ResourceExhausted(Exhaustion::Timeout { .. })
        ));
    }

    #[test]
    fn direction_parses_short_and_long_forms() {
        let left: Direction = serde_json::from_str("\"L\"").unwrap();
        let right: Direction = serde_json::from_str("\"Right\"").unwrap();
        assert_eq!(left, Direction::Left);
        assert_eq!(right, Direction::Right);
        assert!(serde_json::from_str::<Direction>("\"N\"").is_err());
        assert_eq!(serde_json::to_string(&Direction::Left).unwrap(), "\"L\"");
    }

    #[test]
    fn exposes_blank_and_transitions() {
        let machine = scanner();
        assert_eq!(machine.blank_symbol().as_str(), "B");
        assert_eq!(machine.transitions().count(), 3);
    }
}
