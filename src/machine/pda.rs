//! Nondeterministic pushdown automata.
//!
//! Verification explores the configuration graph `(position, state, stack)`
//! breadth-first. Stacks live in a per-run arena of hash-consed cells, so a
//! configuration is three integers and equal stacks share one node. A
//! visited set over those triples keeps epsilon cycles from looping, and the
//! explored-configuration cap bounds the work when the stack can grow
//! without limit.

use crate::core::{Interner, StateId, Symbol, VerificationResult, Word};
use crate::limits::{Budget, Exhaustion, Limits};
use crate::machine::StateSpace;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{debug, trace};

/// Rule key: state, input symbol (`None` for epsilon) and required stack top.
pub(crate) type RuleKey = (u32, Option<u32>, u32);

/// One alternative of a rule: the target state and the symbols replacing
/// the popped top, first element ending up on top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PdaMove {
    pub(crate) target: u32,
    pub(crate) replacement: Vec<u32>,
}

/// A validated PDA accepting by final state.
#[derive(Clone, Debug)]
pub struct Pda {
    pub(crate) space: StateSpace,
    pub(crate) input: Interner<Symbol>,
    pub(crate) stack: Interner<Symbol>,
    pub(crate) initial_stack: u32,
    pub(crate) rules: HashMap<RuleKey, Vec<PdaMove>>,
}

/// Snapshot of an in-progress run. `stack` is a node of the run's
/// [`StackArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Configuration {
    pos: usize,
    state: u32,
    stack: u32,
}

/// Node id of the empty stack.
const EMPTY_STACK: u32 = 0;

/// A pushed symbol on top of the stack `below`.
#[derive(Clone, Copy, Debug)]
struct StackCell {
    below: u32,
    symbol: u32,
    depth: usize,
}

/// Hash-consed stacks for one search.
///
/// Pushing the same symbol onto the same node always yields the same id, so
/// node ids compare stacks by content. Storage grows by one cell per new
/// push and is dropped with the run.
struct StackArena {
    cells: Vec<StackCell>,
    index: HashMap<(u32, u32), u32>,
}

impl StackArena {
    fn new() -> Self {
        Self {
            // Sentinel for the empty stack, never read as a symbol.
            cells: vec![StackCell {
                below: EMPTY_STACK,
                symbol: u32::MAX,
                depth: 0,
            }],
            index: HashMap::new(),
        }
    }

    fn push(&mut self, below: u32, symbol: u32) -> u32 {
        let cells = &mut self.cells;
        *self.index.entry((below, symbol)).or_insert_with(|| {
            let id = cells.len() as u32;
            let depth = cells[below as usize].depth + 1;
            cells.push(StackCell {
                below,
                symbol,
                depth,
            });
            id
        })
    }

    /// Top symbol and the stack beneath it, or `None` for the empty stack.
    fn pop(&self, node: u32) -> Option<(u32, u32)> {
        if node == EMPTY_STACK {
            return None;
        }
        let cell = self.cells[node as usize];
        Some((cell.symbol, cell.below))
    }

    fn depth(&self, node: u32) -> usize {
        self.cells[node as usize].depth
    }
}

impl Pda {
    /// Verify `word`, exploring at most `max_configurations` configurations.
    pub fn verify(&self, word: &Word, max_configurations: usize) -> VerificationResult {
        let limits = Limits::default().with_max_configurations(max_configurations);
        self.verify_within(word, &limits)
    }

    /// Verify `word` under the configuration cap, timeout and cancellation
    /// token carried by `limits`.
    pub fn verify_within(&self, word: &Word, limits: &Limits) -> VerificationResult {
        let Some(input) = self.encode(word) else {
            debug!("pda: word '{}' uses symbols outside the input alphabet", word);
            return VerificationResult::Rejected;
        };

        let budget = Budget::start(limits);
        match self.search(&input, &budget) {
            Ok(result) => result,
            Err(reason) => {
                debug!("pda: search stopped after {:?}: {}", budget.elapsed(), reason);
                VerificationResult::ResourceExhausted(reason)
            }
        }
    }

    fn encode(&self, word: &Word) -> Option<Vec<u32>> {
        word.symbols()
            .iter()
            .map(|symbol| self.input.get(symbol))
            .collect()
    }

    fn search(&self, input: &[u32], budget: &Budget<'_>) -> Result<VerificationResult, Exhaustion> {
        let cap = budget.limits().max_configurations;
        let mut stacks = StackArena::new();
        let initial = Configuration {
            pos: 0,
            state: self.space.initial(),
            stack: stacks.push(EMPTY_STACK, self.initial_stack),
        };

        let mut visited = HashSet::new();
        visited.insert(initial);
        let mut worklist = VecDeque::from([initial]);
        let mut explored = 0usize;

        while let Some(config) = worklist.pop_front() {
            budget.checkpoint()?;
            if explored >= cap {
                return Err(Exhaustion::ConfigurationLimit { limit: cap });
            }
            explored += 1;

            if config.pos == input.len() && self.space.is_accepting(config.state) {
                debug!(
                    "pda: accepted in state '{}' after exploring {} configurations",
                    self.space.name(config.state),
                    explored
                );
                return Ok(VerificationResult::Accepted);
            }

            trace!(
                "pda: expanding pos={} state='{}' depth={}",
                config.pos,
                self.space.name(config.state),
                stacks.depth(config.stack)
            );

            self.expand(config, input, &mut stacks, |next| {
                if visited.insert(next) {
                    worklist.push_back(next);
                }
            });
        }

        debug!("pda: rejected after exploring {} configurations", explored);
        Ok(VerificationResult::Rejected)
    }

    /// Emit every configuration reachable from `config` in one move.
    fn expand(
        &self,
        config: Configuration,
        input: &[u32],
        stacks: &mut StackArena,
        mut emit: impl FnMut(Configuration),
    ) {
        let Some((top, rest)) = stacks.pop(config.stack) else {
            return;
        };

        let epsilon = self
            .rules
            .get(&(config.state, None, top))
            .map(|moves| (config.pos, moves));
        let consuming = input
            .get(config.pos)
            .and_then(|&sym| self.rules.get(&(config.state, Some(sym), top)))
            .map(|moves| (config.pos + 1, moves));

        for (pos, moves) in epsilon.into_iter().chain(consuming) {
            for mv in moves {
                let stack = mv
                    .replacement
                    .iter()
                    .rev()
                    .fold(rest, |below, &symbol| stacks.push(below, symbol));
                emit(Configuration {
                    pos,
                    state: mv.target,
                    stack,
                });
            }
        }
    }

    pub fn initial_stack_symbol(&self) -> &Symbol {
        self.stack.resolve(self.initial_stack)
    }

    /// Every rule alternative as `(from, input, top, to, replacement)`.
    ///
    /// `input` is `None` for epsilon rules.
    pub fn transitions(
        &self,
    ) -> impl Iterator<Item = (&StateId, Option<&Symbol>, &Symbol, &StateId, Vec<&Symbol>)> {
        self.rules.iter().flat_map(move |(&(from, sym, top), moves)| {
            moves.iter().map(move |mv| {
                (
                    self.space.name(from),
                    sym.map(|s| self.input.resolve(s)),
                    self.stack.resolve(top),
                    self.space.name(mv.target),
                    mv.replacement
                        .iter()
                        .map(|&s| self.stack.resolve(s))
                        .collect(),
                )
            })
        })
    }
}
