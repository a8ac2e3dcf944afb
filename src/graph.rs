//! Abstract graph view of an automaton.
//!
//! Nodes are states and labelled edges are transitions. Turning the graph
//! into an image is left to the caller; [`StateGraph::to_dot`] produces
//! Graphviz input for that purpose.

use crate::core::StateId;
use crate::machine::{Automaton, Dfa, Pda, Tm};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for epsilon moves.
pub const EPSILON_LABEL: &str = "ε";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: StateId,
    pub initial: bool,
    pub accepting: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: StateId,
    pub to: StateId,
    pub label: String,
}

/// Nodes and edges in sorted order, so equal automata give equal graphs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl StateGraph {
    /// Render as Graphviz DOT: left to right, final states drawn as double
    /// circles, an invisible entry node pointing at the initial state.
    pub fn to_dot(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StateGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph automaton {{")?;
        writeln!(f, "    rankdir=LR;")?;
        writeln!(f, "    __start [label=\"\", shape=none];")?;

        for node in &self.nodes {
            let shape = if node.accepting {
                "doublecircle"
            } else {
                "circle"
            };
            writeln!(f, "    \"{}\" [shape={}];", escape(node.id.as_str()), shape)?;
        }
        for node in self.nodes.iter().filter(|n| n.initial) {
            writeln!(f, "    __start -> \"{}\";", escape(node.id.as_str()))?;
        }
        for edge in &self.edges {
            writeln!(
                f,
                "    \"{}\" -> \"{}\" [label=\"{}\"];",
                escape(edge.from.as_str()),
                escape(edge.to.as_str()),
                escape(&edge.label)
            )?;
        }

        writeln!(f, "}}")
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Automaton {
    /// Abstract node/edge description of this automaton.
    pub fn graph(&self) -> StateGraph {
        let mut nodes: Vec<GraphNode> = self
            .states()
            .map(|state| GraphNode {
                id: state.clone(),
                initial: state == self.initial_state(),
                accepting: self.is_final(state),
            })
            .collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut edges = match self {
            Self::Dfa(dfa) => dfa_edges(dfa),
            Self::Pda(pda) => pda_edges(pda),
            Self::Tm(tm) => tm_edges(tm),
        };
        edges.sort();

        StateGraph { nodes, edges }
    }
}

fn dfa_edges(dfa: &Dfa) -> Vec<GraphEdge> {
    dfa.transitions()
        .map(|(from, symbol, to)| GraphEdge {
            from: from.clone(),
            to: to.clone(),
            label: symbol.to_string(),
        })
        .collect()
}

fn pda_edges(pda: &Pda) -> Vec<GraphEdge> {
    pda.transitions()
        .map(|(from, input, top, to, replacement)| {
            let input = input.map_or(EPSILON_LABEL, |s| s.as_str());
            let pushed: String = if replacement.is_empty() {
                EPSILON_LABEL.to_string()
            } else {
                replacement.iter().map(|s| s.as_str()).collect()
            };
            GraphEdge {
                from: from.clone(),
                to: to.clone(),
                label: format!("{input},{top}/{pushed}"),
            }
        })
        .collect()
}

fn tm_edges(tm: &Tm) -> Vec<GraphEdge> {
    tm.transitions()
        .map(|(from, read, to, write, direction)| GraphEdge {
            from: from.clone(),
            to: to.clone(),
            label: format!("{read}/{write},{}", direction.as_str()),
        })
        .collect()
}
