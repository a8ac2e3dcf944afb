//! Balanced Zeros and Ones
//!
//! This example stores a PDA for 0^n 1^n in an `AutomatonStore` and
//! verifies words by id, printing the wire response for each.
//!
//! Key concepts:
//! - Nondeterministic search bounded by a configuration cap
//! - Epsilon moves keyed by the empty input symbol
//! - Store operations: create, verify, snapshot
//!
//! Run with: cargo run --example balanced_pda

use automata_core::{AutomatonStore, Formalism, LimitsBuilder, Word};
use serde_json::json;

fn main() {
    println!("=== Balanced PDA Example ===\n");

    let store = AutomatonStore::with_limits(LimitsBuilder::new().max_configurations(1_000).build());
    let id = store
        .create(
            Formalism::Pda,
            &json!({
                "states": ["q0", "q1", "q2"],
                "input_symbols": ["0", "1"],
                "stack_symbols": ["0", "Z"],
                "transitions": {
                    "q0": {
                        "0": {"Z": [["q0", ["0", "Z"]]], "0": [["q0", ["0", "0"]]]},
                        "1": {"0": [["q1", []]]}
                    },
                    "q1": {
                        "1": {"0": [["q1", []]]},
                        "": {"Z": [["q2", ["Z"]]]}
                    }
                },
                "initial_state": "q0",
                "initial_stack_symbol": "Z",
                "final_states": ["q2"]
            }),
        )
        .unwrap();
    println!("Stored PDA as {id}\n");

    for word in ["01", "0011", "000111", "001", "0101", "10"] {
        let response = store.verify(&id, &Word::from(word)).unwrap();
        println!("{word:>8}: {}", serde_json::to_string(&response).unwrap());
    }

    let snapshot = store.snapshot().unwrap();
    println!("\nSnapshot holds {} definition(s)", snapshot.entries.len());

    println!("\n=== Example Complete ===");
}
