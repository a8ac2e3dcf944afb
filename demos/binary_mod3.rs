//! Binary Numbers Divisible by Three
//!
//! This example validates a DFA that tracks a binary number's remainder
//! modulo 3 and checks a few words against it.
//!
//! Key concepts:
//! - Validating a JSON definition into an immutable automaton
//! - DFA verification never exhausts a budget
//! - Graph export for drawing the machine
//!
//! Run with: cargo run --example binary_mod3

use automata_core::{validate, Formalism, Verifier, Word};
use serde_json::json;

fn main() {
    println!("=== Binary Mod 3 DFA Example ===\n");

    let dfa = validate(
        &json!({
            "states": ["r0", "r1", "r2"],
            "input_symbols": ["0", "1"],
            "transitions": {
                "r0": {"0": "r0", "1": "r1"},
                "r1": {"0": "r2", "1": "r0"},
                "r2": {"0": "r1", "1": "r2"}
            },
            "initial_state": "r0",
            "final_states": ["r0"]
        }),
        Formalism::Dfa,
    )
    .unwrap();

    let verifier = Verifier::default();
    for n in [0u32, 3, 5, 6, 7, 9, 12] {
        let word = format!("{n:b}");
        let result = verifier.verify(&dfa, &Word::from(word.as_str()));
        println!("{n:>3} = {word:>5}: {result}");
    }

    // A symbol outside the alphabet is a plain rejection.
    let result = verifier.verify(&dfa, &Word::from("12"));
    println!("\n'12' (not binary): {result}");

    println!("\nGraphviz:\n{}", dfa.graph().to_dot());

    println!("=== Example Complete ===");
}
