//! Turing Machine Step Budgets
//!
//! This example runs a halting TM and a runaway TM under step limits,
//! then cancels a run from another thread.
//!
//! Key concepts:
//! - Halting inside the budget gives a verdict
//! - Running past the budget gives `ResourceExhausted`, not `Rejected`
//! - Cooperative cancellation through a shared `CancelToken`
//!
//! Run with: cargo run --example turing_budget

use automata_core::{validate, Automaton, CancelToken, Formalism, LimitsBuilder, Verifier, Word};
use serde_json::json;
use std::time::Duration;

fn main() {
    println!("=== Turing Budget Example ===\n");

    // Accepts words with an even number of 1s by flipping parity on each 1.
    let parity = validate(
        &json!({
            "states": ["even", "odd", "accept"],
            "input_symbols": ["0", "1"],
            "tape_symbols": ["0", "1", "B"],
            "transitions": {
                "even": {"0": ["even", "0", "R"], "1": ["odd", "1", "R"], "B": ["accept", "B", "L"]},
                "odd": {"0": ["odd", "0", "R"], "1": ["even", "1", "R"]}
            },
            "initial_state": "even",
            "blank_symbol": "B",
            "final_states": ["accept"]
        }),
        Formalism::Tm,
    )
    .unwrap();

    let runaway = validate(
        &json!({
            "states": ["q0"],
            "input_symbols": ["0"],
            "tape_symbols": ["0", "B"],
            "transitions": {"q0": {"0": ["q0", "0", "R"], "B": ["q0", "B", "R"]}},
            "initial_state": "q0",
            "blank_symbol": "B",
            "final_states": []
        }),
        Formalism::Tm,
    )
    .unwrap();

    if let Automaton::Tm(tm) = &parity {
        for limit in [0, 3, 100] {
            println!("parity '0110' with {limit:>3} steps: {}", tm.verify(&Word::from("0110"), limit));
        }
        println!("parity '010' with 100 steps: {}", tm.verify(&Word::from("010"), 100));
    }

    let verifier = Verifier::new(LimitsBuilder::new().max_steps(10_000).build());
    println!("\nrunaway: {}", verifier.verify(&runaway, &Word::from("0")));

    let token = CancelToken::new();
    let cancelling = Verifier::new(
        LimitsBuilder::new()
            .max_steps(usize::MAX)
            .cancel_on(token.clone())
            .build(),
    );
    let handle = std::thread::spawn(move || cancelling.verify(&runaway, &Word::from("0")));
    std::thread::sleep(Duration::from_millis(20));
    token.cancel();
    println!("runaway after cancel: {}", handle.join().unwrap());

    println!("\n=== Example Complete ===");
}
