//! Core value types shared by the validator and the engines.
//!
//! - Names: `StateId`, `Symbol` and `Word`
//! - Outcomes: the three-way `VerificationResult`
//! - Cancellation: the `CancelToken` polled by long-running engines
//!
//! Everything here is immutable or, in the case of the cancel flag,
//! lock-free, so values can be shared freely between threads.

mod cancel;
mod outcome;
mod symbol;

pub use cancel::CancelToken;
pub use outcome::VerificationResult;
pub(crate) use symbol::Interner;
pub use symbol::{StateId, Symbol, Word};
