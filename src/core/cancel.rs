//! Cooperative cancellation for long-running verifications.
//!
//! The PDA search and the TM loop poll a [`CancelToken`] between iterations.
//! Cancelling a token never interrupts an engine mid-step; the engine
//! notices the flag at its next checkpoint and returns
//! `ResourceExhausted(Cancelled)`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag.
///
/// Clones share the same flag, so a serving context can keep one clone and
/// hand the other to a verification call running elsewhere.
///
/// # Example
///
/// ```rust
/// use automata_core::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
///
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every run observing this token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_token_is_not_cancelled() {
        assert!(!CancelToken::new().is_cancelled());
    }

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let clone = token.clone();

        clone.cancel();

        assert!(token.is_cancelled());
        assert!(clone.is_cancelled());
    }

    #[test]
    fn cancel_is_idempotent() {
        let token = CancelToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn token_is_visible_across_threads() {
        let token = CancelToken::new();
        let remote = token.clone();

        std::thread::spawn(move || remote.cancel()).join().unwrap();

        assert!(token.is_cancelled());
    }
}
