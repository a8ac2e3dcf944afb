//! Builder API for creating limits.

use crate::core::CancelToken;
use crate::limits::bounds::Limits;
use std::time::Duration;

/// Fluent builder for [`Limits`].
///
/// ```rust
/// use automata_core::{CancelToken, LimitsBuilder};
/// use std::time::Duration;
///
/// let token = CancelToken::new();
/// let limits = LimitsBuilder::new()
///     .max_steps(500)
///     .max_configurations(2_000)
///     .timeout(Duration::from_millis(100))
///     .cancel_on(token.clone())
///     .build();
///
/// assert_eq!(limits.max_steps, 500);
/// assert!(limits.cancel_token().is_some());
/// ```
pub struct LimitsBuilder {
    limits: Limits,
}

impl LimitsBuilder {
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
        }
    }

    /// Cap on PDA configurations explored
    pub fn max_configurations(mut self, n: usize) -> Self {
        self.limits.max_configurations = n;
        self
    }

    /// Cap on TM transitions
    pub fn max_steps(mut self, n: usize) -> Self {
        self.limits.max_steps = n;
        self
    }

    /// Set wall-clock timeout, rounded up to whole milliseconds
    pub fn timeout(mut self, duration: Duration) -> Self {
        let millis = duration.as_nanos().div_ceil(1_000_000);
        self.limits.timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    /// Abort runs once `token` is cancelled
    pub fn cancel_on(mut self, token: CancelToken) -> Self {
        self.limits.cancel = Some(token);
        self
    }

    pub fn build(self) -> Limits {
        self.limits
    }
}

impl Default for LimitsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
