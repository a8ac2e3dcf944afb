//! Per-call meter that engines consult between iterations.

use crate::limits::bounds::Limits;
use crate::limits::exhaustion::Exhaustion;
use std::time::{Duration, Instant};

/// Running budget for one verification call.
///
/// Created when the call starts and dropped with it; nothing survives the
/// call.
pub(crate) struct Budget<'a> {
    limits: &'a Limits,
    started_at: Instant,
}

impl<'a> Budget<'a> {
    pub(crate) fn start(limits: &'a Limits) -> Self {
        Self {
            limits,
            started_at: Instant::now(),
        }
    }

    pub(crate) fn limits(&self) -> &Limits {
        self.limits
    }

    /// Time spent since the call started
    pub(crate) fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Fail if the call was cancelled or ran past its deadline.
    pub(crate) fn checkpoint(&self) -> Result<(), Exhaustion> {
        if self
            .limits
            .cancel_token()
            .is_some_and(|token| token.is_cancelled())
        {
            return Err(Exhaustion::Cancelled);
        }

        if let Some(timeout) = self.limits.timeout() {
            let elapsed = self.elapsed();
            if elapsed > timeout {
                return Err(Exhaustion::Timeout { timeout, elapsed });
            }
        }

        Ok(())
    }
}
