//! Resource limits for verification calls.
//!
//! Only two engines can do unbounded work: the PDA configuration search and
//! the TM step loop. Both take a [`Limits`] value and stop with
//! [`Exhaustion`] instead of running forever.
//!
//! # Example
//!
//! ```rust
//! use automata_core::limits::{LimitsBuilder, Exhaustion};
//! use std::time::Duration;
//!
//! let limits = LimitsBuilder::new()
//!     .max_configurations(10_000)
//!     .max_steps(1_000)
//!     .timeout(Duration::from_secs(2))
//!     .build();
//!
//! let reason = Exhaustion::StepLimit { limit: limits.max_steps };
//! assert_eq!(reason.to_string(), "step limit (1000) reached before the machine halted");
//! ```

pub mod bounds;
pub mod builder;
pub(crate) mod budget;
pub mod exhaustion;

pub use bounds::{Limits, DEFAULT_MAX_CONFIGURATIONS, DEFAULT_MAX_STEPS};
pub use builder::LimitsBuilder;
pub(crate) use budget::Budget;
pub use exhaustion::Exhaustion;
