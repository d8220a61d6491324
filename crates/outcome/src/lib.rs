//! # Nebula Outcome
//!
//! Explicit success-or-failure results for the Nebula workflow engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_outcome::prelude::*;
//!
//! fn read_timeout_ms(raw: Option<&str>) -> Outcome<u64> {
//!     Outcome::capture_some(|| raw.map(str::parse::<u64>).transpose())
//!         .context("reading worker timeout")
//! }
//!
//! assert_eq!(read_timeout_ms(Some("250")).success(), Some(250));
//! assert!(read_timeout_ms(None).is_failure());
//! assert!(read_timeout_ms(Some("soon")).is_failure());
//! ```
//!
//! ## Design
//!
//! - **Two states, nothing else**: [`Outcome`] is `Success(T)` or
//!   `Failure(OutcomeError)`. There is no third state and no null.
//! - **Absence is failure**: an empty `Option` at any boundary folds into
//!   the canonical absence failure instead of an empty success.
//! - **Failures travel untouched**: success-side combinators never run in
//!   the failure state, so the first payload survives a whole pipeline.
//! - **Two cause slots**: annotating keeps the old payload as the primary
//!   cause; substituting files it as suppressed. Both stay observable
//!   through [`OutcomeError`]'s accessors.
//!
//! ## Leaving the container
//!
//! `Outcome` is for building pipelines; at the edge, hand the value to
//! ordinary `Result` code with [`Outcome::into_result`] and let `?` take
//! over. [`OutcomeResult`] is the matching alias.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` for [`Outcome`] and [`OutcomeError`]
//!   (serialize-only; captured errors cannot be rebuilt from data).

#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

// === Failure Payload ===
pub mod error;

// === The Container ===
pub mod outcome;

// === Result/Option Seams ===
pub mod convert;

// === Ergonomic Macros ===
pub mod macros;

// === Public API Exports ===

/// The success-or-failure container
pub use outcome::Outcome;

/// Failure payload with message, cause chain and suppressed causes
pub use error::{Chain, OutcomeError};

/// `Result` alias and the `into_outcome` extension traits
pub use convert::{OptionIntoOutcome, OutcomeResult, ResultIntoOutcome};

/// Convenient prelude with everything you need
pub mod prelude {
    pub use super::Outcome::{self, Failure, Success};
    pub use super::{OptionIntoOutcome, OutcomeError, OutcomeResult, ResultIntoOutcome};

    // Re-export the early-return macros for convenience
    pub use crate::{ensure, fail};
}
