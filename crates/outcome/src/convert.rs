//! Bridges between [`Outcome`] and the standard `Result`/`Option` types
//!
//! [`Outcome`] is deliberately not `std::result::Result`: it fixes the error
//! type and folds absence into failure. Code at the crate's edges still
//! speaks `Result` and `Option`, so this module provides the seams in both
//! directions.

use std::error::Error as StdError;

use crate::error::OutcomeError;
use crate::outcome::Outcome;

/// A `Result` whose error is already an [`OutcomeError`].
///
/// The return type of [`Outcome::into_result`] and friends; the natural
/// signature for fallible functions that participate in `?` chains.
pub type OutcomeResult<T> = Result<T, OutcomeError>;

impl<T> From<OutcomeResult<T>> for Outcome<T> {
    fn from(result: OutcomeResult<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

// ============================================================================
// EXTENSION TRAITS
// ============================================================================

/// Fold any `Result` with a standard error into an [`Outcome`].
///
/// ```
/// use nebula_outcome::ResultIntoOutcome;
///
/// let outcome = "314".parse::<u32>().into_outcome();
/// assert_eq!(outcome.success(), Some(314));
/// ```
pub trait ResultIntoOutcome<T> {
    /// Capture `Err` into a failure payload, exactly as
    /// [`Outcome::capture`] would.
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> ResultIntoOutcome<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(OutcomeError::from_error(error)),
        }
    }
}

/// Fold an `Option` into an [`Outcome`], treating `None` as failure.
///
/// ```
/// use nebula_outcome::OptionIntoOutcome;
///
/// let first = [10, 20].first().copied().into_outcome();
/// assert_eq!(first.success(), Some(10));
///
/// let missing = std::iter::empty::<i32>().next().into_outcome();
/// assert!(missing.as_failure().is_some_and(|error| error.is_absent()));
/// ```
pub trait OptionIntoOutcome<T> {
    /// `None` becomes the canonical absence failure.
    fn into_outcome(self) -> Outcome<T>;
}

impl<T> OptionIntoOutcome<T> for Option<T> {
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from_option(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================
