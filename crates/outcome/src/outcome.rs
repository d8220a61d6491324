//! The [`Outcome`] container: construction, combinators and extraction

use std::borrow::Cow;
use std::error::Error as StdError;

use crate::error::OutcomeError;

// ============================================================================
// OUTCOME
// ============================================================================

/// A computation that either produced a value or failed.
///
/// Exactly one variant holds at any time, and both are public so callers can
/// match exhaustively. Every combinator consumes the receiver and returns a
/// new `Outcome`; nothing is mutated in place.
///
/// A failure carries an [`OutcomeError`] payload and propagates untouched
/// through the success-side combinators ([`map`](Self::map),
/// [`and_then`](Self::and_then) and the rest) until it is transformed by a
/// failure-side combinator or extracted.
///
/// ```
/// use nebula_outcome::Outcome;
///
/// let doubled = Outcome::capture(|| "7".parse::<i32>()).map(|n| n * 2);
/// assert_eq!(doubled.success(), Some(14));
/// ```
#[must_use = "an `Outcome` may be a `Failure`, which should be handled"]
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed; the payload records why.
    Failure(OutcomeError),
}

impl<T> Outcome<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Run `producer` and fold its result into an `Outcome`.
    ///
    /// An `Err` is captured verbatim into the failure payload; the original
    /// error stays reachable through
    /// [`OutcomeError::downcast_ref`] and the `source` chain.
    ///
    /// ```
    /// use nebula_outcome::Outcome;
    ///
    /// let ok = Outcome::capture(|| "42".parse::<i32>());
    /// assert_eq!(ok.success(), Some(42));
    ///
    /// let bad = Outcome::capture(|| "forty-two".parse::<i32>());
    /// assert!(bad.is_failure());
    /// ```
    pub fn capture<F, E>(producer: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: StdError + Send + Sync + 'static,
    {
        match producer() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(OutcomeError::from_error(error)),
        }
    }

    /// Run `producer`, substituting the payload from `substitute` when it
    /// fails.
    ///
    /// The producer's error is chained onto the substitute as its primary
    /// cause, so nothing about the original failure is lost. `substitute`
    /// is not invoked on success.
    ///
    /// ```
    /// use nebula_outcome::{Outcome, OutcomeError};
    ///
    /// let outcome = Outcome::capture_or_else(
    ///     || "eight".parse::<u16>(),
    ///     || OutcomeError::new("listener port is unreadable"),
    /// );
    /// let error = outcome.expect_failure("the parse cannot succeed");
    /// assert_eq!(error.message(), "listener port is unreadable");
    /// assert!(error.downcast_ref::<std::num::ParseIntError>().is_some());
    /// ```
    pub fn capture_or_else<F, E, S>(producer: F, substitute: S) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: StdError + Send + Sync + 'static,
        S: FnOnce() -> OutcomeError,
    {
        match producer() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(substitute().with_source(error)),
        }
    }

    /// Run a producer whose success carries an optional value.
    ///
    /// `Ok(None)` becomes the canonical absence failure: a missing value is
    /// never treated as a success.
    ///
    /// ```
    /// use nebula_outcome::Outcome;
    ///
    /// let missing = Outcome::capture_some(|| "7".parse::<i32>().map(|n| (n > 10).then_some(n)));
    /// assert!(missing.as_failure().is_some_and(|error| error.is_absent()));
    /// ```
    pub fn capture_some<F, E>(producer: F) -> Self
    where
        F: FnOnce() -> Result<Option<T>, E>,
        E: StdError + Send + Sync + 'static,
    {
        match producer() {
            Ok(Some(value)) => Self::Success(value),
            Ok(None) => Self::Failure(OutcomeError::absent()),
            Err(error) => Self::Failure(OutcomeError::from_error(error)),
        }
    }

    /// Like [`capture_some`](Self::capture_some), but both failure paths go
    /// through `substitute`.
    ///
    /// An empty carrier yields the substitute payload as-is; a raised error
    /// yields it with the error chained as the primary cause.
    pub fn capture_some_or_else<F, E, S>(producer: F, substitute: S) -> Self
    where
        F: FnOnce() -> Result<Option<T>, E>,
        E: StdError + Send + Sync + 'static,
        S: FnOnce() -> OutcomeError,
    {
        match producer() {
            Ok(Some(value)) => Self::Success(value),
            Ok(None) => Self::Failure(substitute()),
            Err(error) => Self::Failure(substitute().with_source(error)),
        }
    }

    /// Fold an optional value, treating `None` as the absence failure.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure(OutcomeError::absent()),
        }
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Whether this outcome holds a value.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this outcome holds a failure payload.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // ========================================================================
    // Combinators
    // ========================================================================

    /// Transform the success value, leaving failures untouched.
    ///
    /// The mapper never runs in the failure state.
    pub fn map<R, F>(self, mapper: F) -> Outcome<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => Outcome::Success(mapper(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the success value with a mapper that can itself fail.
    ///
    /// A mapper error is captured exactly like a
    /// [`capture`](Self::capture) error.
    ///
    /// ```
    /// use nebula_outcome::Outcome;
    ///
    /// let parsed = Outcome::Success("21").try_map(|text| text.parse::<i32>());
    /// assert_eq!(parsed.map(|n| n * 2).success(), Some(42));
    /// ```
    pub fn try_map<R, E, F>(self, mapper: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Result<R, E>,
        E: StdError + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => match mapper(value) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(error) => Outcome::Failure(OutcomeError::from_error(error)),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the success value with a mapper that can produce nothing.
    ///
    /// A `None` from the mapper becomes the canonical absence failure.
    pub fn map_some<R, F>(self, mapper: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Option<R>,
    {
        match self {
            Self::Success(value) => match mapper(value) {
                Some(mapped) => Outcome::Success(mapped),
                None => Outcome::Failure(OutcomeError::absent()),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain another outcome-producing step onto a success.
    ///
    /// A failure short-circuits: `next` never runs and the payload moves
    /// through unchanged.
    ///
    /// ```
    /// use nebula_outcome::Outcome;
    ///
    /// fn parse(text: &str) -> Outcome<i32> {
    ///     Outcome::capture(|| text.parse())
    /// }
    ///
    /// let outcome = parse("6").and_then(|n| parse("7").map(|m| n * m));
    /// assert_eq!(outcome.success(), Some(42));
    /// ```
    pub fn and_then<R, F>(self, next: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Outcome<R>,
    {
        match self {
            Self::Success(value) => next(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Annotate a failure with `message`, keeping the previous payload as
    /// the primary cause. No-op on success.
    ///
    /// ```
    /// use nebula_outcome::Outcome;
    ///
    /// let error = Outcome::capture(|| "x".parse::<i32>())
    ///     .context("reading retry budget")
    ///     .expect_failure("the parse cannot succeed");
    /// assert_eq!(error.message(), "reading retry budget");
    /// assert!(error.cause().is_some());
    /// ```
    pub fn context(self, message: impl Into<Cow<'static, str>>) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(error.with_context(message)),
        }
    }

    /// Replace a failure payload with `substitute()`, filing the previous
    /// payload as a suppressed cause. No-op on success.
    ///
    /// Unlike [`context`](Self::context), the previous payload does not
    /// become the primary cause: the substitute stands on its own and the
    /// original is kept as secondary evidence.
    pub fn context_with<S>(self, substitute: S) -> Self
    where
        S: FnOnce() -> OutcomeError,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(substitute().with_suppressed(error)),
        }
    }

    /// Conditionally apply [`context_with`](Self::context_with).
    ///
    /// The predicate is consulted only in the failure state; when it
    /// declines, the payload moves through unchanged.
    pub fn context_if<P, S>(self, predicate: P, substitute: S) -> Self
    where
        P: FnOnce(&OutcomeError) -> bool,
        S: FnOnce() -> OutcomeError,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => {
                if predicate(&error) {
                    Self::Failure(substitute().with_suppressed(error))
                } else {
                    Self::Failure(error)
                }
            }
        }
    }

    /// Rewrite the failure payload with an arbitrary transformation. No-op
    /// on success.
    pub fn map_failure<F>(self, mapper: F) -> Self
    where
        F: FnOnce(OutcomeError) -> OutcomeError,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(mapper(error)),
        }
    }

    // ========================================================================
    // Extraction
    // ========================================================================

    /// The success value, if any.
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure payload, if any.
    #[inline]
    pub fn failure(self) -> Option<OutcomeError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrow the success value, if any.
    #[inline]
    #[must_use]
    pub const fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure payload, if any.
    #[inline]
    #[must_use]
    pub const fn as_failure(&self) -> Option<&OutcomeError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// The success value, or `default` verbatim.
    ///
    /// The default is not inspected: when `T` is itself an `Option`, a
    /// `None` default comes back untouched.
    ///
    /// ```
    /// use nebula_outcome::Outcome;
    ///
    /// let port = Outcome::capture(|| "eight".parse::<u16>()).unwrap_or(8080);
    /// assert_eq!(port, 8080);
    /// ```
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// The success value, or the fallback computed from the failure payload.
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(OutcomeError) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    /// The success value, or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// The success value.
    ///
    /// # Panics
    ///
    /// Panics in the failure state, rendering the payload's full cause
    /// chain. Reserved for call sites where a failure is a bug; everywhere
    /// else use [`into_result`](Self::into_result) or the `unwrap_or`
    /// family.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `Outcome::unwrap()` on a failure: {error:#}")
            }
        }
    }

    /// The failure payload as a plain value.
    ///
    /// # Panics
    ///
    /// Panics with `message` in the success state. The inverse assertion of
    /// [`unwrap`](Self::unwrap): the caller claims this outcome must have
    /// failed.
    #[track_caller]
    pub fn expect_failure(self, message: &str) -> OutcomeError {
        match self {
            Self::Success(_) => panic!("{message}"),
            Self::Failure(error) => error,
        }
    }

    /// Hand the outcome to `Result`-based code.
    ///
    /// This is the raise point: a failure becomes an `Err` for `?` to
    /// propagate.
    ///
    /// ```
    /// use nebula_outcome::{Outcome, OutcomeError};
    ///
    /// fn parse_port(text: &str) -> Result<u16, OutcomeError> {
    ///     Outcome::capture(|| text.parse::<u16>())
    ///         .context("parsing listener port")
    ///         .into_result()
    /// }
    ///
    /// assert!(parse_port("8080").is_ok());
    /// assert!(parse_port("eight").is_err());
    /// ```
    pub fn into_result(self) -> Result<T, OutcomeError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// [`into_result`](Self::into_result) with a final
    /// [`context`](Self::context) annotation on the failure path.
    pub fn into_result_context(
        self,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<T, OutcomeError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error.with_context(message)),
        }
    }

    /// [`into_result`](Self::into_result) with a substituted payload on the
    /// failure path; the original payload is filed as suppressed, exactly as
    /// in [`context_with`](Self::context_with).
    pub fn into_result_with<S>(self, substitute: S) -> Result<T, OutcomeError>
    where
        S: FnOnce() -> OutcomeError,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(substitute().with_suppressed(error)),
        }
    }
}

// ============================================================================
// SERDE
// ============================================================================

// Serialize-only, mirroring the payload: a failed outcome cannot be
// deserialized back into one that holds its captured errors.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Outcome<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Outcome", 2)?;
        match self {
            Self::Success(value) => {
                state.serialize_field("status", "success")?;
                state.serialize_field("value", value)?;
            }
            Self::Failure(error) => {
                state.serialize_field("status", "failure")?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
