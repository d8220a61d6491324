//! Failure payload carried by [`Outcome`](crate::Outcome) values
//!
//! [`OutcomeError`] is deliberately opaque: it has a message, causes and
//! suppressed causes, but no taxonomy of kinds. Code that needs to react to
//! a specific underlying error reaches through
//! [`downcast_ref`](OutcomeError::downcast_ref) instead of matching on
//! variants.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Message carried by every absence failure.
const ABSENT_MESSAGE: &str = "no value provided";

// ============================================================================
// FAILURE PAYLOAD
// ============================================================================

/// Failure payload of an [`Outcome::Failure`](crate::Outcome::Failure).
///
/// A payload always has a message. Beyond that it can embody a captured
/// foreign error (the error a producer returned, kept verbatim), wrap a
/// previous payload as its *primary cause*, and record any number of
/// *suppressed* secondary causes. The primary and suppressed slots are
/// independent: [`Outcome::context`](crate::Outcome::context) chains through
/// the primary slot, while
/// [`Outcome::context_with`](crate::Outcome::context_with) substitutes the
/// payload and files the old one under suppressed.
///
/// Captured errors are shared behind an [`Arc`], which keeps the payload
/// cheap to clone.
#[derive(Debug, Clone)]
pub struct OutcomeError {
    message: Cow<'static, str>,
    /// Foreign error this payload embodies. The message mirrors its
    /// `Display` output when set by [`from_error`](Self::from_error).
    captured: Option<Arc<dyn StdError + Send + Sync>>,
    /// Previous payload in the primary-cause chain.
    cause: Option<Box<OutcomeError>>,
    suppressed: Vec<OutcomeError>,
    absent: bool,
}

impl OutcomeError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a payload with the given message and no cause.
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            captured: None,
            cause: None,
            suppressed: Vec::new(),
            absent: false,
        }
    }

    /// The canonical "a value was expected but none was provided" failure.
    #[must_use]
    pub fn absent() -> Self {
        Self {
            message: Cow::Borrowed(ABSENT_MESSAGE),
            captured: None,
            cause: None,
            suppressed: Vec::new(),
            absent: true,
        }
    }

    /// Capture a foreign error verbatim.
    ///
    /// The payload's message mirrors the error's `Display` output and the
    /// error itself stays reachable through [`captured`](Self::captured) and
    /// [`downcast_ref`](Self::downcast_ref). An [`OutcomeError`] passed in
    /// here is adopted unchanged instead of being wrapped a second time.
    ///
    /// ```
    /// use nebula_outcome::OutcomeError;
    ///
    /// let error = OutcomeError::from_error("nope".parse::<u16>().unwrap_err());
    /// assert_eq!(error.code(), "CAPTURED_ERROR");
    /// assert!(error.downcast_ref::<std::num::ParseIntError>().is_some());
    /// ```
    #[must_use]
    pub fn from_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(error);
        match boxed.downcast::<Self>() {
            Ok(adopted) => *adopted,
            Err(foreign) => Self {
                message: Cow::Owned(foreign.to_string()),
                captured: Some(Arc::from(foreign)),
                cause: None,
                suppressed: Vec::new(),
                absent: false,
            },
        }
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Wrap this payload in a new one carrying `message`.
    ///
    /// `self` becomes the primary cause of the returned payload.
    #[must_use]
    pub fn with_context(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            captured: None,
            cause: Some(Box::new(self)),
            suppressed: Vec::new(),
            absent: false,
        }
    }

    /// Attach `error` as the primary cause, replacing any existing one.
    ///
    /// The error is captured the same way [`from_error`](Self::from_error)
    /// captures it, so an [`OutcomeError`] source is linked directly.
    #[must_use]
    pub fn with_source<E>(mut self, error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Box::new(Self::from_error(error)));
        self
    }

    /// Record `error` as a suppressed (secondary) cause.
    ///
    /// Suppressed causes do not participate in the primary-cause chain; they
    /// answer "what else went wrong around this failure".
    #[must_use]
    pub fn with_suppressed(mut self, error: Self) -> Self {
        self.suppressed.push(error);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The payload's own message, without any cause chain.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this payload is the absence marker rather than a produced
    /// error.
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.absent
    }

    /// The primary cause, when this payload wraps another one.
    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }

    /// The captured foreign error this payload embodies, if any.
    #[inline]
    #[must_use]
    pub fn captured(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.captured.as_deref()
    }

    /// Suppressed causes, oldest first.
    #[inline]
    #[must_use]
    pub fn suppressed(&self) -> &[Self] {
        &self.suppressed
    }

    /// Error code for logs and monitoring, derived from the payload's
    /// structure: `ABSENT_VALUE` for the absence marker, `CAPTURED_ERROR`
    /// when the payload embodies a foreign error, `WRAPPED_FAILURE` when it
    /// wraps a previous payload and `FAILURE` otherwise.
    #[must_use]
    pub fn code(&self) -> &'static str {
        if self.absent {
            "ABSENT_VALUE"
        } else if self.captured.is_some() {
            "CAPTURED_ERROR"
        } else if self.cause.is_some() {
            "WRAPPED_FAILURE"
        } else {
            "FAILURE"
        }
    }

    // ========================================================================
    // Cause chain
    // ========================================================================

    /// Iterate over the primary-cause chain, starting with this payload.
    ///
    /// The chain follows [`source`](StdError::source) links, so it continues
    /// into the sources of captured foreign errors. Suppressed causes are
    /// not visited.
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// The last link of the primary-cause chain.
    ///
    /// When the innermost payload embodies a captured error, the root cause
    /// is that error (or the deepest of its own sources), not the payload
    /// mirroring it.
    #[must_use]
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut payload = self;
        while let Some(inner) = payload.cause.as_deref() {
            payload = inner;
        }
        match payload.captured.as_deref() {
            Some(captured) => {
                let mut error: &(dyn StdError + 'static) = captured;
                while let Some(next) = error.source() {
                    error = next;
                }
                error
            }
            None => payload,
        }
    }

    /// Search the primary-cause chain for an error of type `E`.
    ///
    /// Both wrapped payloads and captured foreign errors (including their
    /// own sources) are searched.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        let mut payload = self;
        loop {
            let erased: &(dyn StdError + 'static) = payload;
            if let Some(found) = erased.downcast_ref::<E>() {
                return Some(found);
            }
            if let Some(captured) = payload.captured.as_deref() {
                let mut error: &(dyn StdError + 'static) = captured;
                loop {
                    if let Some(found) = error.downcast_ref::<E>() {
                        return Some(found);
                    }
                    match error.source() {
                        Some(next) => error = next,
                        None => break,
                    }
                }
            }
            match payload.cause.as_deref() {
                Some(next) => payload = next,
                None => return None,
            }
        }
    }
}

// ============================================================================
// CHAIN ITERATOR
// ============================================================================

/// Iterator over a payload's primary-cause chain, created by
/// [`OutcomeError::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.source();
        Some(current)
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl fmt::Display for OutcomeError {
    // `{}` writes the message alone; `{:#}` renders the full cause chain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if f.alternate() {
            let mut source = self.source();
            while let Some(error) = source {
                write!(f, ": {error}")?;
                source = error.source();
            }
        }
        Ok(())
    }
}

impl StdError for OutcomeError {
    // A payload embodying a captured error mirrors its message, so the
    // source skips straight to the captured error's own source. Reporters
    // walking the chain then print each message exactly once.
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        if let Some(cause) = self.cause.as_deref() {
            return Some(cause);
        }
        self.captured.as_deref()?.source()
    }
}

// Serialize-only: captured foreign errors cannot be reconstructed, so the
// payload has no `Deserialize` counterpart.
#[cfg(feature = "serde")]
impl serde::Serialize for OutcomeError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let causes: Vec<String> = self.chain().skip(1).map(ToString::to_string).collect();
        let mut state = serializer.serialize_struct("OutcomeError", 4)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", self.message())?;
        state.serialize_field("causes", &causes)?;
        state.serialize_field("suppressed", &self.suppressed)?;
        state.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
