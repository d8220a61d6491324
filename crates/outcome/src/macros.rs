//! Convenience macros for functions returning [`Outcome`](crate::Outcome)

/// Return early with a failure.
///
/// Accepts a plain message or a format string with arguments.
///
/// ```
/// use nebula_outcome::{fail, Outcome};
///
/// fn positive(n: i64) -> Outcome<i64> {
///     if n <= 0 {
///         fail!("expected a positive number, got {}", n);
///     }
///     Outcome::Success(n)
/// }
///
/// assert_eq!(positive(3).success(), Some(3));
/// assert!(positive(-1).is_failure());
/// ```
#[macro_export]
macro_rules! fail {
    ($msg:literal) => {
        return $crate::Outcome::Failure($crate::OutcomeError::new($msg))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return $crate::Outcome::Failure($crate::OutcomeError::new(format!($fmt, $($arg)*)))
    };
}

/// Return early with a failure unless a condition holds.
///
/// ```
/// use nebula_outcome::{ensure, Outcome};
///
/// fn checked_div(a: i64, b: i64) -> Outcome<i64> {
///     ensure!(b != 0, "cannot divide {} by zero", a);
///     Outcome::Success(a / b)
/// }
///
/// assert_eq!(checked_div(8, 2).success(), Some(4));
/// assert!(checked_div(8, 0).is_failure());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !($cond) {
            $crate::fail!($msg);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::fail!($fmt, $($arg)*);
        }
    };
}
