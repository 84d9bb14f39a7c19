//! Stack-safe tail recursion for synchronous step functions.
//!
//! A tail-recursive function written against this module returns a
//! [`RecursionResult`] instead of calling itself directly. Each result is
//! either the final value or a continuation that produces the next step.
//! [`execute`] drives the chain in a loop, so the depth of the recursion no
//! longer depends on the size of the call stack.
//!
//! Rust does not guarantee tail call optimization, so a naive recursive
//! function that counts down from `1_000_000` overflows the stack. The same
//! function expressed as a chain of continuations runs in constant stack
//! space.
//!
//! # Examples
//!
//! ```rust
//! use functional_utils::control::{RecursionResult, continue_with, execute, return_value};
//!
//! fn sum_to(n: u64, accumulator: u64) -> RecursionResult<u64> {
//!     if n == 0 {
//!         return_value(accumulator)
//!     } else {
//!         continue_with(move || sum_to(n - 1, accumulator + n))
//!     }
//! }
//!
//! assert_eq!(execute(|| sum_to(100_000, 0)), 5_000_050_000);
//! ```
//!
//! # Termination
//!
//! The driver has no iteration cap. A chain that never produces
//! [`RecursionResult::Done`] loops forever, exactly as the equivalent
//! unbounded recursion would, only without growing the stack. Use
//! [`execute_with_limit`] when the input is untrusted.

use std::fmt;

use super::error::StepLimitExceeded;

/// Boxed continuation stored in [`RecursionResult::Next`].
pub type Continuation<T> = Box<dyn FnOnce() -> RecursionResult<T> + 'static>;

/// One step of a synchronous tail-recursive computation.
///
/// A `RecursionResult<T>` is either the final value of the computation or a
/// continuation that produces the next step. Values are immutable once
/// built and are consumed exactly once by the driver.
///
/// The continuation is not required to be `Send`, so neither is this type.
/// See [`AsyncRecursionResult`](super::AsyncRecursionResult) for the variant
/// that can cross threads.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::RecursionResult;
///
/// let finished = RecursionResult::done(42);
/// assert!(finished.is_done());
/// assert_eq!(finished.run(), 42);
///
/// let pending = RecursionResult::next(|| RecursionResult::done(42));
/// assert!(pending.is_next());
/// assert_eq!(pending.run(), 42);
/// ```
pub enum RecursionResult<T> {
    /// The computation has finished with this value.
    Done(T),
    /// The computation continues with the boxed step.
    Next(Continuation<T>),
}

impl<T> RecursionResult<T> {
    /// Creates a terminal result carrying `value`.
    #[inline]
    pub const fn done(value: T) -> Self {
        Self::Done(value)
    }

    /// Creates a non-terminal result.
    ///
    /// The continuation is not invoked here; the driver calls it when it
    /// reaches this step.
    #[inline]
    pub fn next<F>(continuation: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::Next(Box::new(continuation))
    }

    /// Returns `true` if this is a terminal result.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Returns `true` if this result carries a continuation.
    #[inline]
    pub const fn is_next(&self) -> bool {
        matches!(self, Self::Next(_))
    }

    /// Returns a reference to the final value, if this is terminal.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Done(value) => Some(value),
            Self::Next(_) => None,
        }
    }

    /// Converts into the final value, discarding any continuation unrun.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Done(value) => Some(value),
            Self::Next(_) => None,
        }
    }

    /// Runs the chain starting at this step and returns the final value.
    ///
    /// This is [`execute`] for a result that is already in hand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::control::RecursionResult;
    ///
    /// fn count_down(n: u64) -> RecursionResult<u64> {
    ///     if n == 0 {
    ///         RecursionResult::done(0)
    ///     } else {
    ///         RecursionResult::next(move || count_down(n - 1))
    ///     }
    /// }
    ///
    /// assert_eq!(count_down(100_000).run(), 0);
    /// ```
    pub fn run(self) -> T {
        let mut current = self;
        #[cfg(feature = "tracing")]
        let mut steps: u64 = 1;

        loop {
            match current {
                Self::Done(value) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(steps, "tail recursion completed");
                    return value;
                }
                Self::Next(continuation) => {
                    current = continuation();
                    #[cfg(feature = "tracing")]
                    {
                        steps += 1;
                    }
                }
            }
        }
    }
}

impl<T, E> RecursionResult<Result<T, E>> {
    /// Creates a terminal result carrying `Err(error)`.
    ///
    /// Fallible recursions use `Result` as the value type. A failed step
    /// ends the chain like any other terminal result, so no later step runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::control::{RecursionResult, execute};
    ///
    /// fn parse_all(items: Vec<&'static str>, index: usize, total: i64) -> RecursionResult<Result<i64, String>> {
    ///     match items.get(index).copied() {
    ///         None => RecursionResult::done(Ok(total)),
    ///         Some(item) => match item.parse::<i64>() {
    ///             Ok(number) => RecursionResult::next(move || parse_all(items, index + 1, total + number)),
    ///             Err(_) => RecursionResult::fail(format!("not a number: {item}")),
    ///         },
    ///     }
    /// }
    ///
    /// assert_eq!(execute(|| parse_all(vec!["1", "2", "3"], 0, 0)), Ok(6));
    /// assert_eq!(
    ///     execute(|| parse_all(vec!["1", "x", "3"], 0, 0)),
    ///     Err("not a number: x".to_string())
    /// );
    /// ```
    #[inline]
    pub const fn fail(error: E) -> Self {
        Self::Done(Err(error))
    }
}

impl<T: fmt::Debug> fmt::Debug for RecursionResult<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Next(_) => formatter
                .debug_tuple("Next")
                .field(&"<continuation>")
                .finish(),
        }
    }
}

/// Wraps `value` as a terminal result.
///
/// Reads better than `RecursionResult::done` at the end of a recursive
/// function.
#[inline]
pub const fn return_value<T>(value: T) -> RecursionResult<T> {
    RecursionResult::done(value)
}

/// Wraps `next` as the continuation of a non-terminal result.
#[inline]
pub fn continue_with<T, F>(next: F) -> RecursionResult<T>
where
    F: FnOnce() -> RecursionResult<T> + 'static,
{
    RecursionResult::next(next)
}

/// Runs a tail-recursive computation in constant stack space.
///
/// Calls `step`, then keeps invoking the continuation carried by each
/// non-terminal result until a terminal one appears, and returns its value.
/// A panic raised by any step unwinds out of this function unchanged, and
/// no later step is invoked.
///
/// The loop has no iteration cap: a chain that never terminates never
/// returns. See [`execute_with_limit`] for a bounded variant.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::{RecursionResult, continue_with, execute, return_value};
///
/// fn first_above(n: u64, threshold: u64) -> RecursionResult<u64> {
///     if n > threshold {
///         return_value(n)
///     } else {
///         continue_with(move || first_above(n + 1, threshold))
///     }
/// }
///
/// assert_eq!(execute(|| first_above(0, 0)), 1);
/// ```
pub fn execute<T, F>(step: F) -> T
where
    F: FnOnce() -> RecursionResult<T>,
{
    step().run()
}

/// Runs a tail-recursive computation, invoking at most `max_steps` steps.
///
/// Returns `Err(StepLimitExceeded)` if the chain has not produced a terminal
/// result after `max_steps` invocations; the pending continuation is dropped
/// without being called. With `max_steps == 0`, `step` is never invoked.
///
/// # Errors
///
/// Returns [`StepLimitExceeded`] when the chain needs more than `max_steps`
/// step invocations.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::{RecursionResult, continue_with, execute_with_limit, return_value};
///
/// fn forever() -> RecursionResult<()> {
///     continue_with(forever)
/// }
///
/// let error = execute_with_limit(forever, 1_000).unwrap_err();
/// assert_eq!(error.max_steps, 1_000);
///
/// assert_eq!(execute_with_limit(|| return_value(7), 1), Ok(7));
/// ```
pub fn execute_with_limit<T, F>(step: F, max_steps: usize) -> Result<T, StepLimitExceeded>
where
    F: FnOnce() -> RecursionResult<T>,
{
    if max_steps == 0 {
        return Err(StepLimitExceeded::new(max_steps));
    }

    let mut current = step();
    let mut steps: usize = 1;

    loop {
        match current {
            RecursionResult::Done(value) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(steps, "tail recursion completed");
                return Ok(value);
            }
            RecursionResult::Next(continuation) => {
                if steps >= max_steps {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(max_steps, "tail recursion step limit exceeded");
                    return Err(StepLimitExceeded::new(max_steps));
                }
                current = continuation();
                steps += 1;
            }
        }
    }
}

static_assertions::assert_not_impl_any!(RecursionResult<i32>: Send, Sync);
