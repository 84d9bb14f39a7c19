//! Stack-safe tail recursion for asynchronous step functions.
//!
//! The async counterpart of [`recursion`](super::recursion): every step is a
//! future resolving to an [`AsyncRecursionResult`]. [`execute_async`] awaits
//! the current step, then either returns the final value or moves on to the
//! continuation it carries.
//!
//! Steps run strictly one after another. The driver suspends only while
//! the current step future is pending and never starts step `N + 1` before
//! step `N` has resolved.
//!
//! # Examples
//!
//! ```rust
//! use functional_utils::control::{
//!     AsyncRecursionResult, continue_with_async, execute_async, return_value_async,
//! };
//! use futures::future::Ready;
//!
//! fn count_up(n: u64) -> Ready<AsyncRecursionResult<u64>> {
//!     if n == 0 {
//!         continue_with_async(move || count_up(n + 1))
//!     } else {
//!         return_value_async(n)
//!     }
//! }
//!
//! let result = futures::executor::block_on(execute_async(|| count_up(0)));
//! assert_eq!(result, 1);
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::FutureExt;
use futures::future::{BoxFuture, Ready};
use pin_project_lite::pin_project;

use super::error::StepLimitExceeded;

/// Boxed continuation stored in [`AsyncRecursionResult::Next`].
pub type AsyncContinuation<T> =
    Box<dyn FnOnce() -> BoxFuture<'static, AsyncRecursionResult<T>> + Send + 'static>;

/// One step of an asynchronous tail-recursive computation.
///
/// Either the final value or a continuation producing the future of the
/// next step. Unlike [`RecursionResult`](super::RecursionResult) the
/// continuation must be `Send`, so this type is `Send` whenever `T` is.
pub enum AsyncRecursionResult<T> {
    /// The computation has finished with this value.
    Done(T),
    /// The computation continues with the boxed step.
    Next(AsyncContinuation<T>),
}

impl<T> AsyncRecursionResult<T> {
    /// Creates a terminal result carrying `value`.
    #[inline]
    pub const fn done(value: T) -> Self {
        Self::Done(value)
    }

    /// Creates a non-terminal result whose continuation produces a future.
    ///
    /// The future returned by `continuation` is boxed when the driver
    /// reaches this step.
    #[inline]
    pub fn next<F, Fut>(continuation: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Self> + Send + 'static,
    {
        Self::Next(Box::new(move || continuation().boxed()))
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

    /// Drives the chain starting at this step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::control::AsyncRecursionResult;
    ///
    /// let pending = AsyncRecursionResult::next(|| async { AsyncRecursionResult::done("ready") });
    /// assert_eq!(futures::executor::block_on(pending.run()), "ready");
    /// ```
    pub fn run(self) -> ExecuteAsync<T, Ready<Self>> {
        execute_async(move || futures::future::ready(self))
    }
}

impl<T, E> AsyncRecursionResult<Result<T, E>> {
    /// Creates a terminal result carrying `Err(error)`.
    #[inline]
    pub const fn fail(error: E) -> Self {
        Self::Done(Err(error))
    }
}

impl<T: fmt::Debug> fmt::Debug for AsyncRecursionResult<T> {
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

pin_project! {
    /// Future returned by [`execute_async`].
    ///
    /// Resolves to the value carried by the first terminal step. Each poll
    /// keeps resolving steps until one is pending or the chain terminates,
    /// so a chain of already-resolved steps completes in a single poll
    /// without growing the stack.
    ///
    /// Dropping this future drops the pending step; no later step runs.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct ExecuteAsync<T, Fut> {
        #[pin]
        state: ExecuteState<T, Fut>,
        steps: u64,
    }
}

pin_project! {
    /// Driver state. Transitions are `Initial -> Continuing* -> Finished`.
    #[project = ExecuteStateProj]
    enum ExecuteState<T, Fut> {
        /// Awaiting the future produced by the caller's first step.
        Initial {
            #[pin]
            future: Fut,
        },
        /// Awaiting the future produced by a continuation.
        Continuing {
            future: BoxFuture<'static, AsyncRecursionResult<T>>,
        },
        /// A terminal step has been returned to the caller.
        Finished,
    }
}

impl<T, Fut> ExecuteAsync<T, Fut> {
    /// Number of step futures that have resolved so far.
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns `true` once the terminal value has been returned.
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, ExecuteState::Finished)
    }
}

impl<T, Fut> Future for ExecuteAsync<T, Fut>
where
    Fut: Future<Output = AsyncRecursionResult<T>>,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            let step = match this.state.as_mut().project() {
                ExecuteStateProj::Initial { future } => ready!(future.poll(context)),
                ExecuteStateProj::Continuing { future } => ready!(future.as_mut().poll(context)),
                ExecuteStateProj::Finished => {
                    panic!("`ExecuteAsync` polled after completion")
                }
            };
            *this.steps += 1;

            match step {
                AsyncRecursionResult::Done(value) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(steps = *this.steps, "async tail recursion completed");
                    this.state.set(ExecuteState::Finished);
                    return Poll::Ready(value);
                }
                AsyncRecursionResult::Next(continuation) => {
                    this.state.set(ExecuteState::Continuing {
                        future: continuation(),
                    });
                }
            }
        }
    }
}

impl<T, Fut> fmt::Debug for ExecuteAsync<T, Fut> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            ExecuteState::Initial { .. } => "Initial",
            ExecuteState::Continuing { .. } => "Continuing",
            ExecuteState::Finished => "Finished",
        };
        formatter
            .debug_struct("ExecuteAsync")
            .field("state", &state)
            .field("steps", &self.steps)
            .finish()
    }
}

/// Wraps `value` as an already-resolved terminal step.
#[inline]
pub fn return_value_async<T>(value: T) -> Ready<AsyncRecursionResult<T>> {
    futures::future::ready(AsyncRecursionResult::done(value))
}

/// Wraps `next` as an already-resolved non-terminal step.
#[inline]
pub fn continue_with_async<T, F, Fut>(next: F) -> Ready<AsyncRecursionResult<T>>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = AsyncRecursionResult<T>> + Send + 'static,
{
    futures::future::ready(AsyncRecursionResult::next(next))
}

/// Runs an asynchronous tail-recursive computation.
///
/// `step` is called immediately to obtain the first future; nothing is
/// polled until the returned [`ExecuteAsync`] is awaited. A panic inside a
/// step propagates out of the await point unchanged and no later step is
/// invoked.
///
/// Like [`execute`](super::execute), there is no iteration cap.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::{AsyncRecursionResult, execute_async};
/// use futures::FutureExt;
/// use futures::future::BoxFuture;
///
/// fn gcd(a: u64, b: u64) -> BoxFuture<'static, AsyncRecursionResult<u64>> {
///     async move {
///         if b == 0 {
///             AsyncRecursionResult::done(a)
///         } else {
///             AsyncRecursionResult::next(move || gcd(b, a % b))
///         }
///     }
///     .boxed()
/// }
///
/// assert_eq!(futures::executor::block_on(execute_async(|| gcd(1071, 462))), 21);
/// ```
pub fn execute_async<T, F, Fut>(step: F) -> ExecuteAsync<T, Fut>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = AsyncRecursionResult<T>>,
{
    ExecuteAsync {
        state: ExecuteState::Initial { future: step() },
        steps: 0,
    }
}

/// Runs an asynchronous tail-recursive computation, resolving at most
/// `max_steps` step futures.
///
/// # Errors
///
/// Returns [`StepLimitExceeded`] when the chain needs more than `max_steps`
/// steps. The pending continuation is dropped without being called, and
/// with `max_steps == 0` not even `step` is invoked.
pub async fn execute_async_with_limit<T, F, Fut>(
    step: F,
    max_steps: usize,
) -> Result<T, StepLimitExceeded>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = AsyncRecursionResult<T>>,
{
    if max_steps == 0 {
        return Err(StepLimitExceeded::new(max_steps));
    }

    let mut current = step().await;
    let mut steps: usize = 1;

    loop {
        match current {
            AsyncRecursionResult::Done(value) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(steps, "async tail recursion completed");
                return Ok(value);
            }
            AsyncRecursionResult::Next(continuation) => {
                if steps >= max_steps {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(max_steps, "async tail recursion step limit exceeded");
                    return Err(StepLimitExceeded::new(max_steps));
                }
                current = continuation().await;
                steps += 1;
            }
        }
    }
}

static_assertions::assert_impl_all!(AsyncRecursionResult<i32>: Send);
static_assertions::assert_impl_all!(AsyncRecursionResult<String>: Send);
static_assertions::assert_impl_all!(ExecuteAsync<i32, Ready<AsyncRecursionResult<i32>>>: Send);
