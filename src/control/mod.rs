//! Control structures: the tail-recursion trampoline and `Either`.
//!
//! - [`RecursionResult`] with [`execute`]: stack-safe tail recursion for
//!   synchronous step functions
//! - [`AsyncRecursionResult`] with [`execute_async`]: the same for steps
//!   that produce futures (feature `async`)
//! - [`execute_with_limit`] / `execute_async_with_limit`: bounded variants
//!   that fail with [`StepLimitExceeded`]
//! - [`Either`]: a two-case disjoint union used by the `functional` helpers
//!
//! # Examples
//!
//! ```rust
//! use functional_utils::control::{RecursionResult, continue_with, execute, return_value};
//!
//! fn is_power_of_two(n: u64) -> RecursionResult<bool> {
//!     match n {
//!         0 => return_value(false),
//!         1 => return_value(true),
//!         n if n % 2 == 1 => return_value(false),
//!         n => continue_with(move || is_power_of_two(n / 2)),
//!     }
//! }
//!
//! assert!(execute(|| is_power_of_two(1024)));
//! assert!(!execute(|| is_power_of_two(1000)));
//! ```

#[cfg(feature = "async")]
mod async_recursion;
mod either;
mod error;
mod recursion;

#[cfg(feature = "async")]
pub use async_recursion::{
    AsyncContinuation, AsyncRecursionResult, ExecuteAsync, continue_with_async, execute_async,
    execute_async_with_limit, return_value_async,
};
pub use either::Either;
pub use error::StepLimitExceeded;
pub use recursion::{
    Continuation, RecursionResult, continue_with, execute, execute_with_limit, return_value,
};
