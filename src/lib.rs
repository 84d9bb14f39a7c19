//! # functional-utils
//!
//! Functional combinators and a stack-safe tail recursion trampoline.
//!
//! ## Overview
//!
//! - **Tail recursion**: [`RecursionResult`](control::RecursionResult) and
//!   [`execute`](control::execute) turn self-recursion into a loop, so the
//!   recursion depth is no longer limited by the call stack. The async
//!   forms ([`AsyncRecursionResult`](control::AsyncRecursionResult),
//!   [`execute_async`](control::execute_async)) do the same for steps that
//!   produce futures.
//! - **Either**: a two-case disjoint union used by the combinators.
//! - **Combinators**: `pipe`, `tee`, `using`, `make_option`, `make_either`
//!   and friends, each with a conditional or async variant where it makes
//!   sense.
//!
//! ## Feature Flags
//!
//! - `control`: the trampoline and `Either`
//! - `functional`: the combinators (implies `control`)
//! - `async`: async trampoline and async combinators
//! - `serde`: `Serialize`/`Deserialize` for `Either`
//! - `tracing`: trace events from the trampoline drivers
//! - `full`: everything above
//!
//! ## Example
//!
//! ```rust
//! use functional_utils::prelude::*;
//!
//! fn collatz_steps(n: u64, steps: u64) -> RecursionResult<u64> {
//!     match n {
//!         1 => return_value(steps),
//!         n if n % 2 == 0 => continue_with(move || collatz_steps(n / 2, steps + 1)),
//!         n => continue_with(move || collatz_steps(3 * n + 1, steps + 1)),
//!     }
//! }
//!
//! assert_eq!(execute(|| collatz_steps(27, 0)), 111);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use functional_utils::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "functional")]
    pub use crate::functional::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "functional")]
pub mod functional;
