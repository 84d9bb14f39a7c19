//! Small combinators for writing expression-oriented code.
//!
//! These helpers delegate straight to the functions they are given; none of
//! them keep state. Most are extension traits with blanket impls, so
//! importing the trait is enough to use the method on any value:
//!
//! - [`Pipe`], [`SameMap`], [`PipeAsync`]: apply a function in method position
//! - [`Tee`], [`TeeFutureExt`]: side effects that hand the value back, optionally
//!   behind a condition
//! - [`using`], [`using2`] and their async forms: scoped resources
//! - [`MakeOption`], [`MakeEither`] and their future forms: build `Option` and
//!   [`Either`](crate::control::Either) values from predicates
//! - [`EitherFutureExt`]: match, map and bind the left side of a future's `Either`
//! - [`combine`], [`Do`], [`ForEachSome`]
//!
//! Items that take or return futures need the `async` feature.
//!
//! # Examples
//!
//! ```rust
//! use functional_utils::control::Either;
//! use functional_utils::functional::{MakeEither, Pipe, Tee};
//!
//! let mut audit = Vec::new();
//! let outcome = " 42 "
//!     .pipe(str::trim)
//!     .tee(|text| audit.push(text.to_string()))
//!     .make_either(|text| text.is_empty(), "blank input");
//!
//! assert_eq!(outcome, Either::Right("42"));
//! assert_eq!(audit, vec!["42"]);
//! ```

mod combine;
mod do_action;
#[cfg(feature = "async")]
mod either_future;
mod for_each;
mod make_either;
mod make_option;
mod pipe;
mod tee;
mod using;

pub use combine::combine;
pub use do_action::Do;
#[cfg(feature = "async")]
pub use either_future::EitherFutureExt;
pub use for_each::ForEachSome;
pub use make_either::MakeEither;
#[cfg(feature = "async")]
pub use make_either::MakeEitherFutureExt;
pub use make_option::MakeOption;
#[cfg(feature = "async")]
pub use make_option::MakeOptionFutureExt;
#[cfg(feature = "async")]
pub use pipe::PipeAsync;
pub use pipe::{Pipe, SameMap};
pub use tee::Tee;
#[cfg(feature = "async")]
pub use tee::TeeFutureExt;
pub use using::{using, using2};
#[cfg(feature = "async")]
pub use using::{using_async, using2_async};
