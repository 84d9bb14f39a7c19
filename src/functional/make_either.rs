//! Building `Either` values from plain values and predicates.

#[cfg(feature = "async")]
use std::future::Future;

use crate::control::Either;

/// Splits a value into `Left` or `Right` with a predicate.
///
/// The value becomes `Right` unless `left_when` accepts it, in which case
/// the supplied left value is produced instead.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::Either;
/// use functional_utils::functional::MakeEither;
///
/// let age = 17.make_either(|age| *age < 18, "too young");
/// assert_eq!(age, Either::Left("too young"));
///
/// let checked = 30.make_either_with(
///     |age| age * 12,
///     |age| *age < 18,
///     |age| format!("{age} is too young"),
/// );
/// assert_eq!(checked, Either::Right(360));
/// ```
pub trait MakeEither: Sized {
    /// Returns `Left(left_value)` if `left_when(&self)` holds, otherwise
    /// `Right(self)`.
    #[inline]
    fn make_either<L, P>(self, left_when: P, left_value: L) -> Either<L, Self>
    where
        P: FnOnce(&Self) -> bool,
    {
        if left_when(&self) {
            Either::Left(left_value)
        } else {
            Either::Right(self)
        }
    }

    /// Like [`make_either`](Self::make_either), but builds the left value
    /// lazily and only when it is needed.
    #[inline]
    fn make_either_else<L, P, G>(self, left_when: P, left: G) -> Either<L, Self>
    where
        P: FnOnce(&Self) -> bool,
        G: FnOnce() -> L,
    {
        if left_when(&self) {
            Either::Left(left())
        } else {
            Either::Right(self)
        }
    }

    /// Returns `Left(left(self))` if `left_when(&self)` holds, otherwise
    /// `Right(map(self))`. Exactly one of `map` and `left` is called, so
    /// `left` never runs for a value that is kept.
    #[inline]
    fn make_either_with<L, R, M, P, G>(self, map: M, left_when: P, left: G) -> Either<L, R>
    where
        M: FnOnce(Self) -> R,
        P: FnOnce(&Self) -> bool,
        G: FnOnce(Self) -> L,
    {
        if left_when(&self) {
            Either::Left(left(self))
        } else {
            Either::Right(map(self))
        }
    }
}

impl<T> MakeEither for T {}

/// [`MakeEither`] applied to the output of a future.
#[cfg(feature = "async")]
pub trait MakeEitherFutureExt: Future + Sized {
    /// Awaits `self`, then applies [`MakeEither::make_either`].
    fn make_either_async<L, P>(
        self,
        left_when: P,
        left_value: L,
    ) -> impl Future<Output = Either<L, Self::Output>>
    where
        P: FnOnce(&Self::Output) -> bool,
    {
        async move { self.await.make_either(left_when, left_value) }
    }

    /// Awaits `self`, then applies [`MakeEither::make_either_else`].
    fn make_either_else_async<L, P, G>(
        self,
        left_when: P,
        left: G,
    ) -> impl Future<Output = Either<L, Self::Output>>
    where
        P: FnOnce(&Self::Output) -> bool,
        G: FnOnce() -> L,
    {
        async move { self.await.make_either_else(left_when, left) }
    }

    /// Awaits `self`, then applies [`MakeEither::make_either_with`].
    fn make_either_with_async<L, R, M, P, G>(
        self,
        map: M,
        left_when: P,
        left: G,
    ) -> impl Future<Output = Either<L, R>>
    where
        M: FnOnce(Self::Output) -> R,
        P: FnOnce(&Self::Output) -> bool,
        G: FnOnce(Self::Output) -> L,
    {
        async move { self.await.make_either_with(map, left_when, left) }
    }
}

#[cfg(feature = "async")]
impl<T: Future> MakeEitherFutureExt for T {}
