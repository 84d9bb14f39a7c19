//! A two-case disjoint union.
//!
//! `Either<L, R>` is the collaborator type the `functional` helpers build
//! and consume. By convention `Right` holds the expected value and `Left`
//! the alternative (often an error), which is why the eliminator
//! [`Either::match_with`] takes the right-hand handler first.
//!
//! # Examples
//!
//! ```rust
//! use functional_utils::control::Either;
//!
//! let parsed: Either<String, i32> = "42"
//!     .parse::<i32>()
//!     .map_err(|error| error.to_string())
//!     .into();
//!
//! let message = parsed.match_with(|number| format!("got {number}"), |error| error);
//! assert_eq!(message, "got 42");
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The alternative, conventionally a failure.
    Left(L),
    /// The expected value.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into `Some(l)` for `Left(l)`, otherwise `None`.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Some(r)` for `Right(r)`, otherwise `None`.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the contents as an `Either` of references.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the left value, leaving a right value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::control::Either;
    ///
    /// let failure: Either<&str, i32> = Either::Left("boom");
    /// assert_eq!(failure.map_left(str::len), Either::Left(4));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the right value, leaving a left value untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Chains a computation on the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::control::Either;
    ///
    /// fn halve(value: i32) -> Either<String, i32> {
    ///     if value % 2 == 0 {
    ///         Either::Right(value / 2)
    ///     } else {
    ///         Either::Left(format!("{value} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Either::Right(8).bind(halve).bind(halve), Either::Right(2));
    /// assert_eq!(Either::Right(6).bind(halve).bind(halve), Either::Left("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Chains a computation on the left value, allowing recovery or a
    /// change of the left type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::control::Either;
    ///
    /// let missing: Either<&str, u32> = Either::Left("missing");
    /// let recovered: Either<String, u32> = missing.bind_left(|_| Either::Right(0));
    /// assert_eq!(recovered, Either::Right(0));
    /// ```
    #[inline]
    pub fn bind_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Eliminates the `Either`, handling `Left` with the first function.
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Eliminates the `Either`, handling `Right` with the first function.
    ///
    /// Same as [`fold`](Self::fold) with the handlers swapped, so call sites
    /// read "on success, on failure".
    #[inline]
    pub fn match_with<T, F, G>(self, on_right: F, on_left: G) -> T
    where
        F: FnOnce(R) -> T,
        G: FnOnce(L) -> T,
    {
        self.fold(on_left, on_right)
    }

    /// Swaps `Left` and `Right`.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the right value, or `default` for a `Left`.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the left value, or `default` for a `Right`.
    #[inline]
    pub fn left_or(self, default: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => default,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_match_with_prefers_right_handler_first() {
        let right: Either<usize, &str> = Either::Right("ok");
        let left: Either<usize, &str> = Either::Left(7);

        assert_eq!(right.match_with(str::len, |n| n), 2);
        assert_eq!(left.match_with(str::len, |n| n), 7);
    }

    #[rstest]
    fn test_bind_short_circuits_on_left() {
        let called = Cell::new(false);
        let left: Either<&str, i32> = Either::Left("stop");

        let result = left.bind(|value| {
            called.set(true);
            Either::Right(value + 1)
        });

        assert_eq!(result, Either::Left("stop"));
        assert!(!called.get());
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }
}
