//! Applying a function to a value in method position.

#[cfg(feature = "async")]
use std::future::Future;

/// Passes `self` to a function, so a value can flow left to right through a
/// chain of calls.
///
/// Implemented for every sized type.
///
/// # Examples
///
/// ```rust
/// use functional_utils::functional::Pipe;
///
/// let length = "  padded  ".pipe(str::trim).pipe(str::len);
/// assert_eq!(length, 6);
/// ```
pub trait Pipe: Sized {
    /// Returns `function(self)`.
    #[inline]
    fn pipe<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }
}

impl<T> Pipe for T {}

/// Applies the same function to both halves of a homogeneous pair.
///
/// # Examples
///
/// ```rust
/// use functional_utils::functional::SameMap;
///
/// assert_eq!((3, 4).same_map(|side| side * side), (9, 16));
/// ```
pub trait SameMap<T> {
    /// Maps both elements, first then second.
    fn same_map<R, F>(self, function: F) -> (R, R)
    where
        F: FnMut(T) -> R;
}

impl<T> SameMap<T> for (T, T) {
    #[inline]
    fn same_map<R, F>(self, mut function: F) -> (R, R)
    where
        F: FnMut(T) -> R,
    {
        let (first, second) = self;
        let first = function(first);
        (first, function(second))
    }
}

/// Passes `self` to an asynchronous function.
///
/// For values that are already futures use
/// [`futures::FutureExt::then`] (async function) or
/// [`futures::FutureExt::map`] (plain function).
///
/// # Examples
///
/// ```rust
/// use functional_utils::functional::PipeAsync;
///
/// let doubled = futures::executor::block_on(21.pipe_async(|value| async move { value * 2 }));
/// assert_eq!(doubled, 42);
/// ```
#[cfg(feature = "async")]
pub trait PipeAsync: Sized {
    /// Returns the future produced by `function(self)`.
    #[inline]
    fn pipe_async<Fut, F>(self, function: F) -> Fut
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future,
    {
        function(self)
    }
}

#[cfg(feature = "async")]
impl<T> PipeAsync for T {}
