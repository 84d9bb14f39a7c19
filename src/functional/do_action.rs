//! Terminating a chain with an action.

#[cfg(feature = "async")]
use std::future::Future;

/// Consumes a value with an action, ending a method chain.
///
/// # Examples
///
/// ```rust
/// use functional_utils::functional::{Do, Pipe};
///
/// let mut log = Vec::new();
/// 3.pipe(|value| value * 3).do_with(|value| log.push(value));
/// assert_eq!(log, vec![9]);
/// ```
pub trait Do: Sized {
    /// Calls `action(self)`.
    #[inline]
    fn do_with<F>(self, action: F)
    where
        F: FnOnce(Self),
    {
        action(self);
    }

    /// Returns the future produced by `action(self)`.
    #[cfg(feature = "async")]
    #[inline]
    fn do_with_async<F, Fut>(self, action: F) -> Fut
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = ()>,
    {
        action(self)
    }
}

impl<T> Do for T {}
