//! Side effects in the middle of a method chain.
//!
//! Every `tee` variant hands back the value it was called on (or, for
//! [`Tee::tee_map`] and [`Tee::tee_when`], the value returned by the
//! function), so logging or bookkeeping can be spliced into a pipeline
//! without breaking it apart.

#[cfg(feature = "async")]
use std::future::Future;

/// Extension methods for running side effects on a value and passing it on.
///
/// # Examples
///
/// ```rust
/// use functional_utils::functional::Tee;
///
/// let mut seen = Vec::new();
/// let total = vec![1, 2, 3]
///     .tee(|numbers| seen.push(numbers.len()))
///     .into_iter()
///     .sum::<i32>();
///
/// assert_eq!(total, 6);
/// assert_eq!(seen, vec![3]);
/// ```
pub trait Tee: Sized {
    /// Runs `action` on a borrow of `self`, then returns `self`.
    #[inline]
    #[must_use]
    fn tee<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        action(&self);
        self
    }

    /// Replaces `self` with `function(self)`.
    #[inline]
    #[must_use]
    fn tee_map<F>(self, function: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        function(self)
    }

    /// Runs `action` on a borrow of `self` only when `when` holds.
    #[inline]
    #[must_use]
    fn tee_if<F>(self, action: F, when: bool) -> Self
    where
        F: FnOnce(&Self),
    {
        if when {
            action(&self);
        }
        self
    }

    /// Replaces `self` with `function(self)` only when `when` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::functional::Tee;
    ///
    /// assert_eq!(10.tee_when(|value| value * 2, true), 20);
    /// assert_eq!(10.tee_when(|value| value * 2, false), 10);
    /// ```
    #[inline]
    #[must_use]
    fn tee_when<F>(self, function: F, when: bool) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if when { function(self) } else { self }
    }

    /// Like [`tee_when`](Self::tee_when), with the condition computed from
    /// the value itself.
    #[inline]
    #[must_use]
    fn tee_when_with<F, P>(self, function: F, predicate: P) -> Self
    where
        F: FnOnce(Self) -> Self,
        P: FnOnce(&Self) -> bool,
    {
        let when = predicate(&self);
        self.tee_when(function, when)
    }

    /// Awaits `action` when `when` holds, then resolves to `self`.
    ///
    /// The future returned by `action` cannot borrow the value; clone what
    /// it needs.
    #[cfg(feature = "async")]
    fn tee_when_async<F, Fut>(self, action: F, when: bool) -> impl Future<Output = Self>
    where
        F: FnOnce(&Self) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            if when {
                action(&self).await;
            }
            self
        }
    }

    /// Like [`tee_when_async`](Self::tee_when_async), with the condition
    /// computed from the value itself.
    #[cfg(feature = "async")]
    fn tee_when_async_with<F, Fut, P>(self, action: F, predicate: P) -> impl Future<Output = Self>
    where
        F: FnOnce(&Self) -> Fut,
        Fut: Future<Output = ()>,
        P: FnOnce(&Self) -> bool,
    {
        let when = predicate(&self);
        self.tee_when_async(action, when)
    }

    /// Replaces `self` with the output of `function(self)` when `when`
    /// holds; otherwise resolves to `self` without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::functional::Tee;
    ///
    /// let doubled = futures::executor::block_on(
    ///     21.tee_when_map_async(|value| async move { value * 2 }, true),
    /// );
    /// assert_eq!(doubled, 42);
    /// ```
    #[cfg(feature = "async")]
    fn tee_when_map_async<F, Fut>(self, function: F, when: bool) -> impl Future<Output = Self>
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Self>,
    {
        async move { if when { function(self).await } else { self } }
    }

    /// Like [`tee_when_map_async`](Self::tee_when_map_async), with the
    /// condition computed from the value itself.
    #[cfg(feature = "async")]
    fn tee_when_map_async_with<F, Fut, P>(
        self,
        function: F,
        predicate: P,
    ) -> impl Future<Output = Self>
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Self>,
        P: FnOnce(&Self) -> bool,
    {
        let when = predicate(&self);
        self.tee_when_map_async(function, when)
    }
}

impl<T> Tee for T {}

/// Side effects on the output of a future.
///
/// # Examples
///
/// ```rust
/// use functional_utils::functional::TeeFutureExt;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let audited = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&audited);
///
/// let value = futures::executor::block_on(
///     async { 7 }.then_tee_when(
///         move |value| {
///             counter.fetch_add(*value, Ordering::SeqCst);
///             async {}
///         },
///         |value| *value > 5,
///     ),
/// );
///
/// assert_eq!(value, 7);
/// assert_eq!(audited.load(Ordering::SeqCst), 7);
/// ```
#[cfg(feature = "async")]
pub trait TeeFutureExt: Future + Sized {
    /// Awaits `self`; if `predicate` accepts the output, awaits `action` on
    /// it. Resolves to the output either way.
    fn then_tee_when<F, Fut, P>(self, action: F, predicate: P) -> impl Future<Output = Self::Output>
    where
        F: FnOnce(&Self::Output) -> Fut,
        Fut: Future<Output = ()>,
        P: FnOnce(&Self::Output) -> bool,
    {
        async move {
            let value = self.await;
            if predicate(&value) {
                action(&value).await;
            }
            value
        }
    }
}

#[cfg(feature = "async")]
impl<T: Future> TeeFutureExt for T {}
