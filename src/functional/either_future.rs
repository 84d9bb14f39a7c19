//! Eliminating and transforming `Either` values produced by futures.

use std::future::Future;

use crate::control::Either;

/// Extension methods for futures that resolve to an [`Either`].
///
/// Handlers follow the "right first" order of [`Either::match_with`].
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::Either;
/// use functional_utils::functional::EitherFutureExt;
///
/// async fn lookup(id: u32) -> Either<String, &'static str> {
///     if id == 1 { Either::Right("alice") } else { Either::Left(format!("no user {id}")) }
/// }
///
/// let greeting = futures::executor::block_on(
///     lookup(1).match_async(
///         |name| async move { format!("hello {name}") },
///         |error| async move { error },
///     ),
/// );
/// assert_eq!(greeting, "hello alice");
/// ```
pub trait EitherFutureExt<L, R>: Future<Output = Either<L, R>> + Sized {
    /// Awaits `self`, then awaits the handler for whichever side it holds.
    fn match_async<T, F, FutR, G, FutL>(self, on_right: F, on_left: G) -> impl Future<Output = T>
    where
        F: FnOnce(R) -> FutR,
        FutR: Future<Output = T>,
        G: FnOnce(L) -> FutL,
        FutL: Future<Output = T>,
    {
        async move {
            match self.await {
                Either::Right(value) => on_right(value).await,
                Either::Left(value) => on_left(value).await,
            }
        }
    }

    /// Awaits `self`; a right value goes to the async `on_right`, a left
    /// value to the synchronous `on_left`.
    fn match_right_async<T, F, FutR, G>(self, on_right: F, on_left: G) -> impl Future<Output = T>
    where
        F: FnOnce(R) -> FutR,
        FutR: Future<Output = T>,
        G: FnOnce(L) -> T,
    {
        async move {
            match self.await {
                Either::Right(value) => on_right(value).await,
                Either::Left(value) => on_left(value),
            }
        }
    }

    /// Awaits `self`; a right value goes to the synchronous `on_right`, a
    /// left value to the async `on_left`.
    fn match_left_async<T, F, G, FutL>(self, on_right: F, on_left: G) -> impl Future<Output = T>
    where
        F: FnOnce(R) -> T,
        G: FnOnce(L) -> FutL,
        FutL: Future<Output = T>,
    {
        async move {
            match self.await {
                Either::Right(value) => on_right(value),
                Either::Left(value) => on_left(value).await,
            }
        }
    }

    /// Awaits `self`, then eliminates it with synchronous handlers.
    fn match_with<T, F, G>(self, on_right: F, on_left: G) -> impl Future<Output = T>
    where
        F: FnOnce(R) -> T,
        G: FnOnce(L) -> T,
    {
        async move { self.await.match_with(on_right, on_left) }
    }

    /// Awaits `self` and transforms a left value with an async function.
    /// A right value passes through without calling `function`.
    fn map_left_async<M, F, Fut>(self, function: F) -> impl Future<Output = Either<M, R>>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = M>,
    {
        async move {
            match self.await {
                Either::Left(value) => Either::Left(function(value).await),
                Either::Right(value) => Either::Right(value),
            }
        }
    }

    /// Awaits `self` and transforms a left value.
    fn map_left_with<M, F>(self, function: F) -> impl Future<Output = Either<M, R>>
    where
        F: FnOnce(L) -> M,
    {
        async move { self.await.map_left(function) }
    }

    /// Awaits `self` and chains a computation on a left value.
    fn bind_left_with<M, F>(self, function: F) -> impl Future<Output = Either<M, R>>
    where
        F: FnOnce(L) -> Either<M, R>,
    {
        async move { self.await.bind_left(function) }
    }
}

impl<L, R, Fut> EitherFutureExt<L, R> for Fut where Fut: Future<Output = Either<L, R>> {}
