//! Scoped use of resources that clean up on drop.
//!
//! Rust releases resources through `Drop`, so these helpers only pin down
//! the scope: the resource lives exactly as long as the body runs and is
//! dropped right after, on normal return and on unwind alike. With two
//! resources the second (derived from the first) is dropped before the
//! first.

#[cfg(feature = "async")]
use futures::future::BoxFuture;

/// Runs `body` with exclusive access to `resource`, then drops it.
///
/// # Examples
///
/// ```rust
/// use functional_utils::functional::using;
///
/// let written = using(Vec::new(), |buffer| {
///     buffer.extend_from_slice(b"hello");
///     buffer.len()
/// });
/// assert_eq!(written, 5);
/// ```
#[inline]
pub fn using<R, T, F>(mut resource: R, body: F) -> T
where
    F: FnOnce(&mut R) -> T,
{
    body(&mut resource)
}

/// Opens a second resource from the first, runs `body` with both, then
/// drops the second resource followed by the first.
///
/// If `create_second` panics, the first resource is still dropped.
#[inline]
pub fn using2<R1, R2, T, C, F>(mut first: R1, create_second: C, body: F) -> T
where
    C: FnOnce(&mut R1) -> R2,
    F: FnOnce(&mut R1, &mut R2) -> T,
{
    let mut second = create_second(&mut first);
    body(&mut first, &mut second)
}

/// Awaits `body` with exclusive access to `resource`, then drops it.
///
/// The body returns a [`BoxFuture`] tied to the borrow of the resource,
/// which lets it hold the `&mut R` across await points.
///
/// # Examples
///
/// ```rust
/// use functional_utils::functional::using_async;
/// use futures::FutureExt;
///
/// let total = futures::executor::block_on(using_async(vec![1, 2, 3], |numbers| {
///     async move {
///         numbers.push(4);
///         numbers.iter().sum::<i32>()
///     }
///     .boxed()
/// }));
/// assert_eq!(total, 10);
/// ```
#[cfg(feature = "async")]
pub async fn using_async<R, T, F>(mut resource: R, body: F) -> T
where
    F: for<'a> FnOnce(&'a mut R) -> BoxFuture<'a, T>,
{
    body(&mut resource).await
}

/// Async form of [`using2`]. Drop order is the same: second, then first.
#[cfg(feature = "async")]
pub async fn using2_async<R1, R2, T, C, F>(mut first: R1, create_second: C, body: F) -> T
where
    C: FnOnce(&mut R1) -> R2,
    F: for<'a> FnOnce(&'a mut R1, &'a mut R2) -> BoxFuture<'a, T>,
{
    let mut second = create_second(&mut first);
    body(&mut first, &mut second).await
}
