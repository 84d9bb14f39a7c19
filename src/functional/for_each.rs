//! Iterating over a sequence that may be absent.

/// Runs an action over every item of an optional sequence.
///
/// # Examples
///
/// ```rust
/// use functional_utils::functional::ForEachSome;
///
/// let mut total = 0;
/// assert_eq!(Some(vec![1, 2, 3]).for_each_some(|n| total += n), Some(()));
/// assert_eq!(total, 6);
///
/// assert_eq!(None::<Vec<i32>>.for_each_some(|n| total += n), None);
/// assert_eq!(total, 6);
/// ```
pub trait ForEachSome<I: IntoIterator> {
    /// Returns `None` without calling `action` when there is no sequence,
    /// otherwise applies `action` to each item in order and returns
    /// `Some(())`.
    fn for_each_some<F>(self, action: F) -> Option<()>
    where
        F: FnMut(I::Item);
}

impl<I: IntoIterator> ForEachSome<I> for Option<I> {
    #[inline]
    fn for_each_some<F>(self, action: F) -> Option<()>
    where
        F: FnMut(I::Item),
    {
        let items = self?;
        items.into_iter().for_each(action);
        Some(())
    }
}
