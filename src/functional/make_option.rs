//! Building `Option` values from plain values and predicates.

#[cfg(feature = "async")]
use std::future::Future;

/// Wraps a value in `Some` unless a predicate rejects it.
///
/// # Examples
///
/// ```rust
/// use functional_utils::functional::MakeOption;
///
/// assert_eq!("".make_option(|text| text.is_empty()), None);
/// assert_eq!("name".make_option(|text| text.is_empty()), Some("name"));
///
/// let port = "8080".make_option_with(|text| text.parse::<u16>().ok(), |text| text.is_empty());
/// assert_eq!(port, Some(Some(8080)));
/// ```
pub trait MakeOption: Sized {
    /// Returns `None` if `none_when(&self)` holds, otherwise `Some(self)`.
    #[inline]
    fn make_option<P>(self, none_when: P) -> Option<Self>
    where
        P: FnOnce(&Self) -> bool,
    {
        if none_when(&self) { None } else { Some(self) }
    }

    /// Returns `None` if `none_when(&self)` holds, otherwise
    /// `Some(map(self))`. `map` is not called for rejected values.
    #[inline]
    fn make_option_with<R, M, P>(self, map: M, none_when: P) -> Option<R>
    where
        M: FnOnce(Self) -> R,
        P: FnOnce(&Self) -> bool,
    {
        self.make_option(none_when).map(map)
    }
}

impl<T> MakeOption for T {}

/// [`MakeOption`] applied to the output of a future.
///
/// # Examples
///
/// ```rust
/// use functional_utils::functional::MakeOptionFutureExt;
///
/// let found = futures::executor::block_on(async { 0_u32 }.make_option_async(|count| *count == 0));
/// assert_eq!(found, None);
/// ```
#[cfg(feature = "async")]
pub trait MakeOptionFutureExt: Future + Sized {
    /// Awaits `self`, then applies [`MakeOption::make_option`].
    fn make_option_async<P>(self, none_when: P) -> impl Future<Output = Option<Self::Output>>
    where
        P: FnOnce(&Self::Output) -> bool,
    {
        async move { self.await.make_option(none_when) }
    }

    /// Awaits `self`, then applies [`MakeOption::make_option_with`].
    fn make_option_with_async<R, M, P>(
        self,
        map: M,
        none_when: P,
    ) -> impl Future<Output = Option<R>>
    where
        M: FnOnce(Self::Output) -> R,
        P: FnOnce(&Self::Output) -> bool,
    {
        async move { self.await.make_option_with(map, none_when) }
    }
}

#[cfg(feature = "async")]
impl<T: Future> MakeOptionFutureExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1, None)]
    #[case(0, Some(0))]
    #[case(5, Some(5))]
    fn test_make_option_rejects_negative(#[case] input: i32, #[case] expected: Option<i32>) {
        assert_eq!(input.make_option(|value| *value < 0), expected);
    }

    #[rstest]
    fn test_make_option_with_skips_map_for_rejected_value() {
        let result = 3.make_option_with(
            |value: i32| -> String { panic!("mapped rejected value {value}") },
            |_| true,
        );
        assert_eq!(result, None);
    }

    #[cfg(feature = "async")]
    #[rstest]
    #[tokio::test]
    async fn test_make_option_with_async_maps_kept_value() {
        let result = async { "abc" }
            .make_option_with_async(str::len, |text| text.is_empty())
            .await;
        assert_eq!(result, Some(3));
    }
}
