//! Merging an optional callback with a mandatory one.

/// Builds a callback that runs `primary` (when present) and then
/// `fallback`.
///
/// With `None` as the primary the result behaves exactly like `fallback`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::functional::combine;
/// use std::cell::RefCell;
///
/// let calls = RefCell::new(Vec::new());
/// let custom = Some(|value: &i32| calls.borrow_mut().push(format!("custom {value}")));
/// let notify = combine(custom, |value: &i32| calls.borrow_mut().push(format!("default {value}")));
///
/// notify(&1);
/// assert_eq!(*calls.borrow(), vec!["custom 1", "default 1"]);
/// ```
pub fn combine<T, F, G>(primary: Option<F>, fallback: G) -> impl Fn(&T)
where
    T: ?Sized,
    F: Fn(&T),
    G: Fn(&T),
{
    move |value: &T| {
        if let Some(primary) = &primary {
            primary(value);
        }
        fallback(value);
    }
}
