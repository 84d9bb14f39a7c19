//! Error types for bounded tail recursion.

/// Returned when a bounded driver gives up before the chain terminated.
///
/// Produced by [`execute_with_limit`](super::execute_with_limit) and
/// `execute_async_with_limit`. The step that would have exceeded the limit
/// is never invoked.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::StepLimitExceeded;
///
/// let error = StepLimitExceeded { max_steps: 10 };
/// assert_eq!(
///     format!("{error}"),
///     "tail recursion did not terminate within 10 steps"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepLimitExceeded {
    /// The number of step invocations that were allowed.
    pub max_steps: usize,
}

impl StepLimitExceeded {
    pub(crate) const fn new(max_steps: usize) -> Self {
        Self { max_steps }
    }
}

impl std::fmt::Display for StepLimitExceeded {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "tail recursion did not terminate within {} steps",
            self.max_steps
        )
    }
}

impl std::error::Error for StepLimitExceeded {}
