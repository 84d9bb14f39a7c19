//! Tests for the asynchronous tail recursion driver.
//!
//! Tests cover:
//! - Resolved-future chains built with the helper functions
//! - Chains whose steps genuinely suspend
//! - Strictly sequential step execution
//! - Stack safety with deep chains
//! - Failure propagation and cancellation by drop
//! - Bounded execution

#![cfg(feature = "async")]

use functional_utils::control::{
    AsyncRecursionResult, StepLimitExceeded, continue_with_async, execute_async,
    execute_async_with_limit, return_value_async,
};
use futures::FutureExt;
use futures::future::{BoxFuture, Ready};
use rstest::rstest;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// =============================================================================
// Resolved Futures
// =============================================================================

fn increment_once(current: u64) -> Ready<AsyncRecursionResult<u64>> {
    if current == 0 {
        continue_with_async(move || increment_once(current + 1))
    } else {
        return_value_async(current)
    }
}

#[rstest]
#[tokio::test]
async fn execute_async_follows_continuation_to_terminal_value() {
    assert_eq!(execute_async(|| increment_once(0)).await, 1);
}

#[rstest]
#[tokio::test]
async fn execute_async_terminal_step_is_called_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let result = execute_async(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        return_value_async("finished")
    })
    .await;

    assert_eq!(result, "finished");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn return_value_async_resolves_immediately() {
    let step = return_value_async(5)
        .now_or_never()
        .expect("an already-resolved future");

    assert!(step.is_done());
    assert_eq!(step.into_value(), Some(5));
}

#[rstest]
#[tokio::test]
async fn run_drives_a_step_in_hand() {
    let step = AsyncRecursionResult::next(|| increment_once(0));
    assert_eq!(step.run().await, 1);
}

// =============================================================================
// Suspending Steps
// =============================================================================

fn countdown_with_sleep(
    remaining: u32,
    log: Arc<Mutex<Vec<String>>>,
) -> BoxFuture<'static, AsyncRecursionResult<u32>> {
    async move {
        log.lock()
            .expect("log mutex poisoned")
            .push(format!("start {remaining}"));
        tokio::time::sleep(Duration::from_millis(1)).await;
        log.lock()
            .expect("log mutex poisoned")
            .push(format!("end {remaining}"));

        if remaining == 0 {
            AsyncRecursionResult::done(0)
        } else {
            AsyncRecursionResult::next(move || countdown_with_sleep(remaining - 1, log))
        }
    }
    .boxed()
}

#[rstest]
#[tokio::test]
async fn execute_async_runs_steps_strictly_in_sequence() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let tracker = Arc::clone(&log);

    let result = execute_async(move || countdown_with_sleep(2, tracker)).await;

    assert_eq!(result, 0);
    assert_eq!(
        *log.lock().expect("log mutex poisoned"),
        vec!["start 2", "end 2", "start 1", "end 1", "start 0", "end 0"]
    );
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn execute_async_suspends_while_step_is_pending() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let tracker = Arc::clone(&log);

    let mut driver = Box::pin(execute_async(move || countdown_with_sleep(1, tracker)));

    assert!((&mut driver).now_or_never().is_none());
    assert_eq!(driver.steps(), 0);

    assert_eq!(driver.await, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn execute_async_can_be_spawned() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let tracker = Arc::clone(&log);

    let handle = tokio::spawn(execute_async(move || countdown_with_sleep(3, tracker)));

    assert_eq!(handle.await.expect("task should not fail"), 0);
    assert_eq!(log.lock().expect("log mutex poisoned").len(), 8);
}

// =============================================================================
// Stack Safety
// =============================================================================

fn sum_to(n: u64, accumulator: u64) -> Ready<AsyncRecursionResult<u64>> {
    if n == 0 {
        return_value_async(accumulator)
    } else {
        continue_with_async(move || sum_to(n - 1, accumulator + n))
    }
}

fn yielding_sum_to(n: u64, accumulator: u64) -> BoxFuture<'static, AsyncRecursionResult<u64>> {
    async move {
        if n % 1_000 == 0 {
            tokio::task::yield_now().await;
        }
        if n == 0 {
            AsyncRecursionResult::done(accumulator)
        } else {
            AsyncRecursionResult::next(move || yielding_sum_to(n - 1, accumulator + n))
        }
    }
    .boxed()
}

#[rstest]
#[tokio::test]
async fn execute_async_deep_resolved_chain_does_not_overflow() {
    let depth = 100_000;
    assert_eq!(
        execute_async(|| sum_to(depth, 0)).await,
        depth * (depth + 1) / 2
    );
}

#[rstest]
#[tokio::test]
async fn execute_async_deep_suspending_chain_does_not_overflow() {
    let depth = 100_000;
    let mut driver = Box::pin(execute_async(|| yielding_sum_to(depth, 0)));

    assert_eq!((&mut driver).await, depth * (depth + 1) / 2);
    assert_eq!(driver.steps(), depth + 1);
}

// =============================================================================
// Failure Propagation
// =============================================================================

fn failing(
    current: u32,
    invoked: Arc<Mutex<Vec<u32>>>,
) -> BoxFuture<'static, AsyncRecursionResult<u32>> {
    async move {
        invoked.lock().expect("log mutex poisoned").push(current);
        assert!(current < 2, "step {current} failed");
        AsyncRecursionResult::next(move || failing(current + 1, invoked))
    }
    .boxed()
}

#[rstest]
#[tokio::test]
async fn panic_in_step_propagates_and_stops_the_chain() {
    let invoked = Arc::new(Mutex::new(Vec::new()));
    let tracker = Arc::clone(&invoked);

    let outcome = AssertUnwindSafe(execute_async(move || failing(0, tracker)))
        .catch_unwind()
        .await;

    let payload = outcome.expect_err("the panic should reach the awaiting caller");
    let message = payload
        .downcast_ref::<String>()
        .expect("panic payload should be a formatted String");
    assert_eq!(message, "step 2 failed");
    assert_eq!(*invoked.lock().expect("log mutex poisoned"), vec![0, 1, 2]);
}

fn resolve(
    depth: u32,
    later_step_ran: Arc<AtomicBool>,
) -> BoxFuture<'static, AsyncRecursionResult<Result<u32, String>>> {
    async move {
        match depth {
            0 | 1 => AsyncRecursionResult::next(move || resolve(depth + 1, later_step_ran)),
            2 => AsyncRecursionResult::fail(format!("lookup failed at depth {depth}")),
            _ => {
                later_step_ran.store(true, Ordering::SeqCst);
                AsyncRecursionResult::done(Ok(depth))
            }
        }
    }
    .boxed()
}

#[rstest]
#[tokio::test]
async fn error_value_ends_the_chain() {
    let later_step_ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&later_step_ran);

    let result = execute_async(move || resolve(0, flag)).await;

    assert_eq!(result, Err("lookup failed at depth 2".to_string()));
    assert!(!later_step_ran.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn dropping_the_driver_stops_the_chain() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let tracker = Arc::clone(&log);

    let driver = execute_async(move || countdown_with_sleep(5, tracker));
    let timed_out = tokio::time::timeout(Duration::from_micros(1_500), driver).await;
    assert!(timed_out.is_err());

    let recorded = log.lock().expect("log mutex poisoned").clone();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(*log.lock().expect("log mutex poisoned"), recorded);
    assert!(!recorded.contains(&"end 0".to_string()));
}

// =============================================================================
// Bounded Execution
// =============================================================================

fn forever(calls: Arc<AtomicUsize>) -> Ready<AsyncRecursionResult<()>> {
    calls.fetch_add(1, Ordering::SeqCst);
    continue_with_async(move || forever(calls))
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(10_000)]
#[tokio::test]
async fn execute_async_with_limit_stops_non_terminating_chain(#[case] max_steps: usize) {
    let calls = Arc::new(AtomicUsize::new(0));
    let tracker = Arc::clone(&calls);

    let result = execute_async_with_limit(move || forever(tracker), max_steps).await;

    assert_eq!(result, Err(StepLimitExceeded { max_steps }));
    assert_eq!(calls.load(Ordering::SeqCst), max_steps);
}

#[rstest]
#[tokio::test]
async fn execute_async_with_limit_returns_value_within_limit() {
    assert_eq!(execute_async_with_limit(|| sum_to(9, 0), 10).await, Ok(45));
    assert_eq!(
        execute_async_with_limit(|| sum_to(10, 0), 10).await,
        Err(StepLimitExceeded { max_steps: 10 })
    );
}
