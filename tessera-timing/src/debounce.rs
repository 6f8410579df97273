//! Trailing-edge debounce.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Wait window used when a zero duration is configured.
pub const DEFAULT_WAIT: Duration = Duration::from_millis(10);

/// Collapses rapid repeated calls into a single trailing invocation.
///
/// As long as [`call`](Debouncer::call) keeps being invoked, the wrapped
/// callback does not run. Once the calls stop for the configured wait
/// window, the callback runs exactly once with the payload of the *last*
/// call in the burst; payloads of superseded calls are discarded.
///
/// The payload type `T` stands in for the argument list of a call; use
/// `()` for zero-argument callbacks. The callback carries its execution
/// context through closure capture.
///
/// This wrapper is cheap to clone; clones share the same pending state
/// and callback. `call` must be invoked from within a Tokio runtime.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tessera_timing::Debouncer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let search = Debouncer::new(Duration::from_millis(100), |query: String| {
///     log::debug!("searching for {query}");
/// });
///
/// // Only the last call survives the burst.
/// search.call("a".into());
/// search.call("ab".into());
/// search.call("abc".into());
/// # }
/// ```
pub struct Debouncer<T> {
    inner: Arc<DebouncerInner<T>>,
}

struct DebouncerInner<T> {
    callback: Box<dyn Fn(T) + Send + Sync>,
    wait: Duration,
    pending: Mutex<Pending>,
}

#[derive(Default)]
struct Pending {
    /// Handle of the scheduled execution, absent when idle.
    handle: Option<JoinHandle<()>>,
    /// Incremented on every call; a fired timer only delivers its payload
    /// if no newer call has claimed the window since.
    generation: u64,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer around `callback`.
    ///
    /// A zero `wait` is substituted with [`DEFAULT_WAIT`] (10 ms).
    pub fn new(wait: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        let wait = if wait.is_zero() { DEFAULT_WAIT } else { wait };
        Self {
            inner: Arc::new(DebouncerInner {
                callback: Box::new(callback),
                wait,
                pending: Mutex::new(Pending::default()),
            }),
        }
    }

    /// Request an invocation with `value`.
    ///
    /// Cancels any pending scheduled execution and schedules a new one
    /// `wait` from now. Returns immediately; the callback runs later on
    /// the runtime's timer, and its return value is discarded.
    ///
    /// The pending execution owns the shared state, so it still fires
    /// once even if every `Debouncer` handle is dropped meanwhile.
    pub fn call(&self, value: T) {
        if let Ok(mut pending) = self.inner.pending.lock() {
            if let Some(handle) = pending.handle.take() {
                handle.abort();
                log::trace!("debounce: cancelled pending run");
            }
            pending.generation = pending.generation.wrapping_add(1);
            let generation = pending.generation;

            log::trace!("debounce: scheduling run in {:?}", self.inner.wait);
            let inner = Arc::clone(&self.inner);
            pending.handle = Some(tokio::spawn(async move {
                tokio::time::sleep(inner.wait).await;
                let current = if let Ok(mut pending) = inner.pending.lock() {
                    if pending.generation == generation {
                        pending.handle = None;
                        true
                    } else {
                        false
                    }
                } else {
                    false
                };
                if current {
                    (inner.callback)(value);
                }
            }));
        }
    }

    /// Whether a deferred execution is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.inner
            .pending
            .lock()
            .map(|pending| pending.handle.is_some())
            .unwrap_or(false)
    }

    /// The configured wait window.
    pub fn wait(&self) -> Duration {
        self.inner.wait
    }
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
