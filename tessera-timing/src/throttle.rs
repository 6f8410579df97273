//! Leading-edge call-rate gate.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

/// Caps how often the wrapped callback may run.
///
/// A call executes only if no prior execution is recorded, or the elapsed
/// time since the last execution strictly exceeds the configured delay.
/// Calls arriving inside the cooldown window are dropped entirely — not
/// queued or deferred — so their payloads are permanently lost. The very
/// first call on a fresh wrapper always executes.
///
/// No default is substituted for the delay; a zero delay makes every call
/// with nonzero elapsed time eligible, which is caller responsibility.
///
/// Cheap to clone; clones share the gate.
pub struct Throttler<T> {
    inner: Arc<ThrottlerInner<T>>,
}

struct ThrottlerInner<T> {
    callback: Box<dyn Fn(T) + Send + Sync>,
    delay: Duration,
    /// Timestamp of the last execution, absent until the first one.
    last_run: Mutex<Option<Instant>>,
}

impl<T> Throttler<T> {
    /// Create a throttler around `callback` with a minimum spacing of
    /// `delay` between executions.
    pub fn new(delay: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(ThrottlerInner {
                callback: Box::new(callback),
                delay,
                last_run: Mutex::new(None),
            }),
        }
    }

    /// Request an invocation with `value`.
    ///
    /// Runs the callback synchronously when the gate is open, silently
    /// drops the call otherwise. The callback is invoked outside the
    /// internal lock, so a reentrant call observes a consistent gate.
    pub fn call(&self, value: T) {
        let eligible = if let Ok(mut last_run) = self.inner.last_run.lock() {
            let now = Instant::now();
            match *last_run {
                Some(prev) if now.duration_since(prev) <= self.inner.delay => false,
                _ => {
                    *last_run = Some(now);
                    true
                }
            }
        } else {
            false
        };

        if eligible {
            (self.inner.callback)(value);
        } else {
            log::trace!("throttle: dropped call inside cooldown");
        }
    }

    /// The configured cooldown.
    pub fn delay(&self) -> Duration {
        self.inner.delay
    }

    /// Whether any call has executed yet.
    pub fn has_run(&self) -> bool {
        self.inner
            .last_run
            .lock()
            .map(|last_run| last_run.is_some())
            .unwrap_or(false)
    }
}

impl<T> Clone for Throttler<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
