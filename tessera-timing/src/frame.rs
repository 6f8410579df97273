//! Frame scheduling for render-loop hosts.
//!
//! The "next repaint" primitive is environment-provided, so it is modeled
//! as an injected capability: code that wants to run at the next frame
//! talks to a [`FrameScheduler`], and tests can supply a fake one that
//! captures submissions. The production implementation is a channel pair
//! drained by the host's render loop once per frame.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};

/// Work submitted for the next frame.
pub type FrameCallback = Box<dyn FnOnce() + Send>;

/// Capability interface for "run this at the next repaint opportunity".
///
/// No cancellation handle is returned and no deduplication happens; each
/// submission is an independent future invocation.
pub trait FrameScheduler {
    /// Submit `callback` to run at the next frame.
    fn schedule_frame(&self, callback: FrameCallback);
}

/// Schedule `callback` for the next frame.
///
/// Thin pass-through that centralizes the call site so the scheduling
/// primitive can be swapped or mocked uniformly.
pub fn request_frame<F>(scheduler: &dyn FrameScheduler, callback: F)
where
    F: FnOnce() + Send + 'static,
{
    scheduler.schedule_frame(Box::new(callback));
}

/// Scheduling half of the frame channel.
///
/// Clone-able, can be handed to async tasks and event handlers.
#[derive(Clone)]
pub struct FrameSender {
    tx: mpsc::UnboundedSender<FrameCallback>,
}

impl FrameSender {
    /// Submit `callback` to run at the next frame.
    ///
    /// Non-blocking. Errors are ignored (receiver dropped = render loop
    /// shut down).
    pub fn schedule(&self, callback: impl FnOnce() + Send + 'static) {
        let _ = self.tx.send(Box::new(callback));
    }
}

impl FrameScheduler for FrameSender {
    fn schedule_frame(&self, callback: FrameCallback) {
        let _ = self.tx.send(callback);
    }
}

/// Receiving half of the frame channel, drained by the render loop.
pub struct FrameReceiver {
    rx: mpsc::UnboundedReceiver<FrameCallback>,
}

impl FrameReceiver {
    /// Run every callback queued so far, in submission order.
    ///
    /// Non-blocking. Returns the number of callbacks run.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(callback) = self.rx.try_recv() {
            callback();
            ran += 1;
        }
        ran
    }

    /// Wait for at least one submission, then run the whole queued batch
    /// in submission order.
    ///
    /// Returns the number of callbacks run, or `None` once every sender
    /// has been dropped.
    pub async fn next_frame(&mut self) -> Option<usize> {
        let first = self.rx.recv().await?;
        first();
        Some(1 + self.run_pending())
    }
}

/// Create a frame channel pair.
pub fn channel() -> (FrameSender, FrameReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (FrameSender { tx }, FrameReceiver { rx })
}

/// Render-loop pacing, configured in frames per second.
///
/// Missed ticks are skipped rather than burst, so a stalled host resumes
/// at the regular cadence. Must be created within a Tokio runtime.
pub struct FrameClock {
    interval: Interval,
}

impl FrameClock {
    /// Default pacing.
    pub const DEFAULT_FPS: u32 = 60;

    /// Create a clock ticking `fps` times per second (minimum 1).
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        let mut interval = tokio::time::interval(Duration::from_secs_f64(1.0 / f64::from(fps)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    /// Wait for the next frame boundary.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FPS)
    }
}
