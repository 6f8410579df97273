//! Rate-control utilities for event-driven UIs.
//!
//! Wrappers that control *when* and *how often* a caller-supplied callback
//! actually runs, given a continuous stream of invocation requests:
//!
//! - [`Debouncer`] collapses rapid bursts into a single trailing call.
//! - [`Throttler`] caps execution frequency, dropping excess calls.
//! - [`frame`] schedules work for the host's next render frame.
//!
//! This crate is a leaf utility with no internal dependencies; it is
//! consumed by timing-sensitive event handlers (resize listeners, scroll
//! listeners, rapid UI events) in the surrounding application.

pub mod debounce;
pub mod frame;
pub mod throttle;

pub use debounce::{DEFAULT_WAIT, Debouncer};
pub use frame::{
    FrameCallback, FrameClock, FrameReceiver, FrameScheduler, FrameSender, request_frame,
};
pub use throttle::Throttler;
