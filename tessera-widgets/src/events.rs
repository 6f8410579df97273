//! Widget event handling types and traits.
//!
//! Widgets handle their own interactions and push resulting events onto
//! an [`EventQueue`]; the host's event loop drains the queue after each
//! interaction and dispatches the appropriate handlers. This keeps the
//! event loop a thin dispatcher while widget behavior stays encapsulated
//! in the widget.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::keys::KeyCombo;

// =============================================================================
// Widget Event Types
// =============================================================================

/// Identifies which handler to call for a widget event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEventKind {
    /// Current value confirmed (Enter, Space)
    Activate,
    /// Value changed (radio selection)
    Change,
}

/// A widget event to be dispatched.
#[derive(Debug, Clone)]
pub struct WidgetEvent {
    /// Which kind of event
    pub kind: WidgetEventKind,
    /// Widget ID that triggered the event
    pub widget_id: String,
}

impl WidgetEvent {
    /// Create a new widget event.
    pub fn new(kind: WidgetEventKind, widget_id: impl Into<String>) -> Self {
        Self {
            kind,
            widget_id: widget_id.into(),
        }
    }
}

// =============================================================================
// Event Queue
// =============================================================================

/// FIFO queue of widget events awaiting dispatch.
///
/// Cheap to clone; clones share the same queue. Widgets push during
/// interaction handling, the host drains afterwards.
#[derive(Debug, Default, Clone)]
pub struct EventQueue {
    inner: Arc<Mutex<VecDeque<WidgetEvent>>>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&self, event: WidgetEvent) {
        log::trace!("widget event: {:?} from {}", event.kind, event.widget_id);
        if let Ok(mut queue) = self.inner.lock() {
            queue.push_back(event);
        }
    }

    /// Take every queued event, in push order.
    pub fn drain(&self) -> Vec<WidgetEvent> {
        self.inner
            .lock()
            .map(|mut queue| queue.drain(..).collect())
            .unwrap_or_default()
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.inner.lock().map(|queue| queue.len()).unwrap_or(0)
    }

    /// Check if no events are queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Trait for widgets that can handle events.
///
/// All methods default to `EventResult::Ignored`, so widgets only
/// implement the interactions they care about.
pub trait WidgetEvents {
    /// Handle a click at the given position within the widget's bounds.
    fn on_click(&self, _x: u16, _y: u16, _events: &EventQueue) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key press while this widget is focused.
    ///
    /// Return `EventResult::Consumed` to prevent the key from being
    /// processed as a host keybind.
    fn on_key(&self, _key: &KeyCombo, _events: &EventQueue) -> EventResult {
        EventResult::Ignored
    }
}
