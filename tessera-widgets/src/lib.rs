//! Reusable widget state models for component-based terminal UIs.
//!
//! Widgets here are pure behavior: shared-state handles that manage
//! selection, checked-state propagation, and disabled-state cascading,
//! plus the event plumbing the host's dispatch loop needs. Rendering,
//! layout, and focus management remain the host framework's concern.

pub mod events;
pub mod keys;
pub mod radio;

pub mod prelude {
    pub use crate::events::{EventQueue, EventResult, WidgetEvent, WidgetEventKind, WidgetEvents};
    pub use crate::keys::{Key, KeyCombo, KeyParseError, Modifiers};
    pub use crate::radio::{RadioGroup, RadioGroupId, RadioOption};
}
