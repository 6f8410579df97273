//! RadioGroup widget - a group of mutually exclusive radio options.

pub mod events;
mod state;

pub use state::{RadioGroup, RadioGroupId, RadioOption};
