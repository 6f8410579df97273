//! Event handling for the RadioGroup widget.

use crate::events::{EventQueue, EventResult, WidgetEvent, WidgetEventKind, WidgetEvents};
use crate::keys::{Key, KeyCombo};

use super::RadioGroup;

impl RadioGroup {
    /// Next enabled index from the current selection, wrapping around and
    /// skipping disabled options. `None` when every option is disabled.
    fn step_selection(&self, forward: bool) -> Option<usize> {
        let len = self.len();
        let mut index = self.selected_index().unwrap_or(0);
        for _ in 0..len {
            index = if forward {
                if index + 1 >= len { 0 } else { index + 1 }
            } else if index == 0 {
                len - 1
            } else {
                index - 1
            };
            if !self.is_option_disabled(index) {
                return Some(index);
            }
        }
        None
    }

    /// First enabled index scanning from the front (or back).
    fn edge_selection(&self, front: bool) -> Option<usize> {
        let len = self.len();
        if front {
            (0..len).find(|&index| !self.is_option_disabled(index))
        } else {
            (0..len).rev().find(|&index| !self.is_option_disabled(index))
        }
    }

    /// Apply an interactive selection, emitting a `Change` event when the
    /// checked option actually moved.
    fn interact_select(&self, index: usize, events: &EventQueue) {
        let old_selection = self.selected_index();
        self.select(index);
        if self.selected_index() != old_selection {
            events.push(WidgetEvent::new(WidgetEventKind::Change, self.id_string()));
        }
    }
}

impl WidgetEvents for RadioGroup {
    fn on_key(&self, key: &KeyCombo, events: &EventQueue) -> EventResult {
        // Only handle keys without modifiers
        if key.modifiers.any() {
            return EventResult::Ignored;
        }
        // A disabled or empty group does not react to input at all
        if self.is_disabled() || self.is_empty() {
            return EventResult::Ignored;
        }

        match key.key {
            Key::Space | Key::Char(' ') | Key::Enter => {
                // Space/Enter confirms the current value
                events.push(WidgetEvent::new(
                    WidgetEventKind::Activate,
                    self.id_string(),
                ));
                EventResult::Consumed
            }
            Key::Up | Key::Char('k') => {
                if let Some(index) = self.step_selection(false) {
                    self.interact_select(index, events);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Down | Key::Char('j') => {
                if let Some(index) = self.step_selection(true) {
                    self.interact_select(index, events);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Home => {
                if let Some(index) = self.edge_selection(true) {
                    self.interact_select(index, events);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::End => {
                if let Some(index) = self.edge_selection(false) {
                    self.interact_select(index, events);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_click(&self, _x: u16, y: u16, events: &EventQueue) -> EventResult {
        // One option per row: the clicked option is the y offset
        let index = y as usize;
        if index >= self.len() {
            return EventResult::Ignored;
        }
        // Disabled options swallow the press: no selection change, no
        // event, and nothing propagates to handlers behind the widget
        if self.is_option_disabled(index) {
            return EventResult::Consumed;
        }
        self.interact_select(index, events);
        EventResult::Consumed
    }
}
