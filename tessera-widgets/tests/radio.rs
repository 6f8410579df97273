use tessera_widgets::events::{EventQueue, EventResult, WidgetEventKind, WidgetEvents};
use tessera_widgets::keys::{Key, KeyCombo};
use tessera_widgets::radio::{RadioGroup, RadioOption};

fn fruit_group() -> RadioGroup {
    RadioGroup::with_options(vec![
        RadioOption::new("apple").with_label("Apple"),
        RadioOption::new("banana").with_label("Banana"),
    ])
}

// =============================================================================
// Value Binding
// =============================================================================

#[test]
fn test_initial_value_selects_matching_option() {
    let group = fruit_group().with_value("banana");

    assert_eq!(group.value(), Some("banana".to_string()));
    assert_eq!(group.selected_index(), Some(1));
    assert!(group.checked(1));
    assert!(!group.checked(0));
}

#[test]
fn test_set_value_selects_matching_option() {
    let group = fruit_group();
    assert_eq!(group.selected_index(), None);
    assert!(!group.checked(0));

    group.set_value("apple");

    assert!(group.checked(0));
    assert_eq!(group.value(), Some("apple".to_string()));
}

#[test]
fn test_unmatched_value_is_retained() {
    let group = fruit_group();
    group.set_value("cherry");

    assert_eq!(group.value(), Some("cherry".to_string()));
    assert_eq!(group.selected_index(), None, "nothing is checked");

    // The checked option re-resolves once a matching option appears.
    group.set_options(vec![RadioOption::new("cherry"), RadioOption::new("apple")]);
    assert_eq!(group.selected_index(), Some(0));
}

#[test]
fn test_clear_unchecks_everything() {
    let group = fruit_group().with_value("apple");
    group.clear();

    assert_eq!(group.value(), None);
    assert_eq!(group.selected_index(), None);
}

// =============================================================================
// Mutual Exclusion
// =============================================================================

#[test]
fn test_only_one_option_checked_at_a_time() {
    let group = fruit_group();
    let events = EventQueue::new();
    assert_eq!(group.value(), None);

    group.on_click(0, 0, &events);
    assert!(group.checked(0));
    assert!(!group.checked(1));
    assert_eq!(group.value(), Some("apple".to_string()));

    group.on_click(0, 1, &events);
    assert!(group.checked(1));
    assert!(!group.checked(0));
    assert_eq!(group.value(), Some("banana".to_string()));
}

#[test]
fn test_selecting_option_updates_group_value() {
    let group = fruit_group();
    let events = EventQueue::new();
    assert_eq!(group.value(), None);

    assert_eq!(group.on_click(0, 0, &events), EventResult::Consumed);

    assert_eq!(group.value(), Some("apple".to_string()));
    let queued = events.drain();
    assert_eq!(queued.len(), 1);
    assert_eq!(queued[0].kind, WidgetEventKind::Change);
    assert_eq!(queued[0].widget_id, group.id_string());
}

#[test]
fn test_reselecting_checked_option_emits_no_event() {
    let group = fruit_group().with_value("apple");
    let events = EventQueue::new();

    group.on_click(0, 0, &events);

    assert!(events.is_empty());
}

// =============================================================================
// Disabled State
// =============================================================================

#[test]
fn test_group_disabled_cascades_to_options() {
    let group = fruit_group();
    group.set_disabled(true);

    assert!(group.is_disabled());
    assert!(group.is_option_disabled(0));
    assert!(group.is_option_disabled(1));
    assert!(!group.option_at(0).unwrap().disabled, "option flag itself is untouched");
}

#[test]
fn test_disabled_option_is_not_selectable() {
    let group = RadioGroup::with_options(vec![RadioOption::new("apple").disabled()]);
    let events = EventQueue::new();
    assert_eq!(group.selected_index(), None);

    group.on_click(0, 0, &events);

    assert_eq!(group.selected_index(), None);
    assert_eq!(group.value(), None);
}

#[test]
fn test_disabled_option_swallows_the_click() {
    let group = fruit_group();
    let events = EventQueue::new();

    // First press selects and emits a change.
    group.on_click(0, 0, &events);
    assert_eq!(events.drain().len(), 1);

    // Disable the pressed option, then press again: consumed without
    // selection change or event, so nothing propagates behind the widget.
    group.set_option_disabled(0, true);
    group.set_value("banana");
    assert_eq!(group.on_click(0, 0, &events), EventResult::Consumed);

    assert!(events.is_empty());
    assert_eq!(group.value(), Some("banana".to_string()));
}

#[test]
fn test_disabled_group_ignores_keys() {
    let group = fruit_group().with_value("apple");
    let events = EventQueue::new();
    group.set_disabled(true);

    let result = group.on_key(&KeyCombo::key(Key::Down), &events);

    assert_eq!(result, EventResult::Ignored);
    assert_eq!(group.selected_index(), Some(0));
    assert!(events.is_empty());
}

#[test]
fn test_programmatic_writes_bypass_disabled_gate() {
    let group = fruit_group();
    group.set_disabled(true);

    // A value binding still applies while the group is disabled.
    group.set_value("banana");
    assert_eq!(group.selected_index(), Some(1));

    group.select(0);
    assert_eq!(group.value(), Some("apple".to_string()));
}

// =============================================================================
// Keyboard Navigation
// =============================================================================

fn crops_group() -> RadioGroup {
    RadioGroup::with_options(vec![
        RadioOption::new("wheat"),
        RadioOption::new("rye"),
        RadioOption::new("oats"),
    ])
}

#[test]
fn test_down_and_up_move_selection_with_wrap() {
    let group = crops_group().with_value("wheat");
    let events = EventQueue::new();

    group.on_key(&KeyCombo::key(Key::Down), &events);
    assert_eq!(group.selected_index(), Some(1));
    group.on_key(&KeyCombo::key(Key::Char('j')), &events);
    assert_eq!(group.selected_index(), Some(2));
    group.on_key(&KeyCombo::key(Key::Down), &events);
    assert_eq!(group.selected_index(), Some(0), "wraps past the end");

    group.on_key(&KeyCombo::key(Key::Up), &events);
    assert_eq!(group.selected_index(), Some(2), "wraps past the start");
    group.on_key(&KeyCombo::key(Key::Char('k')), &events);
    assert_eq!(group.selected_index(), Some(1));

    assert_eq!(events.drain().len(), 5, "every move emits a change");
}

#[test]
fn test_navigation_skips_disabled_options() {
    let group = crops_group().with_value("wheat");
    let events = EventQueue::new();
    group.set_option_disabled(1, true);

    group.on_key(&KeyCombo::key(Key::Down), &events);
    assert_eq!(group.selected_index(), Some(2), "skips the disabled middle option");

    group.on_key(&KeyCombo::key(Key::Up), &events);
    assert_eq!(group.selected_index(), Some(0));
}

#[test]
fn test_home_and_end_jump_to_enabled_edges() {
    let group = crops_group().with_value("rye");
    let events = EventQueue::new();
    group.set_option_disabled(0, true);

    group.on_key(&KeyCombo::key(Key::End), &events);
    assert_eq!(group.selected_index(), Some(2));

    group.on_key(&KeyCombo::key(Key::Home), &events);
    assert_eq!(group.selected_index(), Some(1), "first *enabled* option");
}

#[test]
fn test_confirm_keys_emit_activate() {
    let group = crops_group().with_value("rye");
    let events = EventQueue::new();

    assert_eq!(
        group.on_key(&KeyCombo::key(Key::Enter), &events),
        EventResult::Consumed
    );
    group.on_key(&KeyCombo::key(Key::Space), &events);

    let queued = events.drain();
    assert_eq!(queued.len(), 2);
    assert!(queued.iter().all(|e| e.kind == WidgetEventKind::Activate));
    assert_eq!(group.selected_index(), Some(1), "confirming does not move");
}

#[test]
fn test_modified_keys_are_ignored() {
    let group = crops_group().with_value("wheat");
    let events = EventQueue::new();

    let result = group.on_key(&KeyCombo::key(Key::Down).ctrl(), &events);

    assert_eq!(result, EventResult::Ignored);
    assert_eq!(group.selected_index(), Some(0));
}

#[test]
fn test_click_outside_options_is_ignored() {
    let group = fruit_group();
    let events = EventQueue::new();

    assert_eq!(group.on_click(0, 5, &events), EventResult::Ignored);
    assert_eq!(group.value(), None);
}

// =============================================================================
// Shared State
// =============================================================================

#[test]
fn test_clones_share_state() {
    let group = fruit_group();
    let clone = group.clone();

    clone.set_value("apple");

    assert_eq!(group.selected_index(), Some(0));
    assert_eq!(group.id(), clone.id());
}

#[test]
fn test_dirty_flag_tracks_changes() {
    let group = fruit_group();
    assert!(!group.is_dirty());

    group.set_value("apple");
    assert!(group.is_dirty());

    group.clear_dirty();
    group.set_value("apple"); // no-op write
    assert!(!group.is_dirty());
}
