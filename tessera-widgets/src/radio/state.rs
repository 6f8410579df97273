//! Radio group widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Unique identifier for a RadioGroup widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RadioGroupId(usize);

impl RadioGroupId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for RadioGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__radio_group_{}", self.0)
    }
}

/// A single radio button inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioOption {
    /// Value contributed to the group when this option is checked
    pub value: String,
    /// Display label
    pub label: String,
    /// Whether this option is individually disabled
    pub disabled: bool,
}

impl RadioOption {
    /// Create an option whose label defaults to its value.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            disabled: false,
        }
    }

    /// Set a display label distinct from the value.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Mark this option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Internal state for a RadioGroup widget
#[derive(Debug, Default)]
struct RadioGroupInner {
    /// The group's current value (if any)
    value: Option<String>,
    /// Available options
    options: Vec<RadioOption>,
    /// Whether the whole group is disabled (cascades to every option)
    disabled: bool,
}

/// A radio group widget with shared state.
///
/// `RadioGroup` manages a group of mutually exclusive options where at
/// most one can be checked at a time. Checked state derives from the
/// single group value: an option is checked exactly when its value
/// matches the group's, so checking one option unchecks the others by
/// construction.
///
/// Programmatic writes (`select`, `set_value`) apply like a value
/// binding and bypass the disabled gate; user interactions (clicks, key
/// presses) respect it.
///
/// # Example
///
/// ```
/// use tessera_widgets::radio::{RadioGroup, RadioOption};
///
/// let fruit = RadioGroup::with_options(vec![
///     RadioOption::new("apple").with_label("Apple"),
///     RadioOption::new("banana").with_label("Banana"),
/// ])
/// .with_value("banana");
///
/// assert_eq!(fruit.selected_index(), Some(1));
/// assert!(fruit.checked(1));
/// ```
#[derive(Debug)]
pub struct RadioGroup {
    /// Unique identifier for this radio group instance
    id: RadioGroupId,
    /// Internal state
    inner: Arc<RwLock<RadioGroupInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl RadioGroup {
    /// Create a new empty radio group
    pub fn new() -> Self {
        Self {
            id: RadioGroupId::new(),
            inner: Arc::new(RwLock::new(RadioGroupInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a radio group with options
    pub fn with_options(options: Vec<RadioOption>) -> Self {
        Self {
            id: RadioGroupId::new(),
            inner: Arc::new(RwLock::new(RadioGroupInner {
                options,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the initial group value
    pub fn with_value(self, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = Some(value.into());
        }
        self
    }

    /// Get the unique ID for this radio group
    pub fn id(&self) -> RadioGroupId {
        self.id
    }

    /// Get the ID as a string (for event dispatch)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the group's current value (if any)
    pub fn value(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or(None)
    }

    /// Index of the checked option: the first option whose value equals
    /// the group value. `None` when no option matches.
    pub fn selected_index(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|guard| {
            let value = guard.value.as_deref()?;
            guard.options.iter().position(|option| option.value == value)
        })
    }

    /// Check if the option at `index` is checked
    pub fn checked(&self, index: usize) -> bool {
        self.selected_index() == Some(index)
    }

    /// Get all options
    pub fn options(&self) -> Vec<RadioOption> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    /// Get the option at `index`
    pub fn option_at(&self, index: usize) -> Option<RadioOption> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.options.get(index).cloned())
    }

    /// Get the number of options
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.options.len())
            .unwrap_or(0)
    }

    /// Check if there are no options
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the whole group is disabled
    pub fn is_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.disabled)
            .unwrap_or(false)
    }

    /// Check if the option at `index` is disabled, either individually
    /// or through the group-level flag cascading down.
    pub fn is_option_disabled(&self, index: usize) -> bool {
        self.inner
            .read()
            .map(|guard| {
                guard.disabled
                    || guard
                        .options
                        .get(index)
                        .map(|option| option.disabled)
                        .unwrap_or(false)
            })
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Check the option at `index`, setting the group value to its value.
    ///
    /// Out-of-range indices are a no-op.
    pub fn select(&self, index: usize) {
        if let Ok(mut guard) = self.inner.write()
            && index < guard.options.len()
        {
            let value = guard.options[index].value.clone();
            if guard.value.as_deref() != Some(value.as_str()) {
                guard.value = Some(value);
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Set the group value directly.
    ///
    /// The matching option (if any) becomes checked; a value matching no
    /// option is retained with nothing checked, and re-resolves if a
    /// matching option is added later.
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        if let Ok(mut guard) = self.inner.write()
            && guard.value.as_deref() != Some(value.as_str())
        {
            guard.value = Some(value);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the group value
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.value.is_some()
        {
            guard.value = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Replace the available options.
    ///
    /// The group value is retained; the checked option re-resolves
    /// against the new list.
    pub fn set_options(&self, options: Vec<RadioOption>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Enable or disable the whole group
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.disabled != disabled
        {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Enable or disable a single option
    pub fn set_option_disabled(&self, index: usize, disabled: bool) {
        if let Ok(mut guard) = self.inner.write()
            && let Some(option) = guard.options.get_mut(index)
            && option.disabled != disabled
        {
            option.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the radio group state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for RadioGroup {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self::new()
    }
}
