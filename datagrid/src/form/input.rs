//! Text input field state.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::validation::Validatable;

/// Unique identifier for a TextInput instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextInputId(usize);

impl TextInputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TextInputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__text_input_{}", self.0)
    }
}

#[derive(Debug, Default)]
struct TextInputInner {
    value: String,
    error: Option<String>,
}

/// A single-line text field with an attached validation error.
///
/// Clones share the same state, so a validator holding a clone writes its
/// error into the field the editor renders.
#[derive(Debug, Clone)]
pub struct TextInput {
    id: TextInputId,
    inner: Arc<RwLock<TextInputInner>>,
}

impl TextInput {
    /// Create an empty input.
    pub fn new() -> Self {
        Self {
            id: TextInputId::new(),
            inner: Arc::new(RwLock::new(TextInputInner::default())),
        }
    }

    /// Get the unique ID.
    pub fn id(&self) -> TextInputId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Get the current value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|g| g.value.clone())
            .unwrap_or_default()
    }

    /// Replace the value.
    ///
    /// Editing clears a previously shown error.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.error = None;
        }
    }

    /// Get the current error message (if any).
    pub fn error(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.error.clone())
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Validatable for TextInput {
    type Value = String;

    fn validation_value(&self) -> String {
        self.value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
        }
    }

    fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = None;
        }
    }

    fn error(&self) -> Option<String> {
        TextInput::error(self)
    }

    fn widget_id(&self) -> String {
        self.id_string()
    }
}
