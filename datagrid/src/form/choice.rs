//! Mutually exclusive choice state (radio group / select).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::validation::Validatable;

/// Unique identifier for a Choice instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChoiceId(usize);

impl ChoiceId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__choice_{}", self.0)
    }
}

#[derive(Debug)]
struct ChoiceInner<T> {
    options: Vec<(String, T)>,
    selected: Option<usize>,
    error: Option<String>,
}

/// A group of labelled options where at most one is selected.
///
/// Selection is index-based. Clones share the same state.
///
/// # Example
///
/// ```
/// use datagrid::form::Choice;
///
/// let answer = Choice::new(vec![("Yes", true), ("No", false)]).with_selected(0);
/// assert_eq!(answer.value(), Some(true));
///
/// answer.select_value(&false);
/// assert_eq!(answer.selected_label().as_deref(), Some("No"));
/// ```
#[derive(Debug, Clone)]
pub struct Choice<T> {
    id: ChoiceId,
    inner: Arc<RwLock<ChoiceInner<T>>>,
}

impl<T: Clone + PartialEq> Choice<T> {
    /// Create a choice with labelled options and nothing selected.
    pub fn new(options: Vec<(impl Into<String>, T)>) -> Self {
        let options = options.into_iter().map(|(l, v)| (l.into(), v)).collect();
        Self {
            id: ChoiceId::new(),
            inner: Arc::new(RwLock::new(ChoiceInner {
                options,
                selected: None,
                error: None,
            })),
        }
    }

    /// Pre-select an option by index.
    pub fn with_selected(self, index: usize) -> Self {
        self.select(index);
        self
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Get the option labels in order.
    pub fn labels(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.options.iter().map(|(l, _)| l.clone()).collect())
            .unwrap_or_default()
    }

    /// Get the selected index.
    pub fn selected(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|g| g.selected)
    }

    /// Select an option by index.
    ///
    /// Returns `false` if the index is out of range.
    pub fn select(&self, index: usize) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        if index >= guard.options.len() {
            return false;
        }
        guard.selected = Some(index);
        guard.error = None;
        true
    }

    /// Select the option carrying `value`.
    ///
    /// Returns `false` if no option carries it.
    pub fn select_value(&self, value: &T) -> bool {
        let index = self
            .inner
            .read()
            .ok()
            .and_then(|g| g.options.iter().position(|(_, v)| v == value));
        match index {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Get the value of the selected option.
    pub fn value(&self) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.selected.and_then(|i| g.options.get(i).map(|(_, v)| v.clone())))
    }

    /// Get the label of the selected option.
    pub fn selected_label(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.selected.and_then(|i| g.options.get(i).map(|(l, _)| l.clone())))
    }

    /// Get the current error message (if any).
    pub fn error(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.error.clone())
    }
}

impl<T: Clone + PartialEq + Send + Sync> Validatable for Choice<T> {
    type Value = Option<usize>;

    fn validation_value(&self) -> Option<usize> {
        self.selected()
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
        Choice::error(self)
    }

    fn widget_id(&self) -> String {
        self.id_string()
    }
}
