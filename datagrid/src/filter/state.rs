//! Applied/available filter bookkeeping.

use std::sync::Arc;

use log::{debug, warn};

use super::types::{Filter, FilterFieldDescriptor};

/// An action understood by [`FilterState::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    /// Apply a filter unless its field already has one.
    Apply(Filter),
    /// Remove the filter applied to a field.
    Remove(String),
    /// Remove every applied filter.
    Clear,
}

/// Filter state of a table.
///
/// Holds the filterable fields ("options"), the applied filters, and the
/// options that can still be applied. A field carries at most one applied
/// filter; the available set is recomputed from scratch after every
/// transition as `options - applied`, in option declaration order.
///
/// # Example
///
/// ```
/// use datagrid::filter::{Filter, FilterFieldDescriptor, FilterState};
///
/// let mut state = FilterState::new(vec![
///     FilterFieldDescriptor::char("title", "Title"),
///     FilterFieldDescriptor::number("views", "Views"),
/// ]);
///
/// assert!(state.apply(Filter::gte("views", 100.0)));
/// assert!(!state.apply(Filter::lte("views", 5.0)));
/// assert_eq!(state.available().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FilterState {
    options: Arc<[FilterFieldDescriptor]>,
    applied: Vec<Filter>,
    /// Indices into `options`, derived from `applied`.
    available: Vec<usize>,
}

impl FilterState {
    /// Creates a state with no filters applied.
    pub fn new(options: impl Into<Arc<[FilterFieldDescriptor]>>) -> Self {
        let mut state = Self {
            options: options.into(),
            applied: Vec::new(),
            available: Vec::new(),
        };
        state.recompute();
        state
    }

    /// Returns all filterable fields.
    pub fn options(&self) -> &[FilterFieldDescriptor] {
        &self.options
    }

    /// Looks up the descriptor of a field.
    pub fn option(&self, field: &str) -> Option<&FilterFieldDescriptor> {
        self.options.iter().find(|o| o.field == field)
    }

    /// Returns the applied filters in application order.
    pub fn applied(&self) -> &[Filter] {
        &self.applied
    }

    /// Returns the applied filter for a field, if any.
    pub fn filter_for(&self, field: &str) -> Option<&Filter> {
        self.applied.iter().find(|f| f.field() == field)
    }

    /// Returns the fields that have no applied filter.
    pub fn available(&self) -> Vec<&FilterFieldDescriptor> {
        self.available.iter().map(|&i| &self.options[i]).collect()
    }

    /// Checks whether a field can still receive a filter.
    pub fn is_available(&self, field: &str) -> bool {
        self.available.iter().any(|&i| self.options[i].field == field)
    }

    /// Checks whether any filter is applied.
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    /// Applies a filter.
    ///
    /// Returns `false` without changing anything when the field already has
    /// a filter, is not a filtering option, or has a different value type
    /// than the filter.
    pub fn apply(&mut self, filter: Filter) -> bool {
        let Some(option) = self.option(filter.field()) else {
            warn!("Rejected filter on unknown field '{}'", filter.field());
            return false;
        };
        if option.value_type != filter.value_type() {
            warn!(
                "Rejected {} filter on {} field '{}'",
                filter.value_type(),
                option.value_type,
                option.field
            );
            return false;
        }
        if self.filter_for(filter.field()).is_some() {
            warn!("Rejected second filter on field '{}'", filter.field());
            return false;
        }

        debug!("Filter applied: {}", filter);
        self.applied.push(filter);
        self.recompute();
        true
    }

    /// Removes the filter applied to `field`.
    ///
    /// Returns `false` when the field has no applied filter.
    pub fn remove(&mut self, field: &str) -> bool {
        let before = self.applied.len();
        self.applied.retain(|f| f.field() != field);
        if self.applied.len() == before {
            return false;
        }

        debug!("Filter removed: {}", field);
        self.recompute();
        true
    }

    /// Removes every applied filter.
    ///
    /// Returns `false` when nothing was applied.
    pub fn clear(&mut self) -> bool {
        if self.applied.is_empty() {
            return false;
        }
        debug!("Cleared {} filter(s)", self.applied.len());
        self.applied.clear();
        self.recompute();
        true
    }

    /// Reducer form of the transitions: consumes the state and returns the
    /// next one.
    pub fn reduce(mut self, action: FilterAction) -> Self {
        match action {
            FilterAction::Apply(filter) => {
                self.apply(filter);
            }
            FilterAction::Remove(field) => {
                self.remove(&field);
            }
            FilterAction::Clear => {
                self.clear();
            }
        }
        self
    }

    fn recompute(&mut self) {
        let applied = &self.applied;
        self.available = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, o)| !applied.iter().any(|f| f.field() == o.field))
            .map(|(i, _)| i)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn options() -> Vec<FilterFieldDescriptor> {
        vec![
            FilterFieldDescriptor::char("title", "Title"),
            FilterFieldDescriptor::number("views", "Views"),
            FilterFieldDescriptor::boolean("published", "Published"),
        ]
    }

    fn assert_partition(state: &FilterState) {
        let applied: HashSet<&str> = state.applied().iter().map(|f| f.field()).collect();
        let available: HashSet<&str> = state.available().iter().map(|o| o.field.as_str()).collect();
        let all: HashSet<&str> = state.options().iter().map(|o| o.field.as_str()).collect();

        assert!(applied.is_disjoint(&available));
        assert_eq!(&applied | &available, all);
        assert_eq!(applied.len(), state.applied().len());
    }

    #[test]
    fn test_apply_removes_from_available() {
        let mut state = FilterState::new(options());
        assert!(state.apply(Filter::gte("views", 100.0)));
        assert!(!state.is_available("views"));
        assert_eq!(state.available().len(), 2);
        assert_partition(&state);
    }

    #[test]
    fn test_second_filter_on_same_field_is_rejected() {
        let mut state = FilterState::new(options());
        assert!(state.apply(Filter::contains("title", "cat")));
        assert!(!state.apply(Filter::contains("title", "dog")));
        assert_eq!(state.applied(), &[Filter::contains("title", "cat")]);
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let mut state = FilterState::new(options());
        assert!(!state.apply(Filter::contains("views", "100")));
        assert!(!state.apply(Filter::exact("unknown", true)));
        assert!(state.is_empty());
    }

    #[test]
    fn test_remove_restores_available_in_declaration_order() {
        let mut state = FilterState::new(options());
        state.apply(Filter::contains("title", "cat"));
        state.apply(Filter::exact("published", true));
        assert!(state.remove("title"));
        assert!(!state.remove("title"));

        let fields: Vec<&str> = state.available().iter().map(|o| o.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "views"]);
    }

    #[test]
    fn test_partition_holds_over_action_sequence() {
        let actions = [
            FilterAction::Apply(Filter::gte("views", 1.0)),
            FilterAction::Apply(Filter::lte("views", 2.0)),
            FilterAction::Apply(Filter::contains("title", "a")),
            FilterAction::Remove("views".into()),
            FilterAction::Apply(Filter::lte("views", 3.0)),
            FilterAction::Remove("missing".into()),
            FilterAction::Apply(Filter::exact("published", false)),
            FilterAction::Clear,
            FilterAction::Apply(Filter::contains("title", "b")),
        ];

        let mut state = FilterState::new(options());
        for action in actions {
            state = state.reduce(action);
            assert_partition(&state);
        }
        assert_eq!(state.applied(), &[Filter::contains("title", "b")]);
    }
}
