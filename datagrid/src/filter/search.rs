//! Typeahead over the available filter fields.

use super::state::FilterState;
use super::types::{Filter, FilterFieldDescriptor};

/// The one-click suggestion offered for the main text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFilter {
    /// The main field's key.
    pub field: String,
    /// The main field's display name.
    pub display_name: String,
    /// The typed text to search for.
    pub value: String,
}

impl QuickFilter {
    /// Converts the suggestion into the contains filter it stands for.
    pub fn into_filter(self) -> Filter {
        Filter::contains(self.field, self.value)
    }
}

/// Text typed into the filter search box.
///
/// Narrows the selectable fields to the available ones whose display name
/// starts with the typed text, ignoring case, and derives the quick-filter
/// suggestion for the main field.
#[derive(Debug, Clone, Default)]
pub struct FilterSearch {
    text: String,
}

impl FilterSearch {
    /// Creates an empty search box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the typed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the typed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Empties the search box.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Returns the available fields matching the typed text.
    ///
    /// An empty box matches every available field.
    pub fn matches<'a>(&self, state: &'a FilterState) -> Vec<&'a FilterFieldDescriptor> {
        let needle = self.text.trim().to_lowercase();
        state
            .available()
            .into_iter()
            .filter(|o| o.display_name.to_lowercase().starts_with(&needle))
            .collect()
    }

    /// Returns the quick-filter suggestion, if one should be shown.
    ///
    /// Requires non-blank text and a main field that is still available.
    pub fn quick_suggestion(
        &self,
        state: &FilterState,
        main_field: Option<&str>,
    ) -> Option<QuickFilter> {
        let value = self.text.trim();
        if value.is_empty() {
            return None;
        }
        let field = main_field?;
        if !state.is_available(field) {
            return None;
        }
        let option = state.option(field)?;
        Some(QuickFilter {
            field: option.field.clone(),
            display_name: option.display_name.clone(),
            value: value.to_string(),
        })
    }
}
