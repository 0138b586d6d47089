//! Filter editors: short-lived modal forms, one per value type.
//!
//! Each editor owns a small form, validates it, and produces a [`Filter`]
//! for the field it was opened on. An editor that fails validation keeps
//! its input and shows the first error next to the offending field.
//!
//! # Example
//!
//! ```
//! use datagrid::editor::{Editor, EditorInput, FilterEditor};
//! use datagrid::filter::{Filter, FilterFieldDescriptor};
//!
//! let editor = Editor::open(FilterFieldDescriptor::number("views", "Views"));
//! editor.input(EditorInput::Text("100".into())).unwrap();
//! assert_eq!(editor.submit(), Ok(Filter::gte("views", 100.0)));
//! ```

mod boolean;
mod number;
mod text;

pub use boolean::BooleanEditor;
pub use number::{NumberEditor, VALUE_NOT_A_NUMBER};
pub use text::{CharEditor, VALUE_REQUIRED};

use crate::error::TableError;
use crate::filter::{Filter, FilterFieldDescriptor, NumberLookup, ValueType};
use crate::form::{Choice, TextInput};
use crate::validation::ValidationResult;

/// Trait for filter editor forms.
pub trait FilterEditor {
    /// The field this editor builds a filter for.
    fn descriptor(&self) -> &FilterFieldDescriptor;

    /// The modal title.
    fn title(&self) -> String {
        format!("Filter by {}", self.descriptor().display_name)
    }

    /// Validate the form, writing errors into the offending fields.
    fn validate(&self) -> ValidationResult;

    /// Build the filter from the current input.
    ///
    /// Only meaningful after a successful [`validate`](Self::validate).
    fn build(&self) -> Filter;

    /// Form fields in display order.
    fn fields(&self) -> Vec<FieldView>;

    /// Validate and, if valid, build the filter.
    fn submit(&self) -> Result<Filter, ValidationResult> {
        let result = self.validate();
        if result.is_valid() {
            Ok(self.build())
        } else {
            Err(result)
        }
    }
}

/// Render-ready snapshot of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Field label.
    pub label: String,
    /// Current text value, or the selected option's label.
    pub value: String,
    /// Option labels for selectors; empty for text inputs.
    pub options: Vec<String>,
    /// Error to show next to the field.
    pub error: Option<String>,
}

impl FieldView {
    fn text(label: &str, input: &TextInput) -> Self {
        Self {
            label: label.to_string(),
            value: input.value(),
            options: Vec::new(),
            error: input.error(),
        }
    }

    fn choice<T: Clone + PartialEq>(label: &str, choice: &Choice<T>) -> Self {
        Self {
            label: label.to_string(),
            value: choice.selected_label().unwrap_or_default(),
            options: choice.labels(),
            error: choice.error(),
        }
    }
}

/// User input directed at the open editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorInput {
    /// Text typed into the value field (text and number editors).
    Text(String),
    /// Operator picked in the number editor.
    Operator(NumberLookup),
    /// Yes/no picked in the boolean editor.
    Answer(bool),
}

/// Result of submitting the open editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorOutcome {
    /// The filter was applied and the editor closed.
    Applied(Filter),
    /// Validation failed; the editor stays open showing the errors.
    Invalid(ValidationResult),
}

/// An open filter editor of any value type.
#[derive(Debug, Clone)]
pub enum Editor {
    Char(CharEditor),
    Number(NumberEditor),
    Boolean(BooleanEditor),
}

impl Editor {
    /// Open the editor matching the field's value type.
    pub fn open(descriptor: FilterFieldDescriptor) -> Self {
        match descriptor.value_type {
            ValueType::Char => Editor::Char(CharEditor::new(descriptor)),
            ValueType::Number => Editor::Number(NumberEditor::new(descriptor)),
            ValueType::Boolean => Editor::Boolean(BooleanEditor::new(descriptor)),
        }
    }

    fn inner(&self) -> &dyn FilterEditor {
        match self {
            Editor::Char(e) => e,
            Editor::Number(e) => e,
            Editor::Boolean(e) => e,
        }
    }

    /// The value type of the field being edited.
    pub fn value_type(&self) -> ValueType {
        self.descriptor().value_type
    }

    /// Route user input to the matching form field.
    pub fn input(&self, input: EditorInput) -> Result<(), TableError> {
        match (self, input) {
            (Editor::Char(e), EditorInput::Text(text)) => e.set_value(text),
            (Editor::Number(e), EditorInput::Text(text)) => e.set_value(text),
            (Editor::Number(e), EditorInput::Operator(lookup)) => e.set_operator(lookup),
            (Editor::Boolean(e), EditorInput::Answer(value)) => e.set_answer(value),
            _ => return Err(TableError::EditorMismatch(self.value_type())),
        }
        Ok(())
    }
}

impl FilterEditor for Editor {
    fn descriptor(&self) -> &FilterFieldDescriptor {
        self.inner().descriptor()
    }

    fn validate(&self) -> ValidationResult {
        self.inner().validate()
    }

    fn build(&self) -> Filter {
        self.inner().build()
    }

    fn fields(&self) -> Vec<FieldView> {
        self.inner().fields()
    }
}
