//! Text filter editor.

use crate::filter::{Filter, FilterFieldDescriptor};
use crate::form::TextInput;
use crate::validation::{ValidationResult, Validator};

use super::{FieldView, FilterEditor};

/// Message shown when the text value is left blank.
pub const VALUE_REQUIRED: &str = "value is required";

/// Editor producing a contains filter from one required text value.
#[derive(Debug, Clone)]
pub struct CharEditor {
    descriptor: FilterFieldDescriptor,
    value: TextInput,
}

impl CharEditor {
    /// Create an editor for a text field.
    pub fn new(descriptor: FilterFieldDescriptor) -> Self {
        Self {
            descriptor,
            value: TextInput::new(),
        }
    }

    /// The value input.
    pub fn value(&self) -> &TextInput {
        &self.value
    }

    /// Replace the typed value.
    pub fn set_value(&self, value: impl Into<String>) {
        self.value.set_value(value);
    }
}

impl FilterEditor for CharEditor {
    fn descriptor(&self) -> &FilterFieldDescriptor {
        &self.descriptor
    }

    fn validate(&self) -> ValidationResult {
        Validator::new()
            .field(&self.value, "value")
            .required(VALUE_REQUIRED)
            .validate()
    }

    fn build(&self) -> Filter {
        Filter::contains(self.descriptor.field.clone(), self.value.value().trim())
    }

    fn fields(&self) -> Vec<FieldView> {
        vec![FieldView::text("Value", &self.value)]
    }
}
