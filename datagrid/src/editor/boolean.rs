//! Yes/no filter editor.

use crate::filter::{Filter, FilterFieldDescriptor};
use crate::form::Choice;
use crate::validation::{ValidationResult, Validator};

use super::{FieldView, FilterEditor};

/// Editor producing an exact yes/no filter. "Yes" is pre-selected.
#[derive(Debug, Clone)]
pub struct BooleanEditor {
    descriptor: FilterFieldDescriptor,
    answer: Choice<bool>,
}

impl BooleanEditor {
    /// Create an editor for a yes/no field.
    pub fn new(descriptor: FilterFieldDescriptor) -> Self {
        Self {
            descriptor,
            answer: Choice::new(vec![("Yes", true), ("No", false)]).with_selected(0),
        }
    }

    /// The yes/no selector.
    pub fn answer(&self) -> &Choice<bool> {
        &self.answer
    }

    /// Select yes or no.
    pub fn set_answer(&self, value: bool) {
        self.answer.select_value(&value);
    }
}

impl FilterEditor for BooleanEditor {
    fn descriptor(&self) -> &FilterFieldDescriptor {
        &self.descriptor
    }

    fn validate(&self) -> ValidationResult {
        Validator::new()
            .field(&self.answer, "value")
            .selected("value is required")
            .validate()
    }

    fn build(&self) -> Filter {
        Filter::exact(
            self.descriptor.field.clone(),
            self.answer.value().unwrap_or(true),
        )
    }

    fn fields(&self) -> Vec<FieldView> {
        vec![FieldView::choice("Value", &self.answer)]
    }
}
