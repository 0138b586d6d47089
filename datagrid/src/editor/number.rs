//! Numeric filter editor.

use crate::filter::{Filter, FilterFieldDescriptor, NumberLookup};
use crate::form::{Choice, TextInput};
use crate::validation::{ValidationResult, Validator};

use super::{FieldView, FilterEditor};

/// Message shown when the value is not a plain decimal number.
pub const VALUE_NOT_A_NUMBER: &str = "value must be a number";

/// Editor producing an inclusive bound filter.
///
/// The operator defaults to `>=`. A blank value means zero.
#[derive(Debug, Clone)]
pub struct NumberEditor {
    descriptor: FilterFieldDescriptor,
    operator: Choice<NumberLookup>,
    value: TextInput,
}

impl NumberEditor {
    /// Create an editor for a numeric field.
    pub fn new(descriptor: FilterFieldDescriptor) -> Self {
        let operator = Choice::new(
            NumberLookup::ALL
                .iter()
                .map(|l| (l.symbol(), *l))
                .collect::<Vec<_>>(),
        );
        operator.select_value(&NumberLookup::default());
        Self {
            descriptor,
            operator,
            value: TextInput::new(),
        }
    }

    /// The operator selector.
    pub fn operator(&self) -> &Choice<NumberLookup> {
        &self.operator
    }

    /// The value input.
    pub fn value(&self) -> &TextInput {
        &self.value
    }

    /// Select the comparison operator.
    pub fn set_operator(&self, lookup: NumberLookup) {
        self.operator.select_value(&lookup);
    }

    /// Replace the typed value.
    pub fn set_value(&self, value: impl Into<String>) {
        self.value.set_value(value);
    }

    fn parsed_value(&self) -> f64 {
        let raw = self.value.value();
        let raw = raw.trim();
        if raw.is_empty() {
            return 0.0;
        }
        raw.parse().unwrap_or(0.0)
    }
}

impl FilterEditor for NumberEditor {
    fn descriptor(&self) -> &FilterFieldDescriptor {
        &self.descriptor
    }

    fn validate(&self) -> ValidationResult {
        Validator::new()
            .field(&self.value, "value")
            .numeric(VALUE_NOT_A_NUMBER)
            .validate()
    }

    fn build(&self) -> Filter {
        let lookup = self.operator.value().unwrap_or_default();
        Filter::number(self.descriptor.field.clone(), lookup, self.parsed_value())
    }

    fn fields(&self) -> Vec<FieldView> {
        vec![
            FieldView::choice("Operator", &self.operator),
            FieldView::text("Value", &self.value),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> NumberEditor {
        NumberEditor::new(FilterFieldDescriptor::number("views", "Views"))
    }

    #[test]
    fn test_blank_value_means_zero() {
        let editor = editor();
        assert_eq!(editor.submit(), Ok(Filter::gte("views", 0.0)));
    }

    #[test]
    fn test_operator_and_value() {
        let editor = editor();
        editor.set_operator(NumberLookup::LessOrEqual);
        editor.set_value("250.5");
        assert_eq!(editor.submit(), Ok(Filter::lte("views", 250.5)));
    }

    #[test]
    fn test_malformed_number_blocks_submission() {
        let editor = editor();
        editor.set_value("lots");
        assert!(editor.submit().is_err());
        assert_eq!(editor.value().error().as_deref(), Some(VALUE_NOT_A_NUMBER));
    }

    #[test]
    fn test_overflowing_number_blocks_submission() {
        let editor = editor();
        editor.set_value(format!("1{}", "0".repeat(400)));
        assert!(editor.submit().is_err());
        assert_eq!(editor.value().error().as_deref(), Some(VALUE_NOT_A_NUMBER));
    }
}
