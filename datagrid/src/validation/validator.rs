//! Fluent validator for editor forms.

use std::sync::LazyLock;

use regex::Regex;

use super::result::{FieldError, ValidationResult};
use super::validatable::Validatable;

/// Plain decimal literal: optional sign, digits with an optional fraction.
/// Rejects the `inf`/`NaN` spellings `f64::from_str` would accept.
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").expect("numeric pattern is valid")
});

type Rule<V> = (Box<dyn Fn(&V) -> bool + Send + Sync>, String);

/// A field check: runs the field's rules, updates its error slot and
/// reports the first failure.
type Check = Box<dyn Fn() -> Option<FieldError> + Send + Sync>;

/// Builder for validating the fields of an editor form.
///
/// Each field reports only its first failing rule, and that message is
/// written into the field's error slot so it renders next to the field.
/// Passing fields have their error cleared.
///
/// # Example
///
/// ```
/// use datagrid::form::TextInput;
/// use datagrid::validation::Validator;
///
/// let value = TextInput::new();
/// let result = Validator::new()
///     .field(&value, "value")
///         .required("value is required")
///     .validate();
///
/// assert_eq!(result.message_for("value"), Some("value is required"));
/// assert_eq!(value.error().as_deref(), Some("value is required"));
/// ```
#[derive(Default)]
pub struct Validator {
    checks: Vec<Check>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start adding rules for a field.
    pub fn field<W: Validatable + Clone + 'static>(
        self,
        widget: &W,
        name: impl Into<String>,
    ) -> FieldBuilder<W> {
        FieldBuilder {
            validator: self,
            widget: widget.clone(),
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Run every field check.
    pub fn validate(self) -> ValidationResult {
        ValidationResult::from_errors(self.checks.iter().filter_map(|check| check()).collect())
    }
}

/// Rules for a single field.
pub struct FieldBuilder<W: Validatable> {
    validator: Validator,
    widget: W,
    name: String,
    rules: Vec<Rule<W::Value>>,
}

impl<W: Validatable + Clone + 'static> FieldBuilder<W> {
    /// Add a rule; `f` returns `true` when the value passes.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&W::Value) -> bool + Send + Sync + 'static,
    {
        self.rules.push((Box::new(f), msg.into()));
        self
    }

    /// Continue with the next field.
    pub fn field<W2: Validatable + Clone + 'static>(
        self,
        widget: &W2,
        name: impl Into<String>,
    ) -> FieldBuilder<W2> {
        self.finish().field(widget, name)
    }

    /// Run every field check.
    pub fn validate(self) -> ValidationResult {
        self.finish().validate()
    }

    fn finish(self) -> Validator {
        let FieldBuilder {
            mut validator,
            widget,
            name,
            rules,
        } = self;

        validator.checks.push(Box::new(move || {
            let value = widget.validation_value();
            let Some((_, message)) = rules.iter().find(|(passes, _)| !passes(&value)) else {
                widget.clear_error();
                return None;
            };
            widget.set_error(message.clone());
            Some(FieldError {
                field_name: name.clone(),
                widget_id: widget.widget_id(),
                message: message.clone(),
            })
        }));
        validator
    }
}

// Built-in rules for String values
impl<W: Validatable<Value = String> + Clone + 'static> FieldBuilder<W> {
    /// Require the field to be non-blank.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require a plain decimal number that fits a finite `f64`.
    ///
    /// Blank is valid; use `required()` for non-blank.
    pub fn numeric(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| {
                let v = v.trim();
                v.is_empty()
                    || (NUMERIC.is_match(v) && v.parse::<f64>().is_ok_and(f64::is_finite))
            },
            msg,
        )
    }
}

// Built-in rules for Option<usize> values
impl<W: Validatable<Value = Option<usize>> + Clone + 'static> FieldBuilder<W> {
    /// Require that an option is selected.
    pub fn selected(self, msg: impl Into<String>) -> Self {
        self.rule(|v| v.is_some(), msg)
    }
}
