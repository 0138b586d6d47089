//! Validatable trait for form fields that support validation.

/// Trait for form fields that can be validated.
///
/// Provides a common interface for extracting values from fields and
/// setting/clearing the error shown next to them.
pub trait Validatable: Send + Sync {
    /// The value type used for validation.
    type Value;

    /// Extract the current value for validation.
    fn validation_value(&self) -> Self::Value;

    /// Set a validation error on this field.
    fn set_error(&self, msg: impl Into<String>);

    /// Clear the validation error.
    fn clear_error(&self);

    /// Get the current validation error message (if any).
    fn error(&self) -> Option<String>;

    /// Check if the field has a validation error.
    fn has_error(&self) -> bool {
        self.error().is_some()
    }

    /// Get the widget ID of this field.
    fn widget_id(&self) -> String;
}
