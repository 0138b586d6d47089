//! Form validation for filter editors.
//!
//! A fluent API over [`Validatable`] form fields. Failing fields get their
//! first error message written into their own error slot, so an editor can
//! render it next to the field and block submission.
//!
//! # Example
//!
//! ```
//! use datagrid::form::TextInput;
//! use datagrid::validation::Validator;
//!
//! let value = TextInput::new();
//! value.set_value("12.5");
//! let result = Validator::new()
//!     .field(&value, "value")
//!         .numeric("value must be a number")
//!     .validate();
//!
//! assert!(result.is_valid());
//! ```

mod result;
mod validatable;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
