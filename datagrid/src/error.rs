//! Error types

use thiserror::Error;

use crate::filter::ValueType;

/// Errors detected while validating a [`TableConfig`](crate::TableConfig).
///
/// These are programmer errors in the host's table setup. Table
/// construction fails with one of these instead of rendering a table that
/// silently ignores part of its configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The main quick-filter field is declared with a non-text value type.
    #[error("main filtering field '{field}' must be of type char, found {value_type}")]
    MainFieldNotChar {
        /// The configured main field.
        field: String,
        /// Its declared value type.
        value_type: ValueType,
    },

    /// The main quick-filter field is not one of the filtering options.
    #[error("main filtering field '{0}' is not among the filtering options")]
    UnknownMainField(String),

    /// Two filtering options share the same field key.
    #[error("filtering option '{0}' is declared more than once")]
    DuplicateFilterField(String),

    /// Two columns share the same field key.
    #[error("column '{0}' is declared more than once")]
    DuplicateColumn(String),

    /// No page sizes were configured.
    #[error("at least one page size is required")]
    EmptyPageSizes,

    /// A page size of zero was configured.
    #[error("page sizes must be greater than zero")]
    ZeroPageSize,

    /// The default page size is not one of the configured sizes.
    #[error("default page size {size} is not one of {sizes:?}")]
    UnsupportedDefaultPageSize {
        /// The configured default.
        size: usize,
        /// The configured set of sizes.
        sizes: Vec<usize>,
    },

    /// The default ordering names a column that does not exist.
    #[error("default ordering references unknown column '{0}'")]
    UnknownOrderingField(String),

    /// The default ordering names a column with ordering disabled.
    #[error("default ordering references column '{0}' which has ordering disabled")]
    OrderingNotEnabled(String),

    /// A default filter could not be applied.
    #[error("default filter on '{field}' is invalid: {reason}")]
    InvalidDefaultFilter {
        /// The filter's field.
        field: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Errors returned by table operations invoked with inputs the current
/// state cannot accept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// The field is not one of the filtering options.
    #[error("unknown filtering field '{0}'")]
    UnknownField(String),

    /// The field already has an applied filter.
    #[error("field '{0}' already has an applied filter")]
    FieldNotAvailable(String),

    /// An editor operation was requested while no editor is open.
    #[error("no filter editor is open")]
    NoEditorOpen,

    /// An editor input does not fit the open editor's value type.
    #[error("input does not apply to the open {0} editor")]
    EditorMismatch(ValueType),

    /// A page size outside the configured set was requested.
    #[error("page size {size} is not one of {sizes:?}")]
    UnsupportedPageSize {
        /// The requested size.
        size: usize,
        /// The configured set of sizes.
        sizes: Vec<usize>,
    },
}
