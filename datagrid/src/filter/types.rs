//! Filter field descriptors and filter values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value type of a filterable field.
///
/// Determines which editor is used to build a filter for the field and
/// which lookups are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Free text, filtered with a case-insensitive contains lookup.
    Char,
    /// Numeric, filtered with an inclusive lower or upper bound.
    Number,
    /// Yes/no, filtered with an exact match.
    Boolean,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Char => "char",
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Static description of one filterable field, supplied by the host.
///
/// # Example
///
/// ```
/// use datagrid::filter::{FilterFieldDescriptor, ValueType};
///
/// let views = FilterFieldDescriptor::number("views", "Views");
/// assert_eq!(views.value_type, ValueType::Number);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterFieldDescriptor {
    /// Unique key of the field.
    pub field: String,
    /// Human-readable name shown in the filter picker.
    pub display_name: String,
    /// Value type of the field.
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

impl FilterFieldDescriptor {
    /// Creates a descriptor with an explicit value type.
    pub fn new(
        field: impl Into<String>,
        display_name: impl Into<String>,
        value_type: ValueType,
    ) -> Self {
        Self {
            field: field.into(),
            display_name: display_name.into(),
            value_type,
        }
    }

    /// Creates a text field descriptor.
    pub fn char(field: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(field, display_name, ValueType::Char)
    }

    /// Creates a numeric field descriptor.
    pub fn number(field: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(field, display_name, ValueType::Number)
    }

    /// Creates a yes/no field descriptor.
    pub fn boolean(field: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(field, display_name, ValueType::Boolean)
    }
}

/// Lookup used by text filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CharLookup {
    /// Case-insensitive substring match.
    #[default]
    #[serde(rename = "icontains")]
    Contains,
}

/// Lookup used by numeric filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumberLookup {
    /// `field <= value`
    #[serde(rename = "lte")]
    LessOrEqual,
    /// `field >= value`
    #[default]
    #[serde(rename = "gte")]
    GreaterOrEqual,
}

impl NumberLookup {
    /// Both lookups, in the order an operator selector lists them.
    pub const ALL: [NumberLookup; 2] = [NumberLookup::GreaterOrEqual, NumberLookup::LessOrEqual];

    /// The comparison symbol for display.
    pub fn symbol(self) -> &'static str {
        match self {
            NumberLookup::LessOrEqual => "<=",
            NumberLookup::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for NumberLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Lookup used by yes/no filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BooleanLookup {
    /// `field == value`
    #[default]
    #[serde(rename = "exact")]
    Exact,
}

/// A concrete filter narrowing the result set on one field.
///
/// The variant always matches the [`ValueType`] of the field it targets.
///
/// # Example
///
/// ```
/// use datagrid::filter::{Filter, NumberLookup};
///
/// let filter = Filter::gte("views", 100.0);
/// assert_eq!(filter.field(), "views");
/// assert!(matches!(filter, Filter::Number { lookup: NumberLookup::GreaterOrEqual, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Filter {
    /// Text filter.
    Char {
        field: String,
        #[serde(rename = "lookupType", default)]
        lookup: CharLookup,
        value: String,
    },
    /// Numeric filter.
    Number {
        field: String,
        #[serde(rename = "lookupType", default)]
        lookup: NumberLookup,
        value: f64,
    },
    /// Yes/no filter.
    Boolean {
        field: String,
        #[serde(rename = "lookupType", default)]
        lookup: BooleanLookup,
        value: bool,
    },
}

impl Filter {
    /// Creates a contains filter: `field` contains `value`, ignoring case.
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Char {
            field: field.into(),
            lookup: CharLookup::Contains,
            value: value.into(),
        }
    }

    /// Creates a numeric filter with an explicit lookup.
    pub fn number(field: impl Into<String>, lookup: NumberLookup, value: f64) -> Self {
        Filter::Number {
            field: field.into(),
            lookup,
            value,
        }
    }

    /// Creates a lower bound filter: `field >= value`.
    pub fn gte(field: impl Into<String>, value: f64) -> Self {
        Self::number(field, NumberLookup::GreaterOrEqual, value)
    }

    /// Creates an upper bound filter: `field <= value`.
    pub fn lte(field: impl Into<String>, value: f64) -> Self {
        Self::number(field, NumberLookup::LessOrEqual, value)
    }

    /// Creates an exact yes/no filter.
    pub fn exact(field: impl Into<String>, value: bool) -> Self {
        Filter::Boolean {
            field: field.into(),
            lookup: BooleanLookup::Exact,
            value,
        }
    }

    /// Returns the field this filter targets.
    pub fn field(&self) -> &str {
        match self {
            Filter::Char { field, .. }
            | Filter::Number { field, .. }
            | Filter::Boolean { field, .. } => field,
        }
    }

    /// Returns the value type of this filter.
    pub fn value_type(&self) -> ValueType {
        match self {
            Filter::Char { .. } => ValueType::Char,
            Filter::Number { .. } => ValueType::Number,
            Filter::Boolean { .. } => ValueType::Boolean,
        }
    }

    /// Renders a short label using the field's display name, e.g.
    /// `Views >= 100` or `Title contains "cat"`.
    pub fn label(&self, display_name: &str) -> String {
        match self {
            Filter::Char { value, .. } => format!("{} contains \"{}\"", display_name, value),
            Filter::Number { lookup, value, .. } => {
                format!("{} {} {}", display_name, lookup.symbol(), value)
            }
            Filter::Boolean { value, .. } => {
                format!("{}: {}", display_name, if *value { "Yes" } else { "No" })
            }
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(self.field()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accessors() {
        let filter = Filter::contains("title", "cat");
        assert_eq!(filter.field(), "title");
        assert_eq!(filter.value_type(), ValueType::Char);

        let filter = Filter::exact("published", false);
        assert_eq!(filter.value_type(), ValueType::Boolean);
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(Filter::gte("views", 100.0).label("Views"), "Views >= 100");
        assert_eq!(Filter::lte("likes", 2.5).label("Likes"), "Likes <= 2.5");
        assert_eq!(
            Filter::contains("title", "cat").label("Title"),
            "Title contains \"cat\""
        );
        assert_eq!(Filter::exact("published", true).to_string(), "published: Yes");
    }

    #[test]
    fn test_number_lookup_default_is_gte() {
        assert_eq!(NumberLookup::default(), NumberLookup::GreaterOrEqual);
    }
}
