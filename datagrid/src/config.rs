//! Table configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::filter::{Filter, FilterFieldDescriptor, ValueType};
use crate::grid::OrderBy;
use crate::pagination::DEFAULT_PAGE_SIZES;

/// Per-table configuration supplied by the host.
///
/// Every field has a default, so a host only sets what it needs. The
/// configuration is checked when the table is built; an invalid one makes
/// [`DataTable::new`](crate::DataTable::new) fail.
///
/// # Example
///
/// ```
/// use datagrid::TableConfig;
/// use datagrid::filter::FilterFieldDescriptor;
/// use datagrid::grid::OrderBy;
///
/// let config = TableConfig::new(vec![
///     FilterFieldDescriptor::char("title", "Title"),
///     FilterFieldDescriptor::number("views", "Views"),
/// ])
/// .with_main_field("title")
/// .with_default_page_size(30)
/// .with_default_ordering(OrderBy::desc("views"));
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    /// Filterable fields.
    ///
    /// Default: none
    pub filtering_options: Vec<FilterFieldDescriptor>,

    /// Text field offered as a one-click quick filter.
    ///
    /// Default: none (no quick filter)
    pub main_filtering_field: Option<String>,

    /// Selectable page sizes.
    ///
    /// Default: `[10, 30, 50]`
    pub page_sizes: Vec<usize>,

    /// Page size used initially. Must be one of `page_sizes`.
    ///
    /// Default: 10
    pub default_page_size: usize,

    /// Ordering used initially. Must name an orderable column.
    ///
    /// Default: unsorted
    pub default_ordering: Option<OrderBy>,

    /// Filters applied initially.
    ///
    /// Default: none
    pub default_filters: Vec<Filter>,

    /// Go back to the first page when filters or ordering change.
    ///
    /// Default: true
    pub reset_page_on_change: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            filtering_options: Vec::new(),
            main_filtering_field: None,
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZES[0],
            default_ordering: None,
            default_filters: Vec::new(),
            reset_page_on_change: true,
        }
    }
}

impl TableConfig {
    /// Creates a config with the given filtering options and defaults for
    /// everything else.
    pub fn new(filtering_options: Vec<FilterFieldDescriptor>) -> Self {
        Self {
            filtering_options,
            ..Default::default()
        }
    }

    /// Sets the quick-filter field.
    pub fn with_main_field(mut self, field: impl Into<String>) -> Self {
        self.main_filtering_field = Some(field.into());
        self
    }

    /// Sets the selectable page sizes and the initial one.
    pub fn with_page_sizes(mut self, sizes: Vec<usize>, default_size: usize) -> Self {
        self.page_sizes = sizes;
        self.default_page_size = default_size;
        self
    }

    /// Sets the initial page size.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Sets the initial ordering.
    pub fn with_default_ordering(mut self, ordering: OrderBy) -> Self {
        self.default_ordering = Some(ordering);
        self
    }

    /// Adds a filter applied initially.
    pub fn with_default_filter(mut self, filter: Filter) -> Self {
        self.default_filters.push(filter);
        self
    }

    /// Sets whether filter/ordering changes go back to the first page.
    pub fn reset_page_on_change(mut self, reset: bool) -> Self {
        self.reset_page_on_change = reset;
        self
    }

    /// Looks up a filtering option by field.
    pub fn option(&self, field: &str) -> Option<&FilterFieldDescriptor> {
        self.filtering_options.iter().find(|o| o.field == field)
    }

    /// Checks the parts of the configuration that do not depend on columns.
    ///
    /// Column-dependent checks (duplicate columns, default ordering) are
    /// made when the grid is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for option in &self.filtering_options {
            if !seen.insert(option.field.as_str()) {
                return Err(ConfigError::DuplicateFilterField(option.field.clone()));
            }
        }

        if let Some(main) = &self.main_filtering_field {
            let option = self
                .option(main)
                .ok_or_else(|| ConfigError::UnknownMainField(main.clone()))?;
            if option.value_type != ValueType::Char {
                return Err(ConfigError::MainFieldNotChar {
                    field: main.clone(),
                    value_type: option.value_type,
                });
            }
        }

        if self.page_sizes.is_empty() {
            return Err(ConfigError::EmptyPageSizes);
        }
        if self.page_sizes.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.page_sizes.contains(&self.default_page_size) {
            return Err(ConfigError::UnsupportedDefaultPageSize {
                size: self.default_page_size,
                sizes: self.page_sizes.clone(),
            });
        }

        let mut filtered = HashSet::new();
        for filter in &self.default_filters {
            let field = filter.field();
            let Some(option) = self.option(field) else {
                return Err(ConfigError::InvalidDefaultFilter {
                    field: field.to_string(),
                    reason: "unknown field",
                });
            };
            if option.value_type != filter.value_type() {
                return Err(ConfigError::InvalidDefaultFilter {
                    field: field.to_string(),
                    reason: "value type does not match the field",
                });
            }
            if !filtered.insert(field) {
                return Err(ConfigError::InvalidDefaultFilter {
                    field: field.to_string(),
                    reason: "field is filtered more than once",
                });
            }
        }

        Ok(())
    }
}
