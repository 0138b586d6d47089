//! REST query-string translation of the table state.
//!
//! Filters become Django-style lookups (`views__gte=100`,
//! `title__icontains=cat`, `published=true`), the ordering becomes
//! `ordering=field` or `ordering=-field`, and pagination becomes `limit`
//! and `offset`.

use datagrid::TableQuery;
use datagrid::filter::{Filter, NumberLookup};
use datagrid::grid::{Direction, OrderBy};

/// Ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Translate a table query. Filters come first in application order,
    /// then the ordering, then `limit` and `offset`.
    pub fn from_query(query: &TableQuery) -> Self {
        let mut pairs: Vec<(String, String)> = query.filters.iter().map(filter_param).collect();
        if let Some(order) = &query.ordering {
            pairs.push(("ordering".to_string(), ordering_value(order)));
        }
        pairs.push(("limit".to_string(), query.pagination.limit.to_string()));
        pairs.push(("offset".to_string(), query.pagination.offset.to_string()));
        Self { pairs }
    }

    /// Build from raw pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// All parameters in order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// First value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Percent-encoded `key=value&...` string.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Converts a filter to its query parameter.
pub fn filter_param(filter: &Filter) -> (String, String) {
    match filter {
        Filter::Char { field, value, .. } => (format!("{}__icontains", field), value.clone()),
        Filter::Number {
            field,
            lookup,
            value,
        } => {
            let suffix = match lookup {
                NumberLookup::GreaterOrEqual => "gte",
                NumberLookup::LessOrEqual => "lte",
            };
            (format!("{}__{}", field, suffix), value.to_string())
        }
        Filter::Boolean { field, value, .. } => (field.clone(), value.to_string()),
    }
}

/// Converts an ordering to the `ordering` parameter value.
pub fn ordering_value(order: &OrderBy) -> String {
    match order.direction {
        Direction::Asc => order.field.clone(),
        Direction::Desc => format!("-{}", order.field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datagrid::pagination::Pagination;

    #[test]
    fn test_filter_params() {
        assert_eq!(
            filter_param(&Filter::contains("title", "cat")),
            ("title__icontains".to_string(), "cat".to_string())
        );
        assert_eq!(
            filter_param(&Filter::gte("views", 100.0)),
            ("views__gte".to_string(), "100".to_string())
        );
        assert_eq!(
            filter_param(&Filter::lte("duration", 2.5)),
            ("duration__lte".to_string(), "2.5".to_string())
        );
        assert_eq!(
            filter_param(&Filter::exact("published", false)),
            ("published".to_string(), "false".to_string())
        );
    }

    #[test]
    fn test_query_string_is_encoded() {
        let query = TableQuery {
            filters: vec![Filter::contains("title", "cats & dogs")],
            ordering: Some(OrderBy::desc("views")),
            pagination: Pagination {
                limit: 10,
                offset: 20,
            },
        };
        assert_eq!(
            QueryParams::from_query(&query).to_query_string(),
            "title__icontains=cats%20%26%20dogs&ordering=-views&limit=10&offset=20"
        );
    }
}
