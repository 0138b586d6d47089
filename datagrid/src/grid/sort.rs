//! Single-column ordering state.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The active ordering: one field and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    /// Field to order by.
    pub field: String,
    /// Direction of the ordering.
    pub direction: Direction,
}

impl OrderBy {
    /// Creates an ascending order on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending order on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

/// Sort indicator shown in a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortIndicator {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortIndicator {
    /// Glyph for the header, empty when unsorted.
    pub fn glyph(self) -> &'static str {
        match self {
            SortIndicator::None => "",
            SortIndicator::Ascending => "▲",
            SortIndicator::Descending => "▼",
        }
    }
}

/// Ordering state of a grid.
///
/// Clicking cycles a column `None -> Asc -> Desc -> Asc -> ...`. Clicking
/// another column replaces the ordering and starts it at `Asc`. Clicks
/// never remove the ordering once set; only [`clear`](Self::clear) does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    current: Option<OrderBy>,
}

impl SortState {
    /// Create a state seeded with an optional ordering.
    pub fn new(initial: Option<OrderBy>) -> Self {
        Self { current: initial }
    }

    /// The active ordering, if any.
    pub fn current(&self) -> Option<&OrderBy> {
        self.current.as_ref()
    }

    /// Advance the cycle for `field` and return the new ordering.
    pub fn cycle(&mut self, field: &str) -> OrderBy {
        let next = match &self.current {
            Some(order) if order.field == field => OrderBy {
                field: order.field.clone(),
                direction: order.direction.flipped(),
            },
            _ => OrderBy::asc(field),
        };
        self.current = Some(next.clone());
        next
    }

    /// Remove the ordering. Returns `false` if there was none.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Indicator for a column header.
    pub fn indicator(&self, field: &str) -> SortIndicator {
        match &self.current {
            Some(order) if order.field == field => match order.direction {
                Direction::Asc => SortIndicator::Ascending,
                Direction::Desc => SortIndicator::Descending,
            },
            _ => SortIndicator::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_never_returns_to_none() {
        let mut sort = SortState::default();
        assert_eq!(sort.cycle("views").direction, Direction::Asc);
        assert_eq!(sort.cycle("views").direction, Direction::Desc);
        assert_eq!(sort.cycle("views").direction, Direction::Asc);
        assert!(sort.current().is_some());
    }

    #[test]
    fn test_other_column_replaces_ordering() {
        let mut sort = SortState::new(Some(OrderBy::desc("views")));
        assert_eq!(sort.cycle("title"), OrderBy::asc("title"));
        assert_eq!(sort.indicator("views"), SortIndicator::None);
        assert_eq!(sort.indicator("title"), SortIndicator::Ascending);
    }

    #[test]
    fn test_clear() {
        let mut sort = SortState::new(Some(OrderBy::asc("views")));
        assert!(sort.clear());
        assert!(!sort.clear());
    }
}
