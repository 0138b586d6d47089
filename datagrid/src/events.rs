//! Outbound table events and input handling results.
//!
//! Every event carries the complete new value of the state it reports,
//! never a delta. A host that only applies the latest event of each kind
//! ends up with the same state as one that applies all of them.

use serde::{Deserialize, Serialize};

use crate::filter::Filter;
use crate::grid::OrderBy;
use crate::pagination::Pagination;

/// Result of handling a user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The action was ignored (no-op in the current state).
    Ignored,
    /// The action was handled.
    Consumed,
}

impl EventResult {
    /// Check if the action was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

/// A change the host needs to react to, usually by re-requesting data.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// The applied filters changed; carries the full list.
    FiltersChanged(Vec<Filter>),
    /// The ordering changed; `None` when it was cleared.
    OrderingChanged(Option<OrderBy>),
    /// The requested page changed.
    PaginationChanged(Pagination),
}

/// Complete query state of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableQuery {
    /// Applied filters in application order.
    pub filters: Vec<Filter>,
    /// Active ordering.
    pub ordering: Option<OrderBy>,
    /// Requested page.
    pub pagination: Pagination,
}

/// Receiver of table events, one callback per event kind.
///
/// All methods default to doing nothing, so a host implements only the
/// ones it cares about.
pub trait TableListener {
    /// Called with the full list of applied filters.
    fn on_filtering_change(&mut self, _filters: &[Filter]) {}

    /// Called with the new ordering, `None` when cleared.
    fn on_ordering_change(&mut self, _ordering: Option<&OrderBy>) {}

    /// Called with the new page request.
    fn on_pagination_change(&mut self, _pagination: Pagination) {}
}

impl TableEvent {
    /// Deliver this event to the matching listener callback.
    pub fn dispatch(&self, listener: &mut impl TableListener) {
        match self {
            TableEvent::FiltersChanged(filters) => listener.on_filtering_change(filters),
            TableEvent::OrderingChanged(ordering) => listener.on_ordering_change(ordering.as_ref()),
            TableEvent::PaginationChanged(pagination) => listener.on_pagination_change(*pagination),
        }
    }
}
