//! Filtering: field descriptors, filter values, the applied/available
//! state machine and the filter-search typeahead.

mod search;
mod state;
mod types;

pub use search::{FilterSearch, QuickFilter};
pub use state::{FilterAction, FilterState};
pub use types::{
    BooleanLookup, CharLookup, Filter, FilterFieldDescriptor, NumberLookup, ValueType,
};
