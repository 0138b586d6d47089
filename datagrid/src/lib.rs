//! A generic, data-source-agnostic data table engine.
//!
//! The table owns presentation state only: applied filters, the filter
//! editors, single-column ordering, row highlight and limit/offset
//! pagination. Every change to the query state is reported to the host as
//! a [`TableEvent`] carrying a complete snapshot; the host fetches the
//! matching page and hands it back with [`DataTable::set_data`].
//!
//! # Modules
//!
//! - [`filter`] - filter model, applied/available state and the search box
//! - [`editor`] - per-type filter editors with inline validation
//! - [`grid`] - columns, ordering and memoized row rendering
//! - [`pagination`] - the limit/offset controller
//! - [`table`] - the [`DataTable`] tying them together

pub mod config;
pub mod editor;
pub mod error;
pub mod events;
pub mod filter;
pub mod form;
pub mod grid;
pub mod pagination;
pub mod table;
pub mod validation;

pub use config::TableConfig;
pub use error::{ConfigError, TableError};
pub use events::{EventResult, TableEvent, TableListener, TableQuery};
pub use table::{DataTable, TableAction};
