//! Sortable grid - columns, ordering, memoized rows and row highlight.
//!
//! The grid provides:
//! - Column descriptors with render-function cells
//! - Single-column ordering cycling `Asc`/`Desc` on header clicks
//! - Cells memoized per row while the row's `Arc` is unchanged
//! - Hover and click highlight of rows
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use datagrid::grid::{ColumnDescriptor, Direction, Grid, GridRow};
//!
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! impl GridRow for User {
//!     fn row_key(&self) -> String { self.id.to_string() }
//! }
//!
//! let columns = vec![
//!     ColumnDescriptor::new("name", "Name", |u: &User| u.name.clone()).orderable(),
//! ];
//! let mut grid = Grid::new(columns, None).unwrap();
//! grid.set_rows(vec![Arc::new(User { id: 1, name: "Ada".into() })]);
//!
//! let order = grid.click_header("name").unwrap();
//! assert_eq!(order.direction, Direction::Asc);
//! assert_eq!(grid.render().rows[0].cells[0], "Ada");
//! ```

mod column;
mod row;
mod sort;
mod state;

pub use column::{Alignment, CellFn, ColumnDescriptor, GridRow};
pub use row::{RenderStats, RowCache, RowHighlight};
pub use sort::{Direction, OrderBy, SortIndicator, SortState};
pub use state::{Grid, GridView, HeaderCell, RenderedRow};
