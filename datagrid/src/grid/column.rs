//! Column descriptors and the row trait.

use std::fmt;
use std::sync::Arc;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Cell renderer: turns a row item into the text of one cell.
pub type CellFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Column configuration.
///
/// A column knows its field key, header text, how to render its cell for
/// a row, and whether clicking its header changes the ordering. The engine
/// never inspects row data itself; everything goes through `cell`.
///
/// # Examples
///
/// ```
/// use datagrid::grid::{Alignment, ColumnDescriptor};
///
/// struct Video { title: String, views: u64 }
///
/// let columns: Vec<ColumnDescriptor<Video>> = vec![
///     ColumnDescriptor::new("title", "Title", |v: &Video| v.title.clone()),
///     ColumnDescriptor::new("views", "Views", |v: &Video| v.views.to_string())
///         .orderable()
///         .align(Alignment::Right),
/// ];
/// assert!(!columns[0].enable_ordering);
/// ```
pub struct ColumnDescriptor<T> {
    /// Field key, used as the ordering field.
    pub field: String,
    /// Column header text.
    pub header: String,
    /// Whether clicking the header changes the ordering.
    pub enable_ordering: bool,
    /// Horizontal alignment of the cell content.
    pub align: Alignment,
    cell: CellFn<T>,
}

impl<T> ColumnDescriptor<T> {
    /// Create a column with ordering disabled.
    pub fn new<F>(field: impl Into<String>, header: impl Into<String>, cell: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            header: header.into(),
            enable_ordering: false,
            align: Alignment::Left,
            cell: Arc::new(cell),
        }
    }

    /// Allow ordering by this column.
    pub fn orderable(mut self) -> Self {
        self.enable_ordering = true;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Render this column's cell for a row.
    pub fn render(&self, item: &T) -> String {
        (self.cell)(item)
    }
}

impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            header: self.header.clone(),
            enable_ordering: self.enable_ordering,
            align: self.align,
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("field", &self.field)
            .field("header", &self.header)
            .field("enable_ordering", &self.enable_ordering)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}

/// Trait for items displayed as rows in a grid.
///
/// The key identifies a row across data refreshes. It is used to keep the
/// hover/active highlight and to find memoized cells.
pub trait GridRow: Send + Sync + 'static {
    /// Unique identifier for this row.
    fn row_key(&self) -> String;
}
