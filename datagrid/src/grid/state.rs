//! Grid state: columns, the current page of rows, ordering and highlight.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use crate::error::ConfigError;

use super::column::{Alignment, ColumnDescriptor, GridRow};
use super::row::{RenderStats, RowCache, RowHighlight};
use super::sort::{OrderBy, SortIndicator, SortState};

/// Render-ready header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column field key.
    pub field: String,
    /// Header text.
    pub header: String,
    /// Whether clicking the header changes the ordering.
    pub orderable: bool,
    /// Current sort indicator.
    pub indicator: SortIndicator,
    /// Column alignment.
    pub align: Alignment,
}

/// Render-ready row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Row key.
    pub key: String,
    /// Cell texts, one per column.
    pub cells: Arc<[String]>,
    /// Whether the pointer is over this row.
    pub hovered: bool,
    /// Whether this row was clicked.
    pub active: bool,
}

/// Snapshot of the grid for a rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    /// Header cells in column order.
    pub header: Vec<HeaderCell>,
    /// Rows in the order the host supplied them.
    pub rows: Vec<RenderedRow>,
}

/// A sortable grid over host-supplied rows.
///
/// The grid never reorders rows: a header click only changes the
/// [`OrderBy`] it reports, and the host is expected to fetch rows in that
/// order.
#[derive(Debug)]
pub struct Grid<T: GridRow> {
    columns: Arc<[ColumnDescriptor<T>]>,
    rows: Vec<Arc<T>>,
    sort: SortState,
    highlight: RowHighlight,
    cache: RowCache<T>,
}

impl<T: GridRow> Grid<T> {
    /// Create a grid.
    ///
    /// Fails if two columns share a field, or if the default ordering does
    /// not name an orderable column.
    pub fn new(
        columns: impl Into<Arc<[ColumnDescriptor<T>]>>,
        default_ordering: Option<OrderBy>,
    ) -> Result<Self, ConfigError> {
        let columns = columns.into();

        let mut seen = HashSet::new();
        for column in columns.iter() {
            if !seen.insert(column.field.as_str()) {
                return Err(ConfigError::DuplicateColumn(column.field.clone()));
            }
        }

        if let Some(order) = &default_ordering {
            let column = columns
                .iter()
                .find(|c| c.field == order.field)
                .ok_or_else(|| ConfigError::UnknownOrderingField(order.field.clone()))?;
            if !column.enable_ordering {
                return Err(ConfigError::OrderingNotEnabled(order.field.clone()));
            }
        }

        Ok(Self {
            columns,
            rows: Vec::new(),
            sort: SortState::new(default_ordering),
            highlight: RowHighlight::default(),
            cache: RowCache::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Columns and rows
    // -------------------------------------------------------------------------

    /// Column descriptors.
    pub fn columns(&self) -> &[ColumnDescriptor<T>] {
        &self.columns
    }

    /// Look up a column by field.
    pub fn column(&self, field: &str) -> Option<&ColumnDescriptor<T>> {
        self.columns.iter().find(|c| c.field == field)
    }

    /// Rows of the current page.
    pub fn rows(&self) -> &[Arc<T>] {
        &self.rows
    }

    /// Replace the current page of rows.
    ///
    /// Highlight and cached cells of rows that left the page are dropped.
    pub fn set_rows(&mut self, rows: Vec<Arc<T>>) {
        let keys: HashSet<String> = rows.iter().map(|r| r.row_key()).collect();
        self.highlight.retain(&keys);
        self.cache.retain(&keys);
        self.rows = rows;
    }

    // -------------------------------------------------------------------------
    // Ordering
    // -------------------------------------------------------------------------

    /// The active ordering, if any.
    pub fn ordering(&self) -> Option<&OrderBy> {
        self.sort.current()
    }

    /// Handle a header click.
    ///
    /// Returns the new ordering, or `None` if the column is unknown or has
    /// ordering disabled, in which case nothing changed.
    pub fn click_header(&mut self, field: &str) -> Option<OrderBy> {
        let orderable = self.column(field).is_some_and(|c| c.enable_ordering);
        if !orderable {
            debug!("Ignored header click on non-orderable column '{}'", field);
            return None;
        }
        let order = self.sort.cycle(field);
        debug!("Ordering changed: {} {:?}", order.field, order.direction);
        Some(order)
    }

    /// Remove the ordering. Returns `false` if there was none.
    pub fn clear_ordering(&mut self) -> bool {
        self.sort.clear()
    }

    // -------------------------------------------------------------------------
    // Highlight
    // -------------------------------------------------------------------------

    /// Current highlight state.
    pub fn highlight(&self) -> &RowHighlight {
        &self.highlight
    }

    /// Set or clear the hovered row. Unknown keys are ignored.
    ///
    /// Returns `true` if the highlight changed.
    pub fn hover_row(&mut self, key: Option<&str>) -> bool {
        if let Some(key) = key
            && !self.contains_row(key)
        {
            return false;
        }
        self.highlight.hover(key)
    }

    /// Toggle the active row. Returns `false` for unknown keys.
    pub fn click_row(&mut self, key: &str) -> bool {
        if !self.contains_row(key) {
            return false;
        }
        self.highlight.click(key);
        true
    }

    fn contains_row(&self, key: &str) -> bool {
        self.rows.iter().any(|r| r.row_key() == key)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build the view of header and rows.
    ///
    /// Row cells come from the cache when the row's `Arc` is unchanged.
    pub fn render(&mut self) -> GridView {
        let header = self
            .columns
            .iter()
            .map(|c| HeaderCell {
                field: c.field.clone(),
                header: c.header.clone(),
                orderable: c.enable_ordering,
                indicator: self.sort.indicator(&c.field),
                align: c.align,
            })
            .collect();

        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let key = row.row_key();
            let cells = self.cache.cells(&key, row, &self.columns);
            rows.push(RenderedRow {
                hovered: self.highlight.hovered() == Some(key.as_str()),
                active: self.highlight.active() == Some(key.as_str()),
                key,
                cells,
            });
        }

        GridView { header, rows }
    }

    /// Rendering counters.
    pub fn render_stats(&self) -> RenderStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    #[derive(Debug)]
    struct Clip {
        id: u32,
        title: &'static str,
    }

    impl GridRow for Clip {
        fn row_key(&self) -> String {
            self.id.to_string()
        }
    }

    fn columns() -> Vec<ColumnDescriptor<Clip>> {
        vec![
            ColumnDescriptor::new("id", "ID", |c: &Clip| c.id.to_string()).orderable(),
            ColumnDescriptor::new("title", "Title", |c: &Clip| c.title.to_string()),
        ]
    }

    #[test]
    fn test_duplicate_column_is_rejected() {
        let mut cols = columns();
        cols.push(ColumnDescriptor::new("id", "Again", |c: &Clip| c.id.to_string()));
        assert_eq!(
            Grid::new(cols, None).err(),
            Some(ConfigError::DuplicateColumn("id".into()))
        );
    }

    #[test]
    fn test_default_ordering_must_be_orderable() {
        assert_eq!(
            Grid::new(columns(), Some(OrderBy::asc("title"))).err(),
            Some(ConfigError::OrderingNotEnabled("title".into()))
        );
        assert_eq!(
            Grid::new(columns(), Some(OrderBy::asc("nope"))).err(),
            Some(ConfigError::UnknownOrderingField("nope".into()))
        );
    }

    #[test]
    fn test_disabled_header_click_is_noop() {
        let mut grid = Grid::new(columns(), None).unwrap();
        assert_eq!(grid.click_header("title"), None);
        assert_eq!(grid.click_header("missing"), None);
        assert_eq!(grid.ordering(), None);
    }

    #[test]
    fn test_render_header_indicators_and_rows() {
        let mut grid = Grid::new(columns(), Some(OrderBy::desc("id"))).unwrap();
        grid.set_rows(vec![
            Arc::new(Clip { id: 2, title: "b" }),
            Arc::new(Clip { id: 1, title: "a" }),
        ]);
        grid.click_row("1");

        let view = grid.render();
        assert_eq!(view.header[0].indicator, SortIndicator::Descending);
        assert_eq!(view.header[1].indicator, SortIndicator::None);
        assert!(!view.header[1].orderable);

        let keys: Vec<&str> = view.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["2", "1"]);
        assert!(view.rows[1].active);
        assert_eq!(&*view.rows[0].cells, &["2".to_string(), "b".to_string()]);

        assert_eq!(grid.click_header("id").map(|o| o.direction), Some(Direction::Asc));
    }

    #[test]
    fn test_rerender_with_same_rows_hits_cache() {
        let mut grid = Grid::new(columns(), None).unwrap();
        let rows = vec![Arc::new(Clip { id: 1, title: "a" }), Arc::new(Clip { id: 2, title: "b" })];
        grid.set_rows(rows.clone());
        grid.render();
        grid.hover_row(Some("2"));
        grid.set_rows(rows);
        let view = grid.render();

        assert!(view.rows[1].hovered);
        assert_eq!(grid.render_stats(), RenderStats { rows_rendered: 2, cache_hits: 2 });
    }

    #[test]
    fn test_hover_unknown_row_is_ignored() {
        let mut grid = Grid::new(columns(), None).unwrap();
        grid.set_rows(vec![Arc::new(Clip { id: 1, title: "a" })]);
        assert!(!grid.hover_row(Some("9")));
        assert!(!grid.click_row("9"));
        assert!(grid.hover_row(Some("1")));
        assert!(grid.hover_row(None));
    }
}
