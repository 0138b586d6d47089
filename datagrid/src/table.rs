//! The data table: filters, editors, grid and pagination behind one
//! event-emitting facade.

use std::sync::Arc;

use log::{debug, warn};

use crate::config::TableConfig;
use crate::editor::{Editor, EditorInput, EditorOutcome, FilterEditor};
use crate::error::{ConfigError, TableError};
use crate::events::{EventResult, TableEvent, TableListener, TableQuery};
use crate::filter::{Filter, FilterFieldDescriptor, FilterSearch, FilterState, QuickFilter};
use crate::grid::{ColumnDescriptor, Grid, GridRow, GridView, OrderBy, RenderStats};
use crate::pagination::{PageInfo, Pagination, Paginator};

/// A user action, as fed to [`DataTable::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    /// Text typed into the filter search box.
    Search(String),
    /// The quick-filter suggestion was picked.
    SelectQuickFilter,
    /// A field was picked in the filter list; opens its editor.
    OpenEditor(String),
    /// Input directed at the open editor.
    EditorInput(EditorInput),
    /// The open editor's apply button.
    SubmitEditor,
    /// The open editor's cancel button.
    CancelEditor,
    /// An applied filter's remove button.
    RemoveFilter(String),
    /// Remove all applied filters.
    ClearFilters,
    /// A column header was clicked.
    ClickHeader(String),
    /// The pointer moved over a row, or left the rows.
    HoverRow(Option<String>),
    /// A row was clicked.
    ClickRow(String),
    /// The next-page button.
    NextPage,
    /// The previous-page button.
    PreviousPage,
    /// A page size was picked.
    SetPageSize(usize),
}

/// A generic, data-source-agnostic table.
///
/// The host supplies columns, a [`TableConfig`] and pages of data. The table
/// turns user actions into state transitions and queues a [`TableEvent`]
/// for every filter, ordering or pagination change. It performs no I/O and
/// never reorders or filters rows itself.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use datagrid::{DataTable, TableAction, TableConfig, TableEvent};
/// use datagrid::filter::{Filter, FilterFieldDescriptor};
/// use datagrid::grid::{ColumnDescriptor, GridRow};
///
/// struct Clip { id: u32, title: String }
///
/// impl GridRow for Clip {
///     fn row_key(&self) -> String { self.id.to_string() }
/// }
///
/// let columns = vec![ColumnDescriptor::new("title", "Title", |c: &Clip| c.title.clone())];
/// let config = TableConfig::new(vec![FilterFieldDescriptor::char("title", "Title")])
///     .with_main_field("title");
/// let mut table = DataTable::new(columns, config).unwrap();
///
/// table.dispatch(TableAction::Search("cats".into()));
/// table.dispatch(TableAction::SelectQuickFilter);
///
/// assert_eq!(
///     table.drain_events(),
///     vec![TableEvent::FiltersChanged(vec![Filter::contains("title", "cats")])]
/// );
/// ```
#[derive(Debug)]
pub struct DataTable<T: GridRow> {
    filters: FilterState,
    main_field: Option<String>,
    search: FilterSearch,
    editor: Option<Editor>,
    grid: Grid<T>,
    pages: Paginator,
    reset_page_on_change: bool,
    outbox: Vec<TableEvent>,
}

impl<T: GridRow> DataTable<T> {
    /// Build a table, validating the configuration.
    pub fn new(columns: Vec<ColumnDescriptor<T>>, config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::new(columns, config.default_ordering)?;
        let pages = Paginator::new(config.page_sizes, config.default_page_size)?;

        let mut filters = FilterState::new(config.filtering_options);
        for filter in config.default_filters {
            let field = filter.field().to_string();
            if !filters.apply(filter) {
                return Err(ConfigError::InvalidDefaultFilter {
                    field,
                    reason: "filter could not be applied",
                });
            }
        }

        Ok(Self {
            filters,
            main_field: config.main_filtering_field,
            search: FilterSearch::new(),
            editor: None,
            grid,
            pages,
            reset_page_on_change: config.reset_page_on_change,
            outbox: Vec::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Supply the current page of rows and the size of the whole result set.
    pub fn set_data(&mut self, items: Vec<Arc<T>>, total_items: usize) {
        self.grid.set_rows(items);
        self.pages.set_total_items(total_items);
    }

    /// Build the grid view for the current data.
    pub fn render(&mut self) -> GridView {
        self.grid.render()
    }

    /// Rendering counters of the row cache.
    pub fn render_stats(&self) -> RenderStats {
        self.grid.render_stats()
    }

    /// The grid.
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// Complete current query state.
    pub fn snapshot(&self) -> TableQuery {
        TableQuery {
            filters: self.filters.applied().to_vec(),
            ordering: self.grid.ordering().cloned(),
            pagination: self.pages.pagination(),
        }
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// The filter state.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The quick-filter field, if configured.
    pub fn main_field(&self) -> Option<&str> {
        self.main_field.as_deref()
    }

    /// Text in the filter search box.
    pub fn search_text(&self) -> &str {
        self.search.text()
    }

    /// Replace the text in the filter search box.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search.set_text(text);
    }

    /// Available fields matching the search text.
    pub fn filter_options(&self) -> Vec<&FilterFieldDescriptor> {
        self.search.matches(&self.filters)
    }

    /// The quick-filter suggestion for the current search text.
    pub fn quick_suggestion(&self) -> Option<QuickFilter> {
        self.search
            .quick_suggestion(&self.filters, self.main_field.as_deref())
    }

    /// Apply the quick-filter suggestion without opening an editor.
    ///
    /// Returns `false` when no suggestion is shown.
    pub fn select_quick_filter(&mut self) -> bool {
        let Some(quick) = self.quick_suggestion() else {
            return false;
        };
        self.search.clear();
        self.apply_filter(quick.into_filter())
    }

    /// Apply a filter and notify the host.
    ///
    /// Returns `false` when the filter was rejected (field already filtered,
    /// unknown, or of another type); no event is emitted then.
    pub fn apply_filter(&mut self, filter: Filter) -> bool {
        if !self.filters.apply(filter) {
            return false;
        }
        self.filters_changed();
        true
    }

    /// Remove the filter applied to `field` and notify the host.
    pub fn remove_filter(&mut self, field: &str) -> bool {
        if !self.filters.remove(field) {
            return false;
        }
        self.filters_changed();
        true
    }

    /// Remove all filters and notify the host.
    pub fn clear_filters(&mut self) -> bool {
        if !self.filters.clear() {
            return false;
        }
        self.filters_changed();
        true
    }

    fn filters_changed(&mut self) {
        self.outbox
            .push(TableEvent::FiltersChanged(self.filters.applied().to_vec()));
        self.reset_page();
    }

    // -------------------------------------------------------------------------
    // Editors
    // -------------------------------------------------------------------------

    /// The open editor, if any.
    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    /// Open the editor for an available field, replacing any open editor.
    pub fn open_editor(&mut self, field: &str) -> Result<&Editor, TableError> {
        let descriptor = self
            .filters
            .option(field)
            .cloned()
            .ok_or_else(|| TableError::UnknownField(field.to_string()))?;
        if !self.filters.is_available(field) {
            return Err(TableError::FieldNotAvailable(field.to_string()));
        }

        debug!("Opening {} editor for '{}'", descriptor.value_type, field);
        self.search.clear();
        Ok(&*self.editor.insert(Editor::open(descriptor)))
    }

    /// Route input to the open editor.
    pub fn editor_input(&mut self, input: EditorInput) -> Result<(), TableError> {
        self.editor
            .as_ref()
            .ok_or(TableError::NoEditorOpen)?
            .input(input)
    }

    /// Submit the open editor.
    ///
    /// On success the filter is applied, the host is notified and the editor
    /// closes. On validation failure the editor stays open and nothing is
    /// emitted. If the field was filtered by other means while the editor was
    /// open, the editor closes and `FieldNotAvailable` is returned.
    pub fn submit_editor(&mut self) -> Result<EditorOutcome, TableError> {
        let editor = self.editor.as_ref().ok_or(TableError::NoEditorOpen)?;
        match editor.submit() {
            Ok(filter) => {
                self.editor = None;
                if !self.apply_filter(filter.clone()) {
                    return Err(TableError::FieldNotAvailable(filter.field().to_string()));
                }
                Ok(EditorOutcome::Applied(filter))
            }
            Err(result) => {
                debug!("Editor for '{}' kept open: {}", editor.descriptor().field, result);
                Ok(EditorOutcome::Invalid(result))
            }
        }
    }

    /// Close the open editor without applying anything.
    pub fn cancel_editor(&mut self) -> bool {
        self.editor.take().is_some()
    }

    // -------------------------------------------------------------------------
    // Ordering and rows
    // -------------------------------------------------------------------------

    /// The active ordering.
    pub fn ordering(&self) -> Option<&OrderBy> {
        self.grid.ordering()
    }

    /// Handle a header click. Returns `false` for non-orderable columns.
    pub fn click_header(&mut self, field: &str) -> bool {
        let Some(order) = self.grid.click_header(field) else {
            return false;
        };
        self.outbox.push(TableEvent::OrderingChanged(Some(order)));
        self.reset_page();
        true
    }

    /// Remove the ordering and notify the host.
    pub fn clear_ordering(&mut self) -> bool {
        if !self.grid.clear_ordering() {
            return false;
        }
        self.outbox.push(TableEvent::OrderingChanged(None));
        self.reset_page();
        true
    }

    /// Set or clear the hovered row.
    pub fn hover_row(&mut self, key: Option<&str>) -> bool {
        self.grid.hover_row(key)
    }

    /// Toggle the active row.
    pub fn click_row(&mut self, key: &str) -> bool {
        self.grid.click_row(key)
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// The pagination controller.
    pub fn paginator(&self) -> &Paginator {
        &self.pages
    }

    /// The current page request.
    pub fn pagination(&self) -> Pagination {
        self.pages.pagination()
    }

    /// Item range of the current page.
    pub fn page_info(&self) -> PageInfo {
        self.pages.page_info()
    }

    /// Advance one page. Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        match self.pages.next() {
            Some(pagination) => {
                self.outbox.push(TableEvent::PaginationChanged(pagination));
                true
            }
            None => false,
        }
    }

    /// Go back one page. Returns `false` on the first page.
    pub fn previous_page(&mut self) -> bool {
        match self.pages.previous() {
            Some(pagination) => {
                self.outbox.push(TableEvent::PaginationChanged(pagination));
                true
            }
            None => false,
        }
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), TableError> {
        let pagination = self.pages.set_page_size(size)?;
        self.outbox.push(TableEvent::PaginationChanged(pagination));
        Ok(())
    }

    fn reset_page(&mut self) {
        if !self.reset_page_on_change {
            return;
        }
        if let Some(pagination) = self.pages.reset() {
            debug!("Back to first page after query change");
            self.outbox.push(TableEvent::PaginationChanged(pagination));
        }
    }

    // -------------------------------------------------------------------------
    // Actions and events
    // -------------------------------------------------------------------------

    /// Apply a user action.
    ///
    /// Actions that cannot apply in the current state are ignored; errors
    /// are logged rather than returned.
    pub fn dispatch(&mut self, action: TableAction) -> EventResult {
        let handled = match action {
            TableAction::Search(text) => {
                self.set_search_text(text);
                true
            }
            TableAction::SelectQuickFilter => self.select_quick_filter(),
            TableAction::OpenEditor(field) => logged(self.open_editor(&field).map(|_| ())),
            TableAction::EditorInput(input) => logged(self.editor_input(input)),
            TableAction::SubmitEditor => logged(self.submit_editor().map(|_| ())),
            TableAction::CancelEditor => self.cancel_editor(),
            TableAction::RemoveFilter(field) => self.remove_filter(&field),
            TableAction::ClearFilters => self.clear_filters(),
            TableAction::ClickHeader(field) => self.click_header(&field),
            TableAction::HoverRow(key) => self.hover_row(key.as_deref()),
            TableAction::ClickRow(key) => self.click_row(&key),
            TableAction::NextPage => self.next_page(),
            TableAction::PreviousPage => self.previous_page(),
            TableAction::SetPageSize(size) => logged(self.set_page_size(size)),
        };
        EventResult::from(handled)
    }

    /// Events emitted since the last drain, in emission order.
    pub fn pending_events(&self) -> &[TableEvent] {
        &self.outbox
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Deliver all queued events to a listener, in emission order.
    ///
    /// Returns the number of events delivered.
    pub fn flush(&mut self, listener: &mut impl TableListener) -> usize {
        let events = self.drain_events();
        for event in &events {
            event.dispatch(listener);
        }
        events.len()
    }
}

fn logged(result: Result<(), TableError>) -> bool {
    if let Err(e) = &result {
        warn!("{}", e);
    }
    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterFieldDescriptor;

    #[derive(Debug)]
    struct Item {
        id: u32,
        name: String,
    }

    impl GridRow for Item {
        fn row_key(&self) -> String {
            self.id.to_string()
        }
    }

    fn table() -> DataTable<Item> {
        let columns = vec![
            ColumnDescriptor::new("name", "Name", |i: &Item| i.name.clone()).orderable(),
            ColumnDescriptor::new("id", "Id", |i: &Item| i.id.to_string()),
        ];
        let config = TableConfig::new(vec![
            FilterFieldDescriptor::char("name", "Name"),
            FilterFieldDescriptor::number("id", "Id"),
        ])
        .with_main_field("name");
        DataTable::new(columns, config).unwrap()
    }

    #[test]
    fn test_filter_change_resets_offset() {
        let mut t = table();
        t.set_data(Vec::new(), 25);
        assert!(t.next_page());
        t.drain_events();

        assert!(t.apply_filter(Filter::gte("id", 3.0)));
        assert_eq!(
            t.drain_events(),
            vec![
                TableEvent::FiltersChanged(vec![Filter::gte("id", 3.0)]),
                TableEvent::PaginationChanged(Pagination { limit: 10, offset: 0 }),
            ]
        );
    }

    #[test]
    fn test_rejected_filter_emits_nothing() {
        let mut t = table();
        assert!(t.apply_filter(Filter::contains("name", "a")));
        t.drain_events();
        assert!(!t.apply_filter(Filter::contains("name", "b")));
        assert!(t.pending_events().is_empty());
    }

    #[test]
    fn test_open_editor_errors() {
        let mut t = table();
        assert_eq!(
            t.open_editor("nope").err(),
            Some(TableError::UnknownField("nope".into()))
        );
        t.apply_filter(Filter::gte("id", 1.0));
        assert_eq!(
            t.open_editor("id").err(),
            Some(TableError::FieldNotAvailable("id".into()))
        );
        assert_eq!(t.submit_editor().err(), Some(TableError::NoEditorOpen));
    }

    #[test]
    fn test_dispatch_ignores_invalid_actions() {
        let mut t = table();
        assert_eq!(t.dispatch(TableAction::PreviousPage), EventResult::Ignored);
        assert_eq!(t.dispatch(TableAction::ClickHeader("id".into())), EventResult::Ignored);
        assert_eq!(t.dispatch(TableAction::SetPageSize(7)), EventResult::Ignored);
        assert_eq!(t.dispatch(TableAction::SubmitEditor), EventResult::Ignored);
        assert!(t.drain_events().is_empty());
    }

    #[test]
    fn test_snapshot_tracks_state() {
        let mut t = table();
        t.click_header("name");
        t.set_page_size(30).unwrap();
        let query = t.snapshot();
        assert_eq!(query.ordering, Some(OrderBy::asc("name")));
        assert_eq!(query.pagination, Pagination { limit: 30, offset: 0 });
        assert!(query.filters.is_empty());
    }
}
