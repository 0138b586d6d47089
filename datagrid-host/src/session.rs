//! Host loop state: the table, its backend and the request cycle.

use datagrid::filter::Filter;
use datagrid::grid::{GridRow, OrderBy};
use datagrid::pagination::Pagination;
use datagrid::{DataTable, EventResult, TableAction, TableConfig, TableListener};
use log::{debug, info};

use crate::catalog::Catalog;
use crate::error::HostError;
use crate::query::QueryParams;
use crate::videos::{self, Video};

/// A video table wired to a catalog.
///
/// Table events mark the session stale; [`sync`](Self::sync) then
/// requests the page matching the table's current query.
#[derive(Debug)]
pub struct Session {
    table: DataTable<Video>,
    catalog: Catalog,
    requests: usize,
    stale: bool,
    last_query: String,
}

impl Session {
    /// Builds the table and loads the first page.
    pub fn new(catalog: Catalog, config: TableConfig) -> Result<Self, HostError> {
        let table = DataTable::new(videos::columns(), config)?;
        let mut session = Self {
            table,
            catalog,
            requests: 0,
            stale: true,
            last_query: String::new(),
        };
        session.fetch()?;
        Ok(session)
    }

    /// The table.
    pub fn table(&self) -> &DataTable<Video> {
        &self.table
    }

    /// The table, for direct manipulation. Call [`sync`](Self::sync)
    /// afterwards.
    pub fn table_mut(&mut self) -> &mut DataTable<Video> {
        &mut self.table
    }

    /// Number of catalog requests made so far.
    pub fn requests(&self) -> usize {
        self.requests
    }

    /// Query string of the last request.
    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    /// Applies an action and reloads data if the query changed.
    pub fn dispatch(&mut self, action: TableAction) -> Result<EventResult, HostError> {
        let result = self.table.dispatch(action);
        self.sync()?;
        Ok(result)
    }

    /// Hovers the row at a 1-based position on the current page, or clears
    /// the hover.
    pub fn hover_position(&mut self, position: Option<usize>) -> EventResult {
        let key = position.and_then(|p| self.row_key_at(p));
        if position.is_some() && key.is_none() {
            return EventResult::Ignored;
        }
        self.table.dispatch(TableAction::HoverRow(key))
    }

    /// Clicks the row at a 1-based position on the current page.
    pub fn click_position(&mut self, position: usize) -> EventResult {
        match self.row_key_at(position) {
            Some(key) => self.table.dispatch(TableAction::ClickRow(key)),
            None => EventResult::Ignored,
        }
    }

    fn row_key_at(&self, position: usize) -> Option<String> {
        let index = position.checked_sub(1)?;
        self.table.grid().rows().get(index).map(|r| r.row_key())
    }

    /// Delivers pending table events and reloads data if any changed the
    /// query. Returns the number of events delivered.
    pub fn sync(&mut self) -> Result<usize, HostError> {
        let events = self.table.drain_events();
        for event in &events {
            event.dispatch(self);
        }
        if self.stale {
            self.fetch()?;
        }
        Ok(events.len())
    }

    fn fetch(&mut self) -> Result<(), HostError> {
        let params = QueryParams::from_query(&self.table.snapshot());
        let page = self.catalog.query(&params)?;
        self.last_query = params.to_query_string();
        self.requests += 1;
        self.stale = false;
        info!("GET /videos?{} -> {} of {}", self.last_query, page.items.len(), page.total);
        self.table.set_data(page.items, page.total);
        Ok(())
    }
}

impl TableListener for Session {
    fn on_filtering_change(&mut self, filters: &[Filter]) {
        debug!("Filters changed: {} applied", filters.len());
        self.stale = true;
    }

    fn on_ordering_change(&mut self, ordering: Option<&OrderBy>) {
        debug!("Ordering changed: {:?}", ordering);
        self.stale = true;
    }

    fn on_pagination_change(&mut self, pagination: Pagination) {
        debug!("Pagination changed: {:?}", pagination);
        self.stale = true;
    }
}
