use std::sync::Arc;

use datagrid::editor::{EditorInput, EditorOutcome, FilterEditor, VALUE_REQUIRED};
use datagrid::filter::{Filter, FilterFieldDescriptor};
use datagrid::grid::{ColumnDescriptor, GridRow, OrderBy};
use datagrid::pagination::Pagination;
use datagrid::{
    ConfigError, DataTable, EventResult, TableAction, TableConfig, TableError, TableEvent,
    TableListener,
};

#[derive(Debug)]
struct Book {
    isbn: &'static str,
    title: &'static str,
    price: f64,
}

impl GridRow for Book {
    fn row_key(&self) -> String {
        self.isbn.to_string()
    }
}

fn columns() -> Vec<ColumnDescriptor<Book>> {
    vec![
        ColumnDescriptor::new("title", "Title", |b: &Book| b.title.to_string()).orderable(),
        ColumnDescriptor::new("price", "Price", |b: &Book| format!("{:.2}", b.price)).orderable(),
        ColumnDescriptor::new("isbn", "ISBN", |b: &Book| b.isbn.to_string()),
    ]
}

fn config() -> TableConfig {
    TableConfig::new(vec![
        FilterFieldDescriptor::char("title", "Title"),
        FilterFieldDescriptor::number("price", "Price"),
        FilterFieldDescriptor::boolean("in_stock", "In stock"),
    ])
    .with_main_field("title")
}

fn table() -> DataTable<Book> {
    DataTable::new(columns(), config()).unwrap()
}

#[derive(Default)]
struct Recorder {
    filters: Vec<Vec<Filter>>,
    orderings: Vec<Option<OrderBy>>,
    pages: Vec<Pagination>,
}

impl TableListener for Recorder {
    fn on_filtering_change(&mut self, filters: &[Filter]) {
        self.filters.push(filters.to_vec());
    }

    fn on_ordering_change(&mut self, ordering: Option<&OrderBy>) {
        self.orderings.push(ordering.cloned());
    }

    fn on_pagination_change(&mut self, pagination: Pagination) {
        self.pages.push(pagination);
    }
}

#[test]
fn test_number_filter_through_editor() {
    let mut t = table();
    t.open_editor("price").unwrap();
    t.editor_input(EditorInput::Text("100".into())).unwrap();

    let outcome = t.submit_editor().unwrap();
    assert_eq!(outcome, EditorOutcome::Applied(Filter::gte("price", 100.0)));
    assert!(t.editor().is_none());
    assert!(t.filter_options().iter().all(|o| o.field != "price"));
    assert_eq!(
        t.drain_events(),
        vec![TableEvent::FiltersChanged(vec![Filter::gte("price", 100.0)])]
    );
}

#[test]
fn test_invalid_editor_stays_open_and_emits_nothing() {
    let mut t = table();
    t.dispatch(TableAction::OpenEditor("title".into()));
    let outcome = t.submit_editor().unwrap();

    assert!(matches!(outcome, EditorOutcome::Invalid(_)));
    let editor = t.editor().unwrap();
    assert_eq!(editor.fields()[0].error.as_deref(), Some(VALUE_REQUIRED));
    assert!(t.pending_events().is_empty());
}

#[test]
fn test_quick_filter_bypasses_editor() {
    let mut t = table();
    t.set_search_text("  dune ");
    let quick = t.quick_suggestion().unwrap();
    assert_eq!(quick.value, "dune");

    assert!(t.select_quick_filter());
    assert!(t.editor().is_none());
    assert_eq!(t.search_text(), "");
    assert_eq!(t.filters().applied(), &[Filter::contains("title", "dune")]);

    t.set_search_text("again");
    assert!(t.quick_suggestion().is_none());
    assert!(!t.select_quick_filter());
}

#[test]
fn test_submit_after_quick_filter_took_the_field() {
    let mut t = table();
    t.open_editor("title").unwrap();
    t.editor_input(EditorInput::Text("dog".into())).unwrap();
    t.set_search_text("cat");
    assert!(t.select_quick_filter());
    t.drain_events();

    let err = t.submit_editor().unwrap_err();
    assert!(matches!(err, TableError::FieldNotAvailable(ref f) if f == "title"));
    assert!(t.editor().is_none());
    assert_eq!(t.filters().applied(), &[Filter::contains("title", "cat")]);
    assert!(t.pending_events().is_empty());
}

#[test]
fn test_main_field_must_be_char() {
    let err = DataTable::new(columns(), config().with_main_field("price")).unwrap_err();
    assert!(matches!(err, ConfigError::MainFieldNotChar { .. }));
}

#[test]
fn test_disabled_header_click_emits_nothing() {
    let mut t = table();
    assert_eq!(t.dispatch(TableAction::ClickHeader("isbn".into())), EventResult::Ignored);
    assert!(t.drain_events().is_empty());
}

#[test]
fn test_events_reach_listener_in_order() {
    let mut t = table();
    t.set_data(Vec::new(), 45);

    t.dispatch(TableAction::NextPage);
    t.dispatch(TableAction::ClickHeader("price".into()));
    t.dispatch(TableAction::ClickHeader("price".into()));
    t.dispatch(TableAction::SetPageSize(30));
    t.dispatch(TableAction::NextPage);
    t.dispatch(TableAction::Search("x".into()));
    t.dispatch(TableAction::SelectQuickFilter);

    let mut recorder = Recorder::default();
    assert_eq!(t.flush(&mut recorder), 8);

    assert_eq!(
        recorder.orderings,
        vec![Some(OrderBy::asc("price")), Some(OrderBy::desc("price"))]
    );
    assert_eq!(recorder.filters, vec![vec![Filter::contains("title", "x")]]);
    assert_eq!(
        recorder.pages,
        vec![
            Pagination { limit: 10, offset: 10 },
            Pagination { limit: 10, offset: 0 },
            Pagination { limit: 30, offset: 0 },
            Pagination { limit: 30, offset: 30 },
            Pagination { limit: 30, offset: 0 },
        ]
    );
    assert!(t.pending_events().is_empty());
}

#[test]
fn test_page_reset_can_be_disabled() {
    let mut t = DataTable::new(columns(), config().reset_page_on_change(false)).unwrap();
    t.set_data(Vec::new(), 45);
    t.next_page();
    t.drain_events();

    t.click_header("title");
    assert_eq!(
        t.drain_events(),
        vec![TableEvent::OrderingChanged(Some(OrderBy::asc("title")))]
    );
    assert_eq!(t.pagination().offset, 10);
}

#[test]
fn test_default_filters_and_ordering_seed_snapshot() {
    let config = config()
        .with_default_filter(Filter::exact("in_stock", true))
        .with_default_ordering(OrderBy::desc("price"))
        .with_default_page_size(50);
    let t = DataTable::<Book>::new(columns(), config).unwrap();

    let query = t.snapshot();
    assert_eq!(query.filters, vec![Filter::exact("in_stock", true)]);
    assert_eq!(query.ordering, Some(OrderBy::desc("price")));
    assert_eq!(query.pagination, Pagination { limit: 50, offset: 0 });
    assert!(t.pending_events().is_empty());
    assert!(!t.filters().is_available("in_stock"));
}

#[test]
fn test_rendered_rows_follow_data() {
    let mut t = table();
    let books = vec![
        Arc::new(Book { isbn: "1", title: "Dune", price: 9.5 }),
        Arc::new(Book { isbn: "2", title: "Emma", price: 4.0 }),
    ];
    t.set_data(books.clone(), 2);
    t.hover_row(Some("2"));

    let view = t.render();
    assert_eq!(view.rows.len(), 2);
    assert_eq!(&*view.rows[0].cells, &["Dune", "9.50", "1"]);
    assert!(view.rows[1].hovered);
    assert_eq!(t.page_info().to_string(), "1–2 of 2");

    t.set_data(books, 2);
    t.render();
    assert_eq!(t.render_stats().rows_rendered, 2);
    assert_eq!(t.render_stats().cache_hits, 2);
}

#[test]
fn test_clear_filters_and_ordering() {
    let mut t = table();
    t.apply_filter(Filter::contains("title", "a"));
    t.apply_filter(Filter::exact("in_stock", false));
    t.click_header("title");
    t.drain_events();

    assert!(t.clear_filters());
    assert!(t.clear_ordering());
    assert_eq!(
        t.drain_events(),
        vec![
            TableEvent::FiltersChanged(Vec::new()),
            TableEvent::OrderingChanged(None),
        ]
    );
    assert!(!t.clear_filters());
    assert!(!t.clear_ordering());
}
