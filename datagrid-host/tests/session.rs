use chrono::{TimeZone, Utc};
use datagrid::editor::EditorInput;
use datagrid::filter::Filter;
use datagrid::{EventResult, TableAction, TableConfig};
use datagrid_host::catalog::Catalog;
use datagrid_host::videos::{self, Video};
use datagrid_host::{Session, view};

fn session() -> Session {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let catalog = Catalog::new(videos::sample_videos(now));
    Session::new(catalog, videos::table_config()).unwrap()
}

#[test]
fn test_first_page_is_loaded() {
    let session = session();
    assert_eq!(session.requests(), 1);
    assert_eq!(session.last_query(), "ordering=-uploaded&limit=10&offset=0");
    assert_eq!(session.table().grid().rows().len(), 10);
    assert_eq!(session.table().paginator().total_items(), 25);
}

#[test]
fn test_paging_requests_next_offset() {
    let mut session = session();
    session.dispatch(TableAction::NextPage).unwrap();
    session.dispatch(TableAction::NextPage).unwrap();
    assert_eq!(session.table().grid().rows().len(), 5);

    let result = session.dispatch(TableAction::NextPage).unwrap();
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(session.requests(), 3);
    assert_eq!(session.last_query(), "ordering=-uploaded&limit=10&offset=20");
}

#[test]
fn test_quick_filter_requery() {
    let mut session = session();
    session.dispatch(TableAction::Search("cat".into())).unwrap();
    assert_eq!(session.requests(), 1);

    session.dispatch(TableAction::SelectQuickFilter).unwrap();
    assert_eq!(session.requests(), 2);
    assert_eq!(
        session.last_query(),
        "title__icontains=cat&ordering=-uploaded&limit=10&offset=0"
    );
    let titles: Vec<&str> = session
        .table()
        .grid()
        .rows()
        .iter()
        .map(|v| v.title.as_str())
        .collect();
    assert_eq!(titles.len(), 3);
    assert!(titles.iter().all(|t| t.to_lowercase().contains("cat")));
}

#[test]
fn test_editor_filter_and_sort_requery() {
    let mut session = session();
    session.dispatch(TableAction::OpenEditor("published".into())).unwrap();
    session
        .dispatch(TableAction::EditorInput(EditorInput::Answer(false)))
        .unwrap();
    session.dispatch(TableAction::SubmitEditor).unwrap();
    assert_eq!(
        session.table().filters().applied(),
        &[Filter::exact("published", false)]
    );
    assert_eq!(session.table().paginator().total_items(), 3);

    session.dispatch(TableAction::ClickHeader("title".into())).unwrap();
    assert_eq!(
        session.last_query(),
        "published=false&ordering=title&limit=10&offset=0"
    );
    assert_eq!(session.table().grid().rows()[0].title, "Draft: channel trailer");
}

#[test]
fn test_filter_change_on_later_page_is_one_request() {
    let mut session = session();
    session.dispatch(TableAction::NextPage).unwrap();
    let before = session.requests();

    session.table_mut().apply_filter(Filter::gte("views", 500_000.0));
    assert_eq!(session.sync().unwrap(), 2);
    assert_eq!(session.requests(), before + 1);
    assert!(session.last_query().ends_with("offset=0"));
}

#[test]
fn test_rows_keep_identity_between_requests() {
    let mut session = session();
    view::table_text(session.table_mut());
    let before = session.table().render_stats();

    // Matches every video: the same page comes back with the same rows.
    session
        .dispatch(TableAction::OpenEditor("views".into()))
        .unwrap();
    session.dispatch(TableAction::SubmitEditor).unwrap();
    assert_eq!(session.requests(), 2);
    view::table_text(session.table_mut());

    let after = session.table().render_stats();
    assert_eq!(after.rows_rendered, before.rows_rendered);
    assert_eq!(after.cache_hits, before.cache_hits + 10);
}

#[test]
fn test_row_positions() {
    let mut session = session();
    assert_eq!(session.click_position(2), EventResult::Consumed);
    assert_eq!(session.click_position(11), EventResult::Ignored);
    assert_eq!(session.hover_position(Some(0)), EventResult::Ignored);

    let text = view::table_text(session.table_mut());
    assert!(text.lines().any(|l| l.starts_with("*  2 ")));
}

#[test]
fn test_json_config() {
    let json = r#"{
        "filteringOptions": [
            {"field": "title", "displayName": "Title", "type": "char"},
            {"field": "views", "displayName": "Views", "type": "number"}
        ],
        "mainFilteringField": "title",
        "pageSizes": [5, 25],
        "defaultPageSize": 5,
        "defaultFilters": [
            {"type": "number", "field": "views", "lookupType": "gte", "value": 100000}
        ]
    }"#;
    let config: TableConfig = serde_json::from_str(json).unwrap();
    let catalog = Catalog::new(vec![
        Video::new("a", "x").with_stats(50, 1),
        Video::new("b", "x").with_stats(150_000, 1),
    ]);
    let session = Session::new(catalog, config).unwrap();
    assert_eq!(session.last_query(), "views__gte=100000&limit=5&offset=0");
    assert_eq!(session.table().paginator().total_items(), 1);
}
