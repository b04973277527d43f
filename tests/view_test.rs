//! Integration tests for the table view engine through the public API

use bbstats::{
    api::types::{RecordSet, Value},
    view::{reduce, Action, TableView, ViewConfig},
    BbError, SortDirection,
};
use serde_json::json;

fn seasons() -> RecordSet {
    RecordSet::from_json(json!([
        {"Year": 2001, "G": 50, "Team": "A"},
        {"Year": 2002, "G": 10, "Team": "B"}
    ]))
    .unwrap()
}

#[test]
fn test_threshold_scenario() {
    let view = TableView::new(
        seasons(),
        ViewConfig::new(["Year", "Team"], "Year")
            .with_filter("G")
            .with_threshold(Some(20.0)),
    );
    let years: Vec<Value> = view.visible_rows().map(|r| r["Year"].clone()).collect();
    assert_eq!(years, vec![Value::Int(2001)]);
}

#[test]
fn test_column_scenario() {
    let mut view = TableView::new(seasons(), ViewConfig::new(["Year", "Team"], "Year"));
    view.dispatch(Action::AddColumn("G".to_string())).unwrap();
    view.dispatch(Action::RemoveColumn("Team".to_string())).unwrap();
    assert_eq!(view.columns(), &["Year", "G"]);
    assert_eq!(view.render().add_column, vec!["Team"]);
}

#[test]
fn test_reducer_is_pure() {
    let view = TableView::new(seasons(), ViewConfig::new(["Year", "Team"], "Year"));
    let before = view.state().clone();

    let next = reduce(
        view.records(),
        view.state(),
        &Action::SortBy {
            field: "G".to_string(),
            direction: SortDirection::Asc,
        },
    )
    .unwrap();

    assert_eq!(view.state(), &before);
    assert_eq!(next.order, vec![1, 0]);
    assert_eq!(next.sort.field, "G");
}

#[test]
fn test_rejected_actions_leave_view_unchanged() {
    let mut view = TableView::new(
        seasons(),
        ViewConfig::new(["Year", "Team"], "Year").with_filter("G"),
    );
    let before = view.state().clone();

    for action in [
        Action::AddColumn("WAR".to_string()),
        Action::SortBy {
            field: "WAR".to_string(),
            direction: SortDirection::Desc,
        },
        Action::RepositionColumn {
            field: "G".to_string(),
            position: 1,
        },
        Action::SetThreshold(Some(f64::NAN)),
    ] {
        let err = view.dispatch(action).unwrap_err();
        assert!(err.is_view_error(), "{err}");
        assert_eq!(view.state(), &before);
    }
}

#[test]
fn test_interactive_lines_drive_the_view() {
    let mut view = TableView::new(
        seasons(),
        ViewConfig::new(["Year", "Team"], "Year").with_filter("G"),
    );
    for line in ["add G", "move G 1", "sort G asc", "filter 20"] {
        view.dispatch(line.parse().unwrap()).unwrap();
    }
    assert_eq!(view.columns(), &["G", "Year", "Team"]);
    assert_eq!(view.visible_indices(), vec![0]);

    match "resize G".parse::<Action>() {
        Err(BbError::InvalidAction { input }) => assert_eq!(input, "resize G"),
        other => panic!("Expected InvalidAction, got {other:?}"),
    }
}

#[test]
fn test_export_matches_display() {
    let mut view = TableView::new(
        seasons(),
        ViewConfig::new(["Year", "Team", "G"], "G").with_filter("G"),
    );
    view.dispatch(Action::SetThreshold(None)).unwrap();
    let rendered = view.render();
    let snapshot = view.export_snapshot();

    assert_eq!(snapshot.rows.len(), rendered.rows.len());
    assert_eq!(
        snapshot.to_csv_string().unwrap(),
        "Year,Team,G\n2001,A,50\n2002,B,10\n"
    );
}
