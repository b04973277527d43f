//! End-to-end tests: mocked stats API -> record source -> table view

use bbstats::{
    api::{HttpRecordSource, RecordSource},
    commands::{
        common::{apply_view_args, Page},
        team_data::{load_team_page, UNKNOWN_TEAM_MESSAGE},
    },
    cli::ViewArgs,
    view::EXPORT_FILE_NAME,
    FranchiseId, StatKind, Year,
};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

async fn mock_api() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/franchises"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"franchID": "NYY", "franchName": "New York Yankees", "active": "Y"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teampitching/NYY"))
        .and(query_param("start_year", "2022"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Pos": "SP", "Name": "Gerrit Cole", "playerID": "colege01", "IP": 200.2, "ERA": 3.5, "ERA+": 117, "SO": 257},
            {"Pos": "SP", "Name": "Nestor Cortes", "playerID": "cortene01", "IP": 158.1, "ERA": 2.44, "ERA+": 168, "SO": 163},
            {"Pos": "RP", "Name": "Ron Marinaccio", "playerID": "marinro01", "IP": 44.0, "ERA": 2.05, "ERA+": 200, "SO": 56},
            {"Pos": "RP", "Name": "Ryan Weber", "playerID": "weberry01", "IP": 0.0, "ERA": null, "ERA+": null, "SO": 0}
        ])))
        .mount(&server)
        .await;
    server
}

fn source(server: &MockServer) -> HttpRecordSource {
    HttpRecordSource::new(format!("{}/api/v1", server.uri())).unwrap()
}

#[tokio::test]
async fn test_team_pitching_page() {
    let server = mock_api().await;
    let page = load_team_page(
        &source(&server),
        &FranchiseId::new("nyy"),
        Some(Year::new(2022)),
        None,
        StatKind::Pitching,
    )
    .await
    .unwrap();

    let Page::Table { title, mut view } = page else {
        panic!("expected a table");
    };
    assert_eq!(title, "New York Yankees 2022 Pitching");
    assert_eq!(view.columns(), &["Pos", "Name", "IP", "ERA", "ERA+"]);
    // default minimum of 1 IP hides the pitcher without innings
    assert_eq!(view.visible_indices(), vec![0, 1, 2]);

    let args = ViewArgs {
        add: vec!["SO".to_string()],
        sort: Some("ERA".to_string()),
        direction: bbstats::SortDirection::Asc,
        min: Some("100".to_string()),
        ..Default::default()
    };
    apply_view_args(&mut view, &args).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = view.export_snapshot().save(dir.path()).unwrap();
    assert!(path.ends_with(EXPORT_FILE_NAME));
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "Pos,Name,IP,ERA,ERA+,SO\nSP,Nestor Cortes,158.1,2.44,168,163\nSP,Gerrit Cole,200.2,3.5,117,257\n"
    );
}

#[tokio::test]
async fn test_unknown_team_makes_no_stats_request() {
    let server = mock_api().await;
    let page = load_team_page(
        &source(&server),
        &FranchiseId::new("BOS"),
        Some(Year::new(2022)),
        None,
        StatKind::Batting,
    )
    .await
    .unwrap();

    assert!(matches!(page, Page::NotFound(UNKNOWN_TEAM_MESSAGE)));
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/api/v1/franchises");
}

#[tokio::test]
async fn test_unreachable_api() {
    // nothing listens on the discard port
    let source = HttpRecordSource::new("http://127.0.0.1:9/api/v1").unwrap();
    assert!(source.fetch_franchises().await.is_err());
}
