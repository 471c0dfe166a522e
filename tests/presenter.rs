mod common;

use common::{client_for, mount_repos, mount_status, repo_json, unreachable_client};
use github_repo_search::dispatcher::{on_row_selected, Effect};
use github_repo_search::error::FetchError;
use github_repo_search::presenter::{present, PresentationOutcome, RowViewModel, LOAD_FAILURE_MESSAGE};
use github_repo_search::types::RepositoryRecord;
use serde_json::json;
use wiremock::MockServer;

fn record(id: u64, name: &str) -> RepositoryRecord {
    RepositoryRecord::new(
        id,
        name,
        format!("octocat/{}", name),
        format!("https://github.com/octocat/{}", name),
        None,
        id,
    )
    .expect("Valid record")
}

fn rows(outcome: PresentationOutcome) -> Vec<RowViewModel> {
    match outcome {
        PresentationOutcome::Rows(rows) => rows,
        other => panic!("Expected rows, got: {:?}", other),
    }
}

#[test]
fn test_rows_follow_record_order() {
    let records = vec![record(5, "b"), record(1, "a"), record(9, "c")];
    let rows = rows(present(&Ok(records.clone())));

    assert_eq!(rows.len(), records.len());
    for (row, record) in rows.iter().zip(&records) {
        assert_eq!(row.id, record.id());
        assert_eq!(row.name, record.name());
        assert_eq!(row.html_url, record.html_url());
    }
}

#[test]
fn test_empty_list_is_empty_rows() {
    let outcome = present(&Ok(Vec::new()));
    assert_eq!(outcome, PresentationOutcome::Rows(Vec::new()));
    assert!(!outcome.is_failure());
}

#[test]
fn test_every_failure_kind_is_one_notification() {
    let failures = vec![
        FetchError::HttpStatus { code: 404 },
        FetchError::HttpStatus { code: 500 },
        FetchError::Decode(serde_json::from_str::<Vec<u8>>("{").unwrap_err()),
    ];

    for failure in failures {
        match present(&Err(failure)) {
            PresentationOutcome::Failure(notification) => {
                assert_eq!(notification.message, LOAD_FAILURE_MESSAGE);
            }
            other => panic!("Expected failure, got: {:?}", other),
        }
    }
}

#[test]
fn test_present_is_idempotent() {
    let ok = Ok(vec![record(1, "a"), record(2, "b")]);
    assert_eq!(present(&ok), present(&ok));

    let err: Result<Vec<RepositoryRecord>, FetchError> = Err(FetchError::HttpStatus { code: 403 });
    assert_eq!(present(&err), present(&err));
}

#[tokio::test]
async fn test_octocat_scenario() {
    let server = MockServer::start().await;
    mount_repos(&server, "octocat", json!([repo_json(1, "octocat", "Hello-World")])).await;

    let result = client_for(&server).fetch_repositories("octocat").await;
    let rows = rows(present(&result));

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Hello-World");
    assert_eq!(rows[0].html_url, "https://github.com/octocat/Hello-World");
    assert_eq!(
        on_row_selected(&rows[0]),
        Effect::OpenLink("https://github.com/octocat/Hello-World".to_string())
    );
}

#[tokio::test]
async fn test_remote_row_count_matches() {
    let server = MockServer::start().await;
    let body: Vec<_> = (1..=7).map(|i| repo_json(i, "octocat", &format!("repo-{}", i))).collect();
    mount_repos(&server, "octocat", json!(body)).await;

    let result = client_for(&server).fetch_repositories("octocat").await;
    let rows = rows(present(&result));

    assert_eq!(rows.len(), 7);
    let names: Vec<String> = rows.into_iter().map(|r| r.name).collect();
    let expected: Vec<String> = (1..=7).map(|i| format!("repo-{}", i)).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_http_error_never_yields_rows() {
    let server = MockServer::start().await;
    mount_status(&server, "octocat", 404).await;

    let result = client_for(&server).fetch_repositories("octocat").await;
    assert!(present(&result).is_failure());
}

#[tokio::test]
async fn test_network_failure_is_one_notification() {
    let result = unreachable_client().fetch_repositories("octocat").await;

    match present(&result) {
        PresentationOutcome::Failure(notification) => {
            assert_eq!(notification.message, LOAD_FAILURE_MESSAGE);
        }
        other => panic!("Expected failure, got: {:?}", other),
    }
}
