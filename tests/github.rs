use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use portfolio::calendar::YearSelector;
use portfolio::github::{describe_event, GithubClient};
use serde_json::{json, Value};
use std::collections::HashMap;

async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn repos(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    assert_eq!(params.get("sort").map(String::as_str), Some("updated"));
    assert_eq!(params.get("per_page").map(String::as_str), Some("5"));
    Json(json!([{
        "name": "habit-tracker",
        "description": null,
        "html_url": "https://github.com/octo/habit-tracker",
        "stargazers_count": 3,
        "forks_count": 1,
        "language": "Python",
        "updated_at": "2025-03-01T10:00:00Z",
        "private": false
    }]))
}

async fn contributions(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let y = params.get("y").cloned().unwrap_or_default();
    let total_key = if y == "last" { "lastYear".to_string() } else { y };
    let mut total = serde_json::Map::new();
    total.insert(total_key, json!(12));
    Json(json!({
        "total": total,
        "contributions": [
            { "date": "2025-03-01", "count": 5, "level": 2 },
            { "date": "2025-03-02", "count": 7, "level": 3 }
        ]
    }))
}

async fn bare_contributions() -> Json<Value> {
    Json(json!({
        "contributions": [
            { "date": "2025-03-01", "count": 5, "level": 2 },
            { "date": "2025-03-02", "count": 7, "level": 3 }
        ]
    }))
}

fn stub_router() -> Router {
    Router::new()
        .route("/users/octo/repos", get(repos))
        .route(
            "/users/octo/events",
            get(|| async { (StatusCode::FORBIDDEN, "rate limited") }),
        )
        .route("/v4/octo", get(contributions))
        .route("/v4/bare", get(bare_contributions))
        .route("/users/broken/repos", get(|| async { "not json" }))
}

#[tokio::test]
async fn activity_degrades_each_source_independently() {
    let base = spawn_stub(stub_router()).await;
    let client = GithubClient::new("octo", base.clone(), base).unwrap();

    let (repos, events) = client.activity().await;
    let repos = repos.into_option().expect("repos should be available");
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].language.as_deref(), Some("Python"));
    assert!(repos[0].description.is_none());
    assert!(!events.is_available());
}

#[tokio::test]
async fn undecodable_body_is_unavailable() {
    let base = spawn_stub(stub_router()).await;
    let client = GithubClient::new("broken", base.clone(), base).unwrap();
    assert_eq!(client.repos().await.into_option().map(|r| r.len()), None);
}

#[tokio::test]
async fn contributions_read_matching_total() {
    let base = spawn_stub(stub_router()).await;
    let client = GithubClient::new("octo", base.clone(), base).unwrap();

    let last = client.contributions(YearSelector::Last).await.into_option().unwrap();
    assert_eq!(last.total, 12);
    assert_eq!(last.days.len(), 2);

    let year = client
        .contributions(YearSelector::Year(2025))
        .await
        .into_option()
        .unwrap();
    assert_eq!(year.total, 12);
}

#[tokio::test]
async fn contributions_total_falls_back_to_day_sum() {
    let base = spawn_stub(stub_router()).await;
    let client = GithubClient::new("bare", base.clone(), base).unwrap();
    let contributions = client.contributions(YearSelector::Last).await.into_option().unwrap();
    assert_eq!(contributions.total, 12);
}

#[tokio::test]
async fn unreachable_host_is_unavailable() {
    let client = GithubClient::new("octo", "http://127.0.0.1:9", "http://127.0.0.1:9").unwrap();
    assert!(!client.repos().await.is_available());
    assert!(!client.contributions(YearSelector::Last).await.is_available());
}

#[test]
fn event_payload_from_api_describes_push() {
    let event: portfolio::models::GithubEvent = serde_json::from_value(json!({
        "id": "42",
        "type": "PushEvent",
        "actor": { "login": "octo" },
        "repo": { "id": 1, "name": "octo/portfolio" },
        "created_at": "2025-03-01T10:00:00Z",
        "payload": { "commits": [{ "sha": "abc", "message": "tidy calendar" }] }
    }))
    .unwrap();
    assert_eq!(describe_event(&event), "Pushed to portfolio: \"tidy calendar\"");
}
