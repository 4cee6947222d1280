mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use shortlink::domain::repositories::AliasRepository;

#[tokio::test]
async fn test_redirect_to_original_url() {
    let (state, repo) = common::create_test_state();
    common::create_test_alias(&repo, "demo", "https://example.com/page").await;

    let server = TestServer::new(common::app(state)).unwrap();

    let response = server.get("/resolve-short-url/demo").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/page"
    );

    let record = repo.find_by_alias("demo").await.unwrap().unwrap();
    assert_eq!(record.clicks, 1);
}

#[tokio::test]
async fn test_redirect_unknown_alias_is_not_found() {
    let (state, repo) = common::create_test_state();
    let server = TestServer::new(common::app(state)).unwrap();

    let response = server.get("/resolve-short-url/ghost").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");

    // A miss must not create anything.
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_each_redirect_counts_one_click() {
    let (state, repo) = common::create_test_state();
    common::create_test_alias(&repo, "demo", "https://example.com").await;

    let server = TestServer::new(common::app(state)).unwrap();

    for _ in 0..5 {
        let response = server.get("/resolve-short-url/demo").await;
        response.assert_status(StatusCode::FOUND);
    }

    let record = repo.find_by_alias("demo").await.unwrap().unwrap();
    assert_eq!(record.clicks, 5);
}

#[tokio::test]
async fn test_create_then_redirect_round_trip() {
    let (state, _repo) = common::create_test_state();
    let server = TestServer::new(common::app(state)).unwrap();

    let created = server
        .post("/create-short-url")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let alias = created.json::<serde_json::Value>()["data"]["alias"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/resolve-short-url/{alias}")).await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/page"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_increments_are_atomic() {
    let (_state, repo) = common::create_test_state();
    common::create_test_alias(&repo, "demo", "https://example.com").await;

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..100 {
        let repo = repo.clone();
        tasks.spawn(async move {
            repo.increment_clicks("demo").await.unwrap();
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }

    // Increments happen under the table's write lock: no lost updates.
    let record = repo.find_by_alias("demo").await.unwrap().unwrap();
    assert_eq!(record.clicks, 100);
}
