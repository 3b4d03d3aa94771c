//! Integration tests for the GraphQL gateway
//!
//! Drives the full axum router with in-process requests: UI/health routes
//! plus the query/mutation contract over POST /graphql.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use lyrical_common::db::init_database;
use lyrical_web::{build_router, graphql::build_schema};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: router backed by a fresh temporary database
async fn setup_app() -> (TempDir, Router) {
    let dir = TempDir::new().expect("Should create temp dir");
    let pool = init_database(&dir.path().join("lyrical.db"))
        .await
        .expect("Should initialize database");
    (dir, build_router(build_schema(pool)))
}

/// Test helper: GraphQL request with variables
fn graphql_request(query: &str, variables: Value) -> Request<Body> {
    let body = json!({ "query": query, "variables": variables });
    Request::builder()
        .method("POST")
        .uri("/graphql")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Test helper: execute a GraphQL operation and return the response body
async fn execute(app: &Router, query: &str, variables: Value) -> Value {
    let response = app
        .clone()
        .oneshot(graphql_request(query, variables))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    extract_json(response.into_body()).await
}

// =============================================================================
// Gateway routes
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, app) = setup_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "lyrical-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_ui_routes_served() {
    let (_dir, app) = setup_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/static/app.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/javascript"
    );
}

#[tokio::test]
async fn test_graphiql_playground_served() {
    let (_dir, app) = setup_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/graphql")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Queries
// =============================================================================

#[tokio::test]
async fn test_songs_query_empty_catalog() {
    let (_dir, app) = setup_app().await;

    let body = execute(&app, "query { songs { id title } }", json!({})).await;

    assert!(body["errors"].is_null(), "Unexpected errors: {}", body["errors"]);
    assert_eq!(body["data"]["songs"], json!([]));
}

#[tokio::test]
async fn test_song_query_unknown_id_is_not_found() {
    let (_dir, app) = setup_app().await;

    let body = execute(
        &app,
        "query($id: ID!) { song(id: $id) { id title } }",
        json!({ "id": "no-such-song" }),
    )
    .await;

    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn test_add_song_appears_in_songs_exactly_once() {
    let (_dir, app) = setup_app().await;

    let body = execute(
        &app,
        "mutation($title: String!) { addSong(title: $title) { title } }",
        json!({ "title": "Everlong" }),
    )
    .await;
    assert!(body["errors"].is_null(), "Unexpected errors: {}", body["errors"]);
    assert_eq!(body["data"]["addSong"]["title"], "Everlong");

    let body = execute(&app, "query { songs { id title } }", json!({})).await;
    let songs = body["data"]["songs"].as_array().unwrap();
    let matches = songs.iter().filter(|s| s["title"] == "Everlong").count();
    assert_eq!(matches, 1);
}

#[tokio::test]
async fn test_add_lyric_returns_owning_song_with_lyrics() {
    let (_dir, app) = setup_app().await;

    let body = execute(
        &app,
        "mutation { addSong(title: \"My Hero\") { id } }",
        json!({}),
    )
    .await;
    let song_id = body["data"]["addSong"]["id"].as_str().unwrap().to_string();

    let body = execute(
        &app,
        "mutation($content: String!, $songId: ID!) {
            addLyricToSong(content: $content, songId: $songId) {
                id
                lyrics { id content }
            }
        }",
        json!({ "content": "Too alarming now to talk about", "songId": song_id }),
    )
    .await;

    assert!(body["errors"].is_null(), "Unexpected errors: {}", body["errors"]);
    let song = &body["data"]["addLyricToSong"];
    assert_eq!(song["id"], song_id.as_str());
    assert_eq!(song["lyrics"][0]["content"], "Too alarming now to talk about");

    // Freshly created lyrics start at zero likes
    let body = execute(
        &app,
        "query($id: ID!) { song(id: $id) { lyrics { content likes } } }",
        json!({ "id": song_id }),
    )
    .await;
    assert_eq!(body["data"]["song"]["lyrics"][0]["likes"], 0);
}

#[tokio::test]
async fn test_add_lyric_unknown_song_is_not_found_without_side_effects() {
    let (_dir, app) = setup_app().await;

    let body = execute(
        &app,
        "mutation($content: String!, $songId: ID!) {
            addLyricToSong(content: $content, songId: $songId) { id }
        }",
        json!({ "content": "orphan", "songId": "no-such-song" }),
    )
    .await;

    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_like_lyric_unknown_id_is_not_found() {
    let (_dir, app) = setup_app().await;

    let body = execute(
        &app,
        "mutation($id: ID!) { likeLyric(id: $id) { id likes } }",
        json!({ "id": "no-such-lyric" }),
    )
    .await;

    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_full_scenario_foo_fighters_hits() {
    let (_dir, app) = setup_app().await;

    // Create song
    let body = execute(
        &app,
        "mutation { addSong(title: \"Foo Fighters Hits\") { id title } }",
        json!({}),
    )
    .await;
    let song_id = body["data"]["addSong"]["id"].as_str().unwrap().to_string();

    // Attach a lyric
    let body = execute(
        &app,
        "mutation($content: String!, $songId: ID!) {
            addLyricToSong(content: $content, songId: $songId) {
                lyrics { id content }
            }
        }",
        json!({ "content": "Hello", "songId": song_id }),
    )
    .await;
    let lyric_id = body["data"]["addLyricToSong"]["lyrics"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Fresh lyric: content "Hello", likes 0
    let body = execute(
        &app,
        "query($id: ID!) { song(id: $id) { lyrics { content likes } } }",
        json!({ "id": song_id }),
    )
    .await;
    assert_eq!(body["data"]["song"]["lyrics"][0]["content"], "Hello");
    assert_eq!(body["data"]["song"]["lyrics"][0]["likes"], 0);

    // Like twice: each call adds exactly 1
    for expected in 1..=2 {
        let body = execute(
            &app,
            "mutation($id: ID!) { likeLyric(id: $id) { id likes } }",
            json!({ "id": lyric_id }),
        )
        .await;
        assert_eq!(body["data"]["likeLyric"]["likes"], expected);
    }

    // The re-fetched song detail reflects both likes
    let body = execute(
        &app,
        "query($id: ID!) { song(id: $id) { lyrics { content likes } } }",
        json!({ "id": song_id }),
    )
    .await;
    assert_eq!(body["data"]["song"]["lyrics"][0]["likes"], 2);
}
