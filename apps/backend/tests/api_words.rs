//! Word CRUD and search API tests.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

use common::fixtures;
use common::TestContext;

/// Test list is empty on a fresh database.
#[tokio::test]
async fn test_list_words_empty() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/words").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body.as_array().unwrap().is_empty());
}

/// Test create followed by get returns the stored fields.
#[tokio::test]
async fn test_create_then_get() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/words")
        .json(&fixtures::word_payload(
            "house",
            "casa",
            Some("My house is big."),
            &["nouns", "home"],
        ))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["english"], "house");
    assert_eq!(created["portuguese"], "casa");
    assert_eq!(created["example"], "My house is big.");
    assert_eq!(created["tags"], serde_json::json!(["nouns", "home"]));

    let response = server.get(&format!("/words/{}", id)).await;
    response.assert_status_ok();
    let fetched: serde_json::Value = response.json();
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["english"], "house");
    assert_eq!(fetched["tags"], serde_json::json!(["nouns", "home"]));
}

/// Test english is trimmed and portuguese is NFC-normalized on write.
#[tokio::test]
async fn test_create_normalizes_text() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    // decomposed "café": 'e' + combining acute
    let response = server
        .post("/words")
        .json(&fixtures::word_payload("  coffee  ", "cafe\u{0301}", None, &[]))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["english"], "coffee");
    assert_eq!(body["portuguese"], "caf\u{00e9}");
    assert_eq!(body["example"], "");
}

/// Test create rejects blank required fields before any write.
#[tokio::test]
async fn test_create_rejects_blank_fields() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/words")
        .json(&fixtures::word_payload("   ", "casa", None, &[]))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "invalid_input");

    let response = server
        .post("/words")
        .json(&fixtures::word_payload("house", "  ", None, &[]))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // nothing was committed
    let response = server.get("/words").await;
    let body: serde_json::Value = response.json();
    assert!(body.as_array().unwrap().is_empty());
}

/// Test get for a missing id returns 404.
#[tokio::test]
async fn test_get_word_not_found() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/words/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "not_found");
}

/// Test update replaces all fields and the full tag set.
#[tokio::test]
async fn test_update_replaces_fields_and_tags() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/words")
        .json(&fixtures::word_payload("cat", "gato", None, &["animals", "pets"]))
        .await;
    let id = response.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/words/{}", id))
        .json(&fixtures::word_payload(
            "dog",
            "cachorro",
            Some("O cachorro late."),
            &["animals"],
        ))
        .await;

    response.assert_status_ok();
    let updated: serde_json::Value = response.json();
    assert_eq!(updated["english"], "dog");
    assert_eq!(updated["portuguese"], "cachorro");
    assert_eq!(updated["example"], "O cachorro late.");
    // old "pets" link is gone, no duplicates
    assert_eq!(updated["tags"], serde_json::json!(["animals"]));

    let fetched: serde_json::Value = server.get(&format!("/words/{}", id)).await.json();
    assert_eq!(fetched["tags"], serde_json::json!(["animals"]));
}

/// Test update with an empty tag list removes every link.
#[tokio::test]
async fn test_update_with_empty_tags_untags_word() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/words")
        .json(&fixtures::word_payload("cat", "gato", None, &["animals"]))
        .await;
    let id = response.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/words/{}", id))
        .json(&fixtures::word_payload("cat", "gato", None, &[]))
        .await;

    response.assert_status_ok();
    let updated: serde_json::Value = response.json();
    assert!(updated["tags"].as_array().unwrap().is_empty());
}

/// Test update for a missing id returns 404.
#[tokio::test]
async fn test_update_not_found() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .put("/words/999")
        .json(&fixtures::word_payload("house", "casa", None, &[]))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

/// Test delete removes the word and its associations.
#[tokio::test]
async fn test_delete_word() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/words")
        .json(&fixtures::word_payload("house", "casa", None, &["nouns", "home"]))
        .await;
    let id = response.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server.delete(&format!("/words/{}", id)).await;
    response.assert_status_ok();

    let response = server.get(&format!("/words/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);

    // tags survive but their counts drop to zero
    let tags: serde_json::Value = server.get("/tags").await.json();
    for tag in tags.as_array().unwrap() {
        assert_eq!(tag["word_count"], 0);
    }
}

/// Test delete for a missing id returns 404.
#[tokio::test]
async fn test_delete_not_found() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.delete("/words/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

/// Test search is a case-insensitive substring match on both columns.
#[tokio::test]
async fn test_search_case_insensitive() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    server
        .post("/words")
        .json(&fixtures::word_payload("Cat", "gato", None, &[]))
        .await;
    server
        .post("/words")
        .json(&fixtures::word_payload("house", "casa", None, &[]))
        .await;

    let results: serde_json::Value = server.get("/search").add_query_param("q", "cat").await.json();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["english"], "Cat");

    // matches the portuguese column too
    let results: serde_json::Value = server.get("/search").add_query_param("q", "CASA").await.json();
    assert_eq!(results.as_array().unwrap().len(), 1);
}

/// Test case folding covers accented letters, not just ASCII.
#[tokio::test]
async fn test_search_accented_case_insensitive() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    server
        .post("/words")
        .json(&fixtures::word_payload("water", "\u{c1}gua", None, &[]))
        .await;
    server
        .post("/words")
        .json(&fixtures::word_payload("house", "casa", None, &[]))
        .await;

    // lowercase query must match the stored uppercase "Água"
    let results: serde_json::Value = server
        .get("/search")
        .add_query_param("q", "\u{e1}gua")
        .await
        .json();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["portuguese"], "\u{c1}gua");

    // and the other way around
    let results: serde_json::Value = server
        .get("/search")
        .add_query_param("q", "\u{c1}GUA")
        .await
        .json();
    assert_eq!(results.as_array().unwrap().len(), 1);
}

/// Test empty query matches everything, ordered by id.
#[tokio::test]
async fn test_search_empty_query_returns_all() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let ids = fixtures::seed_words(&server, 3).await;

    let results: serde_json::Value = server.get("/search").await.json();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 3);
    let returned: Vec<i64> = results.iter().map(|w| w["id"].as_i64().unwrap()).collect();
    assert_eq!(returned, ids);
}

/// Test list returns words in ascending id order.
#[tokio::test]
async fn test_list_ordered_by_id() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let ids = fixtures::seed_words(&server, 5).await;

    let body: serde_json::Value = server.get("/words").await.json();
    let returned: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["id"].as_i64().unwrap())
        .collect();
    assert_eq!(returned, ids);
}
