//! Test fixtures and factory functions for creating test data.

use axum_test::TestServer;
use serde_json::json;

/// Create a word request body.
pub fn word_payload(
    english: &str,
    portuguese: &str,
    example: Option<&str>,
    tags: &[&str],
) -> serde_json::Value {
    json!({
        "english": english,
        "portuguese": portuguese,
        "example": example,
        "tags": tags,
    })
}

/// Create a quiz submit request body.
pub fn submit_answer_request(id: i64, answer: &str) -> serde_json::Value {
    json!({ "id": id, "answer": answer })
}

/// Create `count` numbered words through the API and return their ids.
pub async fn seed_words(server: &TestServer, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 1..=count {
        let response = server
            .post("/words")
            .json(&word_payload(
                &format!("word {}", i),
                &format!("palavra {}", i),
                None,
                &[],
            ))
            .await;
        let body: serde_json::Value = response.json();
        ids.push(body["id"].as_i64().expect("created word has an id"));
    }
    ids
}
