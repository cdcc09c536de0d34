//! Word CRUD and search endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /words
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Word>>> {
    let words = state.db.list_words().await?;
    Ok(Json(words))
}

/// GET /words/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Word>> {
    let word = state
        .db
        .get_word(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("word {}", id)))?;
    Ok(Json(word))
}

/// POST /words
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<WordPayload>,
) -> Result<(StatusCode, Json<Word>)> {
    let word = state.db.create_word(&payload).await?;
    Ok((StatusCode::CREATED, Json(word)))
}

/// PUT /words/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<WordPayload>,
) -> Result<Json<Word>> {
    let word = state.db.update_word(id, &payload).await?;
    Ok(Json(word))
}

/// DELETE /words/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    state.db.delete_word(id).await?;
    Ok(Json(MessageResponse {
        message: format!("word {} deleted", id),
    }))
}

/// GET /search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Word>>> {
    let words = state.db.search_words(query.q.as_deref().unwrap_or("")).await?;
    Ok(Json(words))
}
