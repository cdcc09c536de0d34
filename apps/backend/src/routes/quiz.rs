//! Quiz endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::services::quiz;
use crate::AppState;

const DEFAULT_DRAW_COUNT: i64 = 10;

/// GET /quiz/random?count=
pub async fn random(
    State(state): State<AppState>,
    Query(query): Query<RandomQuizQuery>,
) -> Result<Json<Vec<QuizQuestion>>> {
    let count = query.count.unwrap_or(DEFAULT_DRAW_COUNT);
    let questions = quiz::draw_random(&state.db, count).await?;
    Ok(Json(questions))
}

/// GET /quiz/range?start=&end=
pub async fn range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuizQuery>,
) -> Result<Json<Vec<QuizQuestion>>> {
    let questions = quiz::draw_range(&state.db, query.start, query.end).await?;
    Ok(Json(questions))
}

/// POST /quiz/submit
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>> {
    let result = quiz::verify(&state.db, payload.id, &payload.answer).await?;
    Ok(Json(result))
}
