//! Tag endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::Tag;
use crate::AppState;

/// GET /tags
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Tag>>> {
    let tags = state.db.list_tags().await?;
    Ok(Json(tags))
}
