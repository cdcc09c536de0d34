//! Export endpoints

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::Result;
use crate::models::ExportQuery;
use crate::services::export::{render_pdf, render_text, ExportOptions};
use crate::AppState;

impl ExportQuery {
    fn options(&self) -> ExportOptions {
        ExportOptions {
            include_examples: self.include_examples.unwrap_or(true),
            include_tags: self.include_tags.unwrap_or(true),
        }
    }
}

/// GET /export/txt
pub async fn txt(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response> {
    let words = state.db.list_words().await?;
    let body = render_text(&words, &query.options());

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"vocabulary.txt\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// GET /export/pdf
pub async fn pdf(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response> {
    let words = state.db.list_words().await?;
    let body = render_pdf(&words, &query.options())?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"vocabulary.pdf\"",
            ),
        ],
        body,
    )
        .into_response())
}
