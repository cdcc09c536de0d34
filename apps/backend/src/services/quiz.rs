//! Quiz drawing and answer verification.
//!
//! Stateless between requests: a draw hands out `{id, question}` pairs only,
//! and verification re-reads the canonical answer by id instead of trusting
//! anything the client held onto.

use rand::seq::SliceRandom;

use crate::db::Database;
use crate::error::{ApiError, Result};
use crate::models::{QuizQuestion, SubmitAnswerResponse};

/// Draw up to `count` words uniformly at random, without replacement.
///
/// `count` is clamped to the number of stored words; zero or negative counts
/// yield an empty draw.
pub async fn draw_random(db: &Database, count: i64) -> Result<Vec<QuizQuestion>> {
    if count <= 0 {
        return Ok(Vec::new());
    }

    let entries = db.list_quiz_entries().await?;
    let mut rng = rand::thread_rng();
    let mut drawn: Vec<QuizQuestion> = entries
        .choose_multiple(&mut rng, count as usize)
        .cloned()
        .collect();
    drawn.shuffle(&mut rng);

    Ok(drawn)
}

/// Draw all words with ids in `[start, end]`, or from `start` onward when
/// `end` is absent, ordered by id.
pub async fn draw_range(db: &Database, start: i64, end: Option<i64>) -> Result<Vec<QuizQuestion>> {
    db.quiz_entries_in_range(start, end).await
}

/// Verify a submitted answer against the stored translation.
///
/// Matching is case-insensitive and trims surrounding whitespace; diacritics
/// must match the NFC form stored at write time.
pub async fn verify(db: &Database, id: i64, answer: &str) -> Result<SubmitAnswerResponse> {
    let correct = db
        .get_answer(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("word {}", id)))?;

    let check = vocab_core::matching::check_answer(answer, &correct);

    Ok(SubmitAnswerResponse {
        is_correct: check.is_correct,
        correct_answer: correct,
        user_answer: answer.to_string(),
    })
}
