//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{ApiError, Result};

// Re-export shared types from vocab-core
pub use vocab_core::types::{QuizQuestion, Tag, Word};

// === Database Entity Types ===

/// Word row as stored in SQLite, without its tags.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWord {
    pub id: i64,
    pub english: String,
    pub portuguese: String,
    pub example: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbWord {
    /// Attach resolved tag names to produce the API word.
    pub fn into_word(self, tags: Vec<String>) -> Word {
        Word {
            id: self.id,
            english: self.english,
            portuguese: self.portuguese,
            example: self.example,
            tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// === API Request/Response Types ===

/// Body for POST /words and PUT /words/{id}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordPayload {
    pub english: String,
    pub portuguese: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Scalar word fields after validation and normalization.
#[derive(Debug, Clone)]
pub struct WordFields {
    pub english: String,
    pub portuguese: String,
    pub example: String,
}

impl WordPayload {
    /// Validate required fields and canonicalize text.
    ///
    /// `english` is trimmed only; `portuguese` and `example` are trimmed and
    /// NFC-normalized. Fails before any storage mutation is attempted.
    pub fn validate(&self) -> Result<WordFields> {
        let english = self.english.trim().to_string();
        if english.is_empty() {
            return Err(ApiError::InvalidInput("english is required".to_string()));
        }

        let portuguese = vocab_core::normalize::clean(&self.portuguese);
        if portuguese.is_empty() {
            return Err(ApiError::InvalidInput("portuguese is required".to_string()));
        }

        let example = self
            .example
            .as_deref()
            .map(vocab_core::normalize::clean)
            .unwrap_or_default();

        Ok(WordFields {
            english,
            portuguese,
            example,
        })
    }
}

/// Confirmation body for DELETE /words/{id}.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RandomQuizQuery {
    pub count: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuizQuery {
    pub start: i64,
    pub end: Option<i64>,
}

/// Body for POST /quiz/submit.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    pub id: i64,
    pub answer: String,
}

/// Verification result for a submitted quiz answer.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerResponse {
    pub is_correct: bool,
    pub correct_answer: String,
    pub user_answer: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub include_examples: Option<bool>,
    pub include_tags: Option<bool>,
}
