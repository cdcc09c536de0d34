//! Shared vocabulary types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored vocabulary entry with its resolved tag names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    /// Quiz prompt. Trimmed on write, not normalized.
    pub english: String,
    /// Canonical answer, stored NFC-normalized.
    pub portuguese: String,
    /// Optional usage example, normalized like `portuguese`. Empty when absent.
    pub example: String,
    /// Tag names in insertion order.
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A tag with its computed usage count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    /// Number of words currently carrying this tag. Computed, never stored.
    pub word_count: i64,
}

/// One quiz item. Deliberately excludes the answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub question: String,
}
