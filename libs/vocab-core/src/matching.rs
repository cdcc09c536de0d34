//! Answer matching for quiz verification.

use serde::{Deserialize, Serialize};

/// Result of comparing a submitted answer to the stored translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerCheck {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Normalized submitted answer (for display).
    pub user_normalized: String,
    /// Normalized stored answer (for display).
    pub correct_normalized: String,
}

/// Compare a submitted answer to the stored translation.
///
/// Matching policy: both sides are trimmed and lowercased before comparison.
/// Diacritics are NOT folded here: the stored answer was NFC-normalized on
/// write, and the submitted answer must match that form modulo case and
/// surrounding whitespace.
pub fn check_answer(user: &str, correct: &str) -> AnswerCheck {
    let user_normalized = user.trim().to_lowercase();
    let correct_normalized = correct.trim().to_lowercase();

    AnswerCheck {
        is_correct: user_normalized == correct_normalized,
        user_normalized,
        correct_normalized,
    }
}
