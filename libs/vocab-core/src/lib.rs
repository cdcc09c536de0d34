//! Core vocabulary library shared by the backend service.
//!
//! Provides:
//! - Unicode text normalization for stored translations
//! - Answer matching for quiz verification
//! - Shared types (Word, Tag, QuizQuestion)

pub mod matching;
pub mod normalize;
pub mod types;

pub use matching::{check_answer, AnswerCheck};
pub use normalize::{clean, nfc};
pub use types::{QuizQuestion, Tag, Word};
