//! Document export: renders the full word list to plain text or PDF.
//!
//! Renderers are read-only consumers of an ordered word sequence; they never
//! touch the store.

mod pdf;
mod text;

pub use pdf::render_pdf;
pub use text::render_text;

use vocab_core::types::Word;

/// Rendering options shared by both export formats.
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    pub include_examples: bool,
    pub include_tags: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_examples: true,
            include_tags: true,
        }
    }
}

/// The rendered lines for one word, shared by both formats.
fn word_lines(word: &Word, options: &ExportOptions) -> Vec<String> {
    let mut lines = vec![format!("{}. {} - {}", word.id, word.english, word.portuguese)];

    if options.include_examples && !word.example.is_empty() {
        lines.push(format!("   Example: {}", word.example));
    }
    if options.include_tags && !word.tags.is_empty() {
        lines.push(format!("   Tags: {}", word.tags.join(", ")));
    }

    lines
}
