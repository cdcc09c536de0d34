//! Plain-text export renderer.

use vocab_core::types::Word;

use super::{word_lines, ExportOptions};

/// Render the word list as a plain-text document.
pub fn render_text(words: &[Word], options: &ExportOptions) -> String {
    let mut out = String::new();
    out.push_str("Vocabulary List\n");
    out.push_str("===============\n\n");

    for word in words {
        for line in word_lines(word, options) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }

    out
}
