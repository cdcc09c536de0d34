//! Unicode normalization for stored text.
//!
//! Portuguese text arrives from clients with whatever combining-character
//! sequences their input method produced. Everything is stored in NFC so
//! that visually identical strings compare byte-equal later.

use unicode_normalization::UnicodeNormalization;

/// Apply canonical composition (NFC) to a string.
///
/// Idempotent: `nfc(nfc(s)) == nfc(s)`.
pub fn nfc(text: &str) -> String {
    text.nfc().collect()
}

/// Trim surrounding whitespace and apply NFC.
///
/// This is the write-path canonicalization for translations and examples.
pub fn clean(text: &str) -> String {
    nfc(text.trim())
}
