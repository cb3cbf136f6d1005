//! Cleanup of OCR and extraction output.
//!
//! OCR engines and bidi-aware extractors sprinkle invisible direction marks
//! (U+200E LEFT-TO-RIGHT MARK, U+200F RIGHT-TO-LEFT MARK) through Arabic text.
//! They break substring searches, including the glyph-encoding detection
//! heuristic, and are removed here.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    /// LRM and RLM
    static ref RE_BIDI_MARKS: Regex = Regex::new(r"[\x{200E}\x{200F}]").unwrap();
}

/// Remove LRM/RLM marks from `text`.
///
/// Borrows the input when there is nothing to remove.
pub fn strip_bidi_marks(text: &str) -> Cow<'_, str> {
    RE_BIDI_MARKS.replace_all(text, "")
}

/// Whether `text` contains any LRM/RLM mark.
pub fn has_bidi_marks(text: &str) -> bool {
    RE_BIDI_MARKS.is_match(text)
}
