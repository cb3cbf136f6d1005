//! Text utilities around the decoder.
//!
//! Cleanup of direction marks, and the text-level side of OCR output
//! (confidence filtering and page transcripts).

pub mod cleanup;
pub mod transcript;

pub use cleanup::{has_bidi_marks, strip_bidi_marks};
pub use transcript::{filter_confident_lines, OcrLine, Transcript, DEFAULT_MIN_CONFIDENCE};
