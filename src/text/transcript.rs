//! Text-level interface to OCR output.
//!
//! Scanned pages go through an external OCR engine instead of the glyph
//! decoder. The engine hands back recognised lines with a confidence score;
//! this module filters those lines and assembles per-page text into a
//! transcript with `--- Page N ---` headers.

use serde::{Deserialize, Serialize};

/// Lines scored at or below this confidence are dropped.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

/// One line recognised by an OCR engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrLine {
    /// Recognised text
    pub text: String,
    /// Engine confidence in `[0, 1]`
    pub confidence: f32,
}

impl OcrLine {
    /// Create a line.
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Join the lines whose confidence is strictly above `min_confidence`.
pub fn filter_confident_lines(lines: &[OcrLine], min_confidence: f32) -> String {
    let kept: Vec<&str> = lines
        .iter()
        .filter(|line| line.confidence > min_confidence)
        .map(|line| line.text.as_str())
        .collect();

    if kept.len() < lines.len() {
        log::debug!(
            "Dropped {} of {} OCR lines at confidence <= {}",
            lines.len() - kept.len(),
            lines.len(),
            min_confidence
        );
    }
    kept.join("\n")
}

/// Multi-page transcript with page headers.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    blocks: Vec<(usize, String)>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transcript from OCR lines grouped by page.
    ///
    /// Page numbers follow the slice order, starting at 1. Each page keeps
    /// only the lines above `min_confidence`.
    pub fn from_ocr_pages(pages: &[Vec<OcrLine>], min_confidence: f32) -> Self {
        let mut transcript = Self::new();
        for (i, lines) in pages.iter().enumerate() {
            transcript.push_page(i + 1, filter_confident_lines(lines, min_confidence));
        }
        transcript
    }

    /// Add the text of a page (1-based). Blank pages are skipped.
    pub fn push_page(&mut self, page: usize, text: impl Into<String>) {
        let text = text.into();
        if text.trim().is_empty() {
            log::debug!("Page {} is blank, leaving it out of the transcript", page);
            return;
        }
        self.blocks.push((page, text));
    }

    /// Number of non-blank pages added.
    pub fn page_count(&self) -> usize {
        self.blocks.len()
    }

    /// Render every page as a header line, its text, and an empty line.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.blocks.len() * 3);
        for (page, text) in &self.blocks {
            lines.push(format!("--- Page {} ---", page));
            lines.push(text.clone());
            lines.push(String::new());
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_confident_lines() {
        let lines = vec![
            OcrLine::new("بسم الله", 0.91),
            OcrLine::new("noise", 0.2),
            OcrLine::new("edge", 0.5),
            OcrLine::new("الرحمن", 0.7),
        ];
        assert_eq!(filter_confident_lines(&lines, DEFAULT_MIN_CONFIDENCE), "بسم الله\nالرحمن");
    }

    #[test]
    fn test_filter_no_lines() {
        assert_eq!(filter_confident_lines(&[], DEFAULT_MIN_CONFIDENCE), "");
    }

    #[test]
    fn test_transcript_render() {
        let mut transcript = Transcript::new();
        transcript.push_page(1, "first");
        transcript.push_page(2, "   \n");
        transcript.push_page(3, "third");
        assert_eq!(transcript.page_count(), 2);
        assert_eq!(transcript.render(), "--- Page 1 ---\nfirst\n\n--- Page 3 ---\nthird\n");
    }

    #[test]
    fn test_transcript_from_ocr_pages() {
        let pages = vec![
            vec![OcrLine::new("سطر", 0.8), OcrLine::new("noise", 0.1)],
            vec![OcrLine::new("faint", 0.4)],
            vec![OcrLine::new("a", 0.6), OcrLine::new("b", 0.9)],
        ];
        let transcript = Transcript::from_ocr_pages(&pages, DEFAULT_MIN_CONFIDENCE);
        assert_eq!(transcript.page_count(), 2);
        assert_eq!(transcript.render(), "--- Page 1 ---\nسطر\n\n--- Page 3 ---\na\nb\n");
    }

    #[test]
    fn test_empty_transcript() {
        assert_eq!(Transcript::new().render(), "");
    }
}
