//! Page-level decoding pipeline.
//!
//! Text extractors hand over one string per page. Only pages that look
//! glyph-encoded are decoded; every other page is passed through unchanged.
//! Results are reassembled in the order the pages were supplied, whether
//! they were decoded sequentially or (with the `parallel` feature) on a
//! rayon thread pool.
//!
//! # Example
//!
//! ```ignore
//! use arabic_glyph_decoder::{DecoderConfig, DocumentDecoder, GlyphTable};
//!
//! let table = GlyphTable::build();
//! let decoder = DocumentDecoder::with_config(&table, &DecoderConfig::default());
//! let doc = decoder.decode_pages(&["lam/noon/meem", "plain page"])?;
//! assert_eq!(doc.text(), "لنم\nplain page");
//! ```

use crate::config::DecoderConfig;
use crate::decoder::{DecodeReport, TokenStreamDecoder, TOKEN_SEPARATOR};
use crate::diagnostics::{preview, DEFAULT_PREVIEW_CHARS};
use crate::error::{Error, Result};
use crate::glyphs::GlyphTable;
use crate::text::{has_bidi_marks, strip_bidi_marks};
use std::collections::BTreeSet;

/// Page break in extractor output.
pub const PAGE_SEPARATOR: char = '\u{000C}';

/// Split extractor output into pages on form feeds.
///
/// A trailing empty page, left by extractors that end every page with a form
/// feed, is dropped.
pub fn split_pages(text: &str) -> Vec<&str> {
    let mut pages: Vec<&str> = text.split(PAGE_SEPARATOR).collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}

/// Heuristic for pages that carry glyph-name tokens instead of Unicode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingDetector {
    markers: Vec<String>,
}

impl Default for EncodingDetector {
    fn default() -> Self {
        Self::from_config(&DecoderConfig::default())
    }
}

impl EncodingDetector {
    /// Create a detector with explicit marker substrings.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a detector from the configured markers.
    pub fn from_config(config: &DecoderConfig) -> Self {
        Self::new(config.detection_markers.iter().cloned())
    }

    /// A page is glyph-encoded if it contains the token separator and at
    /// least one marker substring.
    pub fn is_glyph_encoded(&self, text: &str) -> bool {
        text.contains(TOKEN_SEPARATOR) && self.markers.iter().any(|m| text.contains(m.as_str()))
    }
}

/// What happened to a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Page was decoded
    Decoded(DecodeReport),
    /// Page did not look glyph-encoded and was kept as-is
    PassedThrough,
}

/// One page of pipeline output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// 1-based page number
    pub page: usize,
    /// Final page text
    pub text: String,
    /// Decode details
    pub outcome: PageOutcome,
}

impl PageResult {
    /// Whether the page went through the decoder.
    pub fn was_decoded(&self) -> bool {
        matches!(self.outcome, PageOutcome::Decoded(_))
    }

    /// Unresolved tokens on this page, in order of occurrence.
    pub fn unresolved(&self) -> &[String] {
        match &self.outcome {
            PageOutcome::Decoded(report) => &report.unresolved,
            PageOutcome::PassedThrough => &[],
        }
    }
}

/// All pages of a document, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedDocument {
    /// Page results
    pub pages: Vec<PageResult>,
}

impl DecodedDocument {
    /// Page texts joined with newlines.
    pub fn text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Distinct unresolved tokens across all pages, sorted.
    pub fn unresolved(&self) -> BTreeSet<String> {
        self.pages
            .iter()
            .flat_map(|p| p.unresolved().iter().cloned())
            .collect()
    }

    /// Number of pages that were decoded.
    pub fn decoded_page_count(&self) -> usize {
        self.pages.iter().filter(|p| p.was_decoded()).count()
    }
}

/// Decodes documents page by page.
#[derive(Debug, Clone)]
pub struct DocumentDecoder<'t> {
    decoder: TokenStreamDecoder<'t>,
    detector: EncodingDetector,
    strict: bool,
    strip_bidi: bool,
}

impl<'t> DocumentDecoder<'t> {
    /// Create a document decoder with default configuration.
    pub fn new(table: &'t GlyphTable) -> Self {
        Self::with_config(table, &DecoderConfig::default())
    }

    /// Create a document decoder from a configuration.
    pub fn with_config(table: &'t GlyphTable, config: &DecoderConfig) -> Self {
        Self {
            decoder: TokenStreamDecoder::with_config(table, config),
            detector: EncodingDetector::from_config(config),
            strict: config.strict,
            strip_bidi: config.strip_bidi_marks,
        }
    }

    /// The underlying token stream decoder.
    pub fn token_decoder(&self) -> &TokenStreamDecoder<'t> {
        &self.decoder
    }

    /// The page detector.
    pub fn detector(&self) -> &EncodingDetector {
        &self.detector
    }

    /// Decode one page (1-based `page` number, used for reporting).
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`Error::UnresolvedGlyphs`] if any token on the
    /// page could not be resolved.
    pub fn decode_page(&self, page: usize, raw: &str) -> Result<PageResult> {
        let text = if self.strip_bidi {
            strip_bidi_marks(raw)
        } else {
            if has_bidi_marks(raw) {
                log::warn!("Page {}: contains LRM/RLM marks, enable strip_bidi_marks if detection misses it", page);
            }
            raw.into()
        };

        log::debug!("Raw page {}: {}", page, preview(&text, DEFAULT_PREVIEW_CHARS));

        if !self.detector.is_glyph_encoded(&text) {
            log::info!("Page {}: no glyph tokens detected, passing through", page);
            return Ok(PageResult {
                page,
                text: text.into_owned(),
                outcome: PageOutcome::PassedThrough,
            });
        }

        let report = self.decoder.decode(&text);
        log::info!(
            "Page {}: decoded {} tokens, {} unresolved, {} fuzzy",
            page,
            report.stats.tokens,
            report.unresolved.len(),
            report.fuzzy_matches.len()
        );

        if self.strict && !report.is_clean() {
            return Err(Error::UnresolvedGlyphs {
                page,
                tokens: report.unresolved_set().into_iter().map(str::to_string).collect(),
            });
        }

        Ok(PageResult {
            page,
            text: report.text.clone(),
            outcome: PageOutcome::Decoded(report),
        })
    }

    /// Decode pages in order.
    pub fn decode_pages<S: AsRef<str>>(&self, pages: &[S]) -> Result<DecodedDocument> {
        let pages = pages
            .iter()
            .enumerate()
            .map(|(i, raw)| self.decode_page(i + 1, raw.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(DecodedDocument { pages })
    }

    /// Decode pages on the rayon thread pool, keeping input order.
    ///
    /// Pages are independent; the shared glyph table is only read.
    #[cfg(feature = "parallel")]
    pub fn decode_pages_parallel<S: AsRef<str> + Sync>(&self, pages: &[S]) -> Result<DecodedDocument> {
        use rayon::prelude::*;

        let pages = pages
            .par_iter()
            .enumerate()
            .map(|(i, raw)| self.decode_page(i + 1, raw.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(DecodedDocument { pages })
    }

    /// Decode a whole extractor dump, splitting it on form feeds.
    pub fn decode_document(&self, text: &str) -> Result<DecodedDocument> {
        self.decode_pages(&split_pages(text))
    }

    /// Missing-token audit over every glyph-encoded page.
    pub fn audit_pages<S: AsRef<str>>(&self, pages: &[S]) -> BTreeSet<String> {
        pages
            .iter()
            .map(|raw| {
                if self.strip_bidi {
                    strip_bidi_marks(raw.as_ref()).into_owned()
                } else {
                    raw.as_ref().to_string()
                }
            })
            .filter(|text| self.detector.is_glyph_encoded(text))
            .flat_map(|text| self.decoder.audit(&text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages() {
        assert_eq!(split_pages("a\u{000C}b\u{000C}"), vec!["a", "b"]);
        assert_eq!(split_pages("a\u{000C}\u{000C}b"), vec!["a", "", "b"]);
        assert_eq!(split_pages(""), vec![""]);
    }

    #[test]
    fn test_detector() {
        let detector = EncodingDetector::default();
        assert!(detector.is_glyph_encoded("/lamfinal/yehmedial"));
        assert!(!detector.is_glyph_encoded("lamfinal yehmedial"));
        assert!(!detector.is_glyph_encoded("and/or"));
        assert!(detector.is_glyph_encoded("x/arabicalef"));
    }

    #[test]
    fn test_passthrough_page() {
        let table = GlyphTable::build();
        let decoder = DocumentDecoder::new(&table);
        let page = decoder.decode_page(1, "Plain text, no tokens").unwrap();
        assert!(!page.was_decoded());
        assert_eq!(page.text, "Plain text, no tokens");
    }

    #[test]
    fn test_document_keeps_page_order() {
        let table = GlyphTable::build();
        let decoder = DocumentDecoder::new(&table);
        let doc = decoder
            .decode_pages(&["lam/noon/meem", "cover page", "arabicalef/lamwithalefisolated"])
            .unwrap();
        assert_eq!(doc.text(), "\u{0644}\u{0646}\u{0645}\ncover page\n\u{0627}\u{0644}\u{0627}");
        assert_eq!(doc.decoded_page_count(), 2);
        assert!(doc.unresolved().is_empty());
    }

    #[test]
    fn test_strict_rejects_page() {
        let table = GlyphTable::build();
        let config = DecoderConfig::new().with_strict(true);
        let decoder = DocumentDecoder::with_config(&table, &config);
        let err = decoder
            .decode_pages(&["lam/noon", "lam/zzzznotaglyph"])
            .unwrap_err();
        match err {
            Error::UnresolvedGlyphs { page, tokens } => {
                assert_eq!(page, 2);
                assert_eq!(tokens, vec!["zzzznotaglyph"]);
            },
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_lenient_reports_unresolved() {
        let table = GlyphTable::build();
        let decoder = DocumentDecoder::new(&table);
        let doc = decoder.decode_document("lam/zzzznotaglyph\u{000C}noon/meem").unwrap();
        assert_eq!(doc.text(), "\u{0644}?\n\u{0646}\u{0645}");
        assert_eq!(doc.pages[0].unresolved(), ["zzzznotaglyph".to_string()]);
        assert_eq!(doc.unresolved().len(), 1);
    }

    #[test]
    fn test_strip_bidi_before_detection() {
        let table = GlyphTable::build();
        let config = DecoderConfig::new().with_strip_bidi_marks(true);
        let decoder = DocumentDecoder::with_config(&table, &config);
        let page = decoder.decode_page(1, "la\u{200F}m/noon").unwrap();
        assert!(page.was_decoded());
        assert_eq!(page.text, "\u{0644}\u{0646}");
    }

    #[test]
    fn test_bidi_marks_kept_by_default() {
        let table = GlyphTable::build();
        let decoder = DocumentDecoder::new(&table);
        let page = decoder.decode_page(2, "plain \u{200F}text").unwrap();
        assert!(!page.was_decoded());
        assert_eq!(page.text, "plain \u{200F}text");
    }

    #[test]
    fn test_audit_pages_skips_plain_pages() {
        let table = GlyphTable::build();
        let decoder = DocumentDecoder::new(&table);
        let missing = decoder.audit_pages(&["lam/foobar", "and/or", "noon/edial/foobar"]);
        let missing: Vec<&str> = missing.iter().map(String::as_str).collect();
        assert_eq!(missing, vec!["edial", "foobar"]);
    }
}
