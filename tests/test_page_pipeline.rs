//! Page pipeline tests
//!
//! Detection, passthrough, strict rejection and page-order reassembly over
//! multi-page extractor output.

use arabic_glyph_decoder::pipeline::{split_pages, PageOutcome};
use arabic_glyph_decoder::{DecoderConfig, DocumentDecoder, Error, GlyphTable};

const ENCODED_PAGE: &str =
    "/lamfinal/yehmedial/kafinitial/wawfinal/laminitial/arabicalef\n /reh/aleffinal/tehmedial/khahinitial/arabicalef";

#[test]
fn test_decode_multi_page_dump() {
    let table = GlyphTable::build();
    let decoder = DocumentDecoder::new(&table);
    let dump = format!("Cover page\u{000C}{}\u{000C}", ENCODED_PAGE);

    let doc = decoder.decode_document(&dump).unwrap();
    assert_eq!(doc.pages.len(), 2);
    assert_eq!(doc.pages[0].outcome, PageOutcome::PassedThrough);
    let expected = "\u{0644}\u{064A}\u{0643}\u{0648}\u{0644}\u{0627}\u{0631}\u{0627}\u{062A}\u{062E}\u{0627}";
    assert_eq!(doc.pages[1].text, expected);
    assert_eq!(doc.text(), format!("Cover page\n{}", expected));
}

#[test]
fn test_page_numbers_are_one_based() {
    let table = GlyphTable::build();
    let decoder = DocumentDecoder::new(&table);
    let doc = decoder.decode_pages(&["a", "b", "c"]).unwrap();
    let numbers: Vec<usize> = doc.pages.iter().map(|p| p.page).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_custom_detection_markers() {
    let table = GlyphTable::build();
    let config = DecoderConfig::new().with_detection_markers(["kaf"]);
    let decoder = DocumentDecoder::with_config(&table, &config);

    let doc = decoder.decode_pages(&["lam/noon", "kafinitial/lam"]).unwrap();
    assert!(!doc.pages[0].was_decoded());
    assert!(doc.pages[1].was_decoded());
    assert_eq!(doc.pages[0].text, "lam/noon");
    assert_eq!(doc.pages[1].text, "كل");
}

#[test]
fn test_strict_mode_error_names_tokens() {
    let table = GlyphTable::build();
    let config = DecoderConfig::new().with_strict(true).with_fuzzy_matching(false);
    let decoder = DocumentDecoder::with_config(&table, &config);

    let err = decoder.decode_document("lam/edial/qqq/edial").unwrap_err();
    match &err {
        Error::UnresolvedGlyphs { page, tokens } => {
            assert_eq!(*page, 1);
            assert_eq!(tokens, &vec!["edial".to_string(), "qqq".to_string()]);
        },
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("edial, qqq"));
}

#[test]
fn test_extra_glyphs_fill_gaps() {
    let table = GlyphTable::with_extra_entries([("edial", "ي")]).unwrap();
    let config = DecoderConfig::new().with_strict(true);
    let decoder = DocumentDecoder::with_config(&table, &config);
    let doc = decoder.decode_document("edial/behinitial/lam").unwrap();
    assert_eq!(doc.text(), "يبل");
    assert!(doc.pages[0].unresolved().is_empty());
}

#[test]
fn test_split_pages_ignores_trailing_form_feed() {
    assert_eq!(split_pages("one\u{000C}two\u{000C}"), vec!["one", "two"]);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential() {
    let table = GlyphTable::build();
    let decoder = DocumentDecoder::new(&table);
    let pages: Vec<String> = (0..64)
        .map(|i| {
            if i % 3 == 0 {
                format!("plain page {}", i)
            } else {
                format!("{}/{}", ENCODED_PAGE, i % 10)
            }
        })
        .collect();

    let sequential = decoder.decode_pages(&pages).unwrap();
    let parallel = decoder.decode_pages_parallel(&pages).unwrap();
    assert_eq!(sequential, parallel);
}
