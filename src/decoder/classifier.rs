//! Token classification.
//!
//! Every trimmed token falls into exactly one [`TokenKind`], decided once and
//! matched exhaustively by the stream decoder.

use phf::phf_map;
use std::borrow::Cow;

/// ASCII digit → Arabic-Indic digit (U+0660..U+0669).
static ARABIC_INDIC_DIGITS: phf::Map<char, char> = phf_map! {
    '0' => '\u{0660}',
    '1' => '\u{0661}',
    '2' => '\u{0662}',
    '3' => '\u{0663}',
    '4' => '\u{0664}',
    '5' => '\u{0665}',
    '6' => '\u{0666}',
    '7' => '\u{0667}',
    '8' => '\u{0668}',
    '9' => '\u{0669}',
};

/// Classification of one trimmed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Zero-length token; contributes nothing
    Empty,
    /// Contains Arabic text already; passed through verbatim
    Literal(&'a str),
    /// One or more ASCII decimal digits
    Digit(&'a str),
    /// Anything else; needs a table lookup
    SymbolicName(&'a str),
}

impl<'a> TokenKind<'a> {
    /// Classify a token whose surrounding whitespace has already been removed.
    ///
    /// Precedence is Empty, then Literal, then Digit, then SymbolicName: a
    /// token mixing Arabic letters with glyph names (`ذوalefwithhamzaabove`)
    /// is a literal, not a name.
    pub fn classify(token: &'a str) -> Self {
        if token.is_empty() {
            TokenKind::Empty
        } else if contains_arabic(token) {
            TokenKind::Literal(token)
        } else if token.bytes().all(|b| b.is_ascii_digit()) {
            TokenKind::Digit(token)
        } else {
            TokenKind::SymbolicName(token)
        }
    }

    /// Short label used in logs and statistics.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Empty => "empty",
            TokenKind::Literal(_) => "literal",
            TokenKind::Digit(_) => "digit",
            TokenKind::SymbolicName(_) => "name",
        }
    }
}

/// Whether `c` lies in the Arabic block or Arabic Presentation Forms-B.
#[inline]
pub fn is_arabic_char(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}' | '\u{FE70}'..='\u{FEFF}')
}

/// Whether any character of `text` is Arabic.
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_char)
}

/// Render an ASCII digit token.
///
/// A single digit becomes its Arabic-Indic counterpart when `map_single` is
/// set. Multi-digit runs are assumed to be formatted already and are returned
/// unchanged.
pub fn render_digits(digits: &str, map_single: bool) -> Cow<'_, str> {
    let mut chars = digits.chars();
    match (chars.next(), chars.next()) {
        (Some(d), None) if map_single => match ARABIC_INDIC_DIGITS.get(&d) {
            Some(mapped) => Cow::Owned(mapped.to_string()),
            None => Cow::Borrowed(digits),
        },
        _ => Cow::Borrowed(digits),
    }
}
