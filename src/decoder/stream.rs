//! Token stream decoding.
//!
//! Input text is framed by `/`: each field between separators is one token,
//! trimmed of whitespace, classified, and resolved. Results are concatenated
//! in input order without reinserting the separator.
//!
//! ```ignore
//! use arabic_glyph_decoder::{GlyphTable, TokenStreamDecoder};
//!
//! let table = GlyphTable::build();
//! let decoder = TokenStreamDecoder::new(&table);
//! assert_eq!(decoder.decode_to_string("lam/noon/meem"), "لنم");
//! ```

use super::classifier::{render_digits, TokenKind};
use super::resolver::{NameResolver, Strategy};
use crate::config::DecoderConfig;
use crate::glyphs::GlyphTable;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Framing character between glyph tokens.
pub const TOKEN_SEPARATOR: char = '/';

/// Split `input` on the separator and trim every field.
///
/// Empty fields are kept; they classify as [`TokenKind::Empty`].
pub fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input.split(TOKEN_SEPARATOR).map(str::trim)
}

/// A token resolved by the fuzzy tier, reported for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuzzyMatch {
    /// Token as it appeared in the input
    pub token: String,
    /// Table key it was matched to
    pub key: String,
}

/// Per-decode counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// Non-empty tokens seen
    pub tokens: usize,
    /// Tokens passed through as Arabic literals
    pub literals: usize,
    /// Digit runs
    pub digits: usize,
    /// Symbolic names resolved, by strategy
    pub resolved: BTreeMap<Strategy, usize>,
    /// Symbolic names no strategy could resolve
    pub unresolved: usize,
}

/// Result of decoding one input string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    /// Decoded text, with placeholders for unresolved tokens
    pub text: String,
    /// Unresolved tokens in order of occurrence (may repeat)
    pub unresolved: Vec<String>,
    /// Tokens that only the fuzzy tier could resolve
    pub fuzzy_matches: Vec<FuzzyMatch>,
    /// Counters
    pub stats: DecodeStats,
}

impl DecodeReport {
    /// Whether every symbolic token was resolved.
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Distinct unresolved tokens, sorted.
    pub fn unresolved_set(&self) -> BTreeSet<&str> {
        self.unresolved.iter().map(String::as_str).collect()
    }
}

/// Decodes `/`-framed glyph token streams into Arabic text.
#[derive(Debug, Clone)]
pub struct TokenStreamDecoder<'t> {
    resolver: NameResolver<'t>,
    placeholder: char,
    map_single_digits: bool,
}

impl<'t> TokenStreamDecoder<'t> {
    /// Create a decoder with the historical defaults.
    pub fn new(table: &'t GlyphTable) -> Self {
        Self::with_config(table, &DecoderConfig::default())
    }

    /// Create a decoder from a configuration.
    pub fn with_config(table: &'t GlyphTable, config: &DecoderConfig) -> Self {
        Self {
            resolver: NameResolver::new(table).with_fuzzy(config.fuzzy_matching),
            placeholder: config.placeholder,
            map_single_digits: config.map_single_digits,
        }
    }

    /// The name resolver used for symbolic tokens.
    pub fn resolver(&self) -> &NameResolver<'t> {
        &self.resolver
    }

    /// The glyph table tokens are resolved against.
    pub fn table(&self) -> &'t GlyphTable {
        self.resolver.table()
    }

    /// Decode `input`, collecting diagnostics.
    ///
    /// Never fails: unresolved tokens become the placeholder and are listed in
    /// [`DecodeReport::unresolved`].
    pub fn decode(&self, input: &str) -> DecodeReport {
        let mut report = DecodeReport {
            text: String::with_capacity(input.len()),
            ..Default::default()
        };

        for token in tokens(input) {
            let kind = TokenKind::classify(token);
            log::trace!("token {:?} -> {}", token, kind.label());

            match kind {
                TokenKind::Empty => continue,
                TokenKind::Literal(text) => {
                    report.stats.literals += 1;
                    report.text.push_str(text);
                },
                TokenKind::Digit(digits) => {
                    report.stats.digits += 1;
                    report
                        .text
                        .push_str(&render_digits(digits, self.map_single_digits));
                },
                TokenKind::SymbolicName(name) => match self.resolver.resolve(name) {
                    Some(resolution) => {
                        *report.stats.resolved.entry(resolution.strategy).or_insert(0) += 1;
                        if resolution.strategy == Strategy::Fuzzy {
                            log::warn!(
                                "Glyph token '{}' matched '{}' only by substring; verify the output",
                                name,
                                resolution.key
                            );
                            report.fuzzy_matches.push(FuzzyMatch {
                                token: name.to_string(),
                                key: resolution.key.to_string(),
                            });
                        } else if resolution.strategy != Strategy::Exact {
                            log::debug!(
                                "Glyph token '{}' resolved to '{}' ({})",
                                name,
                                resolution.key,
                                resolution.strategy
                            );
                        }
                        report.text.push_str(resolution.value);
                    },
                    None => {
                        log::warn!("Unknown glyph token: '{}' - please add it to the glyph table", name);
                        report.stats.unresolved += 1;
                        report.unresolved.push(name.to_string());
                        report.text.push(self.placeholder);
                    },
                },
            }
            report.stats.tokens += 1;
        }

        report
    }

    /// Decode `input` and return only the text.
    pub fn decode_to_string(&self, input: &str) -> String {
        self.decode(input).text
    }

    /// Tokens that are missing from the table under exact matching.
    ///
    /// Reports every distinct token that is non-empty, not an ASCII digit
    /// run, and not an exact key, before the fallback strategies get a chance
    /// to mask the gap. Literal Arabic fields are reported too; they show
    /// where the extractor mixed Unicode into the token stream.
    pub fn audit(&self, input: &str) -> BTreeSet<String> {
        tokens(input)
            .filter(|token| !matches!(TokenKind::classify(token), TokenKind::Empty | TokenKind::Digit(_)))
            .filter(|token| !self.table().contains(token))
            .map(str::to_string)
            .collect()
    }
}
