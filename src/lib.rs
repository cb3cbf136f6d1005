// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::unnecessary_map_or)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Arabic Glyph Decoder
//!
//! Recovers Arabic Unicode text from PDF pages whose fonts use glyph names
//! instead of a ToUnicode mapping. Such pages come out of text extractors as
//! `/`-framed glyph-name tokens:
//!
//! ```text
//! /lamfinal/yehmedial/kafinitial/wawfinal/laminitial/arabicalef
//! ```
//!
//! ## Core Features
//!
//! - **Glyph Symbol Table**: AGL-style Arabic letter names with positional
//!   aliases, Lam-Alef ligatures, hamza carriers, diacritics, Arabic-Indic
//!   digits and punctuation, in a pinned iteration order
//! - **Token Classification**: literal Arabic, digit runs, glyph names
//! - **Name Resolution**: exact, case-insensitive, AGL convention and fuzzy
//!   substring strategies in strict precedence
//! - **Diagnostics**: unresolved and fuzzy-matched tokens, missing-entry audit
//! - **Page Pipeline**: encoding detection, strict mode, ordered reassembly,
//!   optional parallel decoding (`parallel` feature)
//!
//! ## Quick Start
//!
//! ```ignore
//! use arabic_glyph_decoder::{GlyphTable, TokenStreamDecoder};
//!
//! let table = GlyphTable::build();
//! let decoder = TokenStreamDecoder::new(&table);
//!
//! let report = decoder.decode("arabicalef/lamwithalefisolated/tehmarbuta");
//! assert_eq!(report.text, "الاة");
//! assert!(report.is_clean());
//!
//! let missing = decoder.audit("lam/foobar/noon/foobar");
//! assert_eq!(missing.len(), 1);
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Glyph symbol table
pub mod glyphs;

// Token classification, resolution and stream decoding
pub mod decoder;

// Page-level pipeline
pub mod pipeline;

// Text cleanup and OCR transcript assembly
pub mod text;

// Audit and diagnostics output
pub mod diagnostics;

// Re-exports
pub use config::DecoderConfig;
pub use decoder::{DecodeReport, NameResolver, Strategy, TokenKind, TokenStreamDecoder};
pub use error::{Error, Result};
pub use glyphs::GlyphTable;
pub use pipeline::{DecodedDocument, DocumentDecoder, EncodingDetector};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
