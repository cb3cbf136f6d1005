//! Glyph token decoding.
//!
//! Turns text such as `/lamfinal/yehmedial/kafinitial/arabicalef` into Arabic
//! Unicode. The pieces are layered leaf-first:
//!
//! - [`classifier`]: decides what kind of token a field is
//! - [`resolver`]: maps a symbolic glyph name to Unicode through four
//!   ordered strategies
//! - [`stream`]: splits the input, drives the other two, and collects
//!   diagnostics

pub mod classifier;
pub mod resolver;
pub mod stream;

pub use classifier::{contains_arabic, is_arabic_char, TokenKind};
pub use resolver::{NameResolver, PositionalSuffix, Resolution, Strategy};
pub use stream::{tokens, DecodeReport, DecodeStats, FuzzyMatch, TokenStreamDecoder, TOKEN_SEPARATOR};
