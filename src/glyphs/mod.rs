//! Glyph symbol table for Arabic glyph-name decoding.
//!
//! Fonts that lack a ToUnicode CMap and use foundry-specific Arabic glyph
//! names make text extractors emit tokens such as `/lamfinal/arabicalef`
//! instead of Unicode. This module owns the name → Unicode table those tokens
//! are resolved against.

mod arabic_glyph_list;
pub mod table;

pub use table::GlyphTable;

pub(crate) use arabic_glyph_list::ARABIC_PREFIX;
