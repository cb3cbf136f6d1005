//! Error types for the glyph decoder.
//!
//! Decoding itself never fails: unknown glyph names become placeholders and
//! diagnostics. Errors only arise around it, when loading configuration,
//! building a custom glyph table, or when a strict pipeline rejects a page.

/// Result type alias for decoder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around glyph decoding.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration value the decoder cannot work with
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Glyph table entry rejected at construction
    #[error("Invalid glyph entry '{name}': {reason}")]
    InvalidGlyphEntry {
        /// Offending glyph name
        name: String,
        /// Why the entry was rejected
        reason: String,
    },

    /// Page rejected in strict mode because tokens stayed unresolved
    #[error("Page {page}: {} unresolved glyph token(s): {}", tokens.len(), tokens.join(", "))]
    UnresolvedGlyphs {
        /// 1-based page number
        page: usize,
        /// Distinct unresolved tokens, sorted
        tokens: Vec<String>,
    },
}
