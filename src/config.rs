//! Configuration for glyph token decoding.
//!
//! Defaults reproduce the historical decoder exactly. A JSON file may
//! override any subset of fields:
//!
//! ```json
//! { "fuzzy_matching": false, "strict": true }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Glyph names whose presence marks a page as glyph-encoded.
pub const DEFAULT_DETECTION_MARKERS: [&str; 4] = ["arabicalef", "lam", "noon", "meem"];

/// Decoder and page pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Emitted for tokens no strategy can resolve.
    pub placeholder: char,

    /// Enable the fuzzy substring tier.
    pub fuzzy_matching: bool,

    /// Render a lone ASCII digit as an Arabic-Indic digit.
    pub map_single_digits: bool,

    /// Reject a page that still has unresolved tokens after decoding.
    pub strict: bool,

    /// A page is decoded only if it contains `/` and one of these substrings.
    pub detection_markers: Vec<String>,

    /// Remove LRM/RLM marks from page text before detection.
    pub strip_bidi_marks: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderConfig {
    /// Create a configuration with the historical defaults.
    pub fn new() -> Self {
        Self {
            placeholder: '?',
            fuzzy_matching: true,
            map_single_digits: true,
            strict: false,
            detection_markers: DEFAULT_DETECTION_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            strip_bidi_marks: false,
        }
    }

    /// Set the placeholder for unresolved tokens.
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Enable or disable fuzzy matching.
    pub fn with_fuzzy_matching(mut self, enable: bool) -> Self {
        self.fuzzy_matching = enable;
        self
    }

    /// Enable or disable single-digit Arabic-Indic rendering.
    pub fn with_single_digit_mapping(mut self, enable: bool) -> Self {
        self.map_single_digits = enable;
        self
    }

    /// Enable or disable strict page rejection.
    pub fn with_strict(mut self, enable: bool) -> Self {
        self.strict = enable;
        self
    }

    /// Replace the detection markers.
    pub fn with_detection_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.detection_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable bidi mark stripping.
    pub fn with_strip_bidi_marks(mut self, enable: bool) -> Self {
        self.strip_bidi_marks = enable;
        self
    }

    /// Check the configuration for values the decoder cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.placeholder == '/' {
            return Err(Error::InvalidConfig(
                "placeholder cannot be the '/' token separator".to_string(),
            ));
        }
        if self.detection_markers.is_empty() {
            return Err(Error::InvalidConfig("detection_markers is empty".to_string()));
        }
        if let Some(blank) = self.detection_markers.iter().find(|m| m.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!(
                "detection marker {:?} is blank",
                blank
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("Loaded decoder configuration from {}", path.display());
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DecoderConfig::default();
        assert_eq!(config.placeholder, '?');
        assert!(config.fuzzy_matching);
        assert!(config.map_single_digits);
        assert!(!config.strict);
        assert_eq!(config.detection_markers, vec!["arabicalef", "lam", "noon", "meem"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = DecoderConfig::new()
            .with_placeholder('\u{FFFD}')
            .with_fuzzy_matching(false)
            .with_single_digit_mapping(false)
            .with_strict(true)
            .with_detection_markers(["beh"])
            .with_strip_bidi_marks(true);
        assert_eq!(config.placeholder, '\u{FFFD}');
        assert!(!config.fuzzy_matching);
        assert!(!config.map_single_digits);
        assert!(config.strict);
        assert_eq!(config.detection_markers, vec!["beh"]);
        assert!(config.strip_bidi_marks);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DecoderConfig::from_json_str(r#"{ "fuzzy_matching": false }"#).unwrap();
        assert!(!config.fuzzy_matching);
        assert_eq!(config.placeholder, '?');
        assert_eq!(config.detection_markers.len(), 4);
    }

    #[test]
    fn test_invalid_json() {
        let err = DecoderConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_validate_rejects_separator_placeholder() {
        let err = DecoderConfig::new().with_placeholder('/').validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_empty_markers() {
        let empty: [&str; 0] = [];
        assert!(DecoderConfig::new().with_detection_markers(empty).validate().is_err());
        assert!(DecoderConfig::new().with_detection_markers([" "]).validate().is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "strict": true, "placeholder": "*" }}"#).unwrap();
        let config = DecoderConfig::from_json_file(file.path()).unwrap();
        assert!(config.strict);
        assert_eq!(config.placeholder, '*');
    }

    #[test]
    fn test_from_missing_file() {
        let err = DecoderConfig::from_json_file("/nonexistent/decoder.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
