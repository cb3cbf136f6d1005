//! Diagnostics for glyph table maintenance.
//!
//! The audit output is meant to be pasted into the glyph table source and
//! filled in by hand, one `'token': '',` line per missing name.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Characters kept by [`preview`] by default.
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// Format one missing token as a table entry stub.
pub fn missing_entry_line(token: &str) -> String {
    format!("'{}': '',", token)
}

/// Render missing tokens under a header, one indented stub per line.
///
/// Returns an empty string when nothing is missing.
pub fn render_missing_entries<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for token in tokens {
        if out.is_empty() {
            out.push_str("Missing tokens found:\n");
        }
        out.push_str("  ");
        out.push_str(&missing_entry_line(token));
        out.push('\n');
    }
    out
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Machine-readable audit result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// RFC 3339 timestamp of the audit
    pub generated_at: String,
    /// Where the audited text came from
    pub source: String,
    /// Distinct missing tokens, sorted
    pub missing: Vec<String>,
}

impl AuditReport {
    /// Build a report stamped with the current time.
    pub fn new(source: impl Into<String>, missing: &BTreeSet<String>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            source: source.into(),
            missing: missing.iter().cloned().collect(),
        }
    }

    /// The stub lines for every missing token.
    pub fn to_entry_lines(&self) -> String {
        render_missing_entries(self.missing.iter().map(String::as_str))
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
