//! The glyph symbol table.
//!
//! A [`GlyphTable`] maps canonical glyph names to the Unicode text they stand
//! for. It is built once, before any decoding, and never mutated afterwards:
//! no insertion, update, or removal method is public. Tables are `Send + Sync`
//! and can be shared by reference between concurrent decodes.
//!
//! Entries are kept in insertion order. The case-insensitive, convention and
//! fuzzy strategies scan the table and return the first hit, so a stable
//! order is what makes their results reproducible.

use super::arabic_glyph_list::{ARABIC_PREFIX, BASE_LETTERS, NAMED_GLYPHS};
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Positional suffixes registered for every base letter, in registration order.
const LETTER_FORMS: [(&str, bool); 3] = [("initial", false), ("medial", true), ("final", false)];

/// Immutable mapping from glyph names to Unicode strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    entries: IndexMap<String, String>,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::build()
    }
}

impl GlyphTable {
    /// Build the standard Arabic glyph table.
    ///
    /// Construction is deterministic and performs no I/O; calling it twice
    /// yields identical tables with identical iteration order.
    ///
    /// For each base letter the table registers, in order:
    /// `arabic<letter>`, `<letter>`, `<letter>initial`, `<letter>medial`
    /// (dual-joining letters only) and `<letter>final`. The named glyphs
    /// (alef variants, ligatures, diacritics, digits, punctuation) follow.
    pub fn build() -> Self {
        let mut entries = IndexMap::with_capacity(BASE_LETTERS.len() * 5 + NAMED_GLYPHS.len());

        for letter in BASE_LETTERS.iter() {
            let value = letter.ch.to_string();
            entries.insert(format!("{}{}", ARABIC_PREFIX, letter.name), value.clone());
            entries.insert(letter.name.to_string(), value.clone());

            for (suffix, needs_dual_joining) in LETTER_FORMS {
                if needs_dual_joining && !letter.joins_both_sides {
                    continue;
                }
                entries.insert(format!("{}{}", letter.name, suffix), value.clone());
            }
        }

        for (name, value) in NAMED_GLYPHS {
            entries.insert((*name).to_string(), (*value).to_string());
        }

        log::debug!("Built standard Arabic glyph table with {} entries", entries.len());
        Self { entries }
    }

    /// Build a table from caller-supplied entries.
    ///
    /// Entries keep the order in which they are given. A name supplied twice
    /// keeps its first position and takes the last value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGlyphEntry`] if a name is empty, is not ASCII,
    /// contains whitespace or the `/` framing character, or if a value is empty.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = IndexMap::new();
        for (name, value) in entries {
            let name = name.into();
            let value = value.into();
            validate_entry(&name, &value)?;
            map.insert(name, value);
        }
        Ok(Self { entries: map })
    }

    /// Standard table plus extra entries, e.g. names collected with the audit tool.
    ///
    /// Extra entries override standard values for names that already exist.
    pub fn with_extra_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::build();
        for (name, value) in entries {
            let name = name.into();
            let value = value.into();
            validate_entry(&name, &value)?;
            table.entries.insert(name, value);
        }
        Ok(table)
    }

    /// Exact-key lookup.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Exact-key lookup returning the stored key alongside its value.
    pub fn get_entry(&self, name: &str) -> Option<(&str, &str)> {
        self.entries
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether `name` is a key of the table.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over all `(name, value)` entries in insertion order.
    ///
    /// Every call starts a fresh iteration over the same order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All names that map to `value`, in table order.
    pub fn aliases_of(&self, value: &str) -> Vec<&str> {
        self.iter()
            .filter(|(_, v)| *v == value)
            .map(|(k, _)| k)
            .collect()
    }
}

fn validate_entry(name: &str, value: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("glyph name is empty")
    } else if !name.is_ascii() {
        Some("glyph name is not ASCII")
    } else if name.chars().any(|c| c.is_ascii_whitespace() || c == '/') {
        Some("glyph name contains whitespace or '/'")
    } else if value.is_empty() {
        Some("value is empty")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidGlyphEntry {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
