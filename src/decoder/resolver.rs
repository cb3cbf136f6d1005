//! Glyph name resolution.
//!
//! A symbolic token is resolved by four strategies tried in a fixed order;
//! the first one that succeeds wins and later ones are not attempted:
//!
//! 1. [`Strategy::Exact`] - the token is a key of the table.
//! 2. [`Strategy::CaseInsensitive`] - a key equals the token ignoring case.
//! 3. [`Strategy::Convention`] - the token is `<base><suffix>` with a
//!    positional suffix, and `<base>` can be found in the table. The base may
//!    be empty, so a bare `medial` takes the first medial key.
//! 4. [`Strategy::Fuzzy`] - the token and a key contain one another.
//!
//! The scanning strategies walk the table in its insertion order and stop at
//! the first hit, so results only depend on the table contents.
//!
//! The fuzzy tier can pick the wrong glyph: `tehmarbutax` contains `teh` and
//! resolves to Teh, not Teh Marbuta. It is kept for compatibility with
//! existing outputs but can be switched off with [`NameResolver::with_fuzzy`].

use crate::glyphs::{GlyphTable, ARABIC_PREFIX};
use serde::Serialize;
use std::fmt;

/// A resolution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Exact key lookup
    Exact,
    /// Lower-cased comparison against every key
    CaseInsensitive,
    /// AGL `<base><positional-suffix>` parsing
    Convention,
    /// Substring match in either direction
    Fuzzy,
}

impl Strategy {
    /// All strategies in precedence order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Exact,
        Strategy::CaseInsensitive,
        Strategy::Convention,
        Strategy::Fuzzy,
    ];

    /// Stable lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::CaseInsensitive => "case_insensitive",
            Strategy::Convention => "convention",
            Strategy::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Positional suffix of an AGL-style glyph name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionalSuffix {
    /// `...initial`
    Initial,
    /// `...medial`
    Medial,
    /// `...final`
    Final,
    /// `...isolated`; imposes no suffix on the matching key
    Isolated,
}

impl PositionalSuffix {
    /// Suffixes in the order they are tried.
    pub const ALL: [PositionalSuffix; 4] = [
        PositionalSuffix::Initial,
        PositionalSuffix::Medial,
        PositionalSuffix::Final,
        PositionalSuffix::Isolated,
    ];

    /// The suffix as it appears at the end of a glyph name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionalSuffix::Initial => "initial",
            PositionalSuffix::Medial => "medial",
            PositionalSuffix::Final => "final",
            PositionalSuffix::Isolated => "isolated",
        }
    }

    /// The suffix a matching key must end with, if any.
    ///
    /// Isolated forms are stored under the bare name, so `isolated` places
    /// no constraint on the key.
    pub fn key_suffix(&self) -> Option<&'static str> {
        match self {
            PositionalSuffix::Isolated => None,
            other => Some(other.as_str()),
        }
    }

    /// Split `name` into its base and positional suffix.
    ///
    /// Matching is case-sensitive. Returns `None` when the name carries no
    /// known suffix. A bare suffix such as `medial` splits into an empty base,
    /// which every key starts with.
    pub fn split(name: &str) -> Option<(&str, PositionalSuffix)> {
        Self::ALL
            .iter()
            .find_map(|suffix| name.strip_suffix(suffix.as_str()).map(|base| (base, *suffix)))
    }
}

/// A successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'t> {
    /// Table key that matched
    pub key: &'t str,
    /// Unicode text for the key
    pub value: &'t str,
    /// Strategy that produced the match
    pub strategy: Strategy,
}

/// Resolves symbolic glyph names against a [`GlyphTable`].
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'t> {
    table: &'t GlyphTable,
    fuzzy: bool,
}

impl<'t> NameResolver<'t> {
    /// Create a resolver with all four strategies enabled.
    pub fn new(table: &'t GlyphTable) -> Self {
        Self { table, fuzzy: true }
    }

    /// Enable or disable the fuzzy substring tier.
    pub fn with_fuzzy(mut self, enable: bool) -> Self {
        self.fuzzy = enable;
        self
    }

    /// Whether the fuzzy tier is enabled.
    pub fn fuzzy_enabled(&self) -> bool {
        self.fuzzy
    }

    /// The table this resolver reads from.
    pub fn table(&self) -> &'t GlyphTable {
        self.table
    }

    /// Resolve `name` with the enabled strategies in precedence order.
    pub fn resolve(&self, name: &str) -> Option<Resolution<'t>> {
        Strategy::ALL
            .iter()
            .filter(|s| self.fuzzy || **s != Strategy::Fuzzy)
            .find_map(|s| self.resolve_with(*s, name))
    }

    /// Run a single strategy.
    pub fn resolve_with(&self, strategy: Strategy, name: &str) -> Option<Resolution<'t>> {
        let found = match strategy {
            Strategy::Exact => self.exact_match(name),
            Strategy::CaseInsensitive => self.case_insensitive_match(name),
            Strategy::Convention => self.convention_match(name),
            Strategy::Fuzzy => self.fuzzy_match(name),
        };

        found.map(|(key, value)| Resolution {
            key,
            value,
            strategy,
        })
    }

    /// Exact key lookup.
    pub fn exact_match(&self, name: &str) -> Option<(&'t str, &'t str)> {
        self.table.get_entry(name)
    }

    /// First key equal to `name` after lower-casing both.
    pub fn case_insensitive_match(&self, name: &str) -> Option<(&'t str, &'t str)> {
        let name_lower = name.to_lowercase();
        self.table
            .iter()
            .find(|(key, _)| key.to_lowercase() == name_lower)
    }

    /// AGL convention: strip the positional suffix and look up the base.
    ///
    /// The first key (in table order) that starts with the base and ends
    /// with the suffix wins. Failing that, `arabic<base>` is tried as an
    /// exact key. A suffix whose base cannot be found makes the strategy
    /// fail silently.
    pub fn convention_match(&self, name: &str) -> Option<(&'t str, &'t str)> {
        let (base, suffix) = PositionalSuffix::split(name)?;

        let by_prefix = self.table.iter().find(|(key, _)| {
            key.starts_with(base) && suffix.key_suffix().map_or(true, |s| key.ends_with(s))
        });
        if by_prefix.is_some() {
            return by_prefix;
        }

        let prefixed = format!("{}{}", ARABIC_PREFIX, base);
        self.table.get_entry(&prefixed)
    }

    /// First key that contains, or is contained in, `name` (case-insensitive).
    pub fn fuzzy_match(&self, name: &str) -> Option<(&'t str, &'t str)> {
        let name_lower = name.to_lowercase();
        self.table.iter().find(|(key, _)| {
            let key_lower = key.to_lowercase();
            key_lower.contains(&name_lower) || name_lower.contains(&key_lower)
        })
    }
}
