//! Arabic glyph names as emitted by non-Unicode-aware Arabic fonts.
//!
//! The names follow the Adobe Glyph List pattern `<base><positional-suffix>`,
//! extended with the ad-hoc names several Arabic font foundries use for
//! ligatures and diacritics. All positional forms resolve to the base
//! (isolated) character; contextual shaping is left to the renderer.
//!
//! The order of both tables below is significant: it becomes the iteration
//! order of [`GlyphTable`](super::GlyphTable), which the scan-based resolution
//! strategies rely on for tie-breaking.

/// One base Arabic letter and the positional aliases it is registered under.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaseLetter {
    /// Bare glyph name (`beh`, `lam`, ...)
    pub name: &'static str,
    /// Isolated-form character (U+0621..U+064A)
    pub ch: char,
    /// Dual-joining letters also get a `medial` alias
    pub joins_both_sides: bool,
}

const fn dual(name: &'static str, ch: char) -> BaseLetter {
    BaseLetter {
        name,
        ch,
        joins_both_sides: true,
    }
}

const fn right(name: &'static str, ch: char) -> BaseLetter {
    BaseLetter {
        name,
        ch,
        joins_both_sides: false,
    }
}

/// The 28 base letters of the Arabic alphabet.
///
/// Right-joining letters (alef, dal, thal, reh, zain, waw) never take a medial
/// shape, so they register only `initial` and `final` aliases.
pub(crate) const BASE_LETTERS: [BaseLetter; 28] = [
    right("alef", '\u{0627}'),
    dual("beh", '\u{0628}'),
    dual("teh", '\u{062A}'),
    dual("theh", '\u{062B}'),
    dual("jeem", '\u{062C}'),
    dual("hah", '\u{062D}'),
    dual("khah", '\u{062E}'),
    right("dal", '\u{062F}'),
    right("thal", '\u{0630}'),
    right("reh", '\u{0631}'),
    right("zain", '\u{0632}'),
    dual("seen", '\u{0633}'),
    dual("sheen", '\u{0634}'),
    dual("sad", '\u{0635}'),
    dual("dad", '\u{0636}'),
    dual("tah", '\u{0637}'),
    dual("zah", '\u{0638}'),
    dual("ain", '\u{0639}'),
    dual("ghain", '\u{063A}'),
    dual("feh", '\u{0641}'),
    dual("qaf", '\u{0642}'),
    dual("kaf", '\u{0643}'),
    dual("lam", '\u{0644}'),
    dual("meem", '\u{0645}'),
    dual("noon", '\u{0646}'),
    dual("heh", '\u{0647}'),
    right("waw", '\u{0648}'),
    dual("yeh", '\u{064A}'),
];

/// Prefix used by the AGL `arabic<name>` spelling of each letter.
pub(crate) const ARABIC_PREFIX: &str = "arabic";

/// Named glyphs outside the regular letter grid.
pub(crate) const NAMED_GLYPHS: &[(&str, &str)] = &[
    // Alef variants
    ("alefwithhamzaabove", "\u{0623}"),
    ("alefwithhamzabelow", "\u{0625}"),
    ("alefmaksura", "\u{0649}"),
    ("alefmaksurafinal", "\u{0649}"),
    // Lam-Alef ligatures
    ("lamwithalef", "\u{0644}\u{0627}"),
    ("lamwithaleffinal", "\u{0644}\u{0627}"),
    ("lamwithalefisolated", "\u{0644}\u{0627}"),
    ("lamwithalefhamzaabove", "\u{0644}\u{0623}"),
    ("lamwithalefhamzabelow", "\u{0644}\u{0625}"),
    ("lamwithalefhamzabelowisolated", "\u{0644}\u{0625}"),
    // Hamza carriers
    ("wawwithhamzaabove", "\u{0624}"),
    ("wawwithhamzaabovefinal", "\u{0624}"),
    ("yehwithhamzaabove", "\u{0626}"),
    ("yehwithhamzaaboveinitial", "\u{0626}"),
    ("yehwithhamzaabovemedial", "\u{0626}"),
    // Teh marbuta
    ("tehmarbuta", "\u{0629}"),
    ("tehmarbutafinal", "\u{0629}"),
    // Diacritics
    ("fatha", "\u{064E}"),
    ("damma", "\u{064F}"),
    ("kasra", "\u{0650}"),
    ("shadda", "\u{0651}"),
    ("shaddalow", "\u{0651}"),
    ("sukun", "\u{0652}"),
    ("fathatan", "\u{064B}"),
    ("dammatan", "\u{064C}"),
    ("kasratan", "\u{064D}"),
    // Arabic-Indic digits
    ("arabicindiczero", "\u{0660}"),
    ("arabicindicone", "\u{0661}"),
    ("arabicindictwo", "\u{0662}"),
    ("arabicindicthree", "\u{0663}"),
    ("arabicindicfour", "\u{0664}"),
    ("arabicindicfive", "\u{0665}"),
    ("arabicindicsix", "\u{0666}"),
    ("arabicindicseven", "\u{0667}"),
    ("arabicindiceight", "\u{0668}"),
    ("arabicindicnine", "\u{0669}"),
    ("zero", "\u{0660}"),
    ("one", "\u{0661}"),
    ("two", "\u{0662}"),
    ("three", "\u{0663}"),
    ("four", "\u{0664}"),
    ("five", "\u{0665}"),
    ("six", "\u{0666}"),
    ("seven", "\u{0667}"),
    ("eight", "\u{0668}"),
    ("nine", "\u{0669}"),
    // Arabic punctuation
    ("arabiccomma", "\u{060C}"),
    ("arabicsemicolon", "\u{061B}"),
    ("arabicquestionmark", "\u{061F}"),
    ("comma", "\u{060C}"),
    ("semicolon", "\u{061B}"),
    ("questionmark", "\u{061F}"),
    // Latin punctuation seen in mixed-script documents
    ("period", "."),
    ("hyphen", "-"),
    ("space", " "),
    ("parenleft", "("),
    ("parenright", ")"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_letters_are_arabic_block() {
        for letter in BASE_LETTERS.iter() {
            let cp = letter.ch as u32;
            assert!((0x0621..=0x064A).contains(&cp), "{} out of range", letter.name);
        }
    }

    #[test]
    fn test_right_joining_letters() {
        let right_joining: Vec<&str> = BASE_LETTERS
            .iter()
            .filter(|l| !l.joins_both_sides)
            .map(|l| l.name)
            .collect();
        assert_eq!(right_joining, vec!["alef", "dal", "thal", "reh", "zain", "waw"]);
    }

    #[test]
    fn test_named_glyphs_have_values() {
        for (name, value) in NAMED_GLYPHS {
            assert!(!value.is_empty(), "{} has an empty value", name);
            assert!(value.chars().count() <= 2, "{} is longer than a ligature", name);
        }
    }
}
