//! Codepoint-level lookups used by the script classifier and the trigram
//! extractor.
//!
//! Script membership reads the Unicode `Script` property from the ICU4X
//! compiled data, so it tracks the Unicode version of `icu_properties`.
//! Characters whose script is `Common` or `Inherited` (danda, tatweel, the
//! katakana prolonged sound mark, combining harakat…) belong to no family.

use icu_properties::{
    CodePointMapData,
    props::{GeneralCategory, GeneralCategoryGroup, Script as UcdScript},
};

/// Stop characters carry no script signal: whitespace, punctuation, symbols
/// and decimal digits.
#[inline(always)]
pub fn is_stop_char(c: char) -> bool {
    // Fast path: ASCII punctuation and symbols are exactly `is_ascii_punctuation`.
    if c.is_ascii() {
        return c.is_whitespace() || c.is_ascii_punctuation() || c.is_ascii_digit();
    }
    if c.is_whitespace() {
        return true;
    }
    let gc = CodePointMapData::<GeneralCategory>::new().get(c);
    gc == GeneralCategory::DecimalNumber
        || GeneralCategoryGroup::Punctuation.contains(gc)
        || GeneralCategoryGroup::Symbol.contains(gc)
}

/// Character as seen by the trigram extractor: stop characters collapse to a
/// space, letters are lowercased 1→1.
#[inline(always)]
pub fn trigram_char(c: char) -> char {
    if is_stop_char(c) {
        return ' ';
    }
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    // Unicode guarantees at least one char
    c.to_lowercase().next().unwrap_or(c)
}

/// ICU4C `UScriptCode` numbers of the scripts the classifier tracks, as
/// returned by [`script_code`].
pub mod sc {
    pub const COMMON: u16 = 0;
    pub const INHERITED: u16 = 1;
    pub const ARABIC: u16 = 2;
    pub const BENGALI: u16 = 4;
    pub const CYRILLIC: u16 = 8;
    pub const DEVANAGARI: u16 = 10;
    pub const ETHIOPIC: u16 = 11;
    pub const GEORGIAN: u16 = 12;
    pub const GREEK: u16 = 14;
    pub const GUJARATI: u16 = 15;
    pub const GURMUKHI: u16 = 16;
    pub const HAN: u16 = 17;
    pub const HANGUL: u16 = 18;
    pub const HEBREW: u16 = 19;
    pub const HIRAGANA: u16 = 20;
    pub const KANNADA: u16 = 21;
    pub const KATAKANA: u16 = 22;
    pub const KHMER: u16 = 23;
    pub const LATIN: u16 = 25;
    pub const MALAYALAM: u16 = 26;
    pub const MYANMAR: u16 = 28;
    pub const ORIYA: u16 = 31;
    pub const SINHALA: u16 = 33;
    pub const TAMIL: u16 = 35;
    pub const TELUGU: u16 = 36;
    pub const THAI: u16 = 38;
}

/// Unicode `Script` property value of `c`.
#[inline(always)]
pub fn ucd_script(c: char) -> UcdScript {
    CodePointMapData::<UcdScript>::new().get(c)
}

/// [`ucd_script`] as a plain number, see [`sc`].
#[inline(always)]
pub fn script_code(c: char) -> u16 {
    // ASCII letters are Latin, everything else in ASCII is Common.
    if c.is_ascii() {
        return if c.is_ascii_alphabetic() { sc::LATIN } else { sc::COMMON };
    }
    ucd_script(c).to_icu4c_value()
}
