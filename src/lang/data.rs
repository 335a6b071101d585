use crate::lang::Lang;

use phf::{Map, phf_map};

// ---------------------------------------------------------------------------
//    Macro: generates constants, the ordered list and the lookup table
//    from a single table
// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($( $code:ident, $code_str:literal, $name:literal ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        /// Every supported language, in table order.
        pub static ALL_LANGS: &[Lang] = &[$($code),*];

        // Global lookup table (public)
        pub static LANG_TABLE: Map<&'static str, Lang> = phf_map! {
            $( $code_str => $code, )*
        };

        /// Case-insensitive lookup by ISO 639-3 code.
        pub fn from_code(code: &str) -> Option<Lang> {
            if code.len() != 3 {
                return None;
            }
            let lower = code.to_ascii_lowercase();
            LANG_TABLE.get(lower.as_str()).copied()
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Languages sharing a script come first, grouped by script; languages
//    decided by their script alone follow.
// ---------------------------------------------------------------------------
define_languages! {
    // Latin
    ENG, "eng", "English",
    FRA, "fra", "French",
    DEU, "deu", "German",
    SPA, "spa", "Spanish",
    ITA, "ita", "Italian",
    POR, "por", "Portuguese",
    NLD, "nld", "Dutch",
    EPO, "epo", "Esperanto",
    POL, "pol", "Polish",
    TUR, "tur", "Turkish",
    SWE, "swe", "Swedish",

    // Cyrillic
    RUS, "rus", "Russian",
    UKR, "ukr", "Ukrainian",
    BUL, "bul", "Bulgarian",

    // Devanagari
    HIN, "hin", "Hindi",
    MAR, "mar", "Marathi",
    NEP, "nep", "Nepali",

    // Hebrew
    HEB, "heb", "Hebrew",
    YDD, "ydd", "Yiddish",

    // Arabic
    ARB, "arb", "Arabic",
    PES, "pes", "Persian",
    URD, "urd", "Urdu",

    // Ethiopic
    AMH, "amh", "Amharic",
    TIR, "tir", "Tigrinya",

    // One language per script
    CMN, "cmn", "Mandarin",
    JPN, "jpn", "Japanese",
    KOR, "kor", "Korean",
    BEN, "ben", "Bengali",
    KAT, "kat", "Georgian",
    ELL, "ell", "Greek",
    KAN, "kan", "Kannada",
    TAM, "tam", "Tamil",
    THA, "tha", "Thai",
    GUJ, "guj", "Gujarati",
    PAN, "pan", "Punjabi",
    TEL, "tel", "Telugu",
    MAL, "mal", "Malayalam",
    ORI, "ori", "Oriya",
    MYA, "mya", "Burmese",
    SIN, "sin", "Sinhala",
    KHM, "khm", "Khmer",
}
