//! Offline language and script identification for short texts.
//!
//! Detection runs in two stages. The dominant Unicode script is found
//! first; scripts used by a single language decide the result on their own.
//! For scripts shared by several languages the input's trigram ranking is
//! compared against per-language reference rankings.
//!
//! ```
//! use langscope::{Script, detect, ENG};
//!
//! let info = detect("Where there is a will there is a way");
//! assert_eq!(info.lang(), Some(ENG));
//! assert_eq!(info.script(), Some(Script::Latin));
//! ```

pub mod detector;
pub mod info;
pub mod lang;
pub mod options;
pub mod profile;
pub mod scoring;
pub mod script;
pub mod trigram;
pub mod unicode;

pub use detector::{
    Detector, DetectorBuilder, detect, detect_lang, detect_lang_with_options, detect_script,
    detect_with_options, is_reliable,
};
pub use info::Info;
pub use lang::{
    AMH, ARB, BEN, BUL, CMN, DEU, ELL, ENG, EPO, FRA, GUJ, HEB, HIN, ITA, JPN, KAN, KAT, KHM, KOR,
    Lang, MAL, MAR, MYA, NEP, NLD, ORI, PAN, PES, POL, POR, ParseLangError, RUS, SIN, SPA, SWE,
    TAM, TEL, THA, TIR, TUR, UKR, URD, YDD,
};
pub use options::Options;
pub use profile::{BUILTIN_PROFILES, LangProfile, ProfileError, ProfileSource, StaticProfiles};
pub use scoring::RELIABLE_CONFIDENCE_THRESHOLD;
pub use script::{ParseScriptError, Script};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
