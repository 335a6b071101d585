pub mod data;

use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

pub use data::*;

/// A language identified by its lowercase ISO 639-3 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialOrd for Lang {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Lang {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(other.code)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code `{0}`")]
pub struct ParseLangError(pub String);

impl FromStr for Lang {
    type Err = ParseLangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_code(s.trim()).ok_or_else(|| ParseLangError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CMN, ENG, JPN, UKR};

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!(from_code("eng"), Some(ENG));
        assert_eq!(from_code("ENG"), Some(ENG));
        assert_eq!(from_code("Ukr"), Some(UKR));
        assert_eq!(from_code("xyz"), None);
        assert_eq!(from_code(""), None);
    }

    #[test]
    fn parse_reports_the_rejected_input() {
        assert_eq!("jpn".parse::<Lang>(), Ok(JPN));
        assert_eq!(" cmn ".parse::<Lang>(), Ok(CMN));
        let err = "klingon".parse::<Lang>().unwrap_err();
        assert_eq!(err, ParseLangError("klingon".into()));
        assert_eq!(err.to_string(), "unknown language code `klingon`");
    }

    #[test]
    fn table_is_consistent() {
        assert_eq!(LANG_TABLE.len(), ALL_LANGS.len());
        for lang in ALL_LANGS {
            assert_eq!(LANG_TABLE.get(lang.code), Some(lang));
            assert_eq!(lang.code, lang.code.to_ascii_lowercase());
            assert_eq!(lang.code.len(), 3);
        }
    }

    #[test]
    fn display_and_ordering_use_the_code() {
        assert_eq!(ENG.to_string(), "eng");
        assert_eq!(ENG.name(), "English");
        assert!(CMN < ENG);
    }
}
