pub mod builtin;
mod trigrams;

pub use builtin::BUILTIN_PROFILES;

use crate::{lang::Lang, script::Script};
use std::collections::HashSet;
use thiserror::Error;

/// Upper bound on profile length; the distance cap assumes it.
pub const MAX_PROFILE_LEN: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("profile for `{0}` has no trigrams")]
    Empty(Lang),
    #[error("profile for `{lang}` has {len} trigrams (max {max})", max = MAX_PROFILE_LEN)]
    TooLong { lang: Lang, len: usize },
    #[error("profile for `{lang}`: entry {index} ({trigram:?}) is not 3 characters")]
    Malformed {
        lang: Lang,
        index: usize,
        trigram: String,
    },
    #[error("profile for `{lang}` lists {trigram:?} twice")]
    Duplicate { lang: Lang, trigram: String },
    #[error("script `{0}` identifies its language on its own and takes no profiles")]
    SingleLanguageScript(Script),
}

/// Reference trigrams of one language, most frequent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LangProfile {
    lang: Lang,
    trigrams: &'static [&'static str],
}

impl LangProfile {
    pub fn new(lang: Lang, trigrams: &'static [&'static str]) -> Result<Self, ProfileError> {
        if trigrams.is_empty() {
            return Err(ProfileError::Empty(lang));
        }
        if trigrams.len() > MAX_PROFILE_LEN {
            return Err(ProfileError::TooLong {
                lang,
                len: trigrams.len(),
            });
        }
        let mut seen = HashSet::with_capacity(trigrams.len());
        for (index, &trigram) in trigrams.iter().enumerate() {
            if trigram.chars().count() != 3 {
                return Err(ProfileError::Malformed {
                    lang,
                    index,
                    trigram: trigram.to_owned(),
                });
            }
            if !seen.insert(trigram) {
                return Err(ProfileError::Duplicate {
                    lang,
                    trigram: trigram.to_owned(),
                });
            }
        }
        Ok(Self { lang, trigrams })
    }

    /// Unchecked constructor for tables known to be well-formed.
    #[inline(always)]
    pub const fn from_static(lang: Lang, trigrams: &'static [&'static str]) -> Self {
        Self { lang, trigrams }
    }

    #[inline(always)]
    pub const fn lang(&self) -> Lang {
        self.lang
    }

    #[inline(always)]
    pub const fn trigrams(&self) -> &'static [&'static str] {
        self.trigrams
    }
}

/// Reference data consumed by the detector.
///
/// Returns the candidate profiles of a script, in preference order. Scripts
/// with no configured languages yield an empty slice.
pub trait ProfileSource: Send + Sync {
    fn profiles(&self, script: Script) -> &[LangProfile];
}

impl<T: ProfileSource + ?Sized> ProfileSource for &T {
    #[inline]
    fn profiles(&self, script: Script) -> &[LangProfile] {
        (**self).profiles(script)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptGroup {
    pub script: Script,
    pub profiles: &'static [LangProfile],
}

/// A fixed table of script groups living for the whole program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticProfiles {
    groups: &'static [ScriptGroup],
}

impl StaticProfiles {
    pub const fn new(groups: &'static [ScriptGroup]) -> Self {
        Self { groups }
    }

    /// Like [`StaticProfiles::new`], re-validating every profile and
    /// rejecting groups for single-language scripts.
    pub fn try_new(groups: &'static [ScriptGroup]) -> Result<Self, ProfileError> {
        for group in groups {
            if !group.script.is_multilingual() {
                return Err(ProfileError::SingleLanguageScript(group.script));
            }
            for profile in group.profiles {
                LangProfile::new(profile.lang, profile.trigrams)?;
            }
        }
        Ok(Self { groups })
    }

    pub const fn groups(&self) -> &'static [ScriptGroup] {
        self.groups
    }

    /// Every language reachable through trigram scoring.
    pub fn langs(&self) -> impl Iterator<Item = Lang> + '_ {
        self.groups
            .iter()
            .flat_map(|g| g.profiles.iter().map(LangProfile::lang))
    }
}

impl Default for StaticProfiles {
    fn default() -> Self {
        BUILTIN_PROFILES
    }
}

impl ProfileSource for StaticProfiles {
    fn profiles(&self, script: Script) -> &[LangProfile] {
        self.groups
            .iter()
            .find(|g| g.script == script)
            .map(|g| g.profiles)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ENG, FRA, JPN};

    #[test]
    fn new_validates_entries() {
        assert_eq!(LangProfile::new(ENG, &[]), Err(ProfileError::Empty(ENG)));
        assert_eq!(
            LangProfile::new(ENG, &["the", "he", "ing"]),
            Err(ProfileError::Malformed {
                lang: ENG,
                index: 1,
                trigram: "he".into()
            })
        );
        assert_eq!(
            LangProfile::new(FRA, &[" de", "de ", " de"]),
            Err(ProfileError::Duplicate {
                lang: FRA,
                trigram: " de".into()
            })
        );
        // length counts chars, not bytes
        let ok = LangProfile::new(FRA, &["été", " à ", "ça "]).unwrap();
        assert_eq!(ok.lang(), FRA);
        assert_eq!(ok.trigrams().len(), 3);
    }

    #[test]
    fn new_rejects_oversized_profiles() {
        let many: Vec<&'static str> = (0..=MAX_PROFILE_LEN)
            .map(|i| &*Box::leak(format!("{:03}", i).into_boxed_str()))
            .collect();
        let many: &'static [&'static str] = Box::leak(many.into_boxed_slice());
        assert_eq!(
            LangProfile::new(ENG, many),
            Err(ProfileError::TooLong {
                lang: ENG,
                len: MAX_PROFILE_LEN + 1
            })
        );
        assert!(LangProfile::new(ENG, &many[..MAX_PROFILE_LEN]).is_ok());
    }

    #[test]
    fn builtin_profiles_are_well_formed() {
        assert_eq!(
            StaticProfiles::try_new(BUILTIN_PROFILES.groups()),
            Ok(BUILTIN_PROFILES)
        );
        for group in BUILTIN_PROFILES.groups() {
            assert!(group.profiles.len() >= 2, "{}", group.script);
            for profile in group.profiles {
                assert_eq!(profile.trigrams().len(), MAX_PROFILE_LEN, "{}", profile.lang());
            }
        }
    }

    #[test]
    fn builtin_coverage() {
        let langs: HashSet<Lang> = BUILTIN_PROFILES.langs().collect();
        assert_eq!(langs.len(), 24);
        assert_eq!(BUILTIN_PROFILES.groups().len(), 6);
    }

    #[test]
    fn unknown_script_has_no_profiles() {
        assert!(BUILTIN_PROFILES.profiles(Script::Han).is_empty());
        assert_eq!(BUILTIN_PROFILES.profiles(Script::Latin)[0].lang(), ENG);
        let by_ref: &dyn ProfileSource = &BUILTIN_PROFILES;
        assert_eq!(by_ref.profiles(Script::Cyrillic).len(), 3);
    }

    #[test]
    fn single_language_script_groups_are_rejected() {
        const JP: &[LangProfile] = &[LangProfile::from_static(JPN, &["あああ"])];
        static GROUPS: &[ScriptGroup] = &[ScriptGroup {
            script: Script::HiraganaKatakana,
            profiles: JP,
        }];
        assert_eq!(
            StaticProfiles::try_new(GROUPS),
            Err(ProfileError::SingleLanguageScript(Script::HiraganaKatakana))
        );
    }
}
