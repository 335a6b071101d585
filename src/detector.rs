//! Orchestration: script first, then either the script's own language or
//! trigram scoring over the script's candidates.

use crate::{
    info::Info,
    lang::Lang,
    options::Options,
    profile::{BUILTIN_PROFILES, LangProfile, ProfileSource, StaticProfiles},
    scoring::{self, LangDistance},
    script::{self, Script},
    trigram::TrigramRankMap,
};
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::LazyLock};
use tracing::{debug, trace};

static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// Runs the full pipeline against `source`.
pub fn detect_in<S: ProfileSource + ?Sized>(source: &S, text: &str, options: &Options) -> Info {
    let Some(script) = script::detect_script(text) else {
        debug!("no script recognized");
        return Info::none();
    };
    trace!(%script, "script detected");

    if let Some(lang) = script.single_lang() {
        return Info::new(lang, script, 1.0);
    }

    let candidates: SmallVec<[&LangProfile; 16]> = source
        .profiles(script)
        .iter()
        .filter(|p| options.permits(p.lang()))
        .collect();
    trace!(%script, candidates = candidates.len(), "candidates after filtering");

    match candidates.as_slice() {
        [] => {
            debug!(%script, "no candidate language left");
            return Info::unknown_lang(script);
        }
        [only] => return Info::new(only.lang(), script, 1.0),
        _ => {}
    }

    let ranks = TrigramRankMap::from_text(text);
    let mut distances: SmallVec<[LangDistance; 16]> = candidates
        .iter()
        .map(|p| LangDistance {
            lang: p.lang(),
            distance: scoring::distance(p, &ranks),
        })
        .collect();
    // stable: equal distances keep candidate order
    distances.sort_by_key(|d| d.distance);
    trace!(
        best = ?distances.first(),
        runner_up = ?distances.get(1),
        trigrams = ranks.len(),
        "distances computed"
    );

    match scoring::confidence(&distances, ranks.len()) {
        Some((lang, confidence)) => Info::new(lang, script, confidence),
        None => {
            debug!(%script, "no candidate shares a trigram with the input");
            Info::unknown_lang(script)
        }
    }
}

pub struct Detector<S: ProfileSource = StaticProfiles> {
    profiles: S,
    options: Options,
    compose_input: bool,
}

impl Detector {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> DetectorBuilder {
        DetectorBuilder::default()
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ProfileSource> Detector<S> {
    pub fn detect(&self, text: &str) -> Info {
        self.detect_with_options(text, &self.options)
    }

    /// Ignores the detector's own options in favor of `options`.
    pub fn detect_with_options(&self, text: &str, options: &Options) -> Info {
        let text = self.prepare(text);
        detect_in(&self.profiles, &text, options)
    }

    #[inline]
    pub fn detect_lang(&self, text: &str) -> Option<Lang> {
        self.detect(text).lang()
    }

    pub fn detect_script(&self, text: &str) -> Option<Script> {
        script::detect_script(&self.prepare(text))
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    pub fn profiles(&self) -> &S {
        &self.profiles
    }

    fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.compose_input {
            ICU4X_NFC.normalize(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

pub struct DetectorBuilder<S: ProfileSource = StaticProfiles> {
    profiles: S,
    options: Options,
    compose_input: bool,
}

impl Default for DetectorBuilder {
    fn default() -> Self {
        Self {
            profiles: BUILTIN_PROFILES,
            options: Options::default(),
            compose_input: false,
        }
    }
}

impl<S: ProfileSource> DetectorBuilder<S> {
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn whitelist<I: IntoIterator<Item = Lang>>(mut self, langs: I) -> Self {
        self.options = self.options.with_whitelist(langs);
        self
    }

    pub fn blacklist<I: IntoIterator<Item = Lang>>(mut self, langs: I) -> Self {
        self.options = self.options.with_blacklist(langs);
        self
    }

    /// NFC-compose input before detection, so decomposed text matches the
    /// composed reference trigrams.
    pub fn compose_input(mut self, yes: bool) -> Self {
        self.compose_input = yes;
        self
    }

    pub fn profiles<T: ProfileSource>(self, profiles: T) -> DetectorBuilder<T> {
        DetectorBuilder {
            profiles,
            options: self.options,
            compose_input: self.compose_input,
        }
    }

    pub fn build(self) -> Detector<S> {
        Detector {
            profiles: self.profiles,
            options: self.options,
            compose_input: self.compose_input,
        }
    }
}

/// Detects language and script with the built-in profiles.
pub fn detect(text: &str) -> Info {
    detect_in(&BUILTIN_PROFILES, text, &Options::default())
}

pub fn detect_lang(text: &str) -> Option<Lang> {
    detect(text).lang()
}

pub fn detect_with_options(text: &str, options: &Options) -> Info {
    detect_in(&BUILTIN_PROFILES, text, options)
}

pub fn detect_lang_with_options(text: &str, options: &Options) -> Option<Lang> {
    detect_with_options(text, options).lang()
}

#[inline]
pub fn detect_script(text: &str) -> Option<Script> {
    script::detect_script(text)
}

#[inline]
pub fn is_reliable(info: &Info) -> bool {
    info.is_reliable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ENG, FRA, RUS};

    static LATIN: &[LangProfile] = &[
        LangProfile::from_static(ENG, &[" th", "the", "he "]),
        LangProfile::from_static(FRA, &[" le", "les", "es "]),
    ];

    struct LatinOnly;

    impl ProfileSource for LatinOnly {
        fn profiles(&self, script: Script) -> &[LangProfile] {
            if script == Script::Latin { LATIN } else { &[] }
        }
    }

    #[test]
    fn custom_source_is_consulted() {
        let detector = Detector::builder().profiles(LatinOnly).build();
        let info = detector.detect("the theme");
        assert_eq!(info.lang(), Some(ENG));
        assert_eq!(info.script(), Some(Script::Latin));
        // distances 4 vs 900 over 7 distinct trigrams
        assert!(info.confidence() > 0.0 && info.confidence() < 0.01);

        let info = detector.detect("Привет всем!");
        assert_eq!(info, Info::unknown_lang(Script::Cyrillic));
    }

    #[test]
    fn no_shared_trigram_is_unknown_language() {
        // full-length profiles with nothing in common hit the distance cap
        assert_eq!(Detector::new().detect("xyz qqq"), Info::unknown_lang(Script::Latin));
        // short profiles never do
        let short = Detector::builder().profiles(LatinOnly).build();
        let info = short.detect("xyz qqq");
        assert_eq!(info.lang(), Some(ENG));
        assert_eq!(info.confidence(), 0.0);
    }

    #[test]
    fn builder_options_apply() {
        let detector = Detector::builder().whitelist([FRA]).build();
        assert_eq!(detector.options().whitelist(), &[FRA]);
        assert_eq!(
            detector.detect("Where there is a will there is a way"),
            Info::new(FRA, Script::Latin, 1.0)
        );
        // explicit options win over the detector's
        let info = detector.detect_with_options("Привет всем!", &Options::new().allow(RUS));
        assert_eq!(info, Info::new(RUS, Script::Cyrillic, 1.0));
    }

    #[test]
    fn compose_input_recomposes_decomposed_text() {
        let plain = Detector::new();
        let composing = Detector::builder().compose_input(true).build();
        assert_eq!(plain.prepare("cafe\u{301}"), "cafe\u{301}");
        assert_eq!(composing.prepare("cafe\u{301}"), "café");
        assert!(matches!(composing.prepare("café"), Cow::Borrowed(_)));
        assert_eq!(composing.detect_script("cafe\u{301}"), Some(Script::Latin));
    }

    #[test]
    fn detector_matches_free_functions() {
        let detector = Detector::default();
        for text in ["Hello, world!", "我爱你", "Та нічого, все нормально. А в тебе як?", ""] {
            assert_eq!(detector.detect(text), detect(text));
            assert_eq!(detector.detect_lang(text), detect_lang(text));
            assert_eq!(detector.detect_script(text), detect_script(text));
        }
    }
}
