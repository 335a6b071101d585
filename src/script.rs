//! Stage one: Unicode script classification.
//!
//! [`detect_script`] counts non-stop codepoints per script family and keeps
//! the families in a self-organizing priority list, so scripts seen often are
//! tested first on subsequent codepoints.

use crate::{
    lang::{
        BEN, CMN, ELL, GUJ, JPN, KAN, KAT, KHM, KOR, Lang, MAL, MYA, ORI, PAN, SIN, TAM, TEL, THA,
    },
    unicode::{self, is_stop_char, sc},
};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Script {
    Latin,
    Cyrillic,
    Arabic,
    Devanagari,
    /// Hiragana ∪ Katakana. Japanese text is classified by kana presence.
    HiraganaKatakana,
    Ethiopic,
    Hebrew,
    Bengali,
    Georgian,
    Han,
    Hangul,
    Greek,
    Kannada,
    Tamil,
    Thai,
    Gujarati,
    Gurmukhi,
    Telugu,
    Malayalam,
    Oriya,
    Myanmar,
    Sinhala,
    Khmer,
}

impl Script {
    /// Every family, in initial priority order.
    pub const ALL: [Script; 23] = [
        Script::Latin,
        Script::Cyrillic,
        Script::Arabic,
        Script::Devanagari,
        Script::HiraganaKatakana,
        Script::Ethiopic,
        Script::Hebrew,
        Script::Bengali,
        Script::Georgian,
        Script::Han,
        Script::Hangul,
        Script::Greek,
        Script::Kannada,
        Script::Tamil,
        Script::Thai,
        Script::Gujarati,
        Script::Gurmukhi,
        Script::Telugu,
        Script::Malayalam,
        Script::Oriya,
        Script::Myanmar,
        Script::Sinhala,
        Script::Khmer,
    ];

    /// The family of `c`, if any. Hiragana and Katakana both map to
    /// [`Script::HiraganaKatakana`]; `Common` and `Inherited` map to none.
    #[inline(always)]
    pub fn of(c: char) -> Option<Script> {
        let script = match unicode::script_code(c) {
            sc::LATIN => Script::Latin,
            sc::CYRILLIC => Script::Cyrillic,
            sc::ARABIC => Script::Arabic,
            sc::DEVANAGARI => Script::Devanagari,
            sc::HIRAGANA | sc::KATAKANA => Script::HiraganaKatakana,
            sc::ETHIOPIC => Script::Ethiopic,
            sc::HEBREW => Script::Hebrew,
            sc::BENGALI => Script::Bengali,
            sc::GEORGIAN => Script::Georgian,
            sc::HAN => Script::Han,
            sc::HANGUL => Script::Hangul,
            sc::GREEK => Script::Greek,
            sc::KANNADA => Script::Kannada,
            sc::TAMIL => Script::Tamil,
            sc::THAI => Script::Thai,
            sc::GUJARATI => Script::Gujarati,
            sc::GURMUKHI => Script::Gurmukhi,
            sc::TELUGU => Script::Telugu,
            sc::MALAYALAM => Script::Malayalam,
            sc::ORIYA => Script::Oriya,
            sc::MYANMAR => Script::Myanmar,
            sc::SINHALA => Script::Sinhala,
            sc::KHMER => Script::Khmer,
            _ => return None,
        };
        Some(script)
    }

    #[inline(always)]
    pub fn contains(self, c: char) -> bool {
        Script::of(c) == Some(self)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Script::Latin => "Latin",
            Script::Cyrillic => "Cyrillic",
            Script::Arabic => "Arabic",
            Script::Devanagari => "Devanagari",
            Script::HiraganaKatakana => "Hiragana, Katakana",
            Script::Ethiopic => "Ethiopic",
            Script::Hebrew => "Hebrew",
            Script::Bengali => "Bengali",
            Script::Georgian => "Georgian",
            Script::Han => "Han",
            Script::Hangul => "Hangul",
            Script::Greek => "Greek",
            Script::Kannada => "Kannada",
            Script::Tamil => "Tamil",
            Script::Thai => "Thai",
            Script::Gujarati => "Gujarati",
            Script::Gurmukhi => "Gurmukhi",
            Script::Telugu => "Telugu",
            Script::Malayalam => "Malayalam",
            Script::Oriya => "Oriya",
            Script::Myanmar => "Myanmar",
            Script::Sinhala => "Sinhala",
            Script::Khmer => "Khmer",
        }
    }

    /// The language a script decides on its own, without trigram scoring.
    pub const fn single_lang(self) -> Option<Lang> {
        match self {
            Script::Han => Some(CMN),
            Script::Hangul => Some(KOR),
            Script::HiraganaKatakana => Some(JPN),
            Script::Bengali => Some(BEN),
            Script::Georgian => Some(KAT),
            Script::Greek => Some(ELL),
            Script::Kannada => Some(KAN),
            Script::Tamil => Some(TAM),
            Script::Thai => Some(THA),
            Script::Gujarati => Some(GUJ),
            Script::Gurmukhi => Some(PAN),
            Script::Telugu => Some(TEL),
            Script::Malayalam => Some(MAL),
            Script::Oriya => Some(ORI),
            Script::Myanmar => Some(MYA),
            Script::Sinhala => Some(SIN),
            Script::Khmer => Some(KHM),
            Script::Latin
            | Script::Cyrillic
            | Script::Arabic
            | Script::Devanagari
            | Script::Ethiopic
            | Script::Hebrew => None,
        }
    }

    #[inline]
    pub const fn is_multilingual(self) -> bool {
        self.single_lang().is_none()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown script name `{0}`")]
pub struct ParseScriptError(pub String);

impl FromStr for Script {
    type Err = ParseScriptError;

    /// Accepts the display name, the variant name, or the individual kana
    /// script names, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if ["hiragana", "katakana", "hiraganakatakana"]
            .iter()
            .any(|alias| needle.eq_ignore_ascii_case(alias))
        {
            return Ok(Script::HiraganaKatakana);
        }
        Script::ALL
            .into_iter()
            .find(|script| {
                script.name().eq_ignore_ascii_case(needle)
                    || format!("{script:?}").eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseScriptError(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy)]
struct ScriptCounter {
    script: Script,
    count: usize,
}

/// Returns the dominant script of `text`, or `None` when no codepoint
/// belongs to a known family.
///
/// Any kana in Han-dominated text turns the result into
/// [`Script::HiraganaKatakana`].
pub fn detect_script(text: &str) -> Option<Script> {
    let half = text.chars().count() / 2;
    let mut counters = Script::ALL.map(|script| ScriptCounter { script, count: 0 });

    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if is_stop_char(c) {
            continue;
        }
        let Some(script) = Script::of(c) else {
            continue;
        };
        let Some(i) = counters.iter().position(|sc| sc.script == script) else {
            continue;
        };
        counters[i].count += 1;
        if counters[i].count > half {
            let winner = counters[i].script;
            if winner == Script::Han && has_kana(&counters, chars.as_str()) {
                return Some(Script::HiraganaKatakana);
            }
            return Some(winner);
        }
        if i > 0 {
            counters.swap(i - 1, i);
        }
    }

    let mut best = counters[0];
    for sc in &counters[1..] {
        if sc.count > best.count {
            best = *sc;
        }
    }
    if best.count == 0 {
        return None;
    }
    if best.script == Script::Han && has_kana(&counters, "") {
        return Some(Script::HiraganaKatakana);
    }
    Some(best.script)
}

fn has_kana(counters: &[ScriptCounter], rest: &str) -> bool {
    counters
        .iter()
        .any(|sc| sc.script == Script::HiraganaKatakana && sc.count > 0)
        || rest.chars().any(|c| Script::HiraganaKatakana.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_dominant_script() {
        let cases: &[(&str, Option<Script>)] = &[
            ("123456789-=?", None),
            ("", None),
            ("Hello, world!", Some(Script::Latin)),
            ("Привет всем!", Some(Script::Cyrillic)),
            ("ქართული ენა მსოფლიო ", Some(Script::Georgian)),
            ("県見夜上温国阪題富販", Some(Script::Han)),
            (" ككل حوالي 1.6، ومعظم الناس ", Some(Script::Arabic)),
            (
                "हिमालयी वन चिड़िया (जूथेरा सालिमअली) चिड़िया की एक प्रजाति है",
                Some(Script::Devanagari),
            ),
            ("היסטוריה והתפתחות של האלפבית העברי", Some(Script::Hebrew)),
            ("ሰብአዊ መብቶች", Some(Script::Ethiopic)),
            (
                "Привет! Текст на русском with some English.",
                Some(Script::Cyrillic),
            ),
            ("Russian word любовь means love.", Some(Script::Latin)),
            ("আমি ভালো আছি, ধন্যবাদ!", Some(Script::Bengali)),
            ("울란바토르", Some(Script::Hangul)),
            ("ελληνικά", Some(Script::Greek)),
            ("ಬಾಸ್ಕೆಟ್‌ಬಾಲ್", Some(Script::Kannada)),
            ("நான் தமிழ் பேசுகிறேன்", Some(Script::Tamil)),
            ("ในทางหลวงหมายเลข", Some(Script::Thai)),
            ("ગુજરાતી", Some(Script::Gujarati)),
            ("ਪੰਜਾਬੀ", Some(Script::Gurmukhi)),
            ("తెలుగు", Some(Script::Telugu)),
            ("മലയാളം", Some(Script::Malayalam)),
            ("ଓଡ଼ିଆ", Some(Script::Oriya)),
            ("မြန်မာ", Some(Script::Myanmar)),
            ("සිංහල", Some(Script::Sinhala)),
            ("ភាសាខ្មែរ", Some(Script::Khmer)),
            // Balinese has no family
            ("ᬅᬓ᭄ᬱᬭᬯ᭄ᬬᬜ᭄ᬚᬦ", None),
        ];
        for &(text, expected) in cases {
            assert_eq!(detect_script(text), expected, "{text}");
        }
    }

    #[test]
    fn membership_follows_the_script_property() {
        let cases: &[(Script, &[char])] = &[
            (Script::Latin, &['z', 'A', 'č', 'š', 'Ĵ', 'ŝ', 'ẞ', 'ｆ']),
            (Script::Cyrillic, &['ж', 'Ї', '\u{1C89}', '\u{1C8A}']),
            (Script::Arabic, &['ا', '\u{088F}', '\u{0897}']),
            (Script::Ethiopic, &['ፚ', 'ᎀ']),
            (Script::Georgian, &['რ']),
            (Script::Bengali, &['ই']),
            (Script::HiraganaKatakana, &['あ', 'ん', 'ア', 'ヴ', 'ﾀ', 'ｳ', 'ㇰ']),
            (Script::Han, &['我', '爱', '県', '々', '〇', '\u{20000}', '\u{2EBF0}']),
            (Script::Greek, &['Ω', 'ά']),
        ];
        for &(script, chars) in cases {
            for &c in chars {
                assert_eq!(Script::of(c), Some(script), "U+{:04X}", c as u32);
                assert!(script.contains(c));
            }
        }
        // Coptic, then Common and Inherited: prolonged sound mark, tatweel,
        // danda, fatha, digit
        for c in ['\u{03E2}', 'ー', 'ـ', '।', '\u{064E}', '1'] {
            assert_eq!(Script::of(c), None, "U+{:04X}", c as u32);
        }
        assert!(!Script::Han.contains('か'));
        assert!(!Script::Han.contains('한'));
        assert!(!Script::HiraganaKatakana.contains('漢'));
    }

    #[test]
    fn every_codepoint_agrees_with_icu() {
        use icu_properties::props::Script as UcdScript;
        let tracked = [
            (UcdScript::Latin, Script::Latin),
            (UcdScript::Cyrillic, Script::Cyrillic),
            (UcdScript::Arabic, Script::Arabic),
            (UcdScript::Devanagari, Script::Devanagari),
            (UcdScript::Hiragana, Script::HiraganaKatakana),
            (UcdScript::Katakana, Script::HiraganaKatakana),
            (UcdScript::Hebrew, Script::Hebrew),
            (UcdScript::Bengali, Script::Bengali),
            (UcdScript::Georgian, Script::Georgian),
            (UcdScript::Han, Script::Han),
            (UcdScript::Hangul, Script::Hangul),
            (UcdScript::Greek, Script::Greek),
            (UcdScript::Kannada, Script::Kannada),
            (UcdScript::Tamil, Script::Tamil),
            (UcdScript::Thai, Script::Thai),
            (UcdScript::Gujarati, Script::Gujarati),
            (UcdScript::Gurmukhi, Script::Gurmukhi),
            (UcdScript::Telugu, Script::Telugu),
            (UcdScript::Malayalam, Script::Malayalam),
            (UcdScript::Myanmar, Script::Myanmar),
            (UcdScript::Sinhala, Script::Sinhala),
            (UcdScript::Khmer, Script::Khmer),
        ];
        for c in (0..=0x10FFFF).filter_map(char::from_u32) {
            let ucd = unicode::ucd_script(c);
            let expected = tracked.iter().find(|(u, _)| *u == ucd).map(|&(_, s)| s);
            let got = Script::of(c);
            // Ethiopic and Oriya are not in the named table
            if matches!(got, Some(Script::Ethiopic | Script::Oriya)) {
                assert_eq!(expected, None, "U+{:04X}", c as u32);
                continue;
            }
            assert_eq!(got, expected, "U+{:04X}", c as u32);
        }
    }

    #[test]
    fn kana_overrides_han() {
        let cases = [
            "どうもありがとう",
            "今日は",
            "コンニチハ",
            "ﾀﾅｶ ﾀﾛｳ",
            "支那の上海の或町です。",
            "漢字漢字漢字漢字ア",
        ];
        for text in cases {
            assert_eq!(detect_script(text), Some(Script::HiraganaKatakana), "{text}");
        }
        assert_eq!(detect_script("我爱你"), Some(Script::Han));
        assert_eq!(detect_script("人人生而自由，在尊严和权利上一律平等。"), Some(Script::Han));
    }

    #[test]
    fn single_lang_table() {
        assert_eq!(Script::Han.single_lang(), Some(CMN));
        assert_eq!(Script::HiraganaKatakana.single_lang(), Some(JPN));
        assert_eq!(Script::Gurmukhi.single_lang(), Some(PAN));
        assert_eq!(Script::Latin.single_lang(), None);
        let multi: Vec<_> = Script::ALL
            .into_iter()
            .filter(|s| s.is_multilingual())
            .collect();
        assert_eq!(
            multi,
            [
                Script::Latin,
                Script::Cyrillic,
                Script::Arabic,
                Script::Devanagari,
                Script::Ethiopic,
                Script::Hebrew,
            ]
        );
    }

    #[test]
    fn parse_and_display() {
        for script in Script::ALL {
            assert_eq!(script.to_string().parse::<Script>(), Ok(script));
            assert_eq!(format!("{script:?}").parse::<Script>(), Ok(script));
        }
        assert_eq!("katakana".parse::<Script>(), Ok(Script::HiraganaKatakana));
        assert_eq!("CYRILLIC".parse::<Script>(), Ok(Script::Cyrillic));
        assert_eq!(
            "Klingon".parse::<Script>(),
            Err(ParseScriptError("Klingon".into()))
        );
    }
}
