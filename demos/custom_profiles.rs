// demos/custom_profiles.rs
//! Plug caller-owned reference data into a `Detector`.
//!
//! Two toy Latin-script profiles are validated at startup and served through
//! a `ProfileSource`; every other script falls back to the built-in tables.

use langscope::{
    BUILTIN_PROFILES, Detector, ENG, LangProfile, NLD, ProfileError, ProfileSource, Script,
};

struct TinyLatin {
    latin: Vec<LangProfile>,
}

impl TinyLatin {
    fn new() -> Result<Self, ProfileError> {
        let latin = vec![
            LangProfile::new(ENG, &[" th", "the", "he ", " an", "and", "nd "])?,
            LangProfile::new(NLD, &[" de", "de ", "en ", " he", "het", "et "])?,
        ];
        Ok(Self { latin })
    }
}

impl ProfileSource for TinyLatin {
    fn profiles(&self, script: Script) -> &[LangProfile] {
        match script {
            Script::Latin => &self.latin,
            other => BUILTIN_PROFILES.profiles(other),
        }
    }
}

fn main() -> Result<(), ProfileError> {
    let detector = Detector::builder().profiles(TinyLatin::new()?).build();

    for text in [
        "the cat and the hat",
        "het huis en de tuin",
        "Я очень люблю читать книги.",
    ] {
        println!("{text:<30} → {}", detector.detect(text));
    }

    // malformed reference data is rejected before it reaches a detector
    if let Err(err) = LangProfile::new(ENG, &["the", "th"]) {
        println!("rejected: {err}");
    }
    Ok(())
}
