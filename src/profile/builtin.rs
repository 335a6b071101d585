//! Built-in reference data for the scripts shared by several languages.

use super::{LangProfile, ScriptGroup, StaticProfiles, trigrams};
use crate::{
    lang::{
        AMH, ARB, BUL, DEU, ENG, EPO, FRA, HEB, HIN, ITA, MAR, NEP, NLD, PES, POL, POR, RUS, SPA,
        SWE, TIR, TUR, UKR, URD, YDD,
    },
    script::Script,
};

macro_rules! script_groups {
    ($( $script:ident => [ $($lang:ident),* $(,)? ] ),* $(,)?) => {
        /// Languages per script, in candidate order, with their trigram tables.
        pub static BUILTIN_PROFILES: StaticProfiles = StaticProfiles {
            groups: &[
                $(
                    ScriptGroup {
                        script: Script::$script,
                        profiles: &[
                            $( LangProfile::from_static($lang, trigrams::$lang) ),*
                        ],
                    }
                ),*
            ],
        };
    };
}

script_groups! {
    Latin => [ENG, FRA, DEU, SPA, ITA, POR, NLD, EPO, POL, TUR, SWE],
    Cyrillic => [RUS, UKR, BUL],
    Devanagari => [HIN, MAR, NEP],
    Hebrew => [HEB, YDD],
    Arabic => [ARB, PES, URD],
    Ethiopic => [AMH, TIR],
}
