use crate::{lang::Lang, scoring::RELIABLE_CONFIDENCE_THRESHOLD, script::Script};
use std::fmt;

/// Outcome of a detection.
///
/// A missing language always carries confidence 0 and a missing script
/// implies a missing language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Info {
    lang: Option<Lang>,
    script: Option<Script>,
    confidence: f64,
}

impl Info {
    /// Nothing recognized.
    pub const fn none() -> Self {
        Self {
            lang: None,
            script: None,
            confidence: 0.0,
        }
    }

    /// Script recognized, language undecided.
    pub const fn unknown_lang(script: Script) -> Self {
        Self {
            lang: None,
            script: Some(script),
            confidence: 0.0,
        }
    }

    /// Confidence is clamped to `[0, 1]`; NaN becomes 0.
    pub fn new(lang: Lang, script: Script, confidence: f64) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            lang: Some(lang),
            script: Some(script),
            confidence,
        }
    }

    #[inline(always)]
    pub const fn lang(&self) -> Option<Lang> {
        self.lang
    }

    #[inline(always)]
    pub const fn script(&self) -> Option<Script> {
        self.script
    }

    #[inline(always)]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    #[inline]
    pub fn is_reliable(&self) -> bool {
        self.confidence > RELIABLE_CONFIDENCE_THRESHOLD
    }
}

impl Default for Info {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lang, self.script) {
            (Some(lang), Some(script)) => {
                write!(f, "{} ({}, {:.2})", lang.name, script, self.confidence)
            }
            (None, Some(script)) => write!(f, "unknown ({script})"),
            _ => f.write_str("unknown"),
        }
    }
}
