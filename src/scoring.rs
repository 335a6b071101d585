//! Profile distance and confidence estimation.
//!
//! The constants are empirically tuned and kept as-is for compatibility
//! with previously published results.

use crate::{lang::Lang, profile::LangProfile, trigram::TrigramRankMap};

/// Penalty for a profile trigram absent from the input.
pub const MAX_TRIGRAM_DISTANCE: u32 = 300;
/// Distance of a full-length profile with no trigram in common with the input.
pub const MAX_TOTAL_DISTANCE: u32 = 90_000;
/// Divisor applied when only the best candidate has any signal.
pub const SOLE_SIGNAL_NORMALIZER: f64 = 500.0;
pub const CONFIDENT_RATE_SCALE: f64 = 12.0;
pub const CONFIDENT_RATE_FLOOR: f64 = 0.05;
/// Confidence above which a result is considered reliable.
pub const RELIABLE_CONFIDENCE_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LangDistance {
    pub lang: Lang,
    pub distance: u32,
}

/// Sum over the profile of `|input rank - profile rank|`, or
/// [`MAX_TRIGRAM_DISTANCE`] for each trigram the input lacks.
pub fn distance(profile: &LangProfile, ranks: &TrigramRankMap) -> u32 {
    profile
        .trigrams()
        .iter()
        .enumerate()
        .fold(0u32, |total, (i, trigram)| {
            let d = match ranks.rank(trigram) {
                Some(n) => n.abs_diff(i as u32),
                None => MAX_TRIGRAM_DISTANCE,
            };
            total.saturating_add(d)
        })
}

#[inline]
fn score(distance: u32) -> f64 {
    f64::from(MAX_TOTAL_DISTANCE.saturating_sub(distance))
}

/// Picks the best language from distances sorted ascending and rates how far
/// it stands from the runner-up.
///
/// Returns `None` when even the best candidate scores zero.
pub fn confidence(sorted: &[LangDistance], distinct_trigrams: usize) -> Option<(Lang, f64)> {
    let best = sorted.first()?;
    let score1 = score(best.distance);
    if score1 == 0.0 {
        return None;
    }
    let Some(second) = sorted.get(1) else {
        return Some((best.lang, 1.0));
    };
    let score2 = score(second.distance);
    if score2 == 0.0 {
        // float division: a sole signal below 500 still gets partial credit
        return Some((best.lang, (score1 / SOLE_SIGNAL_NORMALIZER).min(1.0)));
    }

    let rate = (score1 - score2) / score2;
    let confident_rate =
        CONFIDENT_RATE_SCALE / distinct_trigrams.max(1) as f64 + CONFIDENT_RATE_FLOOR;
    let conf = if rate > confident_rate {
        1.0
    } else {
        rate / confident_rate
    };
    Some((best.lang, conf.clamp(0.0, 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{DEU, ENG, FRA};

    static ABC: &[&str] = &["abc", "bcd", "cde"];

    fn ld(lang: Lang, distance: u32) -> LangDistance {
        LangDistance { lang, distance }
    }

    #[test]
    fn distance_sums_rank_differences() {
        let profile = LangProfile::from_static(ENG, ABC);
        // input ranks: cde 0, abc 1, bcd 2
        let ranks = crate::trigram::rank_trigrams(
            [("cde", 5), ("abc", 4), ("bcd", 3)]
                .into_iter()
                .map(|(t, n)| (t.to_owned(), n))
                .collect(),
        );
        // |1-0| + |2-1| + |0-2|
        assert_eq!(distance(&profile, &ranks), 4);
    }

    #[test]
    fn absent_trigrams_cost_the_fixed_penalty() {
        let profile = LangProfile::from_static(ENG, ABC);
        let empty = TrigramRankMap::default();
        assert_eq!(distance(&profile, &empty), 3 * MAX_TRIGRAM_DISTANCE);

        let empty_profile = LangProfile::from_static(ENG, &[]);
        assert_eq!(distance(&empty_profile, &empty), 0);
    }

    #[test]
    fn zero_best_score_means_no_language() {
        assert_eq!(confidence(&[], 10), None);
        assert_eq!(
            confidence(&[ld(ENG, MAX_TOTAL_DISTANCE), ld(FRA, MAX_TOTAL_DISTANCE)], 10),
            None
        );
        assert_eq!(confidence(&[ld(ENG, MAX_TOTAL_DISTANCE + 5)], 10), None);
    }

    #[test]
    fn sole_signal_is_normalized() {
        let sorted = [ld(ENG, MAX_TOTAL_DISTANCE - 250), ld(FRA, MAX_TOTAL_DISTANCE)];
        let got = confidence(&sorted, 10);
        assert_eq!(got, Some((ENG, 0.5)));
        // small scores keep a proportional share instead of truncating to 0
        let sorted = [ld(ENG, MAX_TOTAL_DISTANCE - 100), ld(FRA, MAX_TOTAL_DISTANCE)];
        let got = confidence(&sorted, 10);
        assert_eq!(got, Some((ENG, 0.2)));
        let got = confidence(&[ld(ENG, 1000), ld(FRA, 95_000)], 10);
        assert_eq!(got, Some((ENG, 1.0)));
    }

    #[test]
    fn rate_against_runner_up() {
        // score1 = 60_000, score2 = 50_000, rate = 0.2
        let sorted = [ld(ENG, 30_000), ld(FRA, 40_000), ld(DEU, 41_000)];
        // confident rate with 12 distinct trigrams = 1.05
        let (lang, conf) = confidence(&sorted, 12).unwrap();
        assert_eq!(lang, ENG);
        assert!((conf - 0.2 / 1.05).abs() < 1e-12);
        // many trigrams: confident rate = 0.062
        assert_eq!(confidence(&sorted, 1000), Some((ENG, 1.0)));
    }

    #[test]
    fn equal_distances_give_zero_confidence() {
        let sorted = [ld(ENG, 30_000), ld(FRA, 30_000)];
        assert_eq!(confidence(&sorted, 50), Some((ENG, 0.0)));
    }
}
