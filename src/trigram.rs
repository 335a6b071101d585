//! Trigram extraction and rank transformation.

use crate::unicode::trigram_char;
use std::{collections::HashMap, iter};

/// Counts the 3-character windows of `text` after normalization.
///
/// Stop characters become spaces and letters are lowercased. The window
/// starts with a space as left context and a trailing space closes the last
/// word. Windows whose middle is a space next to another space are skipped.
pub fn count_trigrams(text: &str) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut chars = text.chars().map(trigram_char).chain(iter::once(' '));

    let mut c1 = ' ';
    let Some(mut c2) = chars.next() else {
        return counts;
    };
    let mut key = String::with_capacity(12);
    for c3 in chars {
        if !(c2 == ' ' && (c1 == ' ' || c3 == ' ')) {
            key.clear();
            key.extend([c1, c2, c3]);
            match counts.get_mut(key.as_str()) {
                Some(n) => *n += 1,
                None => {
                    counts.insert(key.clone(), 1);
                }
            }
        }
        c1 = c2;
        c2 = c3;
    }
    counts
}

/// Trigram → rank, rank 0 being the most frequent trigram of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrigramRankMap {
    ranks: HashMap<String, u32>,
}

impl TrigramRankMap {
    pub fn from_text(text: &str) -> Self {
        rank_trigrams(count_trigrams(text))
    }

    #[inline]
    pub fn rank(&self, trigram: &str) -> Option<u32> {
        self.ranks.get(trigram).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.ranks.iter().map(|(t, &r)| (t.as_str(), r))
    }
}

/// Sorts by count ascending with ties broken by trigram ascending, then
/// assigns ranks walking from the end.
pub fn rank_trigrams(counts: HashMap<String, u32>) -> TrigramRankMap {
    let mut sorted: Vec<(String, u32)> = counts.into_iter().collect();
    sorted.sort_unstable_by(|(ta, ca), (tb, cb)| ca.cmp(cb).then_with(|| ta.cmp(tb)));

    let ranks = sorted
        .into_iter()
        .rev()
        .enumerate()
        .map(|(rank, (trigram, _))| (trigram, rank as u32))
        .collect();
    TrigramRankMap { ranks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
        pairs.iter().map(|&(t, n)| (t.to_owned(), n)).collect()
    }

    #[test]
    fn counts_windows_of_normalized_text() {
        let cases: &[(&str, &[(&str, u32)])] = &[
            ("", &[]),
            (",", &[]),
            ("a", &[(" a ", 1)]),
            ("-a-", &[(" a ", 1)]),
            ("yes", &[(" ye", 1), ("es ", 1), ("yes", 1)]),
            (
                "Give - IT...",
                &[(" gi", 1), ("giv", 1), ("ive", 1), ("ve ", 1), (" it", 1), ("it ", 1)],
            ),
            (
                "Hello ! World",
                &[
                    (" he", 1),
                    ("hel", 1),
                    ("ell", 1),
                    ("llo", 1),
                    ("lo ", 1),
                    (" wo", 1),
                    ("wor", 1),
                    ("orl", 1),
                    ("rld", 1),
                    ("ld ", 1),
                ],
            ),
            ("aaaa", &[(" aa", 1), ("aaa", 2), ("aa ", 1)]),
        ];
        for &(text, expected) in cases {
            assert_eq!(count_trigrams(text), counts(expected), "{text:?}");
        }
    }

    #[test]
    fn counts_non_latin_letters() {
        let got = count_trigrams("Та нічого");
        assert_eq!(got.get(" та"), Some(&1));
        assert_eq!(got.get("та "), Some(&1));
        assert_eq!(got.get("ніч"), Some(&1));
        assert_eq!(got.get("ого"), Some(&1));
        assert_eq!(got.get("го "), Some(&1));
        // a space between two letters is a word-boundary trigram
        assert_eq!(got.get("а н"), Some(&1));
        assert_eq!(got.len(), 9);
    }

    #[test]
    fn ranks_by_count_then_lexicographic() {
        let map = rank_trigrams(counts(&[
            ("abc", 1),
            ("bca", 1),
            ("cab", 3),
            ("zzz", 2),
            ("aaa", 2),
        ]));
        // sorted ascending: abc(1) bca(1) aaa(2) zzz(2) cab(3)
        assert_eq!(map.rank("cab"), Some(0));
        assert_eq!(map.rank("zzz"), Some(1));
        assert_eq!(map.rank("aaa"), Some(2));
        assert_eq!(map.rank("bca"), Some(3));
        assert_eq!(map.rank("abc"), Some(4));
        assert_eq!(map.rank("xyz"), None);
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn ranks_are_a_permutation() {
        let map = TrigramRankMap::from_text("Where there is a will there is a way");
        let mut ranks: Vec<u32> = map.iter().map(|(_, r)| r).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (0..map.len() as u32).collect::<Vec<_>>());
        // "re " closes where/there/there
        assert_eq!(map.rank("re "), Some(0));
        assert_eq!(map.rank("her"), Some(1));
    }

    #[test]
    fn empty_text_gives_empty_map() {
        let map = TrigramRankMap::from_text("");
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert!(TrigramRankMap::from_text("  ... 42 ").is_empty());
    }
}
