use crate::lang::Lang;
use smallvec::SmallVec;

type LangSet = SmallVec<[Lang; 8]>;

/// Candidate filter for scripts shared by several languages.
///
/// A non-empty whitelist takes exclusive precedence: the blacklist is only
/// consulted when the whitelist is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    whitelist: LangSet,
    blacklist: LangSet,
}

impl Options {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whitelist.
    pub fn with_whitelist<I: IntoIterator<Item = Lang>>(mut self, langs: I) -> Self {
        self.whitelist.clear();
        langs.into_iter().for_each(|l| insert(&mut self.whitelist, l));
        self
    }

    /// Replaces the blacklist.
    pub fn with_blacklist<I: IntoIterator<Item = Lang>>(mut self, langs: I) -> Self {
        self.blacklist.clear();
        langs.into_iter().for_each(|l| insert(&mut self.blacklist, l));
        self
    }

    pub fn allow(mut self, lang: Lang) -> Self {
        insert(&mut self.whitelist, lang);
        self
    }

    pub fn deny(mut self, lang: Lang) -> Self {
        insert(&mut self.blacklist, lang);
        self
    }

    #[inline]
    pub fn whitelist(&self) -> &[Lang] {
        &self.whitelist
    }

    #[inline]
    pub fn blacklist(&self) -> &[Lang] {
        &self.blacklist
    }

    #[inline]
    pub fn permits(&self, lang: Lang) -> bool {
        if !self.whitelist.is_empty() {
            return self.whitelist.contains(&lang);
        }
        !self.blacklist.contains(&lang)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.whitelist.is_empty() && self.blacklist.is_empty()
    }
}

#[inline]
fn insert(set: &mut LangSet, lang: Lang) {
    if !set.contains(&lang) {
        set.push(lang);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{DEU, ENG, FRA, SPA};

    #[test]
    fn empty_options_permit_everything() {
        let opts = Options::new();
        assert!(opts.is_empty());
        assert!(opts.permits(ENG));
        assert!(opts.permits(DEU));
    }

    #[test]
    fn whitelist_overrides_blacklist() {
        let opts = Options::new().allow(ENG).deny(ENG).deny(FRA);
        assert!(opts.permits(ENG));
        assert!(!opts.permits(FRA));
        assert!(!opts.permits(DEU));
    }

    #[test]
    fn blacklist_applies_without_whitelist() {
        let opts = Options::new().with_blacklist([FRA, SPA]);
        assert!(opts.permits(ENG));
        assert!(!opts.permits(FRA));
        assert!(!opts.permits(SPA));
    }

    #[test]
    fn sets_ignore_duplicates_and_replace() {
        let opts = Options::new().allow(ENG).allow(ENG).with_blacklist([FRA, FRA]);
        assert_eq!(opts.whitelist(), &[ENG]);
        assert_eq!(opts.blacklist(), &[FRA]);
        let opts = opts.with_whitelist([DEU]);
        assert_eq!(opts.whitelist(), &[DEU]);
        assert!(!opts.is_empty());
    }
}
