use std::borrow::Borrow;
use std::collections::BTreeSet;

use smol_str::SmolStr;

use super::{FlagDiacritic, FlagPair};
use crate::config::OrderTags;
use crate::constants::{NO_PREFIX, PREFIX_BOUNDARY, SUFFIX_BOUNDARY};
use crate::lexc::escape;
use crate::types::{FlagCategory, Order};

/// All multichar symbols introduced during one compilation run: morpheme
/// boundaries, flag diacritics, morphological tags and symbols declared in
/// the configuration. Kept sorted so that the `Multichar_Symbols` section
/// is reproducible.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MulticharSymbols {
    symbols: BTreeSet<SmolStr>,
}

/// Prefix identity used in flags and lexicon names: the upper-cased
/// prefix, or `NONE` for an empty one.
pub fn prefix_id(prefix: &str) -> SmolStr {
    if prefix.is_empty() {
        SmolStr::new(NO_PREFIX)
    } else {
        prefix.to_uppercase().into()
    }
}

impl MulticharSymbols {
    pub fn new() -> MulticharSymbols {
        Self::default()
    }

    #[inline(always)]
    pub fn insert(&mut self, symbol: impl Into<SmolStr>) -> bool {
        self.symbols.insert(symbol.into())
    }

    #[inline(always)]
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &SmolStr> {
        self.symbols.iter()
    }

    /// Add the morpheme boundaries and the escaped symbols a configuration
    /// declares up front.
    pub fn declare<S: AsRef<str>>(&mut self, declared: &[S]) {
        self.symbols
            .extend(declared.iter().map(|s| escape(s.as_ref())));
        self.symbols.insert(escape(PREFIX_BOUNDARY));
        self.symbols.insert(escape(SUFFIX_BOUNDARY));
    }

    /// Union with the symbols of another run shard.
    pub fn merge(&mut self, other: MulticharSymbols) {
        self.symbols.extend(other.symbols);
    }

    fn register(&mut self, flag: &FlagDiacritic) {
        self.symbols.insert(flag.symbol());
    }

    fn pair(&mut self, category: FlagCategory, value: SmolStr) -> FlagPair {
        let pair = FlagPair {
            set: FlagDiacritic::set(category, value.clone()),
            check: FlagDiacritic::require(category, value),
        };
        self.register(&pair.set);
        self.register(&pair.check);
        pair
    }

    /// `@P.Prefix.<ID>@` and `@R.Prefix.<ID>@` for a prefix.
    pub fn prefix_flags(&mut self, prefix: &str) -> FlagPair {
        self.pair(FlagCategory::Prefix, prefix_id(prefix))
    }

    /// `@P.Paradigm.<P>@` and `@R.Paradigm.<P>@` for a paradigm.
    pub fn paradigm_flags(&mut self, paradigm: &str) -> FlagPair {
        self.pair(FlagCategory::Paradigm, paradigm.into())
    }

    /// The clause order of a tag sequence and its `@U.Order.<order>@` flag.
    pub fn order_flag<S: Borrow<str>>(&mut self, tags: &[S], order_tags: &OrderTags) -> (Order, FlagDiacritic) {
        let order = order_tags.order_of(tags);
        let flag = FlagDiacritic::unify(FlagCategory::Order, order.as_str());
        self.register(&flag);
        (order, flag)
    }

    /// Check flags among `flags` whose set flag was never registered.
    pub fn missing_set_flags<'a, I>(&self, flags: I) -> Vec<FlagDiacritic>
    where
        I: IntoIterator<Item = &'a FlagDiacritic>,
    {
        flags
            .into_iter()
            .filter(|flag| match flag.counterpart() {
                Some(set) => !self.contains(&set.symbol()),
                None => false,
            })
            .cloned()
            .collect()
    }
}
