use smol_str::SmolStr;

use super::{ParadigmRow, SurfaceAlternative};
use crate::config::{LexiconConfig, OrderTags, PreElementSlot};
use crate::constants::{EPSILON, PREFIX_BOUNDARY, SUFFIX_BOUNDARY};
use crate::flags::{prefix_id, FlagDiacritic, MulticharSymbols};
use crate::lexc::{escape, EndingKey, LexcEntry, LexiconName};

/// A chain of entries from the first lexicon after the root to `#`. Each
/// entry continues in the lexicon of the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexcPath {
    paradigm_flag: FlagDiacritic,
    entries: Vec<LexcEntry>,
}

impl LexcPath {
    /// The lexicon the root entry continues into.
    pub fn first_lexicon(&self) -> &LexiconName {
        &self.entries[0].lexicon
    }

    /// `@P.Paradigm.<P>@`, written on the root entry.
    pub fn paradigm_flag(&self) -> &FlagDiacritic {
        &self.paradigm_flag
    }

    pub fn entries(&self) -> &[LexcEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<LexcEntry> {
        self.entries
    }
}

/// Turns paradigm rows into lexc paths.
#[derive(Debug, Clone)]
pub struct PathBuilder<'a> {
    regular: bool,
    pre_element: Option<PreElementSlot>,
    order_tags: &'a OrderTags,
}

impl<'a> PathBuilder<'a> {
    /// `regular` selects the segmented chain over the single irregular
    /// entry. `pre_element` inserts the `<pos>Stems` gate.
    pub fn new(regular: bool, pre_element: Option<PreElementSlot>, order_tags: &'a OrderTags) -> Self {
        PathBuilder {
            regular,
            pre_element,
            order_tags,
        }
    }

    /// Builder for the regular or the irregular tables of `config`.
    pub fn from_config(config: &'a LexiconConfig, regular: bool) -> Self {
        PathBuilder::new(regular, config.pre_element_slot(), &config.order_tags)
    }

    /// One path per surface alternative of `row`. The row's tags and every
    /// flag on the paths are added to `symbols`.
    pub fn build(&self, row: &ParadigmRow, symbols: &mut MulticharSymbols) -> Vec<LexcPath> {
        for tag in row.tags.iter() {
            symbols.insert(tag.clone());
        }
        let paradigm_flags = symbols.paradigm_flags(&row.paradigm);

        row.forms
            .iter()
            .map(|form| {
                let entries = if self.regular {
                    self.regular_entries(row, form, &paradigm_flags.check, symbols)
                } else {
                    irregular_entries(row, form)
                };
                LexcPath {
                    paradigm_flag: paradigm_flags.set.clone(),
                    entries,
                }
            })
            .collect()
    }

    fn regular_entries(
        &self,
        row: &ParadigmRow,
        form: &SurfaceAlternative,
        paradigm_check: &FlagDiacritic,
        symbols: &mut MulticharSymbols,
    ) -> Vec<LexcEntry> {
        let paradigm = &row.paradigm;
        let class = &row.class;
        let parts = &form.split;

        let prefix_flags = symbols.prefix_flags(&parts.prefix);
        let (order, order_flag) = symbols.order_flag(&row.tags, self.order_tags);
        let key = EndingKey {
            paradigm: paradigm.clone(),
            class: class.clone(),
            prefix: prefix_id(&parts.prefix),
            order,
        };

        let stems = LexiconName::Stems {
            paradigm: paradigm.clone(),
        };
        let class_boundary = LexiconName::ClassBoundary {
            paradigm: paradigm.clone(),
            class: class.clone(),
        };
        let class_flags = LexiconName::ClassFlags {
            paradigm: paradigm.clone(),
            class: class.clone(),
        };
        let prefix_boundary = LexiconName::PrefixBoundary {
            paradigm: paradigm.clone(),
        };

        let set_prefix = prefix_flags.set.symbol();
        let mut entries = Vec::with_capacity(8);
        entries.push(LexcEntry::new(
            LexiconName::Prefix {
                paradigm: paradigm.clone(),
            },
            set_prefix.clone(),
            format!("{}{}", set_prefix, parts.prefix),
            prefix_boundary.clone(),
        ));

        match &self.pre_element {
            Some(slot) => {
                let gate = LexiconName::PreElementGate {
                    pos: slot.pos.clone(),
                };
                let after_boundary = match &slot.prefix_root {
                    Some(root) => LexiconName::External(root.clone()),
                    None => gate.clone(),
                };
                entries.push(LexcEntry::new(
                    prefix_boundary,
                    EPSILON,
                    escape(PREFIX_BOUNDARY),
                    after_boundary,
                ));
                entries.push(LexcEntry::identity(gate, paradigm_check.symbol(), stems.clone()));
            }
            None => entries.push(LexcEntry::new(
                prefix_boundary,
                EPSILON,
                escape(PREFIX_BOUNDARY),
                stems.clone(),
            )),
        }

        entries.push(LexcEntry::new(
            stems,
            row.lemma.clone(),
            row.stem.clone(),
            class_boundary.clone(),
        ));
        entries.push(LexcEntry::new(
            class_boundary,
            EPSILON,
            escape(SUFFIX_BOUNDARY),
            class_flags.clone(),
        ));
        entries.push(LexcEntry::identity(
            class_flags,
            prefix_flags.check.symbol(),
            LexiconName::Order(key.clone()),
        ));
        entries.push(LexcEntry::identity(
            LexiconName::Order(key.clone()),
            order_flag.symbol(),
            LexiconName::Endings(key.clone()),
        ));
        entries.push(LexcEntry::new(
            LexiconName::Endings(key),
            row.analysis_tags(),
            parts.suffix.clone(),
            LexiconName::Terminal,
        ));

        entries
    }
}

fn irregular_entries(row: &ParadigmRow, form: &SurfaceAlternative) -> Vec<LexcEntry> {
    let analysis: SmolStr = format!("{}{}", row.lemma, row.analysis_tags()).into();
    vec![LexcEntry::new(
        LexiconName::Irregular {
            paradigm: row.paradigm.clone(),
        },
        analysis,
        escape(&form.surface),
        LexiconName::Terminal,
    )]
}
