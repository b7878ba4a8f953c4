//! The lexicon graph: every sublexicon of one output file and its entries.
use std::collections::BTreeSet;

use hashbrown::HashMap;

use crate::flags::FlagDiacritic;
use crate::lexc::{LexcEntry, LexiconName};
use crate::paradigm::LexcPath;

pub mod comment;
pub mod database;
pub mod writer;

pub use self::comment::CommentError;
pub use self::database::{
    ClassMap, Classifier, DatabaseError, DatabaseSummary, LexicalDatabase, NoClassifier,
};

/// Sublexicons keyed by name. Entries are deduplicated by value and
/// lexicons remember the order in which they were first seen, so that the
/// root lexicon is always written first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconGraph {
    root: LexiconName,
    order: Vec<LexiconName>,
    lexicons: HashMap<LexiconName, BTreeSet<LexcEntry>>,
}

impl LexiconGraph {
    /// An empty graph whose only lexicon is `root`.
    pub fn new(root: &str) -> LexiconGraph {
        let root = LexiconName::Root(root.into());
        let mut lexicons = HashMap::new();
        lexicons.insert(root.clone(), BTreeSet::new());

        LexiconGraph {
            order: vec![root.clone()],
            root,
            lexicons,
        }
    }

    pub fn root(&self) -> &LexiconName {
        &self.root
    }

    /// Add one entry to its lexicon, creating the lexicon if needed.
    /// Returns false if the entry was already present.
    pub fn insert(&mut self, entry: LexcEntry) -> bool {
        if !self.lexicons.contains_key(&entry.lexicon) {
            self.order.push(entry.lexicon.clone());
        }
        self.lexicons
            .entry(entry.lexicon.clone())
            .or_insert_with(BTreeSet::new)
            .insert(entry)
    }

    /// Add the paths together with a root entry leading into each of them.
    pub fn extend<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = LexcPath>,
    {
        for path in paths {
            if path.is_empty() {
                continue;
            }
            let flag = path.paradigm_flag().symbol();
            self.insert(LexcEntry::identity(
                self.root.clone(),
                flag,
                path.first_lexicon().clone(),
            ));
            for entry in path.into_entries() {
                self.insert(entry);
            }
        }
    }

    /// Union with another graph. Lexicons only `other` has are appended in
    /// its order; its root entries are added to this root.
    pub fn merge(&mut self, other: LexiconGraph) {
        let LexiconGraph {
            root,
            order,
            mut lexicons,
        } = other;

        for name in order {
            let entries = match lexicons.remove(&name) {
                Some(entries) => entries,
                None => continue,
            };
            for mut entry in entries {
                if entry.lexicon == root {
                    entry.lexicon = self.root.clone();
                }
                self.insert(entry);
            }
        }
    }

    pub fn contains(&self, name: &LexiconName) -> bool {
        self.lexicons.contains_key(name)
    }

    /// Entries of one lexicon in output order.
    pub fn entries(&self, name: &LexiconName) -> Option<&BTreeSet<LexcEntry>> {
        self.lexicons.get(name)
    }

    /// Lexicons in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&LexiconName, &BTreeSet<LexcEntry>)> {
        self.order
            .iter()
            .filter_map(move |name| self.lexicons.get(name).map(|entries| (name, entries)))
    }

    /// Number of lexicons.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.lexicons.values().map(BTreeSet::len).sum()
    }

    /// Continuations which name a lexicon the graph does not define.
    /// External lexicons and `#` are not reported.
    pub fn dangling_continuations(&self) -> BTreeSet<&LexiconName> {
        self.lexicons
            .values()
            .flatten()
            .map(|entry| &entry.next)
            .filter(|next| match next {
                LexiconName::Terminal | LexiconName::External(_) => false,
                _ => !self.lexicons.contains_key(*next),
            })
            .collect()
    }

    /// Every flag diacritic on either side of an entry.
    pub fn flags(&self) -> BTreeSet<FlagDiacritic> {
        self.lexicons
            .values()
            .flatten()
            .flat_map(|entry| {
                let analysis = entry.analysis.parse::<FlagDiacritic>().ok();
                let surface = entry.surface.parse::<FlagDiacritic>().ok();
                analysis.into_iter().chain(surface)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrderTags;
    use crate::flags::MulticharSymbols;
    use crate::paradigm::{ParadigmRow, PathBuilder};

    fn row(tags: &[&str], split: &str) -> ParadigmRow {
        ParadigmRow::new("VTA", "VTA_C", "aaba'", "aaba'w", tags)
            .with_form("x", split)
            .unwrap()
    }

    fn build(rows: &[ParadigmRow], symbols: &mut MulticharSymbols) -> LexiconGraph {
        let order_tags = OrderTags::default();
        let builder = PathBuilder::new(true, None, &order_tags);
        let mut graph = LexiconGraph::new("VerbRoot");
        for row in rows {
            graph.extend(builder.build(row, symbols));
        }
        graph
    }

    #[test]
    fn root_first() {
        let graph = build(
            &[row(&["VTA", "Ind", "1Sg"], "ni<<aaba'w>>aa")],
            &mut MulticharSymbols::new(),
        );
        let names: Vec<String> = graph.iter().map(|(name, _)| name.to_string()).collect();
        assert_eq!(names[0], "VerbRoot");
        assert_eq!(names[1], "VTA_Prefix");
        assert_eq!(graph.len(), 8);

        let root: Vec<String> = graph
            .entries(graph.root())
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(root, vec!["@P.Paradigm.VTA@ VTA_Prefix ;"]);
    }

    #[test]
    fn extending_twice_adds_nothing() {
        let mut symbols = MulticharSymbols::new();
        let mut graph = build(&[row(&["VTA", "Ind", "1Sg"], "ni<<aaba'w>>aa")], &mut symbols);
        let before = graph.clone();

        let order_tags = OrderTags::default();
        let builder = PathBuilder::new(true, None, &order_tags);
        graph.extend(builder.build(&row(&["VTA", "Ind", "1Sg"], "ni<<aaba'w>>aa"), &mut symbols));

        assert_eq!(graph, before);
        assert_eq!(graph.entry_count(), 8);
    }

    #[test]
    fn shared_states() {
        let graph = build(
            &[
                row(&["VTA", "Ind", "Neg", "Dub", "0Pl", "1Sg"], "ni<<aaba'w>>igosiinaadogenan"),
                row(&["VTA", "Ind", "Pos", "Neu", "0Sg", "1Sg"], "ni<<aaba'w>>aa"),
            ],
            &mut MulticharSymbols::new(),
        );

        let boundary = LexiconName::ClassBoundary {
            paradigm: "VTA".into(),
            class: "VTA_C".into(),
        };
        let flags = LexiconName::ClassFlags {
            paradigm: "VTA".into(),
            class: "VTA_C".into(),
        };
        assert_eq!(graph.entries(&boundary).unwrap().len(), 1);
        assert_eq!(graph.entries(&flags).unwrap().len(), 1);

        let endings: Vec<_> = graph
            .iter()
            .filter(|(name, _)| matches!(name, LexiconName::Endings(_)))
            .collect();
        assert_eq!(endings.len(), 1);
        assert_eq!(
            endings[0].0.to_string(),
            "VTA_Class=VTA_C_Prefix=NI_Order=Ind_Endings"
        );
        assert_eq!(endings[0].1.len(), 2);
    }

    #[test]
    fn check_flags_have_set_flags() {
        let mut symbols = MulticharSymbols::new();
        let graph = build(
            &[
                row(&["VTA", "Ind", "1Sg"], "ni<<aaba'w>>aa"),
                row(&["VTA", "Cnj", "1Sg"], "<<aaba'w>>ag"),
                row(&["VTA", "Imp", "2Sg"], "<<aaba'w>>in"),
            ],
            &mut symbols,
        );

        let flags = graph.flags();
        assert!(flags.iter().any(|f| f.to_string() == "@U.Order.Other@"));
        assert!(symbols.missing_set_flags(flags.iter()).is_empty());
        for flag in flags.iter() {
            assert!(symbols.contains(&flag.symbol()));
        }
    }

    #[test]
    fn dangling() {
        let mut graph = LexiconGraph::new("VerbRoot");
        assert!(graph.dangling_continuations().is_empty());

        graph.insert(LexcEntry::identity(
            graph.root().clone(),
            "0",
            LexiconName::Stems {
                paradigm: "VTA".into(),
            },
        ));
        graph.insert(LexcEntry::identity(
            LexiconName::Prefix {
                paradigm: "VTA".into(),
            },
            "0",
            LexiconName::External("PreverbRoot".into()),
        ));

        let dangling: Vec<String> = graph
            .dangling_continuations()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(dangling, vec!["VTA_Stems"]);
    }

    #[test]
    fn merge() {
        let mut symbols = MulticharSymbols::new();
        let mut left = build(&[row(&["VTA", "Ind", "1Sg"], "ni<<aaba'w>>aa")], &mut symbols);
        let right = build(&[row(&["VTA", "Cnj", "1Sg"], "<<aaba'w>>ag")], &mut symbols);
        let both = build(
            &[
                row(&["VTA", "Ind", "1Sg"], "ni<<aaba'w>>aa"),
                row(&["VTA", "Cnj", "1Sg"], "<<aaba'w>>ag"),
            ],
            &mut symbols,
        );

        left.merge(right);
        assert_eq!(left.entry_count(), both.entry_count());
        for (name, entries) in both.iter() {
            assert_eq!(left.entries(name), Some(entries));
        }
    }
}
