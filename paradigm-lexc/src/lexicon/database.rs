use std::io::Read;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use serde::Deserialize;
use smol_str::SmolStr;

use super::LexiconGraph;
use crate::lexc::{escape, LexcEntry, LexiconName};

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Failed to read lexical database {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Lexical database {name} not found in any of {dirs:?}")]
    NotFound { name: String, dirs: Vec<PathBuf> },
}

/// A dictionary entry. Either already classified (`Lemma, Stem, Class,
/// Paradigm`) or carrying only the dictionary's part of speech
/// (`lemma, stem, part_of_speech_id`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseRecord {
    #[serde(alias = "Lemma")]
    pub lemma: String,
    #[serde(alias = "Stem")]
    pub stem: String,
    #[serde(default, alias = "Class")]
    pub class: Option<String>,
    #[serde(default, alias = "Paradigm")]
    pub paradigm: Option<String>,
    #[serde(default)]
    pub part_of_speech_id: Option<String>,
}

/// Assigns an inflectional class like `VTI_i` to a dictionary entry.
pub trait Classifier {
    fn classify(&self, record: &DatabaseRecord) -> Option<SmolStr>;
}

/// Classifies nothing; only pre-classified entries are used.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClassifier;

impl Classifier for NoClassifier {
    fn classify(&self, _record: &DatabaseRecord) -> Option<SmolStr> {
        None
    }
}

#[derive(Debug, Deserialize)]
struct ClassMapRow {
    part_of_speech_id: String,
    #[serde(alias = "Class")]
    class: String,
}

/// Classifier backed by a table from dictionary part of speech (e.g.
/// `vti3`) to inflectional class.
#[derive(Debug, Default, Clone)]
pub struct ClassMap {
    classes: HashMap<String, SmolStr>,
}

impl ClassMap {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ClassMap, DatabaseError> {
        let path = path.as_ref();
        let csv_error = |source| DatabaseError::Csv {
            path: path.to_path_buf(),
            source,
        };
        let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;
        let mut classes = HashMap::new();
        for row in reader.deserialize::<ClassMapRow>() {
            let row = row.map_err(csv_error)?;
            classes.insert(row.part_of_speech_id.trim().to_string(), row.class.trim().into());
        }
        Ok(ClassMap { classes })
    }

    pub fn insert(&mut self, part_of_speech_id: &str, class: &str) {
        self.classes.insert(part_of_speech_id.to_string(), class.into());
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Classifier for ClassMap {
    fn classify(&self, record: &DatabaseRecord) -> Option<SmolStr> {
        let pos = record.part_of_speech_id.as_ref()?;
        self.classes.get(pos.trim()).cloned()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseSummary {
    /// records read
    pub checked: usize,
    /// records added as stems
    pub added: usize,
    /// unclassified records and records of undefined lexicons
    pub skipped: usize,
}

/// Lexemes from an external dictionary, added as stems to paradigms the
/// spreadsheets already define.
#[derive(Debug, Clone)]
pub struct LexicalDatabase {
    name: String,
    records: Vec<DatabaseRecord>,
    lines: Vec<u64>,
}

#[derive(Debug, thiserror::Error)]
enum SkipReason {
    #[error("no inflectional class")]
    Unclassified,
    #[error("{0} is not defined by the paradigm tables")]
    UnknownLexicon(LexiconName),
}

impl LexicalDatabase {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<LexicalDatabase, DatabaseError> {
        let path = path.as_ref();
        let csv_error = |source| DatabaseError::Csv {
            path: path.to_path_buf(),
            source,
        };
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(csv_error)?;
        Self::from_csv(path.to_string_lossy().to_string(), reader).map_err(csv_error)
    }

    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<LexicalDatabase, DatabaseError> {
        let reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        Self::from_csv(name.to_string(), reader).map_err(|source| DatabaseError::Csv {
            path: PathBuf::from(name),
            source,
        })
    }

    fn from_csv<R: Read>(name: String, mut reader: csv::Reader<R>) -> Result<LexicalDatabase, csv::Error> {
        let headers = reader.headers()?.clone();
        let mut records = vec![];
        let mut lines = vec![];

        for (i, record) in reader.records().enumerate() {
            let record = record?;
            lines.push(
                record
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(i as u64 + 2),
            );
            records.push(record.deserialize(Some(&headers))?);
        }

        Ok(LexicalDatabase {
            name,
            records,
            lines,
        })
    }

    /// The first `dirs` entry containing `name`.
    pub fn locate<P: AsRef<Path>>(name: &str, dirs: &[P]) -> Result<PathBuf, DatabaseError> {
        dirs.iter()
            .map(|dir| dir.as_ref().join(name))
            .find(|path| path.is_file())
            .ok_or_else(|| DatabaseError::NotFound {
                name: name.to_string(),
                dirs: dirs.iter().map(|d| d.as_ref().to_path_buf()).collect(),
            })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DatabaseRecord] {
        &self.records
    }

    /// Add `<P>_Stems --(lemma:stem)--> <P>_Class=<C>_Boundary` for every
    /// record whose stem and class boundary lexicons exist in `graph`.
    pub fn add_to_graph<C: Classifier + ?Sized>(&self, graph: &mut LexiconGraph, classifier: &C) -> DatabaseSummary {
        let mut summary = DatabaseSummary {
            checked: self.records.len(),
            ..DatabaseSummary::default()
        };

        for (record, line) in self.records.iter().zip(self.lines.iter()) {
            match stem_entry(record, graph, classifier) {
                Ok(entry) => {
                    graph.insert(entry);
                    summary.added += 1;
                }
                Err(reason) => {
                    log::warn!(
                        "{}:{}: skipping lexical entry {:?}: {}",
                        self.name,
                        line,
                        record.lemma,
                        reason
                    );
                    summary.skipped += 1;
                }
            }
        }

        log::info!(
            "Checked {} lexical entries. Added {} entries to lexc file. Skipped {} invalid ones",
            summary.checked,
            summary.added,
            summary.skipped
        );
        summary
    }
}

// `VTI_i` belongs to paradigm `VTI`.
fn paradigm_of(class: &str) -> &str {
    class.split('_').next().unwrap_or(class)
}

fn stem_entry<C: Classifier + ?Sized>(
    record: &DatabaseRecord,
    graph: &LexiconGraph,
    classifier: &C,
) -> Result<LexcEntry, SkipReason> {
    let class: SmolStr = match record.class.as_deref().map(str::trim) {
        Some(class) if !class.is_empty() => class.into(),
        _ => classifier
            .classify(record)
            .ok_or(SkipReason::Unclassified)?,
    };
    let paradigm: SmolStr = match record.paradigm.as_deref().map(str::trim) {
        Some(paradigm) if !paradigm.is_empty() => paradigm.into(),
        _ => paradigm_of(&class).into(),
    };

    let stems = LexiconName::Stems {
        paradigm: paradigm.clone(),
    };
    let boundary = LexiconName::ClassBoundary { paradigm, class };
    for name in [&stems, &boundary].iter() {
        if !graph.contains(name) {
            return Err(SkipReason::UnknownLexicon((*name).clone()));
        }
    }

    Ok(LexcEntry::new(
        stems,
        escape(record.lemma.trim()),
        escape(record.stem.trim()),
        boundary,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrderTags;
    use crate::flags::MulticharSymbols;
    use crate::paradigm::{ParadigmRow, PathBuilder};
    use crate::test_log;

    fn graph() -> LexiconGraph {
        let order_tags = OrderTags::default();
        let builder = PathBuilder::new(true, None, &order_tags);
        let mut graph = LexiconGraph::new("VerbRoot");
        let row = ParadigmRow::new("VTI", "VTI_i", "wanitoon", "wanit", &["VTI", "Ind", "1Sg"])
            .with_form("niwanitoon", "ni<<wanit>>oon")
            .unwrap();
        graph.extend(builder.build(&row, &mut MulticharSymbols::new()));
        graph
    }

    fn stems(graph: &LexiconGraph) -> Vec<String> {
        graph
            .entries(&LexiconName::Stems {
                paradigm: "VTI".into(),
            })
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn classified() {
        let db = LexicalDatabase::from_reader(
            "verbs.csv",
            "Lemma,Stem,Class,Paradigm\nagindan,agind,VTI_i,VTI\nmakwa,makw,NA_C,NA\n".as_bytes(),
        )
        .unwrap();
        let mut graph = graph();
        let summary = db.add_to_graph(&mut graph, &NoClassifier);

        assert_eq!(
            summary,
            DatabaseSummary {
                checked: 2,
                added: 1,
                skipped: 1
            }
        );
        assert_eq!(
            stems(&graph),
            vec![
                "agindan:agind VTI_Class=VTI_i_Boundary ;",
                "wanitoon:wanit VTI_Class=VTI_i_Boundary ;",
            ]
        );
    }

    #[test]
    fn class_map() {
        let db = LexicalDatabase::from_reader(
            "opd.csv",
            "lemma,stem,part_of_speech_id\nagindan,agind,vti3\nbiindigen,biindigen,vai\n".as_bytes(),
        )
        .unwrap();
        let mut classes = ClassMap::default();
        classes.insert("vti3", "VTI_i");

        let mut graph = graph();
        let summary = db.add_to_graph(&mut graph, &classes);
        assert_eq!(summary.added, 1);
        assert_eq!(summary.skipped, 1);
        assert!(stems(&graph).contains(&"agindan:agind VTI_Class=VTI_i_Boundary ;".to_string()));

        let mut graph = self::graph();
        let summary = db.add_to_graph(&mut graph, &NoClassifier);
        assert_eq!(summary.added, 0);
        assert_eq!(summary.skipped, 2);
    }

    #[test]
    fn skipped_rows_are_reported() {
        test_log::init();
        let db = LexicalDatabase::from_reader(
            "verbs.csv",
            "Lemma,Stem,Class,Paradigm\nagindan,agind,VTI_i,VTI\nozhitoon,ozhit,VTI_am,VTI\n".as_bytes(),
        )
        .unwrap();
        let mut graph = graph();
        let before = graph.entry_count();
        assert_eq!(db.add_to_graph(&mut graph, &NoClassifier).skipped, 1);
        assert_eq!(graph.entry_count(), before + 1);
        assert!(test_log::warned_about(
            "verbs.csv:3: skipping lexical entry \"ozhitoon\": VTI_Class=VTI_am_Boundary is not defined"
        ));

        let db = LexicalDatabase::from_reader(
            "opd.csv",
            "lemma,stem,part_of_speech_id\nnagamo,nagamo,vai\n".as_bytes(),
        )
        .unwrap();
        assert_eq!(db.add_to_graph(&mut graph, &NoClassifier).skipped, 1);
        assert!(test_log::warned_about(
            "opd.csv:2: skipping lexical entry \"nagamo\": no inflectional class"
        ));
    }

    #[test]
    fn paradigm_from_class() {
        assert_eq!(paradigm_of("VTI_i"), "VTI");
        assert_eq!(paradigm_of("VAI_VV_x"), "VAI");
        assert_eq!(paradigm_of("NA"), "NA");
    }
}
