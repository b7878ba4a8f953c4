//! Paradigm spreadsheet rows and the lexc paths generated from them.
use std::fmt::{self, Display};

use smol_str::SmolStr;

use crate::lexc::{escape, split_form, FormError, SplitForm};

pub mod path;
pub mod reader;

pub use self::path::{LexcPath, PathBuilder};
pub use self::reader::{ParadigmTable, SourceError};

/// Position of a row in its source table, used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLocation {
    pub table: SmolStr,
    pub line: u64,
}

impl Display for RowLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.table, self.line)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("{location}: no usable surface forms for {paradigm} {lemma:?}")]
    Empty {
        location: RowLocation,
        paradigm: SmolStr,
        lemma: SmolStr,
    },
}

/// One realization of an inflected form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceAlternative {
    /// the plain surface form, e.g. `niaaba'wigosiinaadogenan`
    pub surface: SmolStr,
    /// the segmented form, e.g. `ni<<aaba'w>>igosiinaadogenan`
    pub split: SplitForm,
}

/// One inflectional cell of a word. Lemma, stem and tags are escaped; each
/// tag carries its leading `+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParadigmRow {
    pub paradigm: SmolStr,
    pub class: SmolStr,
    pub lemma: SmolStr,
    pub stem: SmolStr,
    pub tags: Vec<SmolStr>,
    pub forms: Vec<SurfaceAlternative>,
}

impl ParadigmRow {
    /// Row without forms. `tags` are given without the leading `+`.
    pub fn new<S: AsRef<str>>(
        paradigm: &str,
        class: &str,
        lemma: &str,
        stem: &str,
        tags: &[S],
    ) -> ParadigmRow {
        ParadigmRow {
            paradigm: paradigm.into(),
            class: class.into(),
            lemma: escape(lemma),
            stem: escape(stem),
            tags: tags.iter().map(|t| tag(t.as_ref())).collect(),
            forms: vec![],
        }
    }

    /// Add a surface alternative given its plain and segmented spelling.
    pub fn with_form(mut self, surface: &str, split: &str) -> Result<ParadigmRow, FormError> {
        self.forms.push(SurfaceAlternative {
            surface: surface.into(),
            split: split_form(split)?,
        });
        Ok(self)
    }

    /// The tags as one analysis string, e.g. `+VTA+Ind+Neg`.
    pub fn analysis_tags(&self) -> String {
        self.tags.concat()
    }
}

/// `+<value>`, escaped.
pub(crate) fn tag(value: &str) -> SmolStr {
    escape(&format!("+{}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_prefixed_and_escaped() {
        let row = ParadigmRow::new("VTA", "VTA_C", "aaba'", "aaba'w", &["VTA", "Ind", "0Pl"]);
        assert_eq!(row.tags, vec!["+VTA", "+Ind", "+%0Pl"]);
        assert_eq!(row.analysis_tags(), "+VTA+Ind+%0Pl");
    }

    #[test]
    fn forms_are_split() {
        let row = ParadigmRow::new("NA", "NA_C", "makwa", "makw", &["NA"])
            .with_form("makwag", "<<makw>>ag")
            .unwrap();
        assert_eq!(row.forms.len(), 1);
        assert_eq!(row.forms[0].split.suffix, "ag");
        assert!(ParadigmRow::new("NA", "NA_C", "makwa", "makw", &["NA"])
            .with_form("x", "a<<b<<c>>d")
            .is_err());
    }

    #[test]
    fn location_display() {
        let location = RowLocation {
            table: "VTA_IND.csv".into(),
            line: 12,
        };
        assert_eq!(location.to_string(), "VTA_IND.csv:12");
    }
}
