//! Per part-of-speech compilation settings, read from JSON.
use std::borrow::Borrow;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use smol_str::SmolStr;

use crate::constants::MAX_FORMS;
use crate::lexc::escape;
use crate::types::Order;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse configuration")]
    Json(#[from] serde_json::Error),
    #[error("Configuration field `{0}` must not be empty")]
    Empty(&'static str),
    #[error("`prefix_root` is set but `pos` is missing; the pre-element slot needs both")]
    PrefixRootWithoutPos,
}

/// Tags which select the clause order of an ending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTags {
    pub independent: String,
    pub conjunct: String,
}

impl Default for OrderTags {
    fn default() -> OrderTags {
        OrderTags {
            independent: "Ind".into(),
            conjunct: "Cnj".into(),
        }
    }
}

impl OrderTags {
    /// `Ind` if the independent tag occurs in `tags`, else `Cnj` if the
    /// conjunct tag does, else `Other`. Tags are compared in their escaped,
    /// `+`-prefixed form.
    pub fn order_of<S: Borrow<str>>(&self, tags: &[S]) -> Order {
        let has = |tag: &str| {
            let wanted = escape(&format!("+{}", tag));
            tags.iter().any(|t| {
                let t: &str = t.borrow();
                t == wanted.as_str()
            })
        };

        if has(&self.independent) {
            Order::Ind
        } else if has(&self.conjunct) {
            Order::Cnj
        } else {
            Order::Other
        }
    }
}

/// Where the pre-element (preverb/prenoun) slot sits in regular paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreElementSlot {
    /// Part of speech; names the shared `<pos>Stems` gate.
    pub pos: SmolStr,
    /// Externally defined lexicon entered after the prefix boundary. When
    /// unset the prefix boundary continues straight to the gate.
    pub prefix_root: Option<SmolStr>,
}

/// Compilation settings of one part of speech.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// root lexicon of the part of speech, e.g. `VerbRoot`
    pub root_lexicon: String,
    /// directory of the paradigm tables, relative to the source path
    #[serde(default)]
    pub morphology_source_path: PathBuf,
    /// tables of regular lexemes, without the `.csv` extension
    #[serde(default)]
    pub regular_csv_files: Vec<String>,
    /// tables of irregular lexemes, without the `.csv` extension
    #[serde(default)]
    pub irregular_csv_files: Vec<String>,
    /// feature columns turned into tags, in analysis order
    pub morph_features: Vec<String>,
    /// cell value of a feature which contributes no tag
    #[serde(default = "default_missing_marker")]
    pub missing_tag_marker: String,
    /// cell value of an absent surface form
    #[serde(default = "default_missing_marker")]
    pub missing_form_marker: String,
    /// symbols declared in addition to tags and flags
    #[serde(default)]
    pub multichar_symbols: Vec<String>,
    /// part of speech naming the pre-element gate, e.g. `Verb`
    #[serde(default, deserialize_with = "optional_name")]
    pub pos: Option<String>,
    /// external lexicon entered after the prefix boundary
    #[serde(default, deserialize_with = "optional_name")]
    pub prefix_root: Option<String>,
    /// dictionary CSV whose lexemes are added as stems
    #[serde(default, deserialize_with = "optional_name")]
    pub lexical_database: Option<String>,
    /// CSV mapping dictionary parts of speech to classes
    #[serde(default, deserialize_with = "optional_name")]
    pub class_map: Option<String>,
    /// output file of the regular graph
    pub regular_lexc_file: String,
    /// output file of the irregular graph
    #[serde(default, deserialize_with = "optional_name")]
    pub irregular_lexc_file: Option<String>,
    /// upper bound (exclusive) of `Form{i}Surface` indices
    #[serde(default = "default_max_forms")]
    pub max_forms: usize,
    /// tags selecting the clause order
    #[serde(default)]
    pub order_tags: OrderTags,
}

fn default_missing_marker() -> String {
    "NONE".into()
}

const fn default_max_forms() -> usize {
    MAX_FORMS
}

// Older configuration files spell an unset value as the string "None".
fn optional_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty() && v != "None"))
}

impl std::str::FromStr for LexiconConfig {
    type Err = ConfigError;

    fn from_str(string: &str) -> Result<LexiconConfig, ConfigError> {
        let config: LexiconConfig = serde_json::from_str(string)?;
        config.validate()?;
        Ok(config)
    }
}

impl LexiconConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<LexiconConfig, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: LexiconConfig = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.root_lexicon.is_empty() {
            return Err(ConfigError::Empty("root_lexicon"));
        }
        if self.morph_features.is_empty() {
            return Err(ConfigError::Empty("morph_features"));
        }
        if self.regular_lexc_file.is_empty() {
            return Err(ConfigError::Empty("regular_lexc_file"));
        }
        if self.prefix_root.is_some() && self.pos.is_none() {
            return Err(ConfigError::PrefixRootWithoutPos);
        }
        Ok(())
    }

    pub fn pre_element_slot(&self) -> Option<PreElementSlot> {
        self.pos.as_ref().map(|pos| PreElementSlot {
            pos: SmolStr::new(pos),
            prefix_root: self.prefix_root.as_ref().map(SmolStr::new),
        })
    }

    /// Root lexicon of the regular or the irregular graph.
    pub fn root_lexicon(&self, regular: bool) -> String {
        if regular {
            self.root_lexicon.clone()
        } else {
            format!("{}Irregular", self.root_lexicon)
        }
    }

    pub fn csv_files(&self, regular: bool) -> &[String] {
        if regular {
            &self.regular_csv_files
        } else {
            &self.irregular_csv_files
        }
    }

    /// `<source_path>/<morphology_source_path>/<name>.csv`
    pub fn csv_path(&self, source_path: &Path, name: &str) -> PathBuf {
        source_path
            .join(&self.morphology_source_path)
            .join(format!("{}.csv", name))
    }

    /// Output file of the regular or the irregular graph, if any.
    pub fn lexc_file(&self, regular: bool) -> Option<&str> {
        if regular {
            Some(&self.regular_lexc_file)
        } else {
            self.irregular_lexc_file.as_deref()
        }
    }
}
