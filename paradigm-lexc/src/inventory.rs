//! Inventory of the tag values used by a configuration's paradigm tables.
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde_json::{json, Map, Value};

use crate::config::LexiconConfig;
use crate::constants::EPSILON;
use crate::paradigm::{ParadigmTable, SourceError};

/// Feature values per feature and per table. The missing tag marker is
/// recorded as `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInventory {
    access_order: Vec<String>,
    pre_element: Option<(String, Vec<String>)>,
    features: BTreeMap<String, BTreeSet<String>>,
    tables: BTreeMap<String, BTreeSet<String>>,
}

impl TagInventory {
    /// Empty inventory. The access order is the pre-element slot, `Stem`
    /// and then the configured features.
    pub fn new<S: AsRef<str>>(config: &LexiconConfig, pre_element: &str, pre_element_tags: &[S]) -> Self {
        let mut access_order = vec![pre_element.to_string(), "Stem".to_string()];
        access_order.extend(config.morph_features.iter().cloned());

        TagInventory {
            access_order,
            pre_element: Some((
                pre_element.to_string(),
                pre_element_tags.iter().map(|t| t.as_ref().to_string()).collect(),
            )),
            features: config
                .morph_features
                .iter()
                .map(|f| (f.clone(), BTreeSet::new()))
                .collect(),
            tables: BTreeMap::new(),
        }
    }

    /// Read every regular and irregular table of `config`.
    pub fn collect<S: AsRef<str>>(
        config: &LexiconConfig,
        source_path: &Path,
        pre_element: &str,
        pre_element_tags: &[S],
    ) -> Result<Self, SourceError> {
        let mut inventory = TagInventory::new(config, pre_element, pre_element_tags);
        let names = config
            .csv_files(true)
            .iter()
            .chain(config.csv_files(false).iter());

        for name in names {
            let path = config.csv_path(source_path, name);
            log::info!("Reading {}", path.display());
            let table = ParadigmTable::from_path(&path)?;
            inventory.add_table(name, &table, config)?;
        }

        Ok(inventory)
    }

    pub fn add_table(&mut self, name: &str, table: &ParadigmTable, config: &LexiconConfig) -> Result<(), SourceError> {
        let mut table_tags = BTreeSet::new();

        for feature in config.morph_features.iter() {
            let values = table
                .column_values(feature)?
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| {
                    if v == config.missing_tag_marker {
                        EPSILON.to_string()
                    } else {
                        v.to_string()
                    }
                });
            for value in values {
                table_tags.insert(value.clone());
                self.features.entry(feature.clone()).or_default().insert(value);
            }
        }

        self.tables.entry(name.to_string()).or_default().extend(table_tags);
        Ok(())
    }

    pub fn feature(&self, feature: &str) -> Option<&BTreeSet<String>> {
        self.features.get(feature)
    }

    pub fn table(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.tables.get(name)
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("access_order".into(), json!(self.access_order));
        if let Some((slot, tags)) = &self.pre_element {
            map.insert(slot.clone(), json!(tags));
        }
        for (feature, values) in self.features.iter() {
            map.insert(feature.clone(), json!(values));
        }
        for (table, values) in self.tables.iter() {
            map.insert(table.clone(), json!(values));
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_tags() {
        let config: LexiconConfig = r#"{
            "root_lexicon": "VerbRoot",
            "morph_features": ["Paradigm", "Order", "Mode"],
            "regular_lexc_file": "verbs.lexc"
        }"#
        .parse()
        .unwrap();
        let table = ParadigmTable::from_reader(
            "VTA_IND",
            "Paradigm,Class,Lemma,Stem,Order,Mode\nVTA,VTA_C,a,a,Ind,Dub\nVTA,VTA_C,a,a,Ind,NONE\n"
                .as_bytes(),
        )
        .unwrap();

        let mut inventory = TagInventory::new(&config, "TensePreverbs", &["PVTense/gii", "0"]);
        inventory.add_table("VTA_IND", &table, &config).unwrap();

        let mode: Vec<&str> = inventory.feature("Mode").unwrap().iter().map(String::as_str).collect();
        assert_eq!(mode, vec!["0", "Dub"]);
        let all: Vec<&str> = inventory.table("VTA_IND").unwrap().iter().map(String::as_str).collect();
        assert_eq!(all, vec!["0", "Dub", "Ind", "VTA"]);

        let json = inventory.to_json();
        assert_eq!(
            json["access_order"],
            json!(["TensePreverbs", "Stem", "Paradigm", "Order", "Mode"])
        );
        assert_eq!(json["TensePreverbs"], json!(["PVTense/gii", "0"]));
        assert_eq!(json["Order"], json!(["Ind"]));
    }
}
