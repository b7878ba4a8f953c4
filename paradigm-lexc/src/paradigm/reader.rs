use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use hashbrown::HashMap;
use smol_str::SmolStr;

use super::{tag, ParadigmRow, RowError, RowLocation, SurfaceAlternative};
use crate::config::LexiconConfig;
use crate::lexc::{escape, split_form};

const REQUIRED_COLUMNS: [&str; 4] = ["Paradigm", "Class", "Lemma", "Stem"];

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read paradigm table {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{table} is missing required column `{column}`")]
    MissingColumn { table: SmolStr, column: String },
}

/// A paradigm spreadsheet held in memory.
#[derive(Debug)]
pub struct ParadigmTable {
    name: SmolStr,
    columns: HashMap<String, usize>,
    records: Vec<StringRecord>,
}

#[derive(Debug)]
struct FormColumns {
    index: usize,
    surface: usize,
    split: Option<usize>,
}

// Column positions of everything a row is built from.
#[derive(Debug)]
struct RowLayout {
    paradigm: usize,
    class: usize,
    lemma: usize,
    stem: usize,
    features: Vec<usize>,
    forms: Vec<FormColumns>,
}

impl ParadigmTable {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ParadigmTable, SourceError> {
        let path = path.as_ref();
        let csv_error = |source| SourceError::Csv {
            path: path.to_path_buf(),
            source,
        };
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(csv_error)?;
        let name = path
            .file_name()
            .map(|x| x.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Self::from_csv(name.into(), reader).map_err(csv_error)
    }

    /// Read a table from any reader; `name` identifies it in diagnostics.
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<ParadigmTable, SourceError> {
        let reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        Self::from_csv(name.into(), reader).map_err(|source| SourceError::Csv {
            path: PathBuf::from(name),
            source,
        })
    }

    fn from_csv<R: Read>(name: SmolStr, mut reader: csv::Reader<R>) -> Result<ParadigmTable, csv::Error> {
        let columns = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, header)| (header.trim().to_string(), i))
            .collect();
        let records = reader.records().collect::<Result<Vec<_>, _>>()?;

        Ok(ParadigmTable {
            name,
            columns,
            records,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    fn column(&self, column: &str) -> Result<usize, SourceError> {
        self.columns
            .get(column)
            .copied()
            .ok_or_else(|| SourceError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Every cell of one column, in row order.
    pub fn column_values<'a>(
        &'a self,
        column: &str,
    ) -> Result<impl Iterator<Item = &'a str> + 'a, SourceError> {
        let index = self.column(column)?;
        Ok(self
            .records
            .iter()
            .map(move |record| record.get(index).unwrap_or("")))
    }

    fn layout(&self, config: &LexiconConfig) -> Result<RowLayout, SourceError> {
        let [paradigm, class, lemma, stem] = [
            self.column(REQUIRED_COLUMNS[0])?,
            self.column(REQUIRED_COLUMNS[1])?,
            self.column(REQUIRED_COLUMNS[2])?,
            self.column(REQUIRED_COLUMNS[3])?,
        ];
        let features = config
            .morph_features
            .iter()
            .map(|feature| self.column(feature))
            .collect::<Result<Vec<_>, _>>()?;
        let forms = (0..config.max_forms)
            .filter_map(|index| {
                let surface = *self.columns.get(&format!("Form{}Surface", index))?;
                let split = self.columns.get(&format!("Form{}Split", index)).copied();
                Some(FormColumns {
                    index,
                    surface,
                    split,
                })
            })
            .collect();

        Ok(RowLayout {
            paradigm,
            class,
            lemma,
            stem,
            features,
            forms,
        })
    }

    /// Parse every row. Fails up front if a required or configured feature
    /// column is missing; rows without usable forms come back as `Err`.
    pub fn rows<'a>(
        &'a self,
        config: &'a LexiconConfig,
    ) -> Result<impl Iterator<Item = (RowLocation, Result<ParadigmRow, RowError>)> + 'a, SourceError>
    {
        let layout = self.layout(config)?;

        Ok(self.records.iter().enumerate().map(move |(i, record)| {
            let location = RowLocation {
                table: self.name.clone(),
                line: record
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(i as u64 + 2),
            };
            let row = parse_row(record, &layout, config, &location);
            (location, row)
        }))
    }
}

fn parse_row(
    record: &StringRecord,
    layout: &RowLayout,
    config: &LexiconConfig,
    location: &RowLocation,
) -> Result<ParadigmRow, RowError> {
    let cell = |i: usize| record.get(i).unwrap_or("").trim();

    let paradigm = SmolStr::from(cell(layout.paradigm));
    let lemma = escape(cell(layout.lemma));

    let tags = layout
        .features
        .iter()
        .map(|&i| cell(i))
        .filter(|value| !value.is_empty() && *value != config.missing_tag_marker)
        .map(tag)
        .collect();

    let mut forms = Vec::with_capacity(layout.forms.len());
    for columns in layout.forms.iter() {
        let surface = cell(columns.surface);
        if surface.is_empty() || surface == config.missing_form_marker {
            continue;
        }

        let split = match columns.split {
            Some(i) => cell(i),
            None => {
                log::warn!(
                    "{}: skipping form {:?}: no Form{}Split column",
                    location,
                    surface,
                    columns.index
                );
                continue;
            }
        };

        match split_form(split) {
            Ok(split) => forms.push(SurfaceAlternative {
                surface: surface.into(),
                split,
            }),
            Err(e) => log::warn!("{}: skipping form {:?}: {}", location, surface, e),
        }
    }

    if forms.is_empty() {
        return Err(RowError::Empty {
            location: location.clone(),
            paradigm,
            lemma,
        });
    }

    Ok(ParadigmRow {
        paradigm,
        class: cell(layout.class).into(),
        lemma,
        stem: escape(cell(layout.stem)),
        tags,
        forms,
    })
}
