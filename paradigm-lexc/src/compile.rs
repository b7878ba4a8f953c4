//! Builds the lexicon graph of one configuration.
use std::path::PathBuf;

use crate::config::LexiconConfig;
use crate::flags::MulticharSymbols;
use crate::lexicon::{
    ClassMap, Classifier, DatabaseError, DatabaseSummary, LexicalDatabase, LexiconGraph,
    NoClassifier,
};
use crate::paradigm::{ParadigmTable, PathBuilder, SourceError};

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// A paradigm table could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The lexical database or its class map could not be read.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Counts gathered while reading the paradigm tables.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompileSummary {
    /// rows read from all tables
    pub rows: usize,
    /// rows without a usable surface form
    pub skipped_rows: usize,
    /// paths added to the graph, one per surface alternative
    pub paths: usize,
    /// set when a lexical database was added
    pub database: Option<DatabaseSummary>,
}

/// The graph of one configuration and how it was built.
#[derive(Debug, Clone)]
pub struct CompiledLexicon {
    /// the deduplicated sublexicons
    pub graph: LexiconGraph,
    /// counts of rows, paths and database entries
    pub summary: CompileSummary,
}

/// Reads the paradigm tables of a configuration into a [`LexiconGraph`].
pub struct LexiconCompiler<'a> {
    config: &'a LexiconConfig,
    source_path: PathBuf,
    database_dirs: Vec<PathBuf>,
    read_database: bool,
}

impl<'a> LexiconCompiler<'a> {
    /// `source_path` is the directory the configured table paths are
    /// relative to.
    pub fn new<P: Into<PathBuf>>(config: &'a LexiconConfig, source_path: P) -> LexiconCompiler<'a> {
        LexiconCompiler {
            config,
            source_path: source_path.into(),
            database_dirs: vec![],
            read_database: false,
        }
    }

    /// Also add the configured lexical database, searched for in `dirs`.
    pub fn with_lexical_database(mut self, dirs: Vec<PathBuf>) -> Self {
        self.database_dirs = dirs;
        self.read_database = true;
        self
    }

    /// Compile the regular or the irregular tables. Everything the paths
    /// use is declared in `symbols`.
    pub fn compile(&self, regular: bool, symbols: &mut MulticharSymbols) -> Result<CompiledLexicon, CompileError> {
        let config = self.config;
        symbols.declare(&config.multichar_symbols);

        let builder = PathBuilder::from_config(config, regular);
        let mut graph = LexiconGraph::new(&config.root_lexicon(regular));
        let mut summary = CompileSummary::default();

        for name in config.csv_files(regular) {
            let path = config.csv_path(&self.source_path, name);
            log::info!("Reading lexicon entries from {}", path.display());

            let table = ParadigmTable::from_path(&path)?;
            for (location, row) in table.rows(config)? {
                summary.rows += 1;
                match row {
                    Ok(row) => {
                        let paths = builder.build(&row, symbols);
                        summary.paths += paths.len();
                        graph.extend(paths);
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                        log::debug!("skipped row at {}", location);
                        summary.skipped_rows += 1;
                    }
                }
            }
        }

        if regular && self.read_database {
            summary.database = self.add_lexical_database(&mut graph)?;
        }

        log::info!(
            "{}: {} rows ({} skipped), {} sublexicons, {} entries",
            graph.root(),
            summary.rows,
            summary.skipped_rows,
            graph.len(),
            graph.entry_count()
        );

        Ok(CompiledLexicon { graph, summary })
    }

    fn add_lexical_database(&self, graph: &mut LexiconGraph) -> Result<Option<DatabaseSummary>, CompileError> {
        let name = match &self.config.lexical_database {
            Some(name) => name,
            None => return Ok(None),
        };

        let path = LexicalDatabase::locate(name, &self.database_dirs)?;
        log::info!("Reading external lexical database {}", path.display());
        let database = LexicalDatabase::from_path(&path)?;

        let classifier: Box<dyn Classifier> = match &self.config.class_map {
            Some(class_map) => {
                let path = LexicalDatabase::locate(class_map, &self.database_dirs)?;
                Box::new(ClassMap::from_path(path)?)
            }
            None => Box::new(NoClassifier),
        };

        Ok(Some(database.add_to_graph(graph, classifier.as_ref())))
    }
}
