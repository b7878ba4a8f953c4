use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use structopt::StructOpt;

use paradigm_lexc::compile::LexiconCompiler;
use paradigm_lexc::config::LexiconConfig;
use paradigm_lexc::flags::MulticharSymbols;
use paradigm_lexc::lexicon::writer::{write_lexc, write_root_lexc};
use paradigm_lexc::lexicon::LexiconGraph;

const ROOT_LEXC_FILE: &str = "root.lexc";

#[derive(Debug, StructOpt)]
#[structopt(
    name = "csv2lexc",
    about = "Compile paradigm spreadsheets into lexc source files."
)]
struct Opts {
    #[structopt(
        long,
        required = true,
        use_delimiter = true,
        parse(from_os_str),
        help = "JSON configuration files, separated by commas. E.g. verb_conf.json,noun_conf.json"
    )]
    config_files: Vec<PathBuf>,

    #[structopt(
        long,
        parse(from_os_str),
        help = "Directory containing the paradigm spreadsheets"
    )]
    source_path: PathBuf,

    #[structopt(long, parse(from_os_str), help = "Output directory for lexc files")]
    lexc_path: PathBuf,

    #[structopt(
        long,
        use_delimiter = true,
        parse(from_os_str),
        help = "Directories searched for lexical databases, separated by commas"
    )]
    database_paths: Vec<PathBuf>,

    #[structopt(long, help = "Do not add lexemes from external lexical databases")]
    skip_lexical_database: bool,

    #[structopt(short, long, help = "Log per-lexicon detail")]
    verbose: bool,
}

struct Output {
    path: PathBuf,
    graph: LexiconGraph,
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn compile_config(
    opts: &Opts,
    config_path: &Path,
    symbols: &mut MulticharSymbols,
    outputs: &mut Vec<Output>,
    roots: &mut Vec<String>,
) -> anyhow::Result<()> {
    log::info!("Processing configuration file {}", config_path.display());
    let config = LexiconConfig::from_path(config_path)
        .with_context(|| format!("Invalid configuration {}", config_path.display()))?;

    let mut compiler = LexiconCompiler::new(&config, &opts.source_path);
    if !opts.skip_lexical_database {
        compiler = compiler.with_lexical_database(opts.database_paths.clone());
    }

    for regular in [true, false].iter().copied() {
        let file = match config.lexc_file(regular) {
            Some(file) => file,
            None => continue,
        };
        let compiled = compiler
            .compile(regular, symbols)
            .with_context(|| format!("Failed to compile {}", config_path.display()))?;

        roots.push(config.root_lexicon(regular));
        outputs.push(Output {
            path: opts.lexc_path.join(file),
            graph: compiled.graph,
        });
    }

    Ok(())
}

fn write_output(output: &Output, symbols: &MulticharSymbols) -> anyhow::Result<()> {
    for name in output.graph.dangling_continuations() {
        log::warn!(
            "{}: continuation lexicon {} is never defined",
            output.path.display(),
            name
        );
    }
    for flag in symbols.missing_set_flags(output.graph.flags().iter()) {
        log::warn!(
            "{}: {} is never set",
            output.path.display(),
            flag
        );
    }

    log::info!("Writing {}", output.path.display());
    let file = File::create(&output.path)
        .with_context(|| format!("Failed to create {}", output.path.display()))?;
    let mut writer = BufWriter::new(file);
    write_lexc(&output.graph, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    init_logger(opts.verbose);

    std::fs::create_dir_all(&opts.lexc_path)
        .with_context(|| format!("Failed to create {}", opts.lexc_path.display()))?;

    let mut symbols = MulticharSymbols::new();
    let mut outputs = vec![];
    let mut roots = vec![];

    for config_path in opts.config_files.iter() {
        compile_config(&opts, config_path, &mut symbols, &mut outputs, &mut roots)?;
    }

    for output in outputs.iter() {
        write_output(output, &symbols)?;
    }

    let root_path = opts.lexc_path.join(ROOT_LEXC_FILE);
    log::info!("Writing {}", root_path.display());
    let mut writer = BufWriter::new(
        File::create(&root_path)
            .with_context(|| format!("Failed to create {}", root_path.display()))?,
    );
    write_root_lexc(&symbols, &roots, &mut writer)?;
    writer.flush()?;

    Ok(())
}
