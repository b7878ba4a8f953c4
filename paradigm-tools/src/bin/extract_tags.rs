use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;

use paradigm_lexc::config::LexiconConfig;
use paradigm_lexc::inventory::TagInventory;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "extract-tags",
    about = "Extract the tag values used in paradigm spreadsheets as JSON."
)]
struct Opts {
    #[structopt(long, parse(from_os_str), help = "JSON configuration file. E.g. verb_conf.json")]
    config_file: PathBuf,

    #[structopt(
        long,
        parse(from_os_str),
        help = "Directory containing the paradigm spreadsheets"
    )]
    source_path: PathBuf,

    #[structopt(long, help = "Name of the pre-element slot. E.g. TensePreverbs")]
    pre_element: String,

    #[structopt(
        long,
        use_delimiter = true,
        help = "Pre-element tags which can occur before the stem, separated by commas"
    )]
    pre_element_tags: Vec<String>,

    #[structopt(long, parse(from_os_str), help = "Output JSON file")]
    output_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let opts = Opts::from_args();

    log::info!("Processing configuration file {}", opts.config_file.display());
    let config = LexiconConfig::from_path(&opts.config_file)
        .with_context(|| format!("Invalid configuration {}", opts.config_file.display()))?;

    let inventory = TagInventory::collect(
        &config,
        &opts.source_path,
        &opts.pre_element,
        &opts.pre_element_tags,
    )?;

    log::info!("Writing output JSON file {}", opts.output_file.display());
    let file = File::create(&opts.output_file)
        .with_context(|| format!("Failed to create {}", opts.output_file.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &inventory.to_json())?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
