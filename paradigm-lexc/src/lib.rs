/*! Compile inflection paradigm spreadsheets into lexc lexicon source.

Every row of a paradigm spreadsheet describes one inflected form of a word:
its lemma, stem, morphological tags and one or more surface realizations
segmented as `prefix<<stem>>suffix`. This library turns such rows into
chains of lexc sublexicon entries, restricts prefix/suffix combinations
with flag diacritics and merges everything into one deduplicated graph
that [`HFST`] or Xerox `lexc` can compile into a transducer.

[`HFST`]: (https://hfst.github.io)

# Usage examples

```ignore
use paradigm_lexc::compile::LexiconCompiler;
use paradigm_lexc::config::LexiconConfig;
use paradigm_lexc::flags::MulticharSymbols;

let config = LexiconConfig::from_path("verb_conf.json")?;
let mut symbols = MulticharSymbols::new();
let compiled = LexiconCompiler::new(&config, "BorderLakesMorph").compile(true, &mut symbols)?;
let lexc = paradigm_lexc::lexicon::writer::to_lexc_string(&compiled.graph)?;
```

The `csv2lexc` binary in the `paradigm-lexc-bin` crate drives a full run
over several configuration files.
*/

#![warn(missing_docs)]
pub mod compile;
pub mod config;
pub mod flags;
pub mod inventory;
pub mod lexc;
pub mod lexicon;
pub mod paradigm;

pub mod constants;
pub mod types;

#[cfg(test)]
mod test_log;
