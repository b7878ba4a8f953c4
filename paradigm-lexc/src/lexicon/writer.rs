//! lexc serialization.
//!
//! `root.lexc` carries the one `Multichar_Symbols` section of a run and
//! `LEXICON Root`. The per part-of-speech files only hold sublexicons, so
//! they can be concatenated after `root.lexc`.
use std::io::{self, Write};

use super::comment::comment_block;
use super::LexiconGraph;
use crate::flags::MulticharSymbols;

/// `Multichar_Symbols` followed by every registered symbol on one line.
pub fn write_multichar_symbols<W: Write>(symbols: &MulticharSymbols, out: &mut W) -> io::Result<()> {
    writeln!(out, "Multichar_Symbols")?;
    let line = symbols.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(" ");
    writeln!(out, "{}", line)?;
    writeln!(out)
}

/// Every sublexicon of one graph, root lexicon first.
pub fn write_lexc<W: Write>(graph: &LexiconGraph, out: &mut W) -> io::Result<()> {
    log::info!("Writing {} sublexicons", graph.len());
    for (name, entries) in graph.iter() {
        log::debug!("  {} ({} entries)", name, entries.len());

        match comment_block(name) {
            Ok(block) => writeln!(out, "{}\n", block)?,
            Err(e) => log::debug!("No comment for {}: {}", name, e),
        }

        writeln!(out, "LEXICON {}", name)?;
        for entry in entries {
            writeln!(out, "{}", entry)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// [`write_lexc`] into a string.
pub fn to_lexc_string(graph: &LexiconGraph) -> io::Result<String> {
    let mut buf = Vec::new();
    write_lexc(graph, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// The `Multichar_Symbols` section of the whole run, then `LEXICON Root`
/// continuing into the root lexicon of every part of speech.
pub fn write_root_lexc<W, S>(symbols: &MulticharSymbols, roots: &[S], out: &mut W) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    write_multichar_symbols(symbols, out)?;
    writeln!(out, "LEXICON Root")?;
    for root in roots {
        writeln!(out, "{} ;", root.as_ref())?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrderTags;
    use crate::paradigm::{ParadigmRow, PathBuilder};

    fn graph(symbols: &mut MulticharSymbols) -> LexiconGraph {
        let order_tags = OrderTags::default();
        let builder = PathBuilder::new(true, None, &order_tags);
        let mut graph = LexiconGraph::new("VerbRoot");
        for (tags, split) in [
            (["VTA", "Ind", "1Sg"], "ni<<aaba'w>>aa"),
            (["VTA", "Ind", "2Sg"], "gi<<aaba'w>>aa"),
            (["VTA", "Cnj", "1Sg"], "<<aaba'w>>ag"),
        ]
        .iter()
        {
            let row = ParadigmRow::new("VTA", "VTA_C", "aaba'", "aaba'w", tags)
                .with_form("x", split)
                .unwrap();
            graph.extend(builder.build(&row, symbols));
        }
        graph
    }

    #[test]
    fn deterministic() {
        let mut symbols = MulticharSymbols::new();
        let graph = graph(&mut symbols);

        let first = to_lexc_string(&graph).unwrap();
        let second = to_lexc_string(&graph).unwrap();
        assert_eq!(first, second);

        let graph_again = self::graph(&mut MulticharSymbols::new());
        assert_eq!(first, to_lexc_string(&graph_again).unwrap());
    }

    #[test]
    fn layout() {
        let graph = graph(&mut MulticharSymbols::new());
        let lexc = to_lexc_string(&graph).unwrap();
        let lines: Vec<&str> = lexc.lines().collect();

        assert!(!lexc.contains("Multichar_Symbols"));
        // The root lexicon has no comment block.
        assert_eq!(lines[0], "LEXICON VerbRoot");
        assert_eq!(lines[1], "@P.Paradigm.VTA@ VTA_Prefix ;");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "!".repeat(80));

        let prefix = lines.iter().position(|l| *l == "LEXICON VTA_Prefix").unwrap();
        assert_eq!(
            &lines[prefix + 1..prefix + 4],
            &[
                "@P.Prefix.GI@:@P.Prefix.GI@gi VTA_PrefixBoundary ;",
                "@P.Prefix.NI@:@P.Prefix.NI@ni VTA_PrefixBoundary ;",
                "@P.Prefix.NONE@ VTA_PrefixBoundary ;",
            ]
        );
        assert!(lexc.contains(
            "LEXICON VTA_Class=VTA_C_Prefix=NONE_Order=Cnj_Endings\n+VTA+Cnj+1Sg:ag # ;\n"
        ));
    }

    #[test]
    fn symbols_sorted() {
        let mut symbols = MulticharSymbols::new();
        symbols.insert("+VTA");
        symbols.insert("%>%>");
        symbols.insert("%<%<");
        let mut out = Vec::new();
        write_multichar_symbols(&symbols, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Multichar_Symbols\n%<%< %>%> +VTA\n\n"
        );
    }

    #[test]
    fn root_lexc() {
        let mut symbols = MulticharSymbols::new();
        symbols.insert("+VTA");
        let mut out = Vec::new();
        write_root_lexc(&symbols, &["VerbRoot", "VerbRootIrregular", "NounRoot"], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Multichar_Symbols\n+VTA\n\nLEXICON Root\nVerbRoot ;\nVerbRootIrregular ;\nNounRoot ;\n\n"
        );
    }

    #[test]
    fn files_concatenate_after_root() {
        let mut symbols = MulticharSymbols::new();
        symbols.declare(&["PV/gii"]);
        let verbs = graph(&mut symbols);
        let mut nouns = LexiconGraph::new("NounRoot");
        let order_tags = OrderTags::default();
        let row = ParadigmRow::new("NA", "NA_C", "makwa", "makw", &["NA", "Pl"])
            .with_form("makwag", "<<makw>>ag")
            .unwrap();
        nouns.extend(PathBuilder::new(true, None, &order_tags).build(&row, &mut symbols));

        let mut out = Vec::new();
        write_root_lexc(&symbols, &["VerbRoot", "NounRoot"], &mut out).unwrap();
        write_lexc(&verbs, &mut out).unwrap();
        write_lexc(&nouns, &mut out).unwrap();
        let lexc = String::from_utf8(out).unwrap();

        assert!(lexc.starts_with("Multichar_Symbols\n"));
        assert_eq!(lexc.matches("Multichar_Symbols").count(), 1);
        let symbols_line = lexc.lines().nth(1).unwrap();
        for symbol in ["PV%/gii", "+NA", "+VTA", "@P.Paradigm.NA@", "@U.Order.Cnj@"].iter() {
            assert!(symbols_line.split(' ').any(|s| s == *symbol), "{} missing", symbol);
        }
        let root = lexc.find("LEXICON Root\n").unwrap();
        assert!(root < lexc.find("LEXICON VerbRoot\n").unwrap());
        assert!(root < lexc.find("LEXICON NounRoot\n").unwrap());
    }
}
