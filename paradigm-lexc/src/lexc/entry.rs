use std::cmp::Ordering;
use std::fmt::{self, Display};

use smol_str::SmolStr;

use super::LexiconName;
use crate::constants::EPSILON;

/// One line of a lexc sublexicon:
///
/// ```text
/// LEXICON Lex
/// upper:lower NextLex ;
/// ```
///
/// is `LexcEntry { lexicon: Lex, analysis: "upper", surface: "lower", next: NextLex }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LexcEntry {
    /// the sublexicon the entry belongs to
    pub lexicon: LexiconName,
    /// upper (analysis) side
    pub analysis: SmolStr,
    /// lower (surface) side
    pub surface: SmolStr,
    /// continuation lexicon
    pub next: LexiconName,
}

impl LexcEntry {
    /// creates an entry
    pub fn new(
        lexicon: LexiconName,
        analysis: impl Into<SmolStr>,
        surface: impl Into<SmolStr>,
        next: LexiconName,
    ) -> LexcEntry {
        LexcEntry {
            lexicon,
            analysis: analysis.into(),
            surface: surface.into(),
            next,
        }
    }

    /// creates an entry with the same symbol on both sides
    pub fn identity(lexicon: LexiconName, symbol: impl Into<SmolStr>, next: LexiconName) -> LexcEntry {
        let symbol = symbol.into();
        LexcEntry::new(lexicon, symbol.clone(), symbol, next)
    }
}

/// Renders the entry line. Identical sides collapse into one symbol and a
/// collapsed epsilon leaves only the continuation.
impl Display for LexcEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.analysis == self.surface {
            if self.analysis == EPSILON {
                write!(f, "{} ;", self.next)
            } else {
                write!(f, "{} {} ;", self.analysis, self.next)
            }
        } else {
            write!(f, "{}:{} {} ;", self.analysis, self.surface, self.next)
        }
    }
}

impl PartialOrd for LexcEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Output order inside a sublexicon: surface, then analysis.
impl Ord for LexcEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.surface
            .cmp(&other.surface)
            .then_with(|| self.analysis.cmp(&other.analysis))
            .then_with(|| self.next.cmp(&other.next))
            .then_with(|| self.lexicon.cmp(&other.lexicon))
    }
}
