use std::fmt::{self, Display};

use smol_str::SmolStr;

use crate::constants::TERMINAL_LEXICON;
use crate::types::Order;

/// Identifies the ending sublexicons of one paradigm, class, prefix and
/// order combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndingKey {
    pub paradigm: SmolStr,
    pub class: SmolStr,
    pub prefix: SmolStr,
    pub order: Order,
}

impl Display for EndingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_Class={}_Prefix={}_Order={}",
            self.paradigm, self.class, self.prefix, self.order
        )
    }
}

/// Name of a sublexicon (a state of the lexicon graph).
///
/// `Display` is the single rendering into lexc names, e.g.
/// `VTA_Class=VTA_C_Prefix=NI_Order=Ind_Endings`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LexiconName {
    /// Root lexicon of a part of speech, e.g. `VerbRoot`.
    Root(SmolStr),
    /// Lexicon defined outside the generated file, e.g. a preverb root.
    External(SmolStr),
    /// `<Paradigm>_Prefix`
    Prefix { paradigm: SmolStr },
    /// `<Paradigm>_PrefixBoundary`
    PrefixBoundary { paradigm: SmolStr },
    /// `<POS>Stems`, shared by all paradigms after the pre-element slot.
    PreElementGate { pos: SmolStr },
    /// `<Paradigm>_Stems`
    Stems { paradigm: SmolStr },
    /// `<Paradigm>_Class=<class>_Boundary`
    ClassBoundary { paradigm: SmolStr, class: SmolStr },
    /// `<Paradigm>_Class=<class>_Flags`
    ClassFlags { paradigm: SmolStr, class: SmolStr },
    /// `<Paradigm>_Class=<class>_Prefix=<id>_Order=<order>`
    Order(EndingKey),
    /// `<Paradigm>_Class=<class>_Prefix=<id>_Order=<order>_Endings`
    Endings(EndingKey),
    /// `<Paradigm>_Irregular`
    Irregular { paradigm: SmolStr },
    /// `#`
    Terminal,
}

impl LexiconName {
    /// Paradigm this lexicon belongs to, if it belongs to exactly one.
    pub fn paradigm(&self) -> Option<&str> {
        match self {
            LexiconName::Prefix { paradigm }
            | LexiconName::PrefixBoundary { paradigm }
            | LexiconName::Stems { paradigm }
            | LexiconName::ClassBoundary { paradigm, .. }
            | LexiconName::ClassFlags { paradigm, .. }
            | LexiconName::Irregular { paradigm } => Some(paradigm.as_str()),
            LexiconName::Order(key) | LexiconName::Endings(key) => Some(key.paradigm.as_str()),
            LexiconName::Root(_)
            | LexiconName::External(_)
            | LexiconName::PreElementGate { .. }
            | LexiconName::Terminal => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LexiconName::Terminal)
    }
}

impl Display for LexiconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconName::Root(name) | LexiconName::External(name) => f.write_str(name),
            LexiconName::Prefix { paradigm } => write!(f, "{}_Prefix", paradigm),
            LexiconName::PrefixBoundary { paradigm } => write!(f, "{}_PrefixBoundary", paradigm),
            LexiconName::PreElementGate { pos } => write!(f, "{}Stems", pos),
            LexiconName::Stems { paradigm } => write!(f, "{}_Stems", paradigm),
            LexiconName::ClassBoundary { paradigm, class } => {
                write!(f, "{}_Class={}_Boundary", paradigm, class)
            }
            LexiconName::ClassFlags { paradigm, class } => {
                write!(f, "{}_Class={}_Flags", paradigm, class)
            }
            LexiconName::Order(key) => write!(f, "{}", key),
            LexiconName::Endings(key) => write!(f, "{}_Endings", key),
            LexiconName::Irregular { paradigm } => write!(f, "{}_Irregular", paradigm),
            LexiconName::Terminal => f.write_str(TERMINAL_LEXICON),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> EndingKey {
        EndingKey {
            paradigm: "VTA".into(),
            class: "VTA_C".into(),
            prefix: "NI".into(),
            order: Order::Ind,
        }
    }

    #[test]
    fn display() {
        let vta = SmolStr::from("VTA");
        let cases = vec![
            (LexiconName::Root("VerbRoot".into()), "VerbRoot"),
            (LexiconName::Prefix { paradigm: vta.clone() }, "VTA_Prefix"),
            (
                LexiconName::PrefixBoundary { paradigm: vta.clone() },
                "VTA_PrefixBoundary",
            ),
            (LexiconName::PreElementGate { pos: "Verb".into() }, "VerbStems"),
            (LexiconName::Stems { paradigm: vta.clone() }, "VTA_Stems"),
            (
                LexiconName::ClassBoundary {
                    paradigm: vta.clone(),
                    class: "VTA_C".into(),
                },
                "VTA_Class=VTA_C_Boundary",
            ),
            (
                LexiconName::ClassFlags {
                    paradigm: vta.clone(),
                    class: "VTA_C".into(),
                },
                "VTA_Class=VTA_C_Flags",
            ),
            (LexiconName::Order(key()), "VTA_Class=VTA_C_Prefix=NI_Order=Ind"),
            (
                LexiconName::Endings(key()),
                "VTA_Class=VTA_C_Prefix=NI_Order=Ind_Endings",
            ),
            (LexiconName::Irregular { paradigm: vta }, "VTA_Irregular"),
            (LexiconName::Terminal, "#"),
        ];

        for (name, expected) in cases {
            assert_eq!(name.to_string(), expected);
        }
    }

    #[test]
    fn paradigm_of_name() {
        assert_eq!(LexiconName::Endings(key()).paradigm(), Some("VTA"));
        assert_eq!(LexiconName::PreElementGate { pos: "Verb".into() }.paradigm(), None);
        assert_eq!(LexiconName::Terminal.paradigm(), None);
    }
}
