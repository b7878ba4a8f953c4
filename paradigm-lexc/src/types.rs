//! Small value types shared across the crate.
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Operator of a flag diacritic, the letter after the leading `@`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlagDiacriticOperator {
    /// `P`: set the feature to a value.
    PositiveSet,
    /// `R`: require the feature to hold a value.
    Require,
    /// `U`: unify the feature with a value.
    Unification,
}

impl FlagDiacriticOperator {
    /// Letter used in the textual form of the flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagDiacriticOperator::PositiveSet => "P",
            FlagDiacriticOperator::Require => "R",
            FlagDiacriticOperator::Unification => "U",
        }
    }
}

impl std::str::FromStr for FlagDiacriticOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P" => Ok(FlagDiacriticOperator::PositiveSet),
            "R" => Ok(FlagDiacriticOperator::Require),
            "U" => Ok(FlagDiacriticOperator::Unification),
            _ => Err(()),
        }
    }
}

/// Feature governed by a flag diacritic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlagCategory {
    /// Identity of the prefix written at the start of the word.
    Prefix,
    /// Paradigm selected from the root lexicon.
    Paradigm,
    /// Clause order derived from the tags of an ending.
    Order,
}

impl FlagCategory {
    /// Name used in the textual form of the flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagCategory::Prefix => "Prefix",
            FlagCategory::Paradigm => "Paradigm",
            FlagCategory::Order => "Order",
        }
    }
}

impl std::str::FromStr for FlagCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Prefix" => Ok(FlagCategory::Prefix),
            "Paradigm" => Ok(FlagCategory::Paradigm),
            "Order" => Ok(FlagCategory::Order),
            _ => Err(()),
        }
    }
}

/// Clause order of an inflected form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Order {
    /// Independent order.
    Ind,
    /// Conjunct order.
    Cnj,
    /// Imperative or any other order.
    Other,
}

impl Order {
    /// Name used in flags and lexicon names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Ind => "Ind",
            Order::Cnj => "Cnj",
            Order::Other => "Other",
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
