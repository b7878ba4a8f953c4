//! Flag diacritics restricting which prefixes, paradigms and clause orders
//! may co-occur, and the registry of multichar symbols they are declared in.
use std::fmt::{self, Display};
use std::str::FromStr;

use smol_str::SmolStr;

use crate::types::{FlagCategory, FlagDiacriticOperator};

mod registry;

pub use self::registry::{prefix_id, MulticharSymbols};

/// A flag diacritic like `@P.Prefix.NI@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlagDiacritic {
    pub operator: FlagDiacriticOperator,
    pub category: FlagCategory,
    pub value: SmolStr,
}

/// The flag written where a value is chosen, and the flag which later
/// checks for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagPair {
    pub set: FlagDiacritic,
    pub check: FlagDiacritic,
}

#[derive(Debug, thiserror::Error)]
pub enum FlagParseError {
    #[error("{0:?} is not enclosed in '@'")]
    NotAFlag(String),
    #[error("{0:?} does not have the form @OP.Category.VALUE@")]
    Malformed(String),
    #[error("Unknown flag operator in {0:?}")]
    UnknownOperator(String),
    #[error("Unknown flag category in {0:?}")]
    UnknownCategory(String),
}

impl FlagDiacritic {
    pub fn new(
        operator: FlagDiacriticOperator,
        category: FlagCategory,
        value: impl Into<SmolStr>,
    ) -> FlagDiacritic {
        FlagDiacritic {
            operator,
            category,
            value: value.into(),
        }
    }

    /// `@P.<category>.<value>@`
    pub fn set(category: FlagCategory, value: impl Into<SmolStr>) -> FlagDiacritic {
        FlagDiacritic::new(FlagDiacriticOperator::PositiveSet, category, value)
    }

    /// `@R.<category>.<value>@`
    pub fn require(category: FlagCategory, value: impl Into<SmolStr>) -> FlagDiacritic {
        FlagDiacritic::new(FlagDiacriticOperator::Require, category, value)
    }

    /// `@U.<category>.<value>@`
    pub fn unify(category: FlagCategory, value: impl Into<SmolStr>) -> FlagDiacritic {
        FlagDiacritic::new(FlagDiacriticOperator::Unification, category, value)
    }

    pub fn is_check(&self) -> bool {
        self.operator != FlagDiacriticOperator::PositiveSet
    }

    /// The set flag a check flag depends on. Order flags are derived from
    /// the tags of an ending and have no set flag.
    pub fn counterpart(&self) -> Option<FlagDiacritic> {
        if !self.is_check() || self.category == FlagCategory::Order {
            return None;
        }
        Some(FlagDiacritic::set(self.category, self.value.clone()))
    }

    pub fn symbol(&self) -> SmolStr {
        self.to_string().into()
    }
}

impl Display for FlagDiacritic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@{}.{}.{}@",
            self.operator.as_str(),
            self.category.as_str(),
            self.value
        )
    }
}

impl FromStr for FlagDiacritic {
    type Err = FlagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .strip_prefix('@')
            .and_then(|x| x.strip_suffix('@'))
            .ok_or_else(|| FlagParseError::NotAFlag(s.to_string()))?;

        let mut chunks = inner.splitn(3, '.');
        let (operator, category, value) = match (chunks.next(), chunks.next(), chunks.next()) {
            (Some(op), Some(cat), Some(value)) if !value.is_empty() => (op, cat, value),
            _ => return Err(FlagParseError::Malformed(s.to_string())),
        };

        let operator = FlagDiacriticOperator::from_str(operator)
            .map_err(|_| FlagParseError::UnknownOperator(s.to_string()))?;
        let category = FlagCategory::from_str(category)
            .map_err(|_| FlagParseError::UnknownCategory(s.to_string()))?;

        Ok(FlagDiacritic::new(operator, category, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            FlagDiacritic::set(FlagCategory::Prefix, "NI").to_string(),
            "@P.Prefix.NI@"
        );
        assert_eq!(
            FlagDiacritic::require(FlagCategory::Paradigm, "VTA").to_string(),
            "@R.Paradigm.VTA@"
        );
        assert_eq!(
            FlagDiacritic::unify(FlagCategory::Order, "Ind").to_string(),
            "@U.Order.Ind@"
        );
    }

    #[test]
    fn parse() {
        let flag: FlagDiacritic = "@R.Prefix.GI@".parse().unwrap();
        assert_eq!(flag, FlagDiacritic::require(FlagCategory::Prefix, "GI"));

        assert!(matches!(
            "+VTA".parse::<FlagDiacritic>(),
            Err(FlagParseError::NotAFlag(_))
        ));
        assert!(matches!(
            "@P.Prefix@".parse::<FlagDiacritic>(),
            Err(FlagParseError::Malformed(_))
        ));
        assert!(matches!(
            "@D.Prefix.NI@".parse::<FlagDiacritic>(),
            Err(FlagParseError::UnknownOperator(_))
        ));
        assert!(matches!(
            "@P.ChCnj.X@".parse::<FlagDiacritic>(),
            Err(FlagParseError::UnknownCategory(_))
        ));
    }

    #[test]
    fn counterparts() {
        let check = FlagDiacritic::require(FlagCategory::Paradigm, "NA");
        assert_eq!(
            check.counterpart(),
            Some(FlagDiacritic::set(FlagCategory::Paradigm, "NA"))
        );
        assert_eq!(FlagDiacritic::unify(FlagCategory::Order, "Cnj").counterpart(), None);
        assert_eq!(FlagDiacritic::set(FlagCategory::Prefix, "NI").counterpart(), None);
    }
}
