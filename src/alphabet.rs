//! Symbol alphabet: the partition of symbols into variables and constants.

use crate::error::{LSystemError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How a symbol is treated by the rewriter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    /// Subject to rewriting.
    Variable,
    /// Copied through unchanged (turns, brackets, ...).
    Constant,
    /// Not declared in the alphabet.
    Unknown,
}

/// Disjoint sets of variable and constant symbols.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    variables: BTreeSet<char>,
    constants: BTreeSet<char>,
}

impl Alphabet {
    /// Builds an alphabet, rejecting any symbol that appears in both sets.
    pub fn new(
        variables: impl IntoIterator<Item = char>,
        constants: impl IntoIterator<Item = char>,
    ) -> Result<Self> {
        let variables: BTreeSet<char> = variables.into_iter().collect();
        let constants: BTreeSet<char> = constants.into_iter().collect();
        if let Some(&c) = variables.intersection(&constants).next() {
            return Err(LSystemError::OverlappingSymbol(c));
        }
        Ok(Self {
            variables,
            constants,
        })
    }

    /// Builds an alphabet from sets already known to be disjoint.
    pub(crate) fn from_disjoint(
        variables: impl IntoIterator<Item = char>,
        constants: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            variables: variables.into_iter().collect(),
            constants: constants.into_iter().collect(),
        }
    }

    /// Shorthand taking each set as a string of symbols, e.g. `("AB", "+-")`.
    pub fn from_strs(variables: &str, constants: &str) -> Result<Self> {
        Self::new(variables.chars(), constants.chars())
    }

    pub fn variables(&self) -> &BTreeSet<char> {
        &self.variables
    }

    pub fn constants(&self) -> &BTreeSet<char> {
        &self.constants
    }

    pub fn classify(&self, symbol: char) -> SymbolKind {
        if self.variables.contains(&symbol) {
            SymbolKind::Variable
        } else if self.constants.contains(&symbol) {
            SymbolKind::Constant
        } else {
            SymbolKind::Unknown
        }
    }

    pub fn is_variable(&self, symbol: char) -> bool {
        self.variables.contains(&symbol)
    }

    pub fn is_constant(&self, symbol: char) -> bool {
        self.constants.contains(&symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.classify(symbol) != SymbolKind::Unknown
    }

    /// Checks that every symbol of `symbols` is declared.
    ///
    /// `context` names the string being checked and ends up in the error.
    pub fn validate(&self, symbols: &str, context: &str) -> Result<()> {
        match symbols.chars().find(|&c| !self.contains(c)) {
            Some(symbol) => Err(LSystemError::UnknownSymbol {
                symbol,
                context: context.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Re-checks the disjointness invariant; used after deserialization.
    pub(crate) fn check_disjoint(&self) -> Result<()> {
        match self.variables.intersection(&self.constants).next() {
            Some(&c) => Err(LSystemError::OverlappingSymbol(c)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_symbol_is_rejected() {
        let err = Alphabet::from_strs("AF", "F+").unwrap_err();
        assert_eq!(err, LSystemError::OverlappingSymbol('F'));
    }

    #[test]
    fn classify_symbols() {
        let alphabet = Alphabet::from_strs("AB", "+-").unwrap();
        assert_eq!(alphabet.classify('A'), SymbolKind::Variable);
        assert_eq!(alphabet.classify('-'), SymbolKind::Constant);
        assert_eq!(alphabet.classify('X'), SymbolKind::Unknown);
    }

    #[test]
    fn validate_reports_first_unknown_symbol() {
        let alphabet = Alphabet::from_strs("F", "+-").unwrap();
        assert!(alphabet.validate("F+F-F", "axiom").is_ok());
        assert_eq!(
            alphabet.validate("F+G", "axiom"),
            Err(LSystemError::UnknownSymbol {
                symbol: 'G',
                context: "axiom".into()
            })
        );
    }
}
