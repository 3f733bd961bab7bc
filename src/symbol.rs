//! Alphabet symbols and the registry that interns them.

use crate::error::GrammarError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One letter of an L-System alphabet.
///
/// A symbol *is* its character: two symbols compare and hash equal exactly when
/// their characters do. Obtain symbols from an [`Alphabet`] so that every symbol
/// in a grammar is known to be registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(char);

impl Symbol {
    /// The character this symbol stands for.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registry of the symbols a grammar may use, one per character.
#[derive(Clone, Debug, Default)]
pub struct Alphabet {
    symbols: HashMap<char, Symbol>,
    // Registration order, for stable iteration.
    order: Vec<Symbol>,
}

impl Alphabet {
    /// Creates an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `c` and returns its symbol.
    ///
    /// Registering the same character twice is rejected rather than silently
    /// returning the existing symbol, so that duplicated alphabet entries in a
    /// description are caught at load time.
    pub fn intern(&mut self, c: char) -> Result<Symbol, GrammarError> {
        if self.symbols.contains_key(&c) {
            return Err(GrammarError::DuplicateSymbol(c));
        }
        let sym = Symbol(c);
        self.symbols.insert(c, sym);
        self.order.push(sym);
        Ok(sym)
    }

    /// Looks up the symbol for `c`, if registered.
    pub fn get(&self, c: char) -> Option<Symbol> {
        self.symbols.get(&c).copied()
    }

    /// Looks up `c`, reporting `context` in the error when it is missing.
    pub fn resolve(&self, c: char, context: &str) -> Result<Symbol, GrammarError> {
        self.get(c).ok_or_else(|| GrammarError::UnknownSymbol {
            character: c,
            context: context.to_string(),
        })
    }

    /// Resolves every character of `s`, in order.
    pub fn resolve_str(&self, s: &str, context: &str) -> Result<Vec<Symbol>, GrammarError> {
        s.chars().map(|c| self.resolve(c, context)).collect()
    }

    /// True when `sym` was registered in this alphabet.
    pub fn contains(&self, sym: Symbol) -> bool {
        self.symbols.contains_key(&sym.0)
    }

    /// Number of registered symbols.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Symbols in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.order.iter().copied()
    }
}

/// Renders a symbol sequence back into its string form.
pub fn to_string(seq: &[Symbol]) -> String {
    seq.iter().map(|s| s.as_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_by_character() {
        let mut a = Alphabet::new();
        let f = a.intern('F').unwrap();
        assert_eq!(a.get('F'), Some(f));
        assert_eq!(f.as_char(), 'F');
        assert!(a.contains(f));
        assert_eq!(a.get('G'), None);
    }

    #[test]
    fn duplicate_character_is_rejected() {
        let mut a = Alphabet::new();
        a.intern('F').unwrap();
        assert_eq!(a.intern('F'), Err(GrammarError::DuplicateSymbol('F')));
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn resolve_reports_context() {
        let mut a = Alphabet::new();
        a.intern('F').unwrap();
        let err = a.resolve_str("F+F", "axiom").unwrap_err();
        assert_eq!(
            err,
            GrammarError::UnknownSymbol {
                character: '+',
                context: "axiom".into()
            }
        );
    }
}
