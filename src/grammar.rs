//! Grammar model: alphabet, production table, axiom and action table.
//!
//! A [`Grammar`] is assembled once through a [`GrammarBuilder`], which checks
//! every character against the alphabet as it is added. Once built, the grammar
//! is read-only; interpretation only ever borrows it.

use crate::error::GrammarError;
use crate::symbol::{Alphabet, Symbol};
use crate::turtle::Action;
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, trace};

/// An L-System: symbols, stochastic productions, axiom and turtle actions.
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    alphabet: Alphabet,
    rules: HashMap<Symbol, Vec<Vec<Symbol>>>,
    axiom: Vec<Symbol>,
    actions: HashMap<Symbol, Action>,
}

impl Grammar {
    /// Starts an empty grammar; see [`GrammarBuilder`].
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::default()
    }

    /// Every symbol this grammar may use.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The sequence interpretation starts from.
    pub fn axiom(&self) -> &[Symbol] {
        &self.axiom
    }

    /// Registered alternatives for `sym`, in registration order. Empty for terminals.
    pub fn productions(&self, sym: Symbol) -> &[Vec<Symbol>] {
        self.rules.get(&sym).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Action bound to `sym`; [`Action::None`] when nothing is bound.
    pub fn action(&self, sym: Symbol) -> Action {
        self.actions.get(&sym).copied().unwrap_or_default()
    }

    /// True when every symbol has at most one production.
    pub fn is_deterministic(&self) -> bool {
        self.rules.values().all(|alts| alts.len() <= 1)
    }

    /// One round of rewriting for a single symbol.
    ///
    /// Returns `None` when `sym` has no production, in which case it rewrites
    /// to itself. With several alternatives one is drawn uniformly from `rng`
    /// on every call; nothing is cached, so two occurrences of the same symbol
    /// may expand differently.
    pub fn rewrite<R: Rng + ?Sized>(&self, sym: Symbol, rng: &mut R) -> Option<&[Symbol]> {
        match self.rules.get(&sym)?.as_slice() {
            [] => None,
            [only] => Some(only.as_slice()),
            alts => {
                let idx = rng.gen_range(0..alts.len());
                trace!(symbol = %sym, alternative = idx, of = alts.len(), "stochastic rewrite");
                Some(alts[idx].as_slice())
            }
        }
    }

    /// Applies `n` full rounds of rewriting to `seq` and returns the flattened result.
    ///
    /// The whole sequence is materialized after every round, so memory grows with
    /// the expansion factor. The fused interpreter never does this; use it for small
    /// `n` or to cross-check interpretation.
    pub fn apply_rules<R: Rng + ?Sized>(
        &self,
        seq: &[Symbol],
        n: usize,
        rng: &mut R,
    ) -> Vec<Symbol> {
        let mut current = seq.to_vec();
        for round in 0..n {
            let mut next = Vec::with_capacity(current.len());
            for &sym in &current {
                match self.rewrite(sym, rng) {
                    Some(expansion) => next.extend_from_slice(expansion),
                    None => next.push(sym),
                }
            }
            trace!(round, len = next.len(), "rewrite round");
            current = next;
        }
        current
    }
}

/// Incremental constructor for a [`Grammar`].
///
/// Symbols must be registered before any rule, axiom or action mentions them.
#[derive(Clone, Debug, Default)]
pub struct GrammarBuilder {
    grammar: Grammar,
}

impl GrammarBuilder {
    /// Adds `c` to the alphabet.
    pub fn symbol(&mut self, c: char) -> Result<Symbol, GrammarError> {
        self.grammar.alphabet.intern(c)
    }

    /// Adds every character of `chars` to the alphabet.
    pub fn symbols(&mut self, chars: &str) -> Result<&mut Self, GrammarError> {
        for c in chars.chars() {
            self.symbol(c)?;
        }
        Ok(self)
    }

    /// Appends `expansion` as one more alternative production for `head`.
    ///
    /// An empty `expansion` is a valid production that erases the symbol.
    pub fn rule(&mut self, head: char, expansion: &str) -> Result<&mut Self, GrammarError> {
        let alphabet = &self.grammar.alphabet;
        let sym = alphabet.resolve(head, "rule head")?;
        let body = alphabet.resolve_str(expansion, &format!("rule for '{head}'"))?;
        self.grammar.rules.entry(sym).or_default().push(body);
        Ok(self)
    }

    /// Sets the axiom, replacing any earlier one.
    pub fn axiom(&mut self, axiom: &str) -> Result<&mut Self, GrammarError> {
        self.grammar.axiom = self.grammar.alphabet.resolve_str(axiom, "axiom")?;
        Ok(self)
    }

    /// Binds `action` to the symbol for `c`, replacing any earlier binding.
    pub fn action(&mut self, c: char, action: Action) -> Result<&mut Self, GrammarError> {
        let sym = self.grammar.alphabet.resolve(c, "action table")?;
        self.grammar.actions.insert(sym, action);
        Ok(self)
    }

    /// Finishes construction. All references were already checked on insertion.
    pub fn build(self) -> Grammar {
        let g = self.grammar;
        debug!(
            symbols = g.alphabet.len(),
            rules = g.rules.len(),
            axiom_len = g.axiom.len(),
            deterministic = g.is_deterministic(),
            "grammar built"
        );
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn koch() -> Grammar {
        let mut b = Grammar::builder();
        b.symbols("F+-")
            .unwrap()
            .rule('F', "F+F-F")
            .unwrap()
            .axiom("F")
            .unwrap()
            .action('F', Action::Draw)
            .unwrap();
        b.build()
    }

    #[test]
    fn terminal_has_no_rule() {
        let g = koch();
        let mut rng = StdRng::seed_from_u64(1);
        let plus = g.alphabet().get('+').unwrap();
        assert!(g.rewrite(plus, &mut rng).is_none());
        assert_eq!(g.action(plus), Action::None);
    }

    #[test]
    fn single_alternative_is_returned_verbatim() {
        let g = koch();
        let mut rng = StdRng::seed_from_u64(1);
        let f = g.alphabet().get('F').unwrap();
        let out = g.rewrite(f, &mut rng).unwrap();
        assert_eq!(symbol::to_string(out), "F+F-F");
    }

    #[test]
    fn apply_rules_flattens_rounds() {
        let g = koch();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(symbol::to_string(&g.apply_rules(g.axiom(), 0, &mut rng)), "F");
        assert_eq!(
            symbol::to_string(&g.apply_rules(g.axiom(), 2, &mut rng)),
            "F+F-F+F+F-F-F+F-F"
        );
    }

    #[test]
    fn stochastic_rewrite_reaches_every_alternative() {
        let mut b = Grammar::builder();
        b.symbols("XAB").unwrap();
        b.rule('X', "A").unwrap().rule('X', "B").unwrap();
        let g = b.build();
        assert!(!g.is_deterministic());

        let x = g.alphabet().get('X').unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_a = false;
        let mut seen_b = false;
        for _ in 0..200 {
            match symbol::to_string(g.rewrite(x, &mut rng).unwrap()).as_str() {
                "A" => seen_a = true,
                "B" => seen_b = true,
                other => panic!("unexpected expansion {other}"),
            }
        }
        assert!(seen_a && seen_b);
    }

    #[test]
    fn empty_expansion_erases() {
        let mut b = Grammar::builder();
        b.symbols("XF").unwrap();
        b.rule('X', "").unwrap().axiom("XFX").unwrap();
        let g = b.build();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(symbol::to_string(&g.apply_rules(g.axiom(), 1, &mut rng)), "F");
    }

    #[test]
    fn unknown_symbols_are_configuration_errors() {
        let mut b = Grammar::builder();
        b.symbols("F").unwrap();
        assert!(matches!(
            b.rule('G', "F"),
            Err(GrammarError::UnknownSymbol { character: 'G', .. })
        ));
        assert!(matches!(
            b.rule('F', "F+F"),
            Err(GrammarError::UnknownSymbol { character: '+', .. })
        ));
        assert!(matches!(
            b.axiom("FX"),
            Err(GrammarError::UnknownSymbol { character: 'X', .. })
        ));
        assert!(matches!(
            b.action('[', Action::Push),
            Err(GrammarError::UnknownSymbol { character: '[', .. })
        ));
    }
}
