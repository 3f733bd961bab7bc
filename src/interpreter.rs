//! Fused rewrite-and-execute interpreter driving a [`Turtle`] from a [`Grammar`].
//!
//! The entry point is [`Interpreter`]. Build a [`Grammar`], pick a random number
//! generator (seeded for reproducible output), then call
//! [`Interpreter::plot`] for a render pass or [`Interpreter::bounding_box`] for a
//! sizing pass.
//!
//! Neither pass ever materializes the expanded sequence: each symbol is rewritten
//! at its own recursion point and its expansion is executed immediately, so memory
//! is proportional to the depth `n` rather than to the length of the expansion.

use crate::bounds::{self, Bounds};
use crate::error::TurtleError;
use crate::grammar::Grammar;
use crate::symbol::Symbol;
use crate::turtle::{Action, Turtle};
use rand::Rng;
use tracing::{debug, warn};

/// Interprets a grammar's symbols as turtle operations.
///
/// Owns the random number generator consulted for stochastic productions. Draws
/// happen in rewrite order (depth-first, left to right), so a seeded generator
/// reproduces the same curve.
pub struct Interpreter<'g, R> {
    grammar: &'g Grammar,
    rng: R,
}

impl<'g, R: Rng> Interpreter<'g, R> {
    pub fn new(grammar: &'g Grammar, rng: R) -> Self {
        Self { grammar, rng }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Gives the generator back, e.g. to continue the same random stream elsewhere.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Performs the action bound to `sym` on `turtle`.
    ///
    /// Symbols without a bound action call [`Turtle::stay`]. The only failure is
    /// a pop on an empty stack.
    pub fn tell_leaf<T: Turtle + ?Sized>(
        &self,
        turtle: &mut T,
        sym: Symbol,
    ) -> Result<(), TurtleError> {
        match self.grammar.action(sym) {
            Action::Draw => turtle.draw(),
            Action::Move => turtle.move_forward(),
            Action::Push => turtle.push(),
            Action::Pop => turtle.pop()?,
            Action::TurnLeft => turtle.turn_left(),
            Action::TurnRight => turtle.turn_right(),
            Action::None => turtle.stay(),
        }
        Ok(())
    }

    /// Interprets `sym` after `n` rounds of rewriting.
    ///
    /// At `n == 0`, or when `sym` has no production, this is [`tell_leaf`](Self::tell_leaf).
    /// Otherwise `sym` is rewritten once and every resulting symbol is interpreted
    /// at depth `n - 1`, left to right. Each occurrence draws its own alternative.
    pub fn tell<T: Turtle + ?Sized>(
        &mut self,
        turtle: &mut T,
        sym: Symbol,
        n: usize,
    ) -> Result<(), TurtleError> {
        if n == 0 {
            return self.tell_leaf(turtle, sym);
        }
        let grammar = self.grammar;
        match grammar.rewrite(sym, &mut self.rng) {
            None => self.tell_leaf(turtle, sym),
            Some(expansion) => {
                for &next in expansion {
                    self.tell(turtle, next, n - 1)?;
                }
                Ok(())
            }
        }
    }

    /// Same traversal as [`tell`](Self::tell), driven by an explicit work list
    /// instead of the call stack.
    ///
    /// Symbols are rewritten in the same order as the recursive version, so with
    /// identically seeded generators both perform the same turtle operations.
    pub fn tell_iterative<T: Turtle + ?Sized>(
        &mut self,
        turtle: &mut T,
        sym: Symbol,
        n: usize,
    ) -> Result<(), TurtleError> {
        let grammar = self.grammar;
        let mut work = vec![(sym, n)];
        while let Some((sym, depth)) = work.pop() {
            if depth == 0 {
                self.tell_leaf(turtle, sym)?;
                continue;
            }
            match grammar.rewrite(sym, &mut self.rng) {
                None => self.tell_leaf(turtle, sym)?,
                // Reversed so the leftmost symbol is popped first.
                Some(expansion) => work.extend(expansion.iter().rev().map(|&s| (s, depth - 1))),
            }
        }
        Ok(())
    }

    /// Interprets every symbol of `seq` at depth `n`, in order, on one turtle.
    pub fn tell_sequence<T: Turtle + ?Sized>(
        &mut self,
        turtle: &mut T,
        seq: &[Symbol],
        n: usize,
    ) -> Result<(), TurtleError> {
        for &sym in seq {
            self.tell(turtle, sym, n)?;
        }
        Ok(())
    }

    /// Render pass: interprets the grammar's axiom at depth `n`.
    ///
    /// The turtle must already be initialized; its pose is not reset here.
    pub fn plot<T: Turtle + ?Sized>(
        &mut self,
        turtle: &mut T,
        n: usize,
    ) -> Result<(), TurtleError> {
        debug!(depth = n, axiom_len = self.grammar.axiom().len(), "plot");
        let grammar = self.grammar;
        self.tell_sequence(turtle, grammar.axiom(), n)
            .inspect_err(|e| warn!("plot aborted: {e}"))
    }

    /// Sizing pass: the smallest rectangle covering the turtle's start position
    /// and every position it reaches while interpreting `seq` at depth `n`.
    ///
    /// This drives `turtle` exactly like a render pass would. Re-initialize it
    /// (or use a second turtle) before drawing.
    pub fn bounding_box<T: Turtle + ?Sized>(
        &mut self,
        turtle: &mut T,
        seq: &[Symbol],
        n: usize,
    ) -> Result<Bounds, TurtleError> {
        let mut total = Bounds::at(turtle.position());
        for &sym in seq {
            let sub = self
                .bound(turtle, sym, n)
                .inspect_err(|e| warn!("sizing pass aborted: {e}"))?;
            if let Some(sub) = sub {
                total = total.union(sub);
            }
        }
        debug!(
            depth = n,
            x = total.x(),
            y = total.y(),
            width = total.width(),
            height = total.height(),
            "bounding box"
        );
        Ok(total)
    }

    /// Bounds of the positions reached while interpreting one symbol, or `None`
    /// when its expansion is empty and no leaf action ran.
    fn bound<T: Turtle + ?Sized>(
        &mut self,
        turtle: &mut T,
        sym: Symbol,
        n: usize,
    ) -> Result<Option<Bounds>, TurtleError> {
        let grammar = self.grammar;
        let expansion = match n {
            0 => None,
            _ => grammar.rewrite(sym, &mut self.rng),
        };
        match expansion {
            None => {
                self.tell_leaf(turtle, sym)?;
                Ok(Some(Bounds::at(turtle.position())))
            }
            Some(expansion) => {
                let mut acc = None;
                for &next in expansion {
                    acc = bounds::merge(acc, self.bound(turtle, next, n - 1)?);
                }
                Ok(acc)
            }
        }
    }
}
