//! # lindenmayer
//!
//! Renders fractal curves from Lindenmayer grammars with a 2D turtle.
//!
//! A [`Grammar`] holds an alphabet of single-character [`Symbol`]s, stochastic
//! production rules, an axiom and a symbol-to-[`Action`] table. The
//! [`Interpreter`] rewrites and executes in one pass: every symbol is expanded
//! at its own recursion point and fed straight to a [`Turtle`], so the expanded
//! string is never stored. A sizing pass ([`Interpreter::bounding_box`]) returns
//! the [`Bounds`] of the curve so a backend can size its canvas before drawing.
//!
//! Rendering backends implement [`Turtle`] or wrap a [`GhostTurtle`], as
//! [`SegmentRecorder`] does.

pub mod bounds;
pub mod description;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod recorder;
pub mod symbol;
pub mod turtle;

pub use bounds::Bounds;
pub use description::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use recorder::*;
pub use symbol::{Alphabet, Symbol};
pub use turtle::*;
