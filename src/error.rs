//! Error types for grammar construction, description loading and turtle traversal.

use thiserror::Error;

/// A grammar references something its alphabet or action vocabulary does not know.
///
/// These are configuration errors: they are raised while the grammar is being
/// built, never during interpretation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("symbol '{character}' used in {context} is not in the alphabet")]
    UnknownSymbol { character: char, context: String },
    #[error("symbol '{0}' is already in the alphabet")]
    DuplicateSymbol(char),
    #[error("empty symbol name in {context}")]
    EmptySymbol { context: String },
    #[error("symbol name {name:?} in {context} is longer than one character")]
    MultiCharSymbol { name: String, context: String },
    #[error("unknown turtle action {0:?}")]
    UnknownAction(String),
}

/// Failure of a turtle operation. Fatal for the traversal that hit it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TurtleError {
    #[error("pop on an empty turtle stack")]
    StackUnderflow,
}

/// Failure while reading an [`LSystemDescription`](crate::LSystemDescription).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed description: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error("start must be [x, y, heading], got {len} values")]
    InvalidStart { len: usize },
}
