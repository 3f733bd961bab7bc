//! Serializable grammar descriptions and their validation into a [`Grammar`].
//!
//! The JSON layout is:
//!
//! ```json
//! {
//!   "parameters": { "start": [0, 0, 90], "step": 2, "angle": 22.5 },
//!   "alphabet": ["F", "X", "+", "-", "[", "]"],
//!   "rules": { "X": ["F[+X]F[-X]+X", "F[-X]F[+X]-X"], "F": ["FF"] },
//!   "axiom": "X",
//!   "actions": { "F": "draw", "+": "turnL", "-": "turnR", "[": "push", "]": "pop" }
//! }
//! ```
//!
//! A rule with several strings is stochastic. Every character anywhere in the
//! description must appear in `alphabet`; anything else is rejected before a
//! [`Grammar`] exists.

use crate::error::{GrammarError, LoadError};
use crate::grammar::Grammar;
use crate::turtle::{Action, GhostTurtle, Pose, Turtle, TurtleUnits};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

/// Turtle parameters of a description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// `[x, y, heading_degrees]`.
    pub start: Vec<f64>,
    pub step: f64,
    /// Turn angle in degrees.
    pub angle: f64,
}

/// An L-System as written in a description file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LSystemDescription {
    pub parameters: Parameters,
    pub alphabet: Vec<String>,
    #[serde(default)]
    pub rules: BTreeMap<String, Vec<String>>,
    pub axiom: String,
    #[serde(default)]
    pub actions: BTreeMap<String, String>,
}

/// A validated description: the grammar plus the turtle setup it asks for.
#[derive(Clone, Debug)]
pub struct LSystem {
    pub grammar: Grammar,
    pub start: Pose,
    pub units: TurtleUnits,
}

impl LSystem {
    /// Parses and validates a JSON description in one step.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        LSystemDescription::from_json_str(json)?.load()
    }

    /// A fresh [`GhostTurtle`] with this system's units, initialized at the start pose.
    pub fn ghost_turtle(&self) -> GhostTurtle {
        let mut turtle = GhostTurtle::new(self.units);
        self.reset(&mut turtle);
        turtle
    }

    /// Re-initializes `turtle` at the start pose with this system's units.
    pub fn reset<T: Turtle + ?Sized>(&self, turtle: &mut T) {
        turtle.set_units(self.units);
        turtle.init(self.start.position, self.start.heading);
    }
}

/// Single character named by `name`, or the reason it does not name one.
fn single_char(name: &str, context: &str) -> Result<char, GrammarError> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(GrammarError::EmptySymbol {
            context: context.to_string(),
        }),
        (Some(_), Some(_)) => Err(GrammarError::MultiCharSymbol {
            name: name.to_string(),
            context: context.to_string(),
        }),
    }
}

impl LSystemDescription {
    /// Parses a description without validating it.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a description from `reader`, e.g. an open file.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Builds the grammar, checking every referenced character against the alphabet.
    pub fn to_grammar(&self) -> Result<Grammar, GrammarError> {
        let mut builder = Grammar::builder();
        for name in &self.alphabet {
            builder.symbol(single_char(name, "alphabet")?)?;
        }
        for (head, alternatives) in &self.rules {
            let head = single_char(head, "rules")?;
            for expansion in alternatives {
                builder.rule(head, expansion)?;
            }
        }
        builder.axiom(&self.axiom)?;
        for (name, action) in &self.actions {
            builder.action(single_char(name, "actions")?, action.parse::<Action>()?)?;
        }
        Ok(builder.build())
    }

    /// The `[x, y, heading]` start as a [`Pose`].
    pub fn start_pose(&self) -> Result<Pose, LoadError> {
        match self.parameters.start.as_slice() {
            &[x, y, heading] => Ok(Pose::new(DVec2::new(x, y), heading)),
            other => Err(LoadError::InvalidStart { len: other.len() }),
        }
    }

    /// Step length and turn angle from `parameters`.
    pub fn units(&self) -> TurtleUnits {
        TurtleUnits {
            step: self.parameters.step,
            delta: self.parameters.angle,
        }
    }

    /// Validates the whole description.
    pub fn load(&self) -> Result<LSystem, LoadError> {
        Ok(LSystem {
            grammar: self.to_grammar()?,
            start: self.start_pose()?,
            units: self.units(),
        })
    }
}
