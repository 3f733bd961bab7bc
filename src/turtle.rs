//! Turtle state and operations for 2D curve interpretation.

use crate::error::{GrammarError, TurtleError};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Step length and turn angle shared by every move of a traversal.
///
/// Set once before interpretation begins.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleUnits {
    /// Distance covered by `draw` and `move`.
    pub step: f64,
    /// Turn angle in degrees.
    pub delta: f64,
}

impl Default for TurtleUnits {
    fn default() -> Self {
        Self {
            step: 1.0,
            delta: 90.0,
        }
    }
}

/// Position and heading of the turtle at one instant.
///
/// `Pose` is a plain value: saving it onto the stack copies it, so later
/// mutations of the live pose never reach a saved one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: DVec2,
    /// Heading in degrees. 0 points along +x, 90 along +y.
    pub heading: f64,
}

impl Pose {
    pub fn new(position: DVec2, heading: f64) -> Self {
        Self { position, heading }
    }

    /// The pose reached by walking `step` units along the current heading.
    pub fn advanced(self, step: f64) -> Self {
        let theta = self.heading.to_radians();
        Self {
            position: self.position + step * DVec2::new(theta.cos(), theta.sin()),
            heading: self.heading,
        }
    }

    /// The pose with `degrees` added to the heading.
    pub fn turned(self, degrees: f64) -> Self {
        Self {
            position: self.position,
            heading: self.heading + degrees,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 0.0)
    }
}

/// Operations a symbol can map to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Advance one step, leaving a visible segment (`draw`).
    Draw,
    /// Advance one step without drawing (`move`).
    Move,
    /// Save the current pose (`push`).
    Push,
    /// Restore the most recently saved pose (`pop`).
    Pop,
    /// Subtract the turn angle from the heading (`turnL`).
    TurnLeft,
    /// Add the turn angle to the heading (`turnR`).
    TurnRight,
    /// No-op. Also used for symbols with no registered action.
    #[default]
    None,
}

impl Action {
    /// The name used for this action in grammar descriptions.
    pub fn name(self) -> &'static str {
        match self {
            Action::Draw => "draw",
            Action::Move => "move",
            Action::Push => "push",
            Action::Pop => "pop",
            Action::TurnLeft => "turnL",
            Action::TurnRight => "turnR",
            Action::None => "stay",
        }
    }
}

impl FromStr for Action {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draw" => Ok(Action::Draw),
            "move" => Ok(Action::Move),
            "push" => Ok(Action::Push),
            "pop" => Ok(Action::Pop),
            "turnL" => Ok(Action::TurnLeft),
            "turnR" => Ok(Action::TurnRight),
            "stay" | "none" => Ok(Action::None),
            other => Err(GrammarError::UnknownAction(other.to_string())),
        }
    }
}

/// Capability interface of a turtle: pose queries plus pose-mutating operations.
///
/// The interpreter drives any implementor. [`GhostTurtle`] is the bare state
/// machine; wrappers such as [`SegmentRecorder`](crate::SegmentRecorder) add
/// observers on top of it.
pub trait Turtle {
    /// Places the turtle at `position` facing `heading` degrees and clears the stack.
    fn init(&mut self, position: DVec2, heading: f64);

    /// Sets step length and turn angle.
    fn set_units(&mut self, units: TurtleUnits);

    /// Current position.
    fn position(&self) -> DVec2;

    /// Current heading in degrees.
    fn heading(&self) -> f64;

    /// Snapshot of position and heading.
    fn pose(&self) -> Pose {
        Pose::new(self.position(), self.heading())
    }

    /// Advances one step and marks the segment as visible.
    fn draw(&mut self);

    /// Advances one step without a visible segment.
    fn move_forward(&mut self);

    /// Adds the turn angle to the heading; position is unchanged.
    fn turn_right(&mut self);

    /// Subtracts the turn angle from the heading; position is unchanged.
    fn turn_left(&mut self);

    /// Saves a copy of the current pose on the stack.
    fn push(&mut self);

    /// Restores the most recently pushed pose.
    fn pop(&mut self) -> Result<(), TurtleError>;

    /// Does nothing.
    fn stay(&mut self) {}
}

/// Turtle that only tracks its pose: no output of its own.
#[derive(Clone, Debug, Default)]
pub struct GhostTurtle {
    current: Pose,
    stack: Vec<Pose>,
    units: TurtleUnits,
}

impl GhostTurtle {
    /// Creates a turtle at the origin facing +x. Call [`Turtle::init`] to place it.
    pub fn new(units: TurtleUnits) -> Self {
        Self {
            units,
            ..Default::default()
        }
    }

    /// Step length and turn angle in use.
    pub fn units(&self) -> TurtleUnits {
        self.units
    }

    /// Number of poses currently saved.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }
}

impl Turtle for GhostTurtle {
    fn init(&mut self, position: DVec2, heading: f64) {
        self.stack.clear();
        self.current = Pose::new(position, heading);
    }

    fn set_units(&mut self, units: TurtleUnits) {
        self.units = units;
    }

    fn position(&self) -> DVec2 {
        self.current.position
    }

    fn heading(&self) -> f64 {
        self.current.heading
    }

    fn pose(&self) -> Pose {
        self.current
    }

    fn draw(&mut self) {
        self.current = self.current.advanced(self.units.step);
    }

    fn move_forward(&mut self) {
        self.current = self.current.advanced(self.units.step);
    }

    fn turn_right(&mut self) {
        self.current = self.current.turned(self.units.delta);
    }

    fn turn_left(&mut self) {
        self.current = self.current.turned(-self.units.delta);
    }

    fn push(&mut self) {
        self.stack.push(self.current);
    }

    fn pop(&mut self) -> Result<(), TurtleError> {
        self.current = self.stack.pop().ok_or(TurtleError::StackUnderflow)?;
        Ok(())
    }
}
