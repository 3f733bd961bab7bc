//! Turtle wrapper that records the visible segments a traversal draws.

use crate::error::TurtleError;
use crate::turtle::{Turtle, TurtleUnits};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A straight visible stroke from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
}

/// Forwards every operation to an inner turtle and keeps one [`Segment`] per `draw`.
///
/// `move_forward` changes the pose exactly like `draw` but records nothing, so the
/// recorded segments are what a rendering backend would stroke.
#[derive(Clone, Debug, Default)]
pub struct SegmentRecorder<T> {
    inner: T,
    segments: Vec<Segment>,
}

impl<T: Turtle> SegmentRecorder<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            segments: Vec::new(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Returns the inner turtle and the recorded segments.
    pub fn into_parts(self) -> (T, Vec<Segment>) {
        (self.inner, self.segments)
    }
}

impl<T: Turtle> Turtle for SegmentRecorder<T> {
    /// Also discards previously recorded segments.
    fn init(&mut self, position: DVec2, heading: f64) {
        self.segments.clear();
        self.inner.init(position, heading);
    }

    fn set_units(&mut self, units: TurtleUnits) {
        self.inner.set_units(units);
    }

    fn position(&self) -> DVec2 {
        self.inner.position()
    }

    fn heading(&self) -> f64 {
        self.inner.heading()
    }

    fn draw(&mut self) {
        let from = self.inner.position();
        self.inner.draw();
        self.segments.push(Segment {
            from,
            to: self.inner.position(),
        });
    }

    fn move_forward(&mut self) {
        self.inner.move_forward();
    }

    fn turn_right(&mut self) {
        self.inner.turn_right();
    }

    fn turn_left(&mut self) {
        self.inner.turn_left();
    }

    fn push(&mut self) {
        self.inner.push();
    }

    fn pop(&mut self) -> Result<(), TurtleError> {
        self.inner.pop()
    }

    fn stay(&mut self) {
        self.inner.stay();
    }
}
