// tests/common/mod.rs
#![allow(dead_code)]

use glam::DVec2;
use lindenmayer::{Action, GhostTurtle, Grammar, Turtle, TurtleError, TurtleUnits};

/// Turtle operation as observed by [`OpLog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Draw,
    Move,
    Left,
    Right,
    Push,
    Pop,
    Stay,
}

/// Ghost turtle that logs every operation and every position it reaches.
#[derive(Debug, Default)]
pub struct OpLog {
    pub inner: GhostTurtle,
    pub ops: Vec<Op>,
    pub visited: Vec<DVec2>,
}

impl OpLog {
    pub fn new(units: TurtleUnits, start: DVec2, heading: f64) -> Self {
        let mut log = Self {
            inner: GhostTurtle::new(units),
            ..Default::default()
        };
        log.init(start, heading);
        log
    }

    fn record(&mut self, op: Op) {
        self.ops.push(op);
        self.visited.push(self.inner.position());
    }
}

impl Turtle for OpLog {
    fn init(&mut self, position: DVec2, heading: f64) {
        self.ops.clear();
        self.visited.clear();
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
        self.inner.draw();
        self.record(Op::Draw);
    }

    fn move_forward(&mut self) {
        self.inner.move_forward();
        self.record(Op::Move);
    }

    fn turn_right(&mut self) {
        self.inner.turn_right();
        self.record(Op::Right);
    }

    fn turn_left(&mut self) {
        self.inner.turn_left();
        self.record(Op::Left);
    }

    fn push(&mut self) {
        self.inner.push();
        self.record(Op::Push);
    }

    fn pop(&mut self) -> Result<(), TurtleError> {
        self.inner.pop()?;
        self.record(Op::Pop);
        Ok(())
    }

    fn stay(&mut self) {
        self.record(Op::Stay);
    }
}

/// Heighway dragon: two mutually recursive deterministic rules.
pub fn dragon() -> Grammar {
    let mut b = Grammar::builder();
    b.symbols("FXY+-").unwrap();
    b.rule('X', "X+YF+").unwrap();
    b.rule('Y', "-FX-Y").unwrap();
    b.axiom("FX").unwrap();
    b.action('F', Action::Draw).unwrap();
    b.action('+', Action::TurnLeft).unwrap();
    b.action('-', Action::TurnRight).unwrap();
    b.build()
}

/// Deterministic bracketed plant.
pub fn bush() -> Grammar {
    let mut b = Grammar::builder();
    b.symbols("F+-[]").unwrap();
    b.rule('F', "FF-[-F+F+F]+[+F-F-F]").unwrap();
    b.axiom("F").unwrap();
    b.action('F', Action::Draw).unwrap();
    b.action('+', Action::TurnLeft).unwrap();
    b.action('-', Action::TurnRight).unwrap();
    b.action('[', Action::Push).unwrap();
    b.action(']', Action::Pop).unwrap();
    b.build()
}

/// Stochastic plant: `X` picks one of two branchings per occurrence.
pub fn stochastic_plant() -> Grammar {
    let mut b = Grammar::builder();
    b.symbols("FX+-[]").unwrap();
    b.rule('X', "F[+X]F[-X]+X").unwrap();
    b.rule('X', "F[-X]F[+X]-X").unwrap();
    b.rule('F', "FF").unwrap();
    b.axiom("X").unwrap();
    b.action('F', Action::Draw).unwrap();
    b.action('+', Action::TurnLeft).unwrap();
    b.action('-', Action::TurnRight).unwrap();
    b.action('[', Action::Push).unwrap();
    b.action(']', Action::Pop).unwrap();
    b.build()
}
