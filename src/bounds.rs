//! Axis-aligned bounding rectangles for the sizing pass.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Closed axis-aligned rectangle `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Degenerate rectangle covering the single point `p`.
    pub fn at(p: DVec2) -> Self {
        Self { min: p, max: p }
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Grows the rectangle to cover `p`.
    pub fn include(&mut self, p: DVec2) {
        if !self.contains(p) {
            self.min = self.min.min(p);
            self.max = self.max.max(p);
        }
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn x(&self) -> f64 {
        self.min.x
    }

    pub fn y(&self) -> f64 {
        self.min.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }
}

/// Unions two optional rectangles; `None` is the empty rectangle.
pub(crate) fn merge(a: Option<Bounds>, b: Option<Bounds>) -> Option<Bounds> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
