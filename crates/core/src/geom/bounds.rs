use crate::geom::Vector;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in the Cartesian plane, defined by its minimum
/// and maximum coordinates on each axis. All edges are inclusive.
///
/// A bounds built from zero points is [Bounds::EMPTY]: every minimum is
/// [f64::MAX] and every maximum is [f64::MIN], so including any point at all
/// collapses the rectangle onto that point. Width and height of the empty
/// bounds are negative (and enormous), so check [Bounds::is_empty] before
/// using them.
#[derive(Copy, Clone, Debug, Display, PartialEq, Serialize, Deserialize)]
#[display(fmt = "[({}, {}), ({}, {})]", min_x, min_y, max_x, max_y)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// The bounds of an empty set of points
    pub const EMPTY: Self = Self::new(f64::MAX, f64::MAX, f64::MIN, f64::MIN);

    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Find the smallest rectangle that contains every given point. If the
    /// iterator is empty, this returns [Bounds::EMPTY].
    pub fn from_vectors(vectors: impl IntoIterator<Item = Vector>) -> Self {
        vectors.into_iter().fold(Self::EMPTY, |mut bounds, v| {
            bounds.include(v);
            bounds
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Does this rectangle contain no points at all? True for
    /// [Bounds::EMPTY], and any other bounds whose min exceeds its max.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Grow this rectangle (if necessary) so that it contains the point
    pub fn include(&mut self, v: Vector) {
        self.min_x = self.min_x.min(v.x);
        self.min_y = self.min_y.min(v.y);
        self.max_x = self.max_x.max(v.x);
        self.max_y = self.max_y.max(v.y);
    }

    /// Is the point within this rectangle? Points on an edge count.
    pub fn contains(&self, v: Vector) -> bool {
        (self.min_x..=self.max_x).contains(&v.x)
            && (self.min_y..=self.max_y).contains(&v.y)
    }

    /// Midpoint of the rectangle. Meaningless for empty bounds.
    pub fn center(&self) -> Vector {
        Vector::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<Vector> for Bounds {
    fn from_iter<T: IntoIterator<Item = Vector>>(iter: T) -> Self {
        Self::from_vectors(iter)
    }
}
