use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, Mul, MulAssign, Neg, Sub,
    SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A point or direction in the Cartesian plane. Angles are measured from +x
/// toward +y, so whether positive angles look clockwise depends on which way
/// +y points in your frame.
///
/// Vectors are plain values. Arithmetic is done through the standard
/// operators: `a + b`, `a - b`, `-a`, and `a * k` / `a / k` for uniform
/// scaling by a scalar. Use [Vector::scaled_by] to scale each axis by a
/// different factor.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// Zero-length vector, i.e. the origin of the plane
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// Unit vector in the positive x direction
    pub const X: Self = Self::new(1.0, 0.0);
    /// Unit vector in the positive y direction. In most screen spaces positive
    /// y is "down".
    pub const Y: Self = Self::new(0.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a unit vector pointing at the given angle (in radians) from the
    /// positive x axis. Angles grow from +x toward +y.
    pub fn direction(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin)
    }

    /// Euclidean length of this vector
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scale each axis independently. For uniform scaling, just multiply by
    /// a scalar.
    pub fn scaled_by(self, kx: f64, ky: f64) -> Self {
        Self::new(self.x * kx, self.y * ky)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self::new(other.x, other.y)
    }
}

impl From<Vector> for nalgebra::Vector2<f64> {
    fn from(other: Vector) -> Self {
        nalgebra::Vector2::new(other.x, other.y)
    }
}

impl From<nalgebra::Point2<f64>> for Vector {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self::new(other.x, other.y)
    }
}

impl From<Vector> for nalgebra::Point2<f64> {
    fn from(other: Vector) -> Self {
        nalgebra::Point2::new(other.x, other.y)
    }
}
