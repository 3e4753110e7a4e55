use crate::geom::Vector;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops;

/// A 2x2 matrix, representing a linear transform of the Cartesian plane. The
/// four components are laid out as:
///
/// ```text
/// | a  b |
/// | c  d |
/// ```
///
/// Matrices never carry a translation. Anything that needs one (e.g. a
/// layout's origin) adds it separately after applying the matrix.
#[derive(Copy, Clone, Debug, Display, PartialEq, Serialize, Deserialize)]
#[display(fmt = "[[{}, {}], [{}, {}]]", a, b, c, d)]
pub struct Matrix {
    /// First row, first column
    pub a: f64,
    /// First row, second column
    pub b: f64,
    /// Second row, first column
    pub c: f64,
    /// Second row, second column
    pub d: f64,
}

impl Matrix {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Construct a matrix from its components, first row then second row
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Construct a change-of-basis matrix. The given vectors become the
    /// columns of the matrix, so the matrix maps `(1, 0)` to `v1` and `(0, 1)`
    /// to `v2`.
    pub fn from_basis(v1: Vector, v2: Vector) -> Self {
        Self::new(v1.x, v2.x, v1.y, v2.y)
    }

    /// A rotation by the given angle in radians. Positive angles rotate from
    /// +x toward +y, consistent with [Vector::direction].
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, -sin, sin, cos)
    }

    /// A shear parallel to the x axis
    pub fn x_shear(k: f64) -> Self {
        Self::new(1.0, k, 0.0, 1.0)
    }

    /// A shear parallel to the y axis
    pub fn y_shear(k: f64) -> Self {
        Self::new(1.0, 0.0, k, 1.0)
    }

    /// A stretch (or compression, or reflection) of each axis independently
    pub fn stretch(x: f64, y: f64) -> Self {
        Self::new(x, 0.0, 0.0, y)
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Get the inverse of this matrix. Returns an error if the determinant is
    /// exactly zero, in which case no inverse exists.
    pub fn inverse(&self) -> Result<Self, SingularMatrixError> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(SingularMatrixError { matrix: *self });
        }

        let inv_det = 1.0 / det;
        Ok(Self::new(
            self.d * inv_det,
            -self.b * inv_det,
            -self.c * inv_det,
            self.a * inv_det,
        ))
    }

    /// Multiply this matrix by another one, i.e. `self · other`. When applied
    /// to a vector, `other` takes effect first.
    pub fn times_matrix(&self, other: &Matrix) -> Self {
        Self::new(
            self.a * other.a + self.b * other.c,
            self.a * other.b + self.b * other.d,
            self.c * other.a + self.d * other.c,
            self.c * other.b + self.d * other.d,
        )
    }

    /// Apply this transform to a vector
    pub fn times_vector(&self, v: Vector) -> Vector {
        Vector::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }
}

impl ops::Mul<Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Self::Output {
        self.times_matrix(&rhs)
    }
}

impl ops::Mul<Vector> for Matrix {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        self.times_vector(rhs)
    }
}

impl From<nalgebra::Matrix2<f64>> for Matrix {
    fn from(other: nalgebra::Matrix2<f64>) -> Self {
        Self::new(other.m11, other.m12, other.m21, other.m22)
    }
}

impl From<Matrix> for nalgebra::Matrix2<f64> {
    fn from(other: Matrix) -> Self {
        // nalgebra's constructor takes components in row-major order too
        nalgebra::Matrix2::new(other.a, other.b, other.c, other.d)
    }
}

/// Returned when inverting a matrix whose determinant is zero. A layout built
/// on such a matrix could never map points back to hexes.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "Matrix {} has no inverse; its determinant is zero", matrix)]
pub struct SingularMatrixError {
    pub matrix: Matrix,
}

impl std::error::Error for SingularMatrixError {}
