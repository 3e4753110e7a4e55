//! Basic geometry of the Cartesian plane: points/directions, linear
//! transforms, and rectangles.
//!
//! Nothing in here assumes a particular orientation of the y axis, but
//! angles always grow from +x toward +y. In a screen frame where +y points
//! down, that means positive angles are clockwise. In a math frame where +y
//! points up, they're counter-clockwise.

mod bounds;
mod matrix;
mod vector;

pub use self::{
    bounds::Bounds,
    matrix::{Matrix, SingularMatrixError},
    vector::Vector,
};
