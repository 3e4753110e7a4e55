//! Layouts map the hex coordinate system onto the Cartesian plane. See
//! [HexLayout] for details.

mod config;

pub use self::config::HexLayoutSettings;

use crate::{
    geom::{Bounds, Matrix, Vector},
    hex::Hex,
};
use anyhow::Context;
use log::debug;
use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};
use validator::Validate;

/// A hex layout converts between hexes and points in the Cartesian plane. A
/// layout is created from a [HexLayoutSettings], which determines the size,
/// position and orientation of the grid. From there it can convert any number
/// of hexes and points.
///
/// Everything a layout needs is derived once, when it's built, so conversions
/// are just a matrix multiplication plus a bit of arithmetic. Settings can't
/// be changed after creating a layout, but layouts are cheap to create so just
/// make a new one.
///
/// ## Transform
///
/// At its core, a layout is a linear transform from axial space (where `q`
/// and `r` are the x and y coordinates) to the plane. The transform is built
/// in three steps, applied right to left:
///
/// 1. Shear x by `1/2`, so the `r` axis leans 60° away from the `q` axis
/// 2. Squash y by `√3/2` (and flip it, for a counter-clockwise `r` axis), so
///    both axes are unit length
/// 3. Rotate by the `q` axis angle
///
/// The result is then scaled by the center-to-center distance and shifted by
/// the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexLayout {
    settings: HexLayoutSettings,
    /// Unscaled transform from axial space to the plane
    hex_to_point: Matrix,
    /// Inverse of `hex_to_point`
    point_to_hex: Matrix,
    /// Offsets from a hex's center to each of its corners, in circular order
    corner_vectors: [Vector; 6],
    /// Offsets from a hex's center to the midpoint of each of its edges, in
    /// circular order
    edge_center_vectors: [Vector; 6],
}

impl HexLayout {
    /// Build a new layout from the given settings. Returns an error if the
    /// settings are invalid. The error will hold a
    /// [ValidationErrors](validator::ValidationErrors), which can be
    /// retrieved with [anyhow::Error::downcast].
    pub fn new(settings: HexLayoutSettings) -> anyhow::Result<Self> {
        settings.validate().context("invalid hex layout settings")?;

        let sqrt_3 = 3.0f64.sqrt();
        let distance = settings.center_to_center_distance;
        let angle = settings.q_axis_angle;
        // Which way the r axis (and every circular list) turns from q
        let handedness = if settings.r_axis_clockwise { 1.0 } else { -1.0 };

        let hex_to_point = Matrix::rotation(angle)
            .times_matrix(&Matrix::stretch(1.0, handedness * sqrt_3 / 2.0))
            .times_matrix(&Matrix::x_shear(0.5));
        let point_to_hex = hex_to_point
            .inverse()
            .context("hex layout transform is not invertible")?;

        let step = Matrix::rotation(handedness * FRAC_PI_3);
        let corner_vectors = circular_vectors(
            Vector::direction(angle + handedness * FRAC_PI_6)
                * (distance / sqrt_3),
            step,
        );
        let edge_center_vectors =
            circular_vectors(Vector::direction(angle) * (distance / 2.0), step);

        let layout = Self {
            settings,
            hex_to_point,
            point_to_hex,
            corner_vectors,
            edge_center_vectors,
        };
        debug!("Built hex layout {:?}", layout);
        Ok(layout)
    }

    /// Get a reference to the settings that this layout was built from
    pub fn settings(&self) -> &HexLayoutSettings {
        &self.settings
    }

    /// The linear transform from axial space to the plane, before scaling by
    /// center-to-center distance and shifting by the origin
    pub fn hex_to_point_transform(&self) -> Matrix {
        self.hex_to_point
    }

    /// Inverse of [Self::hex_to_point_transform]
    pub fn point_to_hex_transform(&self) -> Matrix {
        self.point_to_hex
    }

    /// Offset from the center of any hex to its corner with the given index.
    /// Corner 0 sits halfway (30°) between the `q` axis and the `r` axis, and
    /// every following corner is another 60° further around toward `r`.
    ///
    /// Panics if the index isn't in `0..6`.
    pub fn corner_vector(&self, index: usize) -> Vector {
        self.corner_vectors[index]
    }

    /// Offset from the center of any hex to the middle of its edge with the
    /// given index. Edge 0 faces directly along `+q`, and every following edge
    /// is another 60° further around toward `r`, which means edge center `i`
    /// faces the neighbor in [HexDirection](crate::HexDirection) `i`.
    ///
    /// Panics if the index isn't in `0..6`.
    pub fn edge_center_vector(&self, index: usize) -> Vector {
        self.edge_center_vectors[index]
    }

    /// All 6 corner vectors. See [Self::corner_vector]
    pub fn corner_vectors(&self) -> &[Vector; 6] {
        &self.corner_vectors
    }

    /// All 6 edge-center vectors. See [Self::edge_center_vector]
    pub fn edge_center_vectors(&self) -> &[Vector; 6] {
        &self.edge_center_vectors
    }

    /// Get the point at the center of a hex
    pub fn center_of_hex(&self, hex: Hex) -> Vector {
        self.settings.origin
            + self.hex_to_point * hex.to_axial_vector()
                * self.settings.center_to_center_distance
    }

    /// Get the hex that contains a point. Every point in the plane belongs to
    /// exactly one hex. Points that fall exactly on an edge or corner go to
    /// whichever hex the rounding in [Hex::from_axial_vector] picks.
    pub fn hex_from_point(&self, point: Vector) -> Hex {
        let scaled = (point - self.settings.origin)
            / self.settings.center_to_center_distance;
        Hex::from_axial_vector(self.point_to_hex * scaled)
    }

    /// Get the corners of a hex centered at the given point, in circular order
    pub fn corners_from_center(&self, center: Vector) -> [Vector; 6] {
        self.corner_vectors.map(|corner| center + corner)
    }

    /// Get the corners of a hex, in circular order. These make up a polygon
    /// that can be drawn directly.
    pub fn corners_of_hex(&self, hex: Hex) -> [Vector; 6] {
        self.corners_from_center(self.center_of_hex(hex))
    }

    /// Get the midpoints of each edge of a hex, in circular order
    pub fn edge_centers_of_hex(&self, hex: Hex) -> [Vector; 6] {
        let center = self.center_of_hex(hex);
        self.edge_center_vectors.map(|edge_center| center + edge_center)
    }

    /// Get the smallest rectangle that contains every corner of every given
    /// hex. If there are no hexes, this gives [Bounds::EMPTY].
    pub fn bounds(&self, hexes: impl IntoIterator<Item = Hex>) -> Bounds {
        hexes
            .into_iter()
            .flat_map(|hex| self.corners_of_hex(hex))
            .collect()
    }
}

/// Build 6 vectors by rotating the first one around the circle
fn circular_vectors(first: Vector, step: Matrix) -> [Vector; 6] {
    let mut vectors = [first; 6];
    for i in 1..vectors.len() {
        vectors[i] = step * vectors[i - 1];
    }
    vectors
}
