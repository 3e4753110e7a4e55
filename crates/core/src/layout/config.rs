use crate::geom::Vector;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that fully defines a [HexLayout](crate::HexLayout). Two
/// layouts built from the same settings will always be identical.
///
/// Every field has a default, so when deserializing, any subset of fields can
/// be given. Settings are validated when the layout is built, not here.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HexLayoutSettings {
    /// Distance between the centers of two adjacent hexes. Every distance in
    /// the layout scales with this: the distance from a hex's center to any
    /// of its corners is `center_to_center_distance / √3`, and to the middle
    /// of any of its edges is `center_to_center_distance / 2`. Must be
    /// positive and finite.
    #[validate(custom = "validate_positive_finite")]
    pub center_to_center_distance: f64,

    /// The point in the plane where the center of [Hex::ORIGIN](crate::Hex)
    /// lands.
    #[validate(custom = "validate_finite_vector")]
    pub origin: Vector,

    /// Angle of the `q` axis, in radians, measured from +x toward +y. This is
    /// the direction from any hex's center to the center of its `+q`
    /// neighbor.
    ///
    /// - `0` gives "pointy topped" hexes, with `q` running along +x
    /// - `π/2` gives "flat topped" hexes, with `q` running along +y
    ///
    /// Any finite angle is allowed though, to get rotated grids.
    #[validate(custom = "validate_finite")]
    pub q_axis_angle: f64,

    /// Which way the `r` axis is turned from the `q` axis. If true, it is 60°
    /// further along in the direction of increasing angles (i.e. clockwise
    /// on a screen where +y is down). If false, it is 60° the other way.
    pub r_axis_clockwise: bool,
}

impl Default for HexLayoutSettings {
    fn default() -> Self {
        Self {
            center_to_center_distance: 1.0,
            origin: Vector::ZERO,
            q_axis_angle: 0.0,
            r_axis_clockwise: true,
        }
    }
}

fn validate_positive_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("positive_finite"))
    }
}

fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

fn validate_finite_vector(value: &Vector) -> Result<(), ValidationError> {
    if value.x.is_finite() && value.y.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}
