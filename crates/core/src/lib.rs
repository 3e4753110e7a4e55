//! Conversions between a hexagonal grid and the Cartesian plane. Hexes are
//! addressed with axial coordinates (see [Hex]), and a [HexLayout] maps them
//! to points and polygons that can be drawn, or maps points (e.g. a mouse
//! click) back to the hex that contains them.
//!
//! ```
//! use hexlayout::{Hex, HexLayout, HexLayoutSettings, Vector};
//!
//! let layout = HexLayout::new(HexLayoutSettings {
//!     center_to_center_distance: 12.0,
//!     origin: Vector::new(5.0, 7.0),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let hex = Hex::new(2, 3);
//! let center = layout.center_of_hex(hex);
//! assert_eq!(layout.hex_from_point(center), hex);
//! // Six points, ready to be drawn as a polygon
//! let corners = layout.corners_of_hex(hex);
//! println!("{:?}", corners);
//! ```
//!
//! See [HexLayoutSettings] for details on how the layout can be customized.

mod geom;
mod hex;
mod layout;

pub use crate::{
    geom::{Bounds, Matrix, SingularMatrixError, Vector},
    hex::{Hex, HexDirection, HexKeyError},
    layout::{HexLayout, HexLayoutSettings},
};
