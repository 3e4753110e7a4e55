//! This module holds the types that make up the hex coordinate system.
//!
//! ## Coordinate System
//!
//! We use the axial coordinate system [described by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial).
//! Here's the TL;DR:
//!
//! Every hex is addressed by two integers, `q` and `r`. Stepping to a neighbor
//! changes `q`, `r`, or both (in opposite directions) by exactly 1. It's
//! often easier to think about the grid in three dimensions though, so there's
//! a third component `s = -q - r`. Looked at that way, every hex is a point
//! on the plane `q + r + s = 0` and the six neighbors of a hex are the six
//! ways to add 1 to one component and subtract 1 from another. Distances,
//! rounding and lines are all much simpler in three dimensions.
//!
//! Since `s` can always be derived, we only store `q` and `r`.
//!
//! ## Orientation
//!
//! The coordinate system has no inherent orientation. Whether the grid is
//! "flat topped" or "pointy topped", and which way each axis runs on screen, is
//! decided entirely by a [HexLayout](crate::HexLayout). The only fixed
//! relationship is that the `q` and `r` axes are 60° apart.

mod unit;

pub use self::unit::{Hex, HexDirection, HexKeyError};
