//! Basic unit types of the hex coordinate system. See the parent module
//! documentation for a description of the coordinate system itself.

use crate::geom::Vector;
use derive_more::{Add, AddAssign, Display, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{cmp, str::FromStr};
use strum::{EnumIter, IntoEnumIterator};

/// Nudge applied to both ends of a line before sampling it, so that samples
/// which land exactly on a hex edge fall consistently to one side of it
const LINE_NUDGE: Vector = Vector::new(1e-6, 2e-6);

/// A single hex in the grid, addressed by axial coordinates. See the
/// module-level docs for a description of the coordinate system.
///
/// Only `q` and `r` are stored. The third cube component is always derived as
/// `s = -q - r`, so `q + r + s = 0` holds for every value of this type. A hex
/// is also a vector in the hex grid (an offset from [Hex::ORIGIN]), which is
/// what makes the arithmetic operators meaningful.
///
/// `s` is returned as an `i64`, since `-q - r` doesn't fit in an `i32` for
/// every pair of `i32`s. The arithmetic operators and [Hex::scaled_by] stay in
/// `i32` and overflow like plain integer math (a panic in debug builds), so
/// don't do arithmetic on hexes near the edge of the `i32` range.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    MulAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a hex from its axial coordinates. `s` is derived.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    /// The derived third cube component, `-q - r`
    pub fn s(&self) -> i64 {
        -i64::from(self.q) - i64::from(self.r)
    }

    /// A string that uniquely identifies this hex, in the format `<q>_<r>`.
    /// Useful for keying hexes in maps that require string keys. Parse it back
    /// with [Hex::from_key].
    pub fn key(&self) -> String {
        format!("{}_{}", self.q, self.r)
    }

    /// Parse a key generated by [Hex::key]. Both components must be base-10
    /// integers that fit in an `i32`, separated by a single `_`. Anything else
    /// (including surrounding whitespace) is rejected.
    pub fn from_key(key: &str) -> Result<Self, HexKeyError> {
        let err = || HexKeyError {
            key: key.to_owned(),
        };
        let (q, r) = key.split_once('_').ok_or_else(err)?;
        let q = q.parse().map_err(|_| err())?;
        let r = r.parse().map_err(|_| err())?;
        Ok(Self::new(q, r))
    }

    /// Find the hex that contains a fractional point in axial space. `v.x` is
    /// read as `q` and `v.y` as `r`.
    ///
    /// All three cube components are rounded to the nearest integer, then
    /// whichever one picked up the most rounding error gets recomputed from
    /// the other two so the result sits back on the `q + r + s = 0` plane.
    /// Ties go to `s`, then `r`. Since `s` isn't stored, "recomputing" it just
    /// means keeping the rounded `q` and `r`.
    ///
    /// Halves round up (toward +∞), so every hex owns the same half of its
    /// boundary and rounding commutes with shifting by a whole hex.
    ///
    /// The grid ends at the `i32` range. A component that lands outside it is
    /// clamped to [i32::MIN] or [i32::MAX], so points past the edge map to a
    /// hex on the edge. NaN maps to 0. Neither case fails.
    pub fn from_axial_vector(v: Vector) -> Self {
        let (q, r) = (v.x, v.y);
        let s = -q - r;

        let mut q_round = round_half_up(q);
        let mut r_round = round_half_up(r);
        let s_round = round_half_up(s);

        let q_diff = (q_round - q).abs();
        let r_diff = (r_round - r).abs();
        let s_diff = (s_round - s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q_round = -r_round - s_round;
        } else if r_diff > s_diff {
            r_round = -q_round - s_round;
        }

        // Float to int casts saturate, which is the clamping described above
        Self::new(q_round as i32, r_round as i32)
    }

    /// Convert to a point in axial space, with `q` on x and `r` on y. This is
    /// NOT a point in the Cartesian plane; use a layout for that.
    pub fn to_axial_vector(&self) -> Vector {
        Vector::new(self.q.into(), self.r.into())
    }

    /// Number of steps between this hex and the origin
    pub fn length(&self) -> usize {
        Self::lattice_length(self.q.into(), self.r.into())
    }

    /// Number of single-hex steps needed to get from this hex to the other
    pub fn distance_to(&self, other: Hex) -> usize {
        Self::lattice_length(
            i64::from(self.q) - i64::from(other.q),
            i64::from(self.r) - i64::from(other.r),
        )
    }

    /// Computed in `i64` so that no pair of `i32` hexes can overflow
    fn lattice_length(q: i64, r: i64) -> usize {
        let s = -q - r;
        ((q.abs() + r.abs() + s.abs()) / 2) as usize
    }

    /// Scale each axial component independently. For uniform scaling, just
    /// multiply by an integer.
    pub fn scaled_by(&self, kq: i32, kr: i32) -> Self {
        Self::new(self.q * kq, self.r * kr)
    }

    /// Get the hex one step away in the given direction
    pub fn adjacent(self, direction: HexDirection) -> Self {
        self + direction.offset()
    }

    /// Get an iterator of all the hexes directly adjacent to this one, in
    /// [HexDirection] order. The iterator will always contain exactly 6
    /// values.
    pub fn adjacents(self) -> impl Iterator<Item = Hex> {
        HexDirection::iter().map(move |dir| self.adjacent(dir))
    }

    /// Get every hex within `radius` steps of this one (including this one),
    /// which together form a larger hexagon. Radius 0 is 1 hex, 1 is 7, 2 is
    /// 19, and so on: `3r² + 3r + 1`.
    pub fn within_radius(self, radius: u16) -> impl Iterator<Item = Hex> {
        let radius = i32::from(radius);
        (-radius..=radius).flat_map(move |q| {
            // If we just did [-radius, radius] for r as well, we'd end up with
            // a rhombus instead of a hexagon
            let r_min = cmp::max(-radius, -q - radius);
            let r_max = cmp::min(radius, -q + radius);
            (r_min..=r_max).map(move |r| self + Hex::new(q, r))
        })
    }

    /// Get every hex that the straight line between the centers of these two
    /// hexes passes through, starting with this hex and ending with the other.
    /// Consecutive hexes in the list are always adjacent.
    pub fn line_to(self, other: Hex) -> Vec<Hex> {
        let steps = self.distance_to(other);
        if steps == 0 {
            return vec![self];
        }

        let start = self.to_axial_vector() + LINE_NUDGE;
        let end = other.to_axial_vector() + LINE_NUDGE;
        (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                Self::from_axial_vector(start + (end - start) * t)
            })
            .collect()
    }
}

/// Round to the nearest integer, with halves going toward +∞. Unlike
/// `(x + 0.5).floor()`, this can't be pushed over by the addition itself
/// (e.g. for the largest float below 0.5).
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

impl FromStr for Hex {
    type Err = HexKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

/// Returned when parsing a string that isn't a valid hex key. See
/// [Hex::from_key] for the expected format.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[display(fmt = "Invalid hex key {:?}, expected format \"<q>_<r>\"", key)]
pub struct HexKeyError {
    pub key: String,
}

impl std::error::Error for HexKeyError {}

/// The 6 directions in which hexes line up side-to-side. Each one points from
/// the center of a hex, through the middle of one of its edges, to the center
/// of a neighbor.
///
/// Variants are in circular order, starting at `+q` and turning toward `+r`.
/// This is the same order as a layout's edge-center vectors, so the edge
/// center at index `i` faces the neighbor in the direction with
/// [HexDirection::index] `i`.
#[derive(Copy, Clone, Debug, Display, EnumIter, PartialEq, Eq, Hash)]
pub enum HexDirection {
    PosQ,
    PosR,
    NegQPosR,
    NegQ,
    NegR,
    PosQNegR,
}

impl HexDirection {
    /// Get the offset that moves a hex one step in this direction
    pub fn offset(self) -> Hex {
        match self {
            Self::PosQ => Hex::new(1, 0),
            Self::PosR => Hex::new(0, 1),
            Self::NegQPosR => Hex::new(-1, 1),
            Self::NegQ => Hex::new(-1, 0),
            Self::NegR => Hex::new(0, -1),
            Self::PosQNegR => Hex::new(1, -1),
        }
    }

    /// Position of this direction in the circular order, in `0..6`
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::PosQ => Self::NegQ,
            Self::PosR => Self::NegR,
            Self::NegQPosR => Self::PosQNegR,
            Self::NegQ => Self::PosQ,
            Self::NegR => Self::PosR,
            Self::PosQNegR => Self::NegQPosR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_tokens, Token};
    use std::collections::HashSet;

    #[test]
    fn test_components() {
        let hex = Hex::new(2, 3);
        assert_eq!(hex.q(), 2);
        assert_eq!(hex.r(), 3);
        assert_eq!(hex.s(), -5);
        assert_eq!(Hex::ORIGIN.s(), 0);
        assert_eq!(Hex::default(), Hex::ORIGIN);
        assert_eq!(hex.to_string(), "(2, 3, -5)");
    }

    #[test]
    fn test_arithmetic() {
        let h1 = Hex::new(2, 3);
        let h2 = Hex::new(5, -7);
        assert_eq!(h1 + h2, Hex::new(7, -4));
        assert_eq!(h1 - h2, Hex::new(-3, 10));
        assert_eq!(-h1, Hex::new(-2, -3));
        assert_eq!(h1 * 3, Hex::new(6, 9));
        assert_eq!(h1.scaled_by(3, -1), Hex::new(6, -3));

        // s follows along
        let sum = h1 + h2;
        assert_eq!(i64::from(sum.q()) + i64::from(sum.r()) + sum.s(), 0);
    }

    #[test]
    fn test_components_extreme() {
        // s doesn't fit in an i32 for any of these
        let hex = Hex::new(i32::MIN, 0);
        assert_eq!(hex.s(), 1 << 31);
        assert_eq!(hex.to_string(), "(-2147483648, 0, 2147483648)");
        assert_eq!(Hex::new(i32::MAX, i32::MAX).s(), -2 * i64::from(i32::MAX));
        assert_eq!(Hex::new(i32::MIN, i32::MIN).s(), 1 << 32);

        let parsed = Hex::from_key(&hex.key()).unwrap();
        assert_eq!(parsed, hex);
        assert_eq!(
            i64::from(parsed.q()) + i64::from(parsed.r()) + parsed.s(),
            0
        );
    }

    #[test]
    fn test_key() {
        assert_eq!(Hex::new(2, 3).key(), "2_3");
        assert_eq!(Hex::new(-2, -3).key(), "-2_-3");

        assert_eq!(Hex::from_key("2_3"), Ok(Hex::new(2, 3)));
        assert_eq!(Hex::from_key("-2_-3"), Ok(Hex::new(-2, -3)));
        assert_eq!("0_-17".parse::<Hex>(), Ok(Hex::new(0, -17)));

        let extreme = Hex::new(i32::MIN, i32::MAX);
        assert_eq!(Hex::from_key(&extreme.key()), Ok(extreme));
    }

    #[test]
    fn test_key_invalid() {
        for key in &[
            "",
            "_",
            "2",
            "2_",
            "_3",
            "2_3_4",
            "2-3",
            "2.0_3",
            "a_3",
            " 2_3",
            "2_3 ",
            "2 _3",
            "2147483648_0",
        ] {
            assert_eq!(
                Hex::from_key(key),
                Err(HexKeyError {
                    key: key.to_string()
                }),
                "expected key {:?} to be rejected",
                key
            );
        }

        assert_eq!(
            Hex::from_key("2-3").unwrap_err().to_string(),
            "Invalid hex key \"2-3\", expected format \"<q>_<r>\""
        );
    }

    #[test]
    fn test_from_axial_vector() {
        let expected = Hex::new(2, 3);
        assert_eq!(Hex::from_axial_vector(Vector::new(2.0, 3.0)), expected);
        assert_eq!(Hex::from_axial_vector(Vector::new(2.1, 3.1)), expected);
        assert_eq!(Hex::from_axial_vector(Vector::new(1.9, 2.9)), expected);
        assert_eq!(Hex::from_axial_vector(Vector::new(2.1, 2.8)), expected);
        assert_eq!(Hex::from_axial_vector(Vector::new(1.8, 3.1)), expected);
    }

    #[test]
    fn test_from_axial_vector_corrections() {
        // Naive rounding gives (0, 0, -1) for all of these, which is off the
        // plane. The component with the most error gets fixed.
        // q
        assert_eq!(
            Hex::from_axial_vector(Vector::new(0.4, 0.3)),
            Hex::new(1, 0)
        );
        // r
        assert_eq!(
            Hex::from_axial_vector(Vector::new(0.3, 0.4)),
            Hex::new(0, 1)
        );
        // s
        assert_eq!(
            Hex::from_axial_vector(Vector::new(0.3, 0.3)),
            Hex::new(0, 0)
        );
        // q and r tie, r loses
        assert_eq!(
            Hex::from_axial_vector(Vector::new(0.4, 0.4)),
            Hex::new(0, 1)
        );

        // Halves round up, even when negative
        assert_eq!(
            Hex::from_axial_vector(Vector::new(-2.5, 0.5)),
            Hex::new(-2, 0)
        );
    }

    #[test]
    fn test_from_axial_vector_edges() {
        // Each hex owns the same side of its boundary, so the point halfway
        // to the -q neighbor is ours and the point halfway to +q is theirs
        assert_eq!(
            Hex::from_axial_vector(Vector::new(-0.5, 0.0)),
            Hex::ORIGIN
        );
        assert_eq!(
            Hex::from_axial_vector(Vector::new(0.5, 0.0)),
            Hex::new(1, 0)
        );
        assert_eq!(
            Hex::from_axial_vector(Vector::new(-1.5, 0.0)),
            Hex::new(-1, 0)
        );
        assert_eq!(
            Hex::from_axial_vector(Vector::new(-0.5, 0.0)),
            Hex::from_axial_vector(Vector::new(0.5, 0.0)) - Hex::new(1, 0)
        );

        // Largest float below a half still rounds down
        let below_half = 0.5 - f64::EPSILON / 4.0;
        assert!(below_half < 0.5);
        assert_eq!(round_half_up(below_half), 0.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-1.6), -2.0);
    }

    #[test]
    fn test_from_axial_vector_out_of_range() {
        // Way past the edge of the grid, so q gets clamped
        let hex = Hex::from_axial_vector(Vector::new(-1e10, 0.0));
        assert_eq!(hex, Hex::new(i32::MIN, 0));
        assert_eq!(hex.s(), 1 << 31);
        assert_eq!(hex.to_string(), "(-2147483648, 0, 2147483648)");

        assert_eq!(
            Hex::from_axial_vector(Vector::new(1e10, -1e10)),
            Hex::new(i32::MAX, i32::MIN)
        );
        assert_eq!(
            Hex::from_axial_vector(Vector::new(f64::NAN, f64::NAN)),
            Hex::ORIGIN
        );
    }

    #[test]
    fn test_distance_to() {
        let h0 = Hex::ORIGIN;
        let h1 = Hex::new(-1, 1);
        let h2 = Hex::new(2, -1);
        let h3 = Hex::new(2, -3);

        assert_eq!(h0.distance_to(h0), 0);
        assert_eq!(h3.distance_to(h3), 0);

        assert_eq!(h0.distance_to(h1), 1);
        assert_eq!(h0.distance_to(h2), 2);
        assert_eq!(h0.distance_to(h3), 3);
        assert_eq!(h1.distance_to(h2), 3);
        assert_eq!(h1.distance_to(h3), 4);
        assert_eq!(h2.distance_to(h3), 2);

        assert_eq!(Hex::new(2, 3).distance_to(Hex::new(5, 7)), 7);
        assert_eq!(Hex::new(5, 3).distance_to(Hex::new(2, 7)), 4);
        assert_eq!(Hex::new(2, 7).distance_to(Hex::new(5, 3)), 4);

        // Far enough apart to overflow i32 math
        assert_eq!(
            Hex::new(i32::MIN, 0).distance_to(Hex::new(i32::MAX, 0)),
            u32::MAX as usize
        );
    }

    #[test]
    fn test_length() {
        assert_eq!(Hex::ORIGIN.length(), 0);
        assert_eq!(Hex::new(2, 3).length(), 5);
        assert_eq!(Hex::new(-2, 3).length(), 3);
        let hex = Hex::new(-2, 3);
        assert_eq!(hex.length(), hex.distance_to(Hex::ORIGIN));
    }

    #[test]
    fn test_direction() {
        let directions: Vec<HexDirection> = HexDirection::iter().collect();
        assert_eq!(directions.len(), 6);
        for (i, dir) in directions.iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(dir.offset().length(), 1);
            assert_eq!(dir.opposite().opposite(), *dir);
            assert_eq!(dir.opposite().offset(), -dir.offset());
            assert_eq!(dir.opposite().index(), (i + 3) % 6);
        }

        // Consecutive directions are adjacent to each other too
        for i in 0..6 {
            let a = directions[i].offset();
            let b = directions[(i + 1) % 6].offset();
            assert_eq!(a.distance_to(b), 1);
        }
    }

    #[test]
    fn test_adjacents() {
        let hex = Hex::new(2, 3);
        let adjacents: Vec<Hex> = hex.adjacents().collect();
        assert_eq!(
            adjacents,
            vec![
                Hex::new(3, 3),
                Hex::new(2, 4),
                Hex::new(1, 4),
                Hex::new(1, 3),
                Hex::new(2, 2),
                Hex::new(3, 2),
            ]
        );
        assert_eq!(hex.adjacent(HexDirection::NegR), Hex::new(2, 2));
    }

    #[test]
    fn test_within_radius() {
        let center = Hex::new(2, -1);
        for radius in 0..5u16 {
            let hexes: HashSet<Hex> = center.within_radius(radius).collect();
            let r = radius as usize;
            assert_eq!(hexes.len(), 3 * r * r + 3 * r + 1);
            assert!(hexes.contains(&center));
            assert!(hexes.iter().all(|h| center.distance_to(*h) <= r));
        }
    }

    #[test]
    fn test_line_to() {
        let start = Hex::new(0, 0);
        assert_eq!(start.line_to(start), vec![start]);
        assert_eq!(
            start.line_to(Hex::new(3, 0)),
            vec![
                Hex::new(0, 0),
                Hex::new(1, 0),
                Hex::new(2, 0),
                Hex::new(3, 0)
            ]
        );

        // A line that runs straight along hex edges still steps one at a time
        let end = Hex::new(2, -4);
        let line = Hex::new(-1, 1).line_to(end);
        assert_eq!(line.len(), Hex::new(-1, 1).distance_to(end) + 1);
        assert_eq!(line.first(), Some(&Hex::new(-1, 1)));
        assert_eq!(line.last(), Some(&end));
        for pair in line.windows(2) {
            assert_eq!(pair[0].distance_to(pair[1]), 1);
        }
    }

    #[test]
    fn test_serde() {
        assert_tokens(
            &Hex::new(2, -3),
            &[
                Token::Struct {
                    name: "Hex",
                    len: 2,
                },
                Token::Str("q"),
                Token::I32(2),
                Token::Str("r"),
                Token::I32(-3),
                Token::StructEnd,
            ],
        );
    }
}
