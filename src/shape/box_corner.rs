//! Selection of the corners of a box.

use crate::math::{Matrix, Point, Real, Vector};

/// One of the eight corners of a box.
///
/// The discriminant is a 3-bit mask: bit `0` selects the positive half-extent
/// along the local X axis, bit `1` along Y, and bit `2` along Z. A cleared bit
/// selects the negative half-extent.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BoxCorner {
    /// The corner with the smallest coordinate on every axis.
    Min = 0,
    /// The `(+x, -y, -z)` corner.
    X = 1,
    /// The `(-x, +y, -z)` corner.
    Y = 2,
    /// The `(+x, +y, -z)` corner.
    Xy = 3,
    /// The `(-x, -y, +z)` corner.
    Z = 4,
    /// The `(+x, -y, +z)` corner.
    Xz = 5,
    /// The `(-x, +y, +z)` corner.
    Yz = 6,
    /// The corner with the greatest coordinate on every axis.
    Max = 7,
}

impl BoxCorner {
    /// All the corners, ordered by their bit mask.
    pub const ALL: [BoxCorner; 8] = [
        BoxCorner::Min,
        BoxCorner::X,
        BoxCorner::Y,
        BoxCorner::Xy,
        BoxCorner::Z,
        BoxCorner::Xz,
        BoxCorner::Yz,
        BoxCorner::Max,
    ];

    /// The 3-bit mask of this corner.
    #[inline]
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// The corner selected by the three lowest bits of `bits`.
    #[inline]
    pub fn from_bits(bits: u8) -> BoxCorner {
        Self::ALL[(bits & 0b111) as usize]
    }

    /// The corner diametrically opposed to this one.
    #[inline]
    pub fn opposite(self) -> BoxCorner {
        Self::from_bits(!self.bits())
    }

    /// The offset from a box center to this corner, for the given half-extents.
    #[inline]
    pub fn offset(self, half_extents: &Vector<Real>) -> Vector<Real> {
        let bits = self.bits();
        let sign = |bit: u8| if bits & bit != 0 { 1.0 } else { -1.0 };
        Vector::new(
            half_extents.x * sign(0b001),
            half_extents.y * sign(0b010),
            half_extents.z * sign(0b100),
        )
    }
}

/// The position of the corner `which` of the axis-aligned box with the given center and half-extents.
#[inline]
pub fn corner(center: &Point<Real>, half_extents: &Vector<Real>, which: BoxCorner) -> Point<Real> {
    center + which.offset(half_extents)
}

/// The position of the corner `which` of the oriented box with the given center, half-extents,
/// and axes (one axis per column of `axes`).
#[inline]
pub fn oriented_corner(
    center: &Point<Real>,
    half_extents: &Vector<Real>,
    axes: &Matrix<Real>,
    which: BoxCorner,
) -> Point<Real> {
    center + axes * which.offset(half_extents)
}
