//! Definition of the triangle primitive.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::PointQuery;
use crate::shape::{InvalidPrimitive, Plane, Segment};

use na::Unit;

/// A triangle.
///
/// The order of the vertices defines the winding, hence the direction of
/// the normal: `(b - a) × (c - a)`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

/// Description of the location of a point on a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TrianglePointLocation {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on an edge.
    ///
    /// The 0-st edge is the segment AB.
    /// The 1-st edge is the segment BC.
    /// The 2-nd edge is the segment AC.
    OnEdge(u32, [Real; 2]),
    /// The point lies on the triangle interior.
    OnFace([Real; 3]),
}

impl TrianglePointLocation {
    /// The barycentric coordinates corresponding to this point location.
    pub fn barycentric_coordinates(&self) -> [Real; 3] {
        let mut bcoords = [0.0; 3];

        match self {
            TrianglePointLocation::OnVertex(i) => bcoords[*i as usize] = 1.0,
            TrianglePointLocation::OnEdge(i, uv) => {
                let idx = match i {
                    0 => (0, 1),
                    1 => (1, 2),
                    _ => (0, 2),
                };

                bcoords[idx.0] = uv[0];
                bcoords[idx.1] = uv[1];
            }
            TrianglePointLocation::OnFace(uvw) => bcoords = *uvw,
        }

        bcoords
    }

    /// Returns `true` if the point is located on the relative interior of the triangle.
    pub fn is_on_face(&self) -> bool {
        matches!(*self, TrianglePointLocation::OnFace(..))
    }
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges of this triangle: [AB, BC, CA].
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// The directions of the three edges of this triangle, scaled by their length: [AB, BC, CA].
    #[inline]
    pub fn edges_scaled_directions(&self) -> [Vector<Real>; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Its length is twice the area of the triangle.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The normal of this triangle.
    ///
    /// The normal points such that it is collinear to `AB × AC`. Returns `None` if
    /// the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        if self.is_degenerate() {
            None
        } else {
            Some(Unit::new_normalize(self.scaled_normal()))
        }
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// The perimeter of this triangle.
    #[inline]
    pub fn perimeter(&self) -> Real {
        na::distance(&self.a, &self.b)
            + na::distance(&self.b, &self.c)
            + na::distance(&self.c, &self.a)
    }

    /// Tests if this triangle is degenerate, i.e., its points are almost aligned.
    ///
    /// The test does not depend on the size of the triangle: it checks whether the squared sine
    /// of the angle at `a` is below [`DEFAULT_EPSILON`]. A triangle with two equal vertices is
    /// always degenerate.
    pub fn is_degenerate(&self) -> bool {
        let ab = self.b - self.a;
        let ac = self.c - self.a;

        ab.cross(&ac).norm_squared() <= DEFAULT_EPSILON * ab.norm_squared() * ac.norm_squared()
    }

    /// The plane supporting this triangle, with a unit normal oriented like [`Self::normal`].
    ///
    /// Returns `None` if the triangle is degenerate.
    pub fn plane(&self) -> Option<Plane> {
        self.normal()
            .map(|n| Plane::from_point_normal(&self.a, &n.into_inner()))
    }

    /// The barycentric coordinates `[u, v, w]` of the projection of `pt` on the plane of this
    /// triangle, such that the projection is `u * a + v * b + w * c`.
    ///
    /// Returns `None` if the triangle is degenerate.
    pub fn barycentric(&self, pt: &Point<Real>) -> Option<[Real; 3]> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ap = pt - self.a;

        let d00 = ab.norm_squared();
        let d01 = ab.dot(&ac);
        let d11 = ac.norm_squared();
        let d20 = ap.dot(&ab);
        let d21 = ap.dot(&ac);
        let denom = d00 * d11 - d01 * d01;

        if denom <= DEFAULT_EPSILON * d00 * d11 {
            return None;
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Some([1.0 - v - w, v, w])
    }

    /// Does `pt` lie on the plane of this triangle, up to `epsilon`?
    ///
    /// Every point is coplanar with a degenerate triangle.
    pub fn is_coplanar_with_point(&self, pt: &Point<Real>, epsilon: Real) -> bool {
        match self.plane() {
            Some(plane) => plane.distance(pt) <= epsilon,
            None => true,
        }
    }

    /// Do both triangles lie on the same plane, up to `epsilon`?
    pub fn is_coplanar_with(&self, other: &Triangle, epsilon: Real) -> bool {
        other
            .vertices()
            .iter()
            .all(|pt| self.is_coplanar_with_point(pt, epsilon))
            && self
                .vertices()
                .iter()
                .all(|pt| other.is_coplanar_with_point(pt, epsilon))
    }

    /// Does `pt` lie on this triangle, up to `epsilon`?
    pub fn contains_point_eps(&self, pt: &Point<Real>, epsilon: Real) -> bool {
        self.distance_squared_to_point(pt) <= epsilon * epsilon
    }

    /// Does `segment` lie on this triangle, up to `epsilon`?
    ///
    /// Because a triangle is convex, this holds iff both endpoints lie on it.
    pub fn contains_segment(&self, segment: &Segment, epsilon: Real) -> bool {
        self.contains_point_eps(&segment.a, epsilon) && self.contains_point_eps(&segment.b, epsilon)
    }

    /// This triangle with its winding reversed.
    #[inline]
    pub fn reversed(&self) -> Self {
        Triangle::new(self.a, self.c, self.b)
    }

    /// This triangle translated by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Triangle::new(self.a + shift, self.b + shift, self.c + shift)
    }

    /// Checks that all three vertices are finite.
    pub fn validate(&self) -> Result<(), InvalidPrimitive> {
        crate::shape::error::check_finite([&self.a.coords, &self.b.coords, &self.c.coords], &[])
    }
}
