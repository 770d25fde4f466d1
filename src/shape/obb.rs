//! Definition of the oriented bounding box primitive.

use crate::bounding_volume::Aabb;
use crate::math::{Matrix, Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::{oriented_corner, BoxCorner, InvalidPrimitive};

/// An oriented bounding box.
///
/// The box is centered at `center`, its local axes are the columns of
/// `axes` (expected to be orthonormal), and it spans `[-half_extents[i],
/// half_extents[i]]` along the `i`-th local axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Obb {
    /// The center of the box.
    pub center: Point<Real>,
    /// The half-extents of the box along each of its local axes.
    pub half_extents: Vector<Real>,
    /// The local axes of the box, one per column, expressed in world-space.
    pub axes: Matrix<Real>,
}

impl Obb {
    /// Creates a new oriented box.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>, axes: Matrix<Real>) -> Self {
        Self {
            center,
            half_extents,
            axes,
        }
    }

    /// The oriented box covering exactly the same space as `aabb`.
    #[inline]
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self::new(aabb.center, aabb.half_extents, Matrix::identity())
    }

    /// Computes an oriented box enclosing the given set of points.
    ///
    /// The axes are the eigenvectors of the covariance matrix of the points. The result is
    /// not guaranteed to be the smallest enclosing box, though it should be a pretty good one
    /// for most purposes. Returns `None` if `pts` is empty.
    pub fn from_points(pts: &[Point<Real>]) -> Option<Self> {
        let cov = crate::utils::cov(pts)?;
        let mut eigv = cov.symmetric_eigen().eigenvectors;

        if eigv.determinant() < 0.0 {
            eigv = -eigv;
        }

        let mut mins = Vector::repeat(Real::MAX);
        let mut maxs = Vector::repeat(-Real::MAX);

        for pt in pts {
            for i in 0..DIM {
                let dot = eigv.column(i).dot(&pt.coords);
                mins[i] = mins[i].min(dot);
                maxs[i] = maxs[i].max(dot);
            }
        }

        let local_center = (maxs + mins) / 2.0;
        Some(Self::new(
            Point::from(eigv * local_center),
            (maxs - mins) / 2.0,
            eigv,
        ))
    }

    /// The `i`-th local axis of this box.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector<Real> {
        self.axes.column(i).into_owned()
    }

    /// The world-space position of the given corner.
    #[inline]
    pub fn corner(&self, which: BoxCorner) -> Point<Real> {
        oriented_corner(&self.center, &self.half_extents, &self.axes, which)
    }

    /// The eight corners of this box, ordered like [`BoxCorner::ALL`].
    pub fn vertices(&self) -> [Point<Real>; 8] {
        BoxCorner::ALL.map(|which| self.corner(which))
    }

    /// The coordinates of `pt` in the local frame of this box.
    #[inline]
    pub fn local_point(&self, pt: &Point<Real>) -> Vector<Real> {
        self.axes.tr_mul(&(pt - self.center))
    }

    /// The world-space position of a point given in the local frame of this box.
    #[inline]
    pub fn world_point(&self, local: &Vector<Real>) -> Point<Real> {
        self.center + self.axes * local
    }

    /// The point of this box closest to `pt`. This is `pt` itself if it is inside.
    pub fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        let local = self.local_point(pt);
        let clamped = local.zip_map(&self.half_extents, |x, e| x.max(-e).min(e));
        self.world_point(&clamped)
    }

    /// The volume of this box.
    #[inline]
    pub fn volume(&self) -> Real {
        self.half_extents.x * self.half_extents.y * self.half_extents.z * 8.0
    }

    /// Is any extent of this box zero or negative?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.half_extents.iter().any(|e| *e <= 0.0)
    }

    /// Are the axes of this box orthonormal, up to [`DEFAULT_EPSILON`]?
    pub fn has_orthonormal_axes(&self) -> bool {
        let gram = self.axes.tr_mul(&self.axes);
        relative_eq!(gram, Matrix::identity(), epsilon = DEFAULT_EPSILON * 10.0)
    }

    /// This box translated by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Self::new(self.center + shift, self.half_extents, self.axes)
    }

    /// This box with its half-extents multiplied by `scale`, keeping its center and axes.
    #[inline]
    pub fn scaled_wrt_center(&self, scale: Real) -> Self {
        Self::new(self.center, self.half_extents * scale.abs(), self.axes)
    }

    /// Checks that this box is finite and has non-negative half-extents.
    pub fn validate(&self) -> Result<(), InvalidPrimitive> {
        let axes = [self.axis(0), self.axis(1), self.axis(2)];
        crate::shape::error::check_finite(
            axes.iter()
                .chain([&self.center.coords, &self.half_extents]),
            &[],
        )?;

        if self.half_extents.iter().any(|e| *e < 0.0) {
            Err(InvalidPrimitive::NegativeExtents)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use crate::bounding_volume::Aabb;
    use crate::math::{Matrix, Point, Real, Vector};
    use crate::shape::{BoxCorner, Obb};
    use na::Rotation3;

    fn rotated_box() -> Obb {
        let rot = Rotation3::from_axis_angle(&Vector::z_axis(), core::f64::consts::FRAC_PI_4 as Real);
        Obb::new(
            Point::new(1.0, 0.0, 0.0),
            Vector::new(1.0, 0.5, 2.0),
            rot.into_inner(),
        )
    }

    #[test]
    fn obb_from_aabb_has_same_corners() {
        let aabb = Aabb::new(Point::new(1.0, 2.0, 3.0), Vector::new(0.5, 1.0, 1.5));
        let obb = Obb::from_aabb(&aabb);

        for which in BoxCorner::ALL {
            assert_relative_eq!(obb.corner(which), aabb.corner(which));
        }
    }

    #[test]
    fn obb_local_frame() {
        let obb = rotated_box();
        assert!(obb.has_orthonormal_axes());

        let world = Point::new(1.0, 2.0, 0.5);
        let local = obb.local_point(&world);
        assert_relative_eq!(obb.world_point(&local), world, epsilon = 1.0e-5);

        // The max corner has all local coordinates equal to the half-extents.
        assert_relative_eq!(
            obb.local_point(&obb.corner(BoxCorner::Max)),
            obb.half_extents,
            epsilon = 1.0e-5
        );
    }

    #[test]
    fn obb_closest_point() {
        let obb = Obb::new(Point::origin(), Vector::repeat(1.0), Matrix::identity());

        assert_eq!(obb.closest_point(&Point::new(0.5, 0.0, 0.0)), Point::new(0.5, 0.0, 0.0));
        assert_eq!(obb.closest_point(&Point::new(3.0, -4.0, 0.5)), Point::new(1.0, -1.0, 0.5));
        assert_relative_eq!(obb.volume(), 8.0);
    }

    #[test]
    fn obb_from_points_encloses_points() {
        let obb = rotated_box();
        let pts = obb.vertices();
        let fitted = Obb::from_points(&pts).unwrap();

        for pt in &pts {
            let local = fitted.local_point(pt);
            for i in 0..3 {
                assert!(local[i].abs() <= fitted.half_extents[i] + 1.0e-4);
            }
        }

        assert!(Obb::from_points(&[]).is_none());
    }
}
