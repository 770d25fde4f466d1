use crate::math::{Point, Real};
use na;

/// Description of the projection of a point on a shape.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointProjection {
    /// Whether or not the point to project was inside of the shape.
    ///
    /// For flat shapes (planes, triangles, segments) this is `true` if the point
    /// lies on the shape up to [`DEFAULT_EPSILON`](crate::math::DEFAULT_EPSILON).
    pub is_inside: bool,
    /// The projection result.
    pub point: Point<Real>,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point<Real>) -> Self {
        PointProjection { is_inside, point }
    }

    /// Returns `true` if `Self::is_inside` is `true` or if the distance between the projected point and `point` is smaller than `min_dist`.
    pub fn is_inside_eps(&self, original_point: &Point<Real>, min_dist: Real) -> bool {
        self.is_inside || na::distance_squared(original_point, &self.point) < min_dist * min_dist
    }
}

/// Trait of objects that can be tested for point inclusion and projection.
///
/// Bounding volumes are solid: a point inside of them is its own projection.
pub trait PointQuery {
    /// Projects a point on `self`.
    fn project_point(&self, pt: &Point<Real>) -> PointProjection;

    /// Projects a point on `self`, unless the projection lies further than the given max distance.
    fn project_point_with_max_dist(&self, pt: &Point<Real>, max_dist: Real) -> Option<PointProjection> {
        let proj = self.project_point(pt);
        if na::distance(&proj.point, pt) > max_dist {
            None
        } else {
            Some(proj)
        }
    }

    /// Computes the squared minimal distance between a point and `self`.
    #[inline]
    fn distance_squared_to_point(&self, pt: &Point<Real>) -> Real {
        na::distance_squared(pt, &self.project_point(pt).point)
    }

    /// Computes the minimal distance between a point and `self`.
    #[inline]
    fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        self.distance_squared_to_point(pt).sqrt()
    }

    /// Tests if the given point is inside of `self`.
    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.project_point(pt).is_inside
    }
}

/// Returns shape-specific info in addition to generic projection information
///
/// One requirement for the `PointQuery` trait is to be usable as a trait
/// object. Unfortunately this precludes us from adding an associated type to it
/// that might allow us to return shape-specific information in addition to the
/// general information provided in `PointProjection`. This is where
/// `PointQueryWithLocation` comes in. It forgoes the ability to be used as a trait
/// object in exchange for being able to provide shape-specific projection
/// information.
///
/// Any shapes that implement `PointQuery` but are able to provide extra
/// information, can implement `PointQueryWithLocation` in addition and have their
/// `PointQuery::project_point` implementation just call out to
/// `PointQueryWithLocation::project_point_and_get_location`.
pub trait PointQueryWithLocation {
    /// Additional shape-specific projection information
    ///
    /// In addition to the generic projection information returned in
    /// `PointProjection`, implementations might provide shape-specific
    /// projection info. The type of this shape-specific information is defined
    /// by this associated type.
    type Location;

    /// Projects a point on `self`.
    fn project_point_and_get_location(&self, pt: &Point<Real>) -> (PointProjection, Self::Location);

    /// Projects a point on `self`, with a maximum projection distance.
    fn project_point_and_get_location_with_max_dist(
        &self,
        pt: &Point<Real>,
        max_dist: Real,
    ) -> Option<(PointProjection, Self::Location)> {
        let (proj, location) = self.project_point_and_get_location(pt);
        if na::distance(&proj.point, pt) > max_dist {
            None
        } else {
            Some((proj, location))
        }
    }
}
