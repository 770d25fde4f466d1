use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::query::{PointProjection, PointQuery, PointQueryWithLocation};
use crate::shape::{Segment, SegmentPointLocation};

impl PointQuery for Segment {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        self.project_point_and_get_location(pt).0
    }
}

impl PointQueryWithLocation for Segment {
    type Location = SegmentPointLocation;

    #[inline]
    fn project_point_and_get_location(&self, pt: &Point<Real>) -> (PointProjection, Self::Location) {
        let ab = self.b - self.a;
        let ap = pt - self.a;
        let ab_ap = ab.dot(&ap);
        let sqnab = ab.norm_squared();

        let proj;
        let location;

        if ab_ap <= 0.0 {
            // Voronoï region of vertex 'a'.
            location = SegmentPointLocation::OnVertex(0);
            proj = self.a;
        } else if ab_ap >= sqnab {
            // Voronoï region of vertex 'b'.
            location = SegmentPointLocation::OnVertex(1);
            proj = self.b;
        } else {
            // Voronoï region of the segment interior.
            // Here `0 < ab_ap < sqnab` so `sqnab` is not zero.
            let u = ab_ap / sqnab;
            let bcoords = [1.0 - u, u];
            location = SegmentPointLocation::OnEdge(bcoords);
            proj = self.a + ab * u;
        }

        let inside = na::distance_squared(&proj, pt) <= DEFAULT_EPSILON * DEFAULT_EPSILON;

        (PointProjection::new(inside, proj), location)
    }
}

#[cfg(test)]
mod test {
    use crate::math::Point;
    use crate::query::{PointQuery, PointQueryWithLocation};
    use crate::shape::{Segment, SegmentPointLocation};

    #[test]
    fn segment_point_projection_regions() {
        let seg = Segment::new(Point::origin(), Point::new(4.0, 0.0, 0.0));

        let (proj, loc) = seg.project_point_and_get_location(&Point::new(-1.0, 1.0, 0.0));
        assert_eq!(proj.point, seg.a);
        assert_eq!(loc, SegmentPointLocation::OnVertex(0));

        let (proj, loc) = seg.project_point_and_get_location(&Point::new(9.0, 0.0, 1.0));
        assert_eq!(proj.point, seg.b);
        assert_eq!(loc, SegmentPointLocation::OnVertex(1));

        let (proj, loc) = seg.project_point_and_get_location(&Point::new(1.0, 2.0, 0.0));
        assert_eq!(proj.point, Point::new(1.0, 0.0, 0.0));
        assert_eq!(loc, SegmentPointLocation::OnEdge([0.75, 0.25]));
        assert!(!proj.is_inside);

        assert!(seg.contains_point(&Point::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn degenerate_segment_projects_on_its_point() {
        let seg = Segment::new(Point::new(1.0, 1.0, 1.0), Point::new(1.0, 1.0, 1.0));
        let (proj, loc) = seg.project_point_and_get_location(&Point::new(3.0, 1.0, 1.0));

        assert_eq!(proj.point, seg.a);
        assert_eq!(loc, SegmentPointLocation::OnVertex(0));
    }
}
