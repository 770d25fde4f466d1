use crate::math::{Point, Real, Vector};

/// One of the three coordinate axes.
///
/// Projecting a point on a coordinate axis does not need a dot product: it is
/// just one of its components. [`SatTester::add_on_axis`] uses this.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CoordAxis {
    /// The X axis.
    X = 0,
    /// The Y axis.
    Y = 1,
    /// The Z axis.
    Z = 2,
}

impl CoordAxis {
    /// The three coordinate axes, in order.
    pub const ALL: [CoordAxis; 3] = [CoordAxis::X, CoordAxis::Y, CoordAxis::Z];

    /// The index of the component this axis selects.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The unit vector along this axis.
    #[inline]
    pub fn to_vector(self) -> Vector<Real> {
        let mut v = Vector::zeros();
        v[self.index()] = 1.0;
        v
    }
}

/// Accumulates the projections of a point set onto a candidate separating axis.
///
/// This is the building block of every Separating-Axis-Theorem test of this crate: two convex
/// shapes are disjoint iff there exists an axis on which the ranges of their projections do not
/// overlap. A tester reduces a point set to the `[min, max]` range of its projections on one
/// axis, and can then be compared against a scalar, a range, or another tester.
///
/// A tester that has not been fed any point has an inverted range (`min > max`). It contains
/// no value and overlaps nothing: an empty shape never intersects anything.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use overlap3d::na::{Point3, Vector3};
/// use overlap3d::query::sat::SatTester;
///
/// let axis = Vector3::x();
/// let a = SatTester::new(&axis, &[Point3::new(0.0, 1.0, 0.0), Point3::new(2.0, -1.0, 0.0)]);
/// let b = SatTester::new(&axis, &[Point3::new(1.5, 0.0, 0.0), Point3::new(4.0, 0.0, 3.0)]);
/// let c = SatTester::new(&axis, &[Point3::new(2.5, 0.0, 0.0)]);
///
/// assert!(a.overlaps(&b));
/// assert!(!a.overlaps(&c));
/// assert!(!SatTester::default().overlaps(&a));
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SatTester {
    /// The smallest projection seen so far.
    pub min: Real,
    /// The largest projection seen so far.
    pub max: Real,
}

impl Default for SatTester {
    #[inline]
    fn default() -> Self {
        SatTester {
            min: Real::MAX,
            max: -Real::MAX,
        }
    }
}

impl SatTester {
    /// A tester fed with the projections of `pts` on `axis`.
    #[inline]
    pub fn new(axis: &Vector<Real>, pts: &[Point<Real>]) -> Self {
        let mut result = Self::default();
        let _ = result.add_points(axis, pts);
        result
    }

    /// A tester fed with the projections of `pts` on a coordinate axis.
    #[inline]
    pub fn on_axis(axis: CoordAxis, pts: &[Point<Real>]) -> Self {
        let mut result = Self::default();
        let _ = result.add_points_on_axis(axis, pts);
        result
    }

    /// Empties this tester.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Has this tester been fed at least one point?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Widens the accumulated range to include `value`.
    #[inline]
    pub fn add_value(&mut self, value: Real) -> &mut Self {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self
    }

    /// Widens the accumulated range to include the projection of `pt` on `axis`.
    #[inline]
    pub fn add(&mut self, axis: &Vector<Real>, pt: &Point<Real>) -> &mut Self {
        self.add_value(axis.dot(&pt.coords))
    }

    /// Widens the accumulated range to include the projection of `pt` on a coordinate axis.
    #[inline]
    pub fn add_on_axis(&mut self, axis: CoordAxis, pt: &Point<Real>) -> &mut Self {
        self.add_value(pt[axis.index()])
    }

    /// Widens the accumulated range to include the projections of all `pts` on `axis`.
    pub fn add_points(&mut self, axis: &Vector<Real>, pts: &[Point<Real>]) -> &mut Self {
        for pt in pts {
            let _ = self.add(axis, pt);
        }

        self
    }

    /// Widens the accumulated range to include the projections of all `pts` on a coordinate axis.
    pub fn add_points_on_axis(&mut self, axis: CoordAxis, pts: &[Point<Real>]) -> &mut Self {
        for pt in pts {
            let _ = self.add_on_axis(axis, pt);
        }

        self
    }

    /// Is `value` within the accumulated range, boundaries included?
    #[inline]
    pub fn contains_value(&self, value: Real) -> bool {
        self.min <= value && value <= self.max
    }

    /// Does the accumulated range overlap `[min, max]`, boundaries included?
    #[inline]
    pub fn overlaps_range(&self, min: Real, max: Real) -> bool {
        self.min <= max && self.max >= min
    }

    /// Does the accumulated range overlap the range of `other`, boundaries included?
    #[inline]
    pub fn overlaps(&self, other: &SatTester) -> bool {
        self.overlaps_range(other.min, other.max)
    }
}

#[cfg(test)]
mod test {
    use super::{CoordAxis, SatTester};
    use crate::math::{Point, Vector};

    #[test]
    fn empty_tester_overlaps_nothing() {
        let empty = SatTester::default();
        let full = SatTester::new(&Vector::x(), &[Point::new(-1.0e6, 0.0, 0.0), Point::new(1.0e6, 0.0, 0.0)]);

        assert!(empty.is_empty());
        assert!(!empty.contains_value(0.0));
        assert!(!empty.overlaps(&full));
        assert!(!full.overlaps(&empty));
        assert!(!empty.overlaps(&empty));
        assert!(!empty.overlaps_range(-1.0, 1.0));
    }

    #[test]
    fn adding_the_same_point_is_idempotent() {
        let axis = Vector::new(1.0, 2.0, -0.5);
        let pt = Point::new(0.3, -1.0, 4.0);

        let mut once = SatTester::default();
        let _ = once.add(&axis, &pt);

        let mut many = once;
        let _ = many.add(&axis, &pt).add(&axis, &pt).add_points(&axis, &[pt, pt]);

        assert_eq!(once, many);
        assert_eq!(once.min, once.max);
        assert!(once.contains_value(axis.dot(&pt.coords)));
    }

    #[test]
    fn coordinate_axis_matches_generic_axis() {
        let pts = [
            Point::new(1.0, -2.0, 3.0),
            Point::new(-4.0, 5.0, 0.5),
            Point::new(0.0, 0.0, -7.0),
        ];

        for axis in CoordAxis::ALL {
            assert_eq!(SatTester::on_axis(axis, &pts), SatTester::new(&axis.to_vector(), &pts));
        }
    }

    #[test]
    fn reset_empties_the_tester() {
        let mut tester = SatTester::on_axis(CoordAxis::Y, &[Point::new(0.0, 2.0, 0.0)]);
        assert!(tester.contains_value(2.0));

        tester.reset();
        assert!(tester.is_empty());
        assert_eq!(tester, SatTester::default());
    }

    #[test]
    fn touching_ranges_overlap() {
        let tester = SatTester::on_axis(CoordAxis::X, &[Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)]);

        assert!(tester.overlaps_range(1.0, 2.0));
        assert!(tester.overlaps_range(-3.0, 0.0));
        assert!(!tester.overlaps_range(1.0001, 2.0));
        assert!(tester.contains_value(1.0));
    }
}
