use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::query::sat::{self, CoordAxis, SatTester};
use crate::shape::{Obb, Triangle};

/// The nine cross products of the coordinate axes with the edges of a triangle.
#[inline]
fn basis_edge_axes(triangle: &Triangle) -> [(Vector<Real>, Real); 9] {
    let [x, y, z] = triangle.edges_scaled_directions();
    let (nx, ny, nz) = (x.norm_squared(), y.norm_squared(), z.norm_squared());

    [
        // Vector::{x, y, z}().cross(x)
        (Vector::new(0.0, -x.z, x.y), nx),
        (Vector::new(x.z, 0.0, -x.x), nx),
        (Vector::new(-x.y, x.x, 0.0), nx),
        // Vector::{x, y, z}().cross(y)
        (Vector::new(0.0, -y.z, y.y), ny),
        (Vector::new(y.z, 0.0, -y.x), ny),
        (Vector::new(-y.y, y.x, 0.0), ny),
        // Vector::{x, y, z}().cross(z)
        (Vector::new(0.0, -z.z, z.y), nz),
        (Vector::new(z.z, 0.0, -z.x), nz),
        (Vector::new(-z.y, z.x, 0.0), nz),
    ]
}

/// Finds an axis separating an AABB and a triangle, if any.
///
/// This is the complete 13-axes test: the three coordinate axes, the triangle
/// normal, and the nine cross products of the coordinate axes with the triangle
/// edges. Near-zero cross products (edges parallel to a coordinate axis) are skipped.
///
/// Returns `None` if the shapes intersect (touching counts as intersecting).
pub fn aabb_triangle_find_separating_axis(aabb: &Aabb, triangle: &Triangle) -> Option<Vector<Real>> {
    let pts = triangle.vertices();
    let mins = aabb.mins();
    let maxs = aabb.maxs();

    for axis in CoordAxis::ALL {
        let i = axis.index();
        if !SatTester::on_axis(axis, &pts).overlaps_range(mins[i], maxs[i]) {
            return Some(axis.to_vector());
        }
    }

    let corners = aabb.vertices();
    let normal = triangle.scaled_normal();

    if !SatTester::new(&normal, &corners).contains_value(normal.dot(&triangle.a.coords)) {
        return Some(normal);
    }

    for (axis, scale) in basis_edge_axes(triangle) {
        if sat::is_degenerate_axis(&axis, scale) {
            continue;
        }

        if !SatTester::new(&axis, &corners).overlaps(&SatTester::new(&axis, &pts)) {
            return Some(axis);
        }
    }

    None
}

/// Finds an axis separating an oriented box and a triangle, if any.
///
/// Tests the three box axes, the triangle normal, and the nine cross products of
/// the box axes with the triangle edges.
///
/// Returns `None` if the shapes intersect (touching counts as intersecting).
pub fn obb_triangle_find_separating_axis(obb: &Obb, triangle: &Triangle) -> Option<Vector<Real>> {
    let pts = triangle.vertices();
    let separates = |axis: &Vector<Real>| {
        let (min, max) = sat::obb_projection_range(obb, axis);
        !SatTester::new(axis, &pts).overlaps_range(min, max)
    };

    for i in 0..3 {
        let axis = obb.axis(i);
        if separates(&axis) {
            return Some(axis);
        }
    }

    let normal = triangle.scaled_normal();
    let (min, max) = sat::obb_projection_range(obb, &normal);
    let offset = normal.dot(&triangle.a.coords);

    if offset < min || offset > max {
        return Some(normal);
    }

    for edge in triangle.edges_scaled_directions() {
        for i in 0..3 {
            let obb_axis = obb.axis(i);
            let axis = obb_axis.cross(&edge);
            let scale = obb_axis.norm_squared() * edge.norm_squared();

            if !sat::is_degenerate_axis(&axis, scale) && separates(&axis) {
                return Some(axis);
            }
        }
    }

    None
}
