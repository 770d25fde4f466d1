//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::cov::{center_cov, cov};
pub use self::point_in_triangle::{
    dominant_plane_axes, is_point_in_triangle2d, orient2d, project2d,
};
pub use self::segments_intersection::segments_intersect2d;

mod center;
mod cov;
mod point_in_triangle;
mod segments_intersection;
