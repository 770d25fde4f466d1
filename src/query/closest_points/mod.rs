//! Closest points between pairs of primitives.

pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_with_locations,
    distance_squared_segment_segment,
};

mod closest_points_segment_segment;
