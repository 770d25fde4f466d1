mod aabb_aabb;
mod aabb_triangle;
mod containment;
mod cross_check;
mod degenerate;
mod random;
mod ray_plane;
mod scenarios;
mod symmetry;
mod triangle_triangle;
