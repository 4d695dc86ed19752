//! Geometry kernel for the air hockey table: vectors and points, matrices, rays, planes, spheres,
//! their intersections, and the projection helpers that tie screen touches to world space.
//!
//! Conventions:
//! - right-handed world, +y is up, the table lies in the xz-plane
//! - matrices use row vectors (`v * M`), which shares its memory layout with GL's column-major arrays
//! - degenerate cases (zero-length normals, parallel rays, singular matrices) return `None` instead of NaN

mod utils;

mod numeric;
pub use numeric::*;

mod constants;
pub use constants::*;

mod angle;
pub use angle::*;

mod vec;
pub use vec::*;

mod point;
pub use point::*;

mod mat;
pub use mat::*;

mod plane;
pub use plane::*;

mod circle;
pub use circle::*;

mod cylinder;
pub use cylinder::*;

mod sphere;
pub use sphere::*;

mod ray;
pub use ray::*;

mod intersections;
pub use intersections::*;

mod projection;
pub use projection::*;

static_assertions::assert_eq_size!(f32v3, [f32; 3]);
static_assertions::assert_eq_size!(f32v4, [f32; 4]);
static_assertions::assert_eq_size!(f32p3, [f32; 3]);
static_assertions::assert_eq_size!(f32m4, [f32; 16]);
