pub use nalgebra::{matrix, vector};
pub use num_traits::{Num, One, Zero};

mod aabb;
pub mod indexing;
pub use aabb::*;

/// Grid coordinates are `(row, col)` pairs, signed so that
/// neighbor offsets can be added without casts.
pub type Coord<const GRID_DIMENSION: usize> =
    nalgebra::SVector<i32, { GRID_DIMENSION }>;

/// Per axis `[min, max]` pairs, one row per dimension.
pub type Bounds<const GRID_DIMENSION: usize> =
    nalgebra::SMatrix<i32, { GRID_DIMENSION }, 2>;
