/// Angles whose difference in radians is strictly smaller than this are considered the same
pub const ANGLE_EPSILON: f64 = 1e-13;

/// Vectors whose squared distance is at most this are considered the same
pub const VECTOR_EPSILON: f64 = 1e-13;

/// Largest per-cell difference between two matrices that are considered the same
pub const MATRIX_EPSILON: f64 = 1e-10;
