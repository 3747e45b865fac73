//! Error types for grid construction and node access.

use std::fmt;

use voxpath_core::Point3;

/// Matrix axis along which a ragged shape was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The `y` rows of one `x` plane.
    Y,
    /// The `z` columns of one `(x, y)` row.
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Y => f.write_str("y"),
            Self::Z => f.write_str("z"),
        }
    }
}

/// Errors raised by [`Grid`](crate::Grid) and the name-based selection
/// surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    /// Direct node access with coordinates outside the grid.
    #[error("node {pos} is outside grid of size {size}")]
    OutOfBounds { pos: Point3, size: Point3 },

    /// A cost matrix is not a dense box: some row along `axis` has a
    /// different length than the first one.
    #[error("ragged matrix: {axis} length at {at:?} is {found}, expected {expected}")]
    ShapeMismatch {
        axis: Axis,
        /// Outer indices of the offending row (`[x]` or `[x, y]`).
        at: Vec<usize>,
        expected: usize,
        found: usize,
    },

    /// A search endpoint is not walkable.
    #[error("endpoint {pos} is not walkable")]
    InvalidEndpoint { pos: Point3 },

    /// No heuristic is registered under this name.
    #[error("unknown heuristic \u{201c}{0}\u{201d}")]
    UnknownHeuristic(String),

    /// No diagonal-movement policy is registered under this name.
    #[error("unknown diagonal movement policy \u{201c}{0}\u{201d}")]
    UnknownMovement(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = GridError::OutOfBounds {
            pos: Point3::new(3, 0, -1),
            size: Point3::new(3, 3, 3),
        };
        assert_eq!(
            e.to_string(),
            "node (3, 0, -1) is outside grid of size (3, 3, 3)"
        );

        let e = GridError::ShapeMismatch {
            axis: Axis::Z,
            at: vec![1, 2],
            expected: 4,
            found: 3,
        };
        assert_eq!(
            e.to_string(),
            "ragged matrix: z length at [1, 2] is 3, expected 4"
        );

        let e = GridError::UnknownHeuristic("taxicab".into());
        assert_eq!(e.to_string(), "unknown heuristic \u{201c}taxicab\u{201d}");
    }
}
