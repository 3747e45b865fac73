//! Connectivity and cost model for path search over dense 3D voxel grids.
//!
//! This crate is the part of a 3D pathfinder that sits below the search
//! algorithm itself. A finder (A\*, Dijkstra, bidirectional or
//! iterative-deepening variants) builds a [`Grid`], repeatedly asks it for
//! [`neighbors`](Grid::neighbors) under a [`DiagonalMovement`] policy, scores
//! nodes with a [`heuristic`], and finally turns parent links into a path
//! with [`backtrace()`].
//!
//! - [`Grid`] / [`Node`] — dense `[x][y][z]` storage with embedded per-search
//!   fields and an explicit [`cleanup`](Grid::cleanup) between runs.
//! - [`DiagonalMovement`] — when edge and corner diagonals are allowed past
//!   obstacles.
//! - [`heuristic`] — `null`, `manhattan`, `euclidean`, `chebyshev`, `octile`,
//!   selectable by name through [`Heuristic`].
//! - [`SearchTable`] — per-run state kept outside the grid, for runs that
//!   share one `&Grid`.
//!
//! # Example
//!
//! ```
//! use voxpath::{DiagonalMovement, Grid};
//!
//! let mut matrix = vec![vec![vec![1; 3]; 3]; 3];
//! matrix[1][1][0] = 0;
//! let grid = Grid::from_matrix(&matrix, false).unwrap();
//!
//! let center = grid.node(1, 1, 1).unwrap();
//! assert_eq!(grid.neighbors(center, DiagonalMovement::Always).len(), 25);
//! assert_eq!(grid.neighbors(center, DiagonalMovement::OnlyWhenNoObstacle).len(), 17);
//! ```

mod backtrace;
mod error;
mod grid;
pub mod heuristic;
mod movement;
mod neighbors;
mod node;
mod search;

pub use backtrace::{Path, SQRT2, SQRT3, backtrace, bidirectional_backtrace};
pub use error::{Axis, GridError};
pub use grid::{CellValue, Grid};
pub use heuristic::{Heuristic, HeuristicFn};
pub use movement::DiagonalMovement;
pub use neighbors::{DIRECTIONS, contributors};
pub use node::{Node, NodeId, OpenEntry};
pub use search::{SearchState, SearchTable};
pub use voxpath_core::{Bounds3, Point3};
