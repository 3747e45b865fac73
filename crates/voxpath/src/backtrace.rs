//! Path reconstruction from parent links, and the step-length constants
//! shared with the heuristics.

use voxpath_core::Point3;

use crate::grid::Grid;
use crate::node::{Node, NodeId};

/// Length of an edge-diagonal step.
pub const SQRT2: f64 = std::f64::consts::SQRT_2;

/// Length of a corner-diagonal step.
pub const SQRT3: f64 = 1.732_050_807_568_877_2;

/// An ordered sequence of voxel coordinates.
pub type Path = Vec<Point3>;

/// Follow parent links from `node` to the root of its search tree and
/// return the coordinates root-first, `node` last.
///
/// A node without a parent yields a single-element path.
pub fn backtrace(grid: &Grid, node: &Node) -> Path {
    walk(grid, node.pos(), node.parent, |id| grid[id].parent)
}

/// Join the two halves met by a bidirectional search.
///
/// `a` was expanded from the start side and `b` from the goal side. The
/// result is the start-side path followed by the reversed goal-side path.
/// Nothing is deduplicated: if `a` and `b` are the same meeting node it
/// appears twice.
pub fn bidirectional_backtrace(grid: &Grid, a: &Node, b: &Node) -> Path {
    join(backtrace(grid, a), backtrace(grid, b))
}

pub(crate) fn join(mut start_side: Path, mut goal_side: Path) -> Path {
    goal_side.reverse();
    start_side.append(&mut goal_side);
    start_side
}

/// Collect `from` and its ancestors, then reverse into root-first order.
///
/// Stops after `grid.len()` links; a cyclic chain comes back truncated.
pub(crate) fn walk(
    grid: &Grid,
    from: Point3,
    mut parent: Option<NodeId>,
    parent_of: impl Fn(NodeId) -> Option<NodeId>,
) -> Path {
    let mut path = vec![from];
    while let Some(id) = parent {
        if path.len() > grid.len() {
            log::warn!("parent chain from {from} is cyclic, truncating backtrace");
            break;
        }
        path.push(grid[id].pos());
        parent = parent_of(id);
    }
    path.reverse();
    path
}
