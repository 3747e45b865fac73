//! The [`Grid`] type — a dense 3D box of [`Node`]s.
//!
//! Storage is a flat `Vec` in x-major order (`[x][y][z]`), so a [`NodeId`]
//! is simply the flat index. Topology (size, walkability, weight) is fixed
//! at construction; only the nodes' search fields change afterwards.

use std::ops::{Index, IndexMut};

use voxpath_core::{Bounds3, Point3};

use crate::error::{Axis, GridError};
use crate::heuristic::Heuristic;
use crate::movement::DiagonalMovement;
use crate::neighbors;
use crate::node::{Node, NodeId};

// ---------------------------------------------------------------------------
// Matrix cell values
// ---------------------------------------------------------------------------

/// A value that can seed a cell's weight when building from a matrix.
///
/// Floats are truncated toward zero like an integer cast.
pub trait CellValue: Copy {
    fn weight(self) -> i32;
}

impl CellValue for bool {
    #[inline]
    fn weight(self) -> i32 {
        i32::from(self)
    }
}

impl CellValue for u8 {
    #[inline]
    fn weight(self) -> i32 {
        i32::from(self)
    }
}

impl CellValue for i32 {
    #[inline]
    fn weight(self) -> i32 {
        self
    }
}

impl CellValue for u32 {
    #[inline]
    fn weight(self) -> i32 {
        i32::try_from(self).unwrap_or(i32::MAX)
    }
}

impl CellValue for i64 {
    #[inline]
    fn weight(self) -> i32 {
        self.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

impl CellValue for f32 {
    #[inline]
    fn weight(self) -> i32 {
        self as i32
    }
}

impl CellValue for f64 {
    #[inline]
    fn weight(self) -> i32 {
        self as i32
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A dense voxel map owning one [`Node`] per cell.
///
/// Reusing a grid for another search pass requires [`cleanup`](Grid::cleanup)
/// first; stale `closed`/`parent`/cost fields are otherwise carried over.
/// For concurrent passes, share `&Grid` and keep per-run state in a
/// [`SearchTable`](crate::SearchTable) instead.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    depth: usize,
    bounds: Bounds3,
    nodes: Vec<Node>,
}

impl Grid {
    /// An all-walkable grid with weight 1 everywhere. Any zero dimension
    /// yields an empty grid.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self::build(width, height, depth, |_| (true, 1))
    }

    /// Build a grid from a dense `[x][y][z]` matrix.
    ///
    /// Each cell's weight is the matrix value; it is walkable when the
    /// weight is at least 1, or, with `inverse`, when it is 0 or less.
    /// Fails with [`GridError::ShapeMismatch`] if the matrix is ragged.
    pub fn from_matrix<T, Row, Plane>(matrix: &[Plane], inverse: bool) -> Result<Self, GridError>
    where
        T: CellValue,
        Row: AsRef<[T]>,
        Plane: AsRef<[Row]>,
    {
        let width = matrix.len();
        let height = matrix.first().map_or(0, |plane| plane.as_ref().len());
        let depth = matrix
            .first()
            .and_then(|plane| plane.as_ref().first())
            .map_or(0, |row| row.as_ref().len());

        for (x, plane) in matrix.iter().enumerate() {
            let plane = plane.as_ref();
            if plane.len() != height {
                return Err(GridError::ShapeMismatch {
                    axis: Axis::Y,
                    at: vec![x],
                    expected: height,
                    found: plane.len(),
                });
            }
            for (y, row) in plane.iter().enumerate() {
                let found = row.as_ref().len();
                if found != depth {
                    return Err(GridError::ShapeMismatch {
                        axis: Axis::Z,
                        at: vec![x, y],
                        expected: depth,
                        found,
                    });
                }
            }
        }

        Ok(Self::build(width, height, depth, |p| {
            let weight = matrix[p.x as usize].as_ref()[p.y as usize].as_ref()[p.z as usize].weight();
            let walkable = if inverse { weight <= 0 } else { weight >= 1 };
            (walkable, weight)
        }))
    }

    fn build(
        width: usize,
        height: usize,
        depth: usize,
        cell: impl Fn(Point3) -> (bool, i32),
    ) -> Self {
        let dim = |n: usize| i32::try_from(n).unwrap_or(i32::MAX);
        let bounds = Bounds3::from_size(dim(width), dim(height), dim(depth));
        let nodes: Vec<Node> = bounds
            .iter()
            .map(|p| {
                let (walkable, weight) = cell(p);
                Node::new(p.x, p.y, p.z, walkable, weight)
            })
            .collect();
        log::debug!(
            "built {width}x{height}x{depth} grid, {} of {} cells walkable",
            nodes.iter().filter(|n| n.walkable()).count(),
            nodes.len()
        );
        Self {
            width,
            height,
            depth,
            bounds,
            nodes,
        }
    }

    // -----------------------------------------------------------------------
    // Dimensions
    // -----------------------------------------------------------------------

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The box `[0, width) × [0, height) × [0, depth)`.
    #[inline]
    pub fn bounds(&self) -> Bounds3 {
        self.bounds
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Whether `(x, y, z)` lies inside the grid.
    #[inline]
    pub fn inside(&self, x: i32, y: i32, z: i32) -> bool {
        self.bounds.contains(Point3::new(x, y, z))
    }

    /// Whether `(x, y, z)` is inside the grid and walkable. Total: any
    /// coordinate may be probed.
    #[inline]
    pub fn walkable(&self, x: i32, y: i32, z: i32) -> bool {
        self.walkable_at(Point3::new(x, y, z))
    }

    /// [`walkable`](Grid::walkable) for a point.
    #[inline]
    pub fn walkable_at(&self, p: Point3) -> bool {
        self.id_of(p).is_some_and(|id| self.nodes[id.0].walkable())
    }

    /// Storage id of the node at `p`, or `None` outside the grid.
    #[inline]
    pub fn id_of(&self, p: Point3) -> Option<NodeId> {
        if !self.bounds.contains(p) {
            return None;
        }
        let (x, y, z) = (p.x as usize, p.y as usize, p.z as usize);
        Some(NodeId((x * self.height + y) * self.depth + z))
    }

    fn checked_id(&self, p: Point3) -> Result<NodeId, GridError> {
        self.id_of(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.bounds.size(),
        })
    }

    /// The node at `(x, y, z)`.
    pub fn node(&self, x: i32, y: i32, z: i32) -> Result<&Node, GridError> {
        let id = self.checked_id(Point3::new(x, y, z))?;
        Ok(&self.nodes[id.0])
    }

    /// Mutable access to the node at `(x, y, z)`.
    pub fn node_mut(&mut self, x: i32, y: i32, z: i32) -> Result<&mut Node, GridError> {
        let id = self.checked_id(Point3::new(x, y, z))?;
        Ok(&mut self.nodes[id.0])
    }

    /// The node at a coordinate triple or array.
    pub fn node_from_array(&self, p: impl Into<Point3>) -> Result<&Node, GridError> {
        let p = p.into();
        self.node(p.x, p.y, p.z)
    }

    /// The node with the given id.
    ///
    /// # Panics
    ///
    /// If `id` was not obtained from a grid of this size.
    #[inline]
    pub fn node_at(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Mutable [`node_at`](Grid::node_at).
    #[inline]
    pub fn node_at_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Check that `p` can serve as a search start or goal.
    ///
    /// The neighbor and backtrace operations never reject blocked endpoints;
    /// finders call this before searching.
    pub fn require_walkable(&self, p: impl Into<Point3>) -> Result<NodeId, GridError> {
        let p = p.into();
        let id = self.checked_id(p)?;
        if !self.nodes[id.0].walkable() {
            return Err(GridError::InvalidEndpoint { pos: p });
        }
        Ok(id)
    }

    /// All nodes in storage order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    // -----------------------------------------------------------------------
    // Connectivity
    // -----------------------------------------------------------------------

    /// Walkable neighbors of `node` admitted by `movement`, faces first,
    /// then edge diagonals, then corner diagonals.
    pub fn neighbors(&self, node: &Node, movement: DiagonalMovement) -> Vec<&Node> {
        let mut out = Vec::with_capacity(26);
        neighbors::expand(
            node.pos(),
            movement,
            |p| self.walkable_at(p),
            |p| {
                if let Some(id) = self.id_of(p) {
                    out.push(&self.nodes[id.0]);
                }
            },
        );
        out
    }

    /// Append the ids of the neighbors of `id` into `buf`, in the same order
    /// as [`neighbors`](Grid::neighbors). The caller clears `buf` before
    /// calling.
    pub fn neighbor_ids(&self, id: NodeId, movement: DiagonalMovement, buf: &mut Vec<NodeId>) {
        let at = self.nodes[id.0].pos();
        let count = neighbors::expand(
            at,
            movement,
            |p| self.walkable_at(p),
            |p| buf.extend(self.id_of(p)),
        );
        log::trace!("{count} neighbors of {at} under {movement}");
    }

    /// Cost of stepping from `from` onto `to`: the Euclidean step length
    /// (1, √2 or √3 for unit steps) times the weight of `to`.
    pub fn step_cost(&self, from: NodeId, to: NodeId) -> f64 {
        let (from, to) = (&self.nodes[from.0], &self.nodes[to.0]);
        Heuristic::Euclidean.between(from.pos(), to.pos()) * f64::from(to.weight())
    }

    /// Reset the search fields of every node.
    pub fn cleanup(&mut self) {
        for node in &mut self.nodes {
            node.cleanup();
        }
        log::debug!("reset search state of {} nodes", self.nodes.len());
    }
}

impl Index<NodeId> for Grid {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        self.node_at(id)
    }
}

impl IndexMut<NodeId> for Grid {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        self.node_at_mut(id)
    }
}
