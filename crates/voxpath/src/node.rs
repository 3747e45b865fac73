use std::cmp::Ordering;

use voxpath_core::Point3;

/// Index of a node inside the [`Grid`](crate::Grid) that owns it.
///
/// This is the non-owning link used for `parent` references. It is only
/// meaningful for the grid it was obtained from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Flat storage index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One voxel cell of a [`Grid`](crate::Grid).
///
/// Coordinates, walkability and weight are fixed at construction. The public
/// fields are per-search scratch state that a finder mutates freely during a
/// pass and resets with [`cleanup`](Node::cleanup) before the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pos: Point3,
    walkable: bool,
    weight: i32,

    /// Accumulated cost from the start.
    pub g: f64,
    /// Heuristic estimate to the goal.
    pub h: f64,
    /// `g + h`, the priority-queue key.
    pub f: f64,
    /// Visit marker; finders store a generation or a side tag here.
    pub opened: u32,
    pub closed: bool,
    /// Predecessor on the current search tree.
    pub parent: Option<NodeId>,
    /// Recursion bookkeeping for iterative-deepening finders.
    pub retain_count: u32,
    /// Auxiliary visited flag for IDA* and jump-point search.
    pub tested: bool,
}

impl Node {
    /// Create a node with fresh search state.
    pub fn new(x: i32, y: i32, z: i32, walkable: bool, weight: i32) -> Self {
        Self {
            pos: Point3::new(x, y, z),
            walkable,
            weight,
            g: 0.0,
            h: 0.0,
            f: 0.0,
            opened: 0,
            closed: false,
            parent: None,
            retain_count: 0,
            tested: false,
        }
    }

    /// A walkable node with weight 1.
    pub fn open(x: i32, y: i32, z: i32) -> Self {
        Self::new(x, y, z, true, 1)
    }

    /// Create a node from a coordinate triple or array.
    pub fn from_coordinates(p: impl Into<Point3>, walkable: bool, weight: i32) -> Self {
        let p = p.into();
        Self::new(p.x, p.y, p.z, walkable, weight)
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn z(&self) -> i32 {
        self.pos.z
    }

    /// The node's coordinates.
    #[inline]
    pub fn pos(&self) -> Point3 {
        self.pos
    }

    #[inline]
    pub fn walkable(&self) -> bool {
        self.walkable
    }

    /// Traversal cost multiplier.
    #[inline]
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Total order by ascending `f`. Ties compare equal.
    pub fn compare_by_f(a: &Node, b: &Node) -> Ordering {
        a.f.total_cmp(&b.f)
    }

    /// Reset all search state to construction defaults.
    pub fn cleanup(&mut self) {
        self.g = 0.0;
        self.h = 0.0;
        self.f = 0.0;
        self.opened = 0;
        self.closed = false;
        self.parent = None;
        self.retain_count = 0;
        self.tested = false;
    }
}

// ---------------------------------------------------------------------------
// Priority-queue entry
// ---------------------------------------------------------------------------

/// A node id paired with its `f` key, ordered so that `BinaryHeap` (a
/// max-heap) pops the smallest `f` first.
#[derive(Debug, Clone, Copy)]
pub struct OpenEntry {
    pub id: NodeId,
    pub f: f64,
}

impl OpenEntry {
    pub fn new(id: NodeId, f: f64) -> Self {
        Self { id, f }
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: smallest f is the heap maximum.
        other.f.total_cmp(&self.f)
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
