//! Per-run search state kept outside the grid.
//!
//! A [`SearchTable`] holds one [`SearchState`] per node id. The grid is only
//! borrowed immutably, so several runs (one table each) can share a `&Grid`
//! across threads.

use crate::backtrace::{self, Path};
use crate::grid::Grid;
use crate::node::NodeId;

/// The mutable fields of a [`Node`](crate::Node), detached from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchState {
    pub g: f64,
    pub h: f64,
    pub f: f64,
    pub opened: u32,
    pub closed: bool,
    pub parent: Option<NodeId>,
    pub retain_count: u32,
    pub tested: bool,
}

impl SearchState {
    /// Construction defaults.
    pub const FRESH: Self = Self {
        g: 0.0,
        h: 0.0,
        f: 0.0,
        opened: 0,
        closed: false,
        parent: None,
        retain_count: 0,
        tested: false,
    };

    pub fn cleanup(&mut self) {
        *self = Self::FRESH;
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::FRESH
    }
}

#[derive(Debug, Clone)]
struct Slot {
    state: SearchState,
    generation: u32,
}

/// Search state for every node of one grid, reset in O(1).
///
/// Each slot remembers the generation it was last written in;
/// [`reset`](SearchTable::reset) bumps the generation so every older slot
/// reads as [`SearchState::FRESH`].
#[derive(Debug, Clone)]
pub struct SearchTable {
    slots: Vec<Slot>,
    generation: u32,
}

impl SearchTable {
    /// A table sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self::with_len(grid.len())
    }

    /// A table for `len` nodes.
    pub fn with_len(len: usize) -> Self {
        Self {
            slots: vec![
                Slot {
                    state: SearchState::FRESH,
                    generation: 0,
                };
                len
            ],
            generation: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Forget all state from the previous run.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: slots from 2^32 runs ago would look current.
            for slot in &mut self.slots {
                slot.state = SearchState::FRESH;
                slot.generation = 0;
            }
        }
    }

    /// State of `id` in the current run.
    ///
    /// # Panics
    ///
    /// If `id` is out of range for this table.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchState {
        let slot = &self.slots[id.index()];
        if slot.generation == self.generation {
            &slot.state
        } else {
            &SearchState::FRESH
        }
    }

    /// Mutable state of `id` in the current run.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchState {
        let generation = self.generation;
        let slot = &mut self.slots[id.index()];
        if slot.generation != generation {
            slot.generation = generation;
            slot.state = SearchState::FRESH;
        }
        &mut slot.state
    }

    /// [`backtrace()`](crate::backtrace()) over this table's parent links.
    pub fn backtrace(&self, grid: &Grid, id: NodeId) -> Path {
        backtrace::walk(grid, grid[id].pos(), self.get(id).parent, |p| {
            self.get(p).parent
        })
    }

    /// [`bidirectional_backtrace()`](crate::bidirectional_backtrace()) over this
    /// table's parent links.
    pub fn bidirectional_backtrace(&self, grid: &Grid, a: NodeId, b: NodeId) -> Path {
        backtrace::join(self.backtrace(grid, a), self.backtrace(grid, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxpath_core::Point3;

    #[test]
    fn fresh_state_matches_node_defaults() {
        let n = crate::Node::open(0, 0, 0);
        let s = SearchState::default();
        assert_eq!((s.g, s.h, s.f), (n.g, n.h, n.f));
        assert_eq!((s.opened, s.closed, s.parent), (n.opened, n.closed, n.parent));
        assert_eq!((s.retain_count, s.tested), (n.retain_count, n.tested));
    }

    #[test]
    fn cleanup_state() {
        let mut s = SearchState {
            g: 1.0,
            h: 2.0,
            f: 3.0,
            opened: 4,
            closed: true,
            parent: Some(NodeId(1)),
            retain_count: 2,
            tested: true,
        };
        s.cleanup();
        assert_eq!(s, SearchState::FRESH);
    }

    #[test]
    fn reset_forgets_previous_run() {
        let g = Grid::new(2, 2, 2);
        let mut t = SearchTable::new(&g);
        assert_eq!(t.len(), 8);
        let id = g.id_of(Point3::new(1, 1, 1)).unwrap();
        {
            let s = t.get_mut(id);
            s.g = 5.0;
            s.closed = true;
        }
        assert_eq!(t.get(id).g, 5.0);
        assert!(t.get(id).closed);

        t.reset();
        assert_eq!(*t.get(id), SearchState::FRESH);
        assert_eq!(t.get_mut(id).g, 0.0);
    }

    #[test]
    fn reset_survives_generation_wrap() {
        let mut t = SearchTable::with_len(1);
        let id = NodeId(0);
        t.get_mut(id).opened = 7;
        t.generation = u32::MAX;
        t.reset();
        assert_eq!(t.generation, 0);
        assert_eq!(*t.get(id), SearchState::FRESH);
    }

    #[test]
    fn table_backtrace_ignores_embedded_state() {
        let mut g = Grid::new(3, 1, 1);
        let ids: Vec<NodeId> = (0..3)
            .map(|x| g.id_of(Point3::new(x, 0, 0)).unwrap())
            .collect();
        // Embedded links point the other way and must not be followed.
        g.node_mut(0, 0, 0).unwrap().parent = Some(ids[1]);

        let mut t = SearchTable::new(&g);
        t.get_mut(ids[1]).parent = Some(ids[0]);
        t.get_mut(ids[2]).parent = Some(ids[1]);
        assert_eq!(
            t.backtrace(&g, ids[2]),
            vec![
                Point3::new(0, 0, 0),
                Point3::new(1, 0, 0),
                Point3::new(2, 0, 0)
            ]
        );

        // Goal side grows from x=2 back to x=1; start side is just x=0.
        t.reset();
        t.get_mut(ids[1]).parent = Some(ids[2]);
        let xs: Vec<i32> = t
            .bidirectional_backtrace(&g, ids[0], ids[1])
            .iter()
            .map(|p| p.x)
            .collect();
        assert_eq!(xs, vec![0, 1, 2]);
    }

    #[test]
    fn tables_share_one_grid_across_threads() {
        let g = Grid::new(4, 4, 4);
        let start = g.id_of(Point3::ZERO).unwrap();
        std::thread::scope(|scope| {
            for k in 0..4 {
                let g = &g;
                scope.spawn(move || {
                    let mut t = SearchTable::new(g);
                    let target = g.id_of(Point3::new(k, 0, 0)).unwrap();
                    if target != start {
                        t.get_mut(target).parent = Some(start);
                    }
                    assert_eq!(t.backtrace(g, target).len(), if k == 0 { 1 } else { 2 });
                });
            }
        });
    }
}
