//! **voxpath-core** — geometry primitives for 3D voxel pathfinding.
//!
//! Provides the integer voxel coordinate [`Point3`] and the half-open box
//! [`Bounds3`] shared across the *voxpath* crates.

pub mod geom;

pub use geom::{Bounds3, Bounds3Iter, Point3};
