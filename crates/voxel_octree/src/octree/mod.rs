//! Sparse octree for variable-resolution occupancy.
//!
//! The tree is stored as an arena: [`SparseOctree`] owns every node in a
//! `Vec`, and nodes refer to each other through copyable [`NodeId`] handles.
//! A child's parent handle is only used to walk upward; it never keeps
//! anything alive.
//!
//! # Occupancy
//!
//! ```text
//! leaf node         → one undivided occupied cell at its depth
//! empty child slot  → empty space at that octant
//! subdivided node   → occupancy is whatever its children say
//! ```
//!
//! Nodes are created lazily by [`SparseOctree::set`] and never removed.
//!
//! # Module Structure
//!
//! - [`node`]: `OctreeNode` and `NodeId`
//! - [`tree`]: `SparseOctree` storage, insertion and accessors
//! - [`neighbor`]: same-depth neighbor lookup across subtree boundaries

pub mod neighbor;
pub mod node;
pub mod tree;

pub use node::{NodeId, OctreeNode};
pub use tree::SparseOctree;
