//! OctreeNode - one arena slot of a [`SparseOctree`](super::SparseOctree).

use glam::IVec3;

use crate::constants::{Octant, OCTANT_COUNT};

/// Handle to a node inside the tree that created it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
  /// The root of every tree.
  pub const ROOT: NodeId = NodeId(0);

  /// Arena slot index.
  #[inline]
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

/// Octree node.
///
/// Fields are private: children only change through
/// [`SparseOctree::set`](super::SparseOctree::set).
#[derive(Clone, Debug)]
pub struct OctreeNode {
  /// Sign triple relative to the parent center. Zero for the root.
  pub(crate) position: IVec3,
  /// Upward link, `None` for the root.
  pub(crate) parent: Option<NodeId>,
  pub(crate) children: [Option<NodeId>; OCTANT_COUNT],
  pub(crate) depth: u8,
  pub(crate) leaf: bool,
}

impl OctreeNode {
  pub(crate) fn root() -> Self {
    Self {
      position: IVec3::ZERO,
      parent: None,
      children: [None; OCTANT_COUNT],
      depth: 0,
      leaf: true,
    }
  }

  pub(crate) fn child_of(parent: NodeId, parent_depth: u8, octant: Octant) -> Self {
    Self {
      position: octant.sign(),
      parent: Some(parent),
      children: [None; OCTANT_COUNT],
      depth: parent_depth.saturating_add(1),
      leaf: true,
    }
  }

  /// Relative octant position; the zero vector for the root.
  #[inline]
  pub fn position(&self) -> IVec3 {
    self.position
  }

  /// Octant this node occupies in its parent, `None` for the root.
  #[inline]
  pub fn octant(&self) -> Option<Octant> {
    self.parent?;
    Octant::from_sign(self.position)
  }

  #[inline]
  pub fn parent(&self) -> Option<NodeId> {
    self.parent
  }

  /// Child handle at an octant, if that octant was ever set.
  #[inline]
  pub fn child(&self, octant: Octant) -> Option<NodeId> {
    self.children[octant.index()]
  }

  /// Occupied child slots in canonical order.
  pub fn children(&self) -> impl Iterator<Item = (Octant, NodeId)> + '_ {
    Octant::ALL
      .into_iter()
      .filter_map(move |octant| self.child(octant).map(|id| (octant, id)))
  }

  /// Subdivision depth, 0 for the root.
  #[inline]
  pub fn depth(&self) -> u8 {
    self.depth
  }

  /// True until the first child is set.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.leaf
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
