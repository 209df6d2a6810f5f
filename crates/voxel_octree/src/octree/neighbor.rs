//! Same-depth neighbor lookup ("ropes").
//!
//! Siblings are found by offsetting a node's octant sign by twice the face
//! normal. When the offset leaves the parent (a component reaches ±3), the
//! neighbor lives under the parent's own neighbor, at the octant obtained by
//! wrapping that component around:
//!
//! ```text
//!  parent P             parent's neighbor Q
//! ┌─────┬─────┐        ┌─────┬─────┐
//! │     │  A ─┼────────┼─► B │     │     A = +1, step +2 → +3
//! └─────┴─────┘        └─────┴─────┘     wrap +3 → -1 → B in Q
//! ```

use glam::IVec3;

use super::{NodeId, SparseOctree};
use crate::constants::{Face, Octant};

impl SparseOctree {
  /// Neighbor of `node` across `face`, preserving the parent-leaf shortcut.
  ///
  /// Returns the parent itself whenever the parent is a leaf, before the
  /// direction is resolved. When the neighborhood is reached through a
  /// cousin subtree, the cousin's child slot is returned as-is, so an
  /// undivided cousin reads as empty.
  ///
  /// [`traverse`](Self::traverse) is the fully resolved lookup.
  pub fn find(&self, node: NodeId, face: Face) -> Option<NodeId> {
    let parent = self.parent(node)?;

    // Coarser answer than requested; kept as documented behavior.
    if self.is_leaf(parent) {
      return Some(parent);
    }

    let target = self.node(node).position() + face.step();
    match Octant::from_sign(target) {
      Some(sibling) => self.child(parent, sibling),
      None => {
        let adjacent = self.find(parent, face)?;
        self.child(adjacent, Octant::from_sign(wrap(target))?)
      }
    }
  }

  /// Neighbor of `node` across `face` at the same depth.
  ///
  /// If the region across the face is an undivided leaf at a coarser depth,
  /// that leaf is returned. `None` means nothing occupies the region.
  pub fn traverse(&self, node: NodeId, face: Face) -> Option<NodeId> {
    let parent = self.parent(node)?;

    let target = self.node(node).position() + face.step();
    if let Some(sibling) = Octant::from_sign(target) {
      return self.child(parent, sibling);
    }

    let adjacent = self.traverse(parent, face)?;
    if self.is_leaf(adjacent) {
      return Some(adjacent);
    }
    self.child(adjacent, Octant::from_sign(wrap(target))?)
  }

  /// True when nothing occupies the region across `face`.
  #[inline]
  pub fn is_boundary(&self, node: NodeId, face: Face) -> bool {
    self.traverse(node, face).is_none()
  }
}

/// Fold an overflowing octant coordinate back into the neighbor's frame.
#[inline]
fn wrap(target: IVec3) -> IVec3 {
  let fold = |c: i32| match c {
    3 => -1,
    -3 => 1,
    c => c,
  };
  IVec3::new(fold(target.x), fold(target.y), fold(target.z))
}

#[cfg(test)]
#[path = "neighbor_test.rs"]
mod neighbor_test;
