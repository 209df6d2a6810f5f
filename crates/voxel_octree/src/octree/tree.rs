//! SparseOctree - arena storage, insertion and accessors.

use glam::Vec3;

use super::{NodeId, OctreeNode};
use crate::constants::Octant;

/// Append-only sparse octree.
///
/// The root cube spans [-1, 1]³. A node at depth `d` has half extent
/// `1 / 2^d`.
///
/// `set` takes `&mut self` and lookups take `&self`, so concurrent readers
/// are fine and writers are serialized by the borrow checker.
///
/// Handles are only valid for the tree that issued them; indexing with a
/// handle from a larger foreign tree panics.
#[derive(Clone, Debug)]
pub struct SparseOctree {
  nodes: Vec<OctreeNode>,
}

impl SparseOctree {
  /// Tree holding a single root leaf.
  pub fn new() -> Self {
    Self {
      nodes: vec![OctreeNode::root()],
    }
  }

  #[inline]
  pub fn root(&self) -> NodeId {
    NodeId::ROOT
  }

  /// Total node count, root included.
  #[inline]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Always false: a tree has at least its root.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  #[inline]
  pub fn node(&self, id: NodeId) -> &OctreeNode {
    &self.nodes[id.index()]
  }

  /// Node behind a handle, `None` if the handle is out of range.
  #[inline]
  pub fn get(&self, id: NodeId) -> Option<&OctreeNode> {
    self.nodes.get(id.index())
  }

  /// Insert (or fetch) the child of `node` at `octant`.
  ///
  /// Idempotent: an existing child is returned unchanged. A new child
  /// turns `node` into a non-leaf.
  pub fn set(&mut self, node: NodeId, octant: Octant) -> NodeId {
    if let Some(existing) = self.nodes[node.index()].children[octant.index()] {
      return existing;
    }

    let parent_depth = self.nodes[node.index()].depth;
    let child = NodeId(self.nodes.len() as u32);
    self
      .nodes
      .push(OctreeNode::child_of(node, parent_depth, octant));

    let parent = &mut self.nodes[node.index()];
    parent.children[octant.index()] = Some(child);
    parent.leaf = false;

    child
  }

  /// `set` repeatedly from the root along `path`, returning the last node.
  pub fn insert_path(&mut self, path: &[Octant]) -> NodeId {
    path
      .iter()
      .fold(self.root(), |node, &octant| self.set(node, octant))
  }

  #[inline]
  pub fn is_leaf(&self, node: NodeId) -> bool {
    self.node(node).is_leaf()
  }

  #[inline]
  pub fn parent(&self, node: NodeId) -> Option<NodeId> {
    self.node(node).parent()
  }

  #[inline]
  pub fn child(&self, node: NodeId, octant: Octant) -> Option<NodeId> {
    self.node(node).child(octant)
  }

  #[inline]
  pub fn octant(&self, node: NodeId) -> Option<Octant> {
    self.node(node).octant()
  }

  #[inline]
  pub fn depth(&self, node: NodeId) -> u8 {
    self.node(node).depth()
  }

  /// Occupied child slots of `node` in canonical order.
  pub fn children(&self, node: NodeId) -> impl Iterator<Item = (Octant, NodeId)> + '_ {
    self.node(node).children()
  }

  /// All handles in allocation order (parents before children).
  pub fn iter(&self) -> impl Iterator<Item = NodeId> {
    (0..self.nodes.len() as u32).map(NodeId)
  }

  /// All leaf handles in allocation order.
  pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
    self.iter().filter(move |&id| self.is_leaf(id))
  }

  /// Deepest node depth in the tree.
  pub fn max_depth(&self) -> u8 {
    self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
  }

  /// Half extent of a node's cube.
  #[inline]
  pub fn half_side(&self, node: NodeId) -> f32 {
    half_side_at(self.depth(node))
  }

  /// Absolute center of a node (root cube spans [-1, 1]³).
  pub fn center(&self, node: NodeId) -> Vec3 {
    let mut center = Vec3::ZERO;
    let mut current = node;
    while let Some(parent) = self.parent(current) {
      let n = self.node(current);
      center += n.position().as_vec3() * half_side_at(n.depth());
      current = parent;
    }
    center
  }

  /// Chain of octants from the root down to `node`.
  pub fn path(&self, node: NodeId) -> Vec<Octant> {
    let mut path = Vec::with_capacity(self.depth(node) as usize);
    let mut current = node;
    while let Some(octant) = self.octant(current) {
      path.push(octant);
      match self.parent(current) {
        Some(parent) => current = parent,
        None => break,
      }
    }
    path.reverse();
    path
  }
}

impl Default for SparseOctree {
  fn default() -> Self {
    Self::new()
  }
}

/// Half extent of a cube at `depth` (root = 1).
#[inline]
pub fn half_side_at(depth: u8) -> f32 {
  1.0 / (1u64 << depth.min(63)) as f32
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
