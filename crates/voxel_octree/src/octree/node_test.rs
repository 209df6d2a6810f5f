use glam::IVec3;

use super::*;
use crate::octree::SparseOctree;

#[test]
fn test_root_node_shape() {
  let root = OctreeNode::root();

  assert!(root.is_leaf());
  assert_eq!(root.depth(), 0);
  assert_eq!(root.position(), IVec3::ZERO);
  assert!(root.parent().is_none());
  assert!(root.octant().is_none());
  assert_eq!(root.children().count(), 0);
}

#[test]
fn test_child_node_records_octant_and_depth() {
  let octant = Octant::ALL[5];
  let child = OctreeNode::child_of(NodeId::ROOT, 3, octant);

  assert!(child.is_leaf());
  assert_eq!(child.depth(), 4);
  assert_eq!(child.position(), IVec3::new(1, 1, -1));
  assert_eq!(child.parent(), Some(NodeId::ROOT));
  assert_eq!(child.octant(), Some(octant));
}

#[test]
fn test_children_iterate_in_canonical_order() {
  let mut tree = SparseOctree::new();
  let root = tree.root();
  for index in [6, 1, 3] {
    tree.set(root, Octant::ALL[index]);
  }

  let order: Vec<usize> = tree
    .node(root)
    .children()
    .map(|(octant, _)| octant.index())
    .collect();
  assert_eq!(order, vec![1, 3, 6]);
}

#[test]
fn test_node_id_index() {
  assert_eq!(NodeId::ROOT.index(), 0);
  assert_eq!(NodeId(12).index(), 12);
}
