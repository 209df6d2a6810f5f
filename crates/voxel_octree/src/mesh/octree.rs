//! Meshing an octree directly, without flattening first.

use glam::Vec3;

use super::{collect_faces, push_face, weld, CellFaces};
use crate::constants::Face;
use crate::octree::tree::half_side_at;
use crate::octree::{NodeId, SparseOctree};
use crate::types::{MeshConfig, MeshOutput};

/// Mesh the nodes the flattener would record, culling covered faces.
///
/// Nodes are collected the way [`crate::flatten::flatten`] walks them: leaves,
/// or any node reached at `max_depth`. A face is dropped when
/// [`SparseOctree::traverse`] finds a same-depth or coarser node across it.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "mesh::octree"))]
pub fn mesh_octree(tree: &SparseOctree, max_depth: u8, config: &MeshConfig) -> MeshOutput {
  let visible = visible_nodes(tree, max_depth);

  let size = config.voxel_size;
  let batches = collect_faces(&visible, config.schedule, |&(node, center)| {
    exposed_faces(tree, node, center, size)
  });
  let output = weld(batches);

  #[cfg(feature = "tracing")]
  tracing::debug!(
    nodes = visible.len(),
    vertices = output.vertex_count(),
    triangles = output.triangle_count(),
    "meshed octree"
  );

  output
}

/// Nodes meshed for `tree` at `max_depth`, with their centers, in walk order.
pub(crate) fn visible_nodes(tree: &SparseOctree, max_depth: u8) -> Vec<(NodeId, Vec3)> {
  let mut visible = Vec::new();
  collect(tree, tree.root(), Vec3::ZERO, max_depth, &mut visible);
  visible
}

fn collect(
  tree: &SparseOctree,
  node: NodeId,
  center: Vec3,
  max_depth: u8,
  out: &mut Vec<(NodeId, Vec3)>,
) {
  let depth = tree.depth(node);
  if tree.is_leaf(node) || depth >= max_depth {
    out.push((node, center));
    return;
  }

  let half = half_side_at(depth + 1);
  for (octant, child) in tree.children(node) {
    collect(tree, child, center + octant.sign().as_vec3() * half, max_depth, out);
  }
}

fn exposed_faces(tree: &SparseOctree, node: NodeId, center: Vec3, size: f32) -> CellFaces {
  let half = tree.half_side(node);
  let mut faces = CellFaces::new();
  for face in Face::ALL {
    if tree.is_boundary(node, face) {
      push_face(&mut faces, center, half, size, face);
    }
  }
  faces
}

#[cfg(test)]
#[path = "octree_test.rs"]
mod octree_test;
