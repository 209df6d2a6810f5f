//! Meshing a flattened map, where each cell carries its own level.

use glam::Vec3;

use super::{collect_faces, push_face, weld, CellFaces};
use crate::constants::{Face, Octant};
use crate::flatten::{FlatCell, FlatMap};
use crate::octree::tree::half_side_at;
use crate::types::{MeshConfig, MeshOutput};

/// Mesh the exposed faces of a flattened octree.
///
/// A cell at level `d` spans `center ± 1/2^d` in root units; positions are
/// then scaled by `voxel_size`. A face is culled when the region across it
/// is fully occupied: by a cell of the same level, by a coarser cell that
/// encloses that region, or by finer cells tiling the whole face.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "mesh::flat"))]
pub fn mesh_flat(map: &FlatMap, config: &MeshConfig) -> MeshOutput {
  let size = config.voxel_size;
  let max_level = map.max_level().unwrap_or(0);
  let batches = collect_faces(map.as_slice(), config.schedule, |cell| {
    exposed_faces(cell, size, map, max_level)
  });
  let output = weld(batches);

  #[cfg(feature = "tracing")]
  tracing::debug!(
    cells = map.len(),
    vertices = output.vertex_count(),
    triangles = output.triangle_count(),
    "meshed flat map"
  );

  output
}

fn exposed_faces(cell: &FlatCell, size: f32, map: &FlatMap, max_level: u8) -> CellFaces {
  let half = cell.half_side();
  let mut faces = CellFaces::new();
  for face in Face::ALL {
    if !is_covered(cell, face, map, max_level) {
      push_face(&mut faces, cell.position, half, size, face);
    }
  }
  faces
}

fn is_covered(cell: &FlatCell, face: Face, map: &FlatMap, max_level: u8) -> bool {
  let across = cell.position + face.normal().as_vec3() * (2.0 * cell.half_side());
  if across.abs().max_element() > 1.0 {
    return false;
  }

  (0..cell.level).any(|level| map.contains(enclosing_center(across, level)))
    || is_filled(map, across, cell.level, face.opposite(), max_level)
}

/// Center of the level-`level` cell containing `point`.
///
/// `point` must be a center of a finer cell, so it never lies on a
/// level-`level` cell boundary.
fn enclosing_center(point: Vec3, level: u8) -> Vec3 {
  let half = half_side_at(level);
  let side = 2.0 * half;
  ((point + Vec3::ONE) / side).floor() * side + Vec3::splat(half - 1.0)
}

/// True when the cube at `center` is occupied over its whole `side` face,
/// by itself or by descendants down to `max_level`.
fn is_filled(map: &FlatMap, center: Vec3, level: u8, side: Face, max_level: u8) -> bool {
  if map.contains(center) {
    return true;
  }
  if level >= max_level {
    return false;
  }

  let quarter = half_side_at(level + 1);
  Octant::ALL
    .iter()
    .filter(|octant| octant.sign().dot(side.normal()) > 0)
    .all(|octant| {
      let child = center + octant.sign().as_vec3() * quarter;
      is_filled(map, child, level + 1, side, max_level)
    })
}

#[cfg(test)]
#[path = "flat_test.rs"]
mod flat_test;
