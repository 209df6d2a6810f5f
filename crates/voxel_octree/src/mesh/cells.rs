//! Integer-grid meshing: every cell has the same size.

use std::collections::HashSet;

use glam::{I64Vec3, IVec3};

use super::{collect_faces, weld, CellFaces};
use crate::constants::Face;
use crate::key::CellKey;
use crate::types::{MeshConfig, MeshOutput};

/// Mesh the exposed faces of a set of unit cells.
///
/// Cell `c` is the cube centered at `c * 2 * voxel_size` with half extent
/// `voxel_size`, so neighboring cells share faces exactly. A face is emitted
/// when the cell one step along its normal is not in `cells`; faces on the
/// edge of the `i32` grid always are. Duplicates in `cells` are meshed once,
/// at their first occurrence.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "mesh::cells"))]
pub fn mesh_cells(cells: &[IVec3], config: &MeshConfig) -> MeshOutput {
  let mut occupied: HashSet<CellKey> = HashSet::with_capacity(cells.len());
  let unique: Vec<IVec3> = cells
    .iter()
    .copied()
    .filter(|&cell| occupied.insert(CellKey::from(cell)))
    .collect();

  let size = config.voxel_size;
  let batches = collect_faces(&unique, config.schedule, |&cell| {
    exposed_faces(cell, size, &occupied)
  });
  let output = weld(batches);

  #[cfg(feature = "tracing")]
  tracing::debug!(
    cells = unique.len(),
    vertices = output.vertex_count(),
    triangles = output.triangle_count(),
    "meshed cells"
  );

  output
}

fn exposed_faces(cell: IVec3, size: f32, occupied: &HashSet<CellKey>) -> CellFaces {
  let key = CellKey::from(cell);
  let mut faces = CellFaces::new();
  for face in Face::ALL {
    if key
      .offset(face.normal())
      .is_some_and(|neighbor| occupied.contains(&neighbor))
    {
      continue;
    }
    // Integer corner first (in i64, 2 * i32 + 1 does not fit i32), then scale.
    for offset in face.template().offsets {
      let corner = cell.as_i64vec3() * 2 + I64Vec3::from(IVec3::from_array(offset));
      faces.push(corner.as_vec3() * size);
    }
  }
  faces
}

#[cfg(test)]
#[path = "cells_test.rs"]
mod cells_test;
