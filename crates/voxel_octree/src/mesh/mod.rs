//! Boundary-face mesh construction.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ occupancy: &[IVec3] / FlatMap / SparseOctree                 │
//! │           │                                                  │
//! │           ▼  per cell (Sequential loop or rayon par_iter)    │
//! │  faces whose neighbor is absent → 6 positions per face       │
//! │           │                                                  │
//! │           ▼  merged in submission order                      │
//! │  VertexWelder: PositionKey → index                           │
//! │           │                                                  │
//! │           ▼                                                  │
//! │  MeshOutput { vertices, indices }                            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Per-cell work only reads shared occupancy, so it can fan out freely. The
//! welder is the single ordered sink, which keeps both schedules producing
//! identical buffers.

pub mod cells;
pub mod flat;
pub mod octree;
pub mod welder;

pub use cells::mesh_cells;
pub use flat::mesh_flat;
pub use octree::mesh_octree;
pub use welder::VertexWelder;

use glam::{IVec3, Vec3};
use rayon::prelude::*;
use smallvec::SmallVec;

use crate::constants::{Face, FACE_COUNT, VERTICES_PER_FACE};
use crate::types::{MeshOutput, Schedule};

/// Face corner positions produced by one cell, in emission order.
pub(crate) type CellFaces = SmallVec<[Vec3; FACE_COUNT * VERTICES_PER_FACE]>;

/// Run `faces_of` over every item, keeping input order in the result.
pub(crate) fn collect_faces<T, F>(items: &[T], schedule: Schedule, faces_of: F) -> Vec<CellFaces>
where
  T: Sync,
  F: Fn(&T) -> CellFaces + Sync + Send,
{
  match schedule {
    Schedule::Sequential => items.iter().map(faces_of).collect(),
    Schedule::Parallel => items.par_iter().map(faces_of).collect(),
  }
}

/// Append the 6 corners of `face` for a cube at `center` with `half_side`,
/// both in root units, scaled to world units by `scale`.
///
/// Corners are summed before scaling, so a corner shared by two cells is
/// bit-identical from either side and welds.
#[inline]
pub(crate) fn push_face(
  out: &mut CellFaces,
  center: Vec3,
  half_side: f32,
  scale: f32,
  face: Face,
) {
  for offset in face.template().offsets {
    out.push((center + IVec3::from_array(offset).as_vec3() * half_side) * scale);
  }
}

/// Weld per-cell face lists into one indexed mesh.
pub(crate) fn weld(batches: Vec<CellFaces>) -> MeshOutput {
  let corners: usize = batches.iter().map(|faces| faces.len()).sum();
  let mut welder = VertexWelder::with_capacity(corners);
  for faces in batches {
    for position in faces {
      welder.push(position);
    }
  }
  welder.finish()
}
