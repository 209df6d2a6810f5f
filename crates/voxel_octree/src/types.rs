//! Core data types for boundary meshing.

/// How per-cell face work is scheduled.
///
/// Both modes merge per-cell results into the vertex table in submission
/// order, so their output is identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Schedule {
  /// Plain loop on the calling thread.
  #[default]
  Sequential,

  /// Per-cell faces computed on rayon's pool, collected in input order.
  Parallel,
}

/// Mesh generation result.
///
/// Normals, bounds and GPU upload are left to the consumer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshOutput {
  /// Welded vertex positions, 3 floats per vertex.
  pub vertices: Vec<f32>,

  /// Triangle indices, 3 per triangle.
  pub indices: Vec<u32>,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.indices.clear();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  /// Number of unique vertices.
  pub fn vertex_count(&self) -> usize {
    self.vertices.len() / 3
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Vertex positions as triples.
  pub fn positions(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
    self.vertices.chunks_exact(3).map(|v| [v[0], v[1], v[2]])
  }

  /// Triangles as index triples.
  pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
    self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
  }

  /// Position of a vertex by index.
  pub fn position(&self, index: u32) -> Option<[f32; 3]> {
    let start = index as usize * 3;
    let v = self.vertices.get(start..start + 3)?;
    Some([v[0], v[1], v[2]])
  }
}

/// Configuration for mesh generation.
#[derive(Clone, Debug)]
pub struct MeshConfig {
  /// Half extent of one cell in world units.
  ///
  /// Integer cells are centered at `cell * 2 * voxel_size`; octree and
  /// flattened cells scale their own level-relative size by it.
  pub voxel_size: f32,

  /// Scheduling of per-cell face work.
  pub schedule: Schedule,
}

impl Default for MeshConfig {
  fn default() -> Self {
    Self {
      voxel_size: 1.0,
      schedule: Schedule::default(),
    }
  }
}

impl MeshConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_voxel_size(mut self, size: f32) -> Self {
    self.voxel_size = size;
    self
  }

  pub fn with_schedule(mut self, schedule: Schedule) -> Self {
    self.schedule = schedule;
    self
  }

  /// Shorthand for `with_schedule(Schedule::Parallel)`.
  pub fn parallel(self) -> Self {
    self.with_schedule(Schedule::Parallel)
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
