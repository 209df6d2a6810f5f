//! Vertex deduplication by exact position.

use std::collections::HashMap;

use glam::Vec3;

use crate::key::PositionKey;
use crate::types::MeshOutput;

/// Builds an indexed mesh, storing each distinct position once.
///
/// Every pushed position appends one index. The first occurrence of a
/// position appends its coordinates to the vertex buffer; repeats reuse
/// the stored index, including index 0.
#[derive(Debug, Default)]
pub struct VertexWelder {
  lookup: HashMap<PositionKey, u32>,
  output: MeshOutput,
}

impl VertexWelder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Welder sized for about `corners` pushed positions.
  pub fn with_capacity(corners: usize) -> Self {
    // Closed surfaces share each corner between several triangles.
    let unique = corners / 4;
    Self {
      lookup: HashMap::with_capacity(unique),
      output: MeshOutput {
        vertices: Vec::with_capacity(unique * 3),
        indices: Vec::with_capacity(corners),
      },
    }
  }

  /// Index of `position`, adding it if unseen. Does not emit an index.
  pub fn weld(&mut self, position: Vec3) -> u32 {
    let next = self.lookup.len() as u32;
    let vertices = &mut self.output.vertices;
    *self.lookup.entry(PositionKey::new(position)).or_insert_with(|| {
      vertices.extend_from_slice(&[position.x, position.y, position.z]);
      next
    })
  }

  /// Weld `position` and append its index to the triangle list.
  pub fn push(&mut self, position: Vec3) -> u32 {
    let index = self.weld(position);
    self.output.indices.push(index);
    index
  }

  pub fn vertex_count(&self) -> usize {
    self.lookup.len()
  }

  pub fn index_count(&self) -> usize {
    self.output.indices.len()
  }

  pub fn finish(self) -> MeshOutput {
    self.output
  }
}

#[cfg(test)]
#[path = "welder_test.rs"]
mod welder_test;
