//! Flattening: octree → flat coordinate map with per-cell depth.
//!
//! ```text
//! ┌───────────────────────────────┐
//! │ SparseOctree / ShapeGenerator │
//! └───────────────┬───────────────┘
//!                 │ walk to max_depth
//!                 ▼
//! ┌───────────────────────────────┐
//! │ FlatMap                       │
//! │   position → FlatCell {       │
//! │     position, level           │
//! │   }                           │
//! └───────────────────────────────┘
//! ```
//!
//! A node is recorded when it is a leaf or when the walk reaches the target
//! depth; otherwise its children are visited in canonical octant order.
//! Leaves may stop at different depths, so the map is non-uniform and every
//! cell carries its own level.
//!
//! Cell centers are unique across levels (a level-`d` center is an odd
//! multiple of `1 / 2^d` on every axis), so the position alone keys the map.

use std::collections::HashMap;

use glam::Vec3;

use crate::constants::Octant;
use crate::key::PositionKey;
use crate::octree::tree::half_side_at;
use crate::octree::{NodeId, SparseOctree};
use crate::shapes::ShapeGenerator;

/// One recorded cell: absolute center (root cube spans [-1, 1]³) and depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatCell {
  pub position: Vec3,
  pub level: u8,
}

impl FlatCell {
  pub fn new(position: Vec3, level: u8) -> Self {
    Self { position, level }
  }

  /// Half extent in root units.
  #[inline]
  pub fn half_side(&self) -> f32 {
    half_side_at(self.level)
  }

  /// Half extent in world units.
  #[inline]
  pub fn side(&self, voxel_size: f32) -> f32 {
    self.half_side() * voxel_size
  }

  #[inline]
  pub fn key(&self) -> PositionKey {
    PositionKey::new(self.position)
  }

  /// True when the cell lies inside the given top-level octant.
  pub fn in_octant(&self, octant: Octant) -> bool {
    let sign = octant.sign().as_vec3();
    self.level > 0 && (self.position * sign).cmpgt(Vec3::ZERO).all()
  }
}

/// Insertion-ordered map from cell position to cell.
#[derive(Clone, Debug, Default)]
pub struct FlatMap {
  cells: Vec<FlatCell>,
  index: HashMap<PositionKey, usize>,
}

impl FlatMap {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert a cell, replacing any cell at the same position in place.
  pub fn insert(&mut self, cell: FlatCell) {
    match self.index.get(&cell.key()) {
      Some(&slot) => self.cells[slot] = cell,
      None => {
        self.index.insert(cell.key(), self.cells.len());
        self.cells.push(cell);
      }
    }
  }

  pub fn get(&self, position: Vec3) -> Option<&FlatCell> {
    self
      .index
      .get(&PositionKey::new(position))
      .map(|&slot| &self.cells[slot])
  }

  pub fn contains(&self, position: Vec3) -> bool {
    self.index.contains_key(&PositionKey::new(position))
  }

  /// Keep only cells matching `keep`, preserving order.
  pub fn retain<F: FnMut(&FlatCell) -> bool>(&mut self, keep: F) {
    self.cells.retain(keep);
    self.index = self
      .cells
      .iter()
      .enumerate()
      .map(|(slot, cell)| (cell.key(), slot))
      .collect();
  }

  /// Cells in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = &FlatCell> {
    self.cells.iter()
  }

  pub fn as_slice(&self) -> &[FlatCell] {
    &self.cells
  }

  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  /// Cells recorded at exactly `level`.
  pub fn cells_at_level(&self, level: u8) -> impl Iterator<Item = &FlatCell> {
    self.cells.iter().filter(move |cell| cell.level == level)
  }

  /// Deepest recorded level, `None` when empty.
  pub fn max_level(&self) -> Option<u8> {
    self.cells.iter().map(|cell| cell.level).max()
  }
}

/// Flatten `tree` down to `max_depth`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "flatten::flatten"))]
pub fn flatten(tree: &SparseOctree, max_depth: u8) -> FlatMap {
  let mut map = FlatMap::new();
  walk(tree, tree.root(), Vec3::ZERO, max_depth, &mut map);

  #[cfg(feature = "tracing")]
  tracing::debug!(cells = map.len(), max_depth, "flattened octree");

  map
}

/// Flatten a fresh full snapshot from `generator`; empty when the generator
/// reports no occupancy.
pub fn flatten_generated<G: ShapeGenerator + ?Sized>(generator: &G, max_depth: u8) -> FlatMap {
  match generator.generate(max_depth, None) {
    Some(tree) => flatten(&tree, max_depth),
    None => FlatMap::new(),
  }
}

/// Regenerate one top-level octant of a previously flattened map.
///
/// Cells of `previous` inside `octant` are dropped and replaced by the
/// flattened root child `octant` of `generator.generate(max_depth,
/// Some(octant))`; all other cells carry over unchanged. No snapshot, or a
/// snapshot with no child at `octant`, leaves that octant empty.
///
/// A root-level cell covers every octant, so when `previous` holds one (or
/// `max_depth` is 0) the map is regenerated in full instead.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "flatten::rebuild"))]
pub fn rebuild<G: ShapeGenerator + ?Sized>(
  previous: &FlatMap,
  generator: &G,
  max_depth: u8,
  octant: Octant,
) -> FlatMap {
  if max_depth == 0 || previous.cells_at_level(0).next().is_some() {
    return flatten_generated(generator, max_depth);
  }

  let mut map = previous.clone();
  map.retain(|cell| !cell.in_octant(octant));
  #[cfg(feature = "tracing")]
  let kept = map.len();

  if let Some(snapshot) = generator.generate(max_depth, Some(octant)) {
    if let Some(child) = snapshot.child(snapshot.root(), octant) {
      let center = octant.sign().as_vec3() * half_side_at(1);
      walk(&snapshot, child, center, max_depth, &mut map);
    }
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(
    kept,
    rebuilt = map.len() - kept,
    octant = octant.index(),
    "rebuilt octant"
  );

  map
}

fn walk(tree: &SparseOctree, node: NodeId, center: Vec3, max_depth: u8, map: &mut FlatMap) {
  let depth = tree.depth(node);
  if tree.is_leaf(node) || depth >= max_depth {
    map.insert(FlatCell::new(center, depth));
    return;
  }

  let half = half_side_at(depth + 1);
  for (octant, child) in tree.children(node) {
    walk(tree, child, center + octant.sign().as_vec3() * half, max_depth, map);
  }
}

#[cfg(test)]
#[path = "flatten_test.rs"]
mod flatten_test;
