//! Shape generators: `(depth, rebuild) → octree snapshot`.
//!
//! A generator is a pure function of its query. The flattener calls it with
//! `rebuild = None` for a full snapshot, or `Some(octant)` when only that
//! top-level octant needs regenerating; other root children may then be left
//! out of the snapshot. A generator returns `None` when nothing is occupied:
//! a bare root is a leaf, and a leaf reads as a solid cube.
//!
//! Stock shapes are built by [`grow`], which classifies each candidate cube
//! and subdivides only the cubes a shape partially covers.

use glam::Vec3;

use crate::constants::Octant;
use crate::octree::tree::half_side_at;
use crate::octree::{NodeId, SparseOctree};

/// Produces octree snapshots on demand, `None` for empty space.
pub trait ShapeGenerator {
  fn generate(&self, depth: u8, rebuild: Option<Octant>) -> Option<SparseOctree>;
}

impl<F> ShapeGenerator for F
where
  F: Fn(u8, Option<Octant>) -> Option<SparseOctree>,
{
  fn generate(&self, depth: u8, rebuild: Option<Octant>) -> Option<SparseOctree> {
    self(depth, rebuild)
  }
}

/// How much of a cube a shape occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coverage {
  Empty,
  Partial,
  Full,
}

/// Build a tree down to `depth` from a cube classifier.
///
/// `classify(center, half_side)` is asked about every candidate child.
/// Empty cubes are skipped, full cubes become leaves, partial cubes are
/// subdivided until `depth` and kept as leaves there. A root classified as
/// empty yields `None`.
///
/// With `rebuild = Some(octant)` a non-empty root is always split: the
/// snapshot holds exactly the requested root child (or no child, if that
/// octant is empty).
pub fn grow<C>(depth: u8, rebuild: Option<Octant>, classify: C) -> Option<SparseOctree>
where
  C: Fn(Vec3, f32) -> Coverage,
{
  let coverage = classify(Vec3::ZERO, 1.0);
  if coverage == Coverage::Empty {
    return None;
  }

  let mut tree = SparseOctree::new();
  if depth == 0 || (rebuild.is_none() && coverage == Coverage::Full) {
    return Some(tree);
  }

  let root = tree.root();
  let octants: &[Octant] = match &rebuild {
    Some(octant) => std::slice::from_ref(octant),
    None => &Octant::ALL,
  };
  for &octant in octants {
    grow_child(&mut tree, root, Vec3::ZERO, 0, octant, depth, &classify);
  }
  Some(tree)
}

fn grow_child<C>(
  tree: &mut SparseOctree,
  parent: NodeId,
  parent_center: Vec3,
  parent_depth: u8,
  octant: Octant,
  max_depth: u8,
  classify: &C,
) where
  C: Fn(Vec3, f32) -> Coverage,
{
  let depth = parent_depth + 1;
  let half = half_side_at(depth);
  let center = parent_center + octant.sign().as_vec3() * half;

  let coverage = classify(center, half);
  if coverage == Coverage::Empty {
    return;
  }

  let child = tree.set(parent, octant);
  if coverage == Coverage::Full || depth >= max_depth {
    return;
  }
  for octant in Octant::ALL {
    grow_child(tree, child, center, depth, octant, max_depth, classify);
  }
}

/// The whole root cube, subdivided uniformly to the requested depth.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullCube;

impl ShapeGenerator for FullCube {
  fn generate(&self, depth: u8, rebuild: Option<Octant>) -> Option<SparseOctree> {
    grow(depth, rebuild, |_, _| Coverage::Partial)
  }
}

/// Solid ball centered in the root cube.
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
  pub center: Vec3,
  pub radius: f32,
}

impl Sphere {
  pub fn new(center: Vec3, radius: f32) -> Self {
    Self { center, radius }
  }

  /// Ball at the root center.
  pub fn centered(radius: f32) -> Self {
    Self::new(Vec3::ZERO, radius)
  }

  /// Classify an axis-aligned cube against the ball.
  pub fn coverage(&self, center: Vec3, half_side: f32) -> Coverage {
    let delta = (center - self.center).abs();
    let nearest = (delta - Vec3::splat(half_side)).max(Vec3::ZERO);
    let farthest = delta + Vec3::splat(half_side);

    if nearest.length_squared() > self.radius * self.radius {
      Coverage::Empty
    } else if farthest.length_squared() <= self.radius * self.radius {
      Coverage::Full
    } else {
      Coverage::Partial
    }
  }
}

impl ShapeGenerator for Sphere {
  fn generate(&self, depth: u8, rebuild: Option<Octant>) -> Option<SparseOctree> {
    grow(depth, rebuild, |center, half| self.coverage(center, half))
  }
}

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;
