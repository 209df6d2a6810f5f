use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::types::Schedule;

fn random_cells(seed: u64, count: usize, extent: i32) -> Vec<IVec3> {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..count)
    .map(|_| {
      IVec3::new(
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
      )
    })
    .collect()
}

fn block(n: i32) -> Vec<IVec3> {
  let mut cells = Vec::new();
  for x in 0..n {
    for y in 0..n {
      for z in 0..n {
        cells.push(IVec3::new(x, y, z));
      }
    }
  }
  cells
}

#[test]
fn test_empty_input() {
  let output = mesh_cells(&[], &MeshConfig::default());
  assert!(output.vertices.is_empty());
  assert!(output.indices.is_empty());
}

#[test]
fn test_single_cell() {
  let output = mesh_cells(&[IVec3::ZERO], &MeshConfig::default());

  assert_eq!(output.vertex_count(), 8);
  assert_eq!(output.indices.len(), 36);
  for [x, y, z] in output.positions() {
    assert_eq!(x.abs(), 1.0);
    assert_eq!(y.abs(), 1.0);
    assert_eq!(z.abs(), 1.0);
  }
}

#[test]
fn test_adjacent_pair_shares_face() {
  let output = mesh_cells(&[IVec3::ZERO, IVec3::X], &MeshConfig::default());

  // 12 faces minus the shared pair.
  assert_eq!(output.indices.len(), 10 * 6);
  assert_eq!(output.vertex_count(), 12);
}

#[test]
fn test_interior_cell_adds_nothing() {
  let solid = mesh_cells(&block(3), &MeshConfig::default());

  // 6 sides of 3x3 quads.
  assert_eq!(solid.triangle_count(), 6 * 9 * 2);
  // 4x4x4 corner lattice minus its 2x2x2 interior.
  assert_eq!(solid.vertex_count(), 64 - 8);
}

#[test]
fn test_solid_block_is_closed_and_consistently_wound() {
  let output = mesh_cells(&block(3), &MeshConfig::default());

  let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
  for [a, b, c] in output.triangles() {
    for edge in [(a, b), (b, c), (c, a)] {
      *edges.entry(edge).or_default() += 1;
    }
  }
  for (&(a, b), &count) in &edges {
    assert_eq!(count, 1, "directed edge {a}->{b} repeated");
    assert_eq!(edges.get(&(b, a)), Some(&1), "edge {a}->{b} has no twin");
  }
}

#[test]
fn test_duplicates_are_meshed_once() {
  let config = MeshConfig::default();
  let with_duplicates = mesh_cells(&[IVec3::ZERO, IVec3::ZERO, IVec3::Y, IVec3::ZERO], &config);
  let unique = mesh_cells(&[IVec3::ZERO, IVec3::Y], &config);

  assert_eq!(with_duplicates, unique);
}

#[test]
fn test_indices_reference_vertices() {
  let output = mesh_cells(&random_cells(3, 200, 5), &MeshConfig::default());
  let count = output.vertex_count() as u32;

  assert_eq!(output.indices.len() % 3, 0);
  assert!(output.indices.iter().all(|&i| i < count));
  let mut used = vec![false; output.vertex_count()];
  for &i in &output.indices {
    used[i as usize] = true;
  }
  assert!(used.into_iter().all(|u| u));
}

#[test]
fn test_triangle_bound() {
  for seed in 0..8 {
    let cells = random_cells(seed, 64, 4);
    let output = mesh_cells(&cells, &MeshConfig::default());
    assert!(output.triangle_count() <= 12 * cells.len());
  }
}

#[test]
fn test_meshing_is_deterministic() {
  let cells = random_cells(11, 300, 6);
  let config = MeshConfig::default();

  assert_eq!(mesh_cells(&cells, &config), mesh_cells(&cells, &config));
}

#[test]
fn test_parallel_matches_sequential() {
  let cells = random_cells(42, 500, 8);
  let sequential = mesh_cells(&cells, &MeshConfig::default());
  let parallel = mesh_cells(&cells, &MeshConfig::default().with_schedule(Schedule::Parallel));

  assert_eq!(sequential, parallel);
}

#[test]
fn test_voxel_size_scales_positions() {
  let cells = random_cells(5, 40, 3);
  let unit = mesh_cells(&cells, &MeshConfig::default());
  let scaled = mesh_cells(&cells, &MeshConfig::new().with_voxel_size(0.5));

  assert_eq!(unit.indices, scaled.indices);
  for (a, b) in unit.vertices.iter().zip(&scaled.vertices) {
    assert_eq!(a * 0.5, *b);
  }
}

#[test]
fn test_non_dyadic_voxel_size_still_welds() {
  let config = MeshConfig::new().with_voxel_size(0.1);
  let output = mesh_cells(&[IVec3::new(3, 0, 0), IVec3::new(4, 0, 0)], &config);

  assert_eq!(output.vertex_count(), 12);
}

#[test]
fn test_cells_at_grid_limits() {
  let config = MeshConfig::default();

  let corner = mesh_cells(&[IVec3::splat(i32::MAX)], &config);
  assert_eq!(corner.indices.len(), 36);

  let pair = mesh_cells(&[IVec3::new(i32::MIN, 0, 0), IVec3::new(i32::MIN + 1, 0, 0)], &config);
  assert_eq!(pair.indices.len(), 10 * 6);
  assert!(pair.vertices.iter().all(|v| v.is_finite()));
}
