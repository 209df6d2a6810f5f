//! Meshing benchmarks: integer cells, flattened maps and direct octree
//! walks, each under both schedules.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::IVec3;
use voxel_octree::{
  flatten, mesh_cells, mesh_flat, mesh_octree, shapes::Sphere, HeightGrid, MeshConfig, Schedule,
  ShapeGenerator,
};

/// Solid ball of integer cells with the given radius.
fn ball_cells(radius: i32) -> Vec<IVec3> {
  let mut cells = Vec::new();
  for x in -radius..=radius {
    for y in -radius..=radius {
      for z in -radius..=radius {
        if x * x + y * y + z * z <= radius * radius {
          cells.push(IVec3::new(x, y, z));
        }
      }
    }
  }
  cells
}

/// Rolling hills heightmap, 256x256.
fn hills() -> HeightGrid {
  let size = 256u32;
  let samples = (0..size * size)
    .map(|i| {
      let x = (i % size) as f32 / size as f32;
      let z = (i / size) as f32 / size as f32;
      0.5 + 0.25 * (x * 12.0).sin() * (z * 9.0).cos()
    })
    .collect();
  HeightGrid::new(size, size, samples).expect("square grid")
}

fn bench_mesh_cells(c: &mut Criterion) {
  let mut group = c.benchmark_group("mesh_cells");

  for radius in [8, 16, 24] {
    let cells = ball_cells(radius);
    for schedule in [Schedule::Sequential, Schedule::Parallel] {
      let config = MeshConfig::new().with_schedule(schedule);
      group.bench_with_input(
        BenchmarkId::new(format!("{schedule:?}"), radius),
        &cells,
        |b, cells| b.iter(|| mesh_cells(black_box(cells), &config)),
      );
    }
  }

  group.finish();
}

fn bench_heightmap(c: &mut Criterion) {
  let grid = hills();
  let cells = grid.voxelize(2, 32);
  let config = MeshConfig::new().parallel();

  c.bench_function("heightmap voxelize 256²", |b| {
    b.iter(|| black_box(&grid).voxelize(2, 32))
  });
  c.bench_function("heightmap mesh 256²", |b| {
    b.iter(|| mesh_cells(black_box(&cells), &config))
  });
}

fn bench_octree(c: &mut Criterion) {
  let mut group = c.benchmark_group("octree");
  let shape = Sphere::centered(0.8);

  for depth in [4u8, 6] {
    let tree = shape.generate(depth, None).expect("sphere inside root");
    let map = flatten::flatten(&tree, depth);
    let config = MeshConfig::new().parallel();

    group.bench_with_input(BenchmarkId::new("flatten", depth), &tree, |b, tree| {
      b.iter(|| flatten::flatten(black_box(tree), depth))
    });
    group.bench_with_input(BenchmarkId::new("mesh_flat", depth), &map, |b, map| {
      b.iter(|| mesh_flat(black_box(map), &config))
    });
    group.bench_with_input(BenchmarkId::new("mesh_octree", depth), &tree, |b, tree| {
      b.iter(|| mesh_octree(black_box(tree), depth, &config))
    });
  }

  group.finish();
}

criterion_group!(benches, bench_mesh_cells, bench_heightmap, bench_octree);
criterion_main!(benches);
