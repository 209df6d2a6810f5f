//! Batch queue for independent mesh builds.
//!
//! Following the stage pattern: Enqueue → Tick → Completions
//!
//! Every tick meshes all pending requests on rayon's pool. Completions come
//! back in request id order.

use glam::IVec3;
use rayon::prelude::*;
use web_time::Instant;

use crate::flatten::FlatMap;
use crate::mesh::octree::visible_nodes;
use crate::mesh::{mesh_cells, mesh_flat, mesh_octree};
use crate::metrics::MeshMetrics;
use crate::octree::SparseOctree;
use crate::types::{MeshConfig, MeshOutput};

/// Occupancy to be meshed.
#[derive(Clone, Debug)]
pub enum MeshSource {
  /// Uniform integer cells, see [`mesh_cells`].
  Cells(Vec<IVec3>),
  /// Flattened octree, see [`mesh_flat`].
  Flat(FlatMap),
  /// Octree meshed directly down to `max_depth`, see [`mesh_octree`].
  Octree { tree: SparseOctree, max_depth: u8 },
}

impl MeshSource {
  /// Number of cells (or octree nodes, down to `max_depth`) that get meshed.
  pub fn cell_count(&self) -> usize {
    match self {
      MeshSource::Cells(cells) => cells.len(),
      MeshSource::Flat(map) => map.len(),
      MeshSource::Octree { tree, max_depth } => visible_nodes(tree, *max_depth).len(),
    }
  }

  pub fn mesh(&self, config: &MeshConfig) -> MeshOutput {
    match self {
      MeshSource::Cells(cells) => mesh_cells(cells, config),
      MeshSource::Flat(map) => mesh_flat(map, config),
      MeshSource::Octree { tree, max_depth } => mesh_octree(tree, *max_depth, config),
    }
  }
}

/// Request to build one mesh.
#[derive(Clone, Debug)]
pub struct MeshRequest {
  /// Unique identifier for this request
  pub id: u64,
  pub source: MeshSource,
  pub config: MeshConfig,
}

/// Completed mesh result.
#[derive(Debug)]
pub struct MeshCompletion {
  /// Request ID this completion corresponds to
  pub id: u64,
  pub output: MeshOutput,
  /// Raw meshing time in microseconds
  pub mesh_time_us: u64,
}

/// Meshing stage that processes requests in parallel.
#[derive(Default)]
pub struct MeshingStage {
  /// Pending requests waiting to be processed
  pending: Vec<MeshRequest>,
  /// Completed results ready to be collected
  completed: Vec<MeshCompletion>,
  next_id: u64,
  metrics: MeshMetrics,
}

impl MeshingStage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Enqueue integer cells, returning the assigned ID.
  pub fn enqueue(&mut self, cells: Vec<IVec3>, config: MeshConfig) -> u64 {
    self.enqueue_source(MeshSource::Cells(cells), config)
  }

  /// Enqueue any mesh source, returning the assigned ID.
  pub fn enqueue_source(&mut self, source: MeshSource, config: MeshConfig) -> u64 {
    let id = self.next_id;
    self.next_id += 1;

    self.pending.push(MeshRequest { id, source, config });

    id
  }

  /// Process pending requests in parallel and move completions to output.
  /// Returns the number of requests processed this tick.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "task_queue::tick"))]
  pub fn tick(&mut self) -> usize {
    if self.pending.is_empty() {
      return 0;
    }

    let requests = std::mem::take(&mut self.pending);
    let count = requests.len();

    let finished: Vec<(usize, MeshCompletion)> = requests
      .into_par_iter()
      .map(|req| {
        let start = Instant::now();
        let output = req.source.mesh(&req.config);
        let mesh_time_us = start.elapsed().as_micros() as u64;
        let completion = MeshCompletion {
          id: req.id,
          output,
          mesh_time_us,
        };
        (req.source.cell_count(), completion)
      })
      .collect();

    for (cells, completion) in finished {
      self
        .metrics
        .record_mesh(cells, &completion.output, completion.mesh_time_us);
      self.completed.push(completion);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(count, completed = self.completed.len(), "meshing tick");

    count
  }

  /// Take all completed meshes, in request order.
  pub fn drain_completions(&mut self) -> Vec<MeshCompletion> {
    std::mem::take(&mut self.completed)
  }

  /// Number of pending requests.
  pub fn pending_count(&self) -> usize {
    self.pending.len()
  }

  /// Number of completed results waiting to be drained.
  pub fn completed_count(&self) -> usize {
    self.completed.len()
  }

  /// True when no work remains.
  pub fn is_idle(&self) -> bool {
    self.pending.is_empty() && self.completed.is_empty()
  }

  /// Statistics over every processed request (populated with the `metrics`
  /// feature).
  pub fn metrics(&self) -> &MeshMetrics {
    &self.metrics
  }
}

#[cfg(test)]
#[path = "task_queue_test.rs"]
mod task_queue_test;
