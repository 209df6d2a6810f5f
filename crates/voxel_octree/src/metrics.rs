//! Meshing statistics: rolling timings and geometry totals.
//!
//! Feature-gated and runtime-toggled; recording is a no-op unless the
//! `metrics` feature is on and [`COLLECT_METRICS`] is set.
//!
//! # Usage
//!
//! ```ignore
//! use voxel_octree::metrics::{MeshMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! // Record one mesh build:
//! metrics.record_mesh(cells, &output, timing_us);
//! ```

use std::collections::VecDeque;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

use crate::types::MeshOutput;

/// Runtime toggle for metrics collection.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
    #[cfg(feature = "metrics")]
    {
        COLLECT_METRICS.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "metrics"))]
    {
        false
    }
}

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new value, evicting the oldest if at capacity.
    pub fn push(&mut self, value: T) {
        if self.capacity == 0 {
            return;
        }
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Iterate over values (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }

    /// Most recent value.
    pub fn last(&self) -> Option<&T> {
        self.buffer.back()
    }
}

impl<T: Copy + Default + std::ops::Add<Output = T>> RollingWindow<T> {
    pub fn sum(&self) -> T {
        self.buffer.iter().copied().fold(T::default(), |acc, x| acc + x)
    }
}

impl RollingWindow<u64> {
    pub fn average(&self) -> f64 {
        if self.buffer.is_empty() {
            0.0
        } else {
            self.sum() as f64 / self.buffer.len() as f64
        }
    }

    pub fn min_max(&self) -> Option<(u64, u64)> {
        let first = *self.buffer.front()?;
        Some(
            self.buffer
                .iter()
                .fold((first, first), |(min, max), &x| (min.min(x), max.max(x))),
        )
    }
}

impl Default for RollingWindow<u64> {
    fn default() -> Self {
        Self::new(128)
    }
}

/// Totals and recent timings for mesh construction.
#[derive(Debug, Clone, Default)]
pub struct MeshMetrics {
    // Geometry
    /// Occupied cells fed to the mesher, summed over all builds.
    pub total_cells: u64,
    /// Welded vertices produced, summed over all builds.
    pub total_vertices: u64,
    /// Triangles produced, summed over all builds.
    pub total_triangles: u64,
    /// Approximate buffer memory of all produced meshes.
    pub mesh_memory_bytes: u64,

    // Timing
    /// Rolling window of mesh build times in microseconds.
    pub mesh_timings: RollingWindow<u64>,

    /// Last mesh build time in microseconds.
    pub last_mesh_us: u64,
    /// Meshes built this session.
    pub meshes_built: u64,
}

impl MeshMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset everything except the session build counter.
    pub fn reset(&mut self) {
        self.total_cells = 0;
        self.total_vertices = 0;
        self.total_triangles = 0;
        self.mesh_memory_bytes = 0;
        self.mesh_timings.clear();
        self.last_mesh_us = 0;
    }

    /// Record one finished mesh build.
    pub fn record_mesh(&mut self, cells: usize, output: &MeshOutput, timing_us: u64) {
        if !is_enabled() {
            return;
        }

        self.total_cells += cells as u64;
        self.total_vertices += output.vertex_count() as u64;
        self.total_triangles += output.triangle_count() as u64;
        // 12 bytes per vertex position, 4 bytes per index
        self.mesh_memory_bytes +=
            (output.vertices.len() as u64 * 4) + (output.indices.len() as u64 * 4);

        self.mesh_timings.push(timing_us);
        self.last_mesh_us = timing_us;
        self.meshes_built += 1;
    }

    pub fn avg_mesh_timing_us(&self) -> f64 {
        self.mesh_timings.average()
    }
}
