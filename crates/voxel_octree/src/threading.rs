//! Background mesh construction on rayon's pool.
//!
//! A [`MeshJob`] runs one build with `rayon::spawn` and hands the result
//! back through a single-slot channel:
//!
//! ```ignore
//! let mut job = MeshJob::spawn(cells, MeshConfig::default());
//!
//! // Poll each frame
//! if let Some(output) = job.poll() {
//!   // Upload output
//! }
//!
//! // Or block
//! let output = job.wait();
//! ```
//!
//! Jobs cannot be cancelled; dropping a `MeshJob` discards the result when
//! it arrives.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::{bounded, Receiver, TryRecvError};
use glam::IVec3;

use crate::mesh::mesh_cells;
use crate::types::{MeshConfig, MeshOutput};

/// Unique identifier for a spawned job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(u64);

impl JobId {
  fn next() -> Self {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    Self(COUNTER.fetch_add(1, Ordering::Relaxed))
  }

  pub fn raw(self) -> u64 {
    self.0
  }
}

/// Handle to a mesh build running on rayon's pool.
#[derive(Debug)]
pub struct MeshJob {
  id: JobId,
  receiver: Receiver<MeshOutput>,
  taken: bool,
}

impl MeshJob {
  /// Mesh `cells` in the background.
  pub fn spawn(cells: Vec<IVec3>, config: MeshConfig) -> Self {
    Self::spawn_with(move || mesh_cells(&cells, &config))
  }

  /// Run any mesh-producing closure in the background.
  pub fn spawn_with<F>(work: F) -> Self
  where
    F: FnOnce() -> MeshOutput + Send + 'static,
  {
    let id = JobId::next();
    let (sender, receiver) = bounded(1);

    rayon::spawn(move || {
      #[cfg(feature = "tracing")]
      let _span = tracing::debug_span!("mesh_job", id = id.raw()).entered();

      // The handle may already be gone; the result is then dropped.
      let _ = sender.send(work());
    });

    Self {
      id,
      receiver,
      taken: false,
    }
  }

  pub fn id(&self) -> JobId {
    self.id
  }

  /// Take the result if the build finished (non-blocking).
  ///
  /// Returns `Some` exactly once.
  pub fn poll(&mut self) -> Option<MeshOutput> {
    if self.taken {
      return None;
    }
    match self.receiver.try_recv() {
      Ok(output) => {
        self.taken = true;
        Some(output)
      }
      Err(TryRecvError::Empty) => None,
      Err(TryRecvError::Disconnected) => {
        self.taken = true;
        None
      }
    }
  }

  /// True while the result has been neither produced nor taken.
  pub fn is_pending(&self) -> bool {
    !self.taken && self.receiver.is_empty()
  }

  /// Block until the build finishes and take its result.
  ///
  /// `None` if the result was already taken by [`poll`](Self::poll).
  pub fn wait(self) -> Option<MeshOutput> {
    if self.taken {
      return None;
    }
    self.receiver.recv().ok()
  }

  /// Number of worker threads in rayon's pool.
  pub fn num_threads() -> usize {
    rayon::current_num_threads()
  }
}

#[cfg(test)]
#[path = "threading_test.rs"]
mod threading_test;
