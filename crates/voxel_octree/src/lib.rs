//! voxel_octree - Sparse voxel octree and boundary-face meshing
//!
//! This crate stores variable-resolution 3D occupancy in a sparse octree and
//! turns occupied cells into a minimal triangle mesh of their exposed faces.
//!
//! # Features
//!
//! - **Sparse octree**: arena-backed 8-ary tree with same-depth neighbor
//!   lookup across subtree boundaries
//! - **Flattening**: octree (or shape generator) → position-keyed cell map
//!   with per-cell level, with single-octant rebuilds
//! - **Boundary meshing**: face culling against occupied neighbors plus
//!   vertex welding, sequential or on rayon's pool
//! - **Occupancy sources**: stock shapes and a heightmap voxelizer
//!
//! # Example
//!
//! ```ignore
//! use voxel_octree::{mesh_cells, MeshConfig};
//! use glam::IVec3;
//!
//! let cells = [IVec3::ZERO, IVec3::X];
//! let output = mesh_cells(&cells, &MeshConfig::default());
//!
//! println!("Generated {} vertices, {} triangles",
//!     output.vertex_count(), output.triangle_count());
//! ```

pub mod constants;
pub mod key;
pub mod types;

// Re-export commonly used items
pub use constants::{Face, FaceTemplate, Octant, FACE_TEMPLATES, OCTANT_ORDER};
pub use key::{CellKey, PositionKey};
pub use types::{MeshConfig, MeshOutput, Schedule};

// Sparse octree and neighbor lookup
pub mod octree;
pub use octree::{NodeId, OctreeNode, SparseOctree};

// Occupancy sources
pub mod heightmap;
pub mod shapes;
pub use heightmap::HeightGrid;
pub use shapes::{Coverage, ShapeGenerator};

// Octree → flat cell map
pub mod flatten;
pub use flatten::{flatten_generated, rebuild, FlatCell, FlatMap};

// Boundary-face meshing
pub mod mesh;
pub use mesh::{mesh_cells, mesh_flat, mesh_octree, VertexWelder};

// Task queue for batched meshing
pub mod task_queue;
pub use task_queue::{MeshCompletion, MeshRequest, MeshSource, MeshingStage};

// Background mesh jobs
pub mod threading;
pub use threading::{JobId, MeshJob};

pub mod metrics;
