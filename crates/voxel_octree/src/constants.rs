//! Octant and face tables shared by every component.
//!
//! # Octant Order
//!
//! Children of an octree node are addressed by a sign triple in {-1, 1}³.
//! The slot index of each triple is fixed and reused by the octree, the
//! flattener and the mesh builders:
//!
//! ```text
//! Index  Sign          Bits (Y Z X)
//! ─────  ────────────  ────────────
//!   0    (-1, -1, -1)  0 0 0
//!   1    ( 1, -1, -1)  0 0 1
//!   2    (-1, -1,  1)  0 1 0
//!   3    ( 1, -1,  1)  0 1 1
//!   4    (-1,  1, -1)  1 0 0
//!   5    ( 1,  1, -1)  1 0 1
//!   6    (-1,  1,  1)  1 1 0
//!   7    ( 1,  1,  1)  1 1 1
//! ```
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          └───────── +X
//!         /
//!        /
//!       +Z
//! ```
//!
//! A unit cube spans [-1, 1]³ around its center. Face templates list the six
//! corner offsets (two triangles, counter-clockwise seen from outside) of each
//! face in that local frame.

use glam::IVec3;

/// Canonical sign triples, indexed by octant slot.
pub const OCTANT_ORDER: [[i32; 3]; 8] = [
  [-1, -1, -1],
  [1, -1, -1],
  [-1, -1, 1],
  [1, -1, 1],
  [-1, 1, -1],
  [1, 1, -1],
  [-1, 1, 1],
  [1, 1, 1],
];

/// Number of children per octree node.
pub const OCTANT_COUNT: usize = 8;

/// Number of faces per cube.
pub const FACE_COUNT: usize = 6;

/// Corner offsets emitted per face (two triangles).
pub const VERTICES_PER_FACE: usize = 6;

/// One of the eight child slots of an octree node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Octant(u8);

impl Octant {
  /// All octants in canonical order.
  pub const ALL: [Octant; OCTANT_COUNT] = [
    Octant(0),
    Octant(1),
    Octant(2),
    Octant(3),
    Octant(4),
    Octant(5),
    Octant(6),
    Octant(7),
  ];

  /// Octant at a canonical slot index. `None` for indices above 7.
  #[inline]
  pub const fn from_index(index: usize) -> Option<Self> {
    if index < OCTANT_COUNT {
      Some(Self(index as u8))
    } else {
      None
    }
  }

  /// Octant named by a sign triple.
  ///
  /// Every component must be exactly -1 or 1; anything else is not an octant.
  #[inline]
  pub fn from_sign(sign: IVec3) -> Option<Self> {
    let valid = |c: i32| c == -1 || c == 1;
    if !(valid(sign.x) && valid(sign.y) && valid(sign.z)) {
      return None;
    }
    let x = (sign.x > 0) as u8;
    let z = ((sign.z > 0) as u8) << 1;
    let y = ((sign.y > 0) as u8) << 2;
    Some(Self(x | z | y))
  }

  /// Canonical slot index (0-7).
  #[inline]
  pub const fn index(self) -> usize {
    self.0 as usize
  }

  /// Sign triple of this octant.
  #[inline]
  pub fn sign(self) -> IVec3 {
    IVec3::from_array(OCTANT_ORDER[self.index()])
  }
}

/// Axis-aligned face of a cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Face {
  /// +Z
  Front,
  /// -Z
  Back,
  /// +Y
  Top,
  /// -Y
  Bottom,
  /// -X
  Left,
  /// +X
  Right,
}

impl Face {
  /// All faces, in the order their geometry is emitted.
  pub const ALL: [Face; FACE_COUNT] = [
    Face::Front,
    Face::Back,
    Face::Top,
    Face::Bottom,
    Face::Left,
    Face::Right,
  ];

  /// Outward unit normal.
  #[inline]
  pub fn normal(self) -> IVec3 {
    IVec3::from_array(FACE_TEMPLATES[self as usize].normal)
  }

  /// Offset between sibling octant signs across this face (normal * 2).
  #[inline]
  pub fn step(self) -> IVec3 {
    self.normal() * 2
  }

  /// Face on the opposite side of the cell.
  #[inline]
  pub const fn opposite(self) -> Self {
    match self {
      Face::Front => Face::Back,
      Face::Back => Face::Front,
      Face::Top => Face::Bottom,
      Face::Bottom => Face::Top,
      Face::Left => Face::Right,
      Face::Right => Face::Left,
    }
  }

  /// Face whose outward normal equals `normal`.
  pub fn from_normal(normal: IVec3) -> Option<Self> {
    Face::ALL.into_iter().find(|face| face.normal() == normal)
  }

  /// Geometry template of this face.
  #[inline]
  pub fn template(self) -> &'static FaceTemplate {
    &FACE_TEMPLATES[self as usize]
  }
}

/// Fixed unit-cube quad: an outward normal and two triangles of corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceTemplate {
  pub normal: [i32; 3],
  pub offsets: [[i32; 3]; VERTICES_PER_FACE],
}

/// Face geometry indexed by `Face as usize`.
#[rustfmt::skip]
pub const FACE_TEMPLATES: [FaceTemplate; FACE_COUNT] = [
  // Front (+Z)
  FaceTemplate {
    normal: [0, 0, 1],
    offsets: [
      [-1, -1, 1], [1, -1, 1], [1, 1, 1],
      [-1, -1, 1], [1, 1, 1], [-1, 1, 1],
    ],
  },
  // Back (-Z)
  FaceTemplate {
    normal: [0, 0, -1],
    offsets: [
      [1, 1, -1], [1, -1, -1], [-1, -1, -1],
      [-1, 1, -1], [1, 1, -1], [-1, -1, -1],
    ],
  },
  // Top (+Y)
  FaceTemplate {
    normal: [0, 1, 0],
    offsets: [
      [1, 1, 1], [1, 1, -1], [-1, 1, -1],
      [-1, 1, 1], [1, 1, 1], [-1, 1, -1],
    ],
  },
  // Bottom (-Y)
  FaceTemplate {
    normal: [0, -1, 0],
    offsets: [
      [1, -1, -1], [1, -1, 1], [-1, -1, 1],
      [-1, -1, -1], [1, -1, -1], [-1, -1, 1],
    ],
  },
  // Left (-X)
  FaceTemplate {
    normal: [-1, 0, 0],
    offsets: [
      [-1, 1, -1], [-1, -1, -1], [-1, -1, 1],
      [-1, 1, -1], [-1, -1, 1], [-1, 1, 1],
    ],
  },
  // Right (+X)
  FaceTemplate {
    normal: [1, 0, 0],
    offsets: [
      [1, -1, 1], [1, -1, -1], [1, 1, -1],
      [1, 1, 1], [1, -1, 1], [1, 1, -1],
    ],
  },
];

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
