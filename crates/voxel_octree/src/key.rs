//! Hashable lookup keys for cell coordinates and vertex positions.
//!
//! [`CellKey`] wraps an integer grid coordinate. [`PositionKey`] wraps a float
//! position by its bit pattern, so two positions map to the same key exactly
//! when they are the same number (with `-0.0` folded onto `0.0`).

use glam::{IVec3, Vec3};

/// Integer cell coordinate used as a set/map key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct CellKey {
  pub x: i32,
  pub y: i32,
  pub z: i32,
}

impl CellKey {
  pub const fn new(x: i32, y: i32, z: i32) -> Self {
    Self { x, y, z }
  }

  /// Key of the grid cell nearest to a float coordinate.
  ///
  /// Ties round away from zero.
  #[inline]
  pub fn from_rounded(position: Vec3) -> Self {
    let rounded = position.round();
    Self::new(rounded.x as i32, rounded.y as i32, rounded.z as i32)
  }

  /// Key shifted by `delta`, `None` if a component leaves the `i32` range.
  #[inline]
  pub fn offset(self, delta: IVec3) -> Option<Self> {
    Some(Self::new(
      self.x.checked_add(delta.x)?,
      self.y.checked_add(delta.y)?,
      self.z.checked_add(delta.z)?,
    ))
  }

  #[inline]
  pub fn as_ivec3(self) -> IVec3 {
    IVec3::new(self.x, self.y, self.z)
  }

  #[inline]
  pub fn to_array(self) -> [i32; 3] {
    [self.x, self.y, self.z]
  }
}

impl From<IVec3> for CellKey {
  fn from(v: IVec3) -> Self {
    Self::new(v.x, v.y, v.z)
  }
}

impl From<[i32; 3]> for CellKey {
  fn from([x, y, z]: [i32; 3]) -> Self {
    Self::new(x, y, z)
  }
}

impl From<CellKey> for IVec3 {
  fn from(key: CellKey) -> Self {
    key.as_ivec3()
  }
}

/// Exact float position used as a map key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PositionKey([u32; 3]);

impl PositionKey {
  /// Key for a position.
  ///
  /// `-0.0` and `0.0` share a key; all NaNs share a key.
  #[inline]
  pub fn new(position: Vec3) -> Self {
    Self([
      canonical_bits(position.x),
      canonical_bits(position.y),
      canonical_bits(position.z),
    ])
  }

  #[inline]
  pub fn from_array(position: [f32; 3]) -> Self {
    Self::new(Vec3::from_array(position))
  }

  /// Position this key was built from (canonicalized).
  #[inline]
  pub fn to_vec3(self) -> Vec3 {
    Vec3::new(
      f32::from_bits(self.0[0]),
      f32::from_bits(self.0[1]),
      f32::from_bits(self.0[2]),
    )
  }
}

impl From<Vec3> for PositionKey {
  fn from(v: Vec3) -> Self {
    Self::new(v)
  }
}

#[inline]
fn canonical_bits(value: f32) -> u32 {
  if value == 0.0 {
    0.0f32.to_bits()
  } else if value.is_nan() {
    f32::NAN.to_bits()
  } else {
    value.to_bits()
  }
}

#[cfg(test)]
#[path = "key_test.rs"]
mod key_test;
