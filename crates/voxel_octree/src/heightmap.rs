//! Heightmap voxelization: grayscale grid → column-filled integer cells.
//!
//! Image decoding happens elsewhere; a [`HeightGrid`] holds already-decoded
//! samples in [0, 1], row-major (`x + width * row`). Rows run along +Z.
//!
//! The grid is sampled once per `pixel_size` block at the block's center
//! pixel. Each sample becomes a column of `ceil(max_y * h)` cells (at least
//! one) standing on `y = 0`, and the columns are centered on the origin in
//! X and Z.

use glam::IVec3;

/// Decoded height samples.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
  width: u32,
  height: u32,
  samples: Vec<f32>,
}

impl HeightGrid {
  /// Grid from normalized samples, clamped to [0, 1].
  ///
  /// Returns `None` when either dimension is zero or `samples` does not hold
  /// exactly `width * height` values.
  pub fn new(width: u32, height: u32, mut samples: Vec<f32>) -> Option<Self> {
    if width == 0 || height == 0 || samples.len() != width as usize * height as usize {
      return None;
    }
    for sample in &mut samples {
      *sample = if sample.is_nan() { 0.0 } else { sample.clamp(0.0, 1.0) };
    }
    Some(Self {
      width,
      height,
      samples,
    })
  }

  /// Grid from 8-bit luminance, `value / 255`.
  pub fn from_luma8(width: u32, height: u32, pixels: &[u8]) -> Option<Self> {
    let samples = pixels.iter().map(|&p| p as f32 / 255.0).collect();
    Self::new(width, height, samples)
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  pub fn aspect_ratio(&self) -> f32 {
    self.width as f32 / self.height as f32
  }

  /// Sample at pixel `(x, row)`, `None` outside the grid.
  pub fn sample(&self, x: u32, row: u32) -> Option<f32> {
    if x >= self.width || row >= self.height {
      return None;
    }
    let index = x as usize + self.width as usize * row as usize;
    self.samples.get(index).copied()
  }

  /// Column-filled cells for this grid.
  ///
  /// `pixel_size` pixels per cell along X and Z (0 is treated as 1);
  /// `max_y` is the column height of a full-intensity sample. Cells are
  /// produced X-major, then Z, then bottom-up Y.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), name = "heightmap::voxelize"))]
  pub fn voxelize(&self, pixel_size: u32, max_y: u32) -> Vec<IVec3> {
    let step = pixel_size.max(1);
    let half_width = ((self.width / step) / 2) as i32;
    let half_depth = (half_width as f32 / self.aspect_ratio()).floor() as i32;

    let mut cells = Vec::new();
    for (column, x) in block_centers(self.width, step).enumerate() {
      let cell_x = column as i32 - half_width;
      for (row, z) in block_centers(self.height, step).enumerate() {
        let cell_z = row as i32 - half_depth;
        let h = self.sample(x, z).unwrap_or(0.0);
        let top = ((max_y as f32 * h).ceil() as i32).max(1);
        cells.extend((0..top).map(|y| IVec3::new(cell_x, y, cell_z)));
      }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(cells = cells.len(), "voxelized heightmap");

    cells
  }
}

/// Center pixel of each `step`-wide block along an axis of `extent` pixels,
/// for blocks whose center falls inside the axis.
fn block_centers(extent: u32, step: u32) -> impl Iterator<Item = u32> {
  (0..extent)
    .step_by(step as usize)
    .map(move |start| u64::from(start) + u64::from(step / 2))
    .take_while(move |&center| center < u64::from(extent))
    .map(|center| center as u32)
}

#[cfg(test)]
#[path = "heightmap_test.rs"]
mod heightmap_test;
