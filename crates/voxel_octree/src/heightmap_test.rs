use super::*;

#[test]
fn test_rejects_mismatched_samples() {
  assert!(HeightGrid::new(2, 2, vec![0.0; 3]).is_none());
  assert!(HeightGrid::new(0, 2, Vec::new()).is_none());
  assert!(HeightGrid::from_luma8(3, 1, &[0, 128, 255]).is_some());
}

#[test]
fn test_samples_are_clamped() {
  let grid = HeightGrid::new(2, 1, vec![-1.0, 3.0]).unwrap();
  assert_eq!(grid.sample(0, 0), Some(0.0));
  assert_eq!(grid.sample(1, 0), Some(1.0));
  assert_eq!(grid.sample(2, 0), None);
}

#[test]
fn test_columns_follow_heights() {
  // row 0: 0.0, 0.5; row 1: 1.0, 0.25
  let grid = HeightGrid::new(2, 2, vec![0.0, 0.5, 1.0, 0.25]).unwrap();
  let cells = grid.voxelize(1, 4);

  let expected = vec![
    IVec3::new(-1, 0, -1),
    IVec3::new(-1, 0, 0),
    IVec3::new(-1, 1, 0),
    IVec3::new(-1, 2, 0),
    IVec3::new(-1, 3, 0),
    IVec3::new(0, 0, -1),
    IVec3::new(0, 1, -1),
    IVec3::new(0, 0, 0),
  ];
  assert_eq!(cells, expected);
}

#[test]
fn test_flat_grid_is_one_layer() {
  let grid = HeightGrid::new(4, 2, vec![0.0; 8]).unwrap();
  let cells = grid.voxelize(1, 10);

  assert_eq!(cells.len(), 8);
  assert!(cells.iter().all(|c| c.y == 0));
  // Centered on the origin: x in -2..2, z in -1..1.
  assert_eq!(cells.iter().map(|c| c.x).min(), Some(-2));
  assert_eq!(cells.iter().map(|c| c.x).max(), Some(1));
  assert_eq!(cells.iter().map(|c| c.z).min(), Some(-1));
  assert_eq!(cells.iter().map(|c| c.z).max(), Some(0));
}

#[test]
fn test_pixel_size_samples_block_centers() {
  let mut samples = vec![0.0; 16];
  // Pixel (3, 1): center of the second block along X in the first block row.
  samples[4 + 3] = 1.0;
  let grid = HeightGrid::new(4, 4, samples).unwrap();
  let cells = grid.voxelize(2, 3);

  // 2x2 columns; one of them is 3 tall.
  assert_eq!(cells.len(), 3 + 3);
  assert_eq!(cells.iter().filter(|c| c.y == 2).count(), 1);
  assert!(cells.contains(&IVec3::new(0, 2, -1)));
}

#[test]
fn test_zero_pixel_size_behaves_as_one() {
  let grid = HeightGrid::new(2, 2, vec![0.0; 4]).unwrap();
  assert_eq!(grid.voxelize(0, 1), grid.voxelize(1, 1));
}

#[test]
fn test_block_centers_near_u32_limit() {
  let step = 1u32 << 31;
  let centers: Vec<u32> = block_centers(u32::MAX, step).collect();
  assert_eq!(centers, vec![1 << 30, (1 << 31) + (1 << 30)]);

  let wide: Vec<u32> = block_centers(u32::MAX - 1, u32::MAX).collect();
  assert_eq!(wide, vec![u32::MAX / 2]);
}

#[test]
fn test_block_centers_drop_partial_tail() {
  // Blocks at 0, 4, 8; the last center (10) falls outside.
  assert_eq!(block_centers(10, 4).collect::<Vec<_>>(), vec![2, 6]);
  assert_eq!(block_centers(9, 3).collect::<Vec<_>>(), vec![1, 4, 7]);
}
