use glam::IVec3;

use super::*;

#[test]
fn test_octant_order_is_canonical() {
  assert_eq!(OCTANT_ORDER[0], [-1, -1, -1]);
  assert_eq!(OCTANT_ORDER[1], [1, -1, -1]);
  assert_eq!(OCTANT_ORDER[2], [-1, -1, 1]);
  assert_eq!(OCTANT_ORDER[3], [1, -1, 1]);
  assert_eq!(OCTANT_ORDER[4], [-1, 1, -1]);
  assert_eq!(OCTANT_ORDER[5], [1, 1, -1]);
  assert_eq!(OCTANT_ORDER[6], [-1, 1, 1]);
  assert_eq!(OCTANT_ORDER[7], [1, 1, 1]);
}

#[test]
fn test_octant_from_sign_matches_table() {
  for (index, sign) in OCTANT_ORDER.iter().enumerate() {
    let octant = Octant::from_sign(IVec3::from_array(*sign))
      .unwrap_or_else(|| panic!("{:?} should be an octant", sign));
    assert_eq!(octant.index(), index);
    assert_eq!(octant.sign(), IVec3::from_array(*sign));
  }
}

#[test]
fn test_octant_from_sign_rejects_non_unit_components() {
  assert!(Octant::from_sign(IVec3::new(0, 1, 1)).is_none());
  assert!(Octant::from_sign(IVec3::new(3, 1, 1)).is_none());
  assert!(Octant::from_sign(IVec3::new(1, -3, 1)).is_none());
  assert!(Octant::from_sign(IVec3::new(1, 1, 2)).is_none());
}

#[test]
fn test_octant_from_index_bounds() {
  assert_eq!(Octant::from_index(7), Some(Octant::ALL[7]));
  assert!(Octant::from_index(8).is_none());
}

#[test]
fn test_face_opposites() {
  for face in Face::ALL {
    assert_eq!(face.opposite().opposite(), face);
    assert_eq!(face.opposite().normal(), -face.normal());
  }
}

#[test]
fn test_face_from_normal_roundtrip() {
  for face in Face::ALL {
    assert_eq!(Face::from_normal(face.normal()), Some(face));
  }
  assert!(Face::from_normal(IVec3::new(1, 1, 0)).is_none());
}

#[test]
fn test_face_step_is_doubled_normal() {
  assert_eq!(Face::Right.step(), IVec3::new(2, 0, 0));
  assert_eq!(Face::Bottom.step(), IVec3::new(0, -2, 0));
}

/// Every corner of a face template lies on the face plane.
#[test]
fn test_face_offsets_lie_on_face_plane() {
  for face in Face::ALL {
    let template = face.template();
    let normal = IVec3::from_array(template.normal);
    for offset in template.offsets {
      assert_eq!(
        IVec3::from_array(offset).dot(normal),
        1,
        "{:?} offset {:?} is off the face plane",
        face,
        offset
      );
    }
  }
}

/// Both triangles of each face wind counter-clockwise seen from outside.
#[test]
fn test_face_winding_points_outward() {
  for face in Face::ALL {
    let template = face.template();
    let normal = IVec3::from_array(template.normal);
    for tri in template.offsets.chunks(3) {
      let a = IVec3::from_array(tri[0]);
      let b = IVec3::from_array(tri[1]);
      let c = IVec3::from_array(tri[2]);
      let cross = (b - a).cross(c - a);
      assert!(cross.dot(normal) > 0, "{:?} triangle {:?} winds inward", face, tri);
    }
  }
}
