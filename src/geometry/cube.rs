use crate::geometry::{HitRecord, Primitive};
use crate::math::{Point3, Ray, Vec3};

/// Hits at or below this distance are discarded, and a hit point within this
/// distance of a face plane is considered to lie on that face.
pub const CUBE_EPSILON: f32 = 1e-7;

/// Face normals in the order they are tested against a hit point.
const FACE_NORMALS: [Vec3; 6] = [
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(0.0, 0.0, 1.0),
];

/// Axis-aligned cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    pub center: Point3,
    pub side_length: f32,
}

impl Cube {
    pub fn new(center: Point3, side_length: f32) -> Cube {
        Cube {
            center,
            side_length,
        }
    }

    pub fn min_corner(&self) -> Point3 {
        self.center - Vec3::repeat(self.side_length / 2.0)
    }

    pub fn max_corner(&self) -> Point3 {
        self.center + Vec3::repeat(self.side_length / 2.0)
    }

    /// Entry and exit distances of the ray along one axis, in ascending order.
    /// An axis-parallel ray yields infinities (or NaN when the origin sits
    /// exactly on the slab boundary) which the caller's comparisons absorb.
    fn slab(&self, r: &Ray, axis: usize) -> (f32, f32) {
        let half = self.side_length / 2.0;
        let mut near = (self.center[axis] - half - r.origin[axis]) / r.direction[axis];
        let mut far = (self.center[axis] + half - r.origin[axis]) / r.direction[axis];
        if near > far {
            std::mem::swap(&mut near, &mut far);
        }
        (near, far)
    }

    /// Outward normal of the face the point lies on. Faces are tried in the
    /// order -x, +x, -y, +y, -z, +z and the first one within `CUBE_EPSILON`
    /// wins, so edges and corners resolve to the earliest face. If rounding put
    /// the point outside every band, the nearest face is used instead.
    pub fn face_normal(&self, point: Point3) -> Vec3 {
        let (min, max) = (self.min_corner(), self.max_corner());
        let distances = [
            (point.x - min.x).abs(),
            (point.x - max.x).abs(),
            (point.y - min.y).abs(),
            (point.y - max.y).abs(),
            (point.z - min.z).abs(),
            (point.z - max.z).abs(),
        ];
        if let Some(face) = distances.iter().position(|d| *d < CUBE_EPSILON) {
            return FACE_NORMALS[face];
        }
        let mut nearest = 0;
        for (face, distance) in distances.iter().enumerate() {
            if *distance < distances[nearest] {
                nearest = face;
            }
        }
        FACE_NORMALS[nearest]
    }
}

impl Primitive for Cube {
    fn intersect(&self, r: &Ray) -> Option<HitRecord> {
        let (mut t_min, mut t_max) = self.slab(r, 0);
        for axis in 1..3 {
            let (axis_min, axis_max) = self.slab(r, axis);
            if t_min > axis_max || axis_min > t_max {
                return None;
            }
            if axis_min > t_min {
                t_min = axis_min;
            }
            if axis_max < t_max {
                t_max = axis_max;
            }
        }

        let mut time = t_min;
        if time <= CUBE_EPSILON {
            time = t_max;
            if time <= CUBE_EPSILON {
                return None;
            }
        }
        // NaN from an axis-parallel ray grazing a face, inf from a zero direction
        if !time.is_finite() {
            return None;
        }

        let point = r.point_at_parameter(time);
        Some(HitRecord::new(time, point, self.face_normal(point)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_cube() -> Cube {
        Cube::new(Point3::origin(), 2.0)
    }

    #[test]
    fn test_hit_from_positive_x() {
        let ray = Ray::new(Point3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        let hit = unit_cube().intersect(&ray).expect("aimed at the center");
        assert_eq!(hit.time, 4.0);
        assert_eq!(hit.normal, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(hit.point, Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_entry_normal_matches_entry_axis() {
        let cube = unit_cube();
        for normal in FACE_NORMALS {
            let origin = Point3::origin() + normal * 5.0;
            let ray = Ray::new(origin, -normal);
            let hit = cube.intersect(&ray).unwrap();
            assert_eq!(hit.time, 4.0, "{:?}", normal);
            assert_eq!(hit.normal, normal);
        }
    }

    #[test]
    fn test_offset_center() {
        let cube = Cube::new(Point3::new(-1.0, 0.0, -1.25), 0.5);
        let ray = Ray::new(Point3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = cube.intersect(&ray).unwrap();
        assert_relative_eq!(hit.time, 1.0, epsilon = 1e-6);
        assert_eq!(hit.normal, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_off_center_hit() {
        let ray = Ray::new(Point3::new(3.0, 0.5, 0.25), Vec3::new(-1.0, 0.0, 0.0).normalize());
        let hit = unit_cube().intersect(&ray).unwrap();
        assert_relative_eq!(hit.time, 2.0, epsilon = 1e-6);
        assert_eq!(hit.normal, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_origin_inside_uses_exit() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 1.0, 0.0));
        let hit = unit_cube().intersect(&ray).unwrap();
        assert_eq!(hit.time, 1.0);
        assert_eq!(hit.normal, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_behind_origin_is_a_miss() {
        let ray = Ray::new(Point3::new(5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(unit_cube().intersect(&ray).is_none());
    }

    #[test]
    fn test_miss_beside() {
        let ray = Ray::new(Point3::new(5.0, 3.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        assert!(unit_cube().intersect(&ray).is_none());
        let ray = Ray::new(Point3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 1.0, 0.0));
        assert!(unit_cube().intersect(&ray).is_none());
    }

    #[test]
    fn test_zero_direction_is_a_miss() {
        let ray = Ray::new(Point3::origin(), Vec3::zeros());
        assert!(unit_cube().intersect(&ray).is_none());
        let ray = Ray::new(Point3::new(5.0, 0.0, 0.0), Vec3::zeros());
        assert!(unit_cube().intersect(&ray).is_none());
    }

    #[test]
    fn test_axis_parallel_ray_on_a_face_plane() {
        let cube = unit_cube();
        // on the -x plane the x slab is (NaN, inf) and the NaN entry survives
        let ray = Ray::new(Point3::new(-1.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(cube.intersect(&ray).is_none());

        // on the +x plane the NaN lands in the exit instead, so the entry stands
        let ray = Ray::new(Point3::new(1.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = cube.intersect(&ray).expect("grazes the +x face");
        assert_eq!(hit.time, 4.0);
        assert_eq!(hit.point, Point3::new(1.0, 1.0, 0.0));
        assert_eq!(hit.normal, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_corner_resolves_to_first_face() {
        let cube = unit_cube();
        assert_eq!(cube.face_normal(Point3::new(1.0, 1.0, 1.0)), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(cube.face_normal(Point3::new(-1.0, -1.0, 1.0)), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(cube.face_normal(Point3::new(0.0, 1.0, -1.0)), Vec3::new(0.0, 1.0, 0.0));

        // a ray along the diagonal enters through the corner
        let ray = Ray::new(Point3::new(3.0, 3.0, 3.0), Vec3::new(-1.0, -1.0, -1.0));
        let hit = cube.intersect(&ray).unwrap();
        assert_eq!(hit.time, 2.0);
        assert_eq!(hit.normal, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_nearest_face_fallback() {
        let cube = unit_cube();
        assert_eq!(cube.face_normal(Point3::new(0.1, -0.999, 0.2)), Vec3::new(0.0, -1.0, 0.0));
    }
}
