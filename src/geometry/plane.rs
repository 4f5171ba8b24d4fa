use crate::geometry::{HitRecord, Primitive};
use crate::math::{Point3, Ray, Vec3};

/// Rays with `|normal · direction|` at or below this are treated as parallel.
/// Coarser than the triangle and cube tolerances.
pub const PLANE_EPSILON: f32 = 1e-4;

/// Infinite plane through `point`. The normal is used as given: it is never
/// renormalized and never flipped towards the incoming ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Point3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Point3, normal: Vec3) -> Plane {
        Plane { point, normal }
    }
}

impl Primitive for Plane {
    fn intersect(&self, r: &Ray) -> Option<HitRecord> {
        let denom = self.normal.dot(&r.direction);
        if denom.abs() <= PLANE_EPSILON {
            return None;
        }
        let time = (self.point - r.origin).dot(&self.normal) / denom;
        if time < 0.0 {
            return None;
        }
        Some(HitRecord::new(
            time,
            r.point_at_parameter(time),
            self.normal,
        ))
    }
}
