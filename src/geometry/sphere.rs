use crate::geometry::{HitRecord, Primitive};
use crate::math::{Point3, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Sphere {
        Sphere { center, radius }
    }
}

impl Primitive for Sphere {
    /// Only the near root of the quadratic is considered. A near root behind the
    /// ray origin is a miss, even when the far root is in front of it, so a ray
    /// starting inside the sphere never hits it.
    fn intersect(&self, r: &Ray) -> Option<HitRecord> {
        let oc: Vec3 = r.origin - self.center;
        let a = r.direction.dot(&r.direction);
        let b = 2.0 * oc.dot(&r.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let time = (-b - discriminant.sqrt()) / (2.0 * a);
        // NaN (zero-length direction) fails this comparison too.
        if !(time >= 0.0) {
            return None;
        }
        let point = r.point_at_parameter(time);
        let normal = (point - self.center).normalize();
        Some(HitRecord::new(time, point, normal))
    }
}
