use crate::geometry::{HitRecord, Primitive};
use crate::math::{Point3, Ray, Vec3};

/// Below this `|e1 · (D × e2)|` the ray is treated as parallel to the triangle,
/// and hits closer than this are rejected as self-intersections.
pub const TRIANGLE_EPSILON: f32 = 1e-7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub v0: Point3,
    pub v1: Point3,
    pub v2: Point3,
}

impl Triangle {
    pub fn new(v0: Point3, v1: Point3, v2: Point3) -> Triangle {
        Triangle { v0, v1, v2 }
    }

    /// Unit normal following the winding `v0 -> v1 -> v2`. Zero-area triangles
    /// produce a non-finite normal.
    pub fn normal(&self) -> Vec3 {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0)).normalize()
    }

    pub fn area(&self) -> f32 {
        0.5 * (self.v1 - self.v0).cross(&(self.v2 - self.v0)).norm()
    }
}

impl Primitive for Triangle {
    // Möller–Trumbore. Barycentric bounds are inclusive, so rays through an
    // edge or a vertex hit.
    fn intersect(&self, r: &Ray) -> Option<HitRecord> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;
        let h = r.direction.cross(&edge2);
        let a = edge1.dot(&h);
        if a > -TRIANGLE_EPSILON && a < TRIANGLE_EPSILON {
            return None;
        }
        let f = 1.0 / a;
        let s = r.origin - self.v0;
        let u = f * s.dot(&h);
        if u < 0.0 || u > 1.0 {
            return None;
        }
        let q = s.cross(&edge1);
        let v = f * r.direction.dot(&q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }
        let time = f * edge2.dot(&q);
        if time > TRIANGLE_EPSILON {
            Some(HitRecord::new(time, r.point_at_parameter(time), self.normal()))
        } else {
            // the line crosses the triangle, but behind the ray origin
            None
        }
    }
}
