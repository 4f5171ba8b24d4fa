use crate::math::{Point3, Ray, Vec3};

mod cube;
mod plane;
mod sphere;
mod triangle;

pub use cube::{Cube, CUBE_EPSILON};
pub use plane::{Plane, PLANE_EPSILON};
pub use sphere::Sphere;
pub use triangle::{Triangle, TRIANGLE_EPSILON};

/// A valid forward intersection of a ray with a surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub time: f32,
    pub point: Point3,
    pub normal: Vec3,
}

impl HitRecord {
    pub fn new(time: f32, point: Point3, normal: Vec3) -> Self {
        HitRecord {
            time,
            point,
            normal,
        }
    }
}

/// Anything a ray can be tested against. Implementations must not depend on
/// any state besides `self` and the ray, so a shared scene can be traced from
/// many threads at once.
pub trait Primitive {
    fn intersect(&self, r: &Ray) -> Option<HitRecord>;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PrimitiveEnum {
    Sphere(Sphere),
    Triangle(Triangle),
    Cube(Cube),
    Plane(Plane),
}

impl PrimitiveEnum {
    pub fn kind(&self) -> &'static str {
        match self {
            PrimitiveEnum::Sphere(_) => "sphere",
            PrimitiveEnum::Triangle(_) => "triangle",
            PrimitiveEnum::Cube(_) => "cube",
            PrimitiveEnum::Plane(_) => "plane",
        }
    }
}

impl Primitive for PrimitiveEnum {
    fn intersect(&self, r: &Ray) -> Option<HitRecord> {
        match self {
            PrimitiveEnum::Sphere(inner) => inner.intersect(r),
            PrimitiveEnum::Triangle(inner) => inner.intersect(r),
            PrimitiveEnum::Cube(inner) => inner.intersect(r),
            PrimitiveEnum::Plane(inner) => inner.intersect(r),
        }
    }
}

impl From<Sphere> for PrimitiveEnum {
    fn from(s: Sphere) -> Self {
        PrimitiveEnum::Sphere(s)
    }
}

impl From<Triangle> for PrimitiveEnum {
    fn from(t: Triangle) -> Self {
        PrimitiveEnum::Triangle(t)
    }
}

impl From<Cube> for PrimitiveEnum {
    fn from(c: Cube) -> Self {
        PrimitiveEnum::Cube(c)
    }
}

impl From<Plane> for PrimitiveEnum {
    fn from(p: Plane) -> Self {
        PrimitiveEnum::Plane(p)
    }
}
