pub mod color;

mod ray;

pub use color::*;
pub use ray::*;

pub type Vec3 = nalgebra::Vector3<f32>;
pub type Point3 = nalgebra::Point3<f32>;

pub fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

pub fn point3(v: [f32; 3]) -> Point3 {
    Point3::new(v[0], v[1], v[2])
}
