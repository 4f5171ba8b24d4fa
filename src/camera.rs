use crate::math::{Point3, Ray, Vec3};

/// Fixed viewport camera: rays leave `origin` and pass through the rectangle
/// spanned by `horizontal` and `vertical` from `lower_left_corner`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub origin: Point3,
    pub lower_left_corner: Point3,
    pub horizontal: Vec3,
    pub vertical: Vec3,
}

impl Camera {
    pub fn new(
        origin: Point3,
        lower_left_corner: Point3,
        horizontal: Vec3,
        vertical: Vec3,
    ) -> Camera {
        Camera {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        // u and v run from 0 to 1 across the viewport, starting at the lower left corner.
        let target = self.lower_left_corner + u * self.horizontal + v * self.vertical;
        Ray::new(self.origin, target - self.origin)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(
            Point3::origin(),
            Point3::new(-2.0, -1.0, -1.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        )
    }
}
