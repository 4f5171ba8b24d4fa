use crate::math::{Point3, RGBColor, Vec3};
use crate::scene::Light;

pub const SKY_BLUE: RGBColor = RGBColor::new(0.5, 0.7, 1.0);

/// Lambertian contribution of every light at `point`. No distance falloff, no
/// occlusion, no ambient term, and the sum is left unclamped.
pub fn diffuse(lights: &[Light], point: Point3, normal: Vec3) -> RGBColor {
    let mut color = RGBColor::ZERO;
    for light in lights {
        let to_light = (light.position - point).normalize();
        let cosine = normal.dot(&to_light).max(0.0);
        color += light.intensity * cosine;
    }
    color
}

/// Vertical white-to-blue gradient for rays that escape the scene.
pub fn background(direction: Vec3) -> RGBColor {
    let unit_direction = direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    RGBColor::WHITE.lerp(SKY_BLUE, t)
}
