use std::f32::INFINITY;

use log::{debug, trace};

use crate::geometry::{Cube, HitRecord, Plane, Primitive, PrimitiveEnum, Sphere, Triangle};
use crate::math::{Point3, RGBColor, Ray};
use crate::shading;

/// Point light. `intensity` multiplies the diffuse term per channel and is not
/// normalized, so it may push the final color above 1.0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Point3,
    pub intensity: RGBColor,
}

impl Light {
    pub fn new(position: Point3, intensity: RGBColor) -> Self {
        Light {
            position,
            intensity,
        }
    }
}

/// Everything a ray can see. Built once before rendering and only read afterwards.
///
/// Primitives are stored in a single list grouped by kind: spheres, then
/// triangles, then cubes, then planes, each group in the order it was given.
/// That order is the tie-break when two hits are exactly equally far away.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    primitives: Vec<PrimitiveEnum>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new(
        spheres: Vec<Sphere>,
        triangles: Vec<Triangle>,
        cubes: Vec<Cube>,
        planes: Vec<Plane>,
        lights: Vec<Light>,
    ) -> Self {
        debug!(
            "scene: {} spheres, {} triangles, {} cubes, {} planes, {} lights",
            spheres.len(),
            triangles.len(),
            cubes.len(),
            planes.len(),
            lights.len()
        );
        let primitives: Vec<PrimitiveEnum> = spheres
            .into_iter()
            .map(PrimitiveEnum::from)
            .chain(triangles.into_iter().map(PrimitiveEnum::from))
            .chain(cubes.into_iter().map(PrimitiveEnum::from))
            .chain(planes.into_iter().map(PrimitiveEnum::from))
            .collect();
        for (index, prim) in primitives.iter().enumerate() {
            trace!("primitive {} is a {}", index, prim.kind());
        }
        Scene { primitives, lights }
    }

    pub fn primitives(&self) -> &[PrimitiveEnum] {
        &self.primitives
    }

    /// Closest forward hit along the ray, by linear scan. A later primitive only
    /// replaces the current best when it is strictly closer.
    pub fn nearest_hit(&self, r: &Ray) -> Option<(usize, HitRecord)> {
        let mut nearest: Option<(usize, HitRecord)> = None;
        let mut nearest_time = INFINITY;
        for (index, prim) in self.primitives.iter().enumerate() {
            if let Some(hit) = prim.intersect(r) {
                if hit.time < nearest_time {
                    nearest_time = hit.time;
                    nearest = Some((index, hit));
                }
            }
        }
        nearest
    }

    /// Color seen along `r`: diffuse lighting at the nearest hit, or the sky
    /// gradient when nothing is hit.
    pub fn trace(&self, r: &Ray) -> RGBColor {
        match self.nearest_hit(r) {
            Some((_, hit)) => shading::diffuse(&self.lights, hit.point, hit.normal),
            None => shading::background(r.direction),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vec3;

    fn lights() -> Vec<Light> {
        vec![
            Light::new(Point3::new(-1.0, 1.0, 0.0), RGBColor::new(1.0, 0.0, 1.0)),
            Light::new(Point3::new(2.0, 1.0, 0.0), RGBColor::new(1.0, 1.0, 0.0)),
        ]
    }

    fn bonus_scene() -> Scene {
        Scene::new(
            vec![Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.3)],
            vec![Triangle::new(
                Point3::new(0.5, -0.25, -1.0),
                Point3::new(1.5, -0.25, -1.0),
                Point3::new(1.0, 0.25, -1.0),
            )],
            vec![Cube::new(Point3::new(-1.0, 0.0, -1.25), 0.5)],
            vec![Plane::new(Point3::new(0.0, -0.5, -1.0), Vec3::new(0.0, 1.0, 0.0))],
            lights(),
        )
    }

    #[test]
    fn test_kind_order() {
        let scene = bonus_scene();
        let kinds: Vec<_> = scene.primitives().iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, ["sphere", "triangle", "cube", "plane"]);
    }

    #[test]
    fn test_nearest_wins_regardless_of_kind_order() {
        // the plane is scanned last but is closer than the sphere behind it
        let scene = Scene::new(
            vec![Sphere::new(Point3::new(0.0, 0.0, -10.0), 1.0)],
            vec![],
            vec![],
            vec![Plane::new(Point3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, 1.0))],
            lights(),
        );
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0));
        let (index, hit) = scene.nearest_hit(&ray).unwrap();
        assert_eq!(scene.primitives()[index].kind(), "plane");
        assert_eq!(hit.time, 2.0);
    }

    #[test]
    fn test_tie_keeps_first_scanned() {
        // a tilted plane and a cube face at exactly the same depth, different normals
        let cube = Cube::new(Point3::new(0.0, 0.0, -2.0), 2.0);
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0));
        let facing = Plane::new(Point3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.5, 1.0));
        assert_eq!(facing.intersect(&ray).unwrap().time, 1.0);
        assert_eq!(cube.intersect(&ray).unwrap().time, 1.0);

        let scene = Scene::new(vec![], vec![], vec![cube], vec![facing], lights());
        let (index, hit) = scene.nearest_hit(&ray).unwrap();
        assert_eq!(scene.primitives()[index].kind(), "cube");
        assert_eq!(hit.normal, Vec3::new(0.0, 0.0, 1.0));
        let expected = shading::diffuse(&scene.lights, hit.point, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(scene.trace(&ray), expected);

        // within one kind, list order decides
        let other = Plane::new(Point3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0));
        let scene = Scene::new(vec![], vec![], vec![], vec![other, facing], lights());
        let (index, hit) = scene.nearest_hit(&ray).unwrap();
        assert_eq!(index, 0);
        assert_eq!(hit.normal, other.normal);
        let scene = Scene::new(vec![], vec![], vec![], vec![facing, other], lights());
        let (_, hit) = scene.nearest_hit(&ray).unwrap();
        assert_eq!(hit.normal, facing.normal);
    }

    #[test]
    fn test_miss_is_background_regardless_of_scene() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.3, 0.9, -0.1));
        let expected = shading::background(ray.direction);
        assert_eq!(Scene::default().trace(&ray), expected);
        assert!(bonus_scene().nearest_hit(&ray).is_none());
        assert_eq!(bonus_scene().trace(&ray), expected);
    }

    #[test]
    fn test_hit_uses_diffuse_lighting() {
        let scene = bonus_scene();
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0));
        let (index, hit) = scene.nearest_hit(&ray).unwrap();
        assert_eq!(scene.primitives()[index].kind(), "sphere");
        assert_eq!(
            scene.trace(&ray),
            shading::diffuse(&scene.lights, hit.point, hit.normal)
        );
    }

    #[test]
    fn test_trace_is_idempotent() {
        let scene = bonus_scene();
        for direction in [
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(-1.0, 0.0, -1.25),
            Vec3::new(0.0, -1.0, -1.0),
            Vec3::new(0.2, 0.7, -1.0),
        ] {
            let ray = Ray::new(Point3::origin(), direction);
            let first = scene.trace(&ray);
            for _ in 0..4 {
                let again = scene.trace(&ray);
                assert_eq!(first.r().to_bits(), again.r().to_bits());
                assert_eq!(first.g().to_bits(), again.g().to_bits());
                assert_eq!(first.b().to_bits(), again.b().to_bits());
            }
        }
    }
}
