use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Cube, Plane, Sphere, Triangle},
    math::{point3, vec3},
    scene::Light,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereData {
    pub center: [f32; 3],
    pub radius: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriangleData {
    pub v0: [f32; 3],
    pub v1: [f32; 3],
    pub v2: [f32; 3],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CubeData {
    pub center: [f32; 3],
    pub side_length: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaneData {
    pub point: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightData {
    pub position: [f32; 3],
    pub intensity: [f32; 3],
}

impl From<&SphereData> for Sphere {
    fn from(data: &SphereData) -> Self {
        Sphere::new(point3(data.center), data.radius)
    }
}

impl From<&TriangleData> for Triangle {
    fn from(data: &TriangleData) -> Self {
        Triangle::new(point3(data.v0), point3(data.v1), point3(data.v2))
    }
}

impl From<&CubeData> for Cube {
    fn from(data: &CubeData) -> Self {
        Cube::new(point3(data.center), data.side_length)
    }
}

impl From<&PlaneData> for Plane {
    fn from(data: &PlaneData) -> Self {
        Plane::new(point3(data.point), vec3(data.normal))
    }
}

impl From<&LightData> for Light {
    fn from(data: &LightData) -> Self {
        Light::new(point3(data.position), data.intensity.into())
    }
}
