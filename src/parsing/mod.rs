mod primitives;

use std::{fs, path::Path};

use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use primitives::*;

use crate::{
    camera::Camera,
    error::{Error, Result},
    geometry::Triangle,
    math::{point3, vec3, RGBColor},
    renderer::RenderSettings,
    scene::Scene,
};

fn default_image_width() -> u32 {
    800
}
fn default_image_height() -> u32 {
    800
}
fn default_samples_per_pixel() -> u32 {
    4
}
fn default_viewport_origin() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}
fn default_viewport_lower_left_corner() -> [f32; 3] {
    [-2.0, -1.0, -1.0]
}
fn default_viewport_horizontal_span() -> [f32; 3] {
    [4.0, 0.0, 0.0]
}
fn default_viewport_vertical_span() -> [f32; 3] {
    [0.0, 2.0, 0.0]
}

/// On-disk scene description. Everything except the primitive and light lists
/// has a default, and unknown keys are rejected so typos don't go unnoticed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SceneData {
    #[serde(default = "default_image_width")]
    pub image_width: u32,
    #[serde(default = "default_image_height")]
    pub image_height: u32,
    #[serde(default = "default_samples_per_pixel")]
    pub samples_per_pixel: u32,
    #[serde(default = "default_viewport_origin")]
    pub viewport_origin: [f32; 3],
    #[serde(default = "default_viewport_lower_left_corner")]
    pub viewport_lower_left_corner: [f32; 3],
    #[serde(default = "default_viewport_horizontal_span")]
    pub viewport_horizontal_span: [f32; 3],
    #[serde(default = "default_viewport_vertical_span")]
    pub viewport_vertical_span: [f32; 3],
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub lights: Vec<LightData>,
    #[serde(default)]
    pub spheres: Vec<SphereData>,
    #[serde(default)]
    pub triangles: Vec<TriangleData>,
    #[serde(default)]
    pub cubes: Vec<CubeData>,
    #[serde(default)]
    pub planes: Vec<PlaneData>,
}

impl SceneData {
    /// An empty scene (pure sky) with default image and viewport settings.
    pub fn empty() -> SceneData {
        SceneData {
            image_width: default_image_width(),
            image_height: default_image_height(),
            samples_per_pixel: default_samples_per_pixel(),
            viewport_origin: default_viewport_origin(),
            viewport_lower_left_corner: default_viewport_lower_left_corner(),
            viewport_horizontal_span: default_viewport_horizontal_span(),
            viewport_vertical_span: default_viewport_vertical_span(),
            seed: None,
            lights: Vec::new(),
            spheres: Vec::new(),
            triangles: Vec::new(),
            cubes: Vec::new(),
            planes: Vec::new(),
        }
    }

    /// The scene rendered when no file is given: one of each primitive kind
    /// over a ground plane, lit by a purple and a yellow light.
    pub fn builtin() -> SceneData {
        SceneData {
            lights: vec![
                LightData {
                    position: [-1.0, 1.0, 0.0],
                    intensity: [1.0, 0.0, 1.0],
                },
                LightData {
                    position: [2.0, 1.0, 0.0],
                    intensity: [1.0, 1.0, 0.0],
                },
            ],
            spheres: vec![SphereData {
                center: [0.0, 0.0, -1.0],
                radius: 0.3,
            }],
            triangles: vec![TriangleData {
                v0: [0.5, -0.25, -1.0],
                v1: [1.5, -0.25, -1.0],
                v2: [1.0, 0.25, -1.0],
            }],
            cubes: vec![CubeData {
                center: [-1.0, 0.0, -1.25],
                side_length: 0.5,
            }],
            planes: vec![PlaneData {
                point: [0.0, -0.5, -1.0],
                normal: [0.0, 1.0, 0.0],
            }],
            ..SceneData::empty()
        }
    }

    /// Rejects settings that make rendering impossible and warns about inputs
    /// whose intersection results are numerically undefined.
    pub fn validate(&self) -> Result<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(Error::InvalidConfig(
                "samplesPerPixel must be at least 1".to_owned(),
            ));
        }

        for (i, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius > 0.0) {
                warn!("sphere {} has non-positive radius {}", i, sphere.radius);
            }
        }
        for (i, data) in self.triangles.iter().enumerate() {
            let area = Triangle::from(data).area();
            if !(area > 0.0) {
                warn!("triangle {} is degenerate (area {})", i, area);
            }
        }
        for (i, cube) in self.cubes.iter().enumerate() {
            if !(cube.side_length > 0.0) {
                warn!("cube {} has non-positive side length {}", i, cube.side_length);
            }
        }
        for (i, plane) in self.planes.iter().enumerate() {
            if vec3(plane.normal).norm_squared() == 0.0 {
                warn!("plane {} has a zero-length normal", i);
            }
        }
        for (i, light) in self.lights.iter().enumerate() {
            if RGBColor::from(light.intensity).is_black() {
                warn!("light {} has zero intensity and contributes nothing", i);
            }
        }
        Ok(())
    }

    pub fn camera(&self) -> Camera {
        Camera::new(
            point3(self.viewport_origin),
            point3(self.viewport_lower_left_corner),
            vec3(self.viewport_horizontal_span),
            vec3(self.viewport_vertical_span),
        )
    }

    pub fn settings(&self) -> RenderSettings {
        RenderSettings {
            width: self.image_width as usize,
            height: self.image_height as usize,
            samples_per_pixel: self.samples_per_pixel,
            seed: self.seed.unwrap_or(0),
        }
    }

    pub fn scene(&self) -> Scene {
        Scene::new(
            self.spheres.iter().map(Into::into).collect(),
            self.triangles.iter().map(Into::into).collect(),
            self.cubes.iter().map(Into::into).collect(),
            self.planes.iter().map(Into::into).collect(),
            self.lights.iter().map(Into::into).collect(),
        )
    }

    /// Validates and splits the description into the pieces the renderer needs.
    pub fn build(&self) -> Result<(Scene, Camera, RenderSettings)> {
        self.validate()?;
        Ok((self.scene(), self.camera(), self.settings()))
    }
}

impl Default for SceneData {
    fn default() -> Self {
        SceneData::builtin()
    }
}

pub fn load_json<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let input = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&input).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}
