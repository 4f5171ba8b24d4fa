//! Diffuse ray caster over analytic primitives.
//!
//! A [`scene::Scene`] holds spheres, triangles, axis-aligned cubes and infinite
//! planes plus point lights. Each camera ray is tested against every primitive,
//! the nearest hit is shaded with Lambertian lighting, and rays that escape get a
//! sky gradient. Scenes are described in JSON (see [`parsing::SceneData`]).

pub mod camera;
pub mod error;
pub mod film;
pub mod geometry;
pub mod math;
pub mod output;
pub mod parsing;
pub mod renderer;
pub mod scene;
pub mod shading;
pub mod tonemap;

pub use error::{Error, Result};
