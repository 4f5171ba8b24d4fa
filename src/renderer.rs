use std::sync::Mutex;
use std::time::Instant;

use log::info;
use pbr::ProgressBar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::film::Film;
use crate::math::RGBColor;
use crate::scene::Scene;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub samples_per_pixel: u32,
    /// Seeds the sub-pixel jitter. The same seed always yields the same image.
    pub seed: u64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            width: 800,
            height: 800,
            samples_per_pixel: 4,
            seed: 0,
        }
    }
}

/// Mean color of one pixel. `row` counts from the top of the image while the
/// viewport's `v` grows upwards. A single sample goes through the pixel's lower
/// left corner; more samples are jittered uniformly across the pixel.
///
/// `x` and `row` must lie inside the image described by `settings`.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    settings: &RenderSettings,
    x: usize,
    row: usize,
) -> RGBColor {
    debug_assert!(
        x < settings.width && row < settings.height,
        "pixel ({}, {}) outside {}x{} image",
        x,
        row,
        settings.width,
        settings.height
    );
    let (w, h) = (settings.width as f32, settings.height as f32);
    let j = (settings.height - 1 - row) as f32;
    let i = x as f32;

    if settings.samples_per_pixel <= 1 {
        return scene.trace(&camera.get_ray(i / w, j / h));
    }

    let pixel_index = (row * settings.width + x) as u64;
    let mut rng = StdRng::seed_from_u64(settings.seed ^ pixel_index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let mut color = RGBColor::ZERO;
    for _ in 0..settings.samples_per_pixel {
        let u = (i + rng.gen::<f32>()) / w;
        let v = (j + rng.gen::<f32>()) / h;
        color += scene.trace(&camera.get_ray(u, v));
    }
    color / settings.samples_per_pixel as f32
}

/// Renders every pixel of the frame. Rows are distributed over the rayon pool;
/// each worker writes only into the row slice it was handed.
pub fn render(scene: &Scene, camera: &Camera, settings: &RenderSettings) -> Film<RGBColor> {
    let mut film = Film::new(settings.width, settings.height, RGBColor::ZERO);
    if settings.width == 0 || settings.height == 0 {
        return film;
    }

    info!(
        "rendering {}x{} at {} samples per pixel on {} threads",
        settings.width,
        settings.height,
        settings.samples_per_pixel,
        rayon::current_num_threads()
    );
    let start = Instant::now();
    let pb = Mutex::new(ProgressBar::new(settings.height as u64));

    film.buffer
        .par_chunks_mut(settings.width)
        .enumerate()
        .for_each(|(row, pixels)| {
            for (x, pixel) in pixels.iter_mut().enumerate() {
                *pixel = render_pixel(scene, camera, settings, x, row);
            }
            if let Ok(mut pb) = pb.lock() {
                pb.inc();
            }
        });

    if let Ok(mut pb) = pb.lock() {
        pb.finish();
    }
    info!("rendered in {:.2?}", start.elapsed());
    film
}
