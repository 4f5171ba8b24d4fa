//! Encoders for a finished film.
//!
//! - `.ppm`: plain-text `P3`, one `r g b` line per pixel, 8-bit clamped.
//! - `.png`: 8-bit RGB, clamped the same way.
//! - `.exr`: 32-bit float RGB, written unclamped so over-bright light sums survive.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::ColorType;
use log::info;

use crate::error::{Error, Result};
use crate::film::Film;
use crate::math::RGBColor;
use crate::tonemap::{film_to_rgb8, to_rgb8};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Ppm,
    Png,
    Exr,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<OutputFormat> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("ppm") => Ok(OutputFormat::Ppm),
            Some("png") => Ok(OutputFormat::Png),
            Some("exr") => Ok(OutputFormat::Exr),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

pub fn write_ppm<W: Write>(film: &Film<RGBColor>, mut out: W) -> std::io::Result<()> {
    write!(out, "P3\n{} {}\n255\n", film.width, film.height)?;
    for pixel in film.buffer.iter() {
        let [r, g, b] = to_rgb8(*pixel);
        writeln!(out, "{} {} {}", r, g, b)?;
    }
    out.flush()
}

fn save_png(film: &Film<RGBColor>, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        &film_to_rgb8(film),
        film.width as u32,
        film.height as u32,
        ColorType::Rgb8,
    )?;
    Ok(())
}

fn save_exr(film: &Film<RGBColor>, path: &Path) -> Result<()> {
    exr::prelude::write_rgb_file(path, film.width, film.height, |x, y| {
        let pixel = film.at(x, y);
        (pixel.r(), pixel.g(), pixel.b())
    })?;
    Ok(())
}

/// Writes the film to `path`, picking the encoding from the file extension and
/// creating missing parent directories.
pub fn save_film(film: &Film<RGBColor>, path: &Path) -> Result<()> {
    let format = OutputFormat::from_path(path)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    match format {
        OutputFormat::Ppm => {
            let file = File::create(path).map_err(|e| Error::io(path, e))?;
            write_ppm(film, BufWriter::new(file)).map_err(|e| Error::io(path, e))?;
        }
        OutputFormat::Png => save_png(film, path)?,
        OutputFormat::Exr => save_exr(film, path)?,
    }
    info!("wrote {}x{} image to {}", film.width, film.height, path.display());
    Ok(())
}
