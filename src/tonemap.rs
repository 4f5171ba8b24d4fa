use crate::film::Film;
use crate::math::RGBColor;

/// Maps a linear channel value to 0..=255 as `floor(255.99 * c)`, clamping `c`
/// to `[0, 1]` first so over-bright sums saturate instead of wrapping.
/// NaN maps to 0.
pub fn quantize(channel: f32) -> u8 {
    (255.99 * channel.clamp(0.0, 1.0)) as u8
}

pub fn to_rgb8(color: RGBColor) -> [u8; 3] {
    [quantize(color.r()), quantize(color.g()), quantize(color.b())]
}

/// Interleaved 8-bit RGB bytes of the whole film, top row first.
pub fn film_to_rgb8(film: &Film<RGBColor>) -> Vec<u8> {
    film.buffer.iter().copied().flat_map(to_rgb8).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_quantize_range() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.5), 127);
        assert_eq!(quantize(0.75), 191);
    }

    #[test]
    fn test_quantize_clamps() {
        assert_eq!(quantize(2.0), 255);
        assert_eq!(quantize(1e9), 255);
        assert_eq!(quantize(-0.5), 0);
        assert_eq!(quantize(f32::INFINITY), 255);
        assert_eq!(quantize(f32::NAN), 0);
    }

    #[test]
    fn test_film_to_rgb8() {
        let mut film = Film::new(2, 1, RGBColor::ZERO);
        film.write_at(1, 0, RGBColor::new(1.0, 2.0, 0.5));
        assert_eq!(film_to_rgb8(&film), vec![0, 0, 0, 255, 255, 127]);
    }
}
