//! Linear contrast stretch
//!
//! Per-pixel, per-channel `v * ALPHA + BETA`, saturated to [0, 255].
//! Repeated application compounds; it is not idempotent away from the
//! clamp boundaries.

use image::RgbImage;
use rayon::prelude::*;

const ALPHA: f32 = 1.75;
const BETA: f32 = 0.0;

pub fn linear_contrast(src: &RgbImage) -> RgbImage {
    let (width, height) = src.dimensions();
    let mut data = src.as_raw().clone();

    data.par_iter_mut().for_each(|v| {
        *v = (*v as f32 * ALPHA + BETA).clamp(0.0, 255.0).round() as u8;
    });

    RgbImage::from_raw(width, height, data).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_linear_contrast_scales_and_clamps() {
        let mut img = RgbImage::new(3, 1);
        img.put_pixel(0, 0, Rgb([0, 100, 200]));
        let out = linear_contrast(&img);
        assert_eq!(*out.get_pixel(0, 0), Rgb([0, 175, 255]));
        assert_eq!(out.dimensions(), (3, 1));
    }

    #[test]
    fn test_linear_contrast_compounds_on_repeat() {
        let img = RgbImage::from_pixel(4, 4, Rgb([80, 80, 80]));
        let once = linear_contrast(&img);
        let twice = linear_contrast(&once);
        assert_eq!(once.get_pixel(0, 0)[0], 140);
        assert_eq!(twice.get_pixel(0, 0)[0], 245);
        assert_ne!(once, twice);
    }

    #[test]
    fn test_linear_contrast_idempotent_at_clamp_boundaries() {
        let img = RgbImage::from_pixel(4, 4, Rgb([0, 255, 0]));
        let once = linear_contrast(&img);
        let twice = linear_contrast(&once);
        assert_eq!(once, twice);
    }
}
