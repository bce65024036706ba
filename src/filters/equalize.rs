//! Histogram equalization
//!
//! CDF-based intensity redistribution. `equalize_rgb` equalizes each of
//! the three channels independently; `equalize_value` equalizes only
//! the HSV value channel so hue and saturation are untouched.

use image::RgbImage;
use rayon::prelude::*;

use crate::color::{hsv_to_rgb, rgb_to_hsv};

/// Build the equalization lookup table for one 256-bin histogram.
///
/// Uses the standard `(cdf - cdf_min) / (total - cdf_min)` mapping. A
/// constant channel (total == cdf_min) maps through identity.
fn equalize_lut(hist: &[u32; 256], total: u32) -> [u8; 256] {
    let mut cdf = [0u32; 256];
    cdf[0] = hist[0];
    for i in 1..256 {
        cdf[i] = cdf[i - 1] + hist[i];
    }

    let cdf_min = cdf.iter().find(|&&x| x > 0).copied().unwrap_or(0);

    let mut lut = [0u8; 256];
    if total > cdf_min {
        let denom = (total - cdf_min) as f32;
        for i in 0..256 {
            lut[i] = ((cdf[i].saturating_sub(cdf_min)) as f32 / denom * 255.0).round() as u8;
        }
    } else {
        for i in 0..256 {
            lut[i] = i as u8;
        }
    }
    lut
}

/// Equalize each RGB channel independently and recombine.
pub fn equalize_rgb(src: &RgbImage) -> RgbImage {
    let (width, height) = src.dimensions();
    if width == 0 || height == 0 {
        return src.clone();
    }

    let mut hist = [[0u32; 256]; 3];
    for px in src.as_raw().chunks_exact(3) {
        hist[0][px[0] as usize] += 1;
        hist[1][px[1] as usize] += 1;
        hist[2][px[2] as usize] += 1;
    }

    let total = width * height;
    let luts = [
        equalize_lut(&hist[0], total),
        equalize_lut(&hist[1], total),
        equalize_lut(&hist[2], total),
    ];

    let mut data = src.as_raw().clone();
    data.par_chunks_mut(3).for_each(|px| {
        px[0] = luts[0][px[0] as usize];
        px[1] = luts[1][px[1] as usize];
        px[2] = luts[2][px[2] as usize];
    });

    RgbImage::from_raw(width, height, data).unwrap()
}

/// Equalize the HSV value channel only, then convert back to RGB.
pub fn equalize_value(src: &RgbImage) -> RgbImage {
    let (width, height) = src.dimensions();
    if width == 0 || height == 0 {
        return src.clone();
    }

    // The value channel of a u8 RGB pixel is max(r, g, b).
    let mut hist = [0u32; 256];
    for px in src.as_raw().chunks_exact(3) {
        let v = px[0].max(px[1]).max(px[2]);
        hist[v as usize] += 1;
    }

    let lut = equalize_lut(&hist, width * height);

    let mut data = src.as_raw().clone();
    data.par_chunks_mut(3).for_each(|px| {
        let (h, s, v) = rgb_to_hsv(px[0], px[1], px[2]);
        let v_eq = lut[(v * 255.0).round() as usize] as f32 / 255.0;
        let (r, g, b) = hsv_to_rgb(h, s, v_eq);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    });

    RgbImage::from_raw(width, height, data).unwrap()
}
