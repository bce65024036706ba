//! Bilateral filter
//!
//! Edge-preserving smoothing that weights neighbors by both spatial
//! distance and color similarity.

use image::RgbImage;
use rayon::prelude::*;

/// Neighborhood diameter.
const DIAMETER: i32 = 9;
/// Range sigma, in 0-255 intensity units.
const SIGMA_COLOR: f32 = 75.0;
/// Spatial sigma, in pixels.
const SIGMA_SPACE: f32 = 75.0;

const CHANNELS: usize = 3;

pub fn bilateral_filter(src: &RgbImage) -> RgbImage {
    let (width, height) = src.dimensions();
    if width == 0 || height == 0 {
        return src.clone();
    }

    let radius = DIAMETER / 2;
    let sigma_space_sq = 2.0 * SIGMA_SPACE * SIGMA_SPACE;
    let sigma_color_sq = 2.0 * SIGMA_COLOR * SIGMA_COLOR;

    let input = src.as_raw();
    let stride = width as usize * CHANNELS;
    let mut output = vec![0u8; input.len()];

    output.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
        let y = y as i32;
        for x in 0..width as usize {
            let idx = (y as usize * width as usize + x) * CHANNELS;

            let center_r = input[idx] as f32;
            let center_g = input[idx + 1] as f32;
            let center_b = input[idx + 2] as f32;

            let mut sum_r = 0.0f32;
            let mut sum_g = 0.0f32;
            let mut sum_b = 0.0f32;
            let mut weight_sum = 0.0f32;

            for ky in -radius..=radius {
                for kx in -radius..=radius {
                    let nx = x as i32 + kx;
                    let ny = y + ky;

                    if nx < 0 || nx >= width as i32 || ny < 0 || ny >= height as i32 {
                        continue;
                    }

                    let nidx = (ny as usize * width as usize + nx as usize) * CHANNELS;

                    let nr = input[nidx] as f32;
                    let ng = input[nidx + 1] as f32;
                    let nb = input[nidx + 2] as f32;

                    let spatial_dist = (kx * kx + ky * ky) as f32;
                    let spatial_weight = (-spatial_dist / sigma_space_sq).exp();

                    let range_dist = ((center_r - nr).powi(2)
                        + (center_g - ng).powi(2)
                        + (center_b - nb).powi(2))
                    .sqrt();
                    let range_weight = (-range_dist * range_dist / sigma_color_sq).exp();

                    let weight = spatial_weight * range_weight;
                    sum_r += nr * weight;
                    sum_g += ng * weight;
                    sum_b += nb * weight;
                    weight_sum += weight;
                }
            }

            let offset = x * CHANNELS;
            if weight_sum > 0.0 {
                row[offset] = (sum_r / weight_sum).round() as u8;
                row[offset + 1] = (sum_g / weight_sum).round() as u8;
                row[offset + 2] = (sum_b / weight_sum).round() as u8;
            } else {
                row[offset] = input[idx];
                row[offset + 1] = input[idx + 1];
                row[offset + 2] = input[idx + 2];
            }
        }
    });

    RgbImage::from_raw(width, height, output).unwrap()
}
