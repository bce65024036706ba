//! Box and median blur
//!
//! Both operate on a 5x5 neighborhood per channel. Out-of-bounds
//! neighbors are skipped and the window renormalized, so uniform
//! regions pass through unchanged at the borders too.

use image::RgbImage;
use rayon::prelude::*;

const WINDOW_RADIUS: i32 = 2;
const CHANNELS: usize = 3;

/// Unweighted 5x5 averaging per channel.
pub fn box_blur(src: &RgbImage) -> RgbImage {
    let (width, height) = src.dimensions();
    if width == 0 || height == 0 {
        return src.clone();
    }

    let input = src.as_raw();
    let stride = width as usize * CHANNELS;
    let mut output = vec![0u8; input.len()];

    output.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
        let y = y as i32;
        for x in 0..width as usize {
            let mut sum = [0u32; CHANNELS];
            let mut count = 0u32;

            for ky in -WINDOW_RADIUS..=WINDOW_RADIUS {
                for kx in -WINDOW_RADIUS..=WINDOW_RADIUS {
                    let nx = x as i32 + kx;
                    let ny = y + ky;

                    if nx < 0 || nx >= width as i32 || ny < 0 || ny >= height as i32 {
                        continue;
                    }

                    let nidx = (ny as usize * width as usize + nx as usize) * CHANNELS;
                    sum[0] += input[nidx] as u32;
                    sum[1] += input[nidx + 1] as u32;
                    sum[2] += input[nidx + 2] as u32;
                    count += 1;
                }
            }

            let offset = x * CHANNELS;
            for c in 0..CHANNELS {
                row[offset + c] = (sum[c] as f32 / count as f32).round() as u8;
            }
        }
    });

    RgbImage::from_raw(width, height, output).unwrap()
}

/// Per-channel 5x5 median (edge-preserving smoothing).
pub fn median_blur(src: &RgbImage) -> RgbImage {
    let (width, height) = src.dimensions();
    if width == 0 || height == 0 {
        return src.clone();
    }

    let input = src.as_raw();
    let stride = width as usize * CHANNELS;
    let mut output = vec![0u8; input.len()];

    let window_len = (2 * WINDOW_RADIUS + 1) as usize;
    let window_cap = window_len * window_len;

    output.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
        let y = y as i32;
        let mut window = vec![0u8; window_cap];

        for x in 0..width as usize {
            let offset = x * CHANNELS;

            for c in 0..CHANNELS {
                let mut n = 0usize;

                for ky in -WINDOW_RADIUS..=WINDOW_RADIUS {
                    for kx in -WINDOW_RADIUS..=WINDOW_RADIUS {
                        let nx = x as i32 + kx;
                        let ny = y + ky;

                        if nx < 0 || nx >= width as i32 || ny < 0 || ny >= height as i32 {
                            continue;
                        }

                        let nidx = (ny as usize * width as usize + nx as usize) * CHANNELS;
                        window[n] = input[nidx + c];
                        n += 1;
                    }
                }

                window[..n].sort_unstable();
                row[offset + c] = window[n / 2];
            }
        }
    });

    RgbImage::from_raw(width, height, output).unwrap()
}
