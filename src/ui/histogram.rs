/// RGB histogram panel
/// Visual feedback for the equalization filters: 256 bins per channel
/// of the processed image, drawn as translucent overlaid bars.
use iced::widget::canvas::{self, Stroke};
use iced::{Color, Point, Rectangle};
use image::RgbImage;

use crate::Message;

/// Histogram data for one image
#[derive(Debug, Clone)]
pub struct Histogram {
    /// RGB histogram data: [R[256], G[256], B[256]]
    pub data: [[u32; 256]; 3],
}

impl Histogram {
    /// Count per-channel bins over the whole buffer.
    pub fn from_image(img: &RgbImage) -> Self {
        let mut data = [[0u32; 256]; 3];
        for px in img.as_raw().chunks_exact(3) {
            data[0][px[0] as usize] += 1;
            data[1][px[1] as usize] += 1;
            data[2][px[2] as usize] += 1;
        }
        Self { data }
    }
}

impl canvas::Program<Message> for Histogram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Tallest bin across all channels sets the scale
        let max_value = self
            .data
            .iter()
            .flat_map(|channel| channel.iter())
            .copied()
            .max()
            .unwrap_or(1) as f32;

        if max_value < 1.0 {
            return vec![frame.into_geometry()];
        }

        let width = bounds.width;
        let height = bounds.height;
        let bar_width = width / 256.0;

        let colors = [
            Color::from_rgba(1.0, 0.0, 0.0, 0.5), // Red
            Color::from_rgba(0.0, 1.0, 0.0, 0.5), // Green
            Color::from_rgba(0.0, 0.0, 1.0, 0.5), // Blue
        ];

        for (channel_idx, channel_data) in self.data.iter().enumerate() {
            let mut path_builder = canvas::path::Builder::new();

            for (i, &count) in channel_data.iter().enumerate() {
                if count > 0 {
                    let normalized = count as f32 / max_value;
                    let bar_height = normalized * height;
                    let x = i as f32 * bar_width;
                    let y = height - bar_height;

                    path_builder.move_to(Point::new(x, height));
                    path_builder.line_to(Point::new(x, y));
                }
            }

            let path = path_builder.build();
            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(colors[channel_idx])
                    .with_width(bar_width.max(1.0)),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_bins_sum_to_pixel_count() {
        let img = RgbImage::from_fn(10, 8, |x, y| Rgb([x as u8, y as u8, 200]));
        let hist = Histogram::from_image(&img);

        for channel in &hist.data {
            assert_eq!(channel.iter().sum::<u32>(), 80);
        }
        assert_eq!(hist.data[2][200], 80);
    }

    #[test]
    fn test_constant_image_fills_single_bin() {
        let img = RgbImage::from_pixel(5, 5, Rgb([7, 7, 7]));
        let hist = Histogram::from_image(&img);

        for channel in &hist.data {
            assert_eq!(channel[7], 25);
            assert_eq!(channel.iter().filter(|&&c| c > 0).count(), 1);
        }
    }
}
