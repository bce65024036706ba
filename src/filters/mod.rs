//! The filter catalog
//!
//! Every filter is a pure `fn(&RgbImage) -> RgbImage` that preserves
//! width, height and channel count. `CATALOG` is the single source of
//! truth for the button row: one `(label, filter)` entry per button,
//! in display order.

pub mod bilateral;
pub mod blur;
pub mod contrast;
pub mod equalize;

pub use bilateral::bilateral_filter;
pub use blur::{box_blur, median_blur};
pub use contrast::linear_contrast;
pub use equalize::{equalize_rgb, equalize_value};

use image::RgbImage;

pub type FilterFn = fn(&RgbImage) -> RgbImage;

pub const CATALOG: [(&str, FilterFn); 6] = [
    ("Blur", box_blur),
    ("Median Blur", median_blur),
    ("Bilateral Filter", bilateral_filter),
    ("Linear Contrast", linear_contrast),
    ("Histogram Equalization", equalize_rgb),
    ("HSV Histogram Equalization", equalize_value),
];

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_every_catalog_filter_preserves_geometry() {
        let img = RgbImage::from_fn(24, 18, |x, y| {
            Rgb([(x * 10) as u8, (y * 12) as u8, ((x + y) * 5) as u8])
        });

        for (label, filter) in CATALOG {
            let out = filter(&img);
            assert_eq!(out.dimensions(), img.dimensions(), "{label}");
            assert_eq!(out.as_raw().len(), img.as_raw().len(), "{label}");
        }
    }

    #[test]
    fn test_catalog_labels_are_unique() {
        for (i, (a, _)) in CATALOG.iter().enumerate() {
            for (b, _) in &CATALOG[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
