/// Canvas rendering for image buffers
///
/// Each preview slot is a fixed-size canvas. Buffers are stretched to
/// exactly fill it (no aspect preservation) and expanded from RGB to
/// the RGBA order the renderer wants.

use iced::widget::image::Handle;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

/// Width of one preview canvas, in pixels.
pub const CANVAS_WIDTH: u32 = 380;
/// Height of one preview canvas, in pixels.
pub const CANVAS_HEIGHT: u32 = 300;

/// Build the display handle for one canvas slot.
pub fn canvas_handle(img: &RgbImage) -> Handle {
    let stretched = imageops::resize(img, CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Lanczos3);
    let rgba = DynamicImage::ImageRgb8(stretched).to_rgba8();

    Handle::from_rgba(CANVAS_WIDTH, CANVAS_HEIGHT, rgba.into_raw())
}
