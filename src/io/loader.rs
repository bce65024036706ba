/// Image loading and saving
///
/// Thin wrappers over the `image` crate. Decoding normalizes every
/// supported input format to an 8-bit RGB buffer; encoding picks the
/// output format from the target path's extension.

use std::path::Path;

use image::RgbImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to save image: {0}")]
    Encode(#[source] image::ImageError),
}

/// Decode the file at `path` into an RGB buffer.
///
/// Missing files get their own variant; every other failure is a
/// decode error.
pub fn load_image(path: &Path) -> Result<RgbImage, ImageIoError> {
    if !path.exists() {
        return Err(ImageIoError::NotFound(path.display().to_string()));
    }

    let img = image::open(path).map_err(ImageIoError::Decode)?;
    Ok(img.to_rgb8())
}

/// Encode `img` to `path` in the format implied by its extension.
pub fn save_image(img: &RgbImage, path: &Path) -> Result<(), ImageIoError> {
    img.save(path).map_err(ImageIoError::Encode)
}
