/// Image file I/O
///
/// Decoding a file path into an image buffer and encoding a buffer
/// back to disk, with one error type covering both directions.

pub mod loader;

pub use loader::{load_image, save_image, ImageIoError};
