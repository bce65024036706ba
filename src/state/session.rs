/// The editing session: original image, processed image, source path
///
/// All mutation goes through `load`, `apply` and `reset`; `save` never
/// mutates. `processed`, when present, always has the same dimensions
/// as `original` because every filter preserves geometry.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::filters::FilterFn;
use crate::io::{self, ImageIoError};

/// Coarse session state the shell renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No image loaded.
    Empty,
    /// Original loaded, no processed result yet.
    Loaded,
    /// Original and processed both present.
    Processed,
}

#[derive(Debug, Default)]
pub struct EditSession {
    original: Option<RgbImage>,
    processed: Option<RgbImage>,
    source_path: Option<PathBuf>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a new original image from disk.
    ///
    /// On success the previous processed result is discarded and the
    /// source path recorded. On failure the whole session is left
    /// exactly as it was.
    pub fn load(&mut self, path: &Path) -> Result<(u32, u32), ImageIoError> {
        let img = io::load_image(path)?;
        let dimensions = img.dimensions();

        self.original = Some(img);
        self.processed = None;
        self.source_path = Some(path.to_path_buf());

        Ok(dimensions)
    }

    /// Apply `filter` to the current image and store the result.
    ///
    /// Filters chain: the current image is the processed result when
    /// one exists, the original otherwise. Returns false (and does
    /// nothing) when no image is loaded.
    pub fn apply(&mut self, filter: FilterFn) -> bool {
        let Some(src) = self.current() else {
            return false;
        };

        let result = filter(src);
        self.processed = Some(result);
        true
    }

    /// Discard the processed result; the original and source path stay.
    pub fn reset(&mut self) {
        self.processed = None;
    }

    /// Write the processed image to `path`.
    ///
    /// Returns Ok(false) without touching the filesystem when there is
    /// no processed result.
    pub fn save(&self, path: &Path) -> Result<bool, ImageIoError> {
        let Some(img) = self.processed.as_ref() else {
            return Ok(false);
        };

        io::save_image(img, path)?;
        Ok(true)
    }

    /// The image the next filter applies to: processed if present,
    /// original otherwise.
    pub fn current(&self) -> Option<&RgbImage> {
        self.processed.as_ref().or(self.original.as_ref())
    }

    pub fn original(&self) -> Option<&RgbImage> {
        self.original.as_ref()
    }

    pub fn processed(&self) -> Option<&RgbImage> {
        self.processed.as_ref()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn phase(&self) -> Phase {
        match (&self.original, &self.processed) {
            (None, _) => Phase::Empty,
            (Some(_), None) => Phase::Loaded,
            (Some(_), Some(_)) => Phase::Processed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn session_with_original(img: RgbImage) -> EditSession {
        EditSession {
            original: Some(img),
            processed: None,
            source_path: Some(PathBuf::from("/tmp/fixture.png")),
        }
    }

    fn add_ten(src: &RgbImage) -> RgbImage {
        let mut out = src.clone();
        for p in out.pixels_mut() {
            p.0 = p.0.map(|v| v.saturating_add(10));
        }
        out
    }

    fn double(src: &RgbImage) -> RgbImage {
        let mut out = src.clone();
        for p in out.pixels_mut() {
            p.0 = p.0.map(|v| v.saturating_mul(2));
        }
        out
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = EditSession::new();
        assert_eq!(session.phase(), Phase::Empty);
        assert!(session.current().is_none());
        assert!(session.source_path().is_none());
    }

    #[test]
    fn test_apply_without_image_is_noop() {
        let mut session = EditSession::new();
        assert!(!session.apply(add_ten));
        assert_eq!(session.phase(), Phase::Empty);
    }

    #[test]
    fn test_phase_transitions() {
        let mut session = session_with_original(RgbImage::from_pixel(4, 4, Rgb([50, 50, 50])));
        assert_eq!(session.phase(), Phase::Loaded);

        assert!(session.apply(add_ten));
        assert_eq!(session.phase(), Phase::Processed);

        session.reset();
        assert_eq!(session.phase(), Phase::Loaded);
        assert!(session.original().is_some());
        assert!(session.source_path().is_some());
    }

    #[test]
    fn test_filters_chain_on_processed_result() {
        let original = RgbImage::from_pixel(4, 4, Rgb([20, 20, 20]));
        let mut session = session_with_original(original.clone());

        session.apply(add_ten);
        session.apply(double);

        // double(add_ten(original)), not double(original)
        let expected = double(&add_ten(&original));
        assert_eq!(session.processed().unwrap(), &expected);
        assert_eq!(session.processed().unwrap().get_pixel(0, 0)[0], 60);
        // The original is untouched.
        assert_eq!(session.original().unwrap(), &original);
    }

    #[test]
    fn test_failed_load_leaves_session_unchanged() {
        let original = RgbImage::from_pixel(4, 4, Rgb([9, 9, 9]));
        let mut session = session_with_original(original.clone());
        session.apply(add_ten);
        let processed_before = session.processed().unwrap().clone();

        let result = session.load(Path::new("/nonexistent/input.png"));

        assert!(result.is_err());
        assert_eq!(session.phase(), Phase::Processed);
        assert_eq!(session.original().unwrap(), &original);
        assert_eq!(session.processed().unwrap(), &processed_before);
        assert_eq!(session.source_path().unwrap(), Path::new("/tmp/fixture.png"));
    }

    #[test]
    fn test_fresh_load_discards_processed_result() {
        let mut session = session_with_original(RgbImage::from_pixel(4, 4, Rgb([1, 2, 3])));
        session.apply(add_ten);
        assert_eq!(session.phase(), Phase::Processed);

        let replacement = RgbImage::from_pixel(6, 2, Rgb([200, 100, 50]));
        let path = std::env::temp_dir().join("filter-studio-session-reload.png");
        replacement.save(&path).unwrap();

        let dimensions = session.load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(dimensions, (6, 2));
        assert_eq!(session.phase(), Phase::Loaded);
        assert_eq!(session.original().unwrap(), &replacement);
        assert!(session.processed().is_none());
        assert_eq!(session.source_path().unwrap(), path.as_path());
    }

    #[test]
    fn test_save_without_processed_writes_nothing() {
        let mut session = session_with_original(RgbImage::from_pixel(4, 4, Rgb([5, 5, 5])));
        session.apply(add_ten);
        session.reset();

        let path = std::env::temp_dir().join("filter-studio-session-no-write.png");
        let written = session.save(&path).unwrap();

        assert!(!written);
        assert!(!path.exists());
    }

    #[test]
    fn test_save_writes_processed_result() {
        let mut session = session_with_original(RgbImage::from_pixel(3, 3, Rgb([40, 40, 40])));
        session.apply(add_ten);

        let path = std::env::temp_dir().join("filter-studio-session-save.png");
        let written = session.save(&path).unwrap();

        assert!(written);
        let on_disk = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(&on_disk, session.processed().unwrap());
    }

    #[test]
    fn test_current_prefers_processed() {
        let original = RgbImage::from_pixel(4, 4, Rgb([30, 30, 30]));
        let mut session = session_with_original(original.clone());
        assert_eq!(session.current().unwrap(), &original);

        session.apply(add_ten);
        assert_eq!(session.current().unwrap().get_pixel(0, 0)[0], 40);
    }
}
