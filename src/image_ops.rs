//! Image decoding and preview sizing.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::RgbaImage;

use crate::error::AppError;

/// Extensions offered by the file dialog.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Box the main-window preview is fitted into.
pub const PREVIEW_BOX: (u32, u32) = (300, 200);

/// A successfully decoded image kept at its native resolution.
#[derive(Clone)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub pixels: RgbaImage,
}

impl std::fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedImage")
            .field("path", &self.path)
            .field("size", &self.size())
            .finish()
    }
}

impl LoadedImage {
    /// Decode the file at `path`.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let decoded = image::open(path).map_err(|source| AppError::DecodeFailure {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            pixels: decoded.to_rgba8(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Downscaled (or upscaled) copy fitted into [`PREVIEW_BOX`].
    pub fn preview(&self) -> RgbaImage {
        let (w, h) = fit_within(self.size(), PREVIEW_BOX);
        image::imageops::resize(&self.pixels, w, h, FilterType::Triangle)
    }
}

/// Largest size with the aspect ratio of `size` that fits in `bounds`.
pub fn fit_within(size: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (w, h) = size;
    let (bw, bh) = bounds;
    if w == 0 || h == 0 {
        return (0, 0);
    }
    let scale = (bw as f64 / w as f64).min(bh as f64 / h as f64);
    let fitted_w = ((w as f64 * scale).round() as u32).clamp(1, bw);
    let fitted_h = ((h as f64 * scale).round() as u32).clamp(1, bh);
    (fitted_w, fitted_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_valid_image_at_native_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        RgbaImage::new(64, 48).save(&path).unwrap();

        let image = LoadedImage::open(&path).unwrap();
        assert_eq!(image.size(), (64, 48));
        assert_eq!(image.path, path);
    }

    #[test]
    fn garbage_file_is_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = LoadedImage::open(&path).unwrap_err();
        assert!(matches!(err, AppError::DecodeFailure { .. }));
    }

    #[test]
    fn missing_file_is_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = LoadedImage::open(&dir.path().join("missing.jpg")).unwrap_err();
        assert!(matches!(err, AppError::DecodeFailure { .. }));
    }

    #[test]
    fn unlisted_extension_is_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.dat");
        std::fs::write(&path, b"raw bytes").unwrap();

        let err = LoadedImage::open(&path).unwrap_err();
        assert!(matches!(err, AppError::DecodeFailure { .. }));
    }

    #[test]
    fn fit_within_preserves_aspect_ratio() {
        assert_eq!(fit_within((1920, 1080), PREVIEW_BOX), (300, 169));
        assert_eq!(fit_within((1000, 2000), PREVIEW_BOX), (100, 200));
        assert_eq!(fit_within((30, 20), PREVIEW_BOX), (300, 200));
        assert_eq!(fit_within((0, 10), PREVIEW_BOX), (0, 0));
    }

    #[test]
    fn preview_fits_box() {
        let image = LoadedImage {
            path: PathBuf::from("wide.png"),
            pixels: RgbaImage::new(600, 100),
        };
        assert_eq!(image.preview().dimensions(), (300, 50));
    }
}
