//! Error kinds surfaced to the user as message dialogs.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The selected file could not be decoded as an image.
    #[error("unable to load image {}: {source}", .path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Secondary-screen presentation was requested with fewer than two screens.
    #[error("no secondary screen detected")]
    NoSecondaryScreen,
    #[error("no image loaded")]
    NoImageLoaded,
    /// The renderer cannot hold the image in a single texture.
    #[error("image {width}x{height} exceeds the maximum texture side of {max_side}")]
    TextureTooLarge {
        width: u32,
        height: u32,
        max_side: usize,
    },
}
