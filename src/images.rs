// Decoded images handed to the renderer, and the loader that produces them

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;
use tracing::{debug, warn};

/// An already-decoded RGBA image with known natural dimensions.
///
/// Cloning is cheap; the pixels are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    pixels: Arc<RgbaImage>,
}

impl Picture {
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Decode an in-memory PNG or JPEG
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let dynamic_image = image::load_from_memory(bytes)?;
        Ok(Self::new(dynamic_image.to_rgba8()))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Height over width, or None for a degenerate image
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width() == 0 || self.height() == 0 {
            None
        } else {
            Some(self.height() as f32 / self.width() as f32)
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Load a picture from disk. Missing or undecodable files are not errors for
/// the card: they are logged and come back as no image.
pub fn load_picture(path: &Path) -> Option<Picture> {
    let dynamic_image = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            warn!("Failed to load image {}: {}", path.display(), e);
            return None;
        }
    };

    let picture = Picture::new(dynamic_image.to_rgba8());
    if picture.aspect_ratio().is_none() {
        warn!("Ignoring empty image {}", path.display());
        return None;
    }
    debug!(
        "Loaded {} ({}x{})",
        path.display(),
        picture.width(),
        picture.height()
    );
    Some(picture)
}

/// Where the background artwork for a theme lives inside an assets directory
pub fn preset_background_path(assets_dir: &Path, theme_key: &str) -> PathBuf {
    assets_dir
        .join("campeonatos")
        .join(format!("{}.png", theme_key))
}

/// Where the footer banner lives inside an assets directory
pub fn footer_banner_path(assets_dir: &Path) -> PathBuf {
    assets_dir.join("footer-banner.png")
}
