use std::path::Path;

use tracing::debug;

use crate::error::{ModelError, Result};

/// Opaque GPU texture handle. The core treats this as an integer
/// identifier with no further structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Decoded texture pixels, always RGBA8.
#[derive(Debug, Clone)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Image-decoding collaborator: path in, pixel dimensions and raw RGBA
/// bytes out. The core never decodes image formats itself.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<TextureImage>;
}

/// GPU-texture collaborator: accepts decoded pixels and returns an opaque
/// handle usable by the rendering backend.
pub trait TextureRegistry {
    fn register(&mut self, image: &TextureImage) -> TextureId;
}

/// Filesystem image loader backed by the `image` crate (JPEG/PNG/WebP).
#[derive(Debug, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<TextureImage> {
        let data = std::fs::read(path).map_err(|e| {
            ModelError::Texture(format!("Failed to read {}: {e}", path.display()))
        })?;

        let img = image::load_from_memory(&data).map_err(|e| {
            ModelError::Texture(format!("Failed to decode {}: {e}", path.display()))
        })?;

        debug!(
            path = %path.display(),
            width = img.width(),
            height = img.height(),
            "Decoded texture"
        );

        Ok(TextureImage {
            width: img.width(),
            height: img.height(),
            rgba: img.to_rgba8().into_raw(),
        })
    }
}

/// Registry for headless use: hands out sequential ids starting at 1 and
/// remembers how many textures were registered.
#[derive(Debug, Default)]
pub struct CountingRegistry {
    registered: u32,
}

impl CountingRegistry {
    pub fn count(&self) -> u32 {
        self.registered
    }
}

impl TextureRegistry for CountingRegistry {
    fn register(&mut self, _image: &TextureImage) -> TextureId {
        self.registered += 1;
        TextureId(self.registered)
    }
}
