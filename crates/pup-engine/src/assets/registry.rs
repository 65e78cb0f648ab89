use std::collections::HashMap;

use crate::assets::manifest::AssetManifest;
use crate::components::sprite::{ImageHandle, ImageId};
use crate::error::EngineError;

/// Where character sheets get their images from.
///
/// Loading happens once, before the game loop starts. `flip` and `scale`
/// derive new handles from a loaded one without reloading.
pub trait ImageSource {
    fn load(&self, path: &str) -> Result<ImageHandle, EngineError>;

    fn flip(&self, image: ImageHandle, horizontal: bool) -> ImageHandle {
        image.flip(horizontal)
    }

    fn scale(&self, image: ImageHandle, width: f64, height: f64) -> ImageHandle {
        image.scale(width, height)
    }
}

/// Registry of named images, built from an AssetManifest.
/// The host owns the actual bitmaps; the registry only knows ids and sizes.
#[derive(Debug, Clone, Default)]
pub struct ImageRegistry {
    images: HashMap<String, ImageHandle>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Result<Self, EngineError> {
        let mut images = HashMap::with_capacity(manifest.images.len());
        for (index, desc) in manifest.images.iter().enumerate() {
            if !(desc.width > 0.0 && desc.height > 0.0) {
                return Err(EngineError::InvalidImageSize {
                    path: desc.path.clone(),
                    width: desc.width,
                    height: desc.height,
                });
            }
            let handle = ImageHandle::new(ImageId(index as u32), desc.width, desc.height);
            images.insert(desc.path.clone(), handle);
        }
        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageSource for ImageRegistry {
    fn load(&self, path: &str) -> Result<ImageHandle, EngineError> {
        self.images
            .get(path)
            .copied()
            .ok_or_else(|| EngineError::UnknownImage(path.to_string()))
    }
}
