use glam::DVec2;

/// Identifies a loaded image. Index into the AssetManifest's image list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageId(pub u32);

/// A preloaded, read-only image reference.
///
/// Flipping and scaling produce new handles that describe how the host
/// should draw the same bitmap; the bitmap itself is never touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageHandle {
    pub id: ImageId,
    /// Drawn width in pixels.
    pub width: f64,
    /// Drawn height in pixels.
    pub height: f64,
    /// Mirrored horizontally when drawn.
    pub flipped: bool,
}

impl ImageHandle {
    pub fn new(id: ImageId, width: f64, height: f64) -> Self {
        Self {
            id,
            width,
            height,
            flipped: false,
        }
    }

    /// Mirror horizontally. Flipping twice restores the original orientation.
    pub fn flip(self, horizontal: bool) -> Self {
        Self {
            flipped: self.flipped ^ horizontal,
            ..self
        }
    }

    pub fn scale(self, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}
