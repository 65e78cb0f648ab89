use bytemuck::{Pod, Zeroable};

/// Per-instance draw command read by the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Left edge in screen pixels.
    pub x: f32,
    /// Top edge in screen pixels.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Image id, or [`RenderInstance::NO_IMAGE`] for a solid fill.
    pub image: f32,
    /// 1.0 when the image is mirrored horizontally.
    pub flip: f32,
    /// Grey level for solid fills (0.0 = black, 1.0 = white). Ignored for images.
    pub shade: f32,
    /// Render layer (see `RenderLayer`).
    pub layer: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
    pub const NO_IMAGE: f32 = -1.0;

    pub fn is_solid(&self) -> bool {
        self.image == Self::NO_IMAGE
    }
}

/// Render buffer containing every draw command of one frame, back to front.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Flat float view of the instances, in protocol layout.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
