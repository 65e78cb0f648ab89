/// Render layer. Lower layers draw first.
///
/// Layers are drawn back-to-front: the level's tiles first, characters on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Terrain = 0,
    #[default]
    Objects = 1,
}

impl RenderLayer {
    /// Value written into `RenderInstance::layer`.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
