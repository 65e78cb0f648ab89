use crate::assets::registry::ImageSource;
use crate::core::units::{FRAMERATE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::EngineError;
use crate::input::queue::InputQueue;
use crate::renderer::instance::RenderBuffer;

/// Configuration for the loop driver, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Viewport width in pixels.
    pub world_width: f64,
    /// Viewport height in pixels.
    pub world_height: f64,
    /// Frame rate the host should aim for.
    pub framerate: u32,
    /// Maximum number of render instances per frame (default: 2048).
    pub max_instances: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: SCREEN_WIDTH,
            world_height: SCREEN_HEIGHT,
            framerate: FRAMERATE,
            max_instances: 2048,
        }
    }
}

/// The contract every game must fulfill.
pub trait Game {
    /// Return loop configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Load assets and build the initial scene. Runs once, before any tick.
    fn init(&mut self, images: &dyn ImageSource) -> Result<(), EngineError>;

    /// One tick: consume this tick's input, then advance by `dt` seconds.
    fn update(&mut self, input: &InputQueue, dt: f64);

    /// Read-only draw pass into the frame's render buffer.
    fn render(&self, buffer: &mut RenderBuffer);
}
