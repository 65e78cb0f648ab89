use std::sync::Arc;

use pup_engine::*;

/// Level one with a single controllable pup.
pub struct PupSquad {
    level: Option<Level>,
}

impl PupSquad {
    pub fn new() -> Self {
        Self { level: None }
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }
}

impl Default for PupSquad {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for PupSquad {
    fn init(&mut self, images: &dyn ImageSource) -> Result<(), EngineError> {
        let sheet = CharacterSheet::load(images, &PLAYER_SHEET)?;
        self.level = Some(Level::level_one(Arc::new(sheet))?);
        log::info!("PupSquad: level one ready");
        Ok(())
    }

    fn update(&mut self, input: &InputQueue, dt: f64) {
        let Some(level) = self.level.as_mut() else {
            return;
        };
        for &event in input.iter() {
            level.handle_input(event);
        }
        level.update(dt);
    }

    fn render(&self, buffer: &mut RenderBuffer) {
        if let Some(level) = &self.level {
            level.draw(buffer);
        }
    }
}
