use pup_engine::{
    AssetManifest, EngineError, FrameClock, Game, GameConfig, ImageRegistry, InputEvent,
    InputQueue, RenderBuffer,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `pupsquad`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    images: ImageRegistry,
    input: InputQueue,
    render_buffer: RenderBuffer,
    clock: FrameClock,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);

        Self {
            game,
            images: ImageRegistry::new(),
            input: InputQueue::new(),
            render_buffer,
            clock: FrameClock::new(),
            config,
            initialized: false,
        }
    }

    /// Register the images listed in a JSON asset manifest. Call before `init`.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), EngineError> {
        let manifest = AssetManifest::from_json(json)?;
        self.images = ImageRegistry::from_manifest(&manifest)?;
        log::info!("Loaded {} images from manifest", self.images.len());
        Ok(())
    }

    /// Initialize the game. Call once after the manifest is loaded.
    ///
    /// On failure the runner stays uninitialized and `tick` does nothing.
    pub fn init(&mut self) -> Result<(), EngineError> {
        self.config = self.game.config();
        self.game.init(&self.images)?;
        self.clock.reset();
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame at wall-clock time `now_ms`: update the game with the
    /// time elapsed since the previous frame, then rebuild the render buffer.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }

        let dt = self.clock.tick(now_ms / 1000.0);
        self.game.update(&self.input, dt);

        // Drain input after update
        self.input.drain();

        self.render_buffer.clear();
        self.game.render(&mut self.render_buffer);

        if self.render_buffer.instances.len() > self.config.max_instances {
            log::warn!(
                "Frame produced {} instances, host buffer holds {}",
                self.render_buffer.instances.len(),
                self.config.max_instances
            );
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for host reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn instances(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width as f32
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height as f32
    }

    pub fn framerate(&self) -> u32 {
        self.config.framerate
    }

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pup_engine::{ImageSource, RenderInstance};

    /// Counts ticks and remembers what it saw.
    #[derive(Default)]
    struct Probe {
        ticks: u32,
        last_dt: f64,
        events_seen: usize,
        needs_image: Option<&'static str>,
    }

    impl Game for Probe {
        fn init(&mut self, images: &dyn ImageSource) -> Result<(), EngineError> {
            if let Some(path) = self.needs_image {
                images.load(path)?;
            }
            Ok(())
        }

        fn update(&mut self, input: &InputQueue, dt: f64) {
            self.ticks += 1;
            self.last_dt = dt;
            self.events_seen += input.len();
        }

        fn render(&self, buffer: &mut RenderBuffer) {
            for _ in 0..self.ticks {
                buffer.push(RenderInstance::default());
            }
        }
    }

    #[test]
    fn tick_before_init_is_a_no_op() {
        let mut runner = GameRunner::new(Probe::default());
        runner.tick(16.0);
        assert_eq!(runner.game().ticks, 0);
        assert_eq!(runner.instance_count(), 0);
    }

    #[test]
    fn tick_measures_wall_clock_and_drains_input() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init().unwrap();

        runner.push_input(InputEvent::KeyDown { key_code: 32 });
        runner.tick(1000.0);
        assert_eq!(runner.game().last_dt, 0.0);
        assert_eq!(runner.game().events_seen, 1);

        runner.tick(1050.0);
        assert!((runner.game().last_dt - 0.05).abs() < 1e-12);
        // The first tick's event was consumed.
        assert_eq!(runner.game().events_seen, 1);
        assert_eq!(runner.instance_count(), 2);
    }

    #[test]
    fn render_buffer_is_rebuilt_each_tick() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init().unwrap();
        runner.tick(0.0);
        runner.tick(16.0);
        runner.tick(32.0);
        assert_eq!(runner.instance_count(), 3);
        assert_eq!(runner.instances().as_floats().len(), 3 * RenderInstance::FLOATS);
    }

    #[test]
    fn missing_image_keeps_runner_uninitialized() {
        let game = Probe {
            needs_image: Some("assets/player/idle/1.png"),
            ..Probe::default()
        };
        let mut runner = GameRunner::new(game);
        let err = runner.init().unwrap_err();
        assert!(matches!(err, EngineError::UnknownImage(_)));
        assert!(!runner.is_initialized());

        runner
            .load_manifest(r#"{"images":[{"path":"assets/player/idle/1.png","width":230,"height":148}]}"#)
            .unwrap();
        runner.init().unwrap();
        assert!(runner.is_initialized());
    }

    #[test]
    fn exposes_config() {
        let runner = GameRunner::new(Probe::default());
        assert_eq!(runner.world_width(), 1280.0);
        assert_eq!(runner.world_height(), 720.0);
        assert_eq!(runner.framerate(), 60);
        assert_eq!(runner.max_instances(), 2048);
    }
}
