pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, key handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use pup_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// pup_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `pup_engine::Game`
///   and has an inherent `new()`
/// - `$game_name`: A string literal used in the initialization log message
///
/// Every export other than `game_init` does nothing (or returns zero) until
/// `game_init` has succeeded.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R: Default>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => f(runner),
                None => {
                    log::debug!("{}: game_init() has not completed", $game_name);
                    R::default()
                }
            })
        }

        /// Load the asset manifest and build the game. Returns false on failure.
        #[wasm_bindgen]
        pub fn game_init(manifest_json: &str) -> bool {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner = $crate::GameRunner::new(<$game_type>::new());

            if let Err(err) = runner.load_manifest(manifest_json) {
                log::error!("{}: manifest rejected: {}", $game_name, err);
                return false;
            }
            if let Err(err) = runner.init() {
                log::error!("{}: init failed: {}", $game_name, err);
                return false;
            }

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $game_name);
            true
        }

        /// Advance one frame. `now_ms` is the host's wall clock in milliseconds.
        #[wasm_bindgen]
        pub fn game_tick(now_ms: f64) {
            with_runner(|r| r.tick(now_ms));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map_or(std::ptr::null(), |r| r.instances_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_instance_floats() -> u32 {
            RenderInstance::FLOATS as u32
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        #[wasm_bindgen]
        pub fn get_framerate() -> u32 {
            with_runner(|r| r.framerate())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }
    };
}
