//! Monad Flap core crate.
//!
//! A flappy-style arcade game for the browser. The simulation (`game`), frame
//! rendering (`render`), session control (`session`) and the frame loop
//! (`frame_loop`) are plain Rust and run natively in tests; `web` binds them to
//! a canvas, requestAnimationFrame and DOM input events.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod frame_loop;
pub mod game;
pub mod render;
pub mod session;
pub mod web;

pub use frame_loop::{FrameOutcome, FrameScheduler, SteppingScheduler, drive, run_frame};
pub use game::{Avatar, GameState, GapSource, Obstacle};
pub use render::{Surface, render};
pub use session::{SessionController, Snapshot};
pub use web::{
    WebError, game_score, init_game, is_game_over, is_game_running, mount_game, restart_game,
    start_game,
};
#[cfg(feature = "serde_json")]
pub use web::game_state_json;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Already initialized when the module is instantiated twice; keep the first logger.
    let _ = console_log::init_with_level(log::Level::Info);
}
