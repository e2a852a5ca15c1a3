//! Session controller: the only entry points a host calls.
//!
//! Input listeners live outside (registered once by `web`), so `initialize()`
//! can be called any number of times without piling up handlers.

use crate::game::{GameState, GapSource};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Host-visible flags and score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Snapshot {
    pub running: bool,
    pub game_over: bool,
    pub score: u32,
}

pub struct SessionController<G: GapSource> {
    state: GameState,
    gaps: G,
}

impl<G: GapSource> SessionController<G> {
    /// Builds an initialized (not yet running) session.
    pub fn new(sprite_count: usize, mut gaps: G) -> Self {
        let state = GameState::new(sprite_count, &mut gaps);
        Self { state, gaps }
    }

    pub fn initialize(&mut self) {
        self.state.reset(&mut self.gaps);
        log::info!(
            "session initialized; gap anchors {:?}",
            self.state.obstacles.iter().map(|o| o.gap_y.round()).collect::<Vec<_>>()
        );
    }

    /// Returns `true` when the caller has to kick off a new frame loop.
    pub fn start(&mut self) -> bool {
        if self.state.running {
            log::warn!("start ignored: session already running");
            return false;
        }
        if self.state.game_over {
            log::warn!("start ignored: game over, restart to play again");
            return false;
        }
        self.state.running = true;
        log::info!("session started");
        true
    }

    pub fn restart(&mut self) -> bool {
        self.initialize();
        self.start()
    }

    pub fn jump(&mut self) -> bool {
        self.state.jump()
    }

    /// Simulation half of a frame (physics, obstacles, collision).
    pub fn update(&mut self) {
        self.state.update(&mut self.gaps);
    }

    /// Ends the run after a terminal frame.
    pub(crate) fn halt(&mut self) {
        self.state.running = false;
        log::info!("game over; final score {}", self.state.score);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            running: self.state.running,
            game_over: self.state.game_over,
            score: self.state.score,
        }
    }

    #[cfg(feature = "serde_json")]
    pub fn snapshot_json(&self) -> String {
        // A struct of plain fields always serializes.
        serde_json::to_string(&self.snapshot()).unwrap_or_default()
    }
}
