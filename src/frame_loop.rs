//! One frame of the game loop, host-agnostic.
//!
//! The host provides a [`FrameScheduler`] (requestAnimationFrame in the browser,
//! a synchronous stepper in tests). A frame only asks for a successor while the
//! session keeps running, so the loop halts itself on game over.

use crate::game::GapSource;
use crate::render::{Surface, render};
use crate::session::SessionController;

/// Ability to ask the host for one more frame.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Session was not running; nothing happened.
    Halted,
    /// Frame hit the terminal condition; loop stops here.
    Stopped,
    /// Next frame requested.
    Continue,
}

pub fn run_frame<G: GapSource>(
    session: &mut SessionController<G>,
    surface: &mut impl Surface,
    scheduler: &mut impl FrameScheduler,
) -> FrameOutcome {
    if !session.is_running() {
        return FrameOutcome::Halted;
    }
    session.update();
    render(session.state(), surface);
    if session.is_game_over() {
        session.halt();
        return FrameOutcome::Stopped;
    }
    scheduler.request_frame();
    FrameOutcome::Continue
}

/// Counts pending frame requests; lets tests step the loop synchronously.
#[derive(Default, Debug)]
pub struct SteppingScheduler {
    pending: usize,
}

impl SteppingScheduler {
    pub fn pending(&self) -> usize {
        self.pending
    }

    fn take(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }
}

impl FrameScheduler for SteppingScheduler {
    fn request_frame(&mut self) {
        self.pending += 1;
    }
}

/// Runs the first frame plus every frame it requests, up to `max_frames`.
/// Returns the number of frames executed.
pub fn drive<G: GapSource>(
    session: &mut SessionController<G>,
    surface: &mut impl Surface,
    scheduler: &mut SteppingScheduler,
    max_frames: usize,
) -> usize {
    let mut frames = 0;
    let mut due = true;
    while due && frames < max_frames {
        frames += 1;
        run_frame(session, surface, scheduler);
        due = scheduler.take();
    }
    frames
}
