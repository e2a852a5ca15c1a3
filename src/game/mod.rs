//! Pure game core: avatar, obstacles and the per-tick update.
//!
//! Nothing in here touches the browser. Every routine takes the session state
//! explicitly so physics / obstacle / collision rules can be tested natively.
//! Randomness enters only through [`GapSource`].

pub mod collision;
pub mod obstacles;
pub mod physics;

use crate::config::{
    AVATAR_SIZE, AVATAR_START_X, AVATAR_START_Y, GAP_MAX, GAP_MIN, GRAVITY, OBSTACLE_COUNT,
    OBSTACLE_FIRST_X, OBSTACLE_GAP, OBSTACLE_SPACING, OBSTACLE_WIDTH,
};

// --- Random source ---------------------------------------------------------

/// Supplies obstacle gap anchors, each in `GAP_MIN..GAP_MAX`.
pub trait GapSource {
    fn next_gap(&mut self) -> f64;
}

impl<R: rand::Rng> GapSource for R {
    fn next_gap(&mut self) -> f64 {
        self.gen_range(GAP_MIN..GAP_MAX)
    }
}

// --- Entities --------------------------------------------------------------

/// The player-controlled falling body (square bounding box).
#[derive(Clone, Debug, PartialEq)]
pub struct Avatar {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub velocity: f64,
    pub gravity: f64,
    pub sprite_index: usize,
}

impl Avatar {
    pub fn new() -> Self {
        Self {
            x: AVATAR_START_X,
            y: AVATAR_START_Y,
            size: AVATAR_SIZE,
            velocity: 0.0,
            gravity: GRAVITY,
            sprite_index: 0,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.size
    }

    pub fn right(&self) -> f64 {
        self.x + self.size
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

/// A pair of solid bands with a passable gap starting at `gap_y`.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub width: f64,
    pub gap_y: f64,
    pub gap: f64,
}

impl Obstacle {
    pub fn new(x: f64, gap_y: f64) -> Self {
        Self { x, width: OBSTACLE_WIDTH, gap_y, gap: OBSTACLE_GAP }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Lower edge of the passable gap (top of the bottom band).
    pub fn gap_bottom(&self) -> f64 {
        self.gap_y + self.gap
    }
}

// --- Session state -----------------------------------------------------------

/// Everything one game session mutates.
#[derive(Clone, Debug)]
pub struct GameState {
    pub avatar: Avatar,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub running: bool,
    pub game_over: bool,
    pub sprite_count: usize,
}

impl GameState {
    /// Fresh state, obstacles laid out with anchors pulled in order from `gaps`.
    pub fn new(sprite_count: usize, gaps: &mut impl GapSource) -> Self {
        let mut state = Self {
            avatar: Avatar::new(),
            obstacles: Vec::with_capacity(OBSTACLE_COUNT),
            score: 0,
            running: false,
            game_over: false,
            sprite_count,
        };
        state.reset(gaps);
        state
    }

    /// Back to the start layout. `running` is left for the caller to decide.
    pub fn reset(&mut self, gaps: &mut impl GapSource) {
        self.avatar = Avatar::new();
        self.score = 0;
        self.game_over = false;
        self.obstacles.clear();
        for i in 0..OBSTACLE_COUNT {
            let x = OBSTACLE_FIRST_X + i as f64 * OBSTACLE_SPACING;
            self.obstacles.push(Obstacle::new(x, gaps.next_gap()));
        }
    }

    /// Jump input. Ignored unless running.
    pub fn jump(&mut self) -> bool {
        if !self.running {
            return false;
        }
        physics::apply_jump(&mut self.avatar, self.sprite_count);
        true
    }

    /// One simulation step: physics, obstacles, collision (in that order).
    pub fn update(&mut self, gaps: &mut impl GapSource) {
        physics::step(&mut self.avatar);
        self.score += obstacles::advance(&mut self.obstacles, gaps);
        if collision::detect(&self.avatar, &self.obstacles) {
            if !self.game_over {
                log::debug!("collision at y={:.1}, score {}", self.avatar.y, self.score);
            }
            self.game_over = true;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::ScriptedGaps;
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_state_lays_out_three_obstacles() {
        let mut gaps = ScriptedGaps::new(&[120.0, 340.0, 210.0]);
        let s = GameState::new(11, &mut gaps);
        let xs: Vec<f64> = s.obstacles.iter().map(|o| o.x).collect();
        let ys: Vec<f64> = s.obstacles.iter().map(|o| o.gap_y).collect();
        assert_eq!(xs, vec![800.0, 1100.0, 1400.0]);
        assert_eq!(ys, vec![120.0, 340.0, 210.0]);
        assert!(s.obstacles.iter().all(|o| o.width == 50.0 && o.gap == 150.0));
        assert_eq!(s.score, 0);
        assert!(!s.running && !s.game_over);
    }

    #[test]
    fn seeded_rng_layout_is_reproducible_and_in_range() {
        let a = GameState::new(11, &mut StdRng::seed_from_u64(42));
        let b = GameState::new(11, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.obstacles, b.obstacles);
        for o in &a.obstacles {
            assert!(o.gap_y >= GAP_MIN && o.gap_y < GAP_MAX);
        }
    }

    #[test]
    fn reset_restores_avatar_and_clears_terminal() {
        let mut gaps = ScriptedGaps::new(&[200.0]);
        let mut s = GameState::new(4, &mut gaps);
        s.avatar.y = 590.0;
        s.avatar.velocity = 7.0;
        s.avatar.sprite_index = 3;
        s.score = 9;
        s.game_over = true;
        s.reset(&mut gaps);
        assert_eq!(s.avatar, Avatar::new());
        assert_eq!(s.score, 0);
        assert!(!s.game_over);
        assert_eq!(s.obstacles.len(), OBSTACLE_COUNT);
    }

    #[test]
    fn jump_ignored_when_not_running() {
        let mut gaps = ScriptedGaps::new(&[200.0]);
        let mut s = GameState::new(4, &mut gaps);
        s.avatar.velocity = 3.0;
        assert!(!s.jump());
        assert_eq!(s.avatar.velocity, 3.0);
        assert_eq!(s.avatar.sprite_index, 0);
    }

    #[test]
    fn update_integrates_velocity_before_position() {
        let mut gaps = ScriptedGaps::new(&[200.0]);
        let mut s = GameState::new(4, &mut gaps);
        s.running = true;
        s.update(&mut gaps);
        assert_eq!(s.avatar.velocity, 0.5);
        assert_eq!(s.avatar.y, 200.5);
        s.update(&mut gaps);
        assert_eq!(s.avatar.velocity, 1.0);
        assert_eq!(s.avatar.y, 201.5);
    }

    #[test]
    fn ground_hit_sets_terminal_without_touching_score() {
        let mut gaps = ScriptedGaps::new(&[200.0]);
        let mut s = GameState::new(4, &mut gaps);
        s.score = 5;
        // 560 + 0.5 = 560.5, bottom 600.5 > 600
        s.avatar.y = 560.0;
        s.update(&mut gaps);
        assert!(s.game_over);
        assert_eq!(s.score, 5);
    }
}
