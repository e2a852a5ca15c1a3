//! Fixed gameplay constants. Physics is intentionally not runtime-configurable.

// Drawing surface (logical pixels)
pub const SURFACE_WIDTH: f64 = 800.0;
pub const SURFACE_HEIGHT: f64 = 600.0;
pub const GROUND_Y: f64 = 600.0;

// Avatar
pub const AVATAR_START_X: f64 = 150.0;
pub const AVATAR_START_Y: f64 = 200.0;
pub const AVATAR_SIZE: f64 = 40.0;
pub const GRAVITY: f64 = 0.5; // px / tick^2
pub const JUMP_IMPULSE: f64 = -8.0; // px / tick

// Obstacles
pub const OBSTACLE_COUNT: usize = 3;
pub const OBSTACLE_WIDTH: f64 = 50.0;
pub const OBSTACLE_GAP: f64 = 150.0;
pub const OBSTACLE_SPEED: f64 = 2.0; // px / tick
pub const OBSTACLE_FIRST_X: f64 = 800.0;
pub const OBSTACLE_SPACING: f64 = 300.0;
pub const OBSTACLE_RECYCLE_X: f64 = 800.0;
/// Gap anchors are drawn uniformly from `GAP_MIN..GAP_MAX` (upper bound exclusive).
pub const GAP_MIN: f64 = 100.0;
pub const GAP_MAX: f64 = 400.0;

// Input
pub const JUMP_KEY_CODE: &str = "Space";

// Rendering
pub const OBSTACLE_FILL: &str = "green";
pub const SCORE_FILL: &str = "black";
pub const SCORE_FONT: &str = "20px Arial";
pub const SCORE_POS: (f64, f64) = (10.0, 20.0);
pub const SCORE_LABEL: &str = "Monad Score";
pub const GAME_OVER_FILL: &str = "red";
pub const GAME_OVER_FONT: &str = "40px Arial";
pub const GAME_OVER_POS: (f64, f64) = (300.0, 300.0);
pub const GAME_OVER_TEXT: &str = "Game Over";

/// Avatar sprite images, cycled on every jump. Order matters (index 0 is the start sprite).
pub const SPRITE_PATHS: &[&str] = &[
    "assets/m1.jpg",
    "assets/m2.jpg",
    "assets/m3.jpg",
    "assets/m4.jpg",
    "assets/m6.jpg",
    "assets/m7.jpg",
    "assets/m8.jpg",
    "assets/m9.jpg",
    "assets/m10.jpg",
    "assets/m11.jpg",
    "assets/m12.jpg",
];
