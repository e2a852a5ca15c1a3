//! Frame rendering against an abstract 2D surface.
//!
//! The browser canvas implements [`Surface`] in `web`; tests use a recorder.

use crate::config::{
    GAME_OVER_FILL, GAME_OVER_FONT, GAME_OVER_POS, GAME_OVER_TEXT, GROUND_Y, OBSTACLE_FILL,
    SCORE_FILL, SCORE_FONT, SCORE_LABEL, SCORE_POS, SURFACE_HEIGHT, SURFACE_WIDTH,
};
use crate::game::GameState;

/// The drawing primitives a frame needs.
pub trait Surface {
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn set_fill(&mut self, color: &str);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn set_font(&mut self, font: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    /// Whether sprite `index` has finished loading.
    fn sprite_ready(&self, index: usize) -> bool;
    fn draw_sprite(&mut self, index: usize, x: f64, y: f64, w: f64, h: f64);
}

pub fn score_text(score: u32) -> String {
    format!("{}: {}", SCORE_LABEL, score)
}

/// Draw one frame. Read-only with respect to the session.
pub fn render(state: &GameState, surface: &mut impl Surface) {
    surface.clear(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT);

    // Avatar (skipped until its sprite has loaded)
    let a = &state.avatar;
    if surface.sprite_ready(a.sprite_index) {
        surface.draw_sprite(a.sprite_index, a.x, a.y, a.size, a.size);
    }

    surface.set_fill(OBSTACLE_FILL);
    for o in &state.obstacles {
        surface.fill_rect(o.x, 0.0, o.width, o.gap_y);
        surface.fill_rect(o.x, o.gap_bottom(), o.width, GROUND_Y - o.gap_bottom());
    }

    surface.set_fill(SCORE_FILL);
    surface.set_font(SCORE_FONT);
    surface.fill_text(&score_text(state.score), SCORE_POS.0, SCORE_POS.1);

    if state.game_over {
        surface.set_fill(GAME_OVER_FILL);
        surface.set_font(GAME_OVER_FONT);
        surface.fill_text(GAME_OVER_TEXT, GAME_OVER_POS.0, GAME_OVER_POS.1);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Surface;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        Clear(f64, f64, f64, f64),
        Fill(String),
        Rect(f64, f64, f64, f64),
        Font(String),
        Text(String, f64, f64),
        Sprite(usize, f64, f64, f64, f64),
    }

    /// Records every draw call; sprites listed in `ready` count as loaded.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
        pub ready: Vec<usize>,
    }

    impl RecordingSurface {
        pub fn with_ready(ready: &[usize]) -> Self {
            Self { ops: Vec::new(), ready: ready.to_vec() }
        }

        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(t, _, _) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.ops.push(Op::Clear(x, y, w, h));
        }
        fn set_fill(&mut self, color: &str) {
            self.ops.push(Op::Fill(color.to_string()));
        }
        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.ops.push(Op::Rect(x, y, w, h));
        }
        fn set_font(&mut self, font: &str) {
            self.ops.push(Op::Font(font.to_string()));
        }
        fn fill_text(&mut self, text: &str, x: f64, y: f64) {
            self.ops.push(Op::Text(text.to_string(), x, y));
        }
        fn sprite_ready(&self, index: usize) -> bool {
            self.ready.contains(&index)
        }
        fn draw_sprite(&mut self, index: usize, x: f64, y: f64, w: f64, h: f64) {
            self.ops.push(Op::Sprite(index, x, y, w, h));
        }
    }
}
