use super::{GapSource, Obstacle};
use crate::config::{OBSTACLE_RECYCLE_X, OBSTACLE_SPEED};

/// Scroll every obstacle left by one tick, recycling the ones fully past the
/// left edge. Returns the number recycled (points earned this tick).
pub fn advance(obstacles: &mut [Obstacle], gaps: &mut impl GapSource) -> u32 {
    let mut passed = 0;
    for o in obstacles.iter_mut() {
        o.x -= OBSTACLE_SPEED;
        if o.right() < 0.0 {
            o.x = OBSTACLE_RECYCLE_X;
            o.gap_y = gaps.next_gap();
            passed += 1;
        }
    }
    passed
}
