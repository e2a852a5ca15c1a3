use super::{Avatar, Obstacle};
use crate::config::GROUND_Y;

/// Avatar inside the obstacle's horizontal span but outside its gap.
///
/// There is no ceiling: an avatar above y = 0 only collides with a top band.
pub fn hits_obstacle(avatar: &Avatar, obstacle: &Obstacle) -> bool {
    let overlaps_x = avatar.right() > obstacle.x && avatar.x < obstacle.right();
    overlaps_x && (avatar.y < obstacle.gap_y || avatar.bottom() > obstacle.gap_bottom())
}

pub fn hits_ground(avatar: &Avatar) -> bool {
    avatar.bottom() > GROUND_Y
}

pub fn detect(avatar: &Avatar, obstacles: &[Obstacle]) -> bool {
    hits_ground(avatar) || obstacles.iter().any(|o| hits_obstacle(avatar, o))
}
