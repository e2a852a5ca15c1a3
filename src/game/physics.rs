use super::Avatar;
use crate::config::JUMP_IMPULSE;

/// Explicit Euler step: velocity first, then position.
pub fn step(avatar: &mut Avatar) {
    avatar.velocity += avatar.gravity;
    avatar.y += avatar.velocity;
}

/// Velocity reset to the jump impulse regardless of current velocity; sprite cycles.
pub fn apply_jump(avatar: &mut Avatar, sprite_count: usize) {
    avatar.velocity = JUMP_IMPULSE;
    if sprite_count > 0 {
        avatar.sprite_index = (avatar.sprite_index + 1) % sprite_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_adds_gravity_then_moves() {
        let mut a = Avatar::new();
        a.velocity = -8.0;
        a.y = 300.0;
        step(&mut a);
        assert_eq!(a.velocity, -7.5);
        assert_eq!(a.y, 292.5);
    }

    #[test]
    fn jump_overrides_any_velocity() {
        for v in [-20.0, -8.0, 0.0, 3.5, 42.0] {
            let mut a = Avatar::new();
            a.velocity = v;
            apply_jump(&mut a, 11);
            assert_eq!(a.velocity, JUMP_IMPULSE);
        }
    }

    #[test]
    fn jump_cycles_sprite_index() {
        let mut a = Avatar::new();
        let seen: Vec<usize> = (0..5)
            .map(|_| {
                apply_jump(&mut a, 3);
                a.sprite_index
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 0, 1, 2]);
    }

    #[test]
    fn jump_without_sprites_keeps_index() {
        let mut a = Avatar::new();
        apply_jump(&mut a, 0);
        assert_eq!(a.sprite_index, 0);
        assert_eq!(a.velocity, JUMP_IMPULSE);
    }
}
