//! Keyboard polling and clamped directional movement

use macroquad::prelude::{is_key_down, KeyCode};

use crate::canvas::Canvas;
use crate::character::Character;

/// Snapshot of the four fixed direction keys.
///
/// The key layout is W/A/S/D and not configurable. Sampling into a plain
/// struct keeps the movement logic below testable without a window.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    /// Sample the keyboard's instantaneous state
    pub fn sample() -> Self {
        Self {
            up: is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::S),
            left: is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::D),
        }
    }
}

/// Translates held direction keys into collider movement, clamped to the
/// canvas bounds.
#[derive(Debug, Clone, Copy)]
pub struct KeyboardController {
    movement_speed: u32,
}

impl KeyboardController {
    /// `movement_speed` is in pixels per tick and must be positive.
    pub fn new(movement_speed: u32) -> Self {
        assert!(movement_speed > 0, "movement_speed must be positive");
        Self { movement_speed }
    }

    pub fn movement_speed(&self) -> u32 {
        self.movement_speed
    }

    /// Sample the keyboard and move the character accordingly
    pub fn handle_keys(&self, body: &mut Character, canvas: &Canvas) {
        self.apply(KeyState::sample(), body, canvas);
    }

    /// Apply a key snapshot to the character's collider.
    ///
    /// Each direction is evaluated independently, in the fixed order down,
    /// up, right, left; opposite keys are not summed first. A step that
    /// would carry the collider outside `[0, canvas dim - collider dim]`
    /// on its axis is silently dropped.
    pub fn apply(&self, keys: KeyState, body: &mut Character, canvas: &Canvas) {
        let speed = self.movement_speed as i32;
        let collider = body.collider();
        let max_x = canvas.width() as i32 - collider.w as i32;
        let max_y = canvas.height() as i32 - collider.h as i32;

        let collider = body.collider_mut();
        if keys.down && collider.y + speed <= max_y {
            collider.y += speed;
        }
        if keys.up && collider.y - speed >= 0 {
            collider.y -= speed;
        }
        if keys.right && collider.x + speed <= max_x {
            collider.x += speed;
        }
        if keys.left && collider.x - speed >= 0 {
            collider.x -= speed;
        }
    }
}

impl Default for KeyboardController {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn setup(x: i32, y: i32) -> (Character, Canvas) {
        let mut body = Character::new((0, 0), 20);
        body.set_position(x, y);
        (body, Canvas::new((200, 150), Color::WHITE))
    }

    #[test]
    fn test_single_key_moves_one_axis() {
        let (mut body, canvas) = setup(50, 50);
        let ctl = KeyboardController::new(7);
        let keys = KeyState {
            right: true,
            ..Default::default()
        };
        ctl.apply(keys, &mut body, &canvas);
        assert_eq!(body.position(), (57, 50));
    }

    #[test]
    fn test_left_edge_clamps() {
        let (mut body, canvas) = setup(0, 50);
        let ctl = KeyboardController::new(10);
        let keys = KeyState {
            left: true,
            ..Default::default()
        };
        ctl.apply(keys, &mut body, &canvas);
        assert_eq!(body.position(), (0, 50));
    }

    #[test]
    fn test_right_edge_clamps() {
        // canvas width 200, size 20 -> right edge position is 180
        let (mut body, canvas) = setup(180, 50);
        let ctl = KeyboardController::new(10);
        let keys = KeyState {
            right: true,
            ..Default::default()
        };
        ctl.apply(keys, &mut body, &canvas);
        assert_eq!(body.position(), (180, 50));
    }

    #[test]
    fn test_partial_step_is_dropped_not_truncated() {
        // one pixel from the edge with a ten pixel step: no movement at all
        let (mut body, canvas) = setup(1, 50);
        let ctl = KeyboardController::new(10);
        let keys = KeyState {
            left: true,
            ..Default::default()
        };
        ctl.apply(keys, &mut body, &canvas);
        assert_eq!(body.position(), (1, 50));
    }

    #[test]
    fn test_opposite_keys_cancel_in_the_interior() {
        let (mut body, canvas) = setup(50, 50);
        let ctl = KeyboardController::new(5);
        let keys = KeyState {
            up: true,
            down: true,
            ..Default::default()
        };
        ctl.apply(keys, &mut body, &canvas);
        assert_eq!(body.position(), (50, 50));
    }

    #[test]
    fn test_opposite_keys_are_not_summed_at_an_edge() {
        // at the bottom edge the down step is dropped but the up step
        // still applies - a signed sum would have produced no movement
        let (mut body, canvas) = setup(50, 130);
        let ctl = KeyboardController::new(5);
        let keys = KeyState {
            up: true,
            down: true,
            ..Default::default()
        };
        ctl.apply(keys, &mut body, &canvas);
        assert_eq!(body.position(), (50, 125));
    }

    #[test]
    fn test_diagonal_moves_both_axes() {
        let (mut body, canvas) = setup(50, 50);
        let ctl = KeyboardController::new(3);
        let keys = KeyState {
            down: true,
            right: true,
            ..Default::default()
        };
        ctl.apply(keys, &mut body, &canvas);
        assert_eq!(body.position(), (53, 53));
    }

    #[test]
    #[should_panic(expected = "movement_speed must be positive")]
    fn test_zero_speed_panics() {
        KeyboardController::new(0);
    }
}
