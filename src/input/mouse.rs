//! Mouse polling and collider hit testing

use macroquad::prelude::{is_mouse_button_down, mouse_position, MouseButton};

use crate::character::Character;

/// Stateless pointer adapter.
///
/// Every operation is a fresh query against current device state; nothing
/// is cached between calls. Button indices are fixed: 0 = primary,
/// 1 = middle, 2 = secondary.
pub struct MouseController;

impl MouseController {
    /// Current pointer position in canvas space
    pub fn get_position() -> (f32, f32) {
        mouse_position()
    }

    /// Instantaneous state of a button by index (unknown indices are
    /// simply not pressed)
    pub fn is_pressed(button: usize) -> bool {
        match button {
            0 => is_mouse_button_down(MouseButton::Left),
            1 => is_mouse_button_down(MouseButton::Middle),
            2 => is_mouse_button_down(MouseButton::Right),
            _ => false,
        }
    }

    pub fn is_left_pressed() -> bool {
        is_mouse_button_down(MouseButton::Left)
    }

    pub fn is_right_pressed() -> bool {
        is_mouse_button_down(MouseButton::Right)
    }

    /// Is the pointer currently over the character's collider?
    pub fn is_over(character: &Character) -> bool {
        Self::hit_test(mouse_position(), character)
    }

    /// Is the pointer over the character with `button` held?
    ///
    /// Hover and button state are two independent device reads made in
    /// that order, not an atomic snapshot. Within the single-threaded
    /// frame model nothing changes between them; that assumption would not
    /// survive a move to threaded input.
    pub fn is_clicking(character: &Character, button: usize) -> bool {
        Self::is_over(character) && Self::is_pressed(button)
    }

    /// Hit-test an explicit canvas-space position against a character's
    /// collider (left/top inclusive, right/bottom exclusive).
    pub fn hit_test(position: (f32, f32), character: &Character) -> bool {
        character
            .collider()
            .contains(position.0 as i32, position.1 as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_at_top_left_pixel() {
        let c = Character::new((10, 10), 5);
        assert!(MouseController::hit_test((10.0, 10.0), &c));
    }

    #[test]
    fn test_miss_one_pixel_outside_each_edge() {
        let c = Character::new((10, 10), 5);
        assert!(!MouseController::hit_test((9.0, 12.0), &c)); // left
        assert!(!MouseController::hit_test((15.0, 12.0), &c)); // right
        assert!(!MouseController::hit_test((12.0, 9.0), &c)); // top
        assert!(!MouseController::hit_test((12.0, 15.0), &c)); // bottom
    }

    #[test]
    fn test_hit_follows_current_position_not_spawn() {
        let mut c = Character::new((0, 0), 8);
        c.set_position(100, 100);
        assert!(!MouseController::hit_test((4.0, 4.0), &c));
        assert!(MouseController::hit_test((104.0, 104.0), &c));
    }
}
