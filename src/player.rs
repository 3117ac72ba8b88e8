//! Player: a character composed with a keyboard controller

use std::path::Path;

use crate::canvas::Canvas;
use crate::character::{Character, Coordinate};
use crate::input::KeyboardController;
use crate::surface::{SpriteError, Surface};

/// Movement speed attached to new players (pixels per tick)
pub const DEFAULT_MOVEMENT_SPEED: u32 = 10;

/// A keyboard-driven character.
///
/// Composition instead of a subtype: the player owns a [`Character`] body
/// plus the controller that moves it, and forwards the drawing and
/// collision operations. Callers that keep mixed entity collections store
/// the bodies and drive input on the player value they own.
pub struct Player {
    body: Character,
    controller: KeyboardController,
}

impl Player {
    /// Build with the default square look and the default movement speed
    pub fn new(spawn_coordinates: Coordinate, size: u32) -> Self {
        Self {
            body: Character::new(spawn_coordinates, size),
            controller: KeyboardController::new(DEFAULT_MOVEMENT_SPEED),
        }
    }

    /// Build from a sprite file, scaled to `size` x `size`.
    ///
    /// Fails exactly like [`Character::with_sprite`]: a bad reference is an
    /// error, never a silent fallback.
    pub fn with_sprite<P: AsRef<Path>>(
        spawn_coordinates: Coordinate,
        size: u32,
        sprite: P,
    ) -> Result<Self, SpriteError> {
        Ok(Self {
            body: Character::with_sprite(spawn_coordinates, size, sprite)?,
            controller: KeyboardController::new(DEFAULT_MOVEMENT_SPEED),
        })
    }

    /// Sample the keyboard and move within the canvas bounds
    pub fn handle_keys(&mut self, canvas: &Canvas) {
        self.controller.handle_keys(&mut self.body, canvas);
    }

    pub fn draw(&self, target: &mut Surface) {
        self.body.draw(target);
    }

    pub fn check_collision<'a>(&self, others: impl IntoIterator<Item = &'a Character>) -> bool {
        self.body.check_collision(others)
    }

    pub fn body(&self) -> &Character {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Character {
        &mut self.body
    }

    pub fn controller(&self) -> &KeyboardController {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::input::KeyState;

    #[test]
    fn test_new_attaches_default_speed() {
        let player = Player::new((5, 6), 20);
        assert_eq!(player.controller().movement_speed(), DEFAULT_MOVEMENT_SPEED);
        assert_eq!(player.body().position(), (5, 6));
        assert_eq!(player.body().size(), 20);
    }

    #[test]
    fn test_movement_goes_through_the_controller() {
        let canvas = Canvas::new((300, 300), Color::WHITE);
        let mut player = Player::new((100, 100), 20);
        let ctl = *player.controller();
        let keys = KeyState {
            down: true,
            ..Default::default()
        };
        ctl.apply(keys, player.body_mut(), &canvas);
        assert_eq!(
            player.body().position(),
            (100, 100 + DEFAULT_MOVEMENT_SPEED as i32)
        );
    }

    #[test]
    fn test_collision_forwards_to_the_body() {
        let player = Player::new((0, 0), 30);
        let overlapping = Character::new((10, 10), 30);
        let clear = Character::new((200, 200), 30);
        assert!(player.check_collision([&overlapping]));
        assert!(!player.check_collision([&clear]));
    }
}
