//! Polling input adapters
//!
//! Both controllers sample instantaneous device state through macroquad;
//! neither keeps state between calls. The keyboard adapter translates key
//! holds into clamped collider movement, the mouse adapter answers
//! position, button and hit-test queries.

mod keyboard;
mod mouse;

pub use keyboard::{KeyState, KeyboardController};
pub use mouse::MouseController;
