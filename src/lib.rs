//! quadkit: a tiny arcade runtime for 2D games
//!
//! Drives a fixed-rate frame loop over a software canvas, represents game
//! objects as positioned, collidable, drawable characters, and exposes
//! polling adapters for keyboard and mouse. Built for small arcade games:
//! paddle games, shooters, dodge games.
//!
//! The embedding game registers a per-frame callback with [`Engine::run`],
//! owns its entity collections, and uses the core's draw, collision and
//! input operations from inside that callback:
//!
//! ```no_run
//! use quadkit::{Canvas, Character, Color, Context, Engine, Player};
//!
//! let context = Context::acquire();
//! let canvas = Canvas::new((800, 600), Color::BLACK);
//! let mut player = Player::new((400, 560), 30);
//! let mut blocks: Vec<Character> = Vec::new();
//!
//! Engine::with_canvas(context, "dodge", 60, canvas).run(move |canvas| {
//!     player.handle_keys(canvas);
//!     for block in &blocks {
//!         block.draw(canvas.surface_mut());
//!     }
//!     player.draw(canvas.surface_mut());
//!     if player.check_collision(&blocks) {
//!         blocks.clear();
//!     }
//! });
//! ```
//!
//! # Module Organization
//!
//! - `engine` - display context, frame clock, the cooperative loop
//! - `canvas` - frame buffer, dimensions, background fill
//! - `character` / `player` - entity and collision model
//! - `input` - keyboard and mouse polling adapters
//! - `surface` / `rect` / `color` - pixel buffer, collider and color types

pub mod canvas;
pub mod character;
pub mod color;
pub mod engine;
pub mod input;
pub mod player;
pub mod rect;
pub mod surface;

pub use canvas::{Canvas, ScreenSize};
pub use character::{Character, Coordinate};
pub use color::Color;
pub use engine::{Context, Engine};
pub use input::{KeyState, KeyboardController, MouseController};
pub use player::{Player, DEFAULT_MOVEMENT_SPEED};
pub use rect::Rect;
pub use surface::{SpriteError, Surface};
