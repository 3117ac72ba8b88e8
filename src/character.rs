//! Characters: positioned, drawable, collidable game entities

use std::path::Path;

use log::debug;

use crate::color::Color;
use crate::rect::Rect;
use crate::surface::{SpriteError, Surface};

/// Entity position as (x, y) in canvas pixels
pub type Coordinate = (i32, i32);

/// A game entity with a visual representation and a bounding box.
///
/// The collider's dimensions always match the image; its position is the
/// only field game logic should mutate during play. The engine keeps no
/// registry of characters - callers own their collections and drop
/// entities by removing them.
pub struct Character {
    size: u32,
    image: Surface,
    box_collider: Rect,
    spawn_coordinates: Coordinate,
}

impl Character {
    /// Build a character with the default look: a `size` x `size` square
    /// filled with [`Color::FALLBACK`].
    pub fn new(spawn_coordinates: Coordinate, size: u32) -> Self {
        let image = Surface::new(size, size, Color::FALLBACK);
        Self::from_image(spawn_coordinates, size, image)
    }

    /// Build a character from a sprite file, scaled to `size` x `size`.
    ///
    /// An unresolvable reference is an error; there is no fallback to the
    /// default square.
    pub fn with_sprite<P: AsRef<Path>>(
        spawn_coordinates: Coordinate,
        size: u32,
        sprite: P,
    ) -> Result<Self, SpriteError> {
        let image = Surface::from_file_scaled(sprite.as_ref(), size, size)?;
        debug!(
            "loaded sprite {} at {}x{}",
            sprite.as_ref().display(),
            size,
            size
        );
        Ok(Self::from_image(spawn_coordinates, size, image))
    }

    fn from_image(spawn_coordinates: Coordinate, size: u32, image: Surface) -> Self {
        let (w, h) = image.dimensions();
        let (x, y) = spawn_coordinates;
        Self {
            size,
            image,
            box_collider: Rect::new(x, y, w, h),
            spawn_coordinates,
        }
    }

    /// Composite the image onto a target surface at the collider's
    /// current top-left position.
    pub fn draw(&self, target: &mut Surface) {
        target.blit(&self.image, self.box_collider.x, self.box_collider.y);
    }

    /// True iff this entity's bounding box overlaps ANY box in `others`.
    ///
    /// Short-circuits on the first hit. This is a linear scan with no
    /// spatial index - fine for the tens of entities an arcade game keeps,
    /// a scaling limit beyond that.
    pub fn check_collision<'a>(&self, others: impl IntoIterator<Item = &'a Character>) -> bool {
        others
            .into_iter()
            .any(|other| self.box_collider.overlaps(&other.box_collider))
    }

    pub fn collider(&self) -> &Rect {
        &self.box_collider
    }

    /// Mutable collider access. Reposition only; the dimensions are tied
    /// to the image.
    pub fn collider_mut(&mut self) -> &mut Rect {
        &mut self.box_collider
    }

    /// Current top-left position
    pub fn position(&self) -> Coordinate {
        (self.box_collider.x, self.box_collider.y)
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.box_collider.set_position(x, y);
    }

    /// Refill the image with a solid color (keeps dimensions)
    pub fn fill(&mut self, color: Color) {
        self.image.clear(color);
    }

    /// Substitute a custom image.
    ///
    /// The collider is resized to the new image's rectangle, keeping its
    /// current position. This is how non-square entities (paddles, bars)
    /// are built on top of the square default.
    pub fn set_image(&mut self, image: Surface) {
        let (w, h) = image.dimensions();
        self.image = image;
        self.box_collider.w = w;
        self.box_collider.h = h;
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Where this character was initially placed
    pub fn spawn_coordinates(&self) -> Coordinate {
        self.spawn_coordinates
    }
}
