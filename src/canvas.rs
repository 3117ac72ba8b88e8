//! Canvas: the game's frame buffer and background fill
//!
//! The canvas is pure data. Window creation and per-frame presentation are
//! handled by the engine's [`Context`](crate::engine::Context), so the
//! canvas stays constructible (and testable) without a display.

use crate::color::Color;
use crate::surface::Surface;

/// Window dimensions as (width, height) in pixels
pub type ScreenSize = (u32, u32);

/// Owns the frame buffer, its fixed pixel dimensions and background color.
///
/// Invariant: the surface dimensions always equal `screen_size`; the only
/// way to change either is [`Canvas::reset`], which swaps the whole unit.
pub struct Canvas {
    screen_size: ScreenSize,
    background_color: Color,
    surface: Surface,
}

impl Canvas {
    /// Allocate a frame buffer of exactly `screen_size`, filled with the
    /// background color.
    pub fn new(screen_size: ScreenSize, background_color: Color) -> Self {
        let (w, h) = screen_size;
        Self {
            screen_size,
            background_color,
            surface: Surface::new(w, h, background_color),
        }
    }

    /// Rebuild the canvas with new parameters.
    ///
    /// Size, background color and frame buffer are replaced as one unit.
    /// Anything that copied out the old surface is stale after this call;
    /// hold the `Canvas` itself, not its surface.
    pub fn reset(&mut self, screen_size: ScreenSize, background_color: Color) {
        let (w, h) = screen_size;
        self.screen_size = screen_size;
        self.background_color = background_color;
        self.surface = Surface::new(w, h, background_color);
    }

    /// Refill the frame buffer with the background color
    pub fn clear(&mut self) {
        self.surface.clear(self.background_color);
    }

    pub fn screen_size(&self) -> ScreenSize {
        self.screen_size
    }

    pub fn width(&self) -> u32 {
        self.screen_size.0
    }

    pub fn height(&self) -> u32 {
        self.screen_size.1
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable frame buffer access for drawing
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }
}

impl Default for Canvas {
    /// 600x600 with a white background
    fn default() -> Self {
        Self::new((600, 600), Color::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matches_screen_size() {
        let canvas = Canvas::new((320, 240), Color::BLACK);
        assert_eq!(canvas.screen_size(), (320, 240));
        assert_eq!(canvas.surface().dimensions(), (320, 240));
        assert_eq!(canvas.surface().pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_reset_replaces_everything() {
        let mut canvas = Canvas::new((100, 100), Color::WHITE);
        canvas.reset((50, 80), Color::new(1, 2, 3));

        assert_eq!(canvas.screen_size(), (50, 80));
        assert_eq!(canvas.background_color(), Color::new(1, 2, 3));
        assert_eq!(canvas.surface().dimensions(), (50, 80));
        assert_eq!(canvas.surface().pixel(49, 79), Some([1, 2, 3, 255]));
        assert_eq!(canvas.surface().pixel(50, 0), None);
    }

    #[test]
    fn test_clear_restores_background() {
        let mut canvas = Canvas::new((10, 10), Color::new(40, 50, 60));
        canvas.surface_mut().clear(Color::WHITE);
        assert_eq!(canvas.surface().pixel(5, 5), Some([255, 255, 255, 255]));

        canvas.clear();
        assert_eq!(canvas.surface().pixel(5, 5), Some([40, 50, 60, 255]));
    }

    #[test]
    fn test_default_is_600_white() {
        let canvas = Canvas::default();
        assert_eq!(canvas.screen_size(), (600, 600));
        assert_eq!(canvas.background_color(), Color::WHITE);
    }
}
