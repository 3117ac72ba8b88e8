//! CPU pixel surface for software compositing
//!
//! The canvas and every character image are plain RGBA buffers; the engine
//! uploads the canvas surface to a texture once per frame for display.

use std::fmt;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use crate::color::Color;

/// Failure to resolve a sprite reference.
///
/// Raised at character construction; there is no fallback path, a bad
/// reference aborts the build.
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteError {
    /// The referenced file could not be opened or decoded
    Load { path: PathBuf, reason: String },
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteError::Load { path, reason } => {
                write!(f, "failed to load sprite {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for SpriteError {}

/// An owned RGBA pixel buffer
#[derive(Debug)]
pub struct Surface {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: u32,
    pub height: u32,
}

impl Surface {
    /// Allocate a surface filled with a solid color
    pub fn new(width: u32, height: u32, color: Color) -> Self {
        let mut surface = Self {
            pixels: vec![0; (width * height * 4) as usize],
            width,
            height,
        };
        surface.clear(color);
        surface
    }

    /// Load an image file at its native dimensions.
    ///
    /// Any open or decode failure surfaces as a `SpriteError`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SpriteError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|e| SpriteError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_rgba_image(img.to_rgba8()))
    }

    /// Load an image file and scale it to exact dimensions.
    ///
    /// Nearest-neighbour sampling keeps pixel-art sprites crisp.
    pub fn from_file_scaled<P: AsRef<Path>>(
        path: P,
        width: u32,
        height: u32,
    ) -> Result<Self, SpriteError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|e| SpriteError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let img = img.resize_exact(width, height, FilterType::Nearest);
        Ok(Self::from_rgba_image(img.to_rgba8()))
    }

    fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            pixels: img.into_raw(),
            width,
            height,
        }
    }

    /// Surface dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Fill every pixel with a solid color
    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&bytes);
        }
    }

    /// Composite another surface at a signed position.
    ///
    /// Pixels falling outside this surface are clipped; source pixels with
    /// alpha 0 are skipped (alpha acts as a color key, not a blend).
    pub fn blit(&mut self, src: &Surface, x: i32, y: i32) {
        for sy in 0..src.height as i32 {
            let dy = y + sy;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..src.width as i32 {
                let dx = x + sx;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                let si = ((sy * src.width as i32 + sx) * 4) as usize;
                if src.pixels[si + 3] == 0 {
                    continue;
                }
                let di = ((dy * self.width as i32 + dx) * 4) as usize;
                self.pixels[di..di + 4].copy_from_slice(&src.pixels[si..si + 4]);
            }
        }
    }

    /// Read back a single pixel (None outside the surface)
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }
}
