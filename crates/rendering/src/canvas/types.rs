use bevy::prelude::*;

/// Straight (non-premultiplied) sRGB color with alpha.
pub type Rgba = [u8; 4];

pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// CPU-side RGBA buffer, row-major, origin at the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize, fill: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// A fully transparent canvas, used for sprites.
    pub fn transparent(width: usize, height: usize) -> Self {
        Self::new(width, height, TRANSPARENT)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub(crate) fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Rgba> {
        if x < self.width && y < self.height {
            Some(&mut self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Overwrite one pixel. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(pixel) = self.get_mut(x as usize, y as usize) {
            *pixel = color;
        }
    }

    /// Whether the pixel exists and is not fully transparent.
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.get(x as usize, y as usize).is_some_and(|p| p[3] > 0)
    }

    /// Overwrite this canvas with `other` (same size).
    pub fn copy_from(&mut self, other: &PixelCanvas) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        self.pixels.copy_from_slice(&other.pixels);
    }
}

/// The frame buffer and the image it is uploaded to.
#[derive(Resource)]
pub struct GardenCanvas {
    pub buffer: PixelCanvas,
    pub image: Handle<Image>,
}

/// Marker for the sprite that displays the garden canvas.
#[derive(Component)]
pub struct GardenCanvasSprite;
