//! Software pixel canvas.
//!
//! The garden is drawn into a CPU-side RGBA buffer the size of the logical
//! canvas, then copied into a Bevy `Image` shown by a single sprite. Nearest
//! sampling keeps the pixel-art edges crisp.

pub mod colors;
pub mod image;
pub mod painting;
pub mod types;


pub use image::{create_canvas_image, upload_canvas};
pub use types::{GardenCanvas, GardenCanvasSprite, PixelCanvas, Rgba, TRANSPARENT};
