//! Conversion between the pixel canvas and Bevy images.

use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use super::types::PixelCanvas;

/// Create an RGBA image matching `canvas`, filled with its current pixels.
pub fn create_canvas_image(canvas: &PixelCanvas) -> Image {
    let mut image = Image::new(
        Extent3d {
            width: canvas.width() as u32,
            height: canvas.height() as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        canvas.pixels().concat(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    image.sampler = ImageSampler::nearest();
    image
}

/// Copy `canvas` into an image created by [`create_canvas_image`].
pub fn upload_canvas(canvas: &PixelCanvas, image: &mut Image) {
    let expected = canvas.width() * canvas.height() * 4;
    if image.data.len() != expected {
        warn!(
            "Canvas image has {} bytes, expected {}; skipping upload",
            image.data.len(),
            expected
        );
        return;
    }
    for (dst, src) in image.data.chunks_exact_mut(4).zip(canvas.pixels()) {
        dst.copy_from_slice(src);
    }
}
