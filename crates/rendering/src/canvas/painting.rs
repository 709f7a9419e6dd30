//! Primitive drawing operations on a `PixelCanvas`.

use super::types::{PixelCanvas, Rgba};

/// Source-over blend of `src` (with its alpha scaled by `opacity`) onto `dst`.
pub fn blend(dst: Rgba, src: Rgba, opacity: f32) -> Rgba {
    let a = (src[3] as f32 / 255.0) * opacity.clamp(0.0, 1.0);
    if a <= 0.0 {
        return dst;
    }
    let mix = |d: u8, s: u8| (s as f32 * a + d as f32 * (1.0 - a)).round() as u8;
    let out_a = a + (dst[3] as f32 / 255.0) * (1.0 - a);
    [
        mix(dst[0], src[0]),
        mix(dst[1], src[1]),
        mix(dst[2], src[2]),
        (out_a * 255.0).round() as u8,
    ]
}

/// Fill the axis-aligned rectangle covering `[x, x + w) x [y, y + h)`,
/// clipped to the canvas. Fractional edges snap to whole pixels.
pub fn fill_rect(canvas: &mut PixelCanvas, x: f32, y: f32, w: f32, h: f32, color: Rgba, opacity: f32) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let x0 = x.floor().max(0.0) as i64;
    let y0 = y.floor().max(0.0) as i64;
    let x1 = ((x + w).ceil() as i64).min(canvas.width() as i64);
    let y1 = ((y + h).ceil() as i64).min(canvas.height() as i64);
    for py in y0..y1 {
        for px in x0..x1 {
            if let Some(pixel) = canvas.get_mut(px as usize, py as usize) {
                *pixel = blend(*pixel, color, opacity);
            }
        }
    }
}

/// One-pixel rectangle outline.
pub fn stroke_rect(canvas: &mut PixelCanvas, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
    fill_rect(canvas, x, y, w, 1.0, color, 1.0);
    fill_rect(canvas, x, y + h - 1.0, w, 1.0, color, 1.0);
    fill_rect(canvas, x, y + 1.0, 1.0, h - 2.0, color, 1.0);
    fill_rect(canvas, x + w - 1.0, y + 1.0, 1.0, h - 2.0, color, 1.0);
}

/// Blend `color` over the whole canvas.
pub fn tint(canvas: &mut PixelCanvas, color: Rgba) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    fill_rect(canvas, 0.0, 0.0, w, h, color, 1.0);
}
