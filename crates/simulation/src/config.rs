/// Size of one logical pixel-art cell in canvas pixels.
pub const PIXEL_SIZE: f32 = 10.0;
pub const GRID_WIDTH: usize = 60;
pub const GRID_HEIGHT: usize = 40;

/// Canvas dimensions in pixels. All garden coordinates live in this space,
/// origin at the top-left corner with `y` growing downwards.
pub const CANVAS_WIDTH: f32 = GRID_WIDTH as f32 * PIXEL_SIZE;
pub const CANVAS_HEIGHT: f32 = GRID_HEIGHT as f32 * PIXEL_SIZE;

/// Reference frame duration (60 fps) used to convert per-frame rates into
/// per-millisecond rates.
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;
