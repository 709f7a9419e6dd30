//! Fixed 2D view of the garden canvas.
//!
//! The window is exactly the canvas plus a toolbar strip on top. The camera
//! sits at the world origin; the canvas sprite is shifted down by half the
//! toolbar so it fills the area below it.

use bevy::prelude::*;
use simulation::config::{CANVAS_HEIGHT, CANVAS_WIDTH};

use crate::canvas::colors::SOIL_BASE;
use crate::canvas::{create_canvas_image, GardenCanvas, GardenCanvasSprite, PixelCanvas};

/// Height of the egui toolbar above the canvas (logical pixels).
pub const TOOLBAR_HEIGHT: f32 = 44.0;

/// Logical window size that fits the toolbar and the canvas.
pub fn window_size() -> Vec2 {
    Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT + TOOLBAR_HEIGHT)
}

/// World position of the canvas center.
pub fn canvas_center() -> Vec2 {
    Vec2::new(0.0, -TOOLBAR_HEIGHT / 2.0)
}

pub fn setup_garden_view(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    commands.spawn(Camera2d);

    let buffer = PixelCanvas::new(CANVAS_WIDTH as usize, CANVAS_HEIGHT as usize, SOIL_BASE);
    let image = images.add(create_canvas_image(&buffer));
    commands.spawn((
        Sprite::from_image(image.clone()),
        Transform::from_translation(canvas_center().extend(0.0)),
        GardenCanvasSprite,
    ));
    commands.insert_resource(GardenCanvas { buffer, image });
    info!(
        "Garden canvas {}x{} ready",
        CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32
    );
}
