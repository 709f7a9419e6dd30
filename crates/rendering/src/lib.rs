use bevy::prelude::*;

pub mod camera;
pub mod canvas;
pub mod draw;
pub mod input;
pub mod soil;
pub mod sprites;

mod plugin_registration;

use soil::SoilBuffer;
use sprites::SpriteCache;

/// Draws the garden into a pixel canvas each frame and turns canvas clicks
/// into `GardenClick` events.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoilBuffer>()
            .init_resource::<SpriteCache>();
        plugin_registration::register_rendering_systems(app);
    }
}
