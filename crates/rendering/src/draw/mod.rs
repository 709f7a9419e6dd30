//! Render orchestrator.
//!
//! Builds one frame from the simulation resources in a fixed layer order:
//! soil, grass, plants, water particles, snow. Drawing only reads the
//! simulation; all animation timers are advanced by the simulation itself.

pub mod layers;
pub mod pose;


use bevy::prelude::*;
use simulation::grass::GrassField;
use simulation::plants::Garden;
use simulation::snow::SnowField;
use simulation::time_of_day::FrameClock;
use simulation::water_particles::WaterParticles;
use simulation::weather::Weather;

use crate::canvas::{upload_canvas, GardenCanvas, PixelCanvas};
use crate::soil::SoilBuffer;
use crate::sprites::SpriteCache;

pub use pose::{plant_pose, state_scale, wind_angle, PlantPose};

/// Read-only view of everything drawn in one frame.
pub struct FrameView<'a> {
    pub garden: &'a Garden,
    pub weather: &'a Weather,
    pub grass: &'a GrassField,
    pub snow: &'a SnowField,
    pub water: &'a WaterParticles,
    /// Time driving the wind sway (ms).
    pub elapsed_ms: f64,
    /// Frame counter driving the grass sway.
    pub frame: u64,
}

pub fn draw_frame(
    canvas: &mut PixelCanvas,
    soil: &PixelCanvas,
    sprites: &SpriteCache,
    view: &FrameView,
) {
    canvas.copy_from(soil);
    layers::draw_grass(canvas, view.grass, view.frame);
    for plant in view.garden.plants() {
        layers::draw_plant(canvas, sprites, plant, view.elapsed_ms);
    }
    layers::draw_water_particles(canvas, view.water);
    layers::draw_snow(canvas, view.weather, view.snow);
}

#[allow(clippy::too_many_arguments)]
pub fn render_garden(
    garden: Res<Garden>,
    weather: Res<Weather>,
    grass: Res<GrassField>,
    snow: Res<SnowField>,
    water: Res<WaterParticles>,
    clock: Res<FrameClock>,
    soil: Res<SoilBuffer>,
    sprites: Res<SpriteCache>,
    mut canvas: ResMut<GardenCanvas>,
    mut images: ResMut<Assets<Image>>,
) {
    let view = FrameView {
        garden: &garden,
        weather: &weather,
        grass: &grass,
        snow: &snow,
        water: &water,
        elapsed_ms: clock.elapsed_ms,
        frame: clock.frame,
    };
    let canvas = &mut *canvas;
    draw_frame(&mut canvas.buffer, &soil.0, &sprites, &view);
    if let Some(image) = images.get_mut(&canvas.image) {
        upload_canvas(&canvas.buffer, image);
    }
}
