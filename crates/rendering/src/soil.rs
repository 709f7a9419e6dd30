//! Static soil texture, generated once from a fixed seed.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use simulation::config::{GRID_HEIGHT, GRID_WIDTH, PIXEL_SIZE};

use crate::canvas::colors::{SOIL_BASE, SOIL_DARK, SOIL_LIGHT};
use crate::canvas::painting::fill_rect;
use crate::canvas::PixelCanvas;

const SOIL_SEED: u64 = 12_345;
/// Share of grid cells that get a darker or lighter shade.
const SHADED_FRACTION: f64 = 0.3;

/// Soil background, copied into the frame buffer at the start of every draw.
#[derive(Resource, Debug, Clone)]
pub struct SoilBuffer(pub PixelCanvas);

impl Default for SoilBuffer {
    fn default() -> Self {
        Self(generate_soil(SOIL_SEED))
    }
}

/// Base brown with random grid cells shaded dark or light.
pub fn generate_soil(seed: u64) -> PixelCanvas {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cell = PIXEL_SIZE as usize;
    let mut soil = PixelCanvas::new(GRID_WIDTH * cell, GRID_HEIGHT * cell, SOIL_BASE);
    for gy in 0..GRID_HEIGHT {
        for gx in 0..GRID_WIDTH {
            if !rng.gen_bool(SHADED_FRACTION) {
                continue;
            }
            let shade = if rng.gen_bool(0.5) { SOIL_DARK } else { SOIL_LIGHT };
            fill_rect(
                &mut soil,
                gx as f32 * PIXEL_SIZE,
                gy as f32 * PIXEL_SIZE,
                PIXEL_SIZE,
                PIXEL_SIZE,
                shade,
                1.0,
            );
        }
    }
    soil
}
