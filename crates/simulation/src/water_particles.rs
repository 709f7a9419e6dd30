//! Splash particles spawned by planting and watering.
//!
//! Purely cosmetic. Motion is expressed per reference frame (60 fps) and
//! scaled by the real frame delta, so a slow frame moves particles further
//! instead of slowing them down.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{CANVAS_HEIGHT, REFERENCE_FRAME_MS};
use crate::time_of_day::FrameClock;

/// Number of water colors. Regular splashes use the first two.
pub const WATER_COLOR_COUNT: usize = 4;
const REGULAR_COLOR_COUNT: usize = 2;

/// Opacity lost per reference frame.
const FADE_PER_FRAME: f32 = 0.015;
/// Size multiplier per reference frame.
const SHRINK_PER_FRAME: f32 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterParticle {
    pub x: f32,
    pub y: f32,
    /// Fall speed (px per reference frame).
    pub velocity: f32,
    /// Sideways speed (px per reference frame).
    pub horizontal_velocity: f32,
    pub opacity: f32,
    pub size: f32,
    pub color_index: usize,
    pub celebration: bool,
}

impl WaterParticle {
    pub fn random(x: f32, y: f32, celebration: bool, rng: &mut impl Rng) -> Self {
        let (spread, base_speed, extra_speed, base_size, colors) = if celebration {
            (30.0, 1.5, 3.0, 6.0, WATER_COLOR_COUNT)
        } else {
            (20.0, 2.0, 2.0, 4.0, REGULAR_COLOR_COUNT)
        };
        Self {
            x: x + (rng.gen::<f32>() - 0.5) * spread,
            y: y - 10.0 + rng.gen::<f32>() * 10.0,
            velocity: base_speed + rng.gen::<f32>() * extra_speed,
            horizontal_velocity: (rng.gen::<f32>() - 0.5) * 0.5,
            opacity: 0.7 + rng.gen::<f32>() * 0.3,
            size: base_size + rng.gen::<f32>() * base_size,
            color_index: rng.gen_range(0..colors),
            celebration,
        }
    }

    /// Advance by `frames` reference frames. Returns `false` once the
    /// particle is no longer visible.
    fn step(&mut self, frames: f32) -> bool {
        self.y += self.velocity * frames;
        self.x += self.horizontal_velocity * frames;
        self.opacity -= FADE_PER_FRAME * frames;
        self.size *= SHRINK_PER_FRAME.powf(frames);
        self.opacity > 0.0 && self.y <= CANVAS_HEIGHT && self.size >= 1.0
    }
}

#[derive(Resource, Debug, Default)]
pub struct WaterParticles {
    pub particles: Vec<WaterParticle>,
}

impl WaterParticles {
    pub fn spawn(&mut self, x: f32, y: f32, count: usize, celebration: bool, rng: &mut impl Rng) {
        self.particles
            .extend((0..count).map(|_| WaterParticle::random(x, y, celebration, rng)));
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn update(&mut self, delta_ms: f64) {
        if delta_ms <= 0.0 {
            return;
        }
        let frames = (delta_ms / REFERENCE_FRAME_MS) as f32;
        self.particles.retain_mut(|p| p.step(frames));
    }
}

pub fn update_water_particles(clock: Res<FrameClock>, mut water: ResMut<WaterParticles>) {
    water.update(clock.delta_ms);
}

pub struct WaterParticlesPlugin;

impl Plugin for WaterParticlesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WaterParticles>().add_systems(
            Update,
            update_water_particles.in_set(crate::GardenSet::Cosmetic),
        );
    }
}
