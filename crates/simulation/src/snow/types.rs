//! Snow types, constants, and resources.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::config::CANVAS_WIDTH;

// =============================================================================
// Constants
// =============================================================================

/// Angular frequency of the sideways drift (radians per ms of flake age).
pub(crate) const DRIFT_FREQUENCY: f32 = 0.002;

/// Flakes within this horizontal distance of a plant can land on it.
pub(crate) const PLANT_CAPTURE_HALF_WIDTH: f32 = 25.0;

/// The capture band spans from `plant.y - TOP` to `plant.y - BOTTOM`.
pub(crate) const PLANT_CAPTURE_TOP: f32 = 200.0;
pub(crate) const PLANT_CAPTURE_BOTTOM: f32 = 20.0;

/// Flakes lower than `CANVAS_HEIGHT - GROUND_MARGIN` have reached the ground.
pub(crate) const GROUND_MARGIN: f32 = 5.0;

/// Flakes further than this outside the canvas are discarded.
pub(crate) const HORIZONTAL_MARGIN: f32 = 20.0;

/// Deposits fade linearly against this lifetime when drawn.
pub const DEPOSIT_FADE_MS: f64 = 8_000.0;

// =============================================================================
// Particles
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowflake {
    /// Horizontal centre of the drift.
    pub origin_x: f32,
    pub x: f32,
    pub y: f32,
    /// Fall speed (px per second).
    pub speed: f32,
    /// Drift amplitude (px).
    pub amplitude: f32,
    /// Drift phase (radians).
    pub phase: f32,
    pub size: f32,
    pub age_ms: f64,
}

impl Snowflake {
    /// A new flake just above the canvas.
    pub fn random(rng: &mut impl Rng) -> Self {
        let x = rng.gen_range(0.0..CANVAS_WIDTH);
        Self {
            origin_x: x,
            x,
            y: -10.0,
            speed: rng.gen_range(20.0..45.0),
            amplitude: rng.gen_range(10.0..20.0),
            phase: rng.gen_range(0.0..TAU),
            size: rng.gen_range(2.0..4.0),
            age_ms: 0.0,
        }
    }

    /// Move the flake along its path by `delta_ms`.
    pub fn advance(&mut self, delta_ms: f64) {
        self.age_ms += delta_ms;
        self.y += self.speed * (delta_ms as f32) / 1000.0;
        let angle = self.age_ms as f32 * DRIFT_FREQUENCY + self.phase;
        self.x = self.origin_x + self.amplitude * angle.sin();
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnowDeposit {
    pub x: f32,
    pub y: f32,
    /// Remaining lifespan (ms).
    pub life_ms: f64,
}

impl SnowDeposit {
    /// Opacity used when drawing: fades with remaining life, never fully
    /// transparent while alive.
    pub fn alpha(&self) -> f32 {
        ((self.life_ms / DEPOSIT_FADE_MS) as f32).clamp(0.1, 1.0)
    }
}

// =============================================================================
// Resource
// =============================================================================

#[derive(Resource, Debug, Default)]
pub struct SnowField {
    pub flakes: Vec<Snowflake>,
    pub deposits: Vec<SnowDeposit>,
}

impl SnowField {
    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty() && self.deposits.is_empty()
    }
}
