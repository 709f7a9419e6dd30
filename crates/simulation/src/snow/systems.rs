//! Snowflake motion, capture, and deposit decay.

use bevy::prelude::*;
use rand::Rng;

use crate::config::CANVAS_HEIGHT;
use crate::config::CANVAS_WIDTH;
use crate::game_params::{DecorationParams, GardenParams};
use crate::plants::{Garden, Plant};
use crate::sim_rng::SimRng;
use crate::time_of_day::FrameClock;
use crate::weather::Weather;

use super::types::{
    SnowDeposit, SnowField, Snowflake, GROUND_MARGIN, HORIZONTAL_MARGIN, PLANT_CAPTURE_BOTTOM,
    PLANT_CAPTURE_HALF_WIDTH, PLANT_CAPTURE_TOP,
};

/// What happens to a flake after it moved this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlakeFate {
    Falling,
    /// Landed on the plant at this position.
    OnPlant(Vec2),
    OnGround,
    OutOfBounds,
}

// =============================================================================
// Pure helper functions (testable without ECS)
// =============================================================================

/// Decide a flake's fate. Plants only catch snow while it is still snowing,
/// and dead plants never do. Plants are checked before the ground.
pub fn flake_fate(flake: &Snowflake, snowing: bool, plants: &[Plant]) -> FlakeFate {
    if snowing {
        let caught_by = plants.iter().filter(|p| !p.is_dead()).find(|p| {
            let pos = p.position();
            (flake.x - pos.x).abs() < PLANT_CAPTURE_HALF_WIDTH
                && flake.y > pos.y - PLANT_CAPTURE_TOP
                && flake.y < pos.y - PLANT_CAPTURE_BOTTOM
        });
        if let Some(plant) = caught_by {
            return FlakeFate::OnPlant(plant.position());
        }
    }
    if flake.y > CANVAS_HEIGHT - GROUND_MARGIN {
        FlakeFate::OnGround
    } else if flake.x < -HORIZONTAL_MARGIN || flake.x > CANVAS_WIDTH + HORIZONTAL_MARGIN {
        FlakeFate::OutOfBounds
    } else {
        FlakeFate::Falling
    }
}

fn deposit_on_plant(plant: Vec2, rng: &mut impl Rng) -> SnowDeposit {
    SnowDeposit {
        x: plant.x + rng.gen_range(-10.0..10.0),
        y: plant.y - rng.gen_range(20.0..140.0),
        life_ms: rng.gen_range(5_000.0..9_000.0),
    }
}

fn deposit_on_ground(x: f32, rng: &mut impl Rng) -> SnowDeposit {
    SnowDeposit {
        x,
        y: CANVAS_HEIGHT - 6.0 - rng.gen_range(0.0..4.0),
        life_ms: rng.gen_range(8_000.0..12_000.0),
    }
}

impl SnowField {
    /// One tick of the snow simulation: spawn, move and resolve flakes, then
    /// age deposits. Deposits past the cap are dropped, but the flake that
    /// would have made them is still consumed.
    pub fn update(
        &mut self,
        delta_ms: f64,
        weather: &Weather,
        plants: &[Plant],
        params: &DecorationParams,
        rng: &mut impl Rng,
    ) {
        let snowing = weather.is_snowing();
        if snowing && rng.gen::<f64>() < params.snowflake_spawn_chance {
            self.flakes.push(Snowflake::random(rng));
        }

        let SnowField { flakes, deposits } = self;
        let cap = params.max_snow_deposits;
        flakes.retain_mut(|flake| {
            flake.advance(delta_ms);
            match flake_fate(flake, snowing, plants) {
                FlakeFate::Falling => true,
                FlakeFate::OnPlant(pos) => {
                    if deposits.len() < cap {
                        deposits.push(deposit_on_plant(pos, rng));
                    }
                    false
                }
                FlakeFate::OnGround => {
                    if deposits.len() < cap {
                        deposits.push(deposit_on_ground(flake.x, rng));
                    }
                    false
                }
                FlakeFate::OutOfBounds => false,
            }
        });

        deposits.retain_mut(|deposit| {
            deposit.life_ms -= delta_ms;
            deposit.life_ms > 0.0
        });
    }
}

// =============================================================================
// Systems
// =============================================================================

pub fn update_snow(
    clock: Res<FrameClock>,
    params: Res<GardenParams>,
    weather: Res<Weather>,
    garden: Res<Garden>,
    mut rng: ResMut<SimRng>,
    mut snow: ResMut<SnowField>,
) {
    snow.update(
        clock.delta_ms,
        &weather,
        garden.plants(),
        &params.decorations,
        &mut rng.0,
    );
}
