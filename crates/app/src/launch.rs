//! Launch options read from the environment.
//!
//! - `PIXEL_GARDEN_PARAMS`: path to a JSON parameter override
//! - `PIXEL_GARDEN_SEED`: RNG seed (u64)
//! - `PIXEL_GARDEN_SCREENSHOT`: save one screenshot to this path and exit

use bevy::prelude::*;
use simulation::game_params::GardenParams;

pub const PARAMS_VAR: &str = "PIXEL_GARDEN_PARAMS";
pub const SEED_VAR: &str = "PIXEL_GARDEN_SEED";
pub const SCREENSHOT_VAR: &str = "PIXEL_GARDEN_SCREENSHOT";

/// Parameters from the override file, or defaults if it is unset or broken.
pub fn params_from(path: Option<String>) -> GardenParams {
    let Some(path) = path else {
        return GardenParams::default();
    };
    match GardenParams::load(&path) {
        Ok(params) => {
            info!("Loaded garden parameters from {path}");
            params
        }
        Err(e) => {
            warn!("Ignoring {PARAMS_VAR}={path}: {e}; using defaults");
            GardenParams::default()
        }
    }
}

/// Parsed seed, or `None` if it is unset or not a number.
pub fn seed_from(value: Option<String>) -> Option<u64> {
    let value = value?;
    match value.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(e) => {
            warn!("Ignoring {SEED_VAR}={value}: {e}");
            None
        }
    }
}
