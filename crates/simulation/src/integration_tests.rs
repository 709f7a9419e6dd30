//! Integration tests for the garden using the `TestGarden` harness.
//!
//! These tests spin up a headless Bevy App with `SimulationPlugin` and verify
//! behavior across weather, decorations, plant lifecycle, and interaction
//! working together within the same frame loop.

mod interaction_flow;
mod lifecycle_flow;
mod weather_and_snow;

use crate::game_params::GardenParams;

/// Parameters with no spontaneous weather changes.
pub(crate) fn calm_params() -> GardenParams {
    let mut params = GardenParams::default();
    params.weather.snow_start_rate = 0.0;
    params.weather.snow_stop_rate = 0.0;
    params
}
