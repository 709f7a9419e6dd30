//! Global weather state machine (clear <-> snowing).
//!
//! Snow starts with a small constant hazard rate while the sky is clear and,
//! once it has lasted the minimum duration, stops with a larger hazard rate.
//! `Weather::snow_duration_ms` is consumed by the plant lifecycle's cold check.

pub mod systems;
pub mod types;


pub use systems::{step_weather, update_weather};
pub use types::{Weather, WeatherChangeEvent, WeatherState};

use bevy::prelude::*;

pub struct WeatherPlugin;

impl Plugin for WeatherPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Weather>()
            .add_event::<WeatherChangeEvent>()
            .add_systems(
                Update,
                update_weather.in_set(crate::GardenSet::Simulation),
            );
    }
}
