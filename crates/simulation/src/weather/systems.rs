use bevy::prelude::*;
use rand::Rng;

use crate::game_params::{GardenParams, WeatherParams};
use crate::sim_rng::{hazard_probability, SimRng};
use crate::time_of_day::FrameClock;

use super::types::{Weather, WeatherChangeEvent, WeatherState};

/// Advance the weather by `delta_ms`, possibly switching state.
///
/// Snow may only stop once `time_in_state_ms` exceeds the minimum duration;
/// only the part of `delta_ms` spent past that point counts towards the
/// stop roll.
pub fn step_weather(
    weather: &mut Weather,
    delta_ms: f64,
    params: &WeatherParams,
    rng: &mut impl Rng,
) -> Option<WeatherChangeEvent> {
    weather.time_in_state_ms += delta_ms;
    match weather.state {
        WeatherState::Clear => {
            let p = hazard_probability(params.snow_start_rate, delta_ms);
            if rng.gen::<f64>() < p {
                return weather.transition_to(WeatherState::Snowing);
            }
        }
        WeatherState::Snowing => {
            weather.snow_duration_ms += delta_ms;
            let overshoot = weather.time_in_state_ms - params.snow_min_duration_ms;
            if overshoot > 0.0 {
                let eligible_ms = overshoot.min(delta_ms);
                let p = hazard_probability(params.snow_stop_rate, eligible_ms);
                if rng.gen::<f64>() < p {
                    return weather.transition_to(WeatherState::Clear);
                }
            }
        }
    }
    None
}

pub fn update_weather(
    clock: Res<FrameClock>,
    params: Res<GardenParams>,
    mut rng: ResMut<SimRng>,
    mut weather: ResMut<Weather>,
    mut change_events: EventWriter<WeatherChangeEvent>,
) {
    if let Some(change) = step_weather(&mut weather, clock.delta_ms, &params.weather, &mut rng.0) {
        info!(
            "Weather changed: {} -> {}",
            change.old_state.name(),
            change.new_state.name()
        );
        change_events.send(change);
    }
}
