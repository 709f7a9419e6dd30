use bevy::prelude::*;

use crate::game_params::GardenParams;
use crate::sim_rng::SimRng;
use crate::time_of_day::FrameClock;
use crate::weather::Weather;

use super::types::{Garden, PlantDiedEvent};

/// Ages every living plant by the frame delta and reports deaths.
pub fn update_plant_life(
    clock: Res<FrameClock>,
    params: Res<GardenParams>,
    weather: Res<Weather>,
    mut rng: ResMut<SimRng>,
    mut garden: ResMut<Garden>,
    mut died: EventWriter<PlantDiedEvent>,
) {
    for plant in garden.plants_mut() {
        let Some(cause) =
            plant.advance_time(clock.delta_ms, &weather, &params.lifecycle, &mut rng.0)
        else {
            continue;
        };
        info!(
            "{} #{} died ({:?}) at age {:.0} ms",
            plant.species().name(),
            plant.id().0,
            cause,
            plant.age_ms()
        );
        died.send(PlantDiedEvent {
            id: plant.id(),
            species: plant.species(),
            cause,
        });
    }
}

/// Winds down bounce and flash timers. Runs in the update step so that
/// drawing never mutates plants.
pub fn decay_plant_animations(clock: Res<FrameClock>, mut garden: ResMut<Garden>) {
    let delta = clock.delta_ms;
    if delta <= 0.0 {
        return;
    }
    for plant in garden.plants_mut() {
        plant.animation.decay(delta);
    }
}
