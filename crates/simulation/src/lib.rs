use bevy::prelude::*;

pub mod config;
pub mod game_params;
pub mod grass;
pub mod interaction;
pub mod plants;
pub mod sim_rng;
pub mod simulation_sets;
pub mod snow;
pub mod species;
pub mod stats;
pub mod time_of_day;
pub mod water_particles;
pub mod weather;

mod plugin_registration;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use simulation_sets::GardenSet;

/// Everything the garden needs to run headless: resources, events, and the
/// per-frame update systems. Rendering and UI are added by their own crates.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                GardenSet::Simulation,
                GardenSet::Interaction,
                GardenSet::Cosmetic,
            )
                .chain(),
        );

        plugin_registration::register_feature_plugins(app);
    }
}
