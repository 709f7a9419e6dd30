use bevy::prelude::*;

use crate::*;

/// Register all garden feature plugins.
///
/// Resources that other plugins read at startup (`SimRng`, `GardenParams`)
/// come first.
pub(crate) fn register_feature_plugins(app: &mut App) {
    // Shared resources
    app.add_plugins(sim_rng::SimRngPlugin);
    app.add_plugins(game_params::GameParamsPlugin);
    app.add_plugins(time_of_day::TimeOfDayPlugin);

    // Simulation
    app.add_plugins(weather::WeatherPlugin);
    app.add_plugins(grass::GrassPlugin);
    app.add_plugins(snow::SnowPlugin);
    app.add_plugins(plants::PlantsPlugin);
    app.add_plugins(stats::StatsPlugin);

    // Player input and cosmetics
    app.add_plugins(interaction::InteractionPlugin);
    app.add_plugins(water_particles::WaterParticlesPlugin);
}
