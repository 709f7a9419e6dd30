use bevy::prelude::*;

use crate::game_params::GardenParams;
use crate::plants::{Garden, PlantEvolvedEvent, WateringResult};
use crate::sim_rng::SimRng;
use crate::stats::GardenStats;
use crate::water_particles::WaterParticles;

use super::actions::apply_click;
use super::types::{ClearOutcome, ClickOutcome, GardenClick, GardenTool, PlantOutcome, WaterOutcome};

/// Splash drops when watering.
const WATER_SPLASH: usize = 10;
/// Extra drops when a plant evolves.
const CELEBRATION_SPLASH: usize = 15;
/// Drops when a seed goes into the ground.
const PLANTING_SPLASH: usize = 5;

/// Applies every click queued since the last frame, in order.
#[allow(clippy::too_many_arguments)]
pub fn handle_garden_clicks(
    mut clicks: EventReader<GardenClick>,
    tool: Res<GardenTool>,
    params: Res<GardenParams>,
    mut garden: ResMut<Garden>,
    mut rng: ResMut<SimRng>,
    mut stats: ResMut<GardenStats>,
    mut water: ResMut<WaterParticles>,
    mut evolved: EventWriter<PlantEvolvedEvent>,
) {
    for click in clicks.read() {
        let at = click.position;
        let outcome = apply_click(&mut garden, &tool, at, params.hit_radius, &mut rng.0);
        match outcome {
            ClickOutcome::Plant(PlantOutcome::Planted(id)) => {
                stats.planted += 1;
                water.spawn(at.x, at.y, PLANTING_SPLASH, false, &mut rng.0);
                debug!("Planted {} #{}", tool.selected_seed.name(), id.0);
            }
            ClickOutcome::Clear(ClearOutcome::Cleared(id)) => {
                stats.cleared += 1;
                debug!("Cleared dead plant #{}", id.0);
            }
            ClickOutcome::Water(WaterOutcome::Watered { id, result }) => {
                stats.water_count += 1;
                water.spawn(at.x, at.y - 20.0, WATER_SPLASH, false, &mut rng.0);
                if let WateringResult::Evolved { from, to } = result {
                    stats.evolutions += 1;
                    water.spawn(at.x, at.y - 30.0, CELEBRATION_SPLASH, true, &mut rng.0);
                    debug!("Plant #{} evolved {} -> {}", id.0, from.name(), to.name());
                    evolved.send(PlantEvolvedEvent { id, from, to });
                }
            }
            other => debug!("Click at ({:.0}, {:.0}) ignored: {:?}", at.x, at.y, other),
        }
    }
}
