//! Plant lifecycle engine.
//!
//! Each plant walks Seed -> Sprout -> Medium -> Bud -> Flower as it is
//! watered, and may die from any state. Only flowers age towards death:
//! they wither after a fixed time in bloom and risk freezing during long
//! snowfalls. Dead plants are inert until the player clears them.

pub mod lifecycle;
pub mod systems;
pub mod types;


pub use lifecycle::WateringResult;
pub use systems::{decay_plant_animations, update_plant_life};
pub use types::{
    DeathCause, Garden, GrowthState, Plant, PlantAnimation, PlantDiedEvent, PlantEvolvedEvent,
    PlantId, BOUNCE_DURATION_MS, EVOLUTION_FLASH_MS,
};

use bevy::prelude::*;

pub struct PlantsPlugin;

impl Plugin for PlantsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Garden>()
            .add_event::<PlantEvolvedEvent>()
            .add_event::<PlantDiedEvent>()
            .add_systems(
                Update,
                update_plant_life
                    .after(crate::weather::update_weather)
                    .in_set(crate::GardenSet::Simulation),
            )
            .add_systems(
                Update,
                decay_plant_animations.in_set(crate::GardenSet::Cosmetic),
            );
    }
}
