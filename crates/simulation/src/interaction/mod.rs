//! Interaction handler: turns a click plus the active tool into garden
//! mutations.
//!
//! The pure operations ([`plant_seed`], [`water_at`], [`clear_dead_at`],
//! [`apply_click`]) work on a `Garden` directly and report policy no-ops as
//! outcome values. [`handle_garden_clicks`] drains queued [`GardenClick`]
//! events once per frame and adds the cosmetic side effects (splashes,
//! counters, events).

pub mod actions;
pub mod systems;
pub mod types;


pub use actions::{apply_click, clear_dead_at, plant_seed, water_at};
pub use systems::handle_garden_clicks;
pub use types::{ClearOutcome, ClickOutcome, GardenClick, GardenTool, PlantOutcome, WaterOutcome};

use bevy::prelude::*;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GardenTool>()
            .add_event::<GardenClick>()
            .add_systems(
                Update,
                handle_garden_clicks.in_set(crate::GardenSet::Interaction),
            );
    }
}
