use bevy::prelude::*;

use crate::plants::{PlantId, WateringResult};
use crate::species::Species;

/// The tool the player currently holds.
///
/// Picking a seed puts the watering can away; toggling the can keeps the
/// last selected seed.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GardenTool {
    pub selected_seed: Species,
    pub watering_can: bool,
}

impl Default for GardenTool {
    fn default() -> Self {
        Self {
            selected_seed: Species::Lily,
            watering_can: false,
        }
    }
}

impl GardenTool {
    pub fn select_seed(&mut self, species: Species) {
        self.selected_seed = species;
        self.watering_can = false;
    }

    pub fn toggle_watering_can(&mut self) {
        self.watering_can = !self.watering_can;
    }
}

/// A left click on the garden, in canvas coordinates.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GardenClick {
    pub position: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantOutcome {
    Planted(PlantId),
    /// A plant already sits within the hit radius.
    Occupied(PlantId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterOutcome {
    NoPlant,
    /// The plant under the cursor is dead and ignores water.
    DeadPlant(PlantId),
    Watered { id: PlantId, result: WateringResult },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared(PlantId),
    NoPlant,
    /// Living plants cannot be cleared.
    NotDead(PlantId),
}

/// What a click did with the active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Plant(PlantOutcome),
    Clear(ClearOutcome),
    Water(WaterOutcome),
}
