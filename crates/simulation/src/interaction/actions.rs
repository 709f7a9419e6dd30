//! Garden mutations triggered by the player.

use bevy::math::Vec2;
use rand::Rng;

use crate::plants::{Garden, PlantAnimation};
use crate::species::Species;

use super::types::{ClearOutcome, ClickOutcome, GardenTool, PlantOutcome, WaterOutcome};

/// Plant a seed unless another plant is within `radius`.
pub fn plant_seed(
    garden: &mut Garden,
    position: Vec2,
    species: Species,
    radius: f32,
    rng: &mut impl Rng,
) -> PlantOutcome {
    if let Some(existing) = garden.find_at(position, radius) {
        return PlantOutcome::Occupied(existing.id());
    }
    let animation = PlantAnimation::with_random_wind(rng);
    PlantOutcome::Planted(garden.insert(position, species, animation))
}

/// Give one unit of water to the plant under `position`.
///
/// Only the first plant hit is considered: a dead plant on top shields any
/// living plant behind it.
pub fn water_at(garden: &mut Garden, position: Vec2, radius: f32) -> WaterOutcome {
    let Some(id) = garden.find_at(position, radius).map(|p| p.id()) else {
        return WaterOutcome::NoPlant;
    };
    let Some(plant) = garden.get_mut(id) else {
        return WaterOutcome::NoPlant;
    };
    if plant.is_dead() {
        return WaterOutcome::DeadPlant(id);
    }
    plant.animation.start_bounce();
    let result = plant.apply_water();
    WaterOutcome::Watered { id, result }
}

/// Remove the dead plant under `position`.
pub fn clear_dead_at(garden: &mut Garden, position: Vec2, radius: f32) -> ClearOutcome {
    let Some(plant) = garden.find_at(position, radius) else {
        return ClearOutcome::NoPlant;
    };
    let id = plant.id();
    if !plant.is_dead() {
        return ClearOutcome::NotDead(id);
    }
    match garden.remove(id) {
        Some(_) => ClearOutcome::Cleared(id),
        None => ClearOutcome::NoPlant,
    }
}

/// Apply one click with the given tool.
///
/// With a seed selected, a dead plant under the cursor is cleared and a
/// living one blocks planting. With the watering can, the plant is watered.
pub fn apply_click(
    garden: &mut Garden,
    tool: &GardenTool,
    position: Vec2,
    radius: f32,
    rng: &mut impl Rng,
) -> ClickOutcome {
    if tool.watering_can {
        return ClickOutcome::Water(water_at(garden, position, radius));
    }
    match clear_dead_at(garden, position, radius) {
        ClearOutcome::Cleared(id) => ClickOutcome::Clear(ClearOutcome::Cleared(id)),
        ClearOutcome::NotDead(id) => ClickOutcome::Plant(PlantOutcome::Occupied(id)),
        ClearOutcome::NoPlant => ClickOutcome::Plant(plant_seed(
            garden,
            position,
            tool.selected_seed,
            radius,
            rng,
        )),
    }
}
