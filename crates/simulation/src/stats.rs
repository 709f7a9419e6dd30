use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::plants::{DeathCause, PlantDiedEvent};

/// Running garden counters shown by the toolbar.
#[derive(Resource, Default, Debug, Clone, Serialize, Deserialize)]
pub struct GardenStats {
    /// Successful waterings since start.
    pub water_count: u32,
    pub planted: u32,
    pub cleared: u32,
    pub evolutions: u32,
    pub deaths_old_age: u32,
    pub deaths_cold: u32,
}

impl GardenStats {
    pub fn record_death(&mut self, cause: DeathCause) {
        match cause {
            DeathCause::OldAge => self.deaths_old_age += 1,
            DeathCause::Cold => self.deaths_cold += 1,
        }
    }
}

pub fn record_plant_deaths(mut died: EventReader<PlantDiedEvent>, mut stats: ResMut<GardenStats>) {
    for event in died.read() {
        stats.record_death(event.cause);
    }
}

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GardenStats>().add_systems(
            Update,
            record_plant_deaths
                .after(crate::plants::update_plant_life)
                .in_set(crate::GardenSet::Simulation),
        );
    }
}
