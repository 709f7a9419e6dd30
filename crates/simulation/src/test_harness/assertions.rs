//! Assertion helpers for `TestGarden` integration tests.

use crate::plants::{DeathCause, GrowthState, PlantId};

use super::TestGarden;

impl TestGarden {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    /// Assert the plant exists and is in `state`.
    pub fn assert_state(&self, id: PlantId, state: GrowthState) {
        let plant = self
            .plant(id)
            .unwrap_or_else(|| panic!("plant #{} does not exist", id.0));
        assert_eq!(
            plant.growth_state(),
            state,
            "plant #{} expected {:?}, got {:?}",
            id.0,
            state,
            plant.growth_state()
        );
    }

    /// Assert the plant is dead of `cause`.
    pub fn assert_dead_of(&self, id: PlantId, cause: DeathCause) {
        self.assert_state(id, GrowthState::Dead);
        assert_eq!(self.plant(id).and_then(|p| p.death_cause()), Some(cause));
    }

    /// Assert every population stays within its configured cap.
    pub fn assert_within_caps(&self) {
        let params = self.resource::<crate::game_params::GardenParams>();
        let grass = self.grass().len();
        let deposits = self.snow().deposits.len();
        assert!(
            grass <= params.decorations.max_grass_blades,
            "grass {grass} exceeds cap {}",
            params.decorations.max_grass_blades
        );
        assert!(
            deposits <= params.decorations.max_snow_deposits,
            "snow deposits {deposits} exceed cap {}",
            params.decorations.max_snow_deposits
        );
    }
}
