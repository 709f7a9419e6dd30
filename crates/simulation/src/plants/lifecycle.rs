//! Growth and aging rules for a single plant.

use rand::Rng;

use crate::game_params::LifecycleParams;
use crate::weather::Weather;

use super::types::{DeathCause, GrowthState, Plant};

/// Result of giving a plant one unit of water.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WateringResult {
    /// The plant is dead; nothing happened.
    Inert,
    /// Water was absorbed without reaching the threshold.
    Absorbed,
    Evolved { from: GrowthState, to: GrowthState },
}

impl WateringResult {
    pub fn evolved(&self) -> bool {
        matches!(self, WateringResult::Evolved { .. })
    }
}

impl Plant {
    /// Add one unit of water, then try to evolve.
    pub fn apply_water(&mut self) -> WateringResult {
        if self.is_dead() {
            return WateringResult::Inert;
        }
        self.water_level = self.water_level.saturating_add(1);
        let from = self.growth_state;
        if self.try_evolve() {
            WateringResult::Evolved {
                from,
                to: self.growth_state,
            }
        } else {
            WateringResult::Absorbed
        }
    }

    /// Move to the next growth state if the current threshold is met.
    ///
    /// Resets the water level on success. Entering Flower also restarts the
    /// bloom clock. Flower and Dead never evolve.
    pub fn try_evolve(&mut self) -> bool {
        let (Some(stage), Some(next)) = (self.growth_state.stage_index(), self.growth_state.next())
        else {
            return false;
        };
        if self.water_level < self.water_thresholds[stage] {
            return false;
        }
        self.growth_state = next;
        self.water_level = 0;
        if next == GrowthState::Flower {
            self.time_in_flower_ms = 0.0;
        }
        self.animation.start_flash();
        true
    }

    /// Age the plant by `delta_ms`. Returns the cause if it died this tick.
    ///
    /// A freeze roll happens each time exposure passes
    /// `freeze_check_interval_ms`, keeping the remainder. A large delta that
    /// passes it `n` times dies with the same odds as `n` separate rolls.
    pub fn advance_time(
        &mut self,
        delta_ms: f64,
        weather: &Weather,
        params: &LifecycleParams,
        rng: &mut impl Rng,
    ) -> Option<DeathCause> {
        if self.is_dead() {
            return None;
        }
        self.age_ms += delta_ms;

        if self.growth_state != GrowthState::Flower {
            return None;
        }

        self.time_in_flower_ms += delta_ms;
        if self.time_in_flower_ms > params.flower_max_lifespan_ms {
            self.mark_dead(DeathCause::OldAge);
            return Some(DeathCause::OldAge);
        }

        if !weather.cold_stress_active(params.cold_snow_threshold_ms) {
            self.freeze_exposure_ms = 0.0;
            return None;
        }

        self.freeze_exposure_ms += delta_ms;
        let interval = params.freeze_check_interval_ms;
        if !(interval > 0.0) || self.freeze_exposure_ms <= interval {
            return None;
        }
        let rolls = (self.freeze_exposure_ms / interval).ceil() - 1.0;
        self.freeze_exposure_ms = (self.freeze_exposure_ms - rolls * interval).max(0.0);
        if rng.gen::<f64>() < freeze_chance(params.freeze_death_chance, rolls) {
            self.mark_dead(DeathCause::Cold);
            return Some(DeathCause::Cold);
        }
        None
    }

    /// Kill the plant. The first cause recorded wins; returns `false` if the
    /// plant was already dead.
    pub fn mark_dead(&mut self, cause: DeathCause) -> bool {
        if self.is_dead() {
            return false;
        }
        self.growth_state = GrowthState::Dead;
        self.death_cause = Some(cause);
        self.freeze_exposure_ms = 0.0;
        self.animation.bounce_ms = 0.0;
        self.animation.flash_ms = 0.0;
        true
    }
}

/// Chance that at least one of `rolls` independent freeze rolls kills.
fn freeze_chance(chance: f64, rolls: f64) -> f64 {
    1.0 - (1.0 - chance).powf(rolls)
}
