use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::species::Species;

/// Stable identifier of a plant, unique for the lifetime of a garden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlantId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthState {
    Seed,
    Sprout,
    Medium,
    Bud,
    Flower,
    Dead,
}

impl GrowthState {
    /// Index into the water thresholds for states that can still grow.
    pub fn stage_index(self) -> Option<usize> {
        match self {
            GrowthState::Seed => Some(0),
            GrowthState::Sprout => Some(1),
            GrowthState::Medium => Some(2),
            GrowthState::Bud => Some(3),
            GrowthState::Flower | GrowthState::Dead => None,
        }
    }

    /// Next state reached by watering; `None` for Flower and Dead.
    pub fn next(self) -> Option<GrowthState> {
        match self {
            GrowthState::Seed => Some(GrowthState::Sprout),
            GrowthState::Sprout => Some(GrowthState::Medium),
            GrowthState::Medium => Some(GrowthState::Bud),
            GrowthState::Bud => Some(GrowthState::Flower),
            GrowthState::Flower | GrowthState::Dead => None,
        }
    }

    pub fn is_alive(self) -> bool {
        self != GrowthState::Dead
    }

    pub fn name(self) -> &'static str {
        match self {
            GrowthState::Seed => "Seed",
            GrowthState::Sprout => "Sprout",
            GrowthState::Medium => "Medium",
            GrowthState::Bud => "Bud",
            GrowthState::Flower => "Flower",
            GrowthState::Dead => "Dead",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    OldAge,
    Cold,
}

/// Bounce after watering: six reference frames.
pub const BOUNCE_DURATION_MS: f64 = 100.0;
/// Flash after evolving: ten reference frames.
pub const EVOLUTION_FLASH_MS: f64 = 1000.0 / 6.0;

/// Cosmetic animation state. Never read by the simulation itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlantAnimation {
    /// Remaining bounce time (ms).
    pub bounce_ms: f64,
    /// Remaining evolution-flash time (ms).
    pub flash_ms: f64,
    /// Peak sway angle in degrees.
    pub wind_amplitude_deg: f32,
    /// Sway period in seconds.
    pub wind_period_s: f32,
}

impl PlantAnimation {
    /// Calm animation with a randomized sway (2-3 degrees, 3-4 s period).
    pub fn with_random_wind(rng: &mut impl Rng) -> Self {
        Self {
            wind_amplitude_deg: rng.gen_range(2.0..3.0),
            wind_period_s: rng.gen_range(3.0..4.0),
            ..Default::default()
        }
    }

    pub fn start_bounce(&mut self) {
        self.bounce_ms = BOUNCE_DURATION_MS;
    }

    pub fn start_flash(&mut self) {
        self.flash_ms = EVOLUTION_FLASH_MS;
    }

    pub fn decay(&mut self, delta_ms: f64) {
        self.bounce_ms = (self.bounce_ms - delta_ms).max(0.0);
        self.flash_ms = (self.flash_ms - delta_ms).max(0.0);
    }
}

/// One garden entity.
///
/// Simulation fields are private: growth only moves forward through the
/// lifecycle methods, and `position`/`species` never change after creation.
#[derive(Debug, Clone)]
pub struct Plant {
    pub(super) id: PlantId,
    pub(super) position: Vec2,
    pub(super) species: Species,
    pub(super) growth_state: GrowthState,
    pub(super) water_level: u32,
    pub(super) water_thresholds: [u32; 4],
    pub(super) age_ms: f64,
    pub(super) time_in_flower_ms: f64,
    pub(super) freeze_exposure_ms: f64,
    pub(super) death_cause: Option<DeathCause>,
    pub animation: PlantAnimation,
}

impl Plant {
    /// A new seed using the species' water thresholds.
    pub fn new(id: PlantId, position: Vec2, species: Species) -> Self {
        Self::with_thresholds(id, position, species, species.water_thresholds())
    }

    /// A new seed with explicit thresholds (copied into the plant).
    pub fn with_thresholds(
        id: PlantId,
        position: Vec2,
        species: Species,
        water_thresholds: [u32; 4],
    ) -> Self {
        Self {
            id,
            position,
            species,
            growth_state: GrowthState::Seed,
            water_level: 0,
            water_thresholds,
            age_ms: 0.0,
            time_in_flower_ms: 0.0,
            freeze_exposure_ms: 0.0,
            death_cause: None,
            animation: PlantAnimation::default(),
        }
    }

    pub fn with_animation(mut self, animation: PlantAnimation) -> Self {
        self.animation = animation;
        self
    }

    pub fn id(&self) -> PlantId {
        self.id
    }
    pub fn position(&self) -> Vec2 {
        self.position
    }
    pub fn species(&self) -> Species {
        self.species
    }
    pub fn growth_state(&self) -> GrowthState {
        self.growth_state
    }
    pub fn water_level(&self) -> u32 {
        self.water_level
    }
    pub fn water_thresholds(&self) -> [u32; 4] {
        self.water_thresholds
    }
    pub fn age_ms(&self) -> f64 {
        self.age_ms
    }
    pub fn time_in_flower_ms(&self) -> f64 {
        self.time_in_flower_ms
    }
    pub fn freeze_exposure_ms(&self) -> f64 {
        self.freeze_exposure_ms
    }
    pub fn death_cause(&self) -> Option<DeathCause> {
        self.death_cause
    }

    pub fn is_dead(&self) -> bool {
        self.growth_state == GrowthState::Dead
    }

    /// Water needed to leave the current state, if it can still grow.
    pub fn water_needed(&self) -> Option<u32> {
        self.growth_state
            .stage_index()
            .map(|i| self.water_thresholds[i])
    }
}

/// The ordered plant list plus its id allocator.
#[derive(Resource, Debug, Default)]
pub struct Garden {
    plants: Vec<Plant>,
    next_id: u64,
}

impl Garden {
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Mutable access to existing plants. Plants can only be added through
    /// [`Garden::insert`] and removed by the interaction handler.
    pub fn plants_mut(&mut self) -> &mut [Plant] {
        &mut self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn living_count(&self) -> usize {
        self.plants.iter().filter(|p| !p.is_dead()).count()
    }

    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PlantId) -> Option<&mut Plant> {
        self.plants.iter_mut().find(|p| p.id == id)
    }

    /// Allocate an id and append a new seed.
    pub fn insert(
        &mut self,
        position: Vec2,
        species: Species,
        animation: PlantAnimation,
    ) -> PlantId {
        let id = PlantId(self.next_id);
        self.next_id += 1;
        self.plants
            .push(Plant::new(id, position, species).with_animation(animation));
        id
    }

    /// First plant (in planting order) strictly within `radius` of `position`.
    pub fn find_at(&self, position: Vec2, radius: f32) -> Option<&Plant> {
        self.plants
            .iter()
            .find(|p| p.position.distance(position) < radius)
    }

    pub(crate) fn remove(&mut self, id: PlantId) -> Option<Plant> {
        let index = self.plants.iter().position(|p| p.id == id)?;
        Some(self.plants.remove(index))
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantEvolvedEvent {
    pub id: PlantId,
    pub from: GrowthState,
    pub to: GrowthState,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantDiedEvent {
    pub id: PlantId,
    pub species: Species,
    pub cause: DeathCause,
}
