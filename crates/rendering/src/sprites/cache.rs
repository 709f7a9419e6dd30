use std::collections::HashMap;

use bevy::prelude::*;
use simulation::plants::GrowthState;
use simulation::species::Species;

use super::generators::generate_sprite;
use crate::canvas::PixelCanvas;

pub const ALL_STATES: [GrowthState; 6] = [
    GrowthState::Seed,
    GrowthState::Sprout,
    GrowthState::Medium,
    GrowthState::Bud,
    GrowthState::Flower,
    GrowthState::Dead,
];

/// Every plant sprite, keyed by species and growth state.
#[derive(Resource, Debug)]
pub struct SpriteCache {
    sprites: HashMap<(Species, GrowthState), PixelCanvas>,
}

impl Default for SpriteCache {
    fn default() -> Self {
        let mut sprites = HashMap::new();
        for species in Species::ALL {
            for state in ALL_STATES {
                sprites.insert((species, state), generate_sprite(species, state));
            }
        }
        Self { sprites }
    }
}

impl SpriteCache {
    pub fn get(&self, species: Species, state: GrowthState) -> Option<&PixelCanvas> {
        self.sprites.get(&(species, state))
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
