//! Decorative grass that slowly fills the bottom of the garden.
//!
//! One blade sprouts every spawn interval. The population is a bounded ring
//! buffer: once full, the oldest blade is evicted to make room.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::config::CANVAS_WIDTH;
use crate::game_params::{DecorationParams, GardenParams};
use crate::sim_rng::SimRng;
use crate::time_of_day::FrameClock;

/// Number of colors in the grass palette; `GrassBlade::color_index` indexes it.
pub const GRASS_COLOR_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrassBlade {
    pub x: f32,
    /// Height in 2-pixel segments.
    pub height: f32,
    pub color_index: usize,
    /// Sway phase offset (radians).
    pub sway: f32,
}

impl GrassBlade {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0.0..CANVAS_WIDTH),
            height: rng.gen_range(6.0..14.0),
            color_index: rng.gen_range(0..GRASS_COLOR_COUNT),
            sway: rng.gen_range(0.0..TAU),
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct GrassField {
    blades: VecDeque<GrassBlade>,
    /// Time since the last spawn (ms).
    pub spawn_timer_ms: f64,
}

impl GrassField {
    pub fn blades(&self) -> impl Iterator<Item = &GrassBlade> {
        self.blades.iter()
    }

    pub fn len(&self) -> usize {
        self.blades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blades.is_empty()
    }

    /// Append a blade, evicting the oldest ones if the field is at capacity.
    pub fn push(&mut self, blade: GrassBlade, capacity: usize) {
        if capacity == 0 {
            return;
        }
        while self.blades.len() >= capacity {
            self.blades.pop_front();
        }
        self.blades.push_back(blade);
    }

    /// Advance the spawn timer; spawns at most one blade per call and resets
    /// the timer when it does. Returns whether a blade was spawned.
    pub fn update(
        &mut self,
        delta_ms: f64,
        params: &DecorationParams,
        rng: &mut impl Rng,
    ) -> bool {
        self.spawn_timer_ms += delta_ms;
        if self.spawn_timer_ms < params.grass_spawn_interval_ms {
            return false;
        }
        self.spawn_timer_ms = 0.0;
        self.push(GrassBlade::random(rng), params.max_grass_blades);
        true
    }
}

pub fn seed_initial_grass(
    params: Res<GardenParams>,
    mut rng: ResMut<SimRng>,
    mut grass: ResMut<GrassField>,
) {
    let decorations = &params.decorations;
    for _ in 0..decorations.initial_grass_blades {
        grass.push(GrassBlade::random(&mut rng.0), decorations.max_grass_blades);
    }
    debug!("Seeded {} grass blades", grass.len());
}

pub fn update_grass(
    clock: Res<FrameClock>,
    params: Res<GardenParams>,
    mut rng: ResMut<SimRng>,
    mut grass: ResMut<GrassField>,
) {
    grass.update(clock.delta_ms, &params.decorations, &mut rng.0);
}

pub struct GrassPlugin;

impl Plugin for GrassPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GrassField>()
            .add_systems(Startup, seed_initial_grass)
            .add_systems(
                Update,
                update_grass
                    .after(crate::weather::update_weather)
                    .in_set(crate::GardenSet::Simulation),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn blade(x: f32) -> GrassBlade {
        GrassBlade {
            x,
            height: 8.0,
            color_index: 0,
            sway: 0.0,
        }
    }

    #[test]
    fn test_spawns_once_per_interval() {
        let params = DecorationParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut field = GrassField::default();
        assert!(!field.update(3_999.0, &params, &mut rng));
        assert!(field.is_empty());
        assert!(field.update(1.0, &params, &mut rng));
        assert_eq!(field.len(), 1);
        assert_eq!(field.spawn_timer_ms, 0.0);
    }

    #[test]
    fn test_large_delta_spawns_single_blade() {
        let params = DecorationParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut field = GrassField::default();
        assert!(field.update(60_000.0, &params, &mut rng));
        assert_eq!(field.len(), 1);
        assert_eq!(field.spawn_timer_ms, 0.0);
    }

    #[test]
    fn test_full_field_evicts_oldest() {
        let mut field = GrassField::default();
        for i in 0..220 {
            field.push(blade(i as f32), 220);
        }
        assert_eq!(field.len(), 220);
        field.push(blade(999.0), 220);
        assert_eq!(field.len(), 220);
        assert!(field.blades().all(|b| b.x != 0.0), "oldest blade should be gone");
        assert_eq!(field.blades().next().map(|b| b.x), Some(1.0));
        assert_eq!(field.blades().last().map(|b| b.x), Some(999.0));
    }

    #[test]
    fn test_random_blades_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..200 {
            let b = GrassBlade::random(&mut rng);
            assert!((0.0..CANVAS_WIDTH).contains(&b.x));
            assert!((6.0..14.0).contains(&b.height));
            assert!(b.color_index < GRASS_COLOR_COUNT);
        }
    }
}
