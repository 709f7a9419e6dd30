//! Query and frame-stepping methods for `TestGarden`.

use bevy::ecs::event::Events;
use bevy::prelude::*;

use crate::grass::GrassField;
use crate::plants::{Garden, Plant, PlantDiedEvent, PlantEvolvedEvent, PlantId};
use crate::snow::SnowField;
use crate::stats::GardenStats;
use crate::time_of_day::{FrameClock, GardenDay};
use crate::water_particles::WaterParticles;
use crate::weather::{Weather, WeatherChangeEvent};

use super::TestGarden;

impl TestGarden {
    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run one frame with the given delta by executing the `Update` schedule
    /// directly.
    pub fn tick(&mut self, delta_ms: f64) -> &mut Self {
        let world = self.app.world_mut();
        world.resource_mut::<FrameClock>().advance_ms(delta_ms);
        world.run_schedule(Update);
        self
    }

    /// Run `n` frames of `delta_ms` each.
    pub fn tick_frames(&mut self, n: u32, delta_ms: f64) -> &mut Self {
        for _ in 0..n {
            self.tick(delta_ms);
        }
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn garden(&self) -> &Garden {
        self.resource::<Garden>()
    }

    pub fn plant(&self, id: PlantId) -> Option<&Plant> {
        self.garden().get(id)
    }

    pub fn plant_count(&self) -> usize {
        self.garden().len()
    }

    pub fn weather(&self) -> &Weather {
        self.resource::<Weather>()
    }

    pub fn grass(&self) -> &GrassField {
        self.resource::<GrassField>()
    }

    pub fn snow(&self) -> &SnowField {
        self.resource::<SnowField>()
    }

    pub fn water_particles(&self) -> &WaterParticles {
        self.resource::<WaterParticles>()
    }

    pub fn stats(&self) -> &GardenStats {
        self.resource::<GardenStats>()
    }

    pub fn day(&self) -> u32 {
        self.resource::<GardenDay>().day
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    fn drain<E: Event>(&mut self) -> Vec<E> {
        self.app
            .world_mut()
            .resource_mut::<Events<E>>()
            .drain()
            .collect()
    }

    pub fn drain_evolved(&mut self) -> Vec<PlantEvolvedEvent> {
        self.drain()
    }

    pub fn drain_died(&mut self) -> Vec<PlantDiedEvent> {
        self.drain()
    }

    pub fn drain_weather_changes(&mut self) -> Vec<WeatherChangeEvent> {
        self.drain()
    }
}
