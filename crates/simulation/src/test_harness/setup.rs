//! State setup and input helpers for `TestGarden`.

use bevy::prelude::*;

use crate::interaction::{GardenClick, GardenTool};
use crate::plants::{Garden, GrowthState, PlantId};
use crate::species::Species;
use crate::weather::{Weather, WeatherState};

use super::TestGarden;

impl TestGarden {
    // -----------------------------------------------------------------------
    // Tools and clicks
    // -----------------------------------------------------------------------

    pub fn select_seed(&mut self, species: Species) -> &mut Self {
        self.app
            .world_mut()
            .resource_mut::<GardenTool>()
            .select_seed(species);
        self
    }

    pub fn toggle_watering_can(&mut self) -> &mut Self {
        self.app
            .world_mut()
            .resource_mut::<GardenTool>()
            .toggle_watering_can();
        self
    }

    /// Queue a click; it is applied on the next `tick`.
    pub fn click(&mut self, x: f32, y: f32) -> &mut Self {
        self.app.world_mut().send_event(GardenClick {
            position: Vec2::new(x, y),
        });
        self
    }

    /// Queue a click and process it in a zero-length frame.
    pub fn click_now(&mut self, x: f32, y: f32) -> &mut Self {
        self.click(x, y);
        self.tick(0.0);
        self
    }

    /// Plant `species` at `(x, y)` through the regular seed tool and return
    /// the new plant's id. Restores the previous tool afterwards.
    pub fn plant_at(&mut self, species: Species, x: f32, y: f32) -> PlantId {
        let before = self.app.world().resource::<Garden>().len();
        let previous = *self.app.world().resource::<GardenTool>();
        self.app
            .world_mut()
            .resource_mut::<GardenTool>()
            .select_seed(species);
        self.click_now(x, y);
        *self.app.world_mut().resource_mut::<GardenTool>() = previous;
        let garden = self.app.world().resource::<Garden>();
        assert_eq!(garden.len(), before + 1, "plant_at: the spot was occupied");
        garden
            .plants()
            .last()
            .map(|p| p.id())
            .expect("plant_at: garden is empty")
    }

    /// Water the plant directly until it reaches `target` (which must be a
    /// living state at or after its current one).
    pub fn grow_to(&mut self, id: PlantId, target: GrowthState) -> &mut Self {
        {
            let mut garden = self.app.world_mut().resource_mut::<Garden>();
            let plant = garden.get_mut(id).expect("grow_to: unknown plant");
            while plant.growth_state() != target {
                assert!(
                    plant.growth_state().next().is_some(),
                    "grow_to: cannot reach {target:?} from {:?}",
                    plant.growth_state()
                );
                plant.apply_water();
            }
        }
        self
    }

    // -----------------------------------------------------------------------
    // Weather
    // -----------------------------------------------------------------------

    /// Force the weather into `state` as if it had been there for `elapsed_ms`.
    pub fn set_weather(&mut self, state: WeatherState, elapsed_ms: f64) -> &mut Self {
        {
            let mut weather = self.app.world_mut().resource_mut::<Weather>();
            weather.state = state;
            weather.time_in_state_ms = elapsed_ms;
            weather.snow_duration_ms = if state == WeatherState::Snowing {
                elapsed_ms
            } else {
                0.0
            };
        }
        self
    }
}
