//! # TestGarden: headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` for running integration tests
//! without a window or renderer. Frames are driven by hand: each `tick`
//! sets the frame delta explicitly and runs the `Update` schedule once, so
//! tests never depend on wall-clock time.

mod assertions;
mod queries;
mod setup;

use bevy::app::App;
use bevy::prelude::*;

use crate::game_params::GardenParams;
use crate::sim_rng::SimRng;
use crate::SimulationPlugin;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
pub struct TestGarden {
    app: App,
}

impl Default for TestGarden {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGarden {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// A fresh garden with default parameters and the default seed.
    pub fn new() -> Self {
        Self::build(SimRng::default(), GardenParams::default())
    }

    /// A fresh garden whose RNG is seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(SimRng::from_seed_u64(seed), GardenParams::default())
    }

    /// A fresh garden using `params` and the default seed.
    pub fn with_params(params: GardenParams) -> Self {
        Self::build(SimRng::default(), params)
    }

    fn build(rng: SimRng, params: GardenParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert BEFORE SimulationPlugin so init_resource keeps these.
        app.insert_resource(rng);
        app.insert_resource(params);
        app.add_plugins(SimulationPlugin);

        // Run one update so Startup systems execute. The first clock sample
        // always yields a zero delta.
        app.update();

        Self { app }
    }
}
