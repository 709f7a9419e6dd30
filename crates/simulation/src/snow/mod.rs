//! Falling snow and the short-lived deposits it leaves behind.
//!
//! While it snows, each frame may spawn a flake at the top of the canvas.
//! Flakes fall at their own speed with a sinusoidal sideways drift. A flake
//! that passes through a living plant's foliage, or reaches the ground,
//! becomes a deposit that fades over a few seconds. Flakes drifting off the
//! sides simply vanish.

pub mod systems;
pub mod types;


pub use systems::{flake_fate, update_snow, FlakeFate};
pub use types::{SnowDeposit, SnowField, Snowflake};

use bevy::prelude::*;

pub struct SnowPlugin;

impl Plugin for SnowPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SnowField>().add_systems(
            Update,
            update_snow
                .after(crate::grass::update_grass)
                .before(crate::plants::update_plant_life)
                .in_set(crate::GardenSet::Simulation),
        );
    }
}
