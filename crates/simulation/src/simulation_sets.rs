//! Per-frame ordering of garden systems via `SystemSet` phases.
//!
//! ```text
//! PreUpdate: sample_frame_clock
//! Update:    Simulation  →  Interaction  →  Cosmetic  →  (rendering)
//! ```
//!
//! * **Simulation** – weather, grass, snow, plant aging, day counter.
//!   Every system reads the same `FrameClock::delta_ms`.
//! * **Interaction** – clicks queued since the previous frame are applied
//!   against the freshly updated plants.
//! * **Cosmetic** – animation timers and splash particles. Nothing in this
//!   phase feeds back into the simulation.
//!
//! Rendering crates order their systems `.after(GardenSet::Cosmetic)` and
//! only read the resources written above.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GardenSet {
    Simulation,
    Interaction,
    Cosmetic,
}
