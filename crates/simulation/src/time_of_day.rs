use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game_params::GardenParams;

/// Per-frame delta source.
///
/// Converts successive monotonic timestamps into the delta used by every
/// update step of the frame. The first observation yields a zero delta.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameClock {
    last_timestamp_ms: Option<f64>,
    /// Delta for the current frame (ms).
    pub delta_ms: f64,
    /// Sum of all deltas so far (ms).
    pub elapsed_ms: f64,
    /// Number of frames sampled.
    pub frame: u64,
}

impl FrameClock {
    /// Record a new timestamp and return the delta since the previous one.
    /// A timestamp earlier than the previous one counts as no elapsed time.
    pub fn observe(&mut self, timestamp_ms: f64) -> f64 {
        let delta = match self.last_timestamp_ms {
            Some(prev) => (timestamp_ms - prev).max(0.0),
            None => 0.0,
        };
        self.last_timestamp_ms = Some(timestamp_ms.max(self.last_timestamp_ms.unwrap_or(timestamp_ms)));
        self.push_delta(delta);
        delta
    }

    /// Step the clock by an explicit delta (headless runs and tests).
    pub fn advance_ms(&mut self, delta_ms: f64) {
        let delta = delta_ms.max(0.0);
        if let Some(last) = self.last_timestamp_ms.as_mut() {
            *last += delta;
        }
        self.push_delta(delta);
    }

    fn push_delta(&mut self, delta: f64) {
        self.delta_ms = delta;
        self.elapsed_ms += delta;
        self.frame = self.frame.wrapping_add(1);
    }
}

/// Samples wall-clock time once per frame.
///
/// Uses real time rather than virtual time so that a stalled window produces
/// one large delta instead of being silently clamped.
pub fn sample_frame_clock(time: Res<Time<Real>>, mut clock: ResMut<FrameClock>) {
    clock.observe(time.elapsed().as_secs_f64() * 1000.0);
}

/// In-game day counter, advanced by accumulated frame time.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct GardenDay {
    pub day: u32,
    pub timer_ms: f64,
}

impl Default for GardenDay {
    fn default() -> Self {
        Self {
            day: 1,
            timer_ms: 0.0,
        }
    }
}

impl GardenDay {
    /// Accumulate `delta_ms` and return how many days rolled over.
    /// The day number saturates instead of wrapping.
    pub fn advance(&mut self, delta_ms: f64, day_length_ms: f64) -> u32 {
        self.timer_ms += delta_ms;
        if !(day_length_ms > 0.0) || self.timer_ms < day_length_ms {
            return 0;
        }
        let whole_days = (self.timer_ms / day_length_ms).floor();
        self.timer_ms = (self.timer_ms - whole_days * day_length_ms).max(0.0);
        let rolled = whole_days as u32;
        self.day = self.day.saturating_add(rolled);
        rolled
    }
}

pub fn update_garden_day(
    clock: Res<FrameClock>,
    params: Res<GardenParams>,
    mut day: ResMut<GardenDay>,
) {
    if day.advance(clock.delta_ms, params.day_length_ms) > 0 {
        debug!("Garden day {}", day.day);
    }
}

pub struct TimeOfDayPlugin;

impl Plugin for TimeOfDayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameClock>()
            .init_resource::<GardenDay>()
            .add_systems(PreUpdate, sample_frame_clock)
            .add_systems(
                Update,
                update_garden_day
                    .after(crate::plants::update_plant_life)
                    .in_set(crate::GardenSet::Simulation),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_has_zero_delta() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.observe(12_345.0), 0.0);
        assert_eq!(clock.frame, 1);
        assert_eq!(clock.elapsed_ms, 0.0);
    }

    #[test]
    fn test_successive_observations_produce_deltas() {
        let mut clock = FrameClock::default();
        clock.observe(1_000.0);
        assert_eq!(clock.observe(1_016.0), 16.0);
        assert_eq!(clock.observe(1_050.0), 34.0);
        assert_eq!(clock.elapsed_ms, 50.0);
    }

    #[test]
    fn test_backwards_timestamp_counts_as_zero() {
        let mut clock = FrameClock::default();
        clock.observe(500.0);
        assert_eq!(clock.observe(400.0), 0.0);
        // The high-water mark is kept, so the next delta is measured from 500.
        assert_eq!(clock.observe(520.0), 20.0);
    }

    #[test]
    fn test_advance_ms_keeps_observe_in_step() {
        let mut clock = FrameClock::default();
        clock.observe(100.0);
        clock.advance_ms(40.0);
        assert_eq!(clock.delta_ms, 40.0);
        assert_eq!(clock.observe(150.0), 10.0);
    }

    #[test]
    fn test_day_rolls_over_every_day_length() {
        let mut day = GardenDay::default();
        assert_eq!(day.advance(29_999.0, 30_000.0), 0);
        assert_eq!(day.day, 1);
        assert_eq!(day.advance(1.0, 30_000.0), 1);
        assert_eq!(day.day, 2);
    }

    #[test]
    fn test_large_delta_rolls_several_days() {
        let mut day = GardenDay::default();
        assert_eq!(day.advance(95_000.0, 30_000.0), 3);
        assert_eq!(day.day, 4);
        assert_eq!(day.timer_ms, 5_000.0);
    }

    #[test]
    fn test_tiny_day_length_finishes_and_saturates() {
        let mut day = GardenDay::default();
        assert_eq!(day.advance(16.0, 1e-20), u32::MAX);
        assert_eq!(day.day, u32::MAX);
        assert_eq!(day.advance(16.0, 1e-20), u32::MAX);
        assert_eq!(day.day, u32::MAX);
    }
}
