use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeatherState {
    #[default]
    Clear,
    Snowing,
}

impl WeatherState {
    pub fn name(self) -> &'static str {
        match self {
            WeatherState::Clear => "Clear",
            WeatherState::Snowing => "Snowing",
        }
    }
}

/// Process-wide weather. There is exactly one instance, owned by the app world.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Weather {
    pub state: WeatherState,
    /// Time since the current state was entered (ms).
    pub time_in_state_ms: f64,
    /// Time since snow started (ms); zero while clear.
    pub snow_duration_ms: f64,
}

impl Weather {
    pub fn is_snowing(&self) -> bool {
        self.state == WeatherState::Snowing
    }

    /// Flowers are under cold stress once snow has lasted longer than `threshold_ms`.
    pub fn cold_stress_active(&self, threshold_ms: f64) -> bool {
        self.is_snowing() && self.snow_duration_ms > threshold_ms
    }

    /// Switch to `state`, resetting both timers. Returns the change if the
    /// state actually differs.
    pub fn transition_to(&mut self, state: WeatherState) -> Option<WeatherChangeEvent> {
        if self.state == state {
            return None;
        }
        let old_state = self.state;
        self.state = state;
        self.time_in_state_ms = 0.0;
        self.snow_duration_ms = 0.0;
        Some(WeatherChangeEvent {
            old_state,
            new_state: state,
        })
    }
}

/// Fired whenever the weather switches between clear and snowing.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherChangeEvent {
    pub old_state: WeatherState,
    pub new_state: WeatherState,
}
