//! Data-driven garden parameters.
//!
//! Every tunable constant of the simulation lives in a single [`GardenParams`]
//! resource so it can be overridden without recompilation. Overrides are
//! partial JSON documents: any field left out keeps its default.
//!
//! Systems read `Res<GardenParams>` instead of module-level constants.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while loading or validating a parameter override.
#[derive(Debug)]
pub enum ParamsError {
    /// The override file could not be read.
    Io(std::io::Error),
    /// The override document is not valid JSON for `GardenParams`.
    Parse(serde_json::Error),
    /// A value is out of its allowed range.
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Io(e) => write!(f, "I/O error: {e}"),
            ParamsError::Parse(e) => write!(f, "Parse error: {e}"),
            ParamsError::Invalid { field, reason } => {
                write!(f, "Invalid value for `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Io(e) => Some(e),
            ParamsError::Parse(e) => Some(e),
            ParamsError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ParamsError {
    fn from(e: std::io::Error) -> Self {
        ParamsError::Io(e)
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(e: serde_json::Error) -> Self {
        ParamsError::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Parameter groups
// ---------------------------------------------------------------------------

/// Plant lifecycle tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleParams {
    /// Time a plant may spend in bloom before dying of old age (ms).
    pub flower_max_lifespan_ms: f64,
    /// Snow must have lasted longer than this before flowers feel the cold (ms).
    pub cold_snow_threshold_ms: f64,
    /// Cold exposure needed for one freeze roll (ms).
    pub freeze_check_interval_ms: f64,
    /// Probability that a single freeze roll kills the flower.
    pub freeze_death_chance: f64,
}

impl Default for LifecycleParams {
    fn default() -> Self {
        Self {
            flower_max_lifespan_ms: 48_000.0,
            cold_snow_threshold_ms: 10_000.0,
            freeze_check_interval_ms: 1_500.0,
            freeze_death_chance: 0.3,
        }
    }
}

/// Weather state machine tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherParams {
    /// Snow cannot stop before it has lasted this long (ms).
    pub snow_min_duration_ms: f64,
    /// Hazard rate of snow starting while clear (per ms).
    pub snow_start_rate: f64,
    /// Hazard rate of snow stopping once eligible (per ms).
    pub snow_stop_rate: f64,
}

impl Default for WeatherParams {
    fn default() -> Self {
        Self {
            snow_min_duration_ms: 8_000.0,
            snow_start_rate: 0.000_01,
            snow_stop_rate: 0.002,
        }
    }
}

/// Grass and snow decoration tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationParams {
    pub grass_spawn_interval_ms: f64,
    pub max_grass_blades: usize,
    /// Blades spawned when the garden starts.
    pub initial_grass_blades: usize,
    /// Per-tick chance of a new snowflake while snowing.
    pub snowflake_spawn_chance: f64,
    pub max_snow_deposits: usize,
}

impl Default for DecorationParams {
    fn default() -> Self {
        Self {
            grass_spawn_interval_ms: 4_000.0,
            max_grass_blades: 220,
            initial_grass_blades: 80,
            snowflake_spawn_chance: 0.4,
            max_snow_deposits: 120,
        }
    }
}

// ---------------------------------------------------------------------------
// GardenParams resource
// ---------------------------------------------------------------------------

/// Central resource holding all garden tunables.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenParams {
    /// Click radius used to find the plant under the cursor.
    pub hit_radius: f32,
    /// Length of one in-game day (ms).
    pub day_length_ms: f64,
    pub lifecycle: LifecycleParams,
    pub weather: WeatherParams,
    pub decorations: DecorationParams,
}

impl Default for GardenParams {
    fn default() -> Self {
        Self {
            hit_radius: 80.0,
            day_length_ms: 30_000.0,
            lifecycle: LifecycleParams::default(),
            weather: WeatherParams::default(),
            decorations: DecorationParams::default(),
        }
    }
}

impl GardenParams {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        let params: GardenParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Read and parse a JSON override file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject values that would break the simulation's invariants.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.hit_radius > 0.0) {
            return Err(invalid("hit_radius", "must be positive"));
        }
        check_interval("day_length_ms", self.day_length_ms)?;
        check_interval(
            "lifecycle.freeze_check_interval_ms",
            self.lifecycle.freeze_check_interval_ms,
        )?;
        check_interval(
            "decorations.grass_spawn_interval_ms",
            self.decorations.grass_spawn_interval_ms,
        )?;
        check_probability("lifecycle.freeze_death_chance", self.lifecycle.freeze_death_chance)?;
        check_probability(
            "decorations.snowflake_spawn_chance",
            self.decorations.snowflake_spawn_chance,
        )?;
        check_rate("weather.snow_start_rate", self.weather.snow_start_rate)?;
        check_rate("weather.snow_stop_rate", self.weather.snow_stop_rate)?;
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ParamsError {
    ParamsError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

/// Shortest accepted period for anything counted in whole intervals.
pub const MIN_INTERVAL_MS: f64 = 1.0;

fn check_interval(field: &'static str, value: f64) -> Result<(), ParamsError> {
    if value >= MIN_INTERVAL_MS && value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::Invalid {
            field,
            reason: format!("interval {value} ms must be finite and at least {MIN_INTERVAL_MS} ms"),
        })
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ParamsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParamsError::Invalid {
            field,
            reason: format!("probability {value} is outside [0, 1]"),
        })
    }
}

fn check_rate(field: &'static str, value: f64) -> Result<(), ParamsError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::Invalid {
            field,
            reason: format!("rate {value} must be a finite non-negative number"),
        })
    }
}

pub struct GameParamsPlugin;

impl Plugin for GameParamsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GardenParams>();
    }
}
