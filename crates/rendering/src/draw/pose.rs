use std::f32::consts::TAU;

use simulation::plants::{GrowthState, Plant, BOUNCE_DURATION_MS, EVOLUTION_FLASH_MS};

/// Base sprite scale per growth state.
pub fn state_scale(state: GrowthState) -> f32 {
    match state {
        GrowthState::Seed => 0.2,
        GrowthState::Sprout => 0.4,
        GrowthState::Medium => 0.64,
        GrowthState::Bud => 0.96,
        GrowthState::Flower => 2.0,
        GrowthState::Dead => 0.72,
    }
}

fn wind_multiplier(state: GrowthState) -> f32 {
    match state {
        GrowthState::Seed | GrowthState::Dead => 0.0,
        GrowthState::Sprout | GrowthState::Medium => 1.0,
        GrowthState::Bud => 1.2,
        GrowthState::Flower => 1.5,
    }
}

/// Idle sway in degrees at `time_ms`. Each plant is phase-shifted by its
/// position so neighbours do not move in lockstep.
pub fn wind_angle(plant: &Plant, time_ms: f64) -> f32 {
    let multiplier = wind_multiplier(plant.growth_state());
    let animation = &plant.animation;
    if multiplier == 0.0 || animation.wind_period_s <= 0.0 {
        return 0.0;
    }
    let position = plant.position();
    let offset = (position.x + position.y) * 0.1;
    let phase = (time_ms as f32 * 0.001 + offset) * (TAU / animation.wind_period_s);
    phase.sin() * animation.wind_amplitude_deg * multiplier
}

/// How a plant sprite is placed this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantPose {
    /// Sprite scale including the watering bounce.
    pub scale: f32,
    /// Rotation about the plant's base (degrees, clockwise on screen).
    pub angle_deg: f32,
    pub opacity: f32,
}

pub fn plant_pose(plant: &Plant, time_ms: f64) -> PlantPose {
    let mut pose = PlantPose {
        scale: state_scale(plant.growth_state()),
        angle_deg: wind_angle(plant, time_ms),
        opacity: 1.0,
    };
    if plant.is_dead() {
        return pose;
    }
    let animation = &plant.animation;
    // Bounce phase runs 0.3 -> 0 and flash phase 1 -> 0 over their timers.
    if animation.bounce_ms > 0.0 {
        let t = (animation.bounce_ms / BOUNCE_DURATION_MS) as f32 * 0.3;
        pose.scale *= 1.0 + (t * 20.0).sin() * 0.1;
    }
    if animation.flash_ms > 0.0 {
        let t = (animation.flash_ms / EVOLUTION_FLASH_MS) as f32;
        pose.opacity = 0.5 + (t * 10.0).sin().abs() * 0.5;
    }
    pose
}
