//! One function per drawn layer.

use bevy::math::Vec2;
use simulation::config::CANVAS_HEIGHT;
use simulation::grass::GrassField;
use simulation::plants::Plant;
use simulation::snow::SnowField;
use simulation::water_particles::WaterParticles;
use simulation::weather::Weather;

use super::pose::plant_pose;
use crate::canvas::colors;
use crate::canvas::painting::{blend, fill_rect, stroke_rect, tint};
use crate::canvas::PixelCanvas;
use crate::sprites::SpriteCache;

const PROGRESS_WIDTH: f32 = 40.0;
const PROGRESS_HEIGHT: f32 = 6.0;
const PROGRESS_OFFSET_Y: f32 = 60.0;
const DEPOSIT_SIZE: (f32, f32) = (4.0, 2.0);

pub fn draw_grass(canvas: &mut PixelCanvas, grass: &GrassField, frame: u64) {
    for blade in grass.blades() {
        let color = colors::GRASS[blade.color_index % colors::GRASS.len()];
        let sway = (frame as f32 * 0.05 + blade.sway).sin();
        let segments = blade.height.ceil() as u32;
        for i in 0..segments {
            let x = blade.x + sway * (i as f32 * 0.05);
            let y = CANVAS_HEIGHT - i as f32 * 2.0;
            fill_rect(canvas, x, y, 2.0, 2.0, color, 1.0);
        }
    }
}

pub fn draw_plant(canvas: &mut PixelCanvas, sprites: &SpriteCache, plant: &Plant, time_ms: f64) {
    if let Some(sprite) = sprites.get(plant.species(), plant.growth_state()) {
        let pose = plant_pose(plant, time_ms);
        blit_sprite(
            canvas,
            sprite,
            plant.position(),
            pose.scale,
            pose.angle_deg.to_radians(),
            pose.opacity,
        );
    }
    draw_progress_bar(canvas, plant);
}

/// Water progress for plants that can still grow.
pub fn draw_progress_bar(canvas: &mut PixelCanvas, plant: &Plant) {
    let Some(needed) = plant.water_needed() else {
        return;
    };
    if needed == 0 || plant.water_level() >= needed {
        return;
    }
    let position = plant.position();
    let x = position.x - PROGRESS_WIDTH / 2.0;
    let y = position.y - PROGRESS_OFFSET_Y;
    let filled = plant.water_level() as f32 / needed as f32 * PROGRESS_WIDTH;
    fill_rect(canvas, x, y, PROGRESS_WIDTH, PROGRESS_HEIGHT, colors::PROGRESS_BACKGROUND, 1.0);
    fill_rect(canvas, x, y, filled, PROGRESS_HEIGHT, colors::PROGRESS_FILL, 1.0);
    stroke_rect(canvas, x, y, PROGRESS_WIDTH, PROGRESS_HEIGHT, colors::PROGRESS_BORDER);
}

/// Draw `sprite` centred horizontally on `base` with its bottom edge on
/// `base.y`, scaled by `scale` and rotated by `angle` (radians) about `base`.
///
/// Each destination pixel is mapped back into sprite space and sampled
/// nearest-neighbour, so rotated sprites keep hard pixel edges.
pub fn blit_sprite(
    canvas: &mut PixelCanvas,
    sprite: &PixelCanvas,
    base: Vec2,
    scale: f32,
    angle: f32,
    opacity: f32,
) {
    if scale <= 0.0 || opacity <= 0.0 {
        return;
    }
    let (w, h) = (sprite.width() as f32, sprite.height() as f32);
    let rotation = Vec2::from_angle(angle);
    let inverse = Vec2::from_angle(-angle);

    let corners = [
        Vec2::new(-w / 2.0, -h),
        Vec2::new(w / 2.0, -h),
        Vec2::new(-w / 2.0, 0.0),
        Vec2::new(w / 2.0, 0.0),
    ]
    .map(|c| base + rotation.rotate(c * scale));
    let min = corners.iter().fold(Vec2::splat(f32::MAX), |a, &c| a.min(c));
    let max = corners.iter().fold(Vec2::splat(f32::MIN), |a, &c| a.max(c));

    let x0 = min.x.floor().max(0.0) as usize;
    let y0 = min.y.floor().max(0.0) as usize;
    let x1 = (max.x.ceil().max(0.0) as usize).min(canvas.width());
    let y1 = (max.y.ceil().max(0.0) as usize).min(canvas.height());

    for py in y0..y1 {
        for px in x0..x1 {
            let offset = Vec2::new(px as f32 + 0.5, py as f32 + 0.5) - base;
            let local = inverse.rotate(offset) / scale;
            let (sx, sy) = (local.x + w / 2.0, local.y + h);
            if sx < 0.0 || sy < 0.0 || sx >= w || sy >= h {
                continue;
            }
            let Some(color) = sprite.get(sx as usize, sy as usize) else {
                continue;
            };
            if color[3] == 0 {
                continue;
            }
            if let Some(dst) = canvas.get(px, py) {
                canvas.set(px as i32, py as i32, blend(dst, color, opacity));
            }
        }
    }
}

pub fn draw_water_particles(canvas: &mut PixelCanvas, water: &WaterParticles) {
    for particle in &water.particles {
        let color = colors::WATER[particle.color_index % colors::WATER.len()];
        let size = ((particle.size / 2.0).floor() * 2.0).max(2.0);
        let x = (particle.x - size / 2.0).floor();
        let y = (particle.y - size / 2.0).floor();
        fill_rect(canvas, x, y, size, size, color, particle.opacity);
        if size >= 4.0 {
            let half = (size / 2.0).floor();
            fill_rect(canvas, x, y, half, half, colors::WATER_HIGHLIGHT, particle.opacity);
        }
    }
}

pub fn draw_snow(canvas: &mut PixelCanvas, weather: &Weather, snow: &SnowField) {
    if weather.is_snowing() {
        tint(canvas, colors::SNOW_TINT);
    }
    for flake in &snow.flakes {
        fill_rect(canvas, flake.x, flake.y, flake.size, flake.size, colors::SNOW, 1.0);
    }
    let (dw, dh) = DEPOSIT_SIZE;
    for deposit in &snow.deposits {
        fill_rect(canvas, deposit.x, deposit.y, dw, dh, colors::SNOW, deposit.alpha());
    }
}
