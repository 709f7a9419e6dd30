use std::f32::consts::{PI, TAU};

use simulation::plants::GrowthState;
use simulation::species::Species;

use crate::canvas::colors::{self, flower_colors, FlowerColors};
use crate::canvas::{PixelCanvas, Rgba};

/// Sprite dimensions per growth state.
pub const SEED_SIZE: (usize, usize) = (8, 8);
pub const SPROUT_SIZE: (usize, usize) = (16, 32);
pub const MEDIUM_SIZE: (usize, usize) = (32, 64);
pub const BUD_SIZE: (usize, usize) = (48, 80);
pub const FLOWER_SIZE: (usize, usize) = (64, 128);
pub const DEAD_SIZE: (usize, usize) = (48, 96);

const TULIP_WARM: Rgba = [0xFF, 0x6A, 0x2E, 255];
const TULIP_GLOW: Rgba = [0xFF, 0x94, 0x40, 255];

pub fn generate_sprite(species: Species, state: GrowthState) -> PixelCanvas {
    match state {
        GrowthState::Seed => seed(),
        GrowthState::Sprout => sprout(),
        GrowthState::Medium => medium(),
        GrowthState::Bud => bud(species),
        GrowthState::Flower => match species {
            Species::Lily => lily_flower(),
            Species::Tulip => tulip_flower(),
            Species::Orchid => orchid_flower(),
        },
        GrowthState::Dead => dead(),
    }
}

fn blank((w, h): (usize, usize)) -> PixelCanvas {
    PixelCanvas::transparent(w, h)
}

fn fill_block(sprite: &mut PixelCanvas, xs: std::ops::Range<i32>, ys: std::ops::Range<i32>, color: Rgba) {
    for y in ys {
        for x in xs.clone() {
            sprite.set(x, y, color);
        }
    }
}

fn seed() -> PixelCanvas {
    let mut sprite = blank(SEED_SIZE);
    for y in 2..6 {
        for x in 2..6 {
            let (dx, dy) = (x as f32 - 3.5, y as f32 - 3.5);
            if dx * dx / 4.0 + dy * dy / 2.0 < 1.0 {
                sprite.set(x, y, colors::SEED);
            }
        }
    }
    sprite.set(3, 3, colors::SEED_SPOT);
    sprite.set(4, 4, colors::SEED_SPOT);
    sprite
}

fn sprout() -> PixelCanvas {
    let mut sprite = blank(SPROUT_SIZE);
    fill_block(&mut sprite, 7..9, 20..32, colors::STEM);
    for y in 18..22 {
        for x in 4..12 {
            if (x - 8i32).abs() + (y - 20i32).abs() < 3 {
                sprite.set(x, y, colors::LEAF);
            }
        }
    }
    sprite
}

fn medium() -> PixelCanvas {
    let mut sprite = blank(MEDIUM_SIZE);
    fill_block(&mut sprite, 14..18, 40..64, colors::STEM);
    // Two ring-shaped leaves either side of the stem.
    for (xs, cx) in [(4..16, 10.0), (16..28, 22.0)] {
        for y in 30..45 {
            for x in xs.clone() {
                let dist = (x as f32 - cx).hypot(y as f32 - 37.0);
                if dist > 2.0 && dist < 8.0 {
                    sprite.set(x, y, colors::LEAF);
                }
            }
        }
    }
    sprite
}

fn bud(species: Species) -> PixelCanvas {
    let palette = flower_colors(species);
    let mut sprite = blank(BUD_SIZE);
    fill_block(&mut sprite, 20..28, 50..80, palette.stem);
    for y in 20..50 {
        for x in 12..36 {
            let dx = (x as f32 - 24.0) / 12.0;
            let dy = (y as f32 - 35.0) / 15.0;
            if dx * dx + dy * dy < 1.0 {
                sprite.set(x, y, palette.petal_light);
            }
        }
    }
    let seam = match species {
        Species::Tulip => palette.petal_mid,
        Species::Lily | Species::Orchid => palette.petal_light,
    };
    for y in 25..45 {
        sprite.set(24, y, seam);
    }
    sprite
}

fn tulip_flower() -> PixelCanvas {
    let c = flower_colors(Species::Tulip);
    let mut sprite = blank(FLOWER_SIZE);
    let center_x = 32.0;
    let (cup_top, cup_base) = (18, 86);
    let gradient = [c.petal_dark, c.petal_mid, TULIP_WARM, TULIP_GLOW, c.petal_light];

    for y in cup_base..128 {
        fill_block(&mut sprite, 29..36, y..y + 1, c.stem);
        sprite.set(30, y, c.stem_light);
    }

    // Closed cup, widest a third of the way down.
    for y in cup_top..cup_base {
        let v = (y - cup_top) as f32 / (cup_base - cup_top) as f32;
        let width = 18.0 + (1.0 - (v - 0.3).powi(2)) * 30.0;
        let left = ((center_x - width / 2.0).round() as i32).max(4);
        let right = ((center_x + width / 2.0).round() as i32).min(60);
        for x in left..=right {
            let h = (x - left) as f32 / (right - left).max(1) as f32;
            let shade = ((h * gradient.len() as f32) as usize).min(gradient.len() - 1);
            let color = if !(0.15..=0.85).contains(&h) {
                c.petal_dark
            } else if h > 0.45 && h < 0.55 {
                c.petal_light
            } else {
                gradient[shade]
            };
            sprite.set(x, y, color);
        }
        if v < 0.2 {
            sprite.set(left, y, c.petal_dark);
            sprite.set(right, y, c.petal_dark);
        }
    }

    for x in 18..46 {
        if sprite.is_set(x, cup_top) {
            sprite.set(x, cup_top - 1, c.accent);
        }
    }

    for y in cup_base - 4..cup_base + 2 {
        for x in 20..=44 {
            if !sprite.is_set(x, y) {
                sprite.set(x, y, c.petal_light);
            }
        }
    }
    sprite
}

fn lily_flower() -> PixelCanvas {
    let c = flower_colors(Species::Lily);
    let mut sprite = blank(FLOWER_SIZE);
    fill_block(&mut sprite, 28..36, 90..128, c.stem);

    let (cx, cy) = (32.0f32, 50.0f32);
    let petal_length = 25;
    for p in 0..6 {
        let angle = p as f32 / 6.0 * TAU;
        for dist in 5..petal_length {
            // Petals curl backwards towards the tip.
            let local = angle + dist as f32 * 0.3 / 20.0;
            let (sin, cos) = local.sin_cos();
            for w in -4..4 {
                let x = (cx + cos * dist as f32 - sin * w as f32).round() as i32;
                let y = (cy + sin * dist as f32 + cos * w as f32).round() as i32;
                let base = if (dist as f32) < petal_length as f32 * 0.7 {
                    c.petal_light
                } else {
                    c.petal_dark
                };
                let spotted = (x + y).rem_euclid(8) < 2;
                sprite.set(x, y, if spotted { c.petal_dark } else { base });
            }
        }
    }

    for s in 0..6 {
        let (sin, cos) = (s as f32 / 6.0 * TAU).sin_cos();
        for d in 0..12 {
            let x = (cx + cos * d as f32).round() as i32;
            let y = (cy + sin * d as f32).round() as i32;
            sprite.set(x, y, if d < 10 { colors::WHITE } else { c.accent });
        }
    }

    for y in 45..55 {
        for x in 30..34 {
            if (x as f32 - cx).hypot(y as f32 - cy) < 3.0 {
                sprite.set(x, y, c.highlight);
            }
        }
    }
    sprite
}

fn orchid_flower() -> PixelCanvas {
    let c = flower_colors(Species::Orchid);
    let mut sprite = blank(FLOWER_SIZE);

    // Arched flower spike leaning to the right.
    let stem: Vec<(i32, i32)> = (0..=100)
        .map(|i| {
            let t = i as f32 / 100.0;
            let x = 18.0 + t * 30.0 + t.powf(1.5) * 10.0;
            let y = 120.0 - t * 75.0 - (t * PI).sin() * 5.0;
            (x.round() as i32, y.round() as i32)
        })
        .collect();
    for &(px, py) in &stem {
        for dx in -1..=2 {
            for dy in -1..=1 {
                let color = if dx == -1 { c.stem } else { c.stem_light };
                sprite.set(px + dx, py + dy, color);
            }
        }
    }

    for (t, scale) in [(0.2, 0.9), (0.4, 1.0), (0.6, 1.1), (0.8, 0.95)] {
        let index = (t * (stem.len() - 1) as f32) as usize;
        let (px, py) = stem[index];
        orchid_bloom(&mut sprite, &c, px + 8, py + 6, scale);
    }
    sprite
}

fn orchid_bloom(sprite: &mut PixelCanvas, c: &FlowerColors, cx: i32, cy: i32, scale: f32) {
    let size = (6.0 * scale) as i32;
    let sizef = size as f32;
    let half_span = (sizef * 1.4) as i32;

    for y in -size..=size {
        for x in -half_span..=half_span {
            let dist = (x as f32 * 0.7).hypot(y as f32 * 1.2);
            if dist <= sizef {
                let color = if dist < sizef * 0.6 { c.petal_mid } else { c.petal_light };
                sprite.set(cx + x, cy + y, color);
            }
        }
    }

    fill_block(sprite, cx - 2..cx + 3, cy - size - 3..cy - size + 1, c.petal_mid);

    let lip_half = size / 2;
    for y in 0..=(sizef / 1.5) as i32 {
        for x in -lip_half..=lip_half {
            let dist = (x as f32 * 1.3).hypot(y as f32 * 0.8);
            if dist < sizef / 1.6 {
                let color = if dist < sizef / 3.0 { c.highlight } else { c.accent };
                sprite.set(cx + x, cy + y, color);
            }
        }
    }
}

fn dead() -> PixelCanvas {
    let mut sprite = blank(DEAD_SIZE);
    fill_block(&mut sprite, 22..26, 60..96, colors::DEAD_STEM);
    // Drooping neck.
    for y in 40..60 {
        let offset = (60 - y) / 4;
        fill_block(&mut sprite, 24 - offset..24 - offset + 3, y..y + 1, colors::DEAD_ACCENT);
    }
    for y in 30..50 {
        for x in 10..28 {
            if (x as f32 - 16.0).hypot(y as f32 - 40.0) < 10.0 {
                sprite.set(x, y, colors::DEAD_HEAD[(y % 2) as usize]);
            }
        }
    }
    sprite
}
