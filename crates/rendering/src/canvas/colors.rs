//! Garden palette.

use simulation::species::Species;

use super::types::Rgba;

pub const SOIL_BASE: Rgba = [0x8B, 0x45, 0x13, 255];
pub const SOIL_DARK: Rgba = [0x65, 0x43, 0x21, 255];
pub const SOIL_LIGHT: Rgba = [0xA0, 0x52, 0x2D, 255];

pub const GRASS: [Rgba; simulation::grass::GRASS_COLOR_COUNT] = [
    [0x4B, 0x8B, 0x3B, 255],
    [0x6A, 0xA3, 0x42, 255],
    [0x8C, 0xB3, 0x56, 255],
    [0xA1, 0xC4, 0x6A, 255],
    [0x70, 0x84, 0x47, 255],
];

pub const WATER: [Rgba; simulation::water_particles::WATER_COLOR_COUNT] = [
    [0x87, 0xCE, 0xEB, 255],
    [0xB0, 0xE0, 0xE6, 255],
    [0xAD, 0xD8, 0xE6, 255],
    [0xE0, 0xF6, 0xFF, 255],
];
pub const WATER_HIGHLIGHT: Rgba = [255, 255, 255, 77];

pub const SNOW: Rgba = [255, 255, 255, 255];
/// Cold tint laid over the whole garden while it snows.
pub const SNOW_TINT: Rgba = [20, 40, 60, 64];

pub const PROGRESS_BACKGROUND: Rgba = [0, 0, 0, 128];
pub const PROGRESS_FILL: Rgba = [0x4C, 0xAF, 0x50, 255];
pub const PROGRESS_BORDER: Rgba = [255, 255, 255, 255];

pub const SEED: Rgba = [0x65, 0x43, 0x21, 255];
pub const SEED_SPOT: Rgba = [0x3D, 0x28, 0x17, 255];
pub const LEAF: Rgba = [0x90, 0xEE, 0x90, 255];
pub const STEM: Rgba = [0x22, 0x8B, 0x22, 255];
pub const STEM_LIGHT: Rgba = [0x32, 0xCD, 0x32, 255];
pub const WHITE: Rgba = [255, 255, 255, 255];

pub const DEAD_STEM: Rgba = [0x5A, 0x46, 0x3A, 255];
pub const DEAD_ACCENT: Rgba = [0x7B, 0x67, 0x58, 255];
pub const DEAD_HEAD: [Rgba; 2] = [[0x6B, 0x4F, 0x3B, 255], [0x8A, 0x6E, 0x53, 255]];

/// Per-species flower colors. Not every species uses every slot.
#[derive(Debug, Clone, Copy)]
pub struct FlowerColors {
    pub petal_light: Rgba,
    pub petal_mid: Rgba,
    pub petal_dark: Rgba,
    /// Petal tip (tulip) or lip (orchid).
    pub accent: Rgba,
    /// Pollen (lily) or lip center (orchid).
    pub highlight: Rgba,
    pub stem: Rgba,
    pub stem_light: Rgba,
}

pub fn flower_colors(species: Species) -> FlowerColors {
    match species {
        Species::Lily => FlowerColors {
            petal_light: [0xFF, 0xB6, 0xC1, 255],
            petal_mid: [0xFF, 0xB6, 0xC1, 255],
            petal_dark: [0xFF, 0x69, 0xB4, 255],
            accent: [0xFF, 0xA5, 0x00, 255],
            highlight: [0xFF, 0xD7, 0x00, 255],
            stem: STEM,
            stem_light: STEM_LIGHT,
        },
        Species::Tulip => FlowerColors {
            petal_light: [0xFF, 0xD7, 0x00, 255],
            petal_mid: [0xFF, 0x8C, 0x00, 255],
            petal_dark: [0xDC, 0x14, 0x3C, 255],
            accent: [0xFF, 0x45, 0x00, 255],
            highlight: [0xFF, 0xD7, 0x00, 255],
            stem: [0xA5, 0xD6, 0x88, 255],
            stem_light: [0xC4, 0xE6, 0xA8, 255],
        },
        Species::Orchid => FlowerColors {
            petal_light: [0xDD, 0xA0, 0xDD, 255],
            petal_mid: [0x93, 0x70, 0xDB, 255],
            petal_dark: [0x66, 0x33, 0x99, 255],
            accent: [0xFF, 0x69, 0xB4, 255],
            highlight: [0xFF, 0xD7, 0x00, 255],
            stem: STEM,
            stem_light: STEM_LIGHT,
        },
    }
}
