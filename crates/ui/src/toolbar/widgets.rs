use bevy_egui::egui;

use rendering::canvas::colors::flower_colors;
use rendering::canvas::Rgba;
use simulation::interaction::GardenTool;
use simulation::species::Species;
use simulation::weather::{Weather, WeatherState};

pub(crate) fn color32(rgba: Rgba) -> egui::Color32 {
    egui::Color32::from_rgb(rgba[0], rgba[1], rgba[2])
}

/// Label color of a seed button, taken from the species' flower.
pub(crate) fn seed_color(species: Species) -> egui::Color32 {
    color32(flower_colors(species).petal_dark)
}

pub(crate) fn seed_is_active(tool: &GardenTool, species: Species) -> bool {
    !tool.watering_can && tool.selected_seed == species
}

pub(crate) fn weather_label(weather: &Weather) -> (&'static str, egui::Color32) {
    match weather.state {
        WeatherState::Clear => ("Clear", egui::Color32::from_rgb(240, 210, 90)),
        WeatherState::Snowing => ("Snowing", egui::Color32::from_rgb(200, 225, 255)),
    }
}

pub(crate) fn plants_label(living: usize, total: usize) -> String {
    if living == total {
        format!("Plants: {total}")
    } else {
        format!("Plants: {living} (+{} dead)", total - living)
    }
}
