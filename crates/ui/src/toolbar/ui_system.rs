use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::camera::TOOLBAR_HEIGHT;
use simulation::interaction::GardenTool;
use simulation::plants::Garden;
use simulation::species::Species;
use simulation::stats::GardenStats;
use simulation::time_of_day::GardenDay;
use simulation::weather::Weather;

use super::widgets::{plants_label, seed_color, seed_is_active, weather_label};

pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut tool: ResMut<GardenTool>,
    stats: Res<GardenStats>,
    day: Res<GardenDay>,
    weather: Res<Weather>,
    garden: Res<Garden>,
) {
    egui::TopBottomPanel::top("garden_toolbar")
        .exact_height(TOOLBAR_HEIGHT)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 8.0;

                // ---- Seeds ----
                for species in Species::ALL {
                    let text = egui::RichText::new(species.name())
                        .strong()
                        .color(seed_color(species));
                    if ui
                        .selectable_label(seed_is_active(&tool, species), text)
                        .on_hover_text("Plant on empty soil, clear dead plants")
                        .clicked()
                    {
                        tool.select_seed(species);
                    }
                }

                ui.separator();

                // ---- Watering can ----
                if ui
                    .selectable_label(tool.watering_can, "Watering can")
                    .on_hover_text("Water a living plant")
                    .clicked()
                {
                    tool.toggle_watering_can();
                }

                ui.separator();

                // ---- Counters ----
                ui.label(format!("Water: {}", stats.water_count));
                ui.label(format!("Day {}", day.day));
                let (name, color) = weather_label(&weather);
                ui.label(egui::RichText::new(name).color(color));
                ui.label(plants_label(garden.living_count(), garden.len()));
            });
        });
}
