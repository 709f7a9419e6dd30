use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use simulation::GardenSet;

pub mod theme;
pub mod toolbar;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_garden_theme)
            .add_systems(
                Update,
                (toolbar::toolbar_ui, toolbar::tool_keybinds).before(GardenSet::Interaction),
            );
    }
}
