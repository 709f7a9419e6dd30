use bevy::prelude::*;
use bevy_egui::EguiContexts;

use simulation::interaction::GardenTool;
use simulation::species::Species;

// ---------------------------------------------------------------------------
// Tool keybinds (1 / 2 / 3 / W)
// ---------------------------------------------------------------------------

/// Apply one tool shortcut. Returns whether the key is bound.
/// - 1 / 2 / 3: select the Lily / Tulip / Orchid seed
/// - W: toggle the watering can
pub fn apply_tool_key(tool: &mut GardenTool, key: KeyCode) -> bool {
    match key {
        KeyCode::Digit1 => tool.select_seed(Species::Lily),
        KeyCode::Digit2 => tool.select_seed(Species::Tulip),
        KeyCode::Digit3 => tool.select_seed(Species::Orchid),
        KeyCode::KeyW => tool.toggle_watering_can(),
        _ => return false,
    }
    true
}

pub fn tool_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut tool: ResMut<GardenTool>,
    mut contexts: EguiContexts,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    for &key in keyboard.get_just_pressed() {
        if apply_tool_key(&mut tool, key) {
            debug!("Tool is now {:?}", *tool);
        }
    }
}
