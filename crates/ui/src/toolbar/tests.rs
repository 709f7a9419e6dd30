use bevy::prelude::KeyCode;
use simulation::interaction::GardenTool;
use simulation::species::Species;
use simulation::weather::{Weather, WeatherState};

use super::keybinds::apply_tool_key;
use super::widgets::{plants_label, seed_is_active, weather_label};

#[test]
fn test_digit_keys_select_seeds() {
    let mut tool = GardenTool::default();
    assert!(apply_tool_key(&mut tool, KeyCode::Digit2));
    assert_eq!(tool.selected_seed, Species::Tulip);
    assert!(apply_tool_key(&mut tool, KeyCode::Digit3));
    assert_eq!(tool.selected_seed, Species::Orchid);
    assert!(apply_tool_key(&mut tool, KeyCode::Digit1));
    assert_eq!(tool.selected_seed, Species::Lily);
}

#[test]
fn test_w_toggles_can_and_seed_key_turns_it_off() {
    let mut tool = GardenTool::default();
    assert!(apply_tool_key(&mut tool, KeyCode::KeyW));
    assert!(tool.watering_can);
    assert!(apply_tool_key(&mut tool, KeyCode::Digit3));
    assert!(!tool.watering_can);
    assert_eq!(tool.selected_seed, Species::Orchid);
}

#[test]
fn test_unbound_key_is_ignored() {
    let mut tool = GardenTool::default();
    assert!(!apply_tool_key(&mut tool, KeyCode::KeyQ));
    assert_eq!(tool, GardenTool::default());
}

#[test]
fn test_no_seed_is_active_while_watering() {
    let mut tool = GardenTool::default();
    assert!(seed_is_active(&tool, Species::Lily));
    assert!(!seed_is_active(&tool, Species::Tulip));
    tool.toggle_watering_can();
    assert!(Species::ALL.iter().all(|&s| !seed_is_active(&tool, s)));
}

#[test]
fn test_weather_label_names_state() {
    assert_eq!(weather_label(&Weather::default()).0, "Clear");
    let snowing = Weather {
        state: WeatherState::Snowing,
        ..Default::default()
    };
    assert_eq!(weather_label(&snowing).0, "Snowing");
}

#[test]
fn test_plants_label_counts_dead() {
    assert_eq!(plants_label(3, 3), "Plants: 3");
    assert_eq!(plants_label(2, 5), "Plants: 2 (+3 dead)");
}
