//! Weather transitions and the decorations that follow them.

use crate::test_harness::TestGarden;
use crate::weather::WeatherState;

use super::calm_params;

#[test]
fn test_snow_starts_and_is_reported() {
    let mut params = calm_params();
    params.weather.snow_start_rate = 1.0;
    let mut garden = TestGarden::with_params(params);
    garden.tick(16.0);
    assert!(garden.weather().is_snowing());
    let changes = garden.drain_weather_changes();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].old_state, WeatherState::Clear);
    assert_eq!(changes[0].new_state, WeatherState::Snowing);
}

#[test]
fn test_snow_respects_minimum_duration() {
    let mut params = calm_params();
    params.weather.snow_stop_rate = 1.0;
    let mut garden = TestGarden::with_params(params);
    garden.set_weather(WeatherState::Snowing, 0.0);

    garden.tick_frames(100, 79.0);
    assert!(garden.weather().is_snowing(), "stopped before 8000 ms");

    garden.tick(200.0);
    assert_eq!(garden.weather().state, WeatherState::Clear);
    assert_eq!(garden.weather().snow_duration_ms, 0.0);
}

#[test]
fn test_weather_never_stops_early_for_any_seed() {
    for seed in 0..20 {
        let mut garden = TestGarden::with_seed(seed);
        garden.set_weather(WeatherState::Snowing, 0.0);
        for _ in 0..160 {
            garden.tick(50.0);
            let weather = garden.weather();
            if weather.state == WeatherState::Clear {
                panic!("seed {seed}: snow stopped at {} ms", weather.time_in_state_ms);
            }
        }
    }
}

#[test]
fn test_snow_piles_up_on_the_ground() {
    let mut garden = TestGarden::with_params(calm_params());
    garden.set_weather(WeatherState::Snowing, 0.0);
    garden.tick_frames(1_200, 16.0);
    assert!(!garden.snow().flakes.is_empty());
    assert!(!garden.snow().deposits.is_empty());
    garden.assert_within_caps();
}

#[test]
fn test_snow_melts_away_after_it_stops() {
    let mut garden = TestGarden::with_params(calm_params());
    garden.set_weather(WeatherState::Snowing, 0.0);
    garden.tick_frames(600, 16.0);
    assert!(!garden.snow().is_empty());

    garden.set_weather(WeatherState::Clear, 0.0);
    // Flakes need at most 20 s to land and deposits last at most 12 s.
    garden.tick_frames(2_500, 16.0);
    assert!(garden.snow().is_empty());
}

#[test]
fn test_grass_fills_up_to_its_cap() {
    let mut garden = TestGarden::with_params(calm_params());
    assert_eq!(garden.grass().len(), 80);
    garden.tick(4_000.0);
    assert_eq!(garden.grass().len(), 81);
    garden.tick_frames(300, 4_000.0);
    assert_eq!(garden.grass().len(), 220);
    garden.assert_within_caps();
}
