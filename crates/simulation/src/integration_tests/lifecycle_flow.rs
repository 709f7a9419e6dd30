//! Growth, aging, and death driven through the full frame loop.

use crate::plants::{DeathCause, GrowthState};
use crate::species::Species;
use crate::test_harness::TestGarden;
use crate::weather::WeatherState;

use super::calm_params;

#[test]
fn test_watering_walks_a_lily_to_flower() {
    let mut garden = TestGarden::with_params(calm_params());
    let id = garden.plant_at(Species::Lily, 200.0, 300.0);
    garden.toggle_watering_can();

    let mut seen = vec![GrowthState::Seed];
    for _ in 0..(2 + 3 + 4 + 5) {
        garden.click_now(200.0, 300.0);
        let state = garden.plant(id).map(|p| p.growth_state());
        if let Some(state) = state {
            if seen.last() != Some(&state) {
                seen.push(state);
                assert_eq!(garden.plant(id).map(|p| p.water_level()), Some(0));
            }
        }
    }

    assert_eq!(
        seen,
        vec![
            GrowthState::Seed,
            GrowthState::Sprout,
            GrowthState::Medium,
            GrowthState::Bud,
            GrowthState::Flower
        ]
    );
    assert_eq!(garden.stats().water_count, 14);
    assert_eq!(garden.stats().evolutions, 4);
    let evolved = garden.drain_evolved();
    assert_eq!(evolved.len(), 4);
    assert!(evolved.iter().all(|e| e.id == id));
    assert_eq!(evolved[3].to, GrowthState::Flower);
}

#[test]
fn test_flower_withers_after_max_lifespan() {
    let mut garden = TestGarden::with_params(calm_params());
    let id = garden.plant_at(Species::Tulip, 300.0, 300.0);
    garden.grow_to(id, GrowthState::Flower);

    garden.tick(47_999.0);
    garden.assert_state(id, GrowthState::Flower);
    garden.tick(2.0);
    garden.assert_dead_of(id, DeathCause::OldAge);

    let died = garden.drain_died();
    assert_eq!(died.len(), 1);
    assert_eq!(died[0].cause, DeathCause::OldAge);
    assert_eq!(garden.stats().deaths_old_age, 1);
}

#[test]
fn test_single_huge_frame_still_kills_old_flower() {
    let mut garden = TestGarden::with_params(calm_params());
    let id = garden.plant_at(Species::Orchid, 300.0, 300.0);
    garden.grow_to(id, GrowthState::Flower);
    garden.tick(10.0 * 60_000.0);
    garden.assert_dead_of(id, DeathCause::OldAge);
}

#[test]
fn test_long_snow_freezes_flowers() {
    let mut params = calm_params();
    params.lifecycle.freeze_death_chance = 1.0;
    let mut garden = TestGarden::with_params(params);
    let id = garden.plant_at(Species::Lily, 300.0, 300.0);
    garden.grow_to(id, GrowthState::Flower);
    garden.set_weather(WeatherState::Snowing, 10_001.0);

    garden.tick(1_500.0);
    garden.assert_state(id, GrowthState::Flower);
    garden.tick(1.0);
    garden.assert_dead_of(id, DeathCause::Cold);
    assert_eq!(garden.stats().deaths_cold, 1);
}

#[test]
fn test_short_snow_never_freezes() {
    let mut params = calm_params();
    params.lifecycle.freeze_death_chance = 1.0;
    let mut garden = TestGarden::with_params(params);
    let id = garden.plant_at(Species::Lily, 300.0, 300.0);
    garden.grow_to(id, GrowthState::Flower);
    garden.set_weather(WeatherState::Snowing, 0.0);

    // 10 s of snow is not yet cold enough.
    garden.tick_frames(100, 100.0);
    garden.assert_state(id, GrowthState::Flower);
    assert_eq!(garden.plant(id).map(|p| p.freeze_exposure_ms()), Some(0.0));
}

#[test]
fn test_young_plants_survive_any_weather() {
    let mut params = calm_params();
    params.lifecycle.freeze_death_chance = 1.0;
    let mut garden = TestGarden::with_params(params);
    let sprout = garden.plant_at(Species::Tulip, 100.0, 300.0);
    let bud = garden.plant_at(Species::Orchid, 400.0, 300.0);
    garden.grow_to(sprout, GrowthState::Sprout);
    garden.grow_to(bud, GrowthState::Bud);
    garden.set_weather(WeatherState::Snowing, 60_000.0);

    garden.tick_frames(120, 1_000.0);
    garden.assert_state(sprout, GrowthState::Sprout);
    garden.assert_state(bud, GrowthState::Bud);
    assert!(garden.plant(sprout).map(|p| p.age_ms()) >= Some(120_000.0));
}

#[test]
fn test_dead_plant_is_cleared_then_replanted() {
    let mut garden = TestGarden::with_params(calm_params());
    let id = garden.plant_at(Species::Lily, 250.0, 300.0);
    garden.grow_to(id, GrowthState::Flower);
    garden.tick(50_000.0);
    garden.assert_state(id, GrowthState::Dead);

    // The dead plant stays until the player clears it.
    garden.tick_frames(10, 1_000.0);
    assert_eq!(garden.plant_count(), 1);

    garden.click_now(250.0, 300.0);
    assert_eq!(garden.plant_count(), 0);
    assert_eq!(garden.stats().cleared, 1);

    garden.click_now(250.0, 300.0);
    assert_eq!(garden.plant_count(), 1);
}

#[test]
fn test_day_counter_advances_with_frame_time() {
    let mut garden = TestGarden::with_params(calm_params());
    assert_eq!(garden.day(), 1);
    garden.tick(29_999.0);
    assert_eq!(garden.day(), 1);
    garden.tick(1.0);
    assert_eq!(garden.day(), 2);
    garden.tick(90_000.0);
    assert_eq!(garden.day(), 5);
}
