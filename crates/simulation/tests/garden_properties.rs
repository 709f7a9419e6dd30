//! Property tests on the public garden API, driven by seeded random
//! action sequences rather than the Bevy app.
//!
//! Run: cargo test -p simulation --test garden_properties

use bevy::math::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use simulation::game_params::GardenParams;
use simulation::grass::GrassField;
use simulation::interaction::{apply_click, GardenTool};
use simulation::plants::{Garden, GrowthState, PlantId};
use simulation::snow::SnowField;
use simulation::species::Species;
use simulation::weather::{step_weather, Weather, WeatherState};

const ORDER: [GrowthState; 5] = [
    GrowthState::Seed,
    GrowthState::Sprout,
    GrowthState::Medium,
    GrowthState::Bud,
    GrowthState::Flower,
];

/// Returns `true` if `next` may follow `prev` in a plant's history.
fn is_allowed_step(prev: GrowthState, next: GrowthState) -> bool {
    prev == next || next == GrowthState::Dead || prev.next() == Some(next)
}

/// Run one random frame: a few clicks with random tools, then the
/// simulation update with a random delta.
fn random_frame(
    rng: &mut ChaCha8Rng,
    params: &GardenParams,
    garden: &mut Garden,
    weather: &mut Weather,
    grass: &mut GrassField,
    snow: &mut SnowField,
) {
    let mut tool = GardenTool::default();
    for _ in 0..rng.gen_range(0..3) {
        if rng.gen_bool(0.7) {
            tool.watering_can = true;
        } else {
            tool.select_seed(Species::ALL[rng.gen_range(0..3)]);
        }
        let at = Vec2::new(rng.gen_range(0.0..600.0), rng.gen_range(250.0..400.0));
        apply_click(garden, &tool, at, params.hit_radius, rng);
    }

    let delta = if rng.gen_bool(0.01) {
        rng.gen_range(1_000.0..120_000.0)
    } else {
        rng.gen_range(0.0..40.0)
    };
    step_weather(weather, delta, &params.weather, rng);
    grass.update(delta, &params.decorations, rng);
    snow.update(delta, weather, garden.plants(), &params.decorations, rng);
    for plant in garden.plants_mut() {
        plant.advance_time(delta, weather, &params.lifecycle, rng);
    }
}

#[test]
fn test_growth_history_is_a_prefix_of_the_lifecycle() {
    let mut params = GardenParams::default();
    // Make snow common so cold deaths actually happen.
    params.weather.snow_start_rate = 0.001;

    for seed in 0..8 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut garden = Garden::default();
        let mut weather = Weather::default();
        let mut grass = GrassField::default();
        let mut snow = SnowField::default();
        let mut last: Vec<(PlantId, GrowthState)> = Vec::new();

        for _ in 0..3_000 {
            random_frame(
                &mut rng,
                &params,
                &mut garden,
                &mut weather,
                &mut grass,
                &mut snow,
            );
            for plant in garden.plants() {
                let now = plant.growth_state();
                if let Some((_, prev)) = last.iter().find(|(id, _)| *id == plant.id()) {
                    assert!(
                        is_allowed_step(*prev, now),
                        "seed {seed}: plant #{} went {prev:?} -> {now:?}",
                        plant.id().0
                    );
                } else {
                    assert_eq!(now, GrowthState::Seed, "new plants start as seeds");
                }
            }
            last = garden
                .plants()
                .iter()
                .map(|p| (p.id(), p.growth_state()))
                .collect();

            assert!(grass.len() <= params.decorations.max_grass_blades);
            assert!(snow.deposits.len() <= params.decorations.max_snow_deposits);
        }
    }
}

#[test]
fn test_dead_plants_record_a_cause_and_stay_put() {
    let mut params = GardenParams::default();
    params.weather.snow_start_rate = 0.001;
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut garden = Garden::default();
    let mut weather = Weather::default();
    let mut grass = GrassField::default();
    let mut snow = SnowField::default();

    for _ in 0..5_000 {
        random_frame(
            &mut rng,
            &params,
            &mut garden,
            &mut weather,
            &mut grass,
            &mut snow,
        );
        for plant in garden.plants() {
            assert_eq!(plant.is_dead(), plant.death_cause().is_some());
            if plant.growth_state() != GrowthState::Flower {
                assert_eq!(plant.freeze_exposure_ms(), 0.0);
            }
        }
    }
}

#[test]
fn test_snow_never_stops_before_minimum_for_any_delta() {
    let params = GardenParams::default();
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut weather = Weather::default();
        weather.transition_to(WeatherState::Snowing);
        loop {
            let before = weather.time_in_state_ms;
            let delta = rng.gen_range(0.0..500.0);
            if let Some(change) = step_weather(&mut weather, delta, &params.weather, &mut rng) {
                assert_eq!(change.new_state, WeatherState::Clear);
                assert!(
                    before + delta > params.weather.snow_min_duration_ms,
                    "seed {seed}: stopped after {} ms",
                    before + delta
                );
                break;
            }
        }
    }
}

#[test]
fn test_watering_at_threshold_evolves_and_below_never_does() {
    let mut garden = Garden::default();
    let id = garden.insert(Vec2::new(300.0, 300.0), Species::Lily, Default::default());
    for (stage, state) in ORDER.iter().take(4).enumerate() {
        let plant = garden.get_mut(id).expect("plant");
        let needed = plant.water_thresholds()[stage];
        for _ in 0..needed - 1 {
            assert!(!plant.apply_water().evolved());
            assert_eq!(plant.growth_state(), *state);
        }
        assert!(plant.apply_water().evolved());
        assert_eq!(plant.growth_state(), ORDER[stage + 1]);
        assert_eq!(plant.water_level(), 0);
    }
}
