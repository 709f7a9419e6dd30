//! Clicks with each tool, applied through the frame loop.

use crate::plants::{DeathCause, GrowthState, BOUNCE_DURATION_MS, EVOLUTION_FLASH_MS};
use crate::species::Species;
use crate::test_harness::TestGarden;

use super::calm_params;

#[test]
fn test_click_queued_until_next_frame() {
    let mut garden = TestGarden::with_params(calm_params());
    garden.click(100.0, 300.0);
    assert_eq!(garden.plant_count(), 0);
    garden.tick(16.0);
    assert_eq!(garden.plant_count(), 1);
    assert_eq!(garden.stats().planted, 1);
}

#[test]
fn test_planting_near_existing_plant_is_refused() {
    let mut garden = TestGarden::with_params(calm_params());
    garden.plant_at(Species::Lily, 100.0, 300.0);
    garden.click_now(150.0, 300.0);
    assert_eq!(garden.plant_count(), 1);
    garden.click_now(181.0, 300.0);
    assert_eq!(garden.plant_count(), 2);
}

#[test]
fn test_selected_seed_is_planted() {
    let mut garden = TestGarden::with_params(calm_params());
    garden.select_seed(Species::Orchid);
    garden.click_now(300.0, 300.0);
    assert_eq!(garden.garden().plants()[0].species(), Species::Orchid);
}

#[test]
fn test_selecting_seed_puts_can_away() {
    let mut garden = TestGarden::with_params(calm_params());
    garden.toggle_watering_can();
    garden.click_now(300.0, 300.0);
    assert_eq!(garden.plant_count(), 0, "watering empty ground plants nothing");
    garden.select_seed(Species::Tulip);
    garden.click_now(300.0, 300.0);
    assert_eq!(garden.plant_count(), 1);
}

#[test]
fn test_watering_dead_plant_changes_nothing() {
    let mut garden = TestGarden::with_params(calm_params());
    let id = garden.plant_at(Species::Lily, 100.0, 300.0);
    garden.grow_to(id, GrowthState::Flower);
    garden.tick(60_000.0);
    garden.assert_dead_of(id, DeathCause::OldAge);

    garden.toggle_watering_can();
    garden.click_now(100.0, 300.0);
    assert_eq!(garden.stats().water_count, 0);
    assert_eq!(garden.plant_count(), 1, "the can never clears plants");
}

#[test]
fn test_splashes_follow_interactions() {
    let mut garden = TestGarden::with_params(calm_params());
    garden.plant_at(Species::Lily, 100.0, 300.0);
    assert_eq!(garden.water_particles().len(), 5);

    garden.toggle_watering_can();
    garden.click_now(100.0, 300.0);
    assert_eq!(garden.water_particles().len(), 15);

    // Second watering evolves the seed: splash plus celebration.
    garden.click_now(100.0, 300.0);
    assert_eq!(garden.water_particles().len(), 40);
    assert_eq!(
        garden
            .water_particles()
            .particles
            .iter()
            .filter(|p| p.celebration)
            .count(),
        15
    );

    garden.tick_frames(120, 16.0);
    assert!(garden.water_particles().is_empty());
}

#[test]
fn test_animation_timers_decay_outside_drawing() {
    let mut garden = TestGarden::with_params(calm_params());
    let id = garden.plant_at(Species::Lily, 100.0, 300.0);
    garden.toggle_watering_can();
    garden.click_now(100.0, 300.0);
    garden.click_now(100.0, 300.0);
    let anim = garden.plant(id).map(|p| p.animation).expect("plant");
    assert_eq!(anim.bounce_ms, BOUNCE_DURATION_MS);
    assert_eq!(anim.flash_ms, EVOLUTION_FLASH_MS);

    garden.tick(60.0);
    let anim = garden.plant(id).map(|p| p.animation).expect("plant");
    assert_eq!(anim.bounce_ms, 40.0);
    assert!((anim.flash_ms - (EVOLUTION_FLASH_MS - 60.0)).abs() < 1e-9);

    garden.tick(1_000.0);
    let anim = garden.plant(id).map(|p| p.animation).expect("plant");
    assert_eq!(anim.bounce_ms, 0.0);
    assert_eq!(anim.flash_ms, 0.0);
}

#[test]
fn test_same_seed_same_garden() {
    fn run(seed: u64) -> (usize, usize, Vec<f32>) {
        let mut garden = TestGarden::with_seed(seed);
        garden.plant_at(Species::Tulip, 300.0, 350.0);
        garden.tick_frames(3_000, 16.0);
        let xs = garden.grass().blades().map(|b| b.x).collect();
        (garden.snow().flakes.len(), garden.snow().deposits.len(), xs)
    }
    assert_eq!(run(9), run(9));
    assert_ne!(run(9).2, run(10).2);
}
