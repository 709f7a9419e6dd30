//! Mouse input: translates left clicks on the canvas into `GardenClick`s.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;
use simulation::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
use simulation::interaction::GardenClick;

use crate::canvas::GardenCanvasSprite;

/// Map a world position to canvas coordinates (origin top-left, `y` down).
/// Returns `None` outside the canvas.
pub fn world_to_canvas(world: Vec2, canvas_center: Vec2) -> Option<Vec2> {
    let x = world.x - canvas_center.x + CANVAS_WIDTH / 2.0;
    let y = CANVAS_HEIGHT / 2.0 - (world.y - canvas_center.y);
    ((0.0..CANVAS_WIDTH).contains(&x) && (0.0..CANVAS_HEIGHT).contains(&y))
        .then_some(Vec2::new(x, y))
}

/// Whether egui is using the pointer (hovering the toolbar or mid-click).
/// Clicks are then left to the UI.
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

pub fn emit_garden_clicks(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    canvas_q: Query<&GlobalTransform, With<GardenCanvasSprite>>,
    mut contexts: EguiContexts,
    mut clicks: EventWriter<GardenClick>,
) {
    if !buttons.just_pressed(MouseButton::Left) || egui_wants_pointer(&mut contexts) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };
    let Ok(canvas_transform) = canvas_q.get_single() else {
        return;
    };
    let Some(screen_pos) = window.cursor_position() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(cam_transform, screen_pos) else {
        return;
    };
    if let Some(position) = world_to_canvas(world, canvas_transform.translation().truncate()) {
        clicks.send(GardenClick { position });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_corners() {
        let center = Vec2::new(0.0, -22.0);
        let top_left = Vec2::new(-CANVAS_WIDTH / 2.0, -22.0 + CANVAS_HEIGHT / 2.0);
        assert_eq!(world_to_canvas(top_left, center), Some(Vec2::ZERO));
        assert_eq!(
            world_to_canvas(center, center),
            Some(Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0))
        );
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let center = Vec2::ZERO;
        let above = world_to_canvas(Vec2::new(0.0, 100.0), center).unwrap();
        let below = world_to_canvas(Vec2::new(0.0, -100.0), center).unwrap();
        assert!(above.y < below.y);
        assert_eq!(above.y, CANVAS_HEIGHT / 2.0 - 100.0);
    }

    #[test]
    fn test_outside_canvas_is_none() {
        let center = Vec2::ZERO;
        assert_eq!(world_to_canvas(Vec2::new(CANVAS_WIDTH, 0.0), center), None);
        assert_eq!(world_to_canvas(Vec2::new(0.0, CANVAS_HEIGHT), center), None);
        // The toolbar strip sits above the canvas.
        let toolbar = Vec2::new(0.0, CANVAS_HEIGHT / 2.0 + 10.0);
        assert_eq!(world_to_canvas(toolbar, center), None);
    }
}
