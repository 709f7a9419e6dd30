use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::sim_rng::SimRng;

mod launch;

fn main() {
    let mut app = App::new();

    let size = rendering::camera::window_size();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Pixel Garden".to_string(),
                    resolution: (size.x, size.y).into(),
                    resizable: false,
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .insert_resource(ClearColor(Color::srgb_u8(46, 36, 28)))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    });

    // Overrides are inserted before the simulation plugin initializes defaults.
    app.insert_resource(launch::params_from(std::env::var(launch::PARAMS_VAR).ok()));
    if let Some(seed) = launch::seed_from(std::env::var(launch::SEED_VAR).ok()) {
        info!("Garden seed {seed}");
        app.insert_resource(SimRng::from_seed_u64(seed));
    }

    app.add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // Screenshot mode: saves one frame and exits
    if let Ok(path) = std::env::var(launch::SCREENSHOT_VAR) {
        app.insert_resource(ScreenshotRequest { frame: 0, path });
        app.add_systems(Update, drive_screenshot);
    }

    app.run();
}

/// Frames to wait so that the canvas has been drawn and uploaded.
const SCREENSHOT_DELAY_FRAMES: u32 = 30;
/// Frames to wait for the capture to be written before exiting.
const SCREENSHOT_SAVE_FRAMES: u32 = 20;

#[derive(Resource)]
struct ScreenshotRequest {
    frame: u32,
    path: String,
}

fn drive_screenshot(
    mut commands: Commands,
    mut request: ResMut<ScreenshotRequest>,
    mut exit: EventWriter<AppExit>,
) {
    request.frame += 1;
    if request.frame == SCREENSHOT_DELAY_FRAMES {
        info!("Saving screenshot to {}", request.path);
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(request.path.clone()));
    } else if request.frame > SCREENSHOT_DELAY_FRAMES + SCREENSHOT_SAVE_FRAMES {
        exit.send(AppExit::Success);
    }
}
