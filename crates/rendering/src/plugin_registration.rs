use bevy::prelude::*;
use simulation::GardenSet;

use crate::*;

/// Register all rendering systems.
///
/// Input runs before the interaction handler so a click is applied in the
/// frame it happened; drawing runs after every simulation set.
pub(crate) fn register_rendering_systems(app: &mut App) {
    app.add_systems(Startup, camera::setup_garden_view);

    app.add_systems(
        Update,
        input::emit_garden_clicks.before(GardenSet::Interaction),
    );

    app.add_systems(Update, draw::render_garden.after(GardenSet::Cosmetic));
}
