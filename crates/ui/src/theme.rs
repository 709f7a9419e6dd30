use bevy_egui::{egui, EguiContexts};

pub fn apply_garden_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Dark soil background with leafy highlights
    let panel = egui::Color32::from_rgb(46, 36, 28);
    let inactive = egui::Color32::from_rgb(70, 56, 42);
    let hover = egui::Color32::from_rgb(92, 120, 70);
    let active = egui::Color32::from_rgb(76, 175, 80);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.panel_fill = panel;
    style.visuals.window_fill = panel;

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    // Square corners to match the pixel art
    let corner = egui::CornerRadius::same(0);
    style.visuals.widgets.noninteractive.corner_radius = corner;
    style.visuals.widgets.inactive.corner_radius = corner;
    style.visuals.widgets.hovered.corner_radius = corner;
    style.visuals.widgets.active.corner_radius = corner;

    ctx.set_style(style);
}
