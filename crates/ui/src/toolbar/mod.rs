//! Garden toolbar.
//!
//! - `ui_system`: the `toolbar_ui` egui system (seeds, watering can, counters)
//! - `keybinds`: keyboard shortcuts for the same tools
//! - `widgets`: label formatting helpers

mod keybinds;
mod ui_system;
mod widgets;

#[cfg(test)]
mod tests;

pub use keybinds::{apply_tool_key, tool_keybinds};
pub use ui_system::toolbar_ui;
