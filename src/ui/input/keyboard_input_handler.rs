//! Keyboard input handling.
//!
//! Translates this frame's key presses into navigation interactions. The
//! mapping itself lives in [`pinout::shortcuts`] so it can be tested without
//! a running context.

use eframe::egui;
use pinout::{navigation_shortcuts, Interaction};

/// Returns the navigation interactions triggered by keys pressed this frame.
pub fn handle_keyboard_input(ctx: &egui::Context) -> Vec<Interaction> {
    ctx.input(|i| navigation_shortcuts(&i.events))
}
