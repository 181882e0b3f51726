//! Color mapping for pins on the board diagram.
//!
//! A pin is colored by its style category (first explicit category list that
//! contains it, otherwise "default"), both for its hover fill and for the
//! arrow drawn next to it while highlighted.

use egui::Color32;
use pinout::theme::{category_color, category_highlight_color};
use pinout::{style_category, PinDataset, ThemeColors};
use crate::app::AppState;

/// Returns the current theme's color palette.
pub fn theme_colors(state: &AppState) -> &ThemeColors {
    &state.theme.current_theme().colors
}

/// Translucent fill for a hovered or highlighted pin.
pub fn pin_fill_color(dataset: &PinDataset, pin_id: &str) -> Color32 {
    category_highlight_color(style_category(dataset, pin_id))
}

/// Opaque color for a highlighted pin's arrow.
pub fn pin_arrow_color(dataset: &PinDataset, pin_id: &str) -> Color32 {
    category_color(style_category(dataset, pin_id))
}
