//! State management modules for the pinout viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (theme manager, current theme)
//! - Layout state (panel widths, legend visibility)
//!
//! Navigation history and highlights live in [`pinout::ViewController`].

mod theme_state;
mod layout_state;

pub use theme_state::ThemeState;
pub use layout_state::{LayoutState, MAX_PANEL_WIDTH, MIN_PANEL_WIDTH};
