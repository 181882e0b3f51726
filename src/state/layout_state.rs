//! UI layout state management.
//!
//! Panel widths and legend visibility, persisted between sessions.

use serde::{Deserialize, Serialize};

/// Narrowest allowed side panel.
pub const MIN_PANEL_WIDTH: f32 = 180.0;
/// Widest allowed side panel.
pub const MAX_PANEL_WIDTH: f32 = 480.0;

/// State related to UI layout and sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutState {
    /// Width of the info panel on the left
    info_panel_width: f32,
    /// Width of the legend panel on the right
    legend_width: f32,
    /// Whether the legend panel is shown
    show_legend: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self {
            info_panel_width: 280.0,
            legend_width: 200.0,
            show_legend: true,
        }
    }

    // ===== Layout Queries =====

    pub fn info_panel_width(&self) -> f32 {
        self.info_panel_width
    }

    pub fn legend_width(&self) -> f32 {
        self.legend_width
    }

    pub fn show_legend(&self) -> bool {
        self.show_legend
    }

    // ===== Layout Mutations =====

    /// Records the info panel width after a user resize.
    pub fn set_info_panel_width(&mut self, width: f32) {
        self.info_panel_width = width.clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH);
    }

    /// Records the legend width after a user resize.
    pub fn set_legend_width(&mut self, width: f32) {
        self.legend_width = width.clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH);
    }

    /// Returns a mutable reference to the legend toggle (for UI checkboxes).
    pub(crate) fn show_legend_mut(&mut self) -> &mut bool {
        &mut self.show_legend
    }
}
