//! Centralized application state for the pinout viewer.
//!
//! Composes the navigation/highlight core from the library with the
//! GUI-only state components.

use std::sync::Arc;

use pinout::{PinDataset, ViewController};
use crate::state::{LayoutState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Navigation history, highlights and the current view
    pub view: ViewController,

    /// Theme and styling state
    pub theme: ThemeState,

    /// UI layout state
    pub layout: LayoutState,

    /// Error from the last interaction, cleared by the next successful one
    pub error_message: Option<String>,

    /// Board definition load failure, shown for the whole session
    pub load_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(PinDataset::esp32_devkit()))
    }
}

impl AppState {
    /// Creates a new application state over the given dataset.
    pub fn new(dataset: Arc<PinDataset>) -> Self {
        Self {
            view: ViewController::new(dataset),
            theme: ThemeState::new(),
            layout: LayoutState::new(),
            error_message: None,
            load_error: None,
        }
    }

    /// Creates a new AppState with theme and layout settings loaded from storage.
    pub fn with_theme_and_layout(dataset: Arc<PinDataset>, theme_name: String, layout: LayoutState) -> Self {
        Self {
            view: ViewController::new(dataset),
            theme: ThemeState::with_theme(theme_name),
            layout,
            error_message: None,
            load_error: None,
        }
    }
}
