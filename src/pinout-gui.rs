//! ESP32 Pinout Viewer GUI Application
//!
//! Interactive pinout reference for an ESP32 development board, built with
//! egui. The viewer features:
//! - Board diagram with clickable pins and category highlight arrows
//! - Category legend that highlights every member pin
//! - Details panel for pin type, functions and notes
//! - Back/forward navigation history (Ctrl+Z / Ctrl+Shift+Z)
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Pin color mapping
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `state/` - Theme and layout state
//!
//! Pass a path to a JSON board definition as the first argument to replace
//! the built-in ESP32 DevKit table.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod presentation;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use pinout::LayoutConfig;
use state::LayoutState;
use ui::panel_manager::PanelManager;

const LAYOUT_KEY: &str = "layout";

/// Main application entry point that initializes and launches the pinout viewer GUI.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional board definition on the command line
    let board_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([LayoutConfig::WINDOW_WIDTH, LayoutConfig::WINDOW_HEIGHT])
            .with_title("ESP32 Pinout Reference"),
        ..Default::default()
    };

    eframe::run_native(
        "ESP32 Pinout Reference",
        options,
        Box::new(move |cc| Ok(Box::new(PinoutViewerApp::new(cc, board_file)))),
    )
}

/// The main pinout viewer application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles dataset loading and interaction dispatch
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct PinoutViewerApp {
    /// Centralized application state
    state: AppState,
}

impl PinoutViewerApp {
    /// Creates a new viewer with theme and layout settings loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, board_file: Option<PathBuf>) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let layout = SettingsCoordinator::load_setting_or(cc.storage, LAYOUT_KEY, LayoutState::new());

        let (dataset, error) = ApplicationCoordinator::load_dataset(board_file.as_deref());
        log::info!("showing {} ({} pins)", dataset.board, dataset.len());

        let mut state = AppState::with_theme_and_layout(dataset, current_theme_name, layout);
        state.load_error = error;

        Self { state }
    }
}

impl eframe::App for PinoutViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, LAYOUT_KEY, &self.state.layout);
    }

    /// Main update loop:
    /// 1. Apply theme
    /// 2. Render all panels via PanelManager
    /// 3. Dispatch the collected interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        for interaction in PanelManager::render_all_panels(ctx, &mut self.state) {
            log::debug!("interaction: {:?}", interaction);
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction);
        }
    }
}
