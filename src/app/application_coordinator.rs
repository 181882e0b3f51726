//! Application-level coordination.
//!
//! Handles dataset loading at startup and routes interaction events into the
//! view controller, turning failures into the header's error banner.

use std::path::Path;
use std::sync::Arc;

use pinout::{Interaction, PinDataset};
use crate::app::AppState;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Loads the board dataset.
    ///
    /// Without a path the built-in ESP32 DevKit table is used. If the file
    /// cannot be loaded, the built-in table is used and the error is returned
    /// for display.
    pub fn load_dataset(path: Option<&Path>) -> (Arc<PinDataset>, Option<String>) {
        let Some(path) = path else {
            return (Arc::new(PinDataset::esp32_devkit()), None);
        };

        match PinDataset::load_from_path(path) {
            Ok(dataset) => {
                log::info!("loaded {} pins from {}", dataset.len(), path.display());
                (Arc::new(dataset), None)
            }
            Err(e) => {
                log::error!("{:#}", e);
                (
                    Arc::new(PinDataset::esp32_devkit()),
                    Some(format!("Error loading board definition: {:#}", e)),
                )
            }
        }
    }

    /// Applies one interaction to the view controller.
    ///
    /// A successful interaction clears the previous interaction's error. A
    /// board load failure stays visible.
    pub fn handle_interaction(state: &mut AppState, interaction: Interaction) {
        match state.view.handle(interaction) {
            Ok(()) => state.error_message = None,
            Err(e) => state.error_message = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinout::CategoryKey;

    #[test]
    fn test_default_dataset_without_path() {
        let (dataset, error) = ApplicationCoordinator::load_dataset(None);
        assert_eq!(dataset.len(), 38);
        assert!(error.is_none());
    }

    #[test]
    fn test_unreadable_path_falls_back_with_error() {
        let (dataset, error) = ApplicationCoordinator::load_dataset(Some(Path::new("/no/such/board.json")));
        assert_eq!(dataset.len(), 38);
        assert!(error.unwrap().contains("/no/such/board.json"));
    }

    #[test]
    fn test_unknown_pin_sets_error_banner_and_next_success_clears_it() {
        let mut state = AppState::default();
        ApplicationCoordinator::handle_interaction(&mut state, Interaction::PinClicked("GPIO20".to_string()));
        assert_eq!(state.error_message.as_deref(), Some("pin 'GPIO20' not found in dataset"));

        ApplicationCoordinator::handle_interaction(&mut state, Interaction::CategoryClicked(CategoryKey::Adc));
        assert!(state.error_message.is_none());
        assert_eq!(state.view.history().len(), 1);
    }

    #[test]
    fn test_load_failure_banner_survives_interactions() {
        let (dataset, error) = ApplicationCoordinator::load_dataset(Some(Path::new("/no/such/board.json")));
        let mut state = AppState::new(dataset);
        state.load_error = error;

        ApplicationCoordinator::handle_interaction(&mut state, Interaction::BackRequested);
        ApplicationCoordinator::handle_interaction(&mut state, Interaction::BackgroundClicked);
        ApplicationCoordinator::handle_interaction(&mut state, Interaction::PinClicked("GPIO2".to_string()));

        assert!(state.load_error.as_deref().is_some_and(|e| e.contains("/no/such/board.json")));
        assert!(state.error_message.is_none());
    }
}
