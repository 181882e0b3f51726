//! Generic settings persistence coordination.
//!
//! Stores any serializable setting in eframe's persistent storage as a JSON
//! string. Used for the layout state; the theme goes through
//! [`ThemeCoordinator`](super::ThemeCoordinator) as a plain string.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// A missing key or a value that no longer deserializes yields `default`.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring stored setting '{}': {}", key, e);
                None
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("failed to serialize setting '{}': {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ThemeCoordinator;
    use crate::state::LayoutState;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_layout() {
        let mut storage = MockStorage::new();
        let mut layout = LayoutState::new();
        layout.set_info_panel_width(320.0);

        SettingsCoordinator::save_setting(&mut storage, "layout", &layout);

        let loaded: LayoutState = SettingsCoordinator::load_setting_or(Some(&storage), "layout", LayoutState::new());
        assert_eq!(loaded, layout);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let storage = MockStorage::new();
        let loaded: f32 = SettingsCoordinator::load_setting_or(Some(&storage), "missing", 1.5);
        assert_eq!(loaded, 1.5);

        let loaded: f32 = SettingsCoordinator::load_setting_or(None, "missing", 2.5);
        assert_eq!(loaded, 2.5);
    }

    #[test]
    fn test_corrupt_value_is_ignored() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, "layout", "not json".to_string());

        let result: Option<LayoutState> = SettingsCoordinator::try_load_setting(Some(&storage), "layout");
        assert_eq!(result, None);
    }

    #[test]
    fn test_theme_preference_round_trip() {
        let mut storage = MockStorage::new();
        assert_eq!(ThemeCoordinator::load_theme_from_storage(Some(&storage)), "Light");

        ThemeCoordinator::save_theme_to_storage(&mut storage, "Dracula");
        assert_eq!(ThemeCoordinator::load_theme_from_storage(Some(&storage)), "Dracula");
    }
}
