//! Theme and styling state management.

use pinout::theme::DEFAULT_THEME;
use pinout::{Theme, ThemeManager};

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Owning the theme registry
/// - Tracking the selected theme name
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// Name of currently selected theme
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the default theme.
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME.to_string())
    }

    /// Creates a new theme state with a specific theme.
    ///
    /// Unknown names fall back to the default theme.
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.get_theme(&theme_name).is_some() {
            theme_name
        } else {
            log::warn!("unknown theme '{}', using {}", theme_name, DEFAULT_THEME);
            DEFAULT_THEME.to_string()
        };

        Self {
            theme_manager,
            current_theme_name,
        }
    }

    // ===== Theme Queries =====

    /// Returns a reference to the theme manager.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Returns the name of the current theme.
    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Returns the current theme.
    pub fn current_theme(&self) -> &Theme {
        self.theme_manager.theme_or_default(&self.current_theme_name)
    }

    // ===== Theme Mutations =====

    /// Sets the current theme by name.
    pub fn set_theme(&mut self, theme_name: String) {
        self.current_theme_name = theme_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back() {
        let state = ThemeState::with_theme("Solarized".to_string());
        assert_eq!(state.current_theme_name(), DEFAULT_THEME);
    }

    #[test]
    fn test_set_theme() {
        let mut state = ThemeState::new();
        state.set_theme("Dark".to_string());
        assert_eq!(state.current_theme().name, "Dark");
    }
}
