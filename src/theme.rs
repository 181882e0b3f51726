//! Theme support for the pinout viewer.
//!
//! Provides the window themes (Light, Dark, Dracula) plus the fixed category
//! palette used for the legend swatches and pin highlights. Category colors
//! are the same in every theme so the legend always matches the diagram.
//!
//! # Examples
//!
//! ```
//! use pinout::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! println!("Dark panel: {:?}", dark.colors.panel_background);
//! ```

use egui::Color32;
use std::collections::HashMap;

use crate::category::CategoryKey;

/// Name of the theme used when no preference is stored.
pub const DEFAULT_THEME: &str = "Light";

/// Alpha of the pin hover/highlight fill.
const HIGHLIGHT_ALPHA: u8 = 80;

/// Color palette for a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Board diagram
    pub board: Color32,
    pub board_outline: Color32,
    pub note: Color32,
}

/// A theme definition with metadata and palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    /// Copy of the default theme
    fallback: Theme,
}

impl ThemeManager {
    /// Creates a manager holding all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Dracula".to_string(), dracula_theme());

        Self {
            themes,
            fallback: light_theme(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to the default theme
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Returns all theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.warn_fg_color = colors.note;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme matching the printed pinout card".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(236, 240, 241),
            panel_background: Color32::from_rgb(248, 249, 250),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: hex_to_color32("#2c3e50"),
            text_dim: Color32::from_rgb(120, 120, 120),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: hex_to_color32("#2c3e50"),

            board: hex_to_color32("#1b1f23"),
            board_outline: hex_to_color32("#2c3e50"),
            note: hex_to_color32("#e67e22"),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default colors".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(39, 39, 39),
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            board: Color32::from_rgb(12, 12, 12),
            board_outline: Color32::from_rgb(130, 130, 130),
            note: Color32::from_rgb(243, 156, 18),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#282a36"),
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),

            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),

            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            board: hex_to_color32("#191a21"),
            board_outline: hex_to_color32("#6272a4"),
            note: hex_to_color32("#ffb86c"),
        },
    }
}

/// Opaque legend swatch color of a category
pub fn category_color(key: CategoryKey) -> Color32 {
    hex_to_color32(key.legend_color())
}

/// Translucent fill drawn over a hovered or highlighted pin
pub fn category_highlight_color(key: CategoryKey) -> Color32 {
    let base = category_color(key);
    Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), HIGHLIGHT_ALPHA)
}

/// Rotating palette for function tags and category member tags
pub const TAG_COLORS: [&str; 6] = ["#3498db", "#9b59b6", "#e74c3c", "#f39c12", "#1abc9c", "#34495e"];

/// Color of the pin-type tag in the detail panel
pub const TYPE_TAG_COLOR: &str = "#16a085";

/// Returns the tag color for the item at `index`
pub fn tag_color(index: usize) -> Color32 {
    hex_to_color32(TAG_COLORS[index % TAG_COLORS.len()])
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Scales a color's brightness (1.0 = unchanged, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#0080FF"), Color32::from_rgb(0, 128, 255));
        assert_eq!(hex_to_color32("bad"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_default_theme_fallback() {
        let manager = ThemeManager::new();
        assert_eq!(manager.theme_or_default("Missing").name, DEFAULT_THEME);
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light"]);
    }

    #[test]
    fn test_highlight_color_is_translucent() {
        for key in CategoryKey::ALL {
            assert_eq!(category_highlight_color(key).a(), HIGHLIGHT_ALPHA, "category {}", key);
        }
        assert_eq!(category_color(CategoryKey::Power), Color32::from_rgb(150, 98, 254));
    }

    #[test]
    fn test_tag_colors_rotate() {
        assert_eq!(tag_color(0), tag_color(6));
        assert_ne!(tag_color(0), tag_color(1));
    }
}
