//! Header panel UI rendering
//!
//! Back/forward buttons, the board title and the theme selector.

use eframe::egui;
use egui::Color32;
use pinout::Interaction;
use crate::app::AppState;

/// Renders the header and returns a navigation request, if any.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<Interaction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let back = ui
            .add_enabled(state.view.can_go_back(), egui::Button::new("◀ Back"))
            .on_hover_text("Ctrl+Z");
        if back.clicked() {
            interaction = Some(Interaction::BackRequested);
        }

        let forward = ui
            .add_enabled(state.view.can_go_forward(), egui::Button::new("Forward ▶"))
            .on_hover_text("Ctrl+Shift+Z");
        if forward.clicked() {
            interaction = Some(Interaction::ForwardRequested);
        }

        ui.separator();
        ui.heading(format!("{} Pinout", state.view.dataset().board));

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut current_theme = state.theme.current_theme_name().to_string();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    let manager = state.theme.theme_manager();
                    for theme_name in manager.list_themes() {
                        let description = manager.get_theme(theme_name).map_or("", |t| t.description.as_str());
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name)
                            .on_hover_text(description);
                    }
                });

            if current_theme != state.theme.current_theme_name() {
                log::debug!("theme changed to {}", current_theme);
                state.theme.set_theme(current_theme);
            }

            ui.label("Theme:");
            ui.separator();
            ui.checkbox(state.layout.show_legend_mut(), "Legend");
        });
    });

    for err in state.load_error.iter().chain(&state.error_message) {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
