//! Info panel rendering.
//!
//! Shows either the selected pin's details or the member list of the
//! selected category. Category members are clickable and open that pin.

use eframe::egui;
use egui::{Color32, RichText};
use pinout::theme::{hex_to_color32, tag_color, TYPE_TAG_COLOR};
use pinout::{CurrentView, Interaction, PinDataset, PinRecord, ThemeColors};
use crate::app::AppState;

const TAG_RADIUS: f32 = 16.0;

/// Renders the info panel and returns a pin click, if any.
pub fn render_info_panel(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) -> Option<Interaction> {
    let mut interaction = None;

    egui::ScrollArea::vertical()
        .id_salt("info_panel_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| match state.view.current_view() {
            None => {
                ui.label(
                    RichText::new("Click a pin or a category to see details")
                        .italics()
                        .color(theme_colors.text_dim),
                );
            }
            Some(CurrentView::Pin { record, .. }) => render_pin_details(ui, record, theme_colors),
            Some(CurrentView::Category { name, pins, .. }) => {
                interaction = render_category(ui, state.view.dataset(), name, pins);
            }
        });

    interaction
}

fn render_pin_details(ui: &mut egui::Ui, record: &PinRecord, theme_colors: &ThemeColors) {
    ui.heading(&record.name);
    ui.add_space(8.0);

    ui.label(RichText::new("Type:").strong());
    static_tag(ui, record.pin_type.label(), hex_to_color32(TYPE_TAG_COLOR));
    ui.add_space(8.0);

    ui.label(RichText::new("Functions:").strong());
    for (i, function) in record.functions.iter().enumerate() {
        static_tag(ui, function, tag_color(i));
    }

    if let Some(note) = &record.note {
        ui.add_space(8.0);
        ui.label(RichText::new(format!("⚠ Note: {}", note)).color(theme_colors.note));
    }
}

fn render_category(ui: &mut egui::Ui, dataset: &PinDataset, name: &str, pins: &[String]) -> Option<Interaction> {
    let mut interaction = None;

    ui.heading(format!("{} ({} pins)", name, pins.len()));
    ui.add_space(8.0);
    ui.label(RichText::new("Pins in this category:").strong());

    for (i, pin_id) in pins.iter().enumerate() {
        let label = dataset.lookup(pin_id).map_or(pin_id.as_str(), |record| record.name.as_str());
        let button = egui::Button::new(RichText::new(label).color(Color32::WHITE).strong())
            .fill(tag_color(i))
            .corner_radius(TAG_RADIUS)
            .min_size(egui::vec2(ui.available_width(), 32.0));

        if ui.add(button).on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
            interaction = Some(Interaction::PinClicked(pin_id.clone()));
        }
    }

    interaction
}

fn static_tag(ui: &mut egui::Ui, text: &str, fill: Color32) {
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(TAG_RADIUS)
        .inner_margin(egui::Margin::symmetric(16, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(Color32::WHITE).strong());
        });
}
