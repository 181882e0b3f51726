//! Category legend rendering.

use eframe::egui;
use egui::{Sense, Stroke, Vec2};
use pinout::theme::category_color;
use pinout::{CategoryKey, CurrentView, Interaction, ThemeColors};
use crate::app::AppState;

const ROW_HEIGHT: f32 = 30.0;
const SWATCH_SIZE: f32 = 22.0;

/// Renders one clickable row per category; a click emits `CategoryClicked`.
pub fn render_legend_panel(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) -> Option<Interaction> {
    let mut interaction = None;

    let active = match state.view.current_view() {
        Some(CurrentView::Category { key, .. }) => Some(*key),
        _ => None,
    };

    for key in CategoryKey::ALL {
        let (rect, response) = ui.allocate_exact_size(Vec2::new(ui.available_width(), ROW_HEIGHT), Sense::click());
        let painter = ui.painter();

        if active == Some(key) {
            painter.rect_filled(rect, 4.0, theme_colors.selection);
        } else if response.hovered() {
            painter.rect_filled(rect, 4.0, theme_colors.hover);
        }

        let swatch = egui::Rect::from_min_size(
            rect.left_center() + Vec2::new(4.0, -SWATCH_SIZE / 2.0),
            Vec2::splat(SWATCH_SIZE),
        );
        painter.rect_filled(swatch, 2.0, category_color(key));
        painter.rect_stroke(swatch, 2.0, Stroke::new(1.0, theme_colors.border), egui::StrokeKind::Inside);

        painter.text(
            swatch.right_center() + Vec2::new(8.0, 0.0),
            egui::Align2::LEFT_CENTER,
            key.display_name(),
            egui::TextStyle::Button.resolve(ui.style()),
            theme_colors.text,
        );

        if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
            interaction = Some(Interaction::CategoryClicked(key));
        }
    }

    interaction
}
