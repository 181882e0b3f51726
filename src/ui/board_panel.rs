//! Board diagram rendering.
//!
//! Draws the board outline, one clickable hotspot per placed pin and, for
//! every highlighted pin, a colored border plus an arrow pointing at it. The
//! diagram is laid out in design space (see [`pinout::layout`]) and scaled to
//! fit the central panel.

use eframe::egui;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};
use pinout::theme::adjust_brightness;
use pinout::{pin_placements, BoardSide, Direction, Interaction, LayoutConfig, PinPlacement, ThemeColors};
use crate::app::AppState;
use crate::presentation::color_mapping;

/// Design-space margin kept around the board image for labels and arrows.
const FRAME_MARGIN: f32 = 60.0;

/// Highlight border width in design units.
const HIGHLIGHT_BORDER: f32 = 3.0;

/// Gap between a hotspot and its arrow in design units.
const ARROW_GAP: f32 = 5.0;

/// Maps design-space coordinates onto a screen rectangle, preserving aspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramTransform {
    design_min: Pos2,
    origin: Pos2,
    scale: f32,
}

impl DiagramTransform {
    /// Design-space region shown by the diagram: the board image plus margin.
    pub fn design_frame() -> Rect {
        let (start_x, end_x, top_y, bottom_y) = LayoutConfig::image_position();
        Rect::from_min_max(
            Pos2::new(start_x - FRAME_MARGIN, top_y - FRAME_MARGIN / 3.0),
            Pos2::new(end_x + FRAME_MARGIN, bottom_y + FRAME_MARGIN / 3.0),
        )
    }

    /// Fits the design frame into `available`, centered.
    pub fn fit(available: Rect) -> Self {
        let frame = Self::design_frame();
        let scale = (available.width() / frame.width())
            .min(available.height() / frame.height())
            .max(f32::EPSILON);
        let used = frame.size() * scale;
        let origin = available.center() - used / 2.0;
        Self {
            design_min: frame.min,
            origin,
            scale,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_screen(&self, x: f32, y: f32) -> Pos2 {
        self.origin + (Pos2::new(x, y) - self.design_min) * self.scale
    }

    pub fn rect(&self, x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect::from_min_size(self.to_screen(x, y), Vec2::new(width, height) * self.scale)
    }

    /// Screen-space hotspot of a pin.
    pub fn pin_rect(&self, placement: &PinPlacement) -> Rect {
        self.rect(placement.x, placement.y, placement.width, placement.height)
    }

    /// Screen position of the arrow's center for a highlighted pin.
    ///
    /// Left-column arrows sit left of the hotspot, right-column arrows right
    /// of it.
    pub fn arrow_anchor(&self, placement: &PinPlacement) -> Pos2 {
        let center_y = placement.y + placement.height / 2.0;
        let x = match placement.side {
            BoardSide::Left => placement.x - (placement.width / 2.0 + ARROW_GAP),
            BoardSide::Right => placement.x + placement.width + ARROW_GAP,
        };
        self.to_screen(x, center_y)
    }
}

/// Renders the board diagram and returns the interaction it triggered.
pub fn render_board_panel(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) -> Option<Interaction> {
    let mut interaction = None;

    let canvas = ui.available_rect_before_wrap();
    let canvas_response = ui.allocate_rect(canvas, Sense::click());
    let transform = DiagramTransform::fit(canvas);
    let painter = ui.painter_at(canvas);

    painter.rect_filled(canvas, 0.0, theme_colors.background);
    paint_board(&painter, &transform, theme_colors);

    let dataset = state.view.dataset();
    let highlights = state.view.highlights();
    let font = egui::FontId::proportional((10.0 * transform.scale()).max(6.0));

    for (pin_id, placement) in pin_placements() {
        let Some(record) = dataset.lookup(pin_id) else {
            continue;
        };

        let rect = transform.pin_rect(&placement);
        let response = ui
            .interact(rect, ui.id().with(("pin", pin_id)), Sense::click())
            .on_hover_text(record.name.as_str());

        let highlighted = highlights.direction(pin_id);
        if response.hovered() || highlighted.is_some() {
            painter.rect_filled(rect, 2.0, color_mapping::pin_fill_color(dataset, pin_id));
        }
        if highlighted.is_some() {
            painter.rect_stroke(
                rect,
                2.0,
                Stroke::new(HIGHLIGHT_BORDER * transform.scale(), theme_colors.border),
                egui::StrokeKind::Outside,
            );
        }

        paint_pin_label(&painter, &transform, &placement, pin_id, font.clone(), theme_colors);

        if let Some(direction) = highlighted {
            paint_arrow(&painter, &transform, &placement, direction, color_mapping::pin_arrow_color(dataset, pin_id));
        }

        if response.clicked() {
            interaction = Some(Interaction::PinClicked(pin_id.to_string()));
        }
    }

    if interaction.is_none() && canvas_response.clicked() {
        interaction = Some(Interaction::BackgroundClicked);
    }

    interaction
}

fn paint_board(painter: &egui::Painter, transform: &DiagramTransform, theme_colors: &ThemeColors) {
    let (start_x, end_x, top_y, bottom_y) = LayoutConfig::image_position();
    let board = transform.rect(start_x, top_y, end_x - start_x, bottom_y - top_y);
    let radius = 8.0 * transform.scale();

    painter.rect_filled(board, radius, theme_colors.board);
    painter.rect_stroke(
        board,
        radius,
        Stroke::new(2.0, theme_colors.board_outline),
        egui::StrokeKind::Outside,
    );

    // Module shield near the antenna end
    let width = end_x - start_x;
    let shield = transform.rect(start_x + width * 0.2, top_y + 20.0, width * 0.6, 170.0);
    painter.rect_filled(shield, 4.0 * transform.scale(), adjust_brightness(theme_colors.board_outline, 1.6));
    painter.text(
        shield.center(),
        egui::Align2::CENTER_CENTER,
        "ESP32",
        egui::FontId::proportional(24.0 * transform.scale()),
        theme_colors.board,
    );

    // USB connector
    let usb = transform.rect(start_x + width * 0.38, bottom_y - 30.0, width * 0.24, 36.0);
    painter.rect_filled(usb, 2.0, Color32::from_gray(170));
}

fn paint_pin_label(
    painter: &egui::Painter,
    transform: &DiagramTransform,
    placement: &PinPlacement,
    pin_id: &str,
    font: egui::FontId,
    theme_colors: &ThemeColors,
) {
    let center_y = placement.y + placement.height / 2.0;
    let (pos, align) = match placement.side {
        BoardSide::Left => (
            transform.to_screen(placement.x + placement.width + 4.0, center_y),
            egui::Align2::LEFT_CENTER,
        ),
        BoardSide::Right => (transform.to_screen(placement.x - 4.0, center_y), egui::Align2::RIGHT_CENTER),
    };
    painter.text(pos, align, pin_id, font, adjust_brightness(theme_colors.text_dim, 1.2));
}

fn paint_arrow(
    painter: &egui::Painter,
    transform: &DiagramTransform,
    placement: &PinPlacement,
    direction: Direction,
    color: Color32,
) {
    painter.text(
        transform.arrow_anchor(placement),
        egui::Align2::CENTER_CENTER,
        direction.glyph(),
        egui::FontId::proportional(20.0 * transform.scale()),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinout::pin_placement;

    #[test]
    fn test_fit_preserves_aspect_and_centers() {
        let frame = DiagramTransform::design_frame();
        let available = Rect::from_min_size(Pos2::ZERO, Vec2::new(frame.width() * 4.0, frame.height()));
        let transform = DiagramTransform::fit(available);

        assert!((transform.scale() - 1.0).abs() < 1e-4);
        let min = transform.to_screen(frame.min.x, frame.min.y);
        let max = transform.to_screen(frame.max.x, frame.max.y);
        assert!((min.y - 0.0).abs() < 1e-3);
        assert!(((min.x + max.x) / 2.0 - available.center().x).abs() < 1e-3);
    }

    #[test]
    fn test_arrows_sit_outside_the_hotspot() {
        let frame = DiagramTransform::design_frame();
        let transform = DiagramTransform::fit(frame);

        let left = pin_placement("GPIO34").unwrap();
        assert!(transform.arrow_anchor(&left).x < transform.pin_rect(&left).min.x);

        let right = pin_placement("GPIO21").unwrap();
        assert!(transform.arrow_anchor(&right).x > transform.pin_rect(&right).max.x);
    }

    #[test]
    fn test_every_pin_is_inside_the_frame() {
        let frame = DiagramTransform::design_frame();
        for (pin_id, placement) in pin_placements() {
            let rect = Rect::from_min_size(
                Pos2::new(placement.x, placement.y),
                Vec2::new(placement.width, placement.height),
            );
            assert!(frame.contains_rect(rect), "{} outside diagram", pin_id);
        }
    }
}
