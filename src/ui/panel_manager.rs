//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, info, legend, board) and manages their
//! layout, resizing, and interaction collection.

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::state::{MAX_PANEL_WIDTH, MIN_PANEL_WIDTH};
use crate::ui::input::keyboard_input_handler;
use crate::ui::{board_panel, header, info_panel, legend_panel};
use pinout::Interaction;

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation. Returns the interactions of
    /// this frame in the order they occurred: keyboard shortcuts first, then
    /// at most one click.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Vec<Interaction> {
        let mut interactions = keyboard_input_handler::handle_keyboard_input(ctx);
        let mut clicked: Option<Interaction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(interaction) = header::render_header(ui, state) {
                clicked = Some(interaction);
            }
        });

        // Theme may have changed in the header
        let theme_colors = color_mapping::theme_colors(state).clone();

        let side_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        // Left panel: pin or category details
        let info = egui::SidePanel::left("info_panel")
            .default_width(state.layout.info_panel_width())
            .width_range(MIN_PANEL_WIDTH..=MAX_PANEL_WIDTH)
            .resizable(true)
            .frame(side_frame)
            .show(ctx, |ui| {
                ui.heading("Pin Information");
                ui.separator();
                info_panel::render_info_panel(ui, state, &theme_colors)
            });
        if let Some(interaction) = info.inner {
            clicked = Some(interaction);
        }
        state.layout.set_info_panel_width(info.response.rect.width());

        // Right panel: category legend
        if state.layout.show_legend() {
            let legend = egui::SidePanel::right("legend_panel")
                .default_width(state.layout.legend_width())
                .width_range(MIN_PANEL_WIDTH..=MAX_PANEL_WIDTH)
                .resizable(true)
                .frame(side_frame)
                .show(ctx, |ui| {
                    ui.heading("Pin Categories");
                    ui.separator();
                    legend_panel::render_legend_panel(ui, state, &theme_colors)
                });
            if let Some(interaction) = legend.inner {
                clicked = Some(interaction);
            }
            state.layout.set_legend_width(legend.response.rect.width());
        }

        // Center: board diagram
        let board = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| board_panel::render_board_panel(ui, state, &theme_colors));
        if let Some(interaction) = board.inner {
            clicked = Some(interaction);
        }

        interactions.extend(clicked);
        interactions
    }
}
