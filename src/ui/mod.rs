//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the pinout viewer:
//! - Header panel (back/forward, board title, theme selector)
//! - Board panel (diagram with clickable pins and highlight arrows)
//! - Legend panel (clickable category filters)
//! - Info panel (pin details or category member list)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (keyboard shortcuts)

pub mod header;
pub mod board_panel;
pub mod legend_panel;
pub mod info_panel;
pub mod panel_manager;
pub mod input;
