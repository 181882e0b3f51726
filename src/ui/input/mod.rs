//! Input handling subsystem for UI interactions.
//!
//! - Keyboard shortcuts for history navigation

pub mod keyboard_input_handler;
