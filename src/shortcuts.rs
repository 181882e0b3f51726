//! Keyboard shortcuts for history navigation.
//!
//! Ctrl+Z steps back, Ctrl+Shift+Z steps forward (Cmd instead of Ctrl on
//! macOS). Alt must not be held for either.

use egui::{Key, Modifiers};

use crate::controller::Interaction;

/// Maps a key press to a navigation interaction.
pub fn navigation_shortcut(key: Key, modifiers: Modifiers) -> Option<Interaction> {
    if key != Key::Z || !modifiers.command || modifiers.alt {
        return None;
    }

    if modifiers.shift {
        Some(Interaction::ForwardRequested)
    } else {
        Some(Interaction::BackRequested)
    }
}

/// Collects the navigation interactions from this frame's key events.
pub fn navigation_shortcuts(events: &[egui::Event]) -> Vec<Interaction> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => navigation_shortcut(*key, *modifiers),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl() -> Modifiers {
        Modifiers {
            ctrl: true,
            command: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_ctrl_z_goes_back() {
        assert_eq!(navigation_shortcut(Key::Z, ctrl()), Some(Interaction::BackRequested));
    }

    #[test]
    fn test_ctrl_shift_z_goes_forward() {
        let modifiers = Modifiers { shift: true, ..ctrl() };
        assert_eq!(navigation_shortcut(Key::Z, modifiers), Some(Interaction::ForwardRequested));
    }

    #[test]
    fn test_other_combinations_are_ignored() {
        assert_eq!(navigation_shortcut(Key::Z, Modifiers::default()), None);
        assert_eq!(navigation_shortcut(Key::Y, ctrl()), None);
        assert_eq!(navigation_shortcut(Key::Z, Modifiers { alt: true, ..ctrl() }), None);
        assert_eq!(navigation_shortcut(Key::Z, Modifiers { shift: true, ..Default::default() }), None);
    }

    #[test]
    fn test_only_presses_are_collected() {
        let press = |pressed| egui::Event::Key {
            key: Key::Z,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: ctrl(),
        };
        let events = vec![press(true), press(false), egui::Event::Text("z".to_string())];
        assert_eq!(navigation_shortcuts(&events), vec![Interaction::BackRequested]);
    }
}
