//! Highlighted pins on the diagram.
//!
//! The highlight set is owned by the view controller; the renderer draws
//! whatever set it is handed and keeps no highlight state of its own.

use std::collections::BTreeMap;

use crate::pin::PinId;

/// Arrow drawn next to a highlighted pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    PointsLeft,
    PointsRight,
}

impl Direction {
    /// Glyph used for the arrow label.
    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::PointsLeft => "◄",
            Direction::PointsRight => "►",
        }
    }
}

/// Pins currently emphasized, each with its arrow direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    pins: BTreeMap<PinId, Direction>,
}

impl HighlightSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            pins: BTreeMap::new(),
        }
    }

    /// Returns true if nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Number of highlighted pins.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Returns true if the pin is highlighted.
    pub fn contains(&self, pin_id: &str) -> bool {
        self.pins.contains_key(pin_id)
    }

    /// Arrow direction of a highlighted pin.
    pub fn direction(&self, pin_id: &str) -> Option<Direction> {
        self.pins.get(pin_id).copied()
    }

    /// Iterates highlighted pins in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&PinId, Direction)> {
        self.pins.iter().map(|(id, dir)| (id, *dir))
    }

    /// Replaces the whole set.
    pub fn replace(&mut self, pins: impl IntoIterator<Item = (PinId, Direction)>) {
        self.pins.clear();
        self.pins.extend(pins);
    }

    /// Removes every highlight. Idempotent.
    pub fn clear(&mut self) {
        self.pins.clear();
    }
}
