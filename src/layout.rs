//! Diagram geometry.
//!
//! All coordinates are in design space: a fixed 1500×800 canvas with the
//! board image centered in it. The GUI scales design space onto whatever
//! rectangle it has available, so placements here never depend on the
//! window size.

use crate::highlight::Direction;

/// Design-space layout constants.
pub struct LayoutConfig;

impl LayoutConfig {
    pub const WINDOW_WIDTH: f32 = 1500.0;
    pub const WINDOW_HEIGHT: f32 = 800.0;
    pub const IMAGE_ASPECT_RATIO: f32 = 214.0 / 105.0;
    pub const IMAGE_WIDTH: f32 = 300.0;

    pub const PIN_BUTTON_WIDTH: f32 = 36.0;
    pub const PIN_BUTTON_HEIGHT: f32 = 20.0;
    pub const PIN_VERTICAL_STEP: f32 = 27.0;

    /// Offset of the right pin column from the image's right edge
    pub const RIGHT_COLUMN_INSET: f32 = 35.0;
    /// Distance of the GPIO0 row above the image bottom
    pub const GPIO0_ROW_FROM_BOTTOM: f32 = 182.0;

    /// Image size in design space, height truncated to whole units.
    pub fn image_dimensions() -> (f32, f32) {
        let width = Self::IMAGE_WIDTH;
        let height = (width * Self::IMAGE_ASPECT_RATIO).trunc();
        (width, height)
    }

    /// Centered image bounds as `(start_x, end_x, top_y, bottom_y)`.
    pub fn image_position() -> (f32, f32, f32, f32) {
        let (width, height) = Self::image_dimensions();
        let start_x = ((Self::WINDOW_WIDTH - width) / 2.0).trunc();
        let end_x = ((Self::WINDOW_WIDTH + width) / 2.0).trunc();
        let top_y = ((Self::WINDOW_HEIGHT - height) / 2.0).trunc();
        let bottom_y = ((Self::WINDOW_HEIGHT + height) / 2.0).trunc();
        (start_x, end_x, top_y, bottom_y)
    }
}

/// Which header row of the board a pin sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardSide {
    Left,
    Right,
}

/// Clickable hotspot of a pin in design space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinPlacement {
    pub side: BoardSide,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PinPlacement {
    /// Direction of the highlight arrow: pins in the left half of the
    /// content area point right, all others point left.
    pub fn arrow_direction(&self, content_width: f32) -> Direction {
        if self.x < content_width / 2.0 {
            Direction::PointsRight
        } else {
            Direction::PointsLeft
        }
    }
}

/// Row of each pin relative to GPIO0: `(side, steps, extra units)`.
const PIN_ROWS: [(&str, BoardSide, i32, i32); 38] = [
    ("GPIO0", BoardSide::Right, 0, 0),
    ("GPIO1", BoardSide::Right, -10, -4),
    ("GPIO2", BoardSide::Right, 1, 1),
    ("GPIO3", BoardSide::Right, -9, -3),
    ("GPIO4", BoardSide::Right, -1, 0),
    ("GPIO5", BoardSide::Right, -4, -1),
    ("GPIO6", BoardSide::Right, 5, 2),
    ("GPIO7", BoardSide::Right, 4, 2),
    ("GPIO8", BoardSide::Right, 3, 2),
    ("GPIO9", BoardSide::Left, 2, 1),
    ("GPIO10", BoardSide::Left, 3, 2),
    ("GPIO11", BoardSide::Left, 4, 2),
    ("GPIO12", BoardSide::Left, -1, 0),
    ("GPIO13", BoardSide::Left, 1, 1),
    ("GPIO14", BoardSide::Left, -2, 0),
    ("GPIO15", BoardSide::Right, 2, 1),
    ("GPIO16", BoardSide::Right, -2, 0),
    ("GPIO17", BoardSide::Right, -3, -1),
    ("GPIO18", BoardSide::Right, -5, -2),
    ("GPIO19", BoardSide::Right, -6, -2),
    ("GPIO21", BoardSide::Right, -8, -3),
    ("GPIO22", BoardSide::Right, -11, -4),
    ("GPIO23", BoardSide::Right, -12, -4),
    ("GPIO25", BoardSide::Left, -5, -2),
    ("GPIO26", BoardSide::Left, -4, -1),
    ("GPIO27", BoardSide::Left, -3, -1),
    ("GPIO32", BoardSide::Left, -7, -2),
    ("GPIO33", BoardSide::Left, -6, -2),
    ("GPIO34", BoardSide::Left, -9, -3),
    ("GPIO35", BoardSide::Left, -8, -3),
    ("GPIO36", BoardSide::Left, -11, -4),
    ("GPIO39", BoardSide::Left, -10, -4),
    ("EN", BoardSide::Left, -12, -4),
    ("VIN", BoardSide::Left, 5, 2),
    ("GND1", BoardSide::Right, -7, -2),
    ("GND2", BoardSide::Right, -13, -5),
    ("GND3", BoardSide::Left, 0, 0),
    ("3V3", BoardSide::Left, -13, -5),
];

/// Returns the hotspot of a pin, or `None` if the diagram has no such pin.
pub fn pin_placement(pin_id: &str) -> Option<PinPlacement> {
    let (_, side, steps, extra) = PIN_ROWS.iter().find(|(id, ..)| *id == pin_id)?;
    Some(placement_for(*side, *steps, *extra))
}

/// All placements in table order.
pub fn pin_placements() -> impl Iterator<Item = (&'static str, PinPlacement)> {
    PIN_ROWS
        .iter()
        .map(|(id, side, steps, extra)| (*id, placement_for(*side, *steps, *extra)))
}

fn placement_for(side: BoardSide, steps: i32, extra: i32) -> PinPlacement {
    let (img_start, img_end, _, img_bottom) = LayoutConfig::image_position();
    let gpio0_y = img_bottom - LayoutConfig::GPIO0_ROW_FROM_BOTTOM;
    let x = match side {
        BoardSide::Left => img_start,
        BoardSide::Right => img_end - LayoutConfig::RIGHT_COLUMN_INSET,
    };

    PinPlacement {
        side,
        x,
        y: gpio0_y + LayoutConfig::PIN_VERTICAL_STEP * steps as f32 + extra as f32,
        width: LayoutConfig::PIN_BUTTON_WIDTH,
        height: LayoutConfig::PIN_BUTTON_HEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PinDataset;

    #[test]
    fn test_image_is_centered() {
        assert_eq!(LayoutConfig::image_dimensions(), (300.0, 611.0));
        assert_eq!(LayoutConfig::image_position(), (600.0, 900.0, 94.0, 705.0));
    }

    #[test]
    fn test_columns() {
        let gpio0 = pin_placement("GPIO0").unwrap();
        assert_eq!(gpio0.x, 865.0);
        assert_eq!(gpio0.y, 523.0);

        let gpio1 = pin_placement("GPIO1").unwrap();
        assert_eq!(gpio1.y, 523.0 - 270.0 - 4.0);

        let en = pin_placement("EN").unwrap();
        assert_eq!(en.side, BoardSide::Left);
        assert_eq!(en.x, 600.0);
    }

    #[test]
    fn test_every_builtin_pin_has_a_placement() {
        let dataset = PinDataset::esp32_devkit();
        for id in dataset.pin_ids() {
            assert!(pin_placement(id).is_some(), "no placement for {}", id);
        }
        assert_eq!(pin_placements().count(), dataset.len());
    }

    #[test]
    fn test_arrow_points_away_from_board_edge() {
        let width = LayoutConfig::WINDOW_WIDTH;
        for (id, placement) in pin_placements() {
            let expected = match placement.side {
                BoardSide::Left => Direction::PointsRight,
                BoardSide::Right => Direction::PointsLeft,
            };
            assert_eq!(placement.arrow_direction(width), expected, "pin {}", id);
        }
    }
}
