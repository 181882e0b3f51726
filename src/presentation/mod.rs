//! Presentation layer for visual styling and color mapping.
//!
//! Keeps color decisions out of the panels:
//! - Category colors for pins, arrows and legend swatches
//! - Theme palette lookup

pub mod color_mapping;
