pub mod error;
pub mod pin;
pub mod dataset;
pub mod category;
pub mod layout;
pub mod history;
pub mod highlight;
pub mod controller;
pub mod shortcuts;
pub mod theme;

// Export data model
pub use pin::{PinId, PinRecord, PinType};
pub use dataset::PinDataset;
pub use category::{CategoryKey, resolve_members, style_category};
pub use error::PinoutError;

// Export navigation and selection core
pub use history::{NavigationHistory, ViewEntry};
pub use highlight::{Direction, HighlightSet};
pub use controller::{CurrentView, Interaction, ViewController};

// Export diagram geometry
pub use layout::{BoardSide, LayoutConfig, PinPlacement, pin_placement, pin_placements};

// Export keyboard and theme support
pub use shortcuts::{navigation_shortcut, navigation_shortcuts};
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness};
