//! Top-level view controller.
//!
//! The controller owns the navigation history and the highlight set and is
//! the only place either is mutated. Every user interaction goes through
//! [`ViewController::handle`]:
//!
//! - direct interactions (pin or category clicked) render the view and record
//!   it in history
//! - back/forward requests move through history and *replay* the entry, which
//!   renders it without recording it again
//! - a background click only clears highlights

use std::sync::Arc;

use crate::category::{self, CategoryKey};
use crate::dataset::PinDataset;
use crate::error::PinoutError;
use crate::highlight::HighlightSet;
use crate::history::{NavigationHistory, ViewEntry};
use crate::layout::{self, LayoutConfig};
use crate::pin::{PinId, PinRecord};

/// Display name returned for a category key that could not be resolved.
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown category";

/// Interaction events emitted by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    PinClicked(PinId),
    CategoryClicked(CategoryKey),
    BackRequested,
    ForwardRequested,
    /// Click on empty window area
    BackgroundClicked,
}

/// What the info panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentView {
    Pin {
        pin_id: PinId,
        record: PinRecord,
    },
    Category {
        key: CategoryKey,
        name: String,
        pins: Vec<PinId>,
    },
}

/// Owner of the navigation history and highlight set.
#[derive(Debug, Clone)]
pub struct ViewController {
    dataset: Arc<PinDataset>,
    history: NavigationHistory,
    highlights: HighlightSet,
    current: Option<CurrentView>,
}

impl ViewController {
    /// Creates a controller with empty history over the given dataset.
    pub fn new(dataset: Arc<PinDataset>) -> Self {
        Self {
            dataset,
            history: NavigationHistory::new(),
            highlights: HighlightSet::new(),
            current: None,
        }
    }

    // ===== Queries =====

    pub fn dataset(&self) -> &PinDataset {
        &self.dataset
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    /// The view currently rendered in the info panel, if any.
    pub fn current_view(&self) -> Option<&CurrentView> {
        self.current.as_ref()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    // ===== Selection =====

    /// Selects a single pin for the detail panel.
    ///
    /// Highlights are cleared before the lookup, so they are gone even when
    /// the pin is unknown.
    pub fn select_pin(&mut self, pin_id: &str) -> Result<PinRecord, PinoutError> {
        self.clear_highlights();

        let record = self.dataset.lookup(pin_id).cloned().ok_or_else(|| {
            log::warn!("pin '{}' is not in the dataset", pin_id);
            PinoutError::PinNotFound(pin_id.to_string())
        })?;

        self.current = Some(CurrentView::Pin {
            pin_id: pin_id.to_string(),
            record: record.clone(),
        });
        Ok(record)
    }

    /// Selects a category, highlighting its members on the diagram.
    ///
    /// Returns the category's display name and its members sorted by id.
    /// Members without a placement on the diagram are listed but not
    /// highlighted.
    pub fn select_category(&mut self, key: CategoryKey) -> (String, Vec<PinId>) {
        self.apply_category(key, key.display_name().to_string())
    }

    /// String-keyed [`select_category`](Self::select_category).
    ///
    /// An unknown key clears highlights and yields an empty member list
    /// rather than failing.
    pub fn select_category_key(&mut self, key: &str) -> (String, Vec<PinId>) {
        match key.parse::<CategoryKey>() {
            Ok(key) => self.select_category(key),
            Err(err) => {
                log::warn!("{}", err);
                self.clear_highlights();
                (UNKNOWN_CATEGORY_NAME.to_string(), Vec::new())
            }
        }
    }

    /// Removes every highlight. Idempotent.
    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    fn apply_category(&mut self, key: CategoryKey, name: String) -> (String, Vec<PinId>) {
        self.clear_highlights();

        let pins = category::resolve_members(&self.dataset, key);
        let content_width = LayoutConfig::WINDOW_WIDTH;
        self.highlights.replace(pins.iter().filter_map(|id| {
            layout::pin_placement(id).map(|p| (id.clone(), p.arrow_direction(content_width)))
        }));

        self.current = Some(CurrentView::Category {
            key,
            name: name.clone(),
            pins: pins.clone(),
        });
        (name, pins)
    }

    // ===== Navigation =====

    /// Opens a pin's detail view and records it in history.
    ///
    /// Unknown pins are not recorded.
    pub fn show_pin(&mut self, pin_id: &str) -> Result<PinRecord, PinoutError> {
        let record = self.select_pin(pin_id)?;
        self.history.record_view(ViewEntry::pin(pin_id));
        Ok(record)
    }

    /// Opens a category view and records it in history.
    pub fn show_category(&mut self, key: CategoryKey) -> (String, Vec<PinId>) {
        let result = self.select_category(key);
        self.history.record_view(ViewEntry::category(key));
        result
    }

    /// Steps back in history and replays the entry. No-op at the oldest entry.
    pub fn go_back(&mut self) -> Option<ViewEntry> {
        let entry = self.history.go_back()?;
        self.replay(&entry);
        Some(entry)
    }

    /// Steps forward in history and replays the entry. No-op at the newest entry.
    pub fn go_forward(&mut self) -> Option<ViewEntry> {
        let entry = self.history.go_forward()?;
        self.replay(&entry);
        Some(entry)
    }

    /// Renders a history entry without recording it.
    fn replay(&mut self, entry: &ViewEntry) {
        log::debug!("replaying {:?}", entry);
        match entry {
            ViewEntry::PinView(pin_id) => {
                // Only successfully selected pins are ever recorded.
                if let Err(err) = self.select_pin(pin_id) {
                    log::warn!("replay failed: {}", err);
                }
            }
            ViewEntry::CategoryView(key, name) => {
                self.apply_category(*key, name.clone());
            }
        }
    }

    /// Dispatches one interaction event.
    pub fn handle(&mut self, interaction: Interaction) -> Result<(), PinoutError> {
        match interaction {
            Interaction::PinClicked(pin_id) => {
                self.show_pin(&pin_id)?;
            }
            Interaction::CategoryClicked(key) => {
                self.show_category(key);
            }
            Interaction::BackRequested => {
                self.go_back();
            }
            Interaction::ForwardRequested => {
                self.go_forward();
            }
            Interaction::BackgroundClicked => {
                if !self.highlights.is_empty() {
                    self.clear_highlights();
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::Direction;

    fn controller() -> ViewController {
        ViewController::new(Arc::new(PinDataset::esp32_devkit()))
    }

    #[test]
    fn test_select_pin_returns_record_and_clears_highlights() {
        let mut ctl = controller();
        ctl.select_category(CategoryKey::Adc);
        assert!(!ctl.highlights().is_empty());

        let record = ctl.select_pin("GPIO0").unwrap();
        assert_eq!(record.name, "GPIO0");
        assert!(ctl.highlights().is_empty());
        assert!(matches!(ctl.current_view(), Some(CurrentView::Pin { pin_id, .. }) if pin_id == "GPIO0"));
    }

    #[test]
    fn test_select_unknown_pin_fails_after_clearing() {
        let mut ctl = controller();
        ctl.select_category(CategoryKey::Power);

        let err = ctl.select_pin("GPIO20").unwrap_err();
        assert_eq!(err, PinoutError::PinNotFound("GPIO20".to_string()));
        assert!(ctl.highlights().is_empty());
    }

    #[test]
    fn test_select_category_highlights_with_directions() {
        let mut ctl = controller();
        let (name, pins) = ctl.select_category(CategoryKey::I2c);

        assert_eq!(name, "I2C Pins");
        assert_eq!(pins, vec!["GPIO21", "GPIO22"]);
        assert_eq!(ctl.highlights().len(), 2);
        assert_eq!(ctl.highlights().direction("GPIO21"), Some(Direction::PointsLeft));

        ctl.select_category(CategoryKey::Power);
        assert!(!ctl.highlights().contains("GPIO21"));
        assert_eq!(ctl.highlights().direction("3V3"), Some(Direction::PointsRight));
        assert_eq!(ctl.highlights().direction("GND1"), Some(Direction::PointsLeft));
    }

    #[test]
    fn test_unknown_category_key_degrades_to_empty() {
        let mut ctl = controller();
        ctl.select_category(CategoryKey::Pwm);

        let (name, pins) = ctl.select_category_key("uart");
        assert_eq!(name, UNKNOWN_CATEGORY_NAME);
        assert!(pins.is_empty());
        assert!(ctl.highlights().is_empty());
    }

    #[test]
    fn test_known_category_key_string() {
        let mut ctl = controller();
        let (name, pins) = ctl.select_category_key("i2c");
        assert_eq!(name, "I2C Pins");
        assert_eq!(pins.len(), 2);
    }

    #[test]
    fn test_show_pin_unknown_is_not_recorded() {
        let mut ctl = controller();
        ctl.show_pin("GPIO2").unwrap();
        assert!(ctl.show_pin("nope").is_err());
        assert_eq!(ctl.history().len(), 1);
    }

    #[test]
    fn test_replay_does_not_grow_history() {
        let mut ctl = controller();
        ctl.show_pin("GPIO2").unwrap();
        ctl.show_category(CategoryKey::Adc);
        ctl.show_pin("GPIO4").unwrap();

        assert_eq!(ctl.go_back(), Some(ViewEntry::category(CategoryKey::Adc)));
        assert_eq!(ctl.history().len(), 3);
        assert_eq!(ctl.highlights().len(), 13);

        assert_eq!(ctl.go_back(), Some(ViewEntry::pin("GPIO2")));
        assert!(ctl.highlights().is_empty());
        assert_eq!(ctl.go_back(), None);

        assert_eq!(ctl.go_forward(), Some(ViewEntry::category(CategoryKey::Adc)));
        assert_eq!(ctl.history().len(), 3);
        assert!(ctl.can_go_forward());
    }

    #[test]
    fn test_category_replay_uses_stored_name() {
        let mut ctl = controller();
        ctl.history.record_view(ViewEntry::pin("GPIO2"));
        ctl.history
            .record_view(ViewEntry::CategoryView(CategoryKey::Adc, "Analog inputs".to_string()));

        ctl.go_back();
        let replayed = ctl.go_forward();
        assert_eq!(
            replayed,
            Some(ViewEntry::CategoryView(CategoryKey::Adc, "Analog inputs".to_string()))
        );
        assert!(matches!(
            ctl.current_view(),
            Some(CurrentView::Category { key: CategoryKey::Adc, name, pins }) if name == "Analog inputs" && pins.len() == 13
        ));
        assert_eq!(ctl.highlights().len(), 13);
        assert_eq!(ctl.history().len(), 2);
    }

    #[test]
    fn test_background_click_only_clears_highlights() {
        let mut ctl = controller();
        ctl.handle(Interaction::CategoryClicked(CategoryKey::Spi)).unwrap();
        ctl.handle(Interaction::BackgroundClicked).unwrap();

        assert!(ctl.highlights().is_empty());
        assert_eq!(ctl.history().len(), 1);
        assert!(matches!(ctl.current_view(), Some(CurrentView::Category { key: CategoryKey::Spi, .. })));
    }

    #[test]
    fn test_handle_unknown_pin_click_propagates_error() {
        let mut ctl = controller();
        assert_eq!(
            ctl.handle(Interaction::PinClicked("GPIO99".to_string())),
            Err(PinoutError::PinNotFound("GPIO99".to_string()))
        );
    }
}
