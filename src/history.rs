//! Back/forward navigation history.
//!
//! History is linear: recording a new view while positioned in the middle of
//! the history discards every entry after the current one, the same way a web
//! browser drops its forward stack when a new page is visited.
//!
//! Entries returned by [`NavigationHistory::go_back`] and
//! [`NavigationHistory::go_forward`] are *replays*. The caller renders them
//! without calling [`NavigationHistory::record_view`] again; recording a
//! replay would grow the history on every back step and destroy the forward
//! branch.

use serde::{Deserialize, Serialize};

use crate::category::CategoryKey;
use crate::pin::PinId;

/// One navigable view the user looked at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEntry {
    /// Detail panel of a single pin
    PinView(PinId),
    /// Member list of a category, with the name shown in its header
    CategoryView(CategoryKey, String),
}

impl ViewEntry {
    /// Convenience constructor for a pin view.
    pub fn pin(pin_id: impl Into<PinId>) -> Self {
        ViewEntry::PinView(pin_id.into())
    }

    /// Convenience constructor for a category view using the legend name.
    pub fn category(key: CategoryKey) -> Self {
        ViewEntry::CategoryView(key, key.display_name().to_string())
    }
}

/// Linear, branch-discarding view history.
///
/// Invariant: `index` is `None` exactly when `entries` is empty, otherwise
/// `index < entries.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<ViewEntry>,
    index: Option<usize>,
}

impl NavigationHistory {
    /// Creates an empty history with both directions disabled.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: None,
        }
    }

    // ===== Queries =====

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current position, `None` while the history is empty.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Entry at the current position.
    pub fn current(&self) -> Option<&ViewEntry> {
        self.index.and_then(|i| self.entries.get(i))
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    /// True if there is an entry before the current one.
    pub fn can_go_back(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    /// True if there is an entry after the current one.
    pub fn can_go_forward(&self) -> bool {
        match self.index {
            Some(i) => i + 1 < self.entries.len(),
            None => false,
        }
    }

    // ===== Mutations =====

    /// Records a view the user opened by direct interaction.
    ///
    /// Any forward entries past the current position are discarded first.
    pub fn record_view(&mut self, entry: ViewEntry) {
        if let Some(i) = self.index {
            let dropped = self.entries.len() - (i + 1);
            if dropped > 0 {
                log::debug!("discarding {} forward history entries", dropped);
            }
            self.entries.truncate(i + 1);
        }

        log::debug!("recording view {:?}", entry);
        self.entries.push(entry);
        self.index = Some(self.entries.len() - 1);
    }

    /// Steps back one entry and returns it for replay.
    ///
    /// No-op returning `None` at the oldest entry or on an empty history.
    pub fn go_back(&mut self) -> Option<ViewEntry> {
        match self.index {
            Some(i) if i > 0 => {
                self.index = Some(i - 1);
                self.entries.get(i - 1).cloned()
            }
            _ => None,
        }
    }

    /// Steps forward one entry and returns it for replay.
    ///
    /// No-op returning `None` at the newest entry or on an empty history.
    pub fn go_forward(&mut self) -> Option<ViewEntry> {
        match self.index {
            Some(i) if i + 1 < self.entries.len() => {
                self.index = Some(i + 1);
                self.entries.get(i + 1).cloned()
            }
            _ => None,
        }
    }
}
