//! Error types for the pinout core.

use thiserror::Error;

use crate::pin::PinId;

/// Errors raised by the pinout library.
///
/// Navigating past either end of the history is not an error and never
/// produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinoutError {
    /// A pin was selected that the dataset does not contain.
    #[error("pin '{0}' not found in dataset")]
    PinNotFound(PinId),

    /// A category key string did not name any known category.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// A loaded dataset violates its own invariants.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
}
