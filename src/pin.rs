//! Pin data model.
//!
//! A [`PinRecord`] describes one labeled contact on the board. Records are
//! owned by the [`PinDataset`](crate::PinDataset) and never mutated once the
//! table is built.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable string identifier of a pin, e.g. `"GPIO21"`, `"EN"`, `"3V3"`.
pub type PinId = String;

/// Electrical role of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinType {
    #[serde(rename = "Input")]
    Input,
    #[serde(rename = "Output")]
    Output,
    #[serde(rename = "Input/Output")]
    InputOutput,
    #[serde(rename = "Input only")]
    InputOnly,
    #[serde(rename = "Power")]
    Power,
    #[serde(rename = "Internal (do not use)")]
    Internal,
}

impl PinType {
    /// Returns the label shown in the detail panel's type tag.
    pub fn label(&self) -> &'static str {
        match self {
            PinType::Input => "Input",
            PinType::Output => "Output",
            PinType::InputOutput => "Input/Output",
            PinType::InputOnly => "Input only",
            PinType::Power => "Power",
            PinType::Internal => "Internal (do not use)",
        }
    }
}

impl fmt::Display for PinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptive metadata for a single pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinRecord {
    /// Display name (may differ from the id, e.g. `"GPIO36 (VP)"`)
    pub name: String,
    /// Alternate functions in display order
    pub functions: Vec<String>,
    /// Electrical role
    pub pin_type: PinType,
    /// Optional usage warning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PinRecord {
    /// Creates a record without a note.
    pub fn new(name: &str, functions: &[&str], pin_type: PinType) -> Self {
        Self {
            name: name.to_string(),
            functions: functions.iter().map(|f| f.to_string()).collect(),
            pin_type,
            note: None,
        }
    }

    /// Attaches a usage note.
    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_type_serializes_as_display_label() {
        let json = serde_json::to_string(&PinType::InputOnly).unwrap();
        assert_eq!(json, "\"Input only\"");

        let parsed: PinType = serde_json::from_str("\"Internal (do not use)\"").unwrap();
        assert_eq!(parsed, PinType::Internal);
        assert_eq!(parsed.to_string(), "Internal (do not use)");
    }

    #[test]
    fn test_record_note_is_optional_in_json() {
        let json = r#"{"name":"GPIO4","functions":["PWM"],"pin_type":"Input/Output"}"#;
        let record: PinRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, PinRecord::new("GPIO4", &["PWM"], PinType::InputOutput));
    }
}
