//! Read-only pin dataset.
//!
//! The dataset is built once at startup (either the built-in ESP32 DevKit
//! table or a JSON board definition) and then shared immutably with the view
//! controller. It holds the pin records plus the explicit category lists;
//! derived categories are resolved in [`crate::category`].

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::category::CategoryKey;
use crate::error::PinoutError;
use crate::pin::{PinId, PinRecord, PinType};

/// Immutable lookup table of pins and explicit category memberships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinDataset {
    /// Board name shown in the window title area
    #[serde(default = "default_board_name")]
    pub board: String,
    pins: BTreeMap<PinId, PinRecord>,
    #[serde(default)]
    i2c: Vec<PinId>,
    #[serde(default)]
    adc: Vec<PinId>,
    #[serde(default)]
    spi: Vec<PinId>,
    #[serde(default)]
    pwm: Vec<PinId>,
    #[serde(default)]
    power: Vec<PinId>,
}

fn default_board_name() -> String {
    "ESP32 DevKit".to_string()
}

impl Default for PinDataset {
    fn default() -> Self {
        Self::esp32_devkit()
    }
}

impl PinDataset {
    /// Parses a JSON board definition and validates it.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let dataset: PinDataset =
            serde_json::from_str(json).context("failed to parse board definition")?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Reads and parses a JSON board definition from disk.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read board definition {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("invalid board definition {}", path.display()))
    }

    /// Checks that every explicit category list names only known pins.
    pub fn validate(&self) -> Result<(), PinoutError> {
        for key in CategoryKey::EXPLICIT {
            let members = self.explicit_members(key).unwrap_or(&[]);
            if let Some(missing) = members.iter().find(|id| !self.pins.contains_key(*id)) {
                return Err(PinoutError::InvalidDataset(format!(
                    "category '{}' references unknown pin '{}'",
                    key.as_str(),
                    missing
                )));
            }
        }
        Ok(())
    }

    /// Looks up a pin record by id.
    pub fn lookup(&self, pin_id: &str) -> Option<&PinRecord> {
        self.pins.get(pin_id)
    }

    /// Returns true if the dataset contains the given pin.
    pub fn contains(&self, pin_id: &str) -> bool {
        self.pins.contains_key(pin_id)
    }

    /// Number of pins in the table.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Returns true if the table holds no pins.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Iterates pin ids in lexicographic order.
    pub fn pin_ids(&self) -> impl Iterator<Item = &PinId> {
        self.pins.keys()
    }

    /// Iterates `(id, record)` pairs in lexicographic id order.
    pub fn iter(&self) -> impl Iterator<Item = (&PinId, &PinRecord)> {
        self.pins.iter()
    }

    /// Returns the static membership list for an explicit category.
    ///
    /// Derived categories (`input_only`, `in_out`, `default`) return `None`.
    pub fn explicit_members(&self, key: CategoryKey) -> Option<&[PinId]> {
        match key {
            CategoryKey::I2c => Some(&self.i2c),
            CategoryKey::Adc => Some(&self.adc),
            CategoryKey::Spi => Some(&self.spi),
            CategoryKey::Pwm => Some(&self.pwm),
            CategoryKey::Power => Some(&self.power),
            CategoryKey::InputOnly | CategoryKey::InOut | CategoryKey::Default => None,
        }
    }

    /// The built-in ESP32 DevKit (38 pin) table.
    pub fn esp32_devkit() -> Self {
        use PinType::*;

        const FLASH_NOTE: &str = "Connected to SPI flash; using will cause boot failure";
        const WIFI_NOTE: &str = "Only Digital if WiFi is used";
        const BOOT_LOW_WIFI_NOTE: &str = "Must be low during boot, Only Digital if WiFi is used";

        let records = [
            ("GPIO0", PinRecord::new("GPIO0", &["Boot button", "ADC2 –CH1–", "PWM"], InputOutput)
                .with_note("Pull-down during boot to flash")),
            ("GPIO1", PinRecord::new("GPIO1 (TX0)", &["UART0 TX", "PWM"], InputOutput)
                .with_note("Used for UART logging")),
            ("GPIO2", PinRecord::new("GPIO2", &["ADC2 –CH2–", "PWM"], InputOutput)
                .with_note("Must be low to enter boot mode")),
            ("GPIO3", PinRecord::new("GPIO3 (RX0)", &["UART0 RX", "PWM"], InputOutput)
                .with_note("Used for UART logging")),
            ("GPIO4", PinRecord::new("GPIO4", &["ADC2 –CH0–", "PWM"], InputOutput)),
            ("GPIO5", PinRecord::new("GPIO5", &["VSPI –SS–", "PWM"], InputOutput)
                .with_note("Must be high during boot")),
            ("GPIO6", PinRecord::new("GPIO6", &["Integrated SPI Flash SCK"], Internal).with_note(FLASH_NOTE)),
            ("GPIO7", PinRecord::new("GPIO7", &["Integrated SPI Flash SD0"], Internal).with_note(FLASH_NOTE)),
            ("GPIO8", PinRecord::new("GPIO8", &["Integrated SPI Flash SD1"], Internal).with_note(FLASH_NOTE)),
            ("GPIO9", PinRecord::new("GPIO9", &["Integrated SPI Flash SD2"], Internal).with_note(FLASH_NOTE)),
            ("GPIO10", PinRecord::new("GPIO10", &["Integrated SPI Flash SD3"], Internal).with_note(FLASH_NOTE)),
            ("GPIO11", PinRecord::new("GPIO11", &["Integrated SPI Flash CMD"], Internal).with_note(FLASH_NOTE)),
            ("GPIO12", PinRecord::new("GPIO12", &["ADC2 –CH5–", "HSPI –MISO–", "PWM"], InputOnly)
                .with_note(BOOT_LOW_WIFI_NOTE)),
            ("GPIO13", PinRecord::new("GPIO13", &["ADC2 –CH4–", "HSPI –MOSI–", "PWM"], InputOutput)
                .with_note(WIFI_NOTE)),
            ("GPIO14", PinRecord::new("GPIO14", &["ADC2 –CH6–", "HSPI –CLK–", "PWM"], InputOutput)
                .with_note(WIFI_NOTE)),
            ("GPIO15", PinRecord::new("GPIO15", &["ADC2 –CH3–", "HSPI –SS–", "PWM"], InputOnly)
                .with_note(BOOT_LOW_WIFI_NOTE)),
            ("GPIO16", PinRecord::new("GPIO16", &["UART2 –RX–", "PWM"], InputOutput)),
            ("GPIO17", PinRecord::new("GPIO17", &["UART2 –TX–", "PWM"], InputOutput)),
            ("GPIO18", PinRecord::new("GPIO18", &["VSPI –CLK–", "PWM"], InputOutput)),
            ("GPIO19", PinRecord::new("GPIO19", &["VSPI –MISO–", "PWM"], InputOutput)),
            ("GPIO21", PinRecord::new("GPIO21", &["I2C –SDA–", "PWM"], InputOutput)),
            ("GPIO22", PinRecord::new("GPIO22", &["I2C –SCL–", "PWM"], InputOutput)),
            ("GPIO23", PinRecord::new("GPIO23", &["VSPI –MOSI–", "PWM"], InputOutput)),
            ("GPIO25", PinRecord::new("GPIO25", &["DAC1", "ADC2 –CH8–", "PWM"], InputOutput).with_note(WIFI_NOTE)),
            ("GPIO26", PinRecord::new("GPIO26", &["DAC2", "ADC2 –CH9–", "PWM"], InputOutput).with_note(WIFI_NOTE)),
            ("GPIO27", PinRecord::new("GPIO27", &["ADC2 –CH7–", "PWM"], InputOutput).with_note(WIFI_NOTE)),
            ("GPIO32", PinRecord::new("GPIO32", &["ADC1 –CH4–", "PWM"], InputOutput)),
            ("GPIO33", PinRecord::new("GPIO33", &["ADC1 –CH5–", "PWM"], InputOutput)),
            ("GPIO34", PinRecord::new("GPIO34", &["ADC1 –CH6–"], InputOnly)),
            ("GPIO35", PinRecord::new("GPIO35", &["ADC1 –CH7–"], InputOnly)),
            ("GPIO36", PinRecord::new("GPIO36 (VP)", &["ADC1 –CH0–"], InputOnly)),
            ("GPIO39", PinRecord::new("GPIO39 (VN)", &["ADC1 –CH3–"], InputOnly)),
            ("EN", PinRecord::new("EN (Enable)", &["Reset"], Input).with_note("Active high to enable chip")),
            ("VIN", PinRecord::new("VIN", &["Power"], Power).with_note("Typically 5V input")),
            ("3V3", PinRecord::new("3.3V", &["Power"], Power).with_note("3.3V output/input")),
            ("GND1", PinRecord::new("GND", &["Ground"], Power)),
            ("GND2", PinRecord::new("GND", &["Ground"], Power)),
            ("GND3", PinRecord::new("GND", &["Ground"], Power)),
        ];

        let pins = records
            .into_iter()
            .map(|(id, record)| (id.to_string(), record))
            .collect();

        Self {
            board: default_board_name(),
            pins,
            i2c: ids(&["GPIO21", "GPIO22"]),
            adc: ids(&[
                "GPIO32", "GPIO33", "GPIO34", "GPIO35", "GPIO36", "GPIO39", "GPIO25", "GPIO26",
                "GPIO27", "GPIO12", "GPIO13", "GPIO14", "GPIO15",
            ]),
            spi: ids(&["GPIO18", "GPIO19", "GPIO23", "GPIO5", "GPIO12", "GPIO13", "GPIO14", "GPIO15"]),
            pwm: ids(&[
                "GPIO0", "GPIO1", "GPIO2", "GPIO3", "GPIO4", "GPIO5", "GPIO12", "GPIO13", "GPIO14",
                "GPIO15", "GPIO16", "GPIO17", "GPIO18", "GPIO19", "GPIO21", "GPIO22", "GPIO23",
                "GPIO25", "GPIO26", "GPIO27", "GPIO32", "GPIO33",
            ]),
            power: ids(&["3V3", "VIN", "GND1", "GND2", "GND3"]),
        }
    }
}

fn ids(list: &[&str]) -> Vec<PinId> {
    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_has_38_pins() {
        let dataset = PinDataset::esp32_devkit();
        assert_eq!(dataset.len(), 38);
        assert_eq!(dataset.pin_ids().filter(|id| id.starts_with("GPIO")).count(), 32);
        for id in ["EN", "VIN", "3V3", "GND1", "GND2", "GND3"] {
            assert!(dataset.contains(id), "missing {}", id);
        }
    }

    #[test]
    fn test_builtin_table_is_valid() {
        assert_eq!(PinDataset::esp32_devkit().validate(), Ok(()));
    }

    #[test]
    fn test_lookup() {
        let dataset = PinDataset::esp32_devkit();
        let record = dataset.lookup("GPIO36").unwrap();
        assert_eq!(record.name, "GPIO36 (VP)");
        assert_eq!(record.pin_type, PinType::InputOnly);
        assert!(dataset.lookup("GPIO20").is_none());
    }

    #[test]
    fn test_derived_categories_have_no_explicit_list() {
        let dataset = PinDataset::esp32_devkit();
        assert!(dataset.explicit_members(CategoryKey::InputOnly).is_none());
        assert!(dataset.explicit_members(CategoryKey::Default).is_none());
        assert_eq!(dataset.explicit_members(CategoryKey::Power).unwrap().len(), 5);
    }

    #[test]
    fn test_json_round_trip_preserves_table() {
        let dataset = PinDataset::esp32_devkit();
        let json = serde_json::to_string(&dataset).unwrap();
        let parsed = PinDataset::from_json_str(&json).unwrap();
        assert_eq!(parsed, dataset);
    }

    #[test]
    fn test_json_with_dangling_category_member_is_rejected() {
        let json = r#"{
            "pins": { "GPIO4": { "name": "GPIO4", "functions": ["PWM"], "pin_type": "Input/Output" } },
            "pwm": ["GPIO4", "GPIO5"]
        }"#;
        let err = PinDataset::from_json_str(json).unwrap_err();
        let root = err.downcast_ref::<PinoutError>().unwrap();
        assert!(matches!(root, PinoutError::InvalidDataset(msg) if msg.contains("GPIO5")));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = PinDataset::load_from_path(Path::new("/nonexistent/board.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/board.json"));
    }
}
