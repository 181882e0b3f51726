//! Pin categories and membership resolution.
//!
//! Five categories (`i2c`, `adc`, `spi`, `pwm`, `power`) are explicit lists
//! stored in the dataset. `input_only` and `in_out` are derived from each
//! pin's [`PinType`]. `default` collects every `GPIO*` pin that none of the
//! five explicit lists claims.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dataset::PinDataset;
use crate::error::PinoutError;
use crate::pin::{PinId, PinType};

/// Prefix that marks a general purpose pin.
pub const GPIO_PREFIX: &str = "GPIO";

/// Category tag shown in the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    I2c,
    Adc,
    Spi,
    Pwm,
    Power,
    InputOnly,
    InOut,
    Default,
}

impl CategoryKey {
    /// All categories in legend order.
    pub const ALL: [CategoryKey; 8] = [
        CategoryKey::I2c,
        CategoryKey::Adc,
        CategoryKey::Spi,
        CategoryKey::Pwm,
        CategoryKey::Power,
        CategoryKey::InputOnly,
        CategoryKey::InOut,
        CategoryKey::Default,
    ];

    /// Categories backed by a static list in the dataset, in styling precedence.
    pub const EXPLICIT: [CategoryKey; 5] = [
        CategoryKey::I2c,
        CategoryKey::Adc,
        CategoryKey::Spi,
        CategoryKey::Pwm,
        CategoryKey::Power,
    ];

    /// Stable string key.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::I2c => "i2c",
            CategoryKey::Adc => "adc",
            CategoryKey::Spi => "spi",
            CategoryKey::Pwm => "pwm",
            CategoryKey::Power => "power",
            CategoryKey::InputOnly => "input_only",
            CategoryKey::InOut => "in_out",
            CategoryKey::Default => "default",
        }
    }

    /// Legend label.
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryKey::I2c => "I2C Pins",
            CategoryKey::Adc => "ADC Pins",
            CategoryKey::Spi => "SPI Pins",
            CategoryKey::Pwm => "PWM Pins",
            CategoryKey::Power => "Power Pins",
            CategoryKey::InputOnly => "Input Only Pins",
            CategoryKey::InOut => "In/Out Pins",
            CategoryKey::Default => "Other GPIO",
        }
    }

    /// Legend swatch color as `#RRGGBB`.
    pub fn legend_color(&self) -> &'static str {
        match self {
            CategoryKey::I2c => "#0080FF",
            CategoryKey::Adc => "#00C800",
            CategoryKey::Spi => "#C0C0C0",
            CategoryKey::Pwm => "#FFA500",
            CategoryKey::Power => "#9662FE",
            CategoryKey::InputOnly => "#F700FF",
            CategoryKey::InOut => "#00C3FF",
            CategoryKey::Default => "#FF0000",
        }
    }

    /// Pin type that defines membership of a derived category.
    fn derived_pin_type(&self) -> Option<PinType> {
        match self {
            CategoryKey::InputOnly => Some(PinType::InputOnly),
            CategoryKey::InOut => Some(PinType::InputOutput),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = PinoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| PinoutError::UnknownCategory(s.to_string()))
    }
}

/// Resolves the members of a category, sorted lexicographically by pin id.
pub fn resolve_members(dataset: &PinDataset, key: CategoryKey) -> Vec<PinId> {
    let mut members: Vec<PinId> = if let Some(list) = dataset.explicit_members(key) {
        list.to_vec()
    } else if let Some(pin_type) = key.derived_pin_type() {
        dataset
            .iter()
            .filter(|(_, record)| record.pin_type == pin_type)
            .map(|(id, _)| id.clone())
            .collect()
    } else {
        dataset
            .pin_ids()
            .filter(|id| id.starts_with(GPIO_PREFIX) && !is_explicitly_categorized(dataset, id))
            .cloned()
            .collect()
    };

    members.sort();
    members.dedup();
    members
}

/// Returns true if any explicit category list claims the pin.
fn is_explicitly_categorized(dataset: &PinDataset, pin_id: &str) -> bool {
    CategoryKey::EXPLICIT.into_iter().any(|key| {
        dataset
            .explicit_members(key)
            .is_some_and(|list| list.iter().any(|id| id == pin_id))
    })
}

/// Category used to color a pin on the diagram.
///
/// First explicit list containing the pin wins, in the order i2c, adc, spi,
/// pwm, power; anything else is `default`.
pub fn style_category(dataset: &PinDataset, pin_id: &str) -> CategoryKey {
    CategoryKey::EXPLICIT
        .into_iter()
        .find(|key| {
            dataset
                .explicit_members(*key)
                .is_some_and(|list| list.iter().any(|id| id == pin_id))
        })
        .unwrap_or(CategoryKey::Default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dataset() -> PinDataset {
        PinDataset::esp32_devkit()
    }

    #[test]
    fn test_key_string_round_trip() {
        for key in CategoryKey::ALL {
            assert_eq!(key.as_str().parse::<CategoryKey>(), Ok(key));
        }
        assert_eq!(
            "Input only".parse::<CategoryKey>(),
            Err(PinoutError::UnknownCategory("Input only".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_string_key() {
        assert_eq!(serde_json::to_string(&CategoryKey::InputOnly).unwrap(), "\"input_only\"");
        assert_eq!(serde_json::to_string(&CategoryKey::I2c).unwrap(), "\"i2c\"");
    }

    #[test]
    fn test_i2c_members() {
        assert_eq!(resolve_members(&dataset(), CategoryKey::I2c), vec!["GPIO21", "GPIO22"]);
    }

    #[test]
    fn test_input_only_members_are_derived_from_pin_type() {
        let mut expected = vec!["GPIO34", "GPIO35", "GPIO36", "GPIO39", "GPIO12", "GPIO15"];
        expected.sort();
        assert_eq!(resolve_members(&dataset(), CategoryKey::InputOnly), expected);
    }

    #[test]
    fn test_in_out_excludes_input_only_and_power() {
        let members = resolve_members(&dataset(), CategoryKey::InOut);
        assert!(members.contains(&"GPIO0".to_string()));
        assert!(!members.contains(&"GPIO34".to_string()));
        assert!(!members.contains(&"VIN".to_string()));
        assert!(!members.contains(&"GPIO6".to_string()));
    }

    #[test]
    fn test_default_is_uncategorized_gpio_only() {
        let data = dataset();
        let members = resolve_members(&data, CategoryKey::Default);
        assert_eq!(members, vec!["GPIO10", "GPIO11", "GPIO6", "GPIO7", "GPIO8", "GPIO9"]);
        for id in ["EN", "VIN", "GND1", "3V3"] {
            assert!(!members.contains(&id.to_string()));
        }
    }

    #[test]
    fn test_members_are_sorted_lexicographically() {
        let members = resolve_members(&dataset(), CategoryKey::Spi);
        let mut sorted = members.clone();
        sorted.sort();
        assert_eq!(members, sorted);
        assert_eq!(members.first().map(String::as_str), Some("GPIO12"));
    }

    #[test]
    fn test_style_category_precedence() {
        let data = dataset();
        assert_eq!(style_category(&data, "GPIO21"), CategoryKey::I2c);
        assert_eq!(style_category(&data, "GPIO12"), CategoryKey::Adc);
        assert_eq!(style_category(&data, "GPIO18"), CategoryKey::Spi);
        assert_eq!(style_category(&data, "GPIO0"), CategoryKey::Pwm);
        assert_eq!(style_category(&data, "GND2"), CategoryKey::Power);
        assert_eq!(style_category(&data, "EN"), CategoryKey::Default);
    }
}
