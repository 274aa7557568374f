//! Conduit trade-size registry
//!
//! Replaces the stringly-typed size keys of the original data with a proper
//! Rust enum that provides compile-time validation and exhaustive matching.
//! Each trade size maps to a fixed nominal internal diameter in inches
//! (EMT dimensions).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Nominal conduit trade size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum TradeSize {
    #[serde(rename = "1/2")]
    #[strum(serialize = "1/2")]
    Half,
    #[serde(rename = "3/4")]
    #[strum(serialize = "3/4")]
    ThreeQuarter,
    #[default]
    #[serde(rename = "1")]
    #[strum(serialize = "1")]
    One,
    #[serde(rename = "1 1/4")]
    #[strum(serialize = "1 1/4")]
    OneAndQuarter,
    #[serde(rename = "1 1/2")]
    #[strum(serialize = "1 1/2")]
    OneAndHalf,
    #[serde(rename = "2")]
    #[strum(serialize = "2")]
    Two,
    #[serde(rename = "2 1/2")]
    #[strum(serialize = "2 1/2")]
    TwoAndHalf,
    #[serde(rename = "3")]
    #[strum(serialize = "3")]
    Three,
}

impl TradeSize {
    /// Nominal internal diameter in inches.
    pub fn internal_diameter_in(self) -> f64 {
        match self {
            Self::Half => 0.622,
            Self::ThreeQuarter => 0.824,
            Self::One => 1.049,
            Self::OneAndQuarter => 1.380,
            Self::OneAndHalf => 1.610,
            Self::Two => 2.067,
            Self::TwoAndHalf => 2.469,
            Self::Three => 3.068,
        }
    }

    /// Display label as shown in the size picker (e.g. `3/4" EMT`).
    pub fn label(self) -> String {
        format!("{}\" EMT", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_registry_diameters() {
        assert_eq!(TradeSize::Half.internal_diameter_in(), 0.622);
        assert_eq!(TradeSize::ThreeQuarter.internal_diameter_in(), 0.824);
        assert_eq!(TradeSize::One.internal_diameter_in(), 1.049);
        assert_eq!(TradeSize::OneAndQuarter.internal_diameter_in(), 1.380);
        assert_eq!(TradeSize::OneAndHalf.internal_diameter_in(), 1.610);
        assert_eq!(TradeSize::Two.internal_diameter_in(), 2.067);
        assert_eq!(TradeSize::TwoAndHalf.internal_diameter_in(), 2.469);
        assert_eq!(TradeSize::Three.internal_diameter_in(), 3.068);
    }

    #[test]
    fn test_default_is_one_inch() {
        assert_eq!(TradeSize::default(), TradeSize::One);
    }

    #[test]
    fn test_parse_from_label() {
        assert_eq!("1/2".parse::<TradeSize>().unwrap(), TradeSize::Half);
        assert_eq!("1 1/4".parse::<TradeSize>().unwrap(), TradeSize::OneAndQuarter);
        assert!("5".parse::<TradeSize>().is_err());
    }

    #[test]
    fn test_display_roundtrip_all_variants() {
        for size in TradeSize::iter() {
            let parsed: TradeSize = size.to_string().parse().unwrap();
            assert_eq!(size, parsed);
        }
    }

    #[test]
    fn test_label_format() {
        assert_eq!(TradeSize::ThreeQuarter.label(), "3/4\" EMT");
        assert_eq!(TradeSize::Two.label(), "2\" EMT");
    }

    #[test]
    fn test_all_diameters_positive() {
        for size in TradeSize::iter() {
            assert!(size.internal_diameter_in() > 0.0);
        }
    }
}
