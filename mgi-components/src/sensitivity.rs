//! Material sensitivity classes and their kinetics tables
//!
//! A material is classified twice: once for how fast mould grows on it and
//! once for how much growth it can sustain. Both use [`SensitivityClass`] but
//! they are kept as separate fields everywhere so the two can differ.

use mgi_core::errors::MGIError;
use mgi_core::timeseries::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index value at which the growth coefficient switches regime
pub const GROWTH_REGIME_THRESHOLD: FloatValue = 1.0;

/// Coefficients of the maximum attainable index
///
/// $$ M_{max} = \max(A + B u - C u^2, 0) $$
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityCoefficients {
    pub a: FloatValue,
    pub b: FloatValue,
    pub c: FloatValue,
}

impl CapacityCoefficients {
    /// Maximum attainable index for a normalised humidity excess `u`
    pub fn maximum_index(&self, u: FloatValue) -> FloatValue {
        (self.a + self.b * u - self.c * u * u).max(0.0)
    }
}

/// Growth coefficient `k1` below and above the regime threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthCoefficients {
    pub below_threshold: FloatValue,
    pub above_threshold: FloatValue,
}

const VERY_SENSITIVE_CAPACITY: CapacityCoefficients = CapacityCoefficients {
    a: 1.0,
    b: 7.0,
    c: 2.0,
};
const SENSITIVE_CAPACITY: CapacityCoefficients = CapacityCoefficients {
    a: 0.3,
    b: 6.0,
    c: 1.0,
};
const MODERATELY_RESISTANT_CAPACITY: CapacityCoefficients = CapacityCoefficients {
    a: 0.0,
    b: 5.0,
    c: 1.5,
};
const RESISTANT_CAPACITY: CapacityCoefficients = CapacityCoefficients {
    a: 0.0,
    b: 3.0,
    c: 1.0,
};

const VERY_SENSITIVE_GROWTH: GrowthCoefficients = GrowthCoefficients {
    below_threshold: 1.0,
    above_threshold: 2.0,
};
const SENSITIVE_GROWTH: GrowthCoefficients = GrowthCoefficients {
    below_threshold: 0.578,
    above_threshold: 0.386,
};
const MODERATELY_RESISTANT_GROWTH: GrowthCoefficients = GrowthCoefficients {
    below_threshold: 0.072,
    above_threshold: 0.097,
};
const RESISTANT_GROWTH: GrowthCoefficients = GrowthCoefficients {
    below_threshold: 0.033,
    above_threshold: 0.014,
};

/// Sensitivity of a material to mould growth
///
/// Serialised with the short codes used in probe tables: `vs`, `s`, `mr`, `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensitivityClass {
    #[serde(rename = "vs", alias = "very_sensitive")]
    VerySensitive,
    #[serde(rename = "s", alias = "sensitive")]
    Sensitive,
    #[serde(rename = "mr", alias = "moderately_resistant")]
    ModeratelyResistant,
    #[serde(rename = "r", alias = "resistant")]
    Resistant,
}

impl SensitivityClass {
    pub const ALL: [SensitivityClass; 4] = [
        SensitivityClass::VerySensitive,
        SensitivityClass::Sensitive,
        SensitivityClass::ModeratelyResistant,
        SensitivityClass::Resistant,
    ];

    /// Short code used in probe tables
    pub fn code(&self) -> &'static str {
        match self {
            SensitivityClass::VerySensitive => "vs",
            SensitivityClass::Sensitive => "s",
            SensitivityClass::ModeratelyResistant => "mr",
            SensitivityClass::Resistant => "r",
        }
    }

    /// Lower bound of the critical relative humidity
    /// unit: %
    pub fn minimum_relative_humidity(&self) -> FloatValue {
        match self {
            SensitivityClass::VerySensitive | SensitivityClass::Sensitive => 80.0,
            SensitivityClass::ModeratelyResistant | SensitivityClass::Resistant => 85.0,
        }
    }

    pub fn capacity(&self) -> CapacityCoefficients {
        match self {
            SensitivityClass::VerySensitive => VERY_SENSITIVE_CAPACITY,
            SensitivityClass::Sensitive => SENSITIVE_CAPACITY,
            SensitivityClass::ModeratelyResistant => MODERATELY_RESISTANT_CAPACITY,
            SensitivityClass::Resistant => RESISTANT_CAPACITY,
        }
    }

    pub fn growth(&self) -> GrowthCoefficients {
        match self {
            SensitivityClass::VerySensitive => VERY_SENSITIVE_GROWTH,
            SensitivityClass::Sensitive => SENSITIVE_GROWTH,
            SensitivityClass::ModeratelyResistant => MODERATELY_RESISTANT_GROWTH,
            SensitivityClass::Resistant => RESISTANT_GROWTH,
        }
    }

    /// Growth coefficient `k1` for the current index
    pub fn growth_coefficient(&self, index: FloatValue) -> FloatValue {
        let growth = self.growth();
        if index < GROWTH_REGIME_THRESHOLD {
            growth.below_threshold
        } else {
            growth.above_threshold
        }
    }
}

impl fmt::Display for SensitivityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for SensitivityClass {
    type Err = MGIError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vs" | "very_sensitive" => Ok(SensitivityClass::VerySensitive),
            "s" | "sensitive" => Ok(SensitivityClass::Sensitive),
            "mr" | "moderately_resistant" => Ok(SensitivityClass::ModeratelyResistant),
            "r" | "resistant" => Ok(SensitivityClass::Resistant),
            _ => Err(MGIError::InvalidParameter(format!(
                "unrecognised sensitivity class '{}', expected one of vs, s, mr, r",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!(
            "vs".parse::<SensitivityClass>().unwrap(),
            SensitivityClass::VerySensitive
        );
        assert_eq!(
            "S".parse::<SensitivityClass>().unwrap(),
            SensitivityClass::Sensitive
        );
        assert_eq!(
            " mr ".parse::<SensitivityClass>().unwrap(),
            SensitivityClass::ModeratelyResistant
        );
        assert_eq!(
            "resistant".parse::<SensitivityClass>().unwrap(),
            SensitivityClass::Resistant
        );
    }

    #[test]
    fn test_parse_unknown_class() {
        let err = "x".parse::<SensitivityClass>().unwrap_err();
        assert!(matches!(err, MGIError::InvalidParameter(_)));
    }

    #[test]
    fn test_code_roundtrip() {
        for class in SensitivityClass::ALL {
            assert_eq!(class.code().parse::<SensitivityClass>().unwrap(), class);
            assert_eq!(class.to_string(), class.code());
        }
    }

    #[test]
    fn test_minimum_relative_humidity() {
        assert_eq!(SensitivityClass::VerySensitive.minimum_relative_humidity(), 80.0);
        assert_eq!(SensitivityClass::Sensitive.minimum_relative_humidity(), 80.0);
        assert_eq!(
            SensitivityClass::ModeratelyResistant.minimum_relative_humidity(),
            85.0
        );
        assert_eq!(SensitivityClass::Resistant.minimum_relative_humidity(), 85.0);
    }

    #[test]
    fn test_growth_coefficient_switches_at_one() {
        let class = SensitivityClass::Sensitive;
        assert_eq!(class.growth_coefficient(0.999), 0.578);
        assert_eq!(class.growth_coefficient(1.0), 0.386);
        assert_eq!(SensitivityClass::VerySensitive.growth_coefficient(0.0), 1.0);
        assert_eq!(SensitivityClass::VerySensitive.growth_coefficient(3.0), 2.0);
        assert_eq!(SensitivityClass::Resistant.growth_coefficient(2.0), 0.014);
    }

    #[test]
    fn test_maximum_index_never_negative() {
        let capacity = SensitivityClass::Resistant.capacity();
        assert_eq!(capacity.maximum_index(0.0), 0.0);
        assert_eq!(capacity.maximum_index(10.0), 0.0);
        assert_eq!(capacity.maximum_index(1.0), 2.0);

        let vs = SensitivityClass::VerySensitive.capacity();
        assert_eq!(vs.maximum_index(1.0), 6.0);
        assert_eq!(vs.maximum_index(0.0), 1.0);
    }

    #[test]
    fn test_serde_uses_short_codes() {
        let json = serde_json::to_string(&SensitivityClass::ModeratelyResistant).unwrap();
        assert_eq!(json, "\"mr\"");
        let class: SensitivityClass = serde_json::from_str("\"very_sensitive\"").unwrap();
        assert_eq!(class, SensitivityClass::VerySensitive);
    }
}
