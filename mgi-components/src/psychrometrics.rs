//! Moist air helpers used alongside the mould index
//!
//! These operate on whole series and carry no state.

use crate::components::{
    critical_relative_humidity, MAX_GROWTH_TEMPERATURE, SATURATED_RELATIVE_HUMIDITY,
};
use crate::sensitivity::SensitivityClass;
use mgi_core::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// Specific gas constant of water vapour
/// unit: J / (kg K)
pub const GAS_CONSTANT_WATER_VAPOUR: FloatValue = 461.5;

/// Offset between degC and K
pub const ZERO_CELSIUS: FloatValue = 273.15;

/// Phase the saturation pressure is taken over below freezing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Liquid water at all temperatures
    Water,
    /// Ice below 0 degC, water above
    #[default]
    Ice,
}

/// Saturation vapour pressure
/// unit: Pa
pub fn saturation_vapour_pressure(temperature: FloatValue, phase: Phase) -> FloatValue {
    if phase == Phase::Ice && temperature < 0.0 {
        610.5 * ((21.875 * temperature) / (265.5 + temperature)).exp()
    } else {
        610.5 * ((17.269 * temperature) / (237.3 + temperature)).exp()
    }
}

/// Saturation vapour density
/// unit: g / m^3
pub fn saturation_vapour_density(temperature: FloatValue, phase: Phase) -> FloatValue {
    let pressure = saturation_vapour_pressure(temperature, phase);
    1000.0 * pressure / (GAS_CONSTANT_WATER_VAPOUR * (ZERO_CELSIUS + temperature))
}

/// Critical relative humidity series for a very sensitive material
///
/// Hours below freezing or above the growth range are saturated (100 %) so
/// they never plot as risky.
pub fn critical_relative_humidity_series(temperature: &[FloatValue]) -> Vec<FloatValue> {
    temperature
        .iter()
        .map(|&t| {
            if t > MAX_GROWTH_TEMPERATURE {
                SATURATED_RELATIVE_HUMIDITY
            } else {
                critical_relative_humidity(t, SensitivityClass::VerySensitive)
            }
        })
        .collect()
}
