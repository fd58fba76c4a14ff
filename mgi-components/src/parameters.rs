//! Mould index parameters

use crate::sensitivity::SensitivityClass;
use mgi_core::errors::{MGIError, MGIResult};
use mgi_core::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the mould index component
///
/// Defaults describe untreated wood: very sensitive for both growth speed and
/// capacity with a material factor of 0.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MouldIndexParameters {
    /// Class controlling the growth coefficient and the minimum critical humidity
    pub growth_speed_class: SensitivityClass,
    /// Class controlling the maximum attainable index
    pub capacity_class: SensitivityClass,
    /// Multiplier applied to the decline rate (dimensionless, > 0).
    /// Typical values: wood 0.5, mineral wool and vapour barriers 0.1
    pub material_factor: FloatValue,
}

impl Default for MouldIndexParameters {
    fn default() -> Self {
        Self {
            growth_speed_class: SensitivityClass::VerySensitive,
            capacity_class: SensitivityClass::VerySensitive,
            material_factor: 0.5,
        }
    }
}

impl MouldIndexParameters {
    pub fn new(
        growth_speed_class: SensitivityClass,
        capacity_class: SensitivityClass,
        material_factor: FloatValue,
    ) -> Self {
        Self {
            growth_speed_class,
            capacity_class,
            material_factor,
        }
    }

    /// Check the material factor is a positive, finite number
    pub fn validate(&self) -> MGIResult<()> {
        if !(self.material_factor.is_finite() && self.material_factor > 0.0) {
            return Err(MGIError::InvalidParameter(format!(
                "material factor must be positive, got {}",
                self.material_factor
            )));
        }
        Ok(())
    }
}
