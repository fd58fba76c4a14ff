//! Mould growth index component
//!
//! Turns hourly surface temperature and relative humidity into a mould index
//! using class-dependent growth and decline kinetics.
//!
//! # Growth
//!
//! Growth happens when $0 < T < 50$ and $RH \ge RH_{crit}$, where
//!
//! $$ RH_{crit} = \max(-0.00267 T^3 + 0.16 T^2 - 3.13 T + 100, RH_{min}) $$
//!
//! for $T \ge 0$ and $RH_{crit} = 100$ below freezing. The growth rate is
//!
//! $$ \frac{dM}{dt} = \frac{k_1 k_2}{7 \exp(-0.68 \ln T - 13.9 \ln RH + 66.02) \cdot 24} $$
//!
//! with $k_2 = \max(1 - \exp(2.3 (M - M_{max})), 0)$ limiting the index to the
//! capacity of the material.
//!
//! # Decline
//!
//! Outside growth conditions the index declines at a rate depending on how
//! long the recession has lasted, scaled by the material factor. The index is
//! clamped at zero but has no upper bound; $k_2$ is what keeps it below
//! $M_{max}$.

use crate::parameters::MouldIndexParameters;
use crate::sensitivity::{SensitivityClass, GROWTH_REGIME_THRESHOLD};
use mgi_core::component::GrowthModel;
use mgi_core::errors::{MGIError, MGIResult};
use mgi_core::state::SimulationState;
use mgi_core::timeseries::{ClimateSeries, FloatValue, Observation, TIME_STEP_HOURS};
use serde::{Deserialize, Serialize};

/// Relative humidity of saturated air
/// unit: %
pub const SATURATED_RELATIVE_HUMIDITY: FloatValue = 100.0;

/// Temperature range (exclusive) in which mould can grow
/// unit: degC
pub const MIN_GROWTH_TEMPERATURE: FloatValue = 0.0;
pub const MAX_GROWTH_TEMPERATURE: FloatValue = 50.0;

// Critical relative humidity polynomial coefficients
const RH_CRIT_CUBIC: FloatValue = -0.00267;
const RH_CRIT_QUADRATIC: FloatValue = 0.16;
const RH_CRIT_LINEAR: FloatValue = -3.13;
const RH_CRIT_CONSTANT: FloatValue = 100.0;

// Growth rate coefficients
const SATURATION_EXPONENT: FloatValue = 2.3;
const LN_TEMPERATURE_COEFFICIENT: FloatValue = -0.68;
const LN_HUMIDITY_COEFFICIENT: FloatValue = -13.9;
const GROWTH_TIME_CONSTANT: FloatValue = 66.02;
const GROWTH_WEEK_DAYS: FloatValue = 7.0;
const HOURS_PER_DAY: FloatValue = 24.0;

// Decline rates per hour
const EARLY_DECLINE_RATE: FloatValue = -0.032 / HOURS_PER_DAY;
const LATE_DECLINE_RATE: FloatValue = -0.016 / HOURS_PER_DAY;
const EARLY_DECLINE_HOURS: u32 = 6;
const DORMANT_DECLINE_HOURS: u32 = 24;

/// Critical relative humidity for a temperature and growth speed class
/// unit: %
pub fn critical_relative_humidity(
    temperature: FloatValue,
    growth_speed_class: SensitivityClass,
) -> FloatValue {
    if temperature < 0.0 {
        return SATURATED_RELATIVE_HUMIDITY;
    }
    let t = temperature;
    let polynomial = RH_CRIT_CUBIC * t.powi(3)
        + RH_CRIT_QUADRATIC * t.powi(2)
        + RH_CRIT_LINEAR * t
        + RH_CRIT_CONSTANT;
    polynomial.max(growth_speed_class.minimum_relative_humidity())
}

/// Base decline rate (before the material factor) after `hours` of recession
/// unit: 1/h
pub fn base_decline_rate(hours: u32) -> FloatValue {
    if hours <= EARLY_DECLINE_HOURS {
        EARLY_DECLINE_RATE
    } else if hours <= DORMANT_DECLINE_HOURS {
        0.0
    } else {
        LATE_DECLINE_RATE
    }
}

/// Mould growth index model for a single material classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MouldIndexParameters", into = "MouldIndexParameters")]
pub struct MouldIndex {
    parameters: MouldIndexParameters,
}

impl TryFrom<MouldIndexParameters> for MouldIndex {
    type Error = MGIError;

    fn try_from(parameters: MouldIndexParameters) -> Result<Self, Self::Error> {
        Self::from_parameters(parameters)
    }
}

impl From<MouldIndex> for MouldIndexParameters {
    fn from(value: MouldIndex) -> Self {
        value.parameters
    }
}

impl MouldIndex {
    /// Create a new component, validating the material factor
    pub fn from_parameters(parameters: MouldIndexParameters) -> MGIResult<Self> {
        parameters.validate()?;
        Ok(Self { parameters })
    }

    pub fn parameters(&self) -> &MouldIndexParameters {
        &self.parameters
    }

    /// Critical relative humidity using this model's growth speed class
    pub fn critical_relative_humidity(&self, temperature: FloatValue) -> FloatValue {
        critical_relative_humidity(temperature, self.parameters.growth_speed_class)
    }

    /// Whether an observation supports growth
    pub fn growth_conditions(&self, observation: &Observation) -> bool {
        let rh_crit = self.critical_relative_humidity(observation.temperature);
        is_growth_hour(observation, rh_crit)
    }

    /// Growth rate for a growth hour
    ///
    /// Errors if `rh_crit` is saturated or the observation would put a
    /// non-positive value into a logarithm. Neither can happen for an
    /// observation that satisfies [`MouldIndex::growth_conditions`].
    /// unit: 1/h
    pub fn growth_rate(
        &self,
        step: usize,
        index: FloatValue,
        observation: &Observation,
        rh_crit: FloatValue,
    ) -> MGIResult<FloatValue> {
        let denominator = rh_crit - SATURATED_RELATIVE_HUMIDITY;
        if denominator == 0.0 {
            return Err(MGIError::NumericDomainError {
                step,
                quantity: "critical relative humidity".to_string(),
                value: rh_crit,
            });
        }
        let humidity_excess = (rh_crit - observation.relative_humidity) / denominator;
        let maximum_index = self
            .parameters
            .capacity_class
            .capacity()
            .maximum_index(humidity_excess);

        let k1 = self.parameters.growth_speed_class.growth_coefficient(index);
        let k2 = (1.0 - (SATURATION_EXPONENT * (index - maximum_index)).exp()).max(0.0);

        let ln_temperature = checked_ln(step, "temperature", observation.temperature)?;
        let ln_humidity = checked_ln(step, "relative humidity", observation.relative_humidity)?;
        let exponent = LN_TEMPERATURE_COEFFICIENT * ln_temperature
            + LN_HUMIDITY_COEFFICIENT * ln_humidity
            + GROWTH_TIME_CONSTANT;

        Ok(k1 * k2 / (GROWTH_WEEK_DAYS * exponent.exp() * HOURS_PER_DAY))
    }

    /// Decline rate after `hours` of recession, including the material factor
    /// unit: 1/h
    pub fn decline_rate(&self, hours: u32) -> FloatValue {
        self.parameters.material_factor * base_decline_rate(hours)
    }
}

fn is_growth_hour(observation: &Observation, rh_crit: FloatValue) -> bool {
    observation.temperature > MIN_GROWTH_TEMPERATURE
        && observation.temperature < MAX_GROWTH_TEMPERATURE
        && observation.relative_humidity >= rh_crit
}

fn checked_ln(step: usize, quantity: &str, value: FloatValue) -> MGIResult<FloatValue> {
    if value <= 0.0 {
        return Err(MGIError::NumericDomainError {
            step,
            quantity: quantity.to_string(),
            value,
        });
    }
    Ok(value.ln())
}

impl GrowthModel for MouldIndex {
    fn step(
        &self,
        step: usize,
        state: &SimulationState,
        observation: &Observation,
    ) -> MGIResult<SimulationState> {
        let rh_crit = self.critical_relative_humidity(observation.temperature);

        if is_growth_hour(observation, rh_crit) {
            let rate = self.growth_rate(step, state.index, observation, rh_crit)?;
            let next = state.grown(rate, TIME_STEP_HOURS);
            if state.index < GROWTH_REGIME_THRESHOLD && next.index >= GROWTH_REGIME_THRESHOLD {
                log::trace!("Mould index reached {} at step {}", next.index, step);
            }
            Ok(next)
        } else {
            let hours = state.hours_since_recession_start.saturating_add(1);
            Ok(state.receded(self.decline_rate(hours), TIME_STEP_HOURS))
        }
    }
}

/// Simulate the mould index for one probe point
///
/// Returns one value per input hour, the first being the initial index of zero.
/// Fails with [`MGIError::InvalidInput`] for empty, mismatched or non-finite
/// series and with [`MGIError::InvalidParameter`] for a non-positive material factor.
pub fn simulate(
    temperature: &[FloatValue],
    relative_humidity: &[FloatValue],
    growth_speed_class: SensitivityClass,
    capacity_class: SensitivityClass,
    material_factor: FloatValue,
) -> MGIResult<Vec<FloatValue>> {
    let climate = ClimateSeries::from_slices(temperature, relative_humidity)?;
    let model = MouldIndex::from_parameters(MouldIndexParameters::new(
        growth_speed_class,
        capacity_class,
        material_factor,
    ))?;
    model.run(&climate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use is_close::is_close;

    fn wood() -> MouldIndex {
        MouldIndex::from_parameters(MouldIndexParameters::default()).unwrap()
    }

    #[test]
    fn test_critical_relative_humidity() {
        let class = SensitivityClass::VerySensitive;
        assert_eq!(critical_relative_humidity(-0.1, class), 100.0);
        assert_eq!(critical_relative_humidity(0.0, class), 100.0);
        assert!(is_close!(critical_relative_humidity(5.0, class), 88.01625));
        assert!(is_close!(critical_relative_humidity(22.0, class), 80.14984));
        // Polynomial drops below the class minimum
        assert_eq!(critical_relative_humidity(30.0, class), 80.0);
        assert_eq!(
            critical_relative_humidity(30.0, SensitivityClass::Resistant),
            85.0
        );
    }

    #[test]
    fn test_base_decline_rate_phases() {
        assert_relative_eq!(base_decline_rate(1), -0.032 / 24.0);
        assert_relative_eq!(base_decline_rate(6), -0.032 / 24.0);
        assert_eq!(base_decline_rate(7), 0.0);
        assert_eq!(base_decline_rate(24), 0.0);
        assert_relative_eq!(base_decline_rate(25), -0.016 / 24.0);
    }

    #[test]
    fn test_growth_conditions() {
        let model = wood();
        assert!(model.growth_conditions(&Observation::new(22.0, 95.0)));
        // Boundary humidity counts as growth
        assert!(model.growth_conditions(&Observation::new(30.0, 80.0)));
        assert!(!model.growth_conditions(&Observation::new(30.0, 79.9)));
        assert!(!model.growth_conditions(&Observation::new(0.0, 100.0)));
        assert!(!model.growth_conditions(&Observation::new(50.0, 100.0)));
        assert!(!model.growth_conditions(&Observation::new(-5.0, 100.0)));
    }

    #[test]
    fn test_single_growth_step() {
        let model = wood();
        let next = model
            .step(0, &SimulationState::initial(), &Observation::new(22.0, 95.0))
            .unwrap();
        assert_relative_eq!(next.index, 0.0032045806164770906, max_relative = 1e-9);
        assert_eq!(next.hours_since_recession_start, 0);
    }

    #[test]
    fn test_growth_step_resets_recession_counter() {
        let model = wood();
        let state = SimulationState {
            index: 0.5,
            hours_since_recession_start: 40,
        };
        let next = model
            .step(7, &state, &Observation::new(30.0, 80.0))
            .unwrap();
        assert_eq!(next.hours_since_recession_start, 0);
        assert!(next.index > state.index);
    }

    #[test]
    fn test_decline_step_uses_material_factor() {
        let model = MouldIndex::from_parameters(MouldIndexParameters::new(
            SensitivityClass::ModeratelyResistant,
            SensitivityClass::ModeratelyResistant,
            0.1,
        ))
        .unwrap();
        let state = SimulationState {
            index: 1.0,
            hours_since_recession_start: 0,
        };
        let next = model
            .step(0, &state, &Observation::new(10.0, 50.0))
            .unwrap();
        assert_relative_eq!(next.index, 1.0 - 0.1 * 0.032 / 24.0, epsilon = 1e-12);
        assert_eq!(next.hours_since_recession_start, 1);
    }

    #[test]
    fn test_zero_capacity_growth_hour_holds_index() {
        // u = 0 gives Mmax = A = 0 for moderately resistant capacity
        let model = MouldIndex::from_parameters(MouldIndexParameters::new(
            SensitivityClass::Sensitive,
            SensitivityClass::ModeratelyResistant,
            0.5,
        ))
        .unwrap();
        let state = SimulationState {
            index: 0.0,
            hours_since_recession_start: 12,
        };
        let next = model
            .step(0, &state, &Observation::new(30.0, 80.0))
            .unwrap();
        assert_eq!(next.index, 0.0);
        assert_eq!(next.hours_since_recession_start, 0);
    }

    #[test]
    fn test_growth_rate_rejects_saturated_critical_humidity() {
        let err = wood()
            .growth_rate(3, 0.0, &Observation::new(22.0, 100.0), 100.0)
            .unwrap_err();
        assert!(matches!(
            err,
            MGIError::NumericDomainError { step: 3, .. }
        ));
    }

    #[test]
    fn test_growth_rate_rejects_zero_humidity() {
        let err = wood()
            .growth_rate(5, 0.0, &Observation::new(22.0, 0.0), 80.0)
            .unwrap_err();
        match err {
            MGIError::NumericDomainError {
                step,
                quantity,
                value,
            } => {
                assert_eq!(step, 5);
                assert_eq!(quantity, "relative humidity");
                assert_eq!(value, 0.0);
            }
            other => panic!("Expected NumericDomainError, got {:?}", other),
        }
    }

    #[test]
    fn test_growth_rate_rejects_non_positive_temperature() {
        let err = wood()
            .growth_rate(0, 0.0, &Observation::new(0.0, 95.0), 80.0)
            .unwrap_err();
        assert!(matches!(err, MGIError::NumericDomainError { .. }));
    }

    #[test]
    fn test_simulate_length_and_start() {
        let out = simulate(
            &[22.0; 24],
            &[95.0; 24],
            SensitivityClass::VerySensitive,
            SensitivityClass::VerySensitive,
            0.5,
        )
        .unwrap();
        assert_eq!(out.len(), 24);
        assert_eq!(out[0], 0.0);
    }

    #[test]
    fn test_simulate_rejects_mismatched_lengths() {
        let err = simulate(
            &[22.0; 10],
            &[95.0; 11],
            SensitivityClass::VerySensitive,
            SensitivityClass::VerySensitive,
            0.5,
        )
        .unwrap_err();
        assert!(matches!(err, MGIError::InvalidInput(_)));
    }

    #[test]
    fn test_simulate_rejects_non_positive_material_factor() {
        let err = simulate(
            &[22.0; 10],
            &[95.0; 10],
            SensitivityClass::VerySensitive,
            SensitivityClass::VerySensitive,
            0.0,
        )
        .unwrap_err();
        assert!(matches!(err, MGIError::InvalidParameter(_)));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let model = wood();
        let json = serde_json::to_string(&model).unwrap();
        let restored: MouldIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, model);
    }

    #[test]
    fn test_deserialization_validates_material_factor() {
        let json = r#"{"growth_speed_class": "vs", "capacity_class": "vs", "material_factor": -1.0}"#;
        assert!(serde_json::from_str::<MouldIndex>(json).is_err());
    }
}
