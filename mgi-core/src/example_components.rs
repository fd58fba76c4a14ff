#![allow(dead_code)]

use crate::component::GrowthModel;
use crate::errors::{MGIError, MGIResult};
use crate::state::SimulationState;
use crate::timeseries::{Observation, TIME_STEP_HOURS};

/// Model with a fixed hourly rate, used to exercise the provided fold
///
/// Positive rates count as growth hours, anything else as recession.
#[derive(Debug, Clone)]
pub(crate) struct ConstantRateModel {
    pub rate: f64,
}

impl GrowthModel for ConstantRateModel {
    fn step(
        &self,
        _step: usize,
        state: &SimulationState,
        _observation: &Observation,
    ) -> MGIResult<SimulationState> {
        if self.rate > 0.0 {
            Ok(state.grown(self.rate, TIME_STEP_HOURS))
        } else {
            Ok(state.receded(self.rate, TIME_STEP_HOURS))
        }
    }
}

/// Model that errors at a given step
#[derive(Debug, Clone)]
pub(crate) struct FailingModel {
    pub fail_at: usize,
}

impl GrowthModel for FailingModel {
    fn step(
        &self,
        step: usize,
        state: &SimulationState,
        observation: &Observation,
    ) -> MGIResult<SimulationState> {
        if step == self.fail_at {
            return Err(MGIError::NumericDomainError {
                step,
                quantity: "temperature".to_string(),
                value: observation.temperature,
            });
        }
        Ok(state.grown(1.0, TIME_STEP_HOURS))
    }
}
