use crate::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// State carried from one hour to the next during a simulation
///
/// The state is created fresh for every run and threaded through the
/// recurrence by value. Nothing is shared between runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Current mould index (dimensionless, never negative)
    pub index: FloatValue,
    /// Number of consecutive hours without growth conditions
    ///
    /// Reset to zero on every growth hour.
    pub hours_since_recession_start: u32,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::initial()
    }
}

impl SimulationState {
    /// Clean surface with no recession history
    pub fn initial() -> Self {
        Self {
            index: 0.0,
            hours_since_recession_start: 0,
        }
    }

    /// State after a growth hour
    pub fn grown(&self, rate: FloatValue, dt: FloatValue) -> Self {
        Self {
            index: (self.index + rate * dt).max(0.0),
            hours_since_recession_start: 0,
        }
    }

    /// State after an hour without growth conditions
    pub fn receded(&self, rate: FloatValue, dt: FloatValue) -> Self {
        Self {
            index: (self.index + rate * dt).max(0.0),
            hours_since_recession_start: self.hours_since_recession_start.saturating_add(1),
        }
    }
}
