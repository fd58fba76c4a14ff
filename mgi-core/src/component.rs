//! Stepping interface shared by growth models.
//!
//! A growth model only describes a single hourly transition. The provided
//! methods fold that transition over a [`ClimateSeries`] so every model gets
//! the same output contract: one value per input hour, starting from the
//! initial state, with `N - 1` update steps for `N` hours.

use crate::errors::MGIResult;
use crate::state::SimulationState;
use crate::timeseries::{ClimateSeries, FloatValue, Observation};
use std::fmt::Debug;

pub trait GrowthModel: Debug + Send + Sync {
    /// State at the start of a run
    fn initial_state(&self) -> SimulationState {
        SimulationState::initial()
    }

    /// Advance the state by one hour using the conditions observed during that hour
    ///
    /// `step` is the zero-based hour being consumed and is only used for error reporting.
    fn step(
        &self,
        step: usize,
        state: &SimulationState,
        observation: &Observation,
    ) -> MGIResult<SimulationState>;

    /// Full state trajectory for a climate series
    ///
    /// The first element is the initial state. The final hour of the series
    /// never produces a following state.
    fn trajectory(&self, climate: &ClimateSeries) -> MGIResult<Vec<SimulationState>> {
        let n = climate.len();
        let initial = self.initial_state();

        let mut states = Vec::with_capacity(n);
        states.push(initial);

        climate
            .observations()
            .take(n.saturating_sub(1))
            .enumerate()
            .try_fold(initial, |state, (step, observation)| -> MGIResult<_> {
                let next = self.step(step, &state, &observation)?;
                states.push(next);
                Ok(next)
            })?;

        Ok(states)
    }

    /// Index series for a climate series, one value per input hour
    fn run(&self, climate: &ClimateSeries) -> MGIResult<Vec<FloatValue>> {
        log::debug!("Running {:?} over {} hours", self, climate.len());
        Ok(self
            .trajectory(climate)?
            .into_iter()
            .map(|state| state.index)
            .collect())
    }
}
