//! Summary indicators computed from simulated or measured hourly series.

use crate::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// Relative humidity threshold commonly used for the hours-above indicator
/// unit: %
pub const DEFAULT_RH_THRESHOLD: FloatValue = 95.0;

/// Largest value of a series, `None` if the series is empty
pub fn max_index(series: &[FloatValue]) -> Option<FloatValue> {
    series.iter().copied().reduce(FloatValue::max)
}

/// Number of samples strictly above `threshold`
pub fn hours_above(series: &[FloatValue], threshold: FloatValue) -> usize {
    series.iter().filter(|v| **v > threshold).count()
}

/// Indicators for a single probe point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSummary {
    pub name: String,
    /// Maximum mould index over the period
    pub max_index: FloatValue,
    /// Hours with relative humidity above [`IndicatorSummary::rh_threshold`]
    pub hours_above_rh_threshold: usize,
    pub rh_threshold: FloatValue,
}

impl IndicatorSummary {
    pub fn from_series(
        name: impl Into<String>,
        index: &[FloatValue],
        relative_humidity: &[FloatValue],
        rh_threshold: FloatValue,
    ) -> Self {
        Self {
            name: name.into(),
            max_index: max_index(index).unwrap_or(0.0),
            hours_above_rh_threshold: hours_above(relative_humidity, rh_threshold),
            rh_threshold,
        }
    }
}
