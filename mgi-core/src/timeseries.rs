//! Hourly climate series fed to growth models.
//!
//! A [`ClimateSeries`] is the validated pair of temperature and relative humidity
//! series at a single probe point. Upstream tooling is responsible for aligning
//! timestamps to an hourly cadence and interpolating gaps; this module only
//! enforces the contract the models rely on.

use crate::errors::{MGIError, MGIResult};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

pub type FloatValue = f64;

/// Length of one model time step in hours.
pub const TIME_STEP_HOURS: FloatValue = 1.0;

/// A single hourly sample at a probe point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Surface temperature
    /// unit: degC
    pub temperature: FloatValue,
    /// Relative humidity
    /// unit: % (0-100)
    pub relative_humidity: FloatValue,
}

impl Observation {
    pub fn new(temperature: FloatValue, relative_humidity: FloatValue) -> Self {
        Self {
            temperature,
            relative_humidity,
        }
    }
}

/// Validated hourly temperature and relative humidity series
///
/// Both series have the same, non-zero length and contain only finite values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateSeries {
    temperature: Array1<FloatValue>,
    relative_humidity: Array1<FloatValue>,
}

impl ClimateSeries {
    /// Build a series from owned vectors
    ///
    /// Fails with [`MGIError::InvalidInput`] if either series is empty, the lengths
    /// differ or a value is NaN or infinite.
    pub fn new(
        temperature: Vec<FloatValue>,
        relative_humidity: Vec<FloatValue>,
    ) -> MGIResult<Self> {
        Self::from_arrays(
            Array1::from_vec(temperature),
            Array1::from_vec(relative_humidity),
        )
    }

    /// Build a series by copying borrowed slices
    pub fn from_slices(
        temperature: &[FloatValue],
        relative_humidity: &[FloatValue],
    ) -> MGIResult<Self> {
        Self::new(temperature.to_vec(), relative_humidity.to_vec())
    }

    /// Build a series from array views, e.g. ones borrowed from numpy
    pub fn from_views(
        temperature: ArrayView1<FloatValue>,
        relative_humidity: ArrayView1<FloatValue>,
    ) -> MGIResult<Self> {
        Self::from_arrays(temperature.to_owned(), relative_humidity.to_owned())
    }

    fn from_arrays(
        temperature: Array1<FloatValue>,
        relative_humidity: Array1<FloatValue>,
    ) -> MGIResult<Self> {
        if temperature.is_empty() || relative_humidity.is_empty() {
            return Err(MGIError::InvalidInput(
                "climate series must contain at least one hour".to_string(),
            ));
        }
        if temperature.len() != relative_humidity.len() {
            return Err(MGIError::InvalidInput(format!(
                "temperature length {} does not match relative humidity length {}",
                temperature.len(),
                relative_humidity.len()
            )));
        }
        check_finite("temperature", temperature.view())?;
        check_finite("relative humidity", relative_humidity.view())?;

        Ok(Self {
            temperature,
            relative_humidity,
        })
    }

    /// Number of hourly samples
    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    /// Always `false` for a validated series, provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }

    pub fn temperature(&self) -> ArrayView1<FloatValue> {
        self.temperature.view()
    }

    pub fn relative_humidity(&self) -> ArrayView1<FloatValue> {
        self.relative_humidity.view()
    }

    /// Observation at a given hour, if in range
    pub fn get(&self, hour: usize) -> Option<Observation> {
        Some(Observation::new(
            *self.temperature.get(hour)?,
            *self.relative_humidity.get(hour)?,
        ))
    }

    /// Iterate over the hourly observations in time order
    pub fn observations(&self) -> impl Iterator<Item = Observation> + '_ {
        self.temperature
            .iter()
            .zip(self.relative_humidity.iter())
            .map(|(t, rh)| Observation::new(*t, *rh))
    }
}

fn check_finite(name: &str, values: ArrayView1<FloatValue>) -> MGIResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(idx) => Err(MGIError::InvalidInput(format!(
            "{} contains a non-finite value at hour {} ({})",
            name, idx, values[idx]
        ))),
        None => Ok(()),
    }
}
