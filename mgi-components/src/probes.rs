//! Probe point tables and batch simulation
//!
//! A building assembly is usually monitored at several probe points, each with
//! its own material classification. Probe tables are written in TOML:
//!
//! ```toml
//! [[probe]]
//! name = "wood_e_up"
//! growth_speed_class = "vs"
//! capacity_class = "vs"
//! material_factor = 0.5
//! ```
//!
//! Every probe point is simulated independently, so batches run in parallel.

use crate::components::MouldIndex;
use crate::parameters::MouldIndexParameters;
use crate::sensitivity::SensitivityClass;
use mgi_core::component::GrowthModel;
use mgi_core::errors::{MGIError, MGIResult};
use mgi_core::summary::IndicatorSummary;
use mgi_core::timeseries::{ClimateSeries, FloatValue};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A monitored location and the classification of its material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbePoint {
    pub name: String,
    pub growth_speed_class: SensitivityClass,
    pub capacity_class: SensitivityClass,
    pub material_factor: FloatValue,
}

impl ProbePoint {
    pub fn new(
        name: impl Into<String>,
        growth_speed_class: SensitivityClass,
        capacity_class: SensitivityClass,
        material_factor: FloatValue,
    ) -> Self {
        Self {
            name: name.into(),
            growth_speed_class,
            capacity_class,
            material_factor,
        }
    }

    pub fn parameters(&self) -> MouldIndexParameters {
        MouldIndexParameters::new(
            self.growth_speed_class,
            self.capacity_class,
            self.material_factor,
        )
    }

    /// Mould index model for this probe point
    pub fn model(&self) -> MGIResult<MouldIndex> {
        MouldIndex::from_parameters(self.parameters()).map_err(|e| match e {
            MGIError::InvalidParameter(msg) => {
                MGIError::InvalidParameter(format!("probe '{}': {}", self.name, msg))
            }
            other => other,
        })
    }
}

/// Ordered collection of probe points with unique names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeTable {
    #[serde(rename = "probe", default)]
    points: Vec<ProbePoint>,
}

impl Default for ProbeTable {
    /// Standard probe points of a ventilated brick facade with a timber frame
    fn default() -> Self {
        use SensitivityClass::*;
        Self {
            points: vec![
                ProbePoint::new("wood_e_up", VerySensitive, VerySensitive, 0.5),
                ProbePoint::new("wb_i_up", ModeratelyResistant, ModeratelyResistant, 0.1),
                ProbePoint::new("ins_i_up", ModeratelyResistant, ModeratelyResistant, 0.1),
                ProbePoint::new("wood_m_up", VerySensitive, VerySensitive, 0.5),
                ProbePoint::new("wood_i_up", VerySensitive, VerySensitive, 0.5),
            ],
        }
    }
}

impl ProbeTable {
    /// Build a table, checking names are unique and parameters are valid
    pub fn new(points: Vec<ProbePoint>) -> MGIResult<Self> {
        let table = Self { points };
        table.validate()?;
        Ok(table)
    }

    /// Parse a table from TOML `[[probe]]` entries
    pub fn from_toml_str(content: &str) -> MGIResult<Self> {
        let table: ProbeTable = toml::from_str(content)?;
        table.validate()?;
        Ok(table)
    }

    pub fn to_toml_string(&self) -> MGIResult<String> {
        toml::to_string(self).map_err(|e| MGIError::Config(e.to_string()))
    }

    fn validate(&self) -> MGIResult<()> {
        let mut seen = HashSet::new();
        for point in &self.points {
            if !seen.insert(point.name.as_str()) {
                return Err(MGIError::InvalidParameter(format!(
                    "duplicate probe point '{}'",
                    point.name
                )));
            }
            point.model()?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ProbePoint> {
        self.points.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProbePoint> {
        self.points.iter()
    }
}

/// Outcome of simulating one probe point
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub name: String,
    pub index: MGIResult<Vec<FloatValue>>,
}

impl ProbeResult {
    /// Indicators for this probe point, using the same climate series it was run with
    pub fn summary(
        &self,
        climate: &ClimateSeries,
        rh_threshold: FloatValue,
    ) -> MGIResult<IndicatorSummary> {
        let index = self.index.as_ref().map_err(Clone::clone)?;
        Ok(IndicatorSummary::from_series(
            self.name.clone(),
            index,
            &climate.relative_humidity().to_vec(),
            rh_threshold,
        ))
    }
}

fn run_probe_point(
    point: &ProbePoint,
    climate: Option<&ClimateSeries>,
) -> MGIResult<Vec<FloatValue>> {
    let climate = climate.ok_or_else(|| {
        MGIError::InvalidInput(format!("no climate series for probe '{}'", point.name))
    })?;
    point.model()?.run(climate)
}

/// Simulate every probe point in the table in parallel
///
/// `inputs` maps probe names to their climate series. Results are returned in
/// table order; a failure at one probe point is reported in its own result and
/// does not affect the others.
pub fn run_probe_points(
    table: &ProbeTable,
    inputs: &HashMap<String, ClimateSeries>,
) -> Vec<ProbeResult> {
    log::debug!("Simulating {} probe points", table.len());

    table
        .points
        .par_iter()
        .map(|point| {
            let index = run_probe_point(point, inputs.get(&point.name));
            if let Err(e) = &index {
                log::warn!("Probe point '{}' failed: {}", point.name, e);
            }
            ProbeResult {
                name: point.name.clone(),
                index,
            }
        })
        .collect()
}
