//! Mould growth index simulation for building envelope surfaces.
//!
//! Hourly surface temperature and relative humidity at a probe point are turned
//! into a mould index (0 for a clean surface, around 6 for heavy growth).
//!
//! ```rust
//! use mgi::{simulate, SensitivityClass};
//!
//! let temperature = vec![22.0; 48];
//! let relative_humidity = vec![95.0; 48];
//! let index = simulate(
//!     &temperature,
//!     &relative_humidity,
//!     SensitivityClass::VerySensitive,
//!     SensitivityClass::VerySensitive,
//!     0.5,
//! )
//! .unwrap();
//!
//! assert_eq!(index.len(), 48);
//! assert_eq!(index[0], 0.0);
//! ```
//!
//! The Python extension module is built with the `python` feature.

pub use mgi_components::components::{simulate, MouldIndex};
pub use mgi_components::parameters::MouldIndexParameters;
pub use mgi_components::probes::{run_probe_points, ProbePoint, ProbeResult, ProbeTable};
pub use mgi_components::sensitivity::SensitivityClass;
pub use mgi_core::component::GrowthModel;
pub use mgi_core::errors::{MGIError, MGIResult};
pub use mgi_core::state::SimulationState;
pub use mgi_core::summary::IndicatorSummary;
pub use mgi_core::timeseries::{ClimateSeries, FloatValue, Observation};

pub use mgi_components;
pub use mgi_core;

#[cfg(feature = "python")]
mod python;
