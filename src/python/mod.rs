use mgi_components::components::MouldIndex;
use mgi_components::parameters::MouldIndexParameters;
use mgi_components::psychrometrics::{self, Phase};
use mgi_components::sensitivity::SensitivityClass;
use mgi_core::component::GrowthModel;
use mgi_core::errors::MGIError;
use mgi_core::timeseries::ClimateSeries;
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(err: MGIError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Simulate the mould index for hourly temperature [degC] and relative humidity [%]
///
/// Classes are given as short codes: "vs", "s", "mr" or "r".
#[pyfunction]
#[pyo3(signature = (temperature, relative_humidity, growth_speed_class="vs", capacity_class="vs", material_factor=0.5))]
fn simulate<'py>(
    py: Python<'py>,
    temperature: PyReadonlyArray1<'py, f64>,
    relative_humidity: PyReadonlyArray1<'py, f64>,
    growth_speed_class: &str,
    capacity_class: &str,
    material_factor: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let growth_speed_class: SensitivityClass = growth_speed_class.parse().map_err(to_py_err)?;
    let capacity_class: SensitivityClass = capacity_class.parse().map_err(to_py_err)?;

    let climate = ClimateSeries::from_views(temperature.as_array(), relative_humidity.as_array())
        .map_err(to_py_err)?;
    let model = MouldIndex::from_parameters(MouldIndexParameters::new(
        growth_speed_class,
        capacity_class,
        material_factor,
    ))
    .map_err(to_py_err)?;

    let index = py.allow_threads(|| model.run(&climate)).map_err(to_py_err)?;
    Ok(PyArray1::from_vec_bound(py, index))
}

/// Critical relative humidity [%] of a very sensitive material for each temperature
#[pyfunction]
fn critical_relative_humidity<'py>(
    py: Python<'py>,
    temperature: PyReadonlyArray1<'py, f64>,
) -> Bound<'py, PyArray1<f64>> {
    let temperature = temperature.as_array().to_vec();
    PyArray1::from_vec_bound(
        py,
        psychrometrics::critical_relative_humidity_series(&temperature),
    )
}

/// Saturation vapour density [g/m3], over ice below freezing unless `ice` is false
#[pyfunction]
#[pyo3(signature = (temperature, ice=true))]
fn saturation_vapour_density(temperature: f64, ice: bool) -> f64 {
    let phase = if ice { Phase::Ice } else { Phase::Water };
    psychrometrics::saturation_vapour_density(temperature, phase)
}

#[pymodule]
#[pyo3(name = "_lib")]
fn mgi(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    m.add_function(wrap_pyfunction!(critical_relative_humidity, m)?)?;
    m.add_function(wrap_pyfunction!(saturation_vapour_density, m)?)?;
    Ok(())
}
