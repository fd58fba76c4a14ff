//! Mould growth index components
//!
//! - `components`: the [`components::MouldIndex`] model and the [`components::simulate`] entry point
//! - `sensitivity`: material sensitivity classes and their kinetics tables
//! - `parameters`: serialisable model parameters
//! - `psychrometrics`: stateless moist air helpers
//! - `probes`: probe point tables and parallel batch runs

pub mod components;
pub mod parameters;
pub mod probes;
pub mod psychrometrics;
pub mod sensitivity;
