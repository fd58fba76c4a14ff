//! Core types for hourly mould growth index simulations.
//!
//! - [`timeseries`]: validated hourly climate input
//! - [`state`]: the state threaded through a simulation
//! - [`component`]: the [`component::GrowthModel`] stepping trait
//! - [`summary`]: indicators derived from output series

pub mod component;
mod example_components;
pub mod state;
pub mod summary;
pub mod timeseries;

pub mod errors;
