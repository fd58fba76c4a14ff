mod mould_index;

pub use mould_index::{
    base_decline_rate, critical_relative_humidity, simulate, MouldIndex,
    MAX_GROWTH_TEMPERATURE, MIN_GROWTH_TEMPERATURE, SATURATED_RELATIVE_HUMIDITY,
};
