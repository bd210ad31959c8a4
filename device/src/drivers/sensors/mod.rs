//! Drivers for the monitor's two sensors and the compensation loop between them.

pub mod error;
pub mod register;

pub mod bme280;
pub mod ccs811;

pub mod bridge;

pub use error::{LogicError, SensorError};
